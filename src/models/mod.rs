//! # Data Model
//!
//! Read-only input aggregates for workflow generation. The engine does not
//! own persistence: orders, reports and leases are loaded by the embedding
//! application through the [`OrderStore`] seam and consumed as one
//! [`OrderGraph`] per run.

pub mod lease;
pub mod order;
pub mod report;
pub mod store;

pub use lease::{Agency, Lease};
pub use order::Order;
pub use report::{Report, ReportKind, ReportWithLeases};
pub use store::{OrderGraph, OrderStore};
