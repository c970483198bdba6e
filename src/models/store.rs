//! # Order Store Seam
//!
//! The engine never talks to persistence directly; the surrounding
//! application implements [`OrderStore`] and the executor consumes one
//! batch-loaded [`OrderGraph`] per run. One load per run, no per-report
//! round-trips.

use crate::error::Result;
use crate::models::order::Order;
use crate::models::report::ReportWithLeases;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// An order together with all of its reports and their leases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderGraph {
    pub order: Order,
    pub reports: Vec<ReportWithLeases>,
}

/// Batch loader for the generation input graph.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Load the order with all reports and leases in one batch.
    /// `Ok(None)` means the order does not exist.
    async fn load_order_graph(&self, order_id: i64) -> Result<Option<OrderGraph>>;
}
