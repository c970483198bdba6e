#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Titleflow Core Rust
//!
//! Rust implementation of the workflow generation engine for title orders.
//!
//! ## Overview
//!
//! Titleflow Core converts a hierarchical business record — an order
//! containing reports, which reference leases — into nested task-tracking
//! resources (task lists, section groups, individual tasks) in an external
//! project-management service. Per order it detects which configured
//! products apply, runs the matching generation algorithm for each, and
//! merges the per-product results into one aggregate outcome, tolerating
//! partial failure without losing already-created work.
//!
//! ## Architecture
//!
//! Two generation algorithms cover all configured products:
//!
//! - **Lease-centric** (runsheet products): one task list per order, one
//!   task per unique lease number.
//! - **Report-centric** (abstract products): one task list per report,
//!   sectioned into six fixed department phases populated from a data-table
//!   step catalog.
//!
//! Products are configuration rows in a static registry, each tagged with
//! the strategy it runs; persistence, authentication and the real HTTP
//! client live in the embedding application behind the [`models::OrderStore`]
//! and [`client::TaskServiceClient`] seams.
//!
//! ## Module Organization
//!
//! - [`models`] - Read-only order/report/lease aggregates and the store seam
//! - [`formatter`] - Pure description and date-range rendering
//! - [`client`] - Task-service traits, error taxonomy, retry decorator
//! - [`orchestration`] - Registry, step catalog, strategies, executor
//! - [`config`] - Environment-layered runtime configuration
//! - [`error`] - Structured error handling
//! - [`logging`] - Structured tracing setup and helpers
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use titleflow_core::client::{ActingUser, TaskServiceConnections};
//! use titleflow_core::models::OrderStore;
//! use titleflow_core::orchestration::WorkflowExecutor;
//!
//! # async fn example(
//! #     store: Arc<dyn OrderStore>,
//! #     connections: Arc<dyn TaskServiceConnections>,
//! # ) -> titleflow_core::Result<()> {
//! let executor = WorkflowExecutor::new(store, connections);
//! let user = ActingUser { id: 7, display_name: "abstractor".to_string() };
//! let outcome = executor.execute(42, &user).await?;
//! println!("{}", outcome.summary());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatter;
pub mod logging;
pub mod models;
pub mod orchestration;

pub use client::{
    ActingUser, RetryPolicy, RetryingClient, TaskServiceClient, TaskServiceConnections,
    TaskServiceError,
};
pub use config::TitleflowConfig;
pub use error::{Result, WorkflowError};
pub use models::{Agency, Lease, Order, OrderGraph, OrderStore, Report, ReportKind,
    ReportWithLeases};
pub use orchestration::{
    all_products, GenerationResult, OutcomeKind, ProductDefinition, StrategyKind,
    WorkflowExecutor, WorkflowOutcome,
};
