//! # Generation Strategies
//!
//! The two workflow generation algorithms. Products select one through the
//! [`StrategyKind`] tag on their definition; the four concrete products are
//! configuration rows, not subclasses.

use crate::client::traits::{ProjectId, TaskServiceClient};
use crate::error::Result;
use crate::models::order::Order;
use crate::models::report::ReportWithLeases;
use crate::orchestration::product_registry::{ProductDefinition, StrategyKind};
use crate::orchestration::types::GenerationResult;
use async_trait::async_trait;

pub mod lease_centric;
pub mod report_centric;

pub use lease_centric::LeaseCentricStrategy;
pub use report_centric::ReportCentricStrategy;

/// Everything one strategy invocation needs: the order, the product's
/// filtered view of its reports (leases already restricted to the
/// product's agency), and the resolved destination.
pub struct GenerationContext<'a> {
    pub order: &'a Order,
    pub reports: &'a [ReportWithLeases],
    pub product: &'a ProductDefinition,
    pub project_id: &'a ProjectId,
    pub client: &'a dyn TaskServiceClient,
}

/// A workflow generation algorithm.
#[async_trait]
pub trait GenerationStrategy: Send + Sync {
    /// Create the task resources for one product and report its counts.
    async fn generate(&self, ctx: &GenerationContext<'_>) -> Result<GenerationResult>;

    /// Strategy name for logging.
    fn name(&self) -> &'static str;
}

static LEASE_CENTRIC: LeaseCentricStrategy = LeaseCentricStrategy;
static REPORT_CENTRIC: ReportCentricStrategy = ReportCentricStrategy;

/// Resolve the strategy implementation a product's tag points at.
pub fn strategy_for(kind: StrategyKind) -> &'static dyn GenerationStrategy {
    match kind {
        StrategyKind::LeaseCentric => &LEASE_CENTRIC,
        StrategyKind::ReportCentric => &REPORT_CENTRIC,
    }
}
