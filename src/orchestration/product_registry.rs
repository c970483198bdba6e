//! # Product Configuration Registry
//!
//! Static table of the workflow products the engine can generate. Four
//! concrete products share two generation algorithms: each row binds an
//! (agency, report-kind set) combination to one external project and one
//! [`StrategyKind`] tag. The registry performs no I/O beyond resolving a
//! product's project id from process environment.

use crate::client::traits::ProjectId;
use crate::constants::locators;
use crate::error::{Result, WorkflowError};
use crate::models::lease::Agency;
use crate::models::report::{Report, ReportKind};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which of the two generation algorithms a product runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// One task list per order, one task per unique lease.
    LeaseCentric,
    /// One task list per report, sectioned into department phases.
    ReportCentric,
}

/// A configured workflow product. Defined once at process start, immutable.
#[derive(Debug, Clone, Copy)]
pub struct ProductDefinition {
    pub name: &'static str,
    /// Environment variable naming the external project to generate into.
    pub locator: &'static str,
    pub agency: Agency,
    pub report_kinds: &'static [ReportKind],
    pub strategy: StrategyKind,
}

impl ProductDefinition {
    pub fn matches_report(&self, report: &Report) -> bool {
        self.report_kinds.contains(&report.kind)
    }
}

const ABSTRACT_KINDS: &[ReportKind] = &[
    ReportKind::AbstractBase,
    ReportKind::AbstractSupplemental,
    ReportKind::AbstractDol,
];

static PRODUCTS: [ProductDefinition; 4] = [
    ProductDefinition {
        name: "State Runsheets",
        locator: locators::STATE_RUNSHEET_PROJECT,
        agency: Agency::State,
        report_kinds: &[ReportKind::Runsheet],
        strategy: StrategyKind::LeaseCentric,
    },
    ProductDefinition {
        name: "Federal Runsheets",
        locator: locators::FEDERAL_RUNSHEET_PROJECT,
        agency: Agency::Federal,
        report_kinds: &[ReportKind::Runsheet],
        strategy: StrategyKind::LeaseCentric,
    },
    ProductDefinition {
        name: "State Abstracts",
        locator: locators::STATE_ABSTRACT_PROJECT,
        agency: Agency::State,
        report_kinds: ABSTRACT_KINDS,
        strategy: StrategyKind::ReportCentric,
    },
    ProductDefinition {
        name: "Federal Abstracts",
        locator: locators::FEDERAL_ABSTRACT_PROJECT,
        agency: Agency::Federal,
        report_kinds: ABSTRACT_KINDS,
        strategy: StrategyKind::ReportCentric,
    },
];

/// All configured products, in generation order.
pub fn all_products() -> &'static [ProductDefinition] {
    &PRODUCTS
}

/// Look up a product by display name.
pub fn product_named(name: &str) -> Option<&'static ProductDefinition> {
    PRODUCTS.iter().find(|p| p.name == name)
}

/// Resolve the external project a product generates into. A missing or
/// empty locator is a per-product configuration error; generation must
/// never proceed against an invalid project id.
pub fn resolve_project_id(definition: &ProductDefinition) -> Result<ProjectId> {
    match std::env::var(definition.locator) {
        Ok(value) if !value.trim().is_empty() => {
            debug!(
                product = definition.name,
                locator = definition.locator,
                "Resolved task service project id"
            );
            Ok(ProjectId(value))
        }
        _ => Err(WorkflowError::Configuration(format!(
            "Missing task service project id for {}: set {}",
            definition.name, definition.locator
        ))),
    }
}
