//! # Orchestration Types
//!
//! Shared result types for workflow generation runs. A run produces one
//! transient [`WorkflowOutcome`] that is returned to the caller and
//! discarded; the engine never persists which resources it created.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// What one strategy invocation created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub lists_created: usize,
    pub tasks_created: usize,
}

impl GenerationResult {
    pub fn absorb(&mut self, other: GenerationResult) {
        self.lists_created += other.lists_created;
        self.tasks_created += other.tasks_created;
    }
}

/// Overall shape of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    /// Every applicable product generated successfully.
    Completed,
    /// Some products generated, some failed.
    Partial,
    /// Every applicable product failed.
    Failed,
    /// No product matched this order's reports and leases.
    NothingToDo,
}

/// Aggregate result of one workflow generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowOutcome {
    /// Correlation id carried through all structured logs of this run.
    pub run_id: Uuid,
    pub order_id: i64,
    pub kind: OutcomeKind,
    /// Names of products that generated successfully, in registry order.
    pub succeeded: Vec<String>,
    /// Names of products that failed, in registry order.
    pub failed: Vec<String>,
    /// Product name to plain-language error message.
    pub errors: HashMap<String, String>,
    pub lists_created: usize,
    pub tasks_created: usize,
    pub completed_at: DateTime<Utc>,
}

impl WorkflowOutcome {
    /// A run is a success when at least one product generated.
    pub fn success(&self) -> bool {
        !self.succeeded.is_empty()
    }

    pub fn success_count(&self) -> usize {
        self.succeeded.len()
    }

    /// Plain-language aggregate message for display to the requesting
    /// user. Never includes raw service payloads.
    pub fn summary(&self) -> String {
        match self.kind {
            OutcomeKind::NothingToDo => {
                "No workflow products apply to this order.".to_string()
            }
            OutcomeKind::Completed => format!(
                "Generated workflows for {}.",
                self.succeeded.join(", ")
            ),
            OutcomeKind::Partial => format!(
                "Generated workflows for {}. Failed: {}.",
                self.succeeded.join(", "),
                self.failed.join(", ")
            ),
            OutcomeKind::Failed => {
                format!("Workflow generation failed for {}.", self.failed.join(", "))
            }
        }
    }
}
