//! # Workflow Executor
//!
//! Orchestrates one generation run: batch-loads the order graph, resolves
//! an authenticated client for the acting user, matches products, and runs
//! each applicable product's strategy in isolation. One product failing is
//! recorded and the loop continues; only a missing connection or a missing
//! order aborts the run.

use crate::client::traits::{ActingUser, TaskServiceClient, TaskServiceConnections};
use crate::error::{Result, WorkflowError};
use crate::logging::{log_error, log_product_operation, log_workflow_operation};
use crate::models::report::ReportWithLeases;
use crate::models::store::{OrderGraph, OrderStore};
use crate::orchestration::product_registry::{all_products, resolve_project_id, ProductDefinition};
use crate::orchestration::strategies::{strategy_for, GenerationContext};
use crate::orchestration::types::{GenerationResult, OutcomeKind, WorkflowOutcome};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// A product's filtered view of the order: reports of the product's kinds,
/// each carrying only the leases of the product's agency. Building the
/// view centrally is what enforces the agency partition invariant for both
/// strategies.
pub(crate) fn product_view(
    graph: &OrderGraph,
    definition: &ProductDefinition,
) -> Vec<ReportWithLeases> {
    graph
        .reports
        .iter()
        .filter(|entry| definition.matches_report(&entry.report))
        .filter_map(|entry| {
            let leases: Vec<_> = entry
                .leases
                .iter()
                .filter(|lease| lease.agency == definition.agency)
                .cloned()
                .collect();
            if leases.is_empty() {
                None
            } else {
                Some(ReportWithLeases {
                    report: entry.report.clone(),
                    leases,
                })
            }
        })
        .collect()
}

/// Entry point for workflow generation runs.
pub struct WorkflowExecutor {
    store: Arc<dyn OrderStore>,
    connections: Arc<dyn TaskServiceConnections>,
}

impl WorkflowExecutor {
    pub fn new(store: Arc<dyn OrderStore>, connections: Arc<dyn TaskServiceConnections>) -> Self {
        Self { store, connections }
    }

    /// Generate workflows for every product applicable to the order.
    ///
    /// Fails outright only when the order does not exist or the acting
    /// user has no task-service connection. Per-product failures are
    /// captured in the returned outcome.
    pub async fn execute(&self, order_id: i64, acting_user: &ActingUser) -> Result<WorkflowOutcome> {
        let run_id = Uuid::new_v4();
        log_workflow_operation("generate_workflows", run_id, order_id, "started", None);

        let graph = self
            .store
            .load_order_graph(order_id)
            .await?
            .ok_or(WorkflowError::OrderNotFound(order_id))?;

        let client = self
            .connections
            .client_for(acting_user)
            .ok_or(WorkflowError::NotConnected {
                user_id: acting_user.id,
            })?;

        let mut succeeded = Vec::new();
        let mut failed = Vec::new();
        let mut errors = HashMap::new();
        let mut totals = GenerationResult::default();
        let mut applicable = 0;

        for definition in all_products() {
            let view = product_view(&graph, definition);
            if view.is_empty() {
                continue;
            }
            applicable += 1;

            log_product_operation(
                "generate_product",
                run_id,
                order_id,
                definition.name,
                None,
                None,
                "started",
                Some(&format!("{} matching reports", view.len())),
            );

            match self
                .run_product(&graph, &view, definition, client.as_ref())
                .await
            {
                Ok(result) => {
                    totals.absorb(result);
                    succeeded.push(definition.name.to_string());
                    log_product_operation(
                        "generate_product",
                        run_id,
                        order_id,
                        definition.name,
                        None,
                        None,
                        "succeeded",
                        Some(&format!(
                            "{} lists, {} tasks",
                            result.lists_created, result.tasks_created
                        )),
                    );
                }
                Err(err) => {
                    warn!(
                        run_id = %run_id,
                        order_id = order_id,
                        product = definition.name,
                        error = %err,
                        "Product generation failed, continuing with remaining products"
                    );
                    log_error(
                        "workflow_executor",
                        "generate_product",
                        &err.to_string(),
                        Some(&format!("order_id={order_id} product={}", definition.name)),
                    );
                    errors.insert(definition.name.to_string(), err.to_string());
                    failed.push(definition.name.to_string());
                }
            }
        }

        let kind = if applicable == 0 {
            OutcomeKind::NothingToDo
        } else if failed.is_empty() {
            OutcomeKind::Completed
        } else if succeeded.is_empty() {
            OutcomeKind::Failed
        } else {
            OutcomeKind::Partial
        };

        let outcome = WorkflowOutcome {
            run_id,
            order_id,
            kind,
            succeeded,
            failed,
            errors,
            lists_created: totals.lists_created,
            tasks_created: totals.tasks_created,
            completed_at: Utc::now(),
        };

        info!(
            run_id = %run_id,
            order_id = order_id,
            kind = ?outcome.kind,
            succeeded = outcome.success_count(),
            failed = outcome.failed.len(),
            lists = outcome.lists_created,
            tasks = outcome.tasks_created,
            "Workflow generation run finished"
        );
        log_workflow_operation(
            "generate_workflows",
            run_id,
            order_id,
            "finished",
            Some(&outcome.summary()),
        );

        Ok(outcome)
    }

    async fn run_product(
        &self,
        graph: &OrderGraph,
        view: &[ReportWithLeases],
        definition: &ProductDefinition,
        client: &dyn TaskServiceClient,
    ) -> Result<GenerationResult> {
        let project_id = resolve_project_id(definition)?;
        let ctx = GenerationContext {
            order: &graph.order,
            reports: view,
            product: definition,
            project_id: &project_id,
            client,
        };
        strategy_for(definition.strategy).generate(&ctx).await
    }
}
