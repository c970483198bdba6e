//! # Report-Centric Strategy
//!
//! Grouped generation for multi-phase abstract products: one task list per
//! matching report, sectioned into the six department phases from the
//! catalog, each phase populated from its step templates. Per-lease
//! templates fan out once per associated lease, in association order.

use crate::client::traits::TaskParent;
use crate::constants::clamp_name;
use crate::error::{Result, WorkflowError};
use crate::formatter::format_date_range;
use crate::models::order::Order;
use crate::models::report::ReportWithLeases;
use crate::orchestration::catalog::{sections, StepTemplate};
use crate::orchestration::strategies::{GenerationContext, GenerationStrategy};
use crate::orchestration::types::GenerationResult;
use async_trait::async_trait;
use tracing::{debug, info};

pub struct ReportCentricStrategy;

/// Structured key/value lines describing the report at the top of its
/// task list.
fn list_description(order: &Order, entry: &ReportWithLeases) -> String {
    let mut lines = vec![format!(
        "Report Type: {}",
        entry.report.kind.display_name()
    )];
    if let Some(range) = format_date_range(&entry.report) {
        lines.push(format!("Date Range: {range}"));
    }
    if !entry.leases.is_empty() {
        lines.push(format!("Leases: {}", entry.lease_numbers().join(", ")));
    }
    lines.push(format!(
        "Legal Description: {}",
        entry.report.legal_description
    ));
    if let Some(link) = &order.delivery_link {
        lines.push(format!("Delivery: {link}"));
    }
    lines.join("\n")
}

impl ReportCentricStrategy {
    async fn generate_for_report(
        &self,
        ctx: &GenerationContext<'_>,
        entry: &ReportWithLeases,
    ) -> Result<GenerationResult> {
        let sub_label = entry.report.kind.abstract_label().ok_or_else(|| {
            WorkflowError::Validation(format!(
                "Report {} has kind {:?}, which has no abstract sub-label",
                entry.report.id, entry.report.kind
            ))
        })?;

        let list_name = clamp_name(&format!(
            "Order {}- {} Abstract {} - {}",
            ctx.order.order_number,
            sub_label,
            entry.report.id,
            ctx.order.date_stamp()
        ));
        let description = list_description(ctx.order, entry);

        let list_id = ctx
            .client
            .create_list(ctx.project_id, &list_name, Some(&description))
            .await?;

        let mut tasks_created = 0;
        // Section order is a correctness requirement: consumers rely on it
        // matching the physical workflow phases.
        for section in sections() {
            let group_id = ctx.client.create_group(&list_id, section.name).await?;
            for step in section.steps {
                match step {
                    StepTemplate::Fixed(text) => {
                        ctx.client
                            .create_task(
                                &TaskParent::Group(group_id.clone()),
                                &clamp_name(text),
                                None,
                            )
                            .await?;
                        tasks_created += 1;
                    }
                    StepTemplate::PerLease(_) => {
                        for lease in &entry.leases {
                            let name = clamp_name(&step.instantiate(&lease.lease_number));
                            ctx.client
                                .create_task(&TaskParent::Group(group_id.clone()), &name, None)
                                .await?;
                            tasks_created += 1;
                        }
                    }
                }
            }
        }

        debug!(
            order_id = ctx.order.id,
            product = ctx.product.name,
            report_id = entry.report.id,
            list = %list_name,
            tasks = tasks_created,
            "Created sectioned task list for report"
        );

        Ok(GenerationResult {
            lists_created: 1,
            tasks_created,
        })
    }
}

#[async_trait]
impl GenerationStrategy for ReportCentricStrategy {
    async fn generate(&self, ctx: &GenerationContext<'_>) -> Result<GenerationResult> {
        let mut total = GenerationResult::default();
        for entry in ctx.reports {
            let per_report = self.generate_for_report(ctx, entry).await?;
            total.absorb(per_report);
        }

        info!(
            order_id = ctx.order.id,
            product = ctx.product.name,
            lists = total.lists_created,
            tasks = total.tasks_created,
            "Report-centric generation complete"
        );

        Ok(total)
    }

    fn name(&self) -> &'static str {
        "report_centric"
    }
}
