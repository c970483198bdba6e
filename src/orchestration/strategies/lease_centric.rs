//! # Lease-Centric Strategy
//!
//! Flat generation for list-style products (runsheets): one task list per
//! order, one task per unique lease number. A lease referenced by several
//! reports collapses into a single task carrying every referencing
//! report's formatted description.

use crate::client::traits::TaskParent;
use crate::constants::clamp_name;
use crate::error::Result;
use crate::formatter::format_description_html;
use crate::models::lease::Lease;
use crate::models::report::{Report, ReportWithLeases};
use crate::orchestration::strategies::{GenerationContext, GenerationStrategy};
use crate::orchestration::types::GenerationResult;
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::{debug, info};

pub struct LeaseCentricStrategy;

/// One unique lease number with every report that references it.
struct LeaseBucket<'a> {
    lease: &'a Lease,
    reports: Vec<&'a Report>,
}

/// Group the product view by lease number, preserving first-seen order.
/// The lease object of the first occurrence represents the bucket.
fn bucket_by_lease_number(reports: &[ReportWithLeases]) -> Vec<LeaseBucket<'_>> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut buckets: Vec<LeaseBucket<'_>> = Vec::new();
    for entry in reports {
        for lease in &entry.leases {
            let slot = match index.get(lease.lease_number.as_str()) {
                Some(slot) => *slot,
                None => {
                    buckets.push(LeaseBucket {
                        lease,
                        reports: Vec::new(),
                    });
                    index.insert(lease.lease_number.as_str(), buckets.len() - 1);
                    buckets.len() - 1
                }
            };
            buckets[slot].reports.push(&entry.report);
        }
    }
    buckets
}

fn task_name(bucket: &LeaseBucket<'_>) -> String {
    let name = if bucket.lease.prior_report_found {
        format!("{} - Previous Report", bucket.lease.lease_number)
    } else {
        bucket.lease.lease_number.clone()
    };
    clamp_name(&name)
}

/// Task body: a "Reports Needed" section with one bullet per referencing
/// report, then a "Lease Data" section linking the archive file. A section
/// with no content is omitted entirely.
fn task_description(bucket: &LeaseBucket<'_>) -> Option<String> {
    let mut sections = Vec::new();

    if !bucket.reports.is_empty() {
        let bullets: Vec<String> = bucket
            .reports
            .iter()
            .map(|report| format!("- {}", format_description_html(report)))
            .collect();
        sections.push(format!("Reports Needed:\n{}", bullets.join("\n")));
    }

    if let Some(link) = &bucket.lease.archive_link {
        sections.push(format!(
            "Lease Data:\n<a href=\"{link}\">Lease archive file</a>"
        ));
    }

    if sections.is_empty() {
        None
    } else {
        Some(sections.join("\n\n"))
    }
}

#[async_trait]
impl GenerationStrategy for LeaseCentricStrategy {
    async fn generate(&self, ctx: &GenerationContext<'_>) -> Result<GenerationResult> {
        let buckets = bucket_by_lease_number(ctx.reports);
        if buckets.is_empty() {
            debug!(
                order_id = ctx.order.id,
                product = ctx.product.name,
                "No matching leases, nothing to generate"
            );
            return Ok(GenerationResult::default());
        }

        let list_name = clamp_name(&format!(
            "Order {} - {}",
            ctx.order.order_number,
            ctx.order.date_stamp()
        ));
        let list_description = ctx
            .order
            .delivery_link
            .as_ref()
            .map(|link| format!("Delivery: {link}"));

        let list_id = ctx
            .client
            .create_list(ctx.project_id, &list_name, list_description.as_deref())
            .await?;

        let mut tasks_created = 0;
        for bucket in &buckets {
            let name = task_name(bucket);
            let description = task_description(bucket);
            ctx.client
                .create_task(
                    &TaskParent::List(list_id.clone()),
                    &name,
                    description.as_deref(),
                )
                .await?;
            tasks_created += 1;
            debug!(
                order_id = ctx.order.id,
                product = ctx.product.name,
                lease_id = bucket.lease.id,
                lease_number = %bucket.lease.lease_number,
                "Created lease task"
            );
        }

        info!(
            order_id = ctx.order.id,
            product = ctx.product.name,
            list = %list_name,
            tasks = tasks_created,
            "Lease-centric generation complete"
        );

        Ok(GenerationResult {
            lists_created: 1,
            tasks_created,
        })
    }

    fn name(&self) -> &'static str {
        "lease_centric"
    }
}
