//! # Description Formatter
//!
//! Pure rendering of a report's legal description plus its optional date
//! range. Both variants are deterministic functions of the report alone;
//! the HTML variant bolds each rendered date token for task descriptions
//! shown in the external service.

use crate::models::report::Report;
use chrono::{Datelike, NaiveDate};

/// Render a date as `M/D/YYYY` with no zero padding.
fn fmt_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

fn fmt_date_html(date: NaiveDate) -> String {
    format!("<strong>{}</strong>", fmt_date(date))
}

fn render_range(report: &Report, render: impl Fn(NaiveDate) -> String) -> Option<String> {
    match (report.start_date, report.end_date) {
        (Some(start), Some(end)) => {
            Some(format!("from {} to {}", render(start), render(end)))
        }
        (Some(start), None) => Some(format!("from {} to present", render(start))),
        (None, Some(end)) => Some(format!("from inception to {}", render(end))),
        (None, None) => None,
    }
}

/// The report's date range alone (`from … to …`), or `None` when the
/// report carries no dates.
pub fn format_date_range(report: &Report) -> Option<String> {
    render_range(report, fmt_date)
}

/// Legal description plus date range, plain text.
pub fn format_description(report: &Report) -> String {
    match format_date_range(report) {
        Some(range) => format!("{} {}", report.legal_description, range),
        None => report.legal_description.clone(),
    }
}

/// Legal description plus date range with each date token bolded.
pub fn format_description_html(report: &Report) -> String {
    match render_range(report, fmt_date_html) {
        Some(range) => format!("{} {}", report.legal_description, range),
        None => report.legal_description.clone(),
    }
}
