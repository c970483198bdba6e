use crate::models::lease::Lease;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of title report an order contains. One runsheet kind, three
/// abstract sub-kinds differentiated by their label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    Runsheet,
    AbstractBase,
    AbstractSupplemental,
    AbstractDol,
}

impl ReportKind {
    pub fn is_abstract(&self) -> bool {
        !matches!(self, ReportKind::Runsheet)
    }

    /// Sub-label used in generated abstract list names. `None` for
    /// runsheets, which never reach the report-centric generator.
    pub fn abstract_label(&self) -> Option<&'static str> {
        match self {
            ReportKind::Runsheet => None,
            ReportKind::AbstractBase => Some("Base"),
            ReportKind::AbstractSupplemental => Some("Supplemental"),
            ReportKind::AbstractDol => Some("DOL"),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ReportKind::Runsheet => "Runsheet",
            ReportKind::AbstractBase => "Base Abstract",
            ReportKind::AbstractSupplemental => "Supplemental Abstract",
            ReportKind::AbstractDol => "DOL Abstract",
        }
    }
}

/// A single title report within an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: i64,
    pub order_id: i64,
    pub kind: ReportKind,
    /// Free-text legal description of the examined lands.
    pub legal_description: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// A report together with its associated leases, in association order.
/// Per-lease step fan-out and lease bucketing both depend on that order
/// being preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportWithLeases {
    pub report: Report,
    pub leases: Vec<Lease>,
}

impl ReportWithLeases {
    /// All associated lease numbers, in association order.
    pub fn lease_numbers(&self) -> Vec<&str> {
        self.leases.iter().map(|l| l.lease_number.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abstract_labels_cover_the_three_sub_kinds() {
        assert_eq!(ReportKind::AbstractBase.abstract_label(), Some("Base"));
        assert_eq!(
            ReportKind::AbstractSupplemental.abstract_label(),
            Some("Supplemental")
        );
        assert_eq!(ReportKind::AbstractDol.abstract_label(), Some("DOL"));
        assert_eq!(ReportKind::Runsheet.abstract_label(), None);
    }

    #[test]
    fn runsheet_is_not_an_abstract() {
        assert!(!ReportKind::Runsheet.is_abstract());
        assert!(ReportKind::AbstractDol.is_abstract());
    }
}
