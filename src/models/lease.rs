use serde::{Deserialize, Serialize};
use std::fmt;

/// Jurisdiction a lease belongs to. Used purely as a partition key: a
/// lease only ever contributes to products configured for its agency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Agency {
    State,
    Federal,
}

impl Agency {
    pub fn display_name(&self) -> &'static str {
        match self {
            Agency::State => "State",
            Agency::Federal => "Federal",
        }
    }
}

impl fmt::Display for Agency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A mineral lease referenced by one or more reports. Lease numbers may
/// repeat across reports within an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lease {
    pub id: i64,
    pub lease_number: String,
    pub agency: Agency,
    /// Whether a previous report exists for this lease in the archive.
    pub prior_report_found: bool,
    /// Link to supporting documents, when the archive has them.
    pub archive_link: Option<String>,
}
