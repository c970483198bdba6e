//! # System Constants
//!
//! Operational boundaries and fixed names shared across the workflow
//! generation engine.

/// Maximum length the external task service accepts for list, group and
/// task names. Longer names are clamped; generated names put the
/// identifying token (lease number, order number) first so it survives.
pub const MAX_RESOURCE_NAME_LEN: usize = 255;

/// Number of department phases a report-centric task list always contains.
pub const WORKFLOW_SECTION_COUNT: usize = 6;

/// Environment variables naming the external project each product
/// generates into.
pub mod locators {
    pub const STATE_RUNSHEET_PROJECT: &str = "TITLEFLOW_STATE_RUNSHEET_PROJECT_ID";
    pub const FEDERAL_RUNSHEET_PROJECT: &str = "TITLEFLOW_FEDERAL_RUNSHEET_PROJECT_ID";
    pub const STATE_ABSTRACT_PROJECT: &str = "TITLEFLOW_STATE_ABSTRACT_PROJECT_ID";
    pub const FEDERAL_ABSTRACT_PROJECT: &str = "TITLEFLOW_FEDERAL_ABSTRACT_PROJECT_ID";
}

/// Clamp a generated resource name to the service limit, on a char
/// boundary. Identifying prefixes are preserved because truncation drops
/// the tail.
pub fn clamp_name(name: &str) -> String {
    if name.chars().count() <= MAX_RESOURCE_NAME_LEN {
        name.to_string()
    } else {
        name.chars().take(MAX_RESOURCE_NAME_LEN).collect()
    }
}
