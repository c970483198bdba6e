//! # Section and Step Catalog
//!
//! The report-centric generator's step catalog as data: an ordered table of
//! department phases, each with an ordered list of step templates. Section
//! order matches the physical production workflow and consumers rely on it,
//! so revising the catalog means editing this table, never the generator.

use crate::constants::WORKFLOW_SECTION_COUNT;

/// Placeholder substituted with a lease number when a per-lease template
/// is instantiated.
pub const LEASE_PLACEHOLDER: &str = "{lease}";

/// A step template within a section. `Fixed` steps are created once per
/// report; `PerLease` steps once per associated lease.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepTemplate {
    Fixed(&'static str),
    PerLease(&'static str),
}

impl StepTemplate {
    pub fn is_per_lease(&self) -> bool {
        matches!(self, StepTemplate::PerLease(_))
    }

    /// Render this template for one lease. Fixed templates ignore the
    /// lease number.
    pub fn instantiate(&self, lease_number: &str) -> String {
        match self {
            StepTemplate::Fixed(text) => (*text).to_string(),
            StepTemplate::PerLease(template) => {
                template.replace(LEASE_PLACEHOLDER, lease_number)
            }
        }
    }
}

/// One department phase of a report-centric task list.
#[derive(Debug, Clone, Copy)]
pub struct WorkflowSection {
    pub name: &'static str,
    pub steps: &'static [StepTemplate],
}

static SECTIONS: [WorkflowSection; WORKFLOW_SECTION_COUNT] = [
    WorkflowSection {
        name: "Setup",
        steps: &[
            StepTemplate::Fixed("Create order folder"),
            StepTemplate::Fixed("Confirm order scope and billing"),
            StepTemplate::PerLease("Request prior files for {lease}"),
        ],
    },
    WorkflowSection {
        name: "Workup",
        steps: &[
            StepTemplate::PerLease("Run title chain for {lease}"),
            StepTemplate::PerLease("Note exceptions for {lease}"),
            StepTemplate::Fixed("Verify legal description against order"),
        ],
    },
    WorkflowSection {
        name: "Imaging",
        steps: &[
            StepTemplate::Fixed("Scan instruments to order folder"),
            StepTemplate::PerLease("Image lease file {lease}"),
        ],
    },
    WorkflowSection {
        name: "Indexing",
        steps: &[
            StepTemplate::Fixed("Index instruments by tract"),
            StepTemplate::PerLease("Index lease documents for {lease}"),
        ],
    },
    WorkflowSection {
        name: "Assembly",
        steps: &[
            StepTemplate::Fixed("Compile abstract binder"),
            StepTemplate::Fixed("Internal QC review"),
        ],
    },
    WorkflowSection {
        name: "Delivery",
        steps: &[
            StepTemplate::Fixed("Final proof and pagination"),
            StepTemplate::Fixed("Deliver abstract to client"),
        ],
    },
];

/// The six department phases, in workflow order.
pub fn sections() -> &'static [WorkflowSection] {
    &SECTIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_sections_in_workflow_order() {
        let names: Vec<&str> = sections().iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            vec!["Setup", "Workup", "Imaging", "Indexing", "Assembly", "Delivery"]
        );
    }

    #[test]
    fn every_section_has_at_least_one_step() {
        for section in sections() {
            assert!(!section.steps.is_empty(), "{} has no steps", section.name);
        }
    }

    #[test]
    fn per_lease_templates_carry_the_placeholder() {
        for section in sections() {
            for step in section.steps {
                if let StepTemplate::PerLease(template) = step {
                    assert!(
                        template.contains(LEASE_PLACEHOLDER),
                        "per-lease template without placeholder in {}: {template}",
                        section.name
                    );
                }
            }
        }
    }

    #[test]
    fn instantiation_substitutes_the_lease_number() {
        let step = StepTemplate::PerLease("Run title chain for {lease}");
        assert_eq!(step.instantiate("L-100"), "Run title chain for L-100");

        let fixed = StepTemplate::Fixed("Compile abstract binder");
        assert_eq!(fixed.instantiate("L-100"), "Compile abstract binder");
    }
}
