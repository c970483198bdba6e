//! # Workflow Orchestration
//!
//! The generation engine proper: the product registry, the section/step
//! catalog, the two generation strategies, and the executor that ties one
//! run together.

pub mod catalog;
pub mod executor;
pub mod product_registry;
pub mod strategies;
pub mod types;

pub use executor::WorkflowExecutor;
pub use product_registry::{
    all_products, product_named, resolve_project_id, ProductDefinition, StrategyKind,
};
pub use strategies::{GenerationContext, GenerationStrategy};
pub use types::{GenerationResult, OutcomeKind, WorkflowOutcome};
