//! # Workflow Error Types
//!
//! Crate-level error taxonomy for workflow generation. Uses thiserror for
//! structured error types instead of `Box<dyn Error>` patterns.
//!
//! Propagation policy: anything raised below a per-product strategy boundary
//! is caught by the executor and recorded as that product's failure. Only
//! [`WorkflowError::NotConnected`] and [`WorkflowError::OrderNotFound`] abort
//! a run outright.

use crate::client::errors::TaskServiceError;
use thiserror::Error;

/// Errors produced while generating workflows for an order.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Task service is not connected for user {user_id}")]
    NotConnected { user_id: i64 },

    #[error("Order {0} not found")]
    OrderNotFound(i64),

    #[error("Task service error: {0}")]
    RemoteService(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Store error: {0}")]
    Store(String),
}

impl WorkflowError {
    /// Stable machine-readable reason code for callers that serialize
    /// failures without exposing internal error text.
    pub fn reason_code(&self) -> &'static str {
        match self {
            WorkflowError::Configuration(_) => "configuration_error",
            WorkflowError::NotConnected { .. } => "not_connected",
            WorkflowError::OrderNotFound(_) => "order_not_found",
            WorkflowError::RemoteService(_) => "remote_service_error",
            WorkflowError::Validation(_) => "validation_error",
            WorkflowError::Store(_) => "store_error",
        }
    }

    /// True when the whole run should stop rather than continue with the
    /// remaining products.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            WorkflowError::NotConnected { .. } | WorkflowError::OrderNotFound(_)
        )
    }
}

impl From<TaskServiceError> for WorkflowError {
    fn from(err: TaskServiceError) -> Self {
        match err {
            TaskServiceError::Validation { message } => WorkflowError::Validation(message),
            // Rate-limit and auth expiry reaching this level means the
            // client's own retry budget was exhausted.
            other => WorkflowError::RemoteService(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, WorkflowError>;
