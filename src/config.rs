//! # Runtime Configuration
//!
//! Process-level configuration for the workflow generation core, layered
//! from environment variables over defaults. Project locators for the
//! individual products are intentionally not here: they are resolved
//! per-product by the registry so that a missing locator fails one product,
//! not process start.

use crate::error::{Result, WorkflowError};

#[derive(Debug, Clone)]
pub struct TitleflowConfig {
    /// Deployment environment name (`development`, `test`, `production`).
    pub environment: String,
    /// Maximum attempts per outbound task-service call.
    pub retry_limit: u32,
    /// Base delay for exponential backoff on rate-limited calls.
    pub backoff_base_ms: u64,
    /// Ceiling for computed or server-provided backoff delays.
    pub backoff_max_ms: u64,
}

impl Default for TitleflowConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            retry_limit: 3,
            backoff_base_ms: 1000,
            backoff_max_ms: 60000,
        }
    }
}

impl TitleflowConfig {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(environment) = std::env::var("TITLEFLOW_ENV") {
            config.environment = environment;
        }

        if let Ok(retry_limit) = std::env::var("TITLEFLOW_RETRY_LIMIT") {
            config.retry_limit = retry_limit.parse().map_err(|e| {
                WorkflowError::Configuration(format!("Invalid retry_limit: {e}"))
            })?;
        }

        if let Ok(base) = std::env::var("TITLEFLOW_BACKOFF_BASE_MS") {
            config.backoff_base_ms = base.parse().map_err(|e| {
                WorkflowError::Configuration(format!("Invalid backoff_base_ms: {e}"))
            })?;
        }

        if let Ok(max) = std::env::var("TITLEFLOW_BACKOFF_MAX_MS") {
            config.backoff_max_ms = max.parse().map_err(|e| {
                WorkflowError::Configuration(format!("Invalid backoff_max_ms: {e}"))
            })?;
        }

        Ok(config)
    }
}
