//! # Task Service Error Types
//!
//! Errors raised by the external task-service client. The taxonomy
//! distinguishes rate-limiting, auth expiry, transport faults and permanent
//! rejection, because callers decide retry behavior from the variant: the
//! first three are retry/refresh candidates, validation never is.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskServiceError {
    #[error("Rate limited by task service")]
    RateLimited {
        /// Server-provided wait hint, when the response carried one.
        retry_after_ms: Option<u64>,
    },

    #[error("Task service authentication expired: {message}")]
    AuthExpired { message: String },

    #[error("Task service rejected the request: {message}")]
    Validation { message: String },

    #[error("Task service transport error: {message}")]
    Transport { message: String },
}

impl TaskServiceError {
    pub fn rate_limited(retry_after_ms: Option<u64>) -> Self {
        Self::RateLimited { retry_after_ms }
    }

    pub fn auth_expired(message: impl Into<String>) -> Self {
        Self::AuthExpired {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Whether retrying the same call can succeed. Auth expiry is handled
    /// separately (refresh, then retry once).
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            TaskServiceError::RateLimited { .. } | TaskServiceError::Transport { .. }
        )
    }

    pub fn is_auth_expiry(&self) -> bool {
        matches!(self, TaskServiceError::AuthExpired { .. })
    }

    /// Server wait hint from a rate-limit response, if any.
    pub fn retry_after_ms(&self) -> Option<u64> {
        match self {
            TaskServiceError::RateLimited { retry_after_ms } => *retry_after_ms,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryability_follows_the_taxonomy() {
        assert!(TaskServiceError::rate_limited(None).is_retryable());
        assert!(TaskServiceError::transport("reset").is_retryable());
        assert!(!TaskServiceError::validation("bad field").is_retryable());
        assert!(!TaskServiceError::auth_expired("expired").is_retryable());
        assert!(TaskServiceError::auth_expired("expired").is_auth_expiry());
    }

    #[test]
    fn retry_after_surfaces_only_for_rate_limits() {
        assert_eq!(
            TaskServiceError::rate_limited(Some(1500)).retry_after_ms(),
            Some(1500)
        );
        assert_eq!(TaskServiceError::transport("x").retry_after_ms(), None);
    }
}
