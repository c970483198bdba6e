//! # Retrying Client Decorator
//!
//! Wraps any [`TaskServiceClient`] with the outbound-call policy the engine
//! expects its collaborator to honor: exponential backoff on rate limits
//! (server `retry_after` hints win over computed delays), one credential
//! refresh on auth expiry, and immediate surfacing of permanent rejections.

use crate::client::errors::TaskServiceError;
use crate::client::traits::{
    GroupId, ListId, ProjectId, TaskId, TaskParent, TaskServiceClient, TokenRefresher,
};
use crate::config::TitleflowConfig;
use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// Backoff and attempt budget for outbound task-service calls.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff_base_ms: u64,
    pub backoff_max_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_base_ms: 1000,
            backoff_max_ms: 60000,
        }
    }
}

impl RetryPolicy {
    pub fn from_config(config: &TitleflowConfig) -> Self {
        Self {
            max_attempts: config.retry_limit,
            backoff_base_ms: config.backoff_base_ms,
            backoff_max_ms: config.backoff_max_ms,
        }
    }

    /// Delay before the next attempt. A server-provided hint wins over the
    /// doubling schedule; both are capped at `backoff_max_ms`.
    fn delay_for(&self, attempt: u32, retry_after_ms: Option<u64>) -> Duration {
        let exponent = attempt.saturating_sub(1).min(16);
        let computed = self.backoff_base_ms.saturating_mul(1u64 << exponent);
        let ms = retry_after_ms.unwrap_or(computed).min(self.backoff_max_ms);
        Duration::from_millis(ms)
    }
}

/// Task-service client with retry, backoff and credential-refresh behavior.
pub struct RetryingClient<C: TaskServiceClient> {
    inner: C,
    policy: RetryPolicy,
    refresher: Option<Arc<dyn TokenRefresher>>,
}

impl<C: TaskServiceClient> RetryingClient<C> {
    pub fn new(inner: C, policy: RetryPolicy) -> Self {
        Self {
            inner,
            policy,
            refresher: None,
        }
    }

    pub fn with_refresher(mut self, refresher: Arc<dyn TokenRefresher>) -> Self {
        self.refresher = Some(refresher);
        self
    }

    async fn with_retries<T, F, Fut>(
        &self,
        operation: &str,
        mut call: F,
    ) -> Result<T, TaskServiceError>
    where
        F: FnMut() -> Fut + Send,
        Fut: Future<Output = Result<T, TaskServiceError>> + Send,
        T: Send,
    {
        let mut attempt: u32 = 0;
        let mut refreshed = false;
        loop {
            attempt += 1;
            let err = match call().await {
                Ok(value) => return Ok(value),
                Err(err) => err,
            };

            if err.is_auth_expiry() {
                if refreshed {
                    return Err(err);
                }
                let Some(refresher) = &self.refresher else {
                    return Err(err);
                };
                warn!(
                    operation = operation,
                    error = %err,
                    "Task service credentials expired, refreshing"
                );
                refresher.refresh().await?;
                refreshed = true;
                continue;
            }

            if !err.is_retryable() || attempt >= self.policy.max_attempts {
                return Err(err);
            }

            let delay = self.policy.delay_for(attempt, err.retry_after_ms());
            warn!(
                operation = operation,
                attempt = attempt,
                delay_ms = delay.as_millis() as u64,
                error = %err,
                "Task service call failed, backing off before retry"
            );
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl<C: TaskServiceClient> TaskServiceClient for RetryingClient<C> {
    async fn create_list(
        &self,
        project_id: &ProjectId,
        name: &str,
        description: Option<&str>,
    ) -> Result<ListId, TaskServiceError> {
        self.with_retries("create_list", || {
            self.inner.create_list(project_id, name, description)
        })
        .await
    }

    async fn create_group(
        &self,
        list_id: &ListId,
        name: &str,
    ) -> Result<GroupId, TaskServiceError> {
        self.with_retries("create_group", || self.inner.create_group(list_id, name))
            .await
    }

    async fn create_task(
        &self,
        parent: &TaskParent,
        name: &str,
        description: Option<&str>,
    ) -> Result<TaskId, TaskServiceError> {
        self.with_retries("create_task", || {
            self.inner.create_task(parent, name, description)
        })
        .await
    }
}
