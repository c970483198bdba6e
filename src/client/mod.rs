//! # Task Service Client
//!
//! Abstraction over the external project-management service. The engine
//! only depends on the traits here; the embedding application supplies the
//! HTTP implementation and wraps it in [`RetryingClient`] for backoff and
//! credential-refresh behavior.

pub mod errors;
pub mod retry;
pub mod traits;

pub use errors::TaskServiceError;
pub use retry::{RetryPolicy, RetryingClient};
pub use traits::{
    ActingUser, GroupId, ListId, ProjectId, TaskId, TaskParent, TaskServiceClient,
    TaskServiceConnections, TokenRefresher,
};
