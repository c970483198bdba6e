//! # Task Service Client Traits
//!
//! Seams between the generation engine and the external project-management
//! service. The embedding application implements these; the engine only
//! ever sees the traits, which keeps both strategies testable against
//! recording fakes.

use crate::client::errors::TaskServiceError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Identifier of an external project a product generates into.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub String);

/// Identifier of a created task list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListId(pub String);

/// Identifier of a created section group within a list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupId(pub String);

/// Identifier of a created task.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(pub String);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a task is created: directly on a list (flat generation) or inside
/// a section group (grouped generation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskParent {
    List(ListId),
    Group(GroupId),
}

/// The three nesting levels the engine creates in the external service.
#[async_trait]
pub trait TaskServiceClient: Send + Sync {
    async fn create_list(
        &self,
        project_id: &ProjectId,
        name: &str,
        description: Option<&str>,
    ) -> Result<ListId, TaskServiceError>;

    async fn create_group(
        &self,
        list_id: &ListId,
        name: &str,
    ) -> Result<GroupId, TaskServiceError>;

    async fn create_task(
        &self,
        parent: &TaskParent,
        name: &str,
        description: Option<&str>,
    ) -> Result<TaskId, TaskServiceError>;
}

/// Refreshes expired task-service credentials. Implemented by the
/// application's OAuth layer.
#[async_trait]
pub trait TokenRefresher: Send + Sync {
    async fn refresh(&self) -> Result<(), TaskServiceError>;
}

/// The user on whose task-service connection a run executes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActingUser {
    pub id: i64,
    pub display_name: String,
}

/// Resolves an authenticated client for a user, if that user has a
/// task-service connection. `None` fails the whole run before anything is
/// attempted.
pub trait TaskServiceConnections: Send + Sync {
    fn client_for(&self, user: &ActingUser) -> Option<Arc<dyn TaskServiceClient>>;
}
