//! Task List Operations
//!
//! Every mutation is followed by a full refetch; the caller only ever
//! receives a complete list snapshot, never a patched one.

use crate::api::TaskApi;
use crate::error::ApiError;
use crate::models::{Task, TaskDraft, TaskId, TaskPatch};

pub const FETCH_FAILED: &str = "Failed to fetch tasks";
pub const UPDATE_FAILED: &str = "Failed to update task";
pub const DELETE_FAILED: &str = "Failed to delete task";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Update,
    Delete,
}

impl Mutation {
    fn fallback(self) -> &'static str {
        match self {
            Mutation::Update => UPDATE_FAILED,
            Mutation::Delete => DELETE_FAILED,
        }
    }
}

/// Which step of a task-list operation failed
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TaskListError {
    #[error("{action:?} failed: {source}")]
    Mutation {
        action: Mutation,
        #[source]
        source: ApiError,
    },
    #[error("refetch failed: {0}")]
    Fetch(#[source] ApiError),
}

impl TaskListError {
    /// Message for the blocking alert
    pub fn user_message(&self) -> String {
        match self {
            TaskListError::Mutation { action, source } => source.user_message(action.fallback()),
            TaskListError::Fetch(source) => source.user_message(FETCH_FAILED),
        }
    }

    /// True when the mutation itself went through and only the refresh failed
    pub fn mutation_applied(&self) -> bool {
        matches!(self, TaskListError::Fetch(_))
    }
}

pub async fn fetch_all<A: TaskApi + ?Sized>(api: &A) -> Result<Vec<Task>, TaskListError> {
    api.list_tasks().await.map_err(TaskListError::Fetch)
}

async fn mutate_then_fetch<A: TaskApi + ?Sized>(
    api: &A,
    action: Mutation,
    result: Result<(), ApiError>,
) -> Result<Vec<Task>, TaskListError> {
    result.map_err(|source| TaskListError::Mutation { action, source })?;
    fetch_all(api).await
}

pub async fn toggle_completion<A: TaskApi + ?Sized>(
    api: &A,
    id: TaskId,
    is_completed: bool,
) -> Result<Vec<Task>, TaskListError> {
    let result = api.update_task(id, &TaskPatch::completion(is_completed)).await.map(drop);
    mutate_then_fetch(api, Mutation::Update, result).await
}

pub async fn edit<A: TaskApi + ?Sized>(
    api: &A,
    id: TaskId,
    draft: &TaskDraft,
) -> Result<Vec<Task>, TaskListError> {
    let result = api.update_task(id, &TaskPatch::from(draft)).await.map(drop);
    mutate_then_fetch(api, Mutation::Update, result).await
}

pub async fn delete<A: TaskApi + ?Sized>(api: &A, id: TaskId) -> Result<Vec<Task>, TaskListError> {
    let result = api.delete_task(id).await;
    mutate_then_fetch(api, Mutation::Delete, result).await
}
