//! Repository port for follow-up task persistence.

use crate::domain::{DayWindow, Task, TaskId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// The store is the only shared mutable resource in the system; each method
/// maps to a single statement and relies on the store for its atomicity.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a newly created task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID
    /// already exists, or [`TaskRepositoryError::Persistence`] for
    /// store-level failures.
    async fn insert(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns all non-completed tasks whose due timestamp falls inside the
    /// half-open window, ordered ascending by due timestamp.
    async fn due_in_window(&self, window: DayWindow) -> TaskRepositoryResult<Vec<Task>>;

    /// Marks a task completed, setting only its status and `updated_at`.
    ///
    /// The update is filtered by identifier without a prior existence check;
    /// a non-matching identifier updates zero rows and still succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] for store-level
    /// failures.
    async fn mark_completed(
        &self,
        id: TaskId,
        completed_at: DateTime<Utc>,
    ) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
