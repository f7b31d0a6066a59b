//! Service layer for the daily operator queue.

use crate::domain::{DayWindow, Task, TaskId};
use crate::ports::{TaskRepository, TaskRepositoryError};
use chrono::Local;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for the today queue.
#[derive(Debug, Error)]
pub enum TodayQueueError {
    /// The list query failed at the store level. A failure must surface as
    /// an explicit error, never as an empty list.
    #[error("failed to load tasks")]
    Retrieval(#[source] TaskRepositoryError),

    /// The completion update failed at the store level.
    #[error("failed to mark task complete")]
    Completion(#[source] TaskRepositoryError),
}

/// Result type for today queue operations.
pub type TodayQueueResult<T> = Result<T, TodayQueueError>;

/// Daily operator queue over the task store.
///
/// Holds no state between calls; every listing is authoritative and
/// repeated calls with no intervening writes return identical results.
#[derive(Clone)]
pub struct TodayQueueService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TodayQueueService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new today queue service.
    #[must_use]
    pub const fn new(tasks: Arc<R>, clock: Arc<C>) -> Self {
        Self { tasks, clock }
    }

    /// Lists non-completed tasks due within the current local calendar day,
    /// ordered ascending by due timestamp.
    ///
    /// Returns an empty vector when nothing matches.
    ///
    /// # Errors
    ///
    /// Returns [`TodayQueueError::Retrieval`] when the store query fails.
    pub async fn list_today(&self) -> TodayQueueResult<Vec<Task>> {
        let window = DayWindow::containing(self.clock.utc().with_timezone(&Local));
        self.tasks.due_in_window(window).await.map_err(|err| {
            tracing::error!(error = %err, "today queue query failed");
            TodayQueueError::Retrieval(err)
        })
    }

    /// Marks the given task completed.
    ///
    /// Issues a single update restricted to status and `updated_at`,
    /// filtered by identifier. An identifier matching no task updates zero
    /// rows and still reports success.
    ///
    /// # Errors
    ///
    /// Returns [`TodayQueueError::Completion`] when the store update fails.
    pub async fn complete(&self, id: TaskId) -> TodayQueueResult<()> {
        self.tasks
            .mark_completed(id, self.clock.utc())
            .await
            .map_err(|err| {
                tracing::error!(task_id = %id, error = %err, "task completion failed");
                TodayQueueError::Completion(err)
            })
    }
}
