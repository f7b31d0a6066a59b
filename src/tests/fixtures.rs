//! Shared test doubles and builders for follow-up task tests.

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use uuid::Uuid;

use crate::domain::{
    ApplicationId, DayWindow, DueAt, PersistedTaskData, Task, TaskId, TaskStatus, TaskType,
    TenantId,
};
use crate::ports::{
    ApplicationDirectory, ApplicationDirectoryError, ApplicationDirectoryResult, TaskRepository,
    TaskRepositoryError, TaskRepositoryResult,
};

/// Repository double whose every operation fails at the store level.
#[derive(Debug, Clone, Default)]
pub struct FailingTaskRepository;

fn storage_failure() -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other("connection reset by peer"))
}

#[async_trait]
impl TaskRepository for FailingTaskRepository {
    async fn insert(&self, _task: &Task) -> TaskRepositoryResult<()> {
        Err(storage_failure())
    }

    async fn find_by_id(&self, _id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        Err(storage_failure())
    }

    async fn due_in_window(&self, _window: DayWindow) -> TaskRepositoryResult<Vec<Task>> {
        Err(storage_failure())
    }

    async fn mark_completed(
        &self,
        _id: TaskId,
        _completed_at: DateTime<Utc>,
    ) -> TaskRepositoryResult<()> {
        Err(storage_failure())
    }
}

/// Directory double whose lookup always fails at the store level.
#[derive(Debug, Clone, Default)]
pub struct FailingApplicationDirectory;

#[async_trait]
impl ApplicationDirectory for FailingApplicationDirectory {
    async fn tenant_of(&self, _id: ApplicationId) -> ApplicationDirectoryResult<Option<TenantId>> {
        Err(ApplicationDirectoryError::persistence(std::io::Error::other(
            "connection reset by peer",
        )))
    }
}

/// Builds a persisted open task due at the given instant.
pub fn open_task(due_at: DateTime<Utc>) -> Task {
    persisted_task(due_at, TaskStatus::Open)
}

/// Builds a persisted completed task due at the given instant.
pub fn completed_task(due_at: DateTime<Utc>) -> Task {
    persisted_task(due_at, TaskStatus::Completed)
}

fn persisted_task(due_at: DateTime<Utc>, status: TaskStatus) -> Task {
    let created_at = due_at - TimeDelta::days(1);
    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(),
        tenant_id: TenantId::from_uuid(Uuid::new_v4()),
        application_id: ApplicationId::from_uuid(Uuid::new_v4()),
        kind: TaskType::Call,
        status,
        due_at: DueAt::from_persisted(due_at),
        created_at,
        updated_at: created_at,
    })
}
