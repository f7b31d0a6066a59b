//! Follow-up task aggregate root.

use super::{ApplicationId, DueAt, TaskId, TaskStatus, TaskType, TenantId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Parameter object for creating a new task.
///
/// The tenant identifier must come from the owning application's record;
/// it is never accepted from the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewTaskParams {
    /// Application the task follows up on.
    pub application_id: ApplicationId,
    /// Tenant owning the application, resolved server-side.
    pub tenant_id: TenantId,
    /// Kind of follow-up action.
    pub kind: TaskType,
    /// Validated due timestamp.
    pub due_at: DueAt,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted tenant identifier.
    pub tenant_id: TenantId,
    /// Persisted application reference.
    pub application_id: ApplicationId,
    /// Persisted task type.
    pub kind: TaskType,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted due timestamp.
    pub due_at: DueAt,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Follow-up task aggregate root.
///
/// Apart from `status` and `updated_at`, every field is immutable after
/// creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    tenant_id: TenantId,
    application_id: ApplicationId,
    #[serde(rename = "type")]
    kind: TaskType,
    status: TaskStatus,
    due_at: DueAt,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new open task from validated creation parameters.
    #[must_use]
    pub fn new(params: NewTaskParams, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            tenant_id: params.tenant_id,
            application_id: params.application_id,
            kind: params.kind,
            status: TaskStatus::Open,
            due_at: params.due_at,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub const fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            tenant_id: data.tenant_id,
            application_id: data.application_id,
            kind: data.kind,
            status: data.status,
            due_at: data.due_at,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning tenant.
    #[must_use]
    pub const fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    /// Returns the referenced application.
    #[must_use]
    pub const fn application_id(&self) -> ApplicationId {
        self.application_id
    }

    /// Returns the kind of follow-up action.
    #[must_use]
    pub const fn kind(&self) -> TaskType {
        self.kind
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the due timestamp.
    #[must_use]
    pub const fn due_at(&self) -> DueAt {
        self.due_at
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Transitions the task to its terminal `completed` status.
    ///
    /// The transition is one-way and idempotent at the value level:
    /// completing an already-completed task rewrites the same status and
    /// refreshes `updated_at`, matching the store-level update the
    /// completion action issues.
    pub const fn complete(&mut self, completed_at: DateTime<Utc>) {
        self.status = TaskStatus::Completed;
        self.updated_at = completed_at;
    }
}
