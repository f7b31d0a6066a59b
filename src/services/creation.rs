//! Service layer for validated task creation.

use crate::domain::{ApplicationId, DueAt, NewTaskParams, Task, TaskDomainError, TaskId, TaskType};
use crate::ports::{ApplicationDirectory, TaskRepository, TaskRepositoryError};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Raw creation request as received from a transport.
///
/// All fields arrive as strings; validation happens inside
/// [`TaskCreationService::create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    application_id: String,
    task_type: String,
    due_at: String,
}

impl CreateTaskRequest {
    /// Creates a request from raw transport fields.
    #[must_use]
    pub fn new(
        application_id: impl Into<String>,
        task_type: impl Into<String>,
        due_at: impl Into<String>,
    ) -> Self {
        Self {
            application_id: application_id.into(),
            task_type: task_type.into(),
            due_at: due_at.into(),
        }
    }
}

/// Coarse classification of service errors for transport mapping.
///
/// Transports map these to response codes without inspecting variants:
/// `InvalidInput` and `NotFound` are recoverable by the caller correcting
/// the request, `Storage` is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or out-of-policy request field.
    InvalidInput,
    /// Referenced application absent (or its lookup failed).
    NotFound,
    /// Opaque backing-store failure.
    Storage,
}

/// Service-level errors for task creation.
#[derive(Debug, Error)]
pub enum CreateTaskError {
    /// Input validation failed.
    #[error(transparent)]
    Invalid(#[from] TaskDomainError),

    /// The referenced application does not exist, or its lookup failed.
    /// The two cases are deliberately indistinguishable to the caller.
    #[error("application not found")]
    ApplicationNotFound(ApplicationId),

    /// The insert failed at the store level. The display text is the
    /// generic external message; detail lives in the source error and the
    /// internal log.
    #[error("failed to create task")]
    Storage(#[source] TaskRepositoryError),
}

impl CreateTaskError {
    /// Returns the coarse error classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Invalid(_) => ErrorKind::InvalidInput,
            Self::ApplicationNotFound(_) => ErrorKind::NotFound,
            Self::Storage(_) => ErrorKind::Storage,
        }
    }
}

/// Result type for task creation operations.
pub type CreateTaskResult<T> = Result<T, CreateTaskError>;

/// Validated task creation service.
///
/// Stateless between requests; every call is an independent
/// request-response unit sharing state only through the store.
#[derive(Clone)]
pub struct TaskCreationService<R, A, C>
where
    R: TaskRepository,
    A: ApplicationDirectory,
    C: Clock + Send + Sync,
{
    tasks: Arc<R>,
    applications: Arc<A>,
    clock: Arc<C>,
}

impl<R, A, C> TaskCreationService<R, A, C>
where
    R: TaskRepository,
    A: ApplicationDirectory,
    C: Clock + Send + Sync,
{
    /// Creates a new task creation service.
    #[must_use]
    pub const fn new(tasks: Arc<R>, applications: Arc<A>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            applications,
            clock,
        }
    }

    /// Validates the request and persists a new open task.
    ///
    /// Validation runs in a fixed order and short-circuits on the first
    /// failure, before any write is attempted: application reference,
    /// task type, due timestamp presence, syntax, and the
    /// strictly-in-the-future rule. The owning tenant is then resolved
    /// from the referenced application and the task inserted with
    /// `status = open`.
    ///
    /// # Errors
    ///
    /// Returns [`CreateTaskError::Invalid`] for each validation failure,
    /// [`CreateTaskError::ApplicationNotFound`] when the application is
    /// absent or its lookup fails, and [`CreateTaskError::Storage`] when
    /// the insert fails.
    pub async fn create(&self, request: CreateTaskRequest) -> CreateTaskResult<TaskId> {
        let application_id = ApplicationId::parse(request.application_id)?;
        let kind = TaskType::parse(request.task_type)?;
        let due_at = DueAt::parse(request.due_at, self.clock.utc())?;

        let tenant_id = match self.applications.tenant_of(application_id).await {
            Ok(Some(tenant_id)) => tenant_id,
            Ok(None) => return Err(CreateTaskError::ApplicationNotFound(application_id)),
            Err(err) => {
                tracing::warn!(
                    %application_id,
                    error = %err,
                    "application lookup failed, reporting not found"
                );
                return Err(CreateTaskError::ApplicationNotFound(application_id));
            }
        };

        let task = Task::new(
            NewTaskParams {
                application_id,
                tenant_id,
                kind,
                due_at,
            },
            &*self.clock,
        );

        if let Err(err) = self.tasks.insert(&task).await {
            tracing::error!(task_id = %task.id(), error = %err, "task insert failed");
            return Err(CreateTaskError::Storage(err));
        }

        Ok(task.id())
    }
}
