//! `PostgreSQL` repository implementation for follow-up task storage.

use super::{
    models::{NewTaskRow, TaskRow},
    schema::tasks,
};
use crate::domain::{
    ApplicationId, DayWindow, DueAt, PersistedTaskData, Task, TaskId, TaskStatus, TaskType,
    TenantId,
};
use crate::ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by follow-up adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn insert(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let new_row = to_new_row(task);

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateTask(task_id)
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn due_in_window(&self, window: DayWindow) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::due_at.ge(window.start()))
                .filter(tasks::due_at.lt(window.end()))
                .filter(tasks::status.ne(TaskStatus::Completed.as_str()))
                .order(tasks::due_at.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn mark_completed(
        &self,
        id: TaskId,
        completed_at: DateTime<Utc>,
    ) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            // Zero affected rows is deliberately not an error: the
            // completion contract reports success for unknown identifiers.
            diesel::update(tasks::table.filter(tasks::id.eq(id.into_inner())))
                .set((
                    tasks::status.eq(TaskStatus::Completed.as_str()),
                    tasks::updated_at.eq(completed_at),
                ))
                .execute(connection)
                .map(|_affected| ())
                .map_err(TaskRepositoryError::persistence)
        })
        .await
    }
}

fn to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        tenant_id: task.tenant_id().into_inner(),
        application_id: task.application_id().into_inner(),
        kind: task.kind().as_str().to_owned(),
        status: task.status().as_str().to_owned(),
        due_at: task.due_at().into_inner(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        tenant_id,
        application_id,
        kind: persisted_kind,
        status: persisted_status,
        due_at,
        created_at,
        updated_at,
    } = row;

    let kind =
        TaskType::try_from(persisted_kind.as_str()).map_err(TaskRepositoryError::persistence)?;
    let status = TaskStatus::try_from(persisted_status.as_str())
        .map_err(TaskRepositoryError::persistence)?;

    let data = PersistedTaskData {
        id: TaskId::from_uuid(id),
        tenant_id: TenantId::from_uuid(tenant_id),
        application_id: ApplicationId::from_uuid(application_id),
        kind,
        status,
        due_at: DueAt::from_persisted(due_at),
        created_at,
        updated_at,
    };
    Ok(Task::from_persisted(data))
}
