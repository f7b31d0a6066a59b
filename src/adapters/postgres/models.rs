//! Diesel row models for follow-up task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning tenant identifier.
    pub tenant_id: uuid::Uuid,
    /// Referenced application identifier.
    pub application_id: uuid::Uuid,
    /// Kind of follow-up action, as stored.
    pub kind: String,
    /// Lifecycle status, as stored.
    pub status: String,
    /// Due timestamp.
    pub due_at: DateTime<Utc>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning tenant identifier.
    pub tenant_id: uuid::Uuid,
    /// Referenced application identifier.
    pub application_id: uuid::Uuid,
    /// Kind of follow-up action.
    pub kind: String,
    /// Lifecycle status.
    pub status: String,
    /// Due timestamp.
    pub due_at: DateTime<Utc>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
}
