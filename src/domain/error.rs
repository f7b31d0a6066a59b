//! Error types for follow-up task domain validation and parsing.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors returned while validating task creation input.
///
/// Display texts mirror what transports surface to callers, so each variant
/// reads as a complete user-facing message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The application reference is absent or not a canonical UUID.
    #[error("invalid or missing application_id")]
    InvalidApplicationId(String),

    /// The task type is not in the allowed set.
    #[error("task_type must be one of: call, email, review")]
    InvalidTaskType(String),

    /// The due timestamp is absent.
    #[error("due_at is required")]
    DueAtRequired,

    /// The due timestamp does not parse.
    #[error("due_at must be a valid timestamp")]
    InvalidDueAt(String),

    /// The due timestamp is at or before the validation instant.
    #[error("due_at must be in the future")]
    DueAtNotInFuture(DateTime<Utc>),
}

/// Error returned while parsing task types from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task type: {0}")]
pub struct ParseTaskTypeError(pub String);

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
