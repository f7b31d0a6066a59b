//! Closed enumeration of follow-up task types.

use super::{ParseTaskTypeError, TaskDomainError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of follow-up action a task represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    /// Phone call follow-up.
    Call,
    /// Email follow-up.
    Email,
    /// Application review.
    Review,
}

impl TaskType {
    /// All valid task types, in canonical order.
    pub const ALL: [Self; 3] = [Self::Call, Self::Email, Self::Review];

    /// Comma-separated list of allowed canonical values, used verbatim in
    /// validation error messages.
    pub const ALLOWED_VALUES: &'static str = "call, email, review";

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Call => "call",
            Self::Email => "email",
            Self::Review => "review",
        }
    }

    /// Parses a client-supplied task type.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTaskType`] when the value is not one
    /// of the allowed types; the error message enumerates the allowed values.
    pub fn parse(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        Self::try_from(raw.as_str()).map_err(|_| TaskDomainError::InvalidTaskType(raw))
    }
}

impl TryFrom<&str> for TaskType {
    type Error = ParseTaskTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "call" => Ok(Self::Call),
            "email" => Ok(Self::Email),
            "review" => Ok(Self::Review),
            _ => Err(ParseTaskTypeError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
