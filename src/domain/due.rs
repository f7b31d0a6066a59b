//! Validated due timestamp for follow-up tasks.

use super::TaskDomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Due timestamp validated at task creation.
///
/// A `DueAt` is normalized to UTC and guaranteed to lie strictly after the
/// instant it was validated against. It is immutable for the lifetime of the
/// task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DueAt(DateTime<Utc>);

impl DueAt {
    /// Parses and validates a client-supplied due timestamp against `now`.
    ///
    /// Checks apply in order: presence, RFC 3339 syntax, then the
    /// strictly-in-the-future rule. Each failure carries a distinct error.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DueAtRequired`] when the value is empty or
    /// whitespace, [`TaskDomainError::InvalidDueAt`] when it does not parse
    /// as an RFC 3339 timestamp, and [`TaskDomainError::DueAtNotInFuture`]
    /// when the parsed instant is at or before `now`.
    pub fn parse(value: impl Into<String>, now: DateTime<Utc>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let candidate = raw.trim();
        if candidate.is_empty() {
            return Err(TaskDomainError::DueAtRequired);
        }

        let Ok(parsed) = DateTime::parse_from_rfc3339(candidate) else {
            return Err(TaskDomainError::InvalidDueAt(raw));
        };
        let due = parsed.with_timezone(&Utc);

        if due <= now {
            return Err(TaskDomainError::DueAtNotInFuture(due));
        }

        Ok(Self(due))
    }

    /// Wraps an already-persisted due timestamp without re-validation.
    ///
    /// The future-due rule only applies at creation time; rehydrated tasks
    /// may legitimately be due in the past.
    #[must_use]
    pub const fn from_persisted(due: DateTime<Utc>) -> Self {
        Self(due)
    }

    /// Returns the normalized UTC instant.
    #[must_use]
    pub const fn into_inner(self) -> DateTime<Utc> {
        self.0
    }
}

impl fmt::Display for DueAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}
