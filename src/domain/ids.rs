//! Identifier newtypes for the follow-up task domain.
//!
//! These types wrap UUIDs to prevent accidental mixing of task, application,
//! and tenant identifiers and to carry the validation rules the creation
//! pipeline applies to client-supplied references.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::{Uuid, Variant};

/// Unique identifier for a follow-up task record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new random task identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a task identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for TaskId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reference to an externally-owned application record.
///
/// Application identifiers arrive from clients as strings, so construction
/// goes through [`ApplicationId::parse`], which enforces the canonical
/// hyphenated UUID format with a version nibble in `1..=5` and an RFC 4122
/// variant nibble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(Uuid);

impl ApplicationId {
    /// Length of the canonical hyphenated UUID representation.
    const CANONICAL_LEN: usize = 36;

    /// Parses a client-supplied application identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidApplicationId`] when the value is
    /// empty, not in the canonical hyphenated format, or carries an
    /// unsupported UUID version or variant.
    pub fn parse(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let candidate = raw.trim();
        if candidate.len() != Self::CANONICAL_LEN {
            return Err(TaskDomainError::InvalidApplicationId(raw));
        }

        let Ok(uuid) = Uuid::try_parse(candidate) else {
            return Err(TaskDomainError::InvalidApplicationId(raw));
        };

        let version_ok = (1..=5).contains(&uuid.get_version_num());
        let variant_ok = matches!(uuid.get_variant(), Variant::RFC4122);
        if !version_ok || !variant_ok {
            return Err(TaskDomainError::InvalidApplicationId(raw));
        }

        Ok(Self(uuid))
    }

    /// Creates an application identifier from a trusted UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl AsRef<Uuid> for ApplicationId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of the tenant owning a task.
///
/// Tenant identity is only ever derived server-side from the owning
/// application's record; there is deliberately no parser for
/// client-supplied input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantId(Uuid);

impl TenantId {
    /// Creates a tenant identifier from a stored UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl AsRef<Uuid> for TenantId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
