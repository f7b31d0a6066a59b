//! Lookup port for externally-owned application records.

use crate::domain::{ApplicationId, TenantId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for application directory operations.
pub type ApplicationDirectoryResult<T> = Result<T, ApplicationDirectoryError>;

/// Read-only lookup into the applications store.
///
/// This port is the tenant trust boundary: the creation service derives the
/// owning tenant exclusively through it, never from client input.
#[async_trait]
pub trait ApplicationDirectory: Send + Sync {
    /// Resolves the tenant owning the given application.
    ///
    /// Returns `None` when the application does not exist.
    async fn tenant_of(&self, id: ApplicationId) -> ApplicationDirectoryResult<Option<TenantId>>;
}

/// Errors returned by application directory implementations.
#[derive(Debug, Clone, Error)]
pub enum ApplicationDirectoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ApplicationDirectoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
