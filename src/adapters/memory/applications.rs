//! In-memory application directory for tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::{ApplicationId, TenantId};
use crate::ports::{ApplicationDirectory, ApplicationDirectoryError, ApplicationDirectoryResult};

/// Thread-safe in-memory application directory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryApplicationDirectory {
    applications: Arc<RwLock<HashMap<ApplicationId, TenantId>>>,
}

impl InMemoryApplicationDirectory {
    /// Creates an empty in-memory directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an application under the given tenant.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationDirectoryError::Persistence`] when the lock is
    /// poisoned.
    pub fn register(
        &self,
        application_id: ApplicationId,
        tenant_id: TenantId,
    ) -> ApplicationDirectoryResult<()> {
        let mut applications = self.applications.write().map_err(poisoned)?;
        applications.insert(application_id, tenant_id);
        Ok(())
    }
}

fn poisoned<T>(err: std::sync::PoisonError<T>) -> ApplicationDirectoryError {
    ApplicationDirectoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ApplicationDirectory for InMemoryApplicationDirectory {
    async fn tenant_of(&self, id: ApplicationId) -> ApplicationDirectoryResult<Option<TenantId>> {
        let applications = self.applications.read().map_err(poisoned)?;
        Ok(applications.get(&id).copied())
    }
}
