//! `PostgreSQL` lookup into the externally-owned applications table.

use super::repository::TaskPgPool;
use super::schema::applications;
use crate::domain::{ApplicationId, TenantId};
use crate::ports::{ApplicationDirectory, ApplicationDirectoryError, ApplicationDirectoryResult};
use async_trait::async_trait;
use diesel::prelude::*;

/// `PostgreSQL`-backed application directory.
#[derive(Debug, Clone)]
pub struct PostgresApplicationDirectory {
    pool: TaskPgPool,
}

impl PostgresApplicationDirectory {
    /// Creates a new directory from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApplicationDirectory for PostgresApplicationDirectory {
    async fn tenant_of(&self, id: ApplicationId) -> ApplicationDirectoryResult<Option<TenantId>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ApplicationDirectoryError::persistence)?;
            let tenant = applications::table
                .filter(applications::id.eq(id.into_inner()))
                .select(applications::tenant_id)
                .first::<uuid::Uuid>(&mut connection)
                .optional()
                .map_err(ApplicationDirectoryError::persistence)?;
            Ok(tenant.map(TenantId::from_uuid))
        })
        .await
        .map_err(ApplicationDirectoryError::persistence)?
    }
}
