//! `PostgreSQL` adapters for follow-up task persistence.

mod directory;
mod models;
mod repository;
mod schema;

pub use directory::PostgresApplicationDirectory;
pub use repository::{PostgresTaskRepository, TaskPgPool};
