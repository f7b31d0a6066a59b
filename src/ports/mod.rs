//! Port contracts for follow-up task tracking.
//!
//! Ports define infrastructure-agnostic interfaces used by the services.

pub mod applications;
pub mod repository;

pub use applications::{ApplicationDirectory, ApplicationDirectoryError, ApplicationDirectoryResult};
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
