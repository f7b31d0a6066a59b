//! In-memory adapters backing the follow-up ports.
//!
//! Primarily used by service-level tests; thread-safe and suitable as a
//! reference implementation of the port contracts.

mod applications;
mod task;

pub use applications::InMemoryApplicationDirectory;
pub use task::InMemoryTaskRepository;
