//! Followup: multi-tenant follow-up task tracking core.
//!
//! This crate provides the business core for tracking follow-up tasks
//! (calls, emails, reviews) attached to applications in a multi-tenant
//! workflow: validated task creation, the current-day operator queue,
//! and the completion state transition.
//!
//! # Architecture
//!
//! Followup follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//! - **Services**: Orchestration of domain logic over the ports
//!
//! Transports (HTTP endpoints, UI) and authentication sit outside this
//! crate and talk to the [`services`] layer.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
