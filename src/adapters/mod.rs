//! Adapter implementations of the follow-up ports.

pub mod memory;
pub mod postgres;
