//! Unit tests for the follow-up task core.
//!
//! Tests are organised by layer: domain validation and lifecycle, the
//! creation service pipeline, and the today queue, covering happy paths,
//! error cases, and edge cases for all public APIs.

mod fixtures;
mod today_queue_tests;
