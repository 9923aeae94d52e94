//! Backend test support utilities
//!
//! Shared helpers for the backend's integration tests: logging setup,
//! problem+json assertions and image fixtures.

pub mod fixtures;
pub mod logging;
pub mod problem_details;
