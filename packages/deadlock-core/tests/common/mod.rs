//! Common test utilities for deadlock-core
//!
//! Shared fixtures and assertions for integration and property tests.
#![allow(dead_code)]

mod assertions;
mod fixtures;

// Re-export all utilities
pub use assertions::*;
pub use fixtures::*;
