//! Common test utilities and infrastructure
//!
//! Shared fixtures and helpers used across the tracker test suites.

#![allow(dead_code, unused_imports)]

pub mod fixtures;
pub mod helpers;

// Re-export commonly used items for convenience
pub use fixtures::TestFixtures;
pub use helpers::{TestHelpers, TrackerBuilder};
