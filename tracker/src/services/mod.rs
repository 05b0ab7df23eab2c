//! Service implementations
//!
//! Concrete checklist and fingerprint stores behind the traits in
//! [`crate::traits`].

pub mod json_store;
pub mod memory_store;

#[cfg(test)]
mod tests;

pub use json_store::JsonFileStore;
pub use memory_store::{InMemoryChecklistStore, SessionFingerprints};
