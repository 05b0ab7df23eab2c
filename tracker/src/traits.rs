//! Trait definitions with mockall annotations for testing
//!
//! The tracker talks to its two stores only through these traits, so the
//! mutation API can be exercised against mocks or in-memory fakes.

use shared::ChecklistId;

use crate::error::TrackerResult;
use crate::types::ChecklistState;

/// Durable checklist persistence
///
/// Records are keyed by checklist id. Implementations must hand back exactly
/// what was upserted.
#[mockall::automock]
pub trait ChecklistStore {
    /// Every stored checklist, in no particular order
    fn load_all(&self) -> TrackerResult<Vec<ChecklistState>>;

    fn get(&self, checklist_id: ChecklistId) -> TrackerResult<Option<ChecklistState>>;

    /// Insert or replace the record with the same id
    fn upsert(&mut self, checklist: &ChecklistState) -> TrackerResult<()>;

    /// Remove a record; removing a missing id is not an error
    fn delete(&mut self, checklist_id: ChecklistId) -> TrackerResult<()>;
}

/// Session-scoped set of saved solution fingerprints
#[mockall::automock]
pub trait FingerprintStore {
    fn contains(&self, fingerprint: &str) -> bool;

    fn insert(&mut self, fingerprint: &str);

    fn remove(&mut self, fingerprint: &str);
}
