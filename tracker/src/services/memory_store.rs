//! In-memory stores
//!
//! `InMemoryChecklistStore` backs tests and dry runs; `SessionFingerprints`
//! is the production fingerprint store and lives only as long as the process.

use std::collections::{HashMap, HashSet};

use shared::ChecklistId;

use crate::error::TrackerResult;
use crate::traits::{ChecklistStore, FingerprintStore};
use crate::types::ChecklistState;

#[derive(Debug, Default, Clone)]
pub struct InMemoryChecklistStore {
    records: HashMap<ChecklistId, ChecklistState>,
}

impl InMemoryChecklistStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ChecklistStore for InMemoryChecklistStore {
    fn load_all(&self) -> TrackerResult<Vec<ChecklistState>> {
        Ok(self.records.values().cloned().collect())
    }

    fn get(&self, checklist_id: ChecklistId) -> TrackerResult<Option<ChecklistState>> {
        Ok(self.records.get(&checklist_id).cloned())
    }

    fn upsert(&mut self, checklist: &ChecklistState) -> TrackerResult<()> {
        self.records.insert(checklist.id, checklist.clone());
        Ok(())
    }

    fn delete(&mut self, checklist_id: ChecklistId) -> TrackerResult<()> {
        self.records.remove(&checklist_id);
        Ok(())
    }
}

/// Fingerprints of solutions saved during this session
#[derive(Debug, Default, Clone)]
pub struct SessionFingerprints {
    saved: HashSet<String>,
}

impl SessionFingerprints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.saved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.saved.is_empty()
    }
}

impl FingerprintStore for SessionFingerprints {
    fn contains(&self, fingerprint: &str) -> bool {
        self.saved.contains(fingerprint)
    }

    fn insert(&mut self, fingerprint: &str) {
        self.saved.insert(fingerprint.to_string());
    }

    fn remove(&mut self, fingerprint: &str) {
        self.saved.remove(fingerprint);
    }
}
