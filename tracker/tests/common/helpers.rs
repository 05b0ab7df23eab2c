//! Test helpers and builder patterns for tracker tests

use shared::{ArmorSlot, ChecklistId, ItemId, Solution};
use tracker::{
    ChecklistState, ChecklistTracker, InMemoryChecklistStore, MockChecklistStore,
    MockFingerprintStore, SessionFingerprints,
};

use super::fixtures::TestFixtures;

pub type MemoryTracker = ChecklistTracker<InMemoryChecklistStore, SessionFingerprints>;
pub type MockTracker = ChecklistTracker<MockChecklistStore, MockFingerprintStore>;

/// Builder for trackers backed by mocks with permissive defaults
pub struct TrackerBuilder {
    store: MockChecklistStore,
    fingerprints: MockFingerprintStore,
}

impl TrackerBuilder {
    pub fn new() -> Self {
        Self {
            store: MockChecklistStore::new(),
            fingerprints: MockFingerprintStore::new(),
        }
    }

    /// Configure the checklist store mock with a setup function
    pub fn with_store<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut MockChecklistStore),
    {
        setup(&mut self.store);
        self
    }

    /// Configure the fingerprint store mock with a setup function
    pub fn with_fingerprints<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut MockFingerprintStore),
    {
        setup(&mut self.fingerprints);
        self
    }

    /// Build, filling in defaults for anything not configured.
    ///
    /// Expectations set through `with_*` are matched first, so the defaults
    /// below only catch calls the test did not care about.
    pub fn build(mut self) -> MockTracker {
        self.store.expect_load_all().returning(|| Ok(vec![])).times(0..);
        self.store.expect_get().returning(|_| Ok(None)).times(0..);
        self.store.expect_upsert().returning(|_| Ok(())).times(0..);
        self.store.expect_delete().returning(|_| Ok(())).times(0..);

        self.fingerprints.expect_contains().returning(|_| false).times(0..);
        self.fingerprints.expect_insert().returning(|_| ()).times(0..);
        self.fingerprints.expect_remove().returning(|_| ()).times(0..);

        ChecklistTracker::new(self.store, self.fingerprints)
    }
}

impl Default for TrackerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helpers shared by the suites
pub struct TestHelpers;

impl TestHelpers {
    pub fn memory_tracker() -> MemoryTracker {
        ChecklistTracker::new(InMemoryChecklistStore::new(), SessionFingerprints::new())
    }

    /// Save a solution into a fresh in-memory tracker
    pub fn tracker_with(solution: &Solution) -> (MemoryTracker, ChecklistId) {
        let mut tracker = Self::memory_tracker();
        let id = tracker.save_solution(solution, TestFixtures::targets(), 0).unwrap();
        (tracker, id)
    }

    pub fn state<C, F>(tracker: &ChecklistTracker<C, F>, id: ChecklistId) -> ChecklistState
    where
        C: tracker::ChecklistStore,
        F: tracker::FingerprintStore,
    {
        tracker.get(id).cloned().expect("checklist exists")
    }

    /// Id of the first armor item with the given archetype
    pub fn armor_id(state: &ChecklistState, archetype: &str) -> ItemId {
        state
            .armor_items
            .iter()
            .find(|item| item.archetype == archetype)
            .map(|item| item.id)
            .expect("armor item exists")
    }

    pub fn assert_consistent(state: &ChecklistState) {
        assert!(state.slots_consistent(), "slot map and items disagree: {:?}", state.slots_used);
        for slot in ArmorSlot::ALL {
            let holders = state.armor_items.iter().filter(|i| i.assigned_slot == Some(slot)).count();
            assert!(holders <= 1, "{slot} held by {holders} items");
        }
    }
}
