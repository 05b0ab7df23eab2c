//! Checklist mutation API
//!
//! `ChecklistTracker` owns the in-memory checklist collection and applies
//! every user action to it. Each successful mutation stamps `last_updated`
//! and is written through to the checklist store. Store failures are logged
//! and never undo the in-memory change.

use std::collections::HashMap;

use chrono::Utc;
use shared::{
    ArmorSlot, ChecklistEvent, ChecklistId, ItemId, Solution, Stat, TargetStats, checklist_debug,
    checklist_error, checklist_info, logging,
};
use tokio::sync::broadcast;

use crate::core::expander::{default_name, expand_solution};
use crate::core::progress::{Overview, overview};
use crate::core::slots::{SlotChange, apply_slot_selection};
use crate::core::tuning::apply_tuning_match;
use crate::error::{TrackerError, TrackerResult};
use crate::traits::{ChecklistStore, FingerprintStore};
use crate::types::ChecklistState;

const EVENT_CAPACITY: usize = 64;

pub struct ChecklistTracker<C, F>
where
    C: ChecklistStore,
    F: FingerprintStore,
{
    checklists: HashMap<ChecklistId, ChecklistState>,

    /// Injected stores
    store: C,
    fingerprints: F,

    events: broadcast::Sender<ChecklistEvent>,
}

impl<C, F> ChecklistTracker<C, F>
where
    C: ChecklistStore,
    F: FingerprintStore,
{
    /// Create an empty tracker; call [`load`](Self::load) to read the store
    pub fn new(store: C, fingerprints: F) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            checklists: HashMap::new(),
            store,
            fingerprints,
            events,
        }
    }

    /// Replace the collection with the store's contents.
    ///
    /// A failing store leaves the collection empty. Returns how many
    /// checklists were loaded.
    pub fn load(&mut self) -> usize {
        self.checklists.clear();
        match self.store.load_all() {
            Ok(checklists) => {
                self.checklists.extend(checklists.into_iter().map(|c| (c.id, c)));
            }
            Err(e) => logging::log_error("Loading checklists", &e),
        }
        self.checklists.len()
    }

    /// Turn the `index`-th solution of a response into a new checklist
    pub fn save_solution(
        &mut self,
        solution: &Solution,
        target_stats: TargetStats,
        index: usize,
    ) -> TrackerResult<ChecklistId> {
        let fingerprint = solution.fingerprint();
        if self.fingerprints.contains(&fingerprint) {
            return Err(TrackerError::AlreadySaved { fingerprint });
        }

        let checklist = expand_solution(solution, target_stats, default_name(index));
        let checklist_id = checklist.id;

        if let Err(e) = self.store.upsert(&checklist) {
            checklist_error!(checklist_id, "❌ Failed to persist new checklist: {}", e);
        }
        checklist_info!(
            checklist_id,
            "✅ Saved '{}' ({} armor, {} tunings)",
            checklist.name,
            checklist.armor_items.len(),
            checklist.tuning_items.len()
        );
        self.checklists.insert(checklist_id, checklist);
        self.fingerprints.insert(&fingerprint);

        let _ = self.events.send(ChecklistEvent::Saved {
            checklist_id,
            fingerprint: Some(fingerprint),
        });
        Ok(checklist_id)
    }

    pub fn is_solution_saved(&self, solution: &Solution) -> bool {
        self.fingerprints.contains(&solution.fingerprint())
    }

    /// Put an armor item in a slot, move it, or take it out again
    pub fn assign_slot(
        &mut self,
        checklist_id: ChecklistId,
        item_id: ItemId,
        slot: ArmorSlot,
    ) -> TrackerResult<SlotChange> {
        let checklist = self.checklist_mut(checklist_id)?;
        let change = apply_slot_selection(checklist, item_id, slot);
        if let SlotChange::Rejected(reason) = change {
            checklist_debug!(checklist_id, "Slot {} for item {} rejected: {:?}", slot, item_id, reason);
            return Ok(change);
        }

        apply_tuning_match(checklist);
        self.persist(checklist_id);
        Ok(change)
    }

    /// Set or clear the tuning stat an armor item was farmed with.
    ///
    /// Returns false when nothing changed: unknown item, or an exotic.
    pub fn select_tuning(
        &mut self,
        checklist_id: ChecklistId,
        item_id: ItemId,
        stat: Option<Stat>,
    ) -> TrackerResult<bool> {
        let checklist = self.checklist_mut(checklist_id)?;
        let Some(item) = checklist.armor_items.iter_mut().find(|item| item.id == item_id) else {
            checklist_debug!(checklist_id, "No armor item {}", item_id);
            return Ok(false);
        };
        if !item.can_have_tuning() {
            checklist_debug!(checklist_id, "Ignoring tuning on exotic {}", item.archetype);
            return Ok(false);
        }

        item.selected_tuning = stat;
        apply_tuning_match(checklist);
        self.persist(checklist_id);
        Ok(true)
    }

    /// Flip one mod's completion. Returns false for an unknown mod.
    pub fn toggle_mod(&mut self, checklist_id: ChecklistId, mod_id: ItemId) -> TrackerResult<bool> {
        let checklist = self.checklist_mut(checklist_id)?;
        let Some(item) = checklist.mod_items.iter_mut().find(|item| item.id == mod_id) else {
            checklist_debug!(checklist_id, "No mod item {}", mod_id);
            return Ok(false);
        };

        item.is_completed = !item.is_completed;
        self.persist(checklist_id);
        Ok(true)
    }

    /// Remove a checklist and free its solution for saving again
    pub fn delete_checklist(&mut self, checklist_id: ChecklistId) -> TrackerResult<ChecklistState> {
        let checklist = self
            .checklists
            .remove(&checklist_id)
            .ok_or(TrackerError::ChecklistNotFound { checklist_id })?;

        if let Err(e) = self.store.delete(checklist_id) {
            checklist_error!(checklist_id, "❌ Failed to delete stored checklist: {}", e);
        }
        let fingerprint = checklist.solution_data.fingerprint.clone();
        if let Some(fingerprint) = &fingerprint {
            self.fingerprints.remove(fingerprint);
        }

        checklist_info!(checklist_id, "🗑️ Deleted '{}'", checklist.name);
        let _ = self.events.send(ChecklistEvent::Deleted { checklist_id, fingerprint });
        Ok(checklist)
    }

    /// Receive save and delete notifications from now on
    pub fn subscribe(&self) -> broadcast::Receiver<ChecklistEvent> {
        self.events.subscribe()
    }

    pub fn get(&self, checklist_id: ChecklistId) -> Option<&ChecklistState> {
        self.checklists.get(&checklist_id)
    }

    /// All checklists, newest first
    pub fn checklists(&self) -> Vec<&ChecklistState> {
        let mut all: Vec<&ChecklistState> = self.checklists.values().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        all
    }

    pub fn overview(&self) -> Overview {
        overview(self.checklists.values())
    }

    pub fn len(&self) -> usize {
        self.checklists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checklists.is_empty()
    }

    fn checklist_mut(&mut self, checklist_id: ChecklistId) -> TrackerResult<&mut ChecklistState> {
        self.checklists
            .get_mut(&checklist_id)
            .ok_or(TrackerError::ChecklistNotFound { checklist_id })
    }

    fn persist(&mut self, checklist_id: ChecklistId) {
        let Some(checklist) = self.checklists.get_mut(&checklist_id) else {
            return;
        };
        checklist.last_updated = Utc::now();
        if let Err(e) = self.store.upsert(checklist) {
            checklist_error!(checklist_id, "❌ Failed to persist checklist: {}", e);
        }
    }
}
