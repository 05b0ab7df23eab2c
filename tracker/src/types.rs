//! Checklist records
//!
//! A checklist is the expanded, trackable form of one optimizer solution.
//! Records serialize with camelCase names; that is the shape the checklist
//! store persists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::{ArmorSlot, ChecklistId, ItemId, Stat, TargetStats};

/// How an armor item relates to +5/-5 tunings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemTuningMode {
    /// Accepts any single +5/-5 tuning chosen while farming
    Flexible,
    /// Fixed balanced tuning, nothing to choose
    Balanced,
    /// No tuning slot
    None,
}

/// Slot eligibility class of an armor item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Regular,
    Exotic,
    ExoticClassItem,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistArmorItem {
    pub id: ItemId,
    pub archetype: String,
    pub tertiary: Stat,
    pub is_exotic: bool,
    pub is_exotic_class_item: bool,
    pub tuning_mode: ItemTuningMode,
    pub assigned_slot: Option<ArmorSlot>,
    pub selected_tuning: Option<Stat>,
    /// True iff `assigned_slot` is set
    pub is_completed: bool,
}

impl ChecklistArmorItem {
    pub fn kind(&self) -> ItemKind {
        if self.is_exotic_class_item {
            ItemKind::ExoticClassItem
        } else if self.is_exotic {
            ItemKind::Exotic
        } else {
            ItemKind::Regular
        }
    }

    /// Exotics never take a user-chosen tuning
    pub fn can_have_tuning(&self) -> bool {
        !self.is_exotic && !self.is_exotic_class_item
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistModItem {
    pub id: ItemId,
    pub stat: Stat,
    pub is_completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistTuningItem {
    pub id: ItemId,
    pub target_stat: Stat,
    pub siphon_stat: Stat,
    pub is_completed: bool,
    /// Armor item currently satisfying this requirement. Lookup only.
    pub assigned_to_item_id: Option<ItemId>,
}

/// Which armor item occupies each of the five slots
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotsUsed {
    pub helmet: Option<ItemId>,
    pub arms: Option<ItemId>,
    pub chest: Option<ItemId>,
    pub legs: Option<ItemId>,
    pub class: Option<ItemId>,
}

impl SlotsUsed {
    pub fn get(&self, slot: ArmorSlot) -> Option<ItemId> {
        match slot {
            ArmorSlot::Helmet => self.helmet,
            ArmorSlot::Arms => self.arms,
            ArmorSlot::Chest => self.chest,
            ArmorSlot::Legs => self.legs,
            ArmorSlot::Class => self.class,
        }
    }

    fn entry(&mut self, slot: ArmorSlot) -> &mut Option<ItemId> {
        match slot {
            ArmorSlot::Helmet => &mut self.helmet,
            ArmorSlot::Arms => &mut self.arms,
            ArmorSlot::Chest => &mut self.chest,
            ArmorSlot::Legs => &mut self.legs,
            ArmorSlot::Class => &mut self.class,
        }
    }

    pub fn occupy(&mut self, slot: ArmorSlot, item_id: ItemId) {
        *self.entry(slot) = Some(item_id);
    }

    pub fn release(&mut self, slot: ArmorSlot) {
        *self.entry(slot) = None;
    }

    /// Free, or held by `item_id` itself
    pub fn is_available_to(&self, slot: ArmorSlot, item_id: ItemId) -> bool {
        self.get(slot).is_none_or(|occupant| occupant == item_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ArmorSlot, Option<ItemId>)> + '_ {
        ArmorSlot::ALL.into_iter().map(|slot| (slot, self.get(slot)))
    }

    pub fn occupied_count(&self) -> usize {
        self.iter().filter(|(_, occupant)| occupant.is_some()).count()
    }
}

/// What the checklist was built against, frozen at creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionSnapshot {
    pub target_stats: TargetStats,
    pub deviation: f64,
    /// Fingerprint of the originating solution, released on delete
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistState {
    pub id: ChecklistId,
    pub name: String,
    pub solution_data: SolutionSnapshot,
    pub armor_items: Vec<ChecklistArmorItem>,
    pub mod_items: Vec<ChecklistModItem>,
    pub tuning_items: Vec<ChecklistTuningItem>,
    pub slots_used: SlotsUsed,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl ChecklistState {
    pub fn armor_item(&self, item_id: ItemId) -> Option<&ChecklistArmorItem> {
        self.armor_items.iter().find(|item| item.id == item_id)
    }

    pub fn mod_item(&self, mod_id: ItemId) -> Option<&ChecklistModItem> {
        self.mod_items.iter().find(|item| item.id == mod_id)
    }

    pub fn progress(&self) -> crate::core::Progress {
        crate::core::progress::progress(self)
    }

    /// Slot map and per-item slots describe the same assignment
    pub fn slots_consistent(&self) -> bool {
        let forward = self.slots_used.iter().all(|(slot, occupant)| match occupant {
            Some(item_id) => self
                .armor_item(item_id)
                .is_some_and(|item| item.assigned_slot == Some(slot)),
            None => true,
        });
        let backward = self.armor_items.iter().all(|item| match item.assigned_slot {
            Some(slot) => self.slots_used.get(slot) == Some(item.id) && item.is_completed,
            None => !item.is_completed,
        });
        forward && backward
    }
}
