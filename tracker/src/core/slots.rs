//! Slot assignment
//!
//! Each of the five slots holds at most one armor item, and an item sits in
//! at most one slot. `ChecklistArmorItem::assigned_slot` and `SlotsUsed` are
//! always updated together.

use shared::{ArmorSlot, ItemId};

use crate::types::{ChecklistArmorItem, ChecklistState, ItemKind, SlotsUsed};

const NON_CLASS_SLOTS: [ArmorSlot; 4] =
    [ArmorSlot::Helmet, ArmorSlot::Arms, ArmorSlot::Chest, ArmorSlot::Legs];

/// Why a slot selection did nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    UnknownItem,
    /// The item's kind can never go in this slot
    Ineligible,
    /// Another item already holds the slot
    Occupied,
}

/// Outcome of one slot selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotChange {
    Assigned(ArmorSlot),
    Moved { from: ArmorSlot, to: ArmorSlot },
    Unassigned(ArmorSlot),
    Rejected(RejectReason),
}

impl SlotChange {
    pub fn is_change(&self) -> bool {
        !matches!(self, SlotChange::Rejected(_))
    }
}

/// Slots an item kind may ever occupy
pub fn eligible_slots(kind: ItemKind) -> &'static [ArmorSlot] {
    match kind {
        ItemKind::ExoticClassItem => &[ArmorSlot::Class],
        ItemKind::Exotic => &NON_CLASS_SLOTS,
        ItemKind::Regular => &ArmorSlot::ALL,
    }
}

/// Slots the item could be put in right now (its own slot included)
pub fn available_slots(item: &ChecklistArmorItem, slots_used: &SlotsUsed) -> Vec<ArmorSlot> {
    eligible_slots(item.kind())
        .iter()
        .copied()
        .filter(|slot| slots_used.is_available_to(*slot, item.id))
        .collect()
}

/// Apply a slot selection in place.
///
/// Selecting the slot an item already holds frees it. Anything that would
/// put an item in an ineligible or taken slot leaves the state untouched.
pub fn apply_slot_selection(state: &mut ChecklistState, item_id: ItemId, slot: ArmorSlot) -> SlotChange {
    let Some(index) = state.armor_items.iter().position(|item| item.id == item_id) else {
        return SlotChange::Rejected(RejectReason::UnknownItem);
    };

    let current = state.armor_items[index].assigned_slot;
    if current == Some(slot) {
        let item = &mut state.armor_items[index];
        item.assigned_slot = None;
        item.is_completed = false;
        state.slots_used.release(slot);
        return SlotChange::Unassigned(slot);
    }

    if !eligible_slots(state.armor_items[index].kind()).contains(&slot) {
        return SlotChange::Rejected(RejectReason::Ineligible);
    }
    if !state.slots_used.is_available_to(slot, item_id) {
        return SlotChange::Rejected(RejectReason::Occupied);
    }

    if let Some(previous) = current {
        state.slots_used.release(previous);
    }
    state.slots_used.occupy(slot, item_id);
    let item = &mut state.armor_items[index];
    item.assigned_slot = Some(slot);
    item.is_completed = true;

    match current {
        Some(from) => SlotChange::Moved { from, to: slot },
        None => SlotChange::Assigned(slot),
    }
}

/// Functional form of [`apply_slot_selection`]
pub fn select_slot(state: &ChecklistState, item_id: ItemId, slot: ArmorSlot) -> (ChecklistState, SlotChange) {
    let mut next = state.clone();
    let change = apply_slot_selection(&mut next, item_id, slot);
    (next, change)
}
