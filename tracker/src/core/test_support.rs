//! Builders for hand-made checklists used by the core unit tests

use chrono::Utc;
use shared::{ChecklistId, ItemId, Stat, TargetStats};

use crate::types::{
    ChecklistArmorItem, ChecklistModItem, ChecklistState, ChecklistTuningItem, ItemKind,
    ItemTuningMode, SlotsUsed, SolutionSnapshot,
};

pub fn armor(archetype: &str, kind: ItemKind) -> ChecklistArmorItem {
    ChecklistArmorItem {
        id: ItemId::new(),
        archetype: archetype.to_string(),
        tertiary: Stat::Health,
        is_exotic: kind != ItemKind::Regular,
        is_exotic_class_item: kind == ItemKind::ExoticClassItem,
        tuning_mode: if kind == ItemKind::Regular { ItemTuningMode::Flexible } else { ItemTuningMode::None },
        assigned_slot: None,
        selected_tuning: None,
        is_completed: false,
    }
}

pub fn tuned(mut item: ChecklistArmorItem, stat: Stat) -> ChecklistArmorItem {
    item.selected_tuning = Some(stat);
    item
}

pub fn tuning(target_stat: Stat, siphon_stat: Stat) -> ChecklistTuningItem {
    ChecklistTuningItem {
        id: ItemId::new(),
        target_stat,
        siphon_stat,
        is_completed: false,
        assigned_to_item_id: None,
    }
}

pub fn checklist_with(armor_items: Vec<ChecklistArmorItem>, tuning_items: Vec<ChecklistTuningItem>) -> ChecklistState {
    let mod_items = armor_items
        .iter()
        .map(|_| ChecklistModItem { id: ItemId::new(), stat: Stat::Weapons, is_completed: false })
        .collect();
    let now = Utc::now();
    ChecklistState {
        id: ChecklistId::new(),
        name: "Test Build".to_string(),
        solution_data: SolutionSnapshot {
            target_stats: TargetStats::new(),
            deviation: 0.0,
            fingerprint: None,
        },
        armor_items,
        mod_items,
        tuning_items,
        slots_used: SlotsUsed::default(),
        created_at: now,
        last_updated: now,
    }
}
