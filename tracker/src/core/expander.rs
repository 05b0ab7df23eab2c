//! Solution expansion
//!
//! Turns a grouped solution (piece key -> count, stat -> tuning demand) into
//! one entry per physical armor piece, per mod and per tuning.

use chrono::Utc;
use shared::{ChecklistId, ItemId, Solution, TargetStats, checklist_debug, checklist_warn};

use crate::core::codec::{self, DecodeError, PieceDescriptor, TuningMode};
use crate::types::{
    ChecklistArmorItem, ChecklistModItem, ChecklistState, ChecklistTuningItem, ItemTuningMode,
    SlotsUsed, SolutionSnapshot,
};

/// Flat entity lists produced from one solution
#[derive(Debug, Default)]
pub struct Expansion {
    pub armor_items: Vec<ChecklistArmorItem>,
    pub mod_items: Vec<ChecklistModItem>,
    pub tuning_items: Vec<ChecklistTuningItem>,
    /// Piece keys that failed to decode and were left out
    pub skipped: Vec<DecodeError>,
}

/// Name given to a checklist saved from the `index`-th solution of a response
pub fn default_name(index: usize) -> String {
    format!("Build Solution {}", index + 1)
}

/// Tuning mode of a tracked item.
///
/// Non-exotic pieces without a fixed tuning still take a +5/-5 tuning, so
/// they count as flexible just like explicitly tuned ones.
pub fn item_tuning_mode(descriptor: &PieceDescriptor) -> ItemTuningMode {
    match descriptor.tuning_mode {
        TuningMode::Tuned => ItemTuningMode::Flexible,
        TuningMode::Balanced => ItemTuningMode::Balanced,
        TuningMode::None if descriptor.is_exotic() => ItemTuningMode::None,
        TuningMode::None => ItemTuningMode::Flexible,
    }
}

fn armor_item(descriptor: &PieceDescriptor) -> ChecklistArmorItem {
    ChecklistArmorItem {
        id: ItemId::new(),
        archetype: descriptor.archetype.clone(),
        tertiary: descriptor.tertiary,
        is_exotic: descriptor.is_exotic(),
        is_exotic_class_item: descriptor.is_exotic_class_item(),
        tuning_mode: item_tuning_mode(descriptor),
        assigned_slot: None,
        selected_tuning: None,
        is_completed: false,
    }
}

/// Expand pieces, mods and tunings, in wire order
pub fn expand_items(solution: &Solution) -> Expansion {
    let mut expansion = Expansion::default();

    for (key, count) in solution.pieces.iter() {
        let descriptor = match codec::decode(key) {
            Ok(descriptor) => descriptor,
            Err(e) => {
                expansion.skipped.push(e);
                continue;
            }
        };

        for _ in 0..*count {
            expansion.armor_items.push(armor_item(&descriptor));
            expansion.mod_items.push(ChecklistModItem {
                id: ItemId::new(),
                stat: descriptor.mod_target,
                is_completed: false,
            });
        }
    }

    if let Some(requirements) = &solution.tuning_requirements {
        for (target_stat, demands) in requirements.iter() {
            for demand in demands {
                for _ in 0..demand.count {
                    expansion.tuning_items.push(ChecklistTuningItem {
                        id: ItemId::new(),
                        target_stat: *target_stat,
                        siphon_stat: demand.siphon_from,
                        is_completed: false,
                        assigned_to_item_id: None,
                    });
                }
            }
        }
    }

    expansion
}

/// Build a fresh checklist from a solution
pub fn expand_solution(
    solution: &Solution,
    target_stats: TargetStats,
    name: impl Into<String>,
) -> ChecklistState {
    let id = ChecklistId::new();
    let expansion = expand_items(solution);

    for error in &expansion.skipped {
        checklist_warn!(id, "⚠️ Skipping piece: {}", error);
    }
    checklist_debug!(
        id,
        "Expanded {} armor, {} mods, {} tunings",
        expansion.armor_items.len(),
        expansion.mod_items.len(),
        expansion.tuning_items.len()
    );

    let now = Utc::now();
    ChecklistState {
        id,
        name: name.into(),
        solution_data: SolutionSnapshot {
            target_stats,
            deviation: solution.deviation,
            fingerprint: Some(solution.fingerprint()),
        },
        armor_items: expansion.armor_items,
        mod_items: expansion.mod_items,
        tuning_items: expansion.tuning_items,
        slots_used: SlotsUsed::default(),
        created_at: now,
        last_updated: now,
    }
}
