//! Derived completion figures
//!
//! Progress counts slotted armor and fulfilled tunings. Mods are tracked but
//! deliberately left out of the ratio.

use crate::types::ChecklistState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    pub completed_armor: usize,
    pub total_armor: usize,
    pub completed_tuning: usize,
    pub total_tuning: usize,
    pub completed_mods: usize,
    pub total_mods: usize,
}

impl Progress {
    pub fn completed(&self) -> usize {
        self.completed_armor + self.completed_tuning
    }

    pub fn total(&self) -> usize {
        self.total_armor + self.total_tuning
    }

    /// Completion in [0, 100]; 0 when there is nothing to track
    pub fn percentage(&self) -> f64 {
        if self.total() == 0 {
            return 0.0;
        }
        self.completed() as f64 * 100.0 / self.total() as f64
    }

    /// Percentage rounded for display
    pub fn rounded_percentage(&self) -> u32 {
        self.percentage().round() as u32
    }

    pub fn is_complete(&self) -> bool {
        self.total() > 0 && self.completed() == self.total()
    }
}

pub fn progress(state: &ChecklistState) -> Progress {
    Progress {
        completed_armor: state.armor_items.iter().filter(|item| item.is_completed).count(),
        total_armor: state.armor_items.len(),
        completed_tuning: state.tuning_items.iter().filter(|item| item.is_completed).count(),
        total_tuning: state.tuning_items.len(),
        completed_mods: state.mod_items.iter().filter(|item| item.is_completed).count(),
        total_mods: state.mod_items.len(),
    }
}

/// Collection-wide counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overview {
    pub total: usize,
    pub in_progress: usize,
    pub completed: usize,
}

/// Split a collection into completed and in-progress checklists.
///
/// Empty checklists can never complete, so they count as in progress.
pub fn overview<'a>(checklists: impl IntoIterator<Item = &'a ChecklistState>) -> Overview {
    checklists.into_iter().fold(Overview::default(), |mut acc, checklist| {
        acc.total += 1;
        if checklist.progress().is_complete() {
            acc.completed += 1;
        } else {
            acc.in_progress += 1;
        }
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::slots::apply_slot_selection;
    use crate::core::test_support::{armor, checklist_with, tuned, tuning};
    use crate::core::tuning::apply_tuning_match;
    use crate::types::ItemKind;
    use shared::{ArmorSlot, Stat};

    #[test]
    fn test_empty_checklist_is_zero_and_incomplete() {
        let state = checklist_with(vec![], vec![]);
        let progress = state.progress();
        assert_eq!(progress.percentage(), 0.0);
        assert!(!progress.is_complete());
    }

    #[test]
    fn test_mods_do_not_count() {
        let mut state = checklist_with(vec![armor("A", ItemKind::Regular)], vec![]);
        state.mod_items[0].is_completed = true;
        let progress = state.progress();
        assert_eq!(progress.completed_mods, 1);
        assert_eq!(progress.percentage(), 0.0);
    }

    #[test]
    fn test_full_completion_is_exactly_100() {
        let mut state = checklist_with(
            vec![tuned(armor("A", ItemKind::Regular), Stat::Melee), armor("B", ItemKind::Exotic)],
            vec![tuning(Stat::Melee, Stat::Grenade)],
        );
        let (a, b) = (state.armor_items[0].id, state.armor_items[1].id);

        apply_slot_selection(&mut state, a, ArmorSlot::Class);
        assert_eq!(state.progress().rounded_percentage(), 33);

        apply_slot_selection(&mut state, b, ArmorSlot::Chest);
        apply_tuning_match(&mut state);
        let progress = state.progress();
        assert_eq!(progress.percentage(), 100.0);
        assert!(progress.is_complete());
    }

    #[test]
    fn test_overview_partitions_collection() {
        let empty = checklist_with(vec![], vec![]);
        let mut done = checklist_with(vec![armor("A", ItemKind::Regular)], vec![]);
        let id = done.armor_items[0].id;
        apply_slot_selection(&mut done, id, ArmorSlot::Legs);
        let open = checklist_with(vec![armor("B", ItemKind::Regular)], vec![]);

        let summary = overview([&empty, &done, &open]);
        assert_eq!(summary, Overview { total: 3, in_progress: 2, completed: 1 });
    }
}
