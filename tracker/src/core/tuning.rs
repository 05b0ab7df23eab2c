//! Tuning fulfillment
//!
//! Decides which tuning requirements are met by which armor items' chosen
//! tuning stat. Always recomputed from scratch: requirements are cleared,
//! then armor items claim, in list order, the first open requirement whose
//! target stat matches their selection. The requirement's siphon stat plays
//! no part in matching.

use crate::types::{ChecklistArmorItem, ChecklistState, ChecklistTuningItem};

/// Recompute tuning completion for the given lists
pub fn reconcile(armor_items: &[ChecklistArmorItem], tuning_items: &mut [ChecklistTuningItem]) {
    for requirement in tuning_items.iter_mut() {
        requirement.is_completed = false;
        requirement.assigned_to_item_id = None;
    }

    for item in armor_items {
        let Some(stat) = item.selected_tuning else {
            continue;
        };
        if let Some(requirement) = tuning_items
            .iter_mut()
            .find(|req| req.target_stat == stat && !req.is_completed)
        {
            requirement.is_completed = true;
            requirement.assigned_to_item_id = Some(item.id);
        }
    }
}

/// Recompute tuning completion of a checklist in place
pub fn apply_tuning_match(state: &mut ChecklistState) {
    reconcile(&state.armor_items, &mut state.tuning_items);
}

/// Functional form of [`apply_tuning_match`]
pub fn match_tuning(state: &ChecklistState) -> ChecklistState {
    let mut next = state.clone();
    apply_tuning_match(&mut next);
    next
}

/// Armor items whose selection did not claim any requirement
pub fn unmatched_selections(state: &ChecklistState) -> Vec<&ChecklistArmorItem> {
    state
        .armor_items
        .iter()
        .filter(|item| item.selected_tuning.is_some())
        .filter(|item| !state.tuning_items.iter().any(|req| req.assigned_to_item_id == Some(item.id)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::{armor, checklist_with, tuned, tuning};
    use crate::types::ItemKind;
    use shared::Stat;

    #[test]
    fn test_first_item_in_list_order_wins() {
        let state = checklist_with(
            vec![
                tuned(armor("Brawler", ItemKind::Regular), Stat::Melee),
                tuned(armor("Gunner", ItemKind::Regular), Stat::Melee),
            ],
            vec![tuning(Stat::Melee, Stat::Grenade)],
        );
        let (first, second) = (state.armor_items[0].id, state.armor_items[1].id);

        let matched = match_tuning(&state);
        assert!(matched.tuning_items[0].is_completed);
        assert_eq!(matched.tuning_items[0].assigned_to_item_id, Some(first));
        let unmatched: Vec<_> = unmatched_selections(&matched).iter().map(|i| i.id).collect();
        assert_eq!(unmatched, vec![second]);

        let mut cleared = matched.clone();
        cleared.armor_items[0].selected_tuning = None;
        let rematched = match_tuning(&cleared);
        assert_eq!(rematched.tuning_items[0].assigned_to_item_id, Some(second));
    }

    #[test]
    fn test_each_requirement_claimed_once() {
        let state = checklist_with(
            vec![
                tuned(armor("A", ItemKind::Regular), Stat::Super),
                tuned(armor("B", ItemKind::Regular), Stat::Super),
                tuned(armor("C", ItemKind::Regular), Stat::Health),
            ],
            vec![
                tuning(Stat::Super, Stat::Class),
                tuning(Stat::Super, Stat::Weapons),
                tuning(Stat::Melee, Stat::Class),
            ],
        );

        let matched = match_tuning(&state);
        assert_eq!(matched.tuning_items[0].assigned_to_item_id, Some(state.armor_items[0].id));
        assert_eq!(matched.tuning_items[1].assigned_to_item_id, Some(state.armor_items[1].id));
        assert!(!matched.tuning_items[2].is_completed);
        assert_eq!(unmatched_selections(&matched).len(), 1);
    }

    #[test]
    fn test_stale_claims_are_reset() {
        let mut state = checklist_with(
            vec![armor("A", ItemKind::Regular)],
            vec![tuning(Stat::Melee, Stat::Grenade)],
        );
        state.tuning_items[0].is_completed = true;
        state.tuning_items[0].assigned_to_item_id = Some(state.armor_items[0].id);

        let matched = match_tuning(&state);
        assert!(!matched.tuning_items[0].is_completed);
        assert_eq!(matched.tuning_items[0].assigned_to_item_id, None);
    }

    #[test]
    fn test_matching_is_idempotent() {
        let state = checklist_with(
            vec![
                tuned(armor("A", ItemKind::Regular), Stat::Melee),
                tuned(armor("B", ItemKind::Regular), Stat::Grenade),
            ],
            vec![tuning(Stat::Grenade, Stat::Super), tuning(Stat::Melee, Stat::Super)],
        );
        let once = match_tuning(&state);
        let twice = match_tuning(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_siphon_stat_is_ignored() {
        let state = checklist_with(
            vec![tuned(armor("A", ItemKind::Regular), Stat::Melee)],
            vec![tuning(Stat::Melee, Stat::Weapons)],
        );
        assert!(match_tuning(&state).tuning_items[0].is_completed);
    }
}
