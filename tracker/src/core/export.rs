//! Plain-text checklist export

use crate::types::{ChecklistState, ItemTuningMode};

fn mark(done: bool) -> &'static str {
    if done { "✓" } else { "□" }
}

fn tuning_note(mode: ItemTuningMode) -> &'static str {
    match mode {
        ItemTuningMode::Flexible => "Flexible tuning -- See TUNING REQUIREMENTS section for details",
        ItemTuningMode::Balanced => "Balanced tuning",
        ItemTuningMode::None => "No tuning slot",
    }
}

/// Render a checklist as a copyable text block
pub fn render_text(checklist: &ChecklistState) -> String {
    let mut lines = Vec::new();

    lines.push(format!("Farming Checklist ({})", checklist.name));
    let targets: Vec<String> = checklist
        .solution_data
        .target_stats
        .iter()
        .map(|(stat, value)| format!("{value} {stat}"))
        .collect();
    lines.push(format!("Target Stats: {}", targets.join(", ")));
    lines.push(String::new());

    lines.push("ARMOR PIECES TO FARM:".to_string());
    for item in &checklist.armor_items {
        let slot = item.assigned_slot.map(|slot| format!(" ({slot})")).unwrap_or_default();
        lines.push(format!(
            "{} {} (Tertiary: {}){} - {}",
            mark(item.is_completed),
            item.archetype,
            item.tertiary,
            slot,
            tuning_note(item.tuning_mode)
        ));
    }
    lines.push(String::new());

    lines.push("MODS NEEDED:".to_string());
    for item in &checklist.mod_items {
        lines.push(format!("{} +10 {} Mod", mark(item.is_completed), item.stat));
    }

    if !checklist.tuning_items.is_empty() {
        lines.push(String::new());
        lines.push("TUNING REQUIREMENTS:".to_string());
        for item in &checklist.tuning_items {
            lines.push(format!(
                "{} {} Tuning: +5 {} / -5 {}",
                mark(item.is_completed),
                item.target_stat,
                item.target_stat,
                item.siphon_stat
            ));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::slots::apply_slot_selection;
    use crate::core::test_support::{armor, checklist_with, tuning};
    use crate::types::ItemKind;
    use shared::{ArmorSlot, Stat};

    #[test]
    fn test_render_full_checklist() {
        let mut state = checklist_with(
            vec![armor("Brawler", ItemKind::Regular), armor("Exotic Grenadier", ItemKind::Exotic)],
            vec![tuning(Stat::Melee, Stat::Grenade)],
        );
        state.solution_data.target_stats = [(Stat::Health, 100), (Stat::Melee, 150)].into_iter().collect();
        let id = state.armor_items[0].id;
        apply_slot_selection(&mut state, id, ArmorSlot::Chest);
        state.mod_items[1].is_completed = true;

        let expected = [
            "Farming Checklist (Test Build)",
            "Target Stats: 100 Health, 150 Melee",
            "",
            "ARMOR PIECES TO FARM:",
            "✓ Brawler (Tertiary: Health) (chest) - Flexible tuning -- See TUNING REQUIREMENTS section for details",
            "□ Exotic Grenadier (Tertiary: Health) - No tuning slot",
            "",
            "MODS NEEDED:",
            "□ +10 Weapons Mod",
            "✓ +10 Weapons Mod",
            "",
            "TUNING REQUIREMENTS:",
            "□ Melee Tuning: +5 Melee / -5 Grenade",
        ]
        .join("\n");
        assert_eq!(render_text(&state), expected);
    }

    #[test]
    fn test_tuning_section_omitted_when_empty() {
        let state = checklist_with(vec![armor("Bulwark", ItemKind::Regular)], vec![]);
        let text = render_text(&state);
        assert!(!text.contains("TUNING REQUIREMENTS:"));
        assert!(text.ends_with("□ +10 Weapons Mod"));
    }
}
