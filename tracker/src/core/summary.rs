//! Pre-save solution summary
//!
//! Groups a solution's pieces the way a player farms them: by archetype,
//! tertiary and tuning kind, ignoring mod target and the concrete stat a
//! flexible tuning goes to.

use shared::{Solution, Stat};

use crate::core::codec::{self, PieceDescriptor, TuningMode};

/// Tuning kind shown for a piece group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    Exotic,
    Balanced,
    /// Takes one +5/-5 tuning; matches `ItemTuningMode::Flexible` once saved
    Flexible,
}

impl GroupKind {
    fn of(descriptor: &PieceDescriptor) -> Self {
        if descriptor.is_exotic() {
            return GroupKind::Exotic;
        }
        match descriptor.tuning_mode {
            TuningMode::Balanced => GroupKind::Balanced,
            TuningMode::Tuned | TuningMode::None => GroupKind::Flexible,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GroupKind::Exotic => "Exotic",
            GroupKind::Balanced => "Balanced",
            GroupKind::Flexible => "Flexible",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieceGroup {
    pub group_key: String,
    pub archetype: String,
    pub tertiary: Stat,
    pub kind: GroupKind,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Allocation {
    Sufficient,
    Insufficient,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SolutionSummary {
    pub groups: Vec<PieceGroup>,
    pub mods: Vec<(Stat, u32)>,
    pub tuning: Vec<(Stat, u32)>,
    pub total_pieces: u32,
    pub total_tuning: u32,
    /// Missing from the response counts as zero
    pub flexible_pieces: u32,
    pub allocation: Allocation,
    pub deviation: f64,
    pub exact_match: bool,
}

fn add_to<K: PartialEq>(totals: &mut Vec<(K, u32)>, key: K, count: u32) {
    match totals.iter_mut().find(|(existing, _)| *existing == key) {
        Some((_, total)) => *total = total.saturating_add(count),
        None => totals.push((key, count)),
    }
}

pub fn summarize(solution: &Solution) -> SolutionSummary {
    let mut groups: Vec<PieceGroup> = Vec::new();
    let mut mods = Vec::new();

    for (key, count) in solution.pieces.iter() {
        // Undecodable keys are reported when the solution is expanded
        let Ok(descriptor) = codec::decode(key) else {
            continue;
        };
        let group_key = codec::group_key(&descriptor);
        match groups.iter_mut().find(|group| group.group_key == group_key) {
            Some(group) => group.count = group.count.saturating_add(*count),
            None => groups.push(PieceGroup {
                group_key,
                archetype: descriptor.archetype.clone(),
                tertiary: descriptor.tertiary,
                kind: GroupKind::of(&descriptor),
                count: *count,
            }),
        }
        add_to(&mut mods, descriptor.mod_target, *count);
    }

    let mut tuning = Vec::new();
    if let Some(requirements) = &solution.tuning_requirements {
        for (stat, demands) in requirements.iter() {
            let demand = demands.iter().fold(0u32, |total, d| total.saturating_add(d.count));
            if demand > 0 {
                add_to(&mut tuning, *stat, demand);
            }
        }
    }

    let total_tuning = solution.total_tuning_demand();
    let flexible_pieces = solution.flexible_pieces.unwrap_or(0);
    let allocation = if flexible_pieces >= total_tuning {
        Allocation::Sufficient
    } else {
        Allocation::Insufficient
    };

    SolutionSummary {
        total_pieces: groups.iter().fold(0u32, |total, g| total.saturating_add(g.count)),
        groups,
        mods,
        tuning,
        total_tuning,
        flexible_pieces,
        allocation,
        deviation: solution.deviation,
        exact_match: solution.deviation == 0.0,
    }
}
