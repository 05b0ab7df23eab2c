//! Service-specific tests
//!
//! Each store has its own test file; shared sample data lives in `common`.


pub mod common {
    use shared::{PieceCounts, Solution, Stat, TargetStats};

    use crate::core::expander::expand_solution;
    use crate::types::ChecklistState;

    pub const BRAWLER: &str = r#"{"arch": "Brawler", "tertiary": "Health", "tuning_mode": "tuned", "mod_target": "Melee", "tuned_stat": "Melee", "siphon_from": "Grenade"}"#;

    /// Two-piece checklist with a unique id
    pub fn sample_checklist(name: &str) -> ChecklistState {
        let pieces: PieceCounts = [(BRAWLER.to_string(), 2)].into_iter().collect();
        let solution = Solution {
            pieces,
            deviation: 0.0,
            actual_stats: None,
            tuning_requirements: None,
            flexible_pieces: Some(2),
        };
        let targets: TargetStats = [(Stat::Melee, 150)].into_iter().collect();
        expand_solution(&solution, targets, name)
    }
}
