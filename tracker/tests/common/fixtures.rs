//! Test fixtures and data for tracker tests
//!
//! Piece keys are written exactly as the optimizer emits them.

use shared::{OptimizeResponse, PieceCounts, Solution, Stat, TargetStats, TuningDemand, TuningRequirements};

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    /// Regular piece tuned +5 Melee / -5 Grenade
    pub const BRAWLER_TUNED: &'static str = r#"{"arch": "Brawler", "tertiary": "Health", "tuning_mode": "tuned", "mod_target": "Melee", "tuned_stat": "Melee", "siphon_from": "Grenade"}"#;
    /// Regular piece without a fixed tuning
    pub const GUNNER_PLAIN: &'static str = r#"{"arch": "Gunner", "tertiary": "Melee", "tuning_mode": "none", "mod_target": "Weapons", "tuned_stat": null, "siphon_from": null}"#;
    pub const BULWARK_BALANCED: &'static str = r#"{"arch": "Bulwark", "tertiary": "Class", "tuning_mode": "balanced", "mod_target": "Health", "tuned_stat": null, "siphon_from": null}"#;
    pub const EXOTIC: &'static str = r#"{"arch": "Exotic Grenadier", "tertiary": "Super", "tuning_mode": "none", "mod_target": "Grenade", "tuned_stat": null, "siphon_from": null}"#;
    pub const EXOTIC_CLASS_ITEM: &'static str = r#"{"arch": "Exotic Class Item", "tertiary": "Weapons", "tuning_mode": "none", "mod_target": "Super", "tuned_stat": null, "siphon_from": null}"#;
    pub const MALFORMED: &'static str = "{\"arch\": \"Brawler\"";

    pub const TEST_TARGETS: [(Stat, u32); 3] = [(Stat::Health, 100), (Stat::Melee, 150), (Stat::Grenade, 90)];

    pub fn targets() -> TargetStats {
        Self::TEST_TARGETS.into_iter().collect()
    }

    pub fn solution(pieces: &[(&str, u32)], tuning: &[(Stat, u32, Stat)]) -> Solution {
        let mut requirements = TuningRequirements::new();
        for (target, count, siphon_from) in tuning {
            let mut demands: Vec<TuningDemand> = requirements.get(target).cloned().unwrap_or_default();
            demands.push(TuningDemand { count: *count, siphon_from: *siphon_from });
            requirements.insert(*target, demands);
        }
        Solution {
            pieces: pieces.iter().map(|(key, count)| (key.to_string(), *count)).collect::<PieceCounts>(),
            deviation: 0.0,
            actual_stats: None,
            tuning_requirements: if requirements.is_empty() { None } else { Some(requirements) },
            flexible_pieces: None,
        }
    }

    /// `{A:2, B:1}` with A non-exotic and B an exotic
    pub fn two_regular_one_exotic() -> Solution {
        Self::solution(&[(Self::GUNNER_PLAIN, 2), (Self::EXOTIC, 1)], &[])
    }

    /// Two flexible pieces against a single Melee tuning
    pub fn contested_melee() -> Solution {
        Self::solution(&[(Self::BRAWLER_TUNED, 2)], &[(Stat::Melee, 1, Stat::Grenade)])
    }

    /// Five pieces covering every kind, with three tunings
    pub fn full_build() -> Solution {
        Self::solution(
            &[
                (Self::BRAWLER_TUNED, 2),
                (Self::BULWARK_BALANCED, 1),
                (Self::EXOTIC, 1),
                (Self::EXOTIC_CLASS_ITEM, 1),
            ],
            &[(Stat::Melee, 2, Stat::Grenade), (Stat::Health, 1, Stat::Super)],
        )
    }

    pub fn response_json() -> String {
        let response = OptimizeResponse {
            solutions: vec![Self::full_build(), Self::contested_melee()],
            message: Some("Found 2 optimal solution(s)".to_string()),
            compute_time_seconds: Some(0.8),
            cached: Some(false),
        };
        serde_json::to_string(&response).unwrap()
    }
}
