//! Piece descriptor codec
//!
//! The optimizer names each armor-piece configuration by a JSON object used
//! as a map key, e.g.
//! `{"arch": "Brawler", "tertiary": "Health", "tuning_mode": "tuned",
//!   "mod_target": "Melee", "tuned_stat": "Melee", "siphon_from": "Grenade"}`.
//! Field order is fixed; `encode` writes them in that order.

use serde::{Deserialize, Serialize};
use shared::Stat;
use thiserror::Error;

/// Tuning mode as the optimizer reports it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TuningMode {
    None,
    Tuned,
    Balanced,
}

/// One armor-piece archetype configuration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceDescriptor {
    #[serde(rename = "arch")]
    pub archetype: String,
    pub tertiary: Stat,
    pub tuning_mode: TuningMode,
    pub mod_target: Stat,
    #[serde(default)]
    pub tuned_stat: Option<Stat>,
    #[serde(default)]
    pub siphon_from: Option<Stat>,
}

impl PieceDescriptor {
    pub fn is_exotic(&self) -> bool {
        self.archetype.to_lowercase().contains("exotic")
    }

    pub fn is_exotic_class_item(&self) -> bool {
        self.archetype.to_lowercase().contains("exotic class item")
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    #[error("Malformed piece key {key}: {message}")]
    Malformed { key: String, message: String },

    #[error("Inconsistent piece key {key}: {reason}")]
    Inconsistent { key: String, reason: String },
}

/// Parse a piece key. Never panics; callers skip keys that fail.
pub fn decode(key: &str) -> Result<PieceDescriptor, DecodeError> {
    let descriptor: PieceDescriptor =
        serde_json::from_str(key).map_err(|e| DecodeError::Malformed {
            key: key.to_string(),
            message: e.to_string(),
        })?;

    let tuned = descriptor.tuned_stat.is_some() && descriptor.siphon_from.is_some();
    if descriptor.tuning_mode == TuningMode::Tuned && !tuned {
        return Err(DecodeError::Inconsistent {
            key: key.to_string(),
            reason: "tuned piece without tuned_stat/siphon_from".to_string(),
        });
    }

    Ok(descriptor)
}

/// Serialize a descriptor back to its key form
pub fn encode(descriptor: &PieceDescriptor) -> String {
    // Struct of strings and unit enums; serialization cannot fail.
    serde_json::to_string(descriptor).unwrap_or_default()
}

/// Display grouping key.
///
/// Pieces that only differ by mod target or by which stat a flexible tuning
/// goes to are shown together; `tuned` is reported as `flexible`.
pub fn group_key(descriptor: &PieceDescriptor) -> String {
    let tuning = match descriptor.tuning_mode {
        TuningMode::None => "none",
        TuningMode::Tuned => "flexible",
        TuningMode::Balanced => "balanced",
    };
    serde_json::json!({
        "arch": descriptor.archetype,
        "tertiary": descriptor.tertiary,
        "tuning_mode": tuning,
    })
    .to_string()
}
