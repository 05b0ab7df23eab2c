//! Core types used throughout the tracker
//!
//! Identifiers, the six character stats and the five armor slots.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::errors::SharedError;

/// Unique identifier for a saved checklist
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChecklistId(Uuid);

impl ChecklistId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> Result<Self, SharedError> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| SharedError::InvalidUuid { input: s.to_string() })
    }

    /// First eight hex digits, enough to tell checklists apart on screen
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl Default for ChecklistId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ChecklistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for an armor, mod or tuning entry inside a checklist
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> Result<Self, SharedError> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| SharedError::InvalidUuid { input: s.to_string() })
    }

    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Character stats, in the order the optimizer reports them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stat {
    Health,
    Melee,
    Grenade,
    Super,
    Class,
    Weapons,
}

impl Stat {
    /// Canonical order; indexes `actualStats` in optimizer responses
    pub const ALL: [Stat; 6] = [
        Stat::Health,
        Stat::Melee,
        Stat::Grenade,
        Stat::Super,
        Stat::Class,
        Stat::Weapons,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Stat::Health => "Health",
            Stat::Melee => "Melee",
            Stat::Grenade => "Grenade",
            Stat::Super => "Super",
            Stat::Class => "Class",
            Stat::Weapons => "Weapons",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Stat {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stat::ALL
            .into_iter()
            .find(|stat| stat.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SharedError::UnknownStat { input: s.to_string() })
    }
}

/// Physical equipment slots a character can fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArmorSlot {
    Helmet,
    Arms,
    Chest,
    Legs,
    Class,
}

impl ArmorSlot {
    pub const ALL: [ArmorSlot; 5] = [
        ArmorSlot::Helmet,
        ArmorSlot::Arms,
        ArmorSlot::Chest,
        ArmorSlot::Legs,
        ArmorSlot::Class,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ArmorSlot::Helmet => "helmet",
            ArmorSlot::Arms => "arms",
            ArmorSlot::Chest => "chest",
            ArmorSlot::Legs => "legs",
            ArmorSlot::Class => "class",
        }
    }
}

impl fmt::Display for ArmorSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ArmorSlot {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "helmet" | "head" => Ok(ArmorSlot::Helmet),
            "arms" | "gauntlets" => Ok(ArmorSlot::Arms),
            "chest" => Ok(ArmorSlot::Chest),
            "legs" => Ok(ArmorSlot::Legs),
            "class" => Ok(ArmorSlot::Class),
            _ => Err(SharedError::UnknownSlot { input: s.to_string() }),
        }
    }
}
