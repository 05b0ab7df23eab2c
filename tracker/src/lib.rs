//! Armor farming checklist tracker
//!
//! Expands optimizer solutions into per-piece checklists, tracks which armor
//! slot each farmed piece went into and which tuning it rolled, and keeps
//! the collection in a pluggable checklist store.

pub mod core;
pub mod error;
pub mod services;
pub mod tracker;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use self::core::{Overview, Progress, SlotChange, SolutionSummary};
pub use error::{TrackerError, TrackerResult};
pub use services::{InMemoryChecklistStore, JsonFileStore, SessionFingerprints};
pub use tracker::ChecklistTracker;
pub use traits::{ChecklistStore, FingerprintStore, MockChecklistStore, MockFingerprintStore};
pub use types::{
    ChecklistArmorItem, ChecklistModItem, ChecklistState, ChecklistTuningItem, ItemKind,
    ItemTuningMode, SlotsUsed,
};
