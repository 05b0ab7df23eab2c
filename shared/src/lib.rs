//! Shared types for the armor checklist tracker
//!
//! Contains the vocabulary every consumer of the tracker agrees on: stat
//! names, armor slots, identifiers, the optimizer's solution shape and the
//! notifications broadcast when checklists come and go.

pub mod errors;
pub mod logging;
pub mod messages;
pub mod types;

pub use errors::*;
pub use types::*;

pub use messages::{
    // Optimizer boundary
    OptimizeResponse, PieceCounts, Solution, TargetStats, TuningDemand, TuningRequirements,

    // Checklist notifications
    ChecklistEvent,

    // Configuration
    TrackerConfig,
};
