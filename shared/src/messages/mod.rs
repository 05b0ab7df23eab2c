//! Message types crossing the tracker's boundaries
//!
//! - `solution`: what the external optimizer hands us
//! - `events`: notifications broadcast when checklists are saved or deleted
//! - `config`: tracker configuration

pub mod config;
pub mod events;
pub mod solution;

pub use config::TrackerConfig;
pub use events::ChecklistEvent;
pub use solution::{
    OptimizeResponse, OrderedMap, PieceCounts, Solution, TargetStats, TuningDemand,
    TuningRequirements,
};
