//! Core business logic modules
//!
//! Pure functions over checklist records with no I/O. Everything here is
//! deterministic apart from the fresh ids handed out during expansion.

pub mod codec;
pub mod expander;
pub mod export;
pub mod progress;
pub mod slots;
pub mod summary;
pub mod tuning;

#[cfg(test)]
mod test_support;

pub use codec::{DecodeError, PieceDescriptor, TuningMode};
pub use expander::{Expansion, expand_solution};
pub use progress::{Overview, Progress};
pub use slots::{RejectReason, SlotChange, select_slot};
pub use summary::{SolutionSummary, summarize};
pub use tuning::match_tuning;
