//! Checklist lifecycle notifications
//!
//! Broadcast to anything that derives state from the checklist collection,
//! e.g. a solution view that greys out "save" for solutions already saved.

use serde::{Deserialize, Serialize};

use crate::types::ChecklistId;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum ChecklistEvent {
    /// A solution was turned into a new checklist
    Saved {
        checklist_id: ChecklistId,
        fingerprint: Option<String>,
    },
    /// A checklist was removed; its fingerprint (if any) is free again
    Deleted {
        checklist_id: ChecklistId,
        fingerprint: Option<String>,
    },
}

impl ChecklistEvent {
    pub fn checklist_id(&self) -> ChecklistId {
        match self {
            ChecklistEvent::Saved { checklist_id, .. } | ChecklistEvent::Deleted { checklist_id, .. } => {
                *checklist_id
            }
        }
    }
}
