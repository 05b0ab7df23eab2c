//! Tracker-specific error types

use shared::{ChecklistId, SharedError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Checklist not found: {checklist_id}")]
    ChecklistNotFound { checklist_id: ChecklistId },

    #[error("Solution already saved as a checklist: {fingerprint}")]
    AlreadySaved { fingerprint: String },

    #[error("Storage operation failed: {operation}: {message}")]
    Storage { operation: String, message: String },

    #[error("Shared component error")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl TrackerError {
    pub fn storage(operation: impl Into<String>, message: impl Into<String>) -> Self {
        TrackerError::Storage {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

pub type TrackerResult<T> = Result<T, TrackerError>;
