//! Shared error types for the checklist tracker

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Invalid UUID: {input}")]
    InvalidUuid { input: String },

    #[error("Unknown stat: {input}")]
    UnknownStat { input: String },

    #[error("Unknown armor slot: {input}")]
    UnknownSlot { input: String },

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
