//! Error types.

use std::path::PathBuf;

use crate::pass::request::{MIN_COUNT, MIN_LENGTH};

/// Fatal configuration errors, raised before any password is generated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("No character type selected")]
    NoCharacterTypes,

    #[error("Character pool is empty")]
    EmptyPool,

    #[error("No usable characters remain; unsupported special characters: {rejected}")]
    NoUsableSpecials { rejected: String },

    #[error("Password count must be at least {min}, got {0}", min = MIN_COUNT)]
    CountTooSmall(usize),

    #[error("Password length must be at least {min}, got {0}", min = MIN_LENGTH)]
    LengthTooShort(usize),

    #[error("Length {length} exceeds available character pool size {pool}")]
    LengthExceedsPool { length: usize, pool: usize },
}

/// Application-level errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Settings file '{path}': {source}")]
    Settings {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
