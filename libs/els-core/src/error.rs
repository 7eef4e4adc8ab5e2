//! Error types for els-core.

use thiserror::Error;

/// Errors raised while loading or validating the content catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog contains no units")]
    Empty,

    #[error("unit at position {index} has invalid id {id} (must be >= 1)")]
    InvalidId { index: usize, id: u32 },

    #[error("duplicate unit id {id}")]
    DuplicateUnitId { id: u32 },

    #[error("unit {id} has an empty word list")]
    NoWords { id: u32 },

    #[error("unit {id} repeats the word {word:?}")]
    DuplicateWord { id: u32, word: String },

    #[error("malformed catalog data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Errors raised by the exercise session state machine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("cannot start a session with zero questions")]
    NoQuestions,
}

/// Errors raised while capturing the student profile at entry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },
}
