//! Error types for NoteStore
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

use crate::store::NoteId;

/// Result type alias using NoteError
pub type Result<T> = std::result::Result<T, NoteError>;

/// Unified error type for NoteStore operations
#[derive(Debug, Error)]
pub enum NoteError {
    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    /// The requested id is not present in the store.
    ///
    /// The only domain-level failure; never indicates a bug.
    #[error("Note not found: {0}")]
    NotFound(NoteId),

    /// No further ids can be assigned.
    #[error("Note id space exhausted")]
    IdSpaceExhausted,

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl NoteError {
    /// Returns true if this is the `NotFound` outcome
    pub fn is_not_found(&self) -> bool {
        matches!(self, NoteError::NotFound(_))
    }
}
