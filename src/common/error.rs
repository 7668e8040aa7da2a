//! Unified error types for the deckgen library.
//!
//! The layout core itself is pure and total over its domain, so the error
//! taxonomy is deliberately narrow: only decoding a deck outline and
//! validating a configuration can fail.

use thiserror::Error;

/// Main error type for deckgen operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The deck outline could not be decoded from JSON
    #[error("Deck decode error: {0}")]
    DeckDecode(#[from] serde_json::Error),

    /// A layout configuration value is out of its legal range
    #[error("Invalid layout configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for deckgen operations.
pub type Result<T> = std::result::Result<T, Error>;
