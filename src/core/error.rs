//! Error types for reading operations.

use thiserror::Error;

use crate::cards::CardId;

/// Errors that can occur while building a catalog or interpreting a reading.
///
/// Engine failures are atomic: no partial interpretation is ever returned.
#[derive(Error, Debug)]
pub enum ReadingError {
    /// A placed card references an id missing from the catalog.
    #[error("card not found: {0}")]
    CardNotFound(CardId),

    /// A placed card references a position index missing from the spread.
    #[error("position not found: {0}")]
    PositionNotFound(i32),

    /// Two catalog entries share an id.
    #[error("duplicate card id: {0}")]
    DuplicateCard(CardId),

    /// Catalog JSON could not be decoded.
    #[error("invalid catalog: {0}")]
    Catalog(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ReadingError>;
