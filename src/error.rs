//! Error types for parsoid-media.
//!
//! The error surface is deliberately narrow: extraction favors graceful
//! degradation (omitted fields, excluded elements) over failure, so the only
//! fatal condition is input that cannot be parsed as a document at all.

/// Error type for media extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTML parsing failed for the whole document.
    #[error("HTML parsing failed: {0}")]
    ParseError(String),
}

/// Result type alias for media extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
