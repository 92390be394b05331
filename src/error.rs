//! Error types for glyph lookup, interpolation and path construction.

use thiserror::Error;

/// Errors produced while morphing between glyphs.
///
/// Every variant is a deterministic, input-driven failure. Nothing here is
/// worth retrying.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MorphError {
    /// The symbol has no entry in the glyph table.
    #[error("unsupported symbol: {0}")]
    UnsupportedSymbol(String),

    /// Start and end point sets have different lengths.
    #[error("mismatched point count: from has {from} points, to has {to}")]
    MismatchedPointCount { from: usize, to: usize },

    /// A point set is not one anchor followed by whole cubic triples.
    #[error("invalid point count {len}: expected 1 + 3k points")]
    InvalidPointCount { len: usize },

    /// A chained transition was requested before any glyph was shown.
    #[error("no prior transition to continue from")]
    NoPriorTransition,

    /// A configured color string could not be parsed.
    #[error("invalid color: {0:?}")]
    InvalidColor(String),
}

/// Result type for morph operations.
pub type Result<T> = std::result::Result<T, MorphError>;
