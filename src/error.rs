//! Recoverable errors surfaced by the checked entry points.

use std::num::ParseIntError;

/// Error returned by the checked `ByteSpan` accessors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpanError {
    /// `try_byte_at` was asked for an offset at or past the end.
    #[error("byte index {index} out of range for span of length {len}")]
    IndexOutOfRange {
        /// Requested offset.
        index: usize,
        /// Length of the span at the time of the call.
        len: usize,
    },
    /// `try_remove_prefix` was asked to drop more bytes than the span holds.
    #[error("cannot remove {requested} bytes from span of length {len}")]
    PrefixTooLong {
        /// Number of bytes the caller asked to drop.
        requested: usize,
        /// Length of the span at the time of the call.
        len: usize,
    },
}

/// Error returned when bytes do not hold a `"<source>|<destination>"` edge.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EdgeKeyError {
    /// Input had no bytes.
    #[error("edge key is empty")]
    Empty,
    /// Input was not valid UTF-8.
    #[error("edge key is not valid utf-8")]
    NotUtf8,
    /// Input had no `|` separator, or more than one.
    #[error("edge key must contain exactly one '|' separator")]
    MissingSeparator,
    /// Text before the separator is not a decimal `i32`.
    #[error("invalid edge source: {0}")]
    InvalidSource(#[source] ParseIntError),
    /// Text after the separator is not a decimal `i32`.
    #[error("invalid edge destination: {0}")]
    InvalidDestination(#[source] ParseIntError),
    /// Ids parsed, but the text is not what encoding them would produce,
    /// e.g. a leading `+`, leading zeros or `-0`.
    #[error("edge key is not in canonical form")]
    NonCanonical,
}

/// Error returned for graphslice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Span access error.
    #[error("span error: {0}")]
    Span(#[from] SpanError),
    /// Edge key decode error.
    #[error("edge key error: {0}")]
    EdgeKey(#[from] EdgeKeyError),
}
