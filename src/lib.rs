#![deny(missing_docs)]
//! Zero-copy key building blocks for graph-shaped storage.
//!
//! [`ByteSpan`] is a borrowed view over bytes owned elsewhere, ordered
//! lexicographically. [`EdgeKey`] names a directed edge by its
//! `(source, destination)` vertex ids, owns its `"<source>|<destination>"`
//! encoding, orders numerically and treats a destination of `-1` as a
//! wildcard under equality.
//!
//! # Preconditions
//!
//! [`ByteSpan::byte_at`] and [`ByteSpan::remove_prefix`] panic when their
//! preconditions are broken. The `unchecked-contracts` feature turns those
//! checks into debug assertions; the `try_*` variants report a
//! [`SpanError`] instead.
//!
//! # Features
//!
//! - `bytes`: conversions to and from `bytes::Bytes`.
//! - `unchecked-contracts`: precondition checks only in debug builds.

mod contract;
mod logging;

/// Orderings over encoded keys.
pub mod comparator;

/// Graph edge keys and their byte encoding.
pub mod edge;

/// Error types.
pub mod error;

/// Heap accounting for keys.
pub mod heap_size;

/// Borrowed byte span views.
pub mod span;

pub use crate::{
    comparator::{BytewiseComparator, Comparator, EdgeComparator},
    edge::{EdgeKey, EdgeOrd, ANY_DESTINATION},
    error::{EdgeKeyError, Error, SpanError},
    heap_size::HeapSize,
    span::ByteSpan,
};
