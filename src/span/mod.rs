//! Zero-copy byte span views.
//!
//! A [`ByteSpan`] borrows a contiguous byte range owned elsewhere (a block
//! buffer, a memtable arena, a caller's `String`) and hands it through the
//! engine without copying. The borrow's lifetime ties the view to its backing
//! storage, so a span can never outlive the bytes it points at.
mod view;

pub use view::ByteSpan;
