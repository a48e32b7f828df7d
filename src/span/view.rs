use std::{
    borrow::Cow,
    cmp::Ordering,
    ffi::CStr,
    fmt,
    hash::{Hash, Hasher},
    ops::Index,
};

use crate::{contract::require, error::SpanError};

/// Borrowed view over `[start, start + len)` of a buffer owned elsewhere.
///
/// Copying a span copies the reference, never the bytes. Ordering is
/// lexicographic over the bytes with the shorter span first on a common
/// prefix, which is a total order suitable for sorted-container keys.
#[derive(Clone, Copy)]
pub struct ByteSpan<'a> {
    data: &'a [u8],
}

impl<'a> ByteSpan<'a> {
    /// An empty span.
    pub const fn empty() -> Self {
        Self { data: &[] }
    }

    /// Reference every byte of `data`.
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Reference `len` bytes starting at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of `len` bytes for all of `'a`, and the
    /// memory must not be mutated while the span is alive. `ptr` may be
    /// dangling only when `len` is zero, in which case an empty span is
    /// returned.
    pub unsafe fn from_raw_parts(ptr: *const u8, len: usize) -> Self {
        if len == 0 {
            return Self::empty();
        }
        debug_assert!(!ptr.is_null());
        Self {
            data: unsafe { std::slice::from_raw_parts(ptr, len) },
        }
    }

    /// Reference the bytes of a C string, excluding the terminator.
    pub fn from_cstr(s: &'a CStr) -> Self {
        Self::new(s.to_bytes())
    }

    /// Reference `bytes` up to, not including, the first NUL.
    ///
    /// A slice with no NUL is taken whole.
    pub fn from_nul_terminated(bytes: &'a [u8]) -> Self {
        let len = memchr::memchr(0, bytes).unwrap_or(bytes.len());
        Self::new(&bytes[..len])
    }

    /// Borrow the referenced bytes.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// Pointer to the first referenced byte.
    pub fn as_ptr(&self) -> *const u8 {
        self.data.as_ptr()
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the span references zero bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Byte at offset `index`.
    ///
    /// # Panics
    ///
    /// `index` must be less than [`len`](Self::len). See the crate docs for
    /// how the `unchecked-contracts` feature changes this.
    pub fn byte_at(&self, index: usize) -> u8 {
        require!(
            index < self.len(),
            "ByteSpan::byte_at",
            "index {} >= len {}",
            index,
            self.len()
        );
        self.data[index]
    }

    /// Byte at offset `index`, or an error when it is past the end.
    pub fn try_byte_at(&self, index: usize) -> Result<u8, SpanError> {
        self.data
            .get(index)
            .copied()
            .ok_or(SpanError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Point at an empty buffer.
    pub fn clear(&mut self) {
        *self = Self::empty();
    }

    /// Drop the first `n` bytes from the view.
    ///
    /// # Panics
    ///
    /// `n` must not exceed [`len`](Self::len).
    pub fn remove_prefix(&mut self, n: usize) {
        require!(
            n <= self.len(),
            "ByteSpan::remove_prefix",
            "n {} > len {}",
            n,
            self.len()
        );
        self.data = &self.data[n..];
    }

    /// Drop the first `n` bytes, or leave the span untouched and return an
    /// error when it holds fewer than `n`.
    pub fn try_remove_prefix(&mut self, n: usize) -> Result<(), SpanError> {
        match self.data.get(n..) {
            Some(rest) => {
                self.data = rest;
                Ok(())
            }
            None => Err(SpanError::PrefixTooLong {
                requested: n,
                len: self.len(),
            }),
        }
    }

    /// Copy the referenced bytes into a new owned buffer.
    pub fn to_vec(&self) -> Vec<u8> {
        self.data.to_vec()
    }

    /// Interpret the bytes as UTF-8, replacing invalid sequences.
    pub fn to_string_lossy(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.data)
    }

    /// Copy the referenced bytes into a [`bytes::Bytes`].
    #[cfg(feature = "bytes")]
    pub fn to_bytes(&self) -> bytes::Bytes {
        bytes::Bytes::copy_from_slice(self.data)
    }

    /// Three-way lexicographic comparison; a strict prefix sorts first.
    pub fn compare(&self, other: &ByteSpan<'_>) -> Ordering {
        let common = self.len().min(other.len());
        match self.data[..common].cmp(&other.data[..common]) {
            Ordering::Equal => self.len().cmp(&other.len()),
            ordering => ordering,
        }
    }

    /// Whether `prefix` matches the leading bytes of this span.
    pub fn starts_with(&self, prefix: &ByteSpan<'_>) -> bool {
        self.len() >= prefix.len() && self.data[..prefix.len()] == *prefix.data
    }
}

impl Default for ByteSpan<'_> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a> From<&'a [u8]> for ByteSpan<'a> {
    fn from(value: &'a [u8]) -> Self {
        Self::new(value)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for ByteSpan<'a> {
    fn from(value: &'a [u8; N]) -> Self {
        Self::new(value)
    }
}

impl<'a> From<&'a Vec<u8>> for ByteSpan<'a> {
    fn from(value: &'a Vec<u8>) -> Self {
        Self::new(value)
    }
}

impl<'a> From<&'a str> for ByteSpan<'a> {
    fn from(value: &'a str) -> Self {
        Self::new(value.as_bytes())
    }
}

impl<'a> From<&'a String> for ByteSpan<'a> {
    fn from(value: &'a String) -> Self {
        Self::new(value.as_bytes())
    }
}

impl<'a> From<&'a CStr> for ByteSpan<'a> {
    fn from(value: &'a CStr) -> Self {
        Self::from_cstr(value)
    }
}

#[cfg(feature = "bytes")]
impl<'a> From<&'a bytes::Bytes> for ByteSpan<'a> {
    fn from(value: &'a bytes::Bytes) -> Self {
        Self::new(value)
    }
}

impl AsRef<[u8]> for ByteSpan<'_> {
    fn as_ref(&self) -> &[u8] {
        self.data
    }
}

impl Index<usize> for ByteSpan<'_> {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        require!(
            index < self.len(),
            "ByteSpan::index",
            "index {} >= len {}",
            index,
            self.len()
        );
        &self.data[index]
    }
}

impl PartialEq for ByteSpan<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Eq for ByteSpan<'_> {}

impl PartialOrd for ByteSpan<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByteSpan<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for ByteSpan<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.hash(state);
    }
}

impl fmt::Debug for ByteSpan<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ByteSpan(\"")?;
        for &byte in self.data {
            write!(f, "{}", std::ascii::escape_default(byte))?;
        }
        f.write_str("\")")
    }
}

impl fmt::Display for ByteSpan<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}
