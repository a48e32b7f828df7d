//! Textual encoding of an edge: `"<source>|<destination>"`.
//!
//! Both ids are written as decimal `i32` text around a single separator, with
//! no escaping. A wildcard destination is encoded as `-1` like any other id.

use crate::{error::EdgeKeyError, logging::graphslice_log};

/// Byte separating the source id from the destination id.
pub const SEPARATOR: u8 = b'|';

/// Format `(source, destination)` as `"<source>|<destination>"`.
pub fn encode(source: i32, destination: i32) -> String {
    format!("{source}{}{destination}", SEPARATOR as char)
}

/// Parse bytes produced by [`encode`] back into `(source, destination)`.
///
/// Only the exact text `encode` writes is accepted; `"+5|0"`, `"05|0"` and
/// `"-0|0"` are rejected as [`EdgeKeyError::NonCanonical`].
pub fn decode(bytes: &[u8]) -> Result<(i32, i32), EdgeKeyError> {
    decode_inner(bytes).inspect_err(|err| {
        graphslice_log!(
            log::Level::Debug,
            "edge_decode_failed",
            "len={} error={}",
            bytes.len(),
            err
        );
    })
}

fn decode_inner(bytes: &[u8]) -> Result<(i32, i32), EdgeKeyError> {
    if bytes.is_empty() {
        return Err(EdgeKeyError::Empty);
    }
    let text = std::str::from_utf8(bytes).map_err(|_| EdgeKeyError::NotUtf8)?;
    let at = memchr::memchr(SEPARATOR, bytes).ok_or(EdgeKeyError::MissingSeparator)?;
    let (source, destination) = (&text[..at], &text[at + 1..]);
    if memchr::memchr(SEPARATOR, destination.as_bytes()).is_some() {
        return Err(EdgeKeyError::MissingSeparator);
    }
    let source = source
        .parse::<i32>()
        .map_err(EdgeKeyError::InvalidSource)?;
    let destination = destination
        .parse::<i32>()
        .map_err(EdgeKeyError::InvalidDestination)?;
    // One pair has exactly one encoding, so distinct keys never decode equal.
    if encode(source, destination).as_bytes() != bytes {
        return Err(EdgeKeyError::NonCanonical);
    }
    Ok((source, destination))
}
