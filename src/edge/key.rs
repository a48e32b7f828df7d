use std::{cmp::Ordering, fmt, str::FromStr};

use super::{codec, EdgeOrd};
use crate::{error::EdgeKeyError, span::ByteSpan};

/// Destination id that matches any destination under [`EdgeKey`] equality.
pub const ANY_DESTINATION: i32 = -1;

/// Directed edge `source -> destination` that owns its encoded bytes.
///
/// The key exposes a [`ByteSpan`] over its own `"<source>|<destination>"`
/// buffer for callers that store or log it, but never compares through those
/// bytes: ordering is numeric on `(source, destination)` and equality treats
/// [`ANY_DESTINATION`] as a wildcard.
///
/// Wildcard equality is not transitive, `(1, -1) == (1, 5)` and
/// `(1, -1) == (1, 7)` while `(1, 5) != (1, 7)`, so `EdgeKey` implements
/// `PartialEq` only. Sorted containers key on [`EdgeOrd`] instead.
#[derive(Clone, Default)]
pub struct EdgeKey {
    source: i32,
    destination: i32,
    encoded: String,
}

impl EdgeKey {
    /// Build the edge `source -> destination` and format its bytes.
    pub fn new(source: i32, destination: i32) -> Self {
        Self {
            source,
            destination,
            encoded: codec::encode(source, destination),
        }
    }

    /// Edge pattern matching every edge leaving `source`.
    pub fn any_destination(source: i32) -> Self {
        Self::new(source, ANY_DESTINATION)
    }

    /// Parse the `"<source>|<destination>"` bytes written by [`EdgeKey::new`].
    pub fn decode(bytes: &[u8]) -> Result<Self, EdgeKeyError> {
        let (source, destination) = codec::decode(bytes)?;
        Ok(Self::new(source, destination))
    }

    /// Source vertex id.
    pub fn source(&self) -> i32 {
        self.source
    }

    /// Destination vertex id, [`ANY_DESTINATION`] for a wildcard.
    pub fn destination(&self) -> i32 {
        self.destination
    }

    /// Whether the destination is the wildcard.
    pub fn is_wildcard(&self) -> bool {
        self.destination == ANY_DESTINATION
    }

    /// Whether the key carries formatted bytes. Only a defaulted key does not.
    pub fn is_encoded(&self) -> bool {
        !self.encoded.is_empty()
    }

    /// Borrowed view over the owned encoded bytes.
    pub fn as_span(&self) -> ByteSpan<'_> {
        ByteSpan::from(self.encoded.as_str())
    }

    /// Encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.encoded.as_bytes()
    }

    /// Encoded text.
    pub fn as_str(&self) -> &str {
        &self.encoded
    }

    /// Numeric three-way comparison: source first, then destination.
    ///
    /// The wildcard is an ordinary `-1` here, so `(1, -1)` sorts before
    /// `(1, 0)`.
    pub fn compare(&self, other: &EdgeKey) -> Ordering {
        self.source
            .cmp(&other.source)
            .then(self.destination.cmp(&other.destination))
    }

    /// Wrap the key for use in ordered or hashed containers.
    pub fn ordered(self) -> EdgeOrd {
        EdgeOrd::new(self)
    }
}

impl PartialEq for EdgeKey {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
            && (self.destination == other.destination
                || self.is_wildcard()
                || other.is_wildcard())
    }
}

impl FromStr for EdgeKey {
    type Err = EdgeKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s.as_bytes())
    }
}

impl TryFrom<ByteSpan<'_>> for EdgeKey {
    type Error = EdgeKeyError;

    fn try_from(span: ByteSpan<'_>) -> Result<Self, Self::Error> {
        Self::decode(span.as_bytes())
    }
}

impl From<(i32, i32)> for EdgeKey {
    fn from((source, destination): (i32, i32)) -> Self {
        Self::new(source, destination)
    }
}

impl fmt::Debug for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EdgeKey")
            .field("source", &self.source)
            .field("destination", &self.destination)
            .finish()
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(source: i32, destination: i32) -> EdgeKey {
        EdgeKey::new(source, destination)
    }

    #[test]
    fn default_has_no_encoding() {
        let key = EdgeKey::default();
        assert_eq!((key.source(), key.destination()), (0, 0));
        assert!(!key.is_encoded());
        assert!(key.as_span().is_empty());
    }

    #[test]
    fn new_formats_owned_buffer() {
        let key = edge(12, -1);
        assert_eq!(key.as_str(), "12|-1");
        assert_eq!(key.as_span().as_bytes(), b"12|-1");
        assert_eq!(key.as_span().as_ptr(), key.as_bytes().as_ptr());
        assert!(key.is_wildcard());
        assert_eq!(key.to_string(), "12|-1");
    }

    #[test]
    fn clone_owns_its_own_buffer() {
        let key = edge(3, 4);
        let copy = key.clone();
        assert_ne!(copy.as_bytes().as_ptr(), key.as_bytes().as_ptr());
        assert_eq!(copy.as_str(), key.as_str());
    }

    #[test]
    fn compare_orders_by_source_then_destination() {
        assert_eq!(edge(2, 3).compare(&edge(2, 4)), Ordering::Less);
        assert_eq!(edge(3, 0).compare(&edge(2, 9)), Ordering::Greater);
        assert_eq!(edge(5, 5).compare(&edge(5, 5)), Ordering::Equal);
        assert_eq!(edge(1, -1).compare(&edge(1, 0)), Ordering::Less);
    }

    #[test]
    fn compare_is_numeric_not_textual() {
        let (ten, two) = (edge(10, 1), edge(2, 1));
        assert_eq!(ten.compare(&two), Ordering::Greater);
        assert_eq!(ten.as_span().compare(&two.as_span()), Ordering::Less);
    }

    #[test]
    fn compare_is_antisymmetric_and_transitive() {
        let mut rng = fastrand::Rng::with_seed(0xED6E);
        for _ in 0..2_000 {
            let mut keys: Vec<EdgeKey> = (0..3)
                .map(|_| edge(rng.i32(-2..20), rng.i32(-2..20)))
                .collect();
            let (a, b) = (&keys[0], &keys[1]);
            assert_eq!(a.compare(b), b.compare(a).reverse());
            assert_eq!(a.compare(a), Ordering::Equal);

            keys.sort_by(EdgeKey::compare);
            assert_ne!(keys[0].compare(&keys[2]), Ordering::Greater);
        }
    }

    #[test]
    fn wildcard_destination_matches_any() {
        assert_eq!(edge(1, -1), edge(1, 5));
        assert_eq!(edge(1, 5), edge(1, -1));
        assert_eq!(edge(1, -1), edge(1, 7));
        assert_ne!(edge(1, -1), edge(2, 5));
        assert_eq!(EdgeKey::any_destination(4), edge(4, 0));
    }

    #[test]
    fn wildcard_equality_is_not_transitive() {
        let any = edge(1, -1);
        let (five, seven) = (edge(1, 5), edge(1, 7));
        assert!(any == five);
        assert!(any == seven);
        assert!(five != seven);
    }

    #[test]
    fn exact_equality_without_wildcard() {
        assert_eq!(edge(3, 3), edge(3, 3));
        assert_ne!(edge(3, 3), edge(3, 4));
        assert_ne!(edge(3, 3), edge(4, 3));
    }

    #[test]
    fn decode_reads_encoded_form() {
        let key: EdgeKey = "7|-1".parse().unwrap();
        assert_eq!((key.source(), key.destination()), (7, -1));
        assert_eq!(key.as_str(), "7|-1");

        let stored = edge(40, 2);
        let back = EdgeKey::try_from(stored.as_span()).unwrap();
        assert_eq!(back.compare(&stored), Ordering::Equal);

        assert_eq!(
            EdgeKey::decode(b"7-1").unwrap_err(),
            EdgeKeyError::MissingSeparator
        );
    }
}
