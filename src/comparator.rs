//! Orderings over encoded keys.
//!
//! A storage engine that only sees raw key bytes picks one of these to keep
//! its sorted structures consistent with the typed comparison of the keys it
//! stores.

use std::cmp::Ordering;

use crate::{
    edge::{codec, EdgeKey},
    logging::graphslice_log,
    span::ByteSpan,
};

/// Total order over encoded keys.
pub trait Comparator: Send + Sync {
    /// Stable identifier persisted alongside data sorted by this comparator.
    fn name(&self) -> &'static str;

    /// Three-way comparison of two encoded keys.
    fn compare(&self, a: &[u8], b: &[u8]) -> Ordering;
}

/// Lexicographic byte order, see [`ByteSpan::compare`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BytewiseComparator;

impl Comparator for BytewiseComparator {
    fn name(&self) -> &'static str {
        "graphslice.BytewiseComparator"
    }

    fn compare(&self, a: &[u8], b: &[u8]) -> Ordering {
        ByteSpan::new(a).compare(&ByteSpan::new(b))
    }
}

/// Numeric order over `"<source>|<destination>"` keys, see
/// [`EdgeKey::compare`].
///
/// Keys that do not decode sort after every edge and byte-wise among
/// themselves. Non-canonical text such as `"05|0"` does not decode, so it
/// never compares equal to the `"5|0"` it would otherwise parse as.
///
/// A defaulted [`EdgeKey`] carries no bytes and therefore sorts with the
/// undecodable keys, even though its typed comparison treats it as `(0, 0)`.
/// Store only keys built with [`EdgeKey::new`] under this comparator.
#[derive(Clone, Copy, Debug, Default)]
pub struct EdgeComparator;

impl Comparator for EdgeComparator {
    fn name(&self) -> &'static str {
        "graphslice.EdgeComparator"
    }

    fn compare(&self, a: &[u8], b: &[u8]) -> Ordering {
        match (codec::decode(a), codec::decode(b)) {
            (Ok(a), Ok(b)) => a.cmp(&b),
            (Ok(_), Err(_)) => Ordering::Less,
            (Err(_), Ok(_)) => Ordering::Greater,
            (Err(_), Err(_)) => {
                graphslice_log!(
                    log::Level::Trace,
                    "edge_comparator_fallback",
                    "lhs_len={} rhs_len={}",
                    a.len(),
                    b.len()
                );
                BytewiseComparator.compare(a, b)
            }
        }
    }
}

impl EdgeComparator {
    /// Compare two typed keys without going through their bytes.
    pub fn compare_keys(&self, a: &EdgeKey, b: &EdgeKey) -> Ordering {
        a.compare(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytewise_matches_span_order() {
        let cmp = BytewiseComparator;
        assert_eq!(cmp.compare(b"abc", b"abd"), Ordering::Less);
        assert_eq!(cmp.compare(b"ab", b"abc"), Ordering::Less);
        assert_eq!(cmp.compare(b"b", b"abc"), Ordering::Greater);
        assert_eq!(cmp.compare(b"", b""), Ordering::Equal);
    }

    #[test]
    fn edge_order_is_numeric_on_encoded_bytes() {
        let cmp = EdgeComparator;
        let (ten, two) = (EdgeKey::new(10, 1), EdgeKey::new(2, 1));
        assert_eq!(cmp.compare(ten.as_bytes(), two.as_bytes()), Ordering::Greater);
        assert_eq!(
            BytewiseComparator.compare(ten.as_bytes(), two.as_bytes()),
            Ordering::Less
        );
        assert_eq!(cmp.compare_keys(&ten, &two), Ordering::Greater);
        assert_eq!(cmp.compare(b"2|3", b"2|4"), Ordering::Less);
        assert_eq!(cmp.compare(b"5|5", b"5|5"), Ordering::Equal);
    }

    #[test]
    fn undecodable_keys_sort_last() {
        let cmp = EdgeComparator;
        assert_eq!(cmp.compare(b"999|999", b"garbage"), Ordering::Less);
        assert_eq!(cmp.compare(b"garbage", b"-5|0"), Ordering::Greater);
        assert_eq!(cmp.compare(b"abc", b"abd"), Ordering::Less);
    }

    #[test]
    fn non_canonical_keys_stay_distinct() {
        let cmp = EdgeComparator;
        for alias in [&b"05|0"[..], b"+5|0", b"5|+0"] {
            assert_eq!(cmp.compare(alias, b"5|0"), Ordering::Greater);
            assert_eq!(cmp.compare(b"5|0", alias), Ordering::Less);
        }
        assert_eq!(cmp.compare(b"-0|0", b"0|0"), Ordering::Greater);
        assert_ne!(cmp.compare(b"05|0", b"+5|0"), Ordering::Equal);
    }

    #[test]
    fn defaulted_key_has_no_byte_order() {
        let cmp = EdgeComparator;
        let (unset, origin) = (EdgeKey::default(), EdgeKey::new(0, 0));
        assert_eq!(unset.compare(&origin), Ordering::Equal);
        assert_eq!(cmp.compare(unset.as_bytes(), origin.as_bytes()), Ordering::Greater);
    }

    #[test]
    fn edge_order_is_total_over_mixed_input() {
        let cmp = EdgeComparator;
        let mut keys: Vec<Vec<u8>> = vec![
            b"10|1".to_vec(),
            b"zz".to_vec(),
            b"2|-1".to_vec(),
            b"".to_vec(),
            b"2|1".to_vec(),
            b"1|x".to_vec(),
        ];
        keys.sort_by(|a, b| cmp.compare(a, b));
        let expected: [&[u8]; 6] = [b"2|-1", b"2|1", b"10|1", b"", b"1|x", b"zz"];
        assert_eq!(keys, expected);

        for a in &keys {
            for b in &keys {
                assert_eq!(cmp.compare(a, b), cmp.compare(b, a).reverse());
            }
        }
    }

    #[test]
    fn names_are_distinct() {
        assert_ne!(BytewiseComparator.name(), EdgeComparator.name());
    }
}
