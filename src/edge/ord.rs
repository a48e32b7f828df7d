use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
    ops::Deref,
};

use super::EdgeKey;

/// [`EdgeKey`] with exact, numerically ordered identity.
///
/// Equality here is `(source, destination)` equality with no wildcard, so the
/// wrapper is `Eq + Ord + Hash` and can key a `BTreeMap`, a skip list or a
/// `HashMap`. Ordering is [`EdgeKey::compare`].
#[derive(Clone, Debug, Default)]
pub struct EdgeOrd(EdgeKey);

impl EdgeOrd {
    /// Wrap `key`.
    pub fn new(key: EdgeKey) -> Self {
        Self(key)
    }

    /// Unwrap the key.
    pub fn into_inner(self) -> EdgeKey {
        self.0
    }

    /// Whether `key` matches this edge under wildcard equality.
    pub fn matches(&self, key: &EdgeKey) -> bool {
        self.0 == *key
    }
}

impl Deref for EdgeOrd {
    type Target = EdgeKey;

    fn deref(&self) -> &EdgeKey {
        &self.0
    }
}

impl From<EdgeKey> for EdgeOrd {
    fn from(key: EdgeKey) -> Self {
        Self(key)
    }
}

impl PartialEq for EdgeOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for EdgeOrd {}

impl PartialOrd for EdgeOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EdgeOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.compare(&other.0)
    }
}

impl Hash for EdgeOrd {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.source().hash(state);
        self.0.destination().hash(state);
    }
}
