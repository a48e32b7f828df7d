use crate::{
    edge::{EdgeKey, EdgeOrd},
    span::ByteSpan,
};

/// Estimate heap usage of keys held by memtables and indexes.
/// Primitives report zero; byte-backed keys return their byte length, whether
/// owned or borrowed; tuples sum their parts.
pub trait HeapSize {
    /// Approximate heap bytes accounted to the key.
    fn heap_size(&self) -> usize;
}

macro_rules! impl_heap_size_prim {
    ($($t:ty),* $(,)?) => {
        $(
            impl HeapSize for $t {
                fn heap_size(&self) -> usize {
                    0
                }
            }
        )*
    };
}

impl_heap_size_prim!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, bool);

impl<A: HeapSize, B: HeapSize> HeapSize for (A, B) {
    fn heap_size(&self) -> usize {
        self.0.heap_size() + self.1.heap_size()
    }
}

impl HeapSize for ByteSpan<'_> {
    fn heap_size(&self) -> usize {
        self.len()
    }
}

impl HeapSize for EdgeKey {
    fn heap_size(&self) -> usize {
        self.as_bytes().len()
    }
}

impl HeapSize for EdgeOrd {
    fn heap_size(&self) -> usize {
        (**self).heap_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_backed_keys_report_length() {
        assert_eq!(ByteSpan::from("vertex").heap_size(), 6);
        assert_eq!(EdgeKey::new(12, -1).heap_size(), 5);
        assert_eq!(EdgeKey::default().heap_size(), 0);
        assert_eq!(EdgeKey::new(1, 2).ordered().heap_size(), 3);
    }

    #[test]
    fn tuples_sum_parts() {
        let entry = (ByteSpan::from("ab"), 7u64);
        assert_eq!(entry.heap_size(), 2);
        assert_eq!((EdgeKey::new(1, 2), ByteSpan::from("xyz")).heap_size(), 6);
    }
}
