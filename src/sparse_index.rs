// Copyright (C) Pavel Grebnev 2024
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

/// A type that can be used as a key of a [`SparseSet`](crate::SparseSet).
///
/// The set only understands positions in its sparse array, so every key is turned into a `usize`
/// before use. Keys that have no such position (negative numbers, or numbers that don't fit into
/// `usize`) return `None` and are treated by the set as out of range.
///
/// Implemented for all primitive integer types up to pointer width. Implement it for your own
/// id types to use them as keys directly:
///
/// ```
/// use bounded_sparse_set::{SparseIndex, SparseSet};
///
/// #[derive(Clone, Copy)]
/// struct EntityId(u32);
///
/// impl SparseIndex for EntityId {
///     fn to_sparse_index(self) -> Option<usize> {
///         self.0.to_sparse_index()
///     }
/// }
///
/// let mut positions = SparseSet::new(16);
/// positions.insert(EntityId(3), (1.0, 2.0));
/// assert_eq!(positions.get(EntityId(3)), Some(&(1.0, 2.0)));
/// ```
pub trait SparseIndex: Copy {
    /// Returns the position in the sparse array, or `None` if the value can't be one.
    fn to_sparse_index(self) -> Option<usize>;
}

macro_rules! impl_sparse_index {
    ($($t:ty),*) => {
        $(
            impl SparseIndex for $t {
                #[inline]
                fn to_sparse_index(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }
            }
        )*
    };
}

impl_sparse_index!(usize, u8, u16, u32, u64, isize, i8, i16, i32, i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_negative_values_map_to_themselves() {
        assert_eq!(0usize.to_sparse_index(), Some(0));
        assert_eq!(7u8.to_sparse_index(), Some(7));
        assert_eq!(42i32.to_sparse_index(), Some(42));
        assert_eq!(1000i64.to_sparse_index(), Some(1000));
    }

    #[test]
    fn negative_values_have_no_index() {
        assert_eq!((-1i8).to_sparse_index(), None);
        assert_eq!((-1i32).to_sparse_index(), None);
        assert_eq!(isize::MIN.to_sparse_index(), None);
    }
}
