// Copyright (C) Pavel Grebnev 2024
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

mod sparse_index;
mod storage;

use std::fmt;
use std::iter::{Copied, Zip};
use std::slice;

pub use sparse_index::SparseIndex;

/// Iterator over `(key, &value)` pairs of a [`SparseSet`], in dense order.
pub type Iter<'a, T> = Zip<Copied<slice::Iter<'a, usize>>, slice::Iter<'a, T>>;

/// Iterator over `(key, &mut value)` pairs of a [`SparseSet`], in dense order.
pub type IterMut<'a, T> = Zip<Copied<slice::Iter<'a, usize>>, slice::IterMut<'a, T>>;

/// A container based on Sparse Set, that maps small integer keys from `0..capacity` to values.
///
/// Usage-wise it works like a fixed-size array of optional values, with the difference that
/// iteration only visits present values and they are stored next to each other in memory.
///
/// Good for cache efficiency. Doesn't require any hashing. The capacity is fixed at construction,
/// keys outside of `0..capacity` are never stored.
///
/// Insertions, lookups and swap removals are O(1) in the worst case.
/// Order-preserving removals are O(n).
///
/// Iteration order is the order of insertion, as long as nothing was swap-removed. It is never
/// sorted by key.
///
/// Memory consumption is `sizeof(usize)` bytes per possible key plus
/// `sizeof(usize) + sizeof(T)` bytes per possible value, all allocated up front.
#[derive(Clone)]
pub struct SparseSet<T> {
    // storage of dense and sparse values
    storage: storage::SparseArrayStorage<T>,
}

impl<T> SparseSet<T> {
    /// Creates an empty set that can hold keys from `0..capacity`.
    ///
    /// Allocates memory for all the possible elements, no other operation allocates.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is negative or doesn't fit into `usize`.
    pub fn new<C: SparseIndex>(capacity: C) -> Self {
        let Some(capacity) = capacity.to_sparse_index() else {
            panic!("sparse set capacity cannot be less than 0 or greater than usize::MAX");
        };

        Self {
            storage: storage::SparseArrayStorage::with_capacity(capacity),
        }
    }

    /// Inserts a value for the given key, overwriting the previous value if there was one.
    ///
    /// Keys outside of `0..capacity` are ignored and the value is dropped. The result is always
    /// `true`, use [`try_insert`](Self::try_insert) to find out what happened.
    ///
    /// O(1) time complexity.
    pub fn insert<K: SparseIndex>(&mut self, key: K, value: T) -> bool {
        let _ = self.try_insert(key, value);
        true
    }

    /// Inserts a value for the given key.
    ///
    /// Returns `Ok(None)` if the key wasn't present, `Ok(Some(old_value))` if the value replaced
    /// an existing one, and `Err(value)` if the key is outside of `0..capacity`.
    ///
    /// O(1) time complexity.
    pub fn try_insert<K: SparseIndex>(&mut self, key: K, value: T) -> Result<Option<T>, T> {
        let sparse_index = match key.to_sparse_index() {
            Some(sparse_index) if sparse_index < self.capacity() => sparse_index,
            _ => return Err(value),
        };

        if let Some(dense_index) = self.dense_index(sparse_index) {
            let old_value = std::mem::replace(
                &mut self.storage.get_dense_values_mut()[dense_index],
                value,
            );
            return Ok(Some(old_value));
        }

        self.storage.push_dense(sparse_index, value);
        Ok(None)
    }

    /// Removes an element from the set using the key, swapping it with the last element.
    /// Returns the removed value if it was present in the set.
    ///
    /// O(1) time complexity, however changes the order of elements.
    pub fn swap_remove<K: SparseIndex>(&mut self, key: K) -> Option<T> {
        let dense_index = self.dense_index(key)?;

        // the last element takes the place of the removed one
        let last_key = self.storage.get_dense_keys()[self.storage.len() - 1];
        self.storage.get_sparse_mut()[last_key] = dense_index;

        Some(self.storage.swap_remove_dense(dense_index))
    }

    /// Removes an element from the set using the key, keeping the order of elements.
    /// Returns the removed value if it was present in the set.
    ///
    /// O(n) time complexity, however doesn't change the order of elements.
    pub fn remove<K: SparseIndex>(&mut self, key: K) -> Option<T> {
        let dense_index = self.dense_index(key)?;

        for i in dense_index + 1..self.storage.len() {
            let sparse_index = self.storage.get_dense_keys()[i];
            self.storage.get_sparse_mut()[sparse_index] -= 1;
        }

        Some(self.storage.remove_dense(dense_index))
    }

    /// Swaps the positions of two elements in the iteration order.
    /// The values stay associated with their keys.
    ///
    /// O(1) time complexity.
    ///
    /// # Panics
    ///
    /// Panics if any of the keys is not present in the set.
    pub fn swap<K: SparseIndex>(&mut self, key1: K, key2: K) {
        let (Some(dense_index1), Some(dense_index2)) =
            (self.dense_index(key1), self.dense_index(key2))
        else {
            panic!("Cannot swap elements that are not present");
        };

        let sparse_index1 = self.storage.get_dense_keys()[dense_index1];
        let sparse_index2 = self.storage.get_dense_keys()[dense_index2];

        self.storage
            .get_dense_values_mut()
            .swap(dense_index1, dense_index2);
        self.storage
            .get_dense_keys_mut()
            .swap(dense_index1, dense_index2);

        let sparse = self.storage.get_sparse_mut();
        sparse[sparse_index1] = dense_index2;
        sparse[sparse_index2] = dense_index1;
    }

    /// Removes all the elements. Keeps the allocated memory.
    ///
    /// O(n) time complexity if the values need to be dropped, O(1) otherwise.
    pub fn clear(&mut self) {
        // stale sparse cells are fine, they fail the back-pointer check
        self.storage.clear_dense();
    }

    /// Returns a reference to the value stored at the given key.
    /// If the key is not present, returns None.
    ///
    /// O(1) time complexity.
    pub fn get<K: SparseIndex>(&self, key: K) -> Option<&T> {
        let dense_index = self.dense_index(key)?;
        Some(&self.storage.get_dense_values()[dense_index])
    }

    /// Returns a mutable reference to the value stored at the given key.
    /// If the key is not present, returns None.
    ///
    /// O(1) time complexity.
    pub fn get_mut<K: SparseIndex>(&mut self, key: K) -> Option<&mut T> {
        let dense_index = self.dense_index(key)?;
        Some(&mut self.storage.get_dense_values_mut()[dense_index])
    }

    /// Returns true if there is a value stored at the given key.
    /// Keys outside of `0..capacity` are never present.
    ///
    /// O(1) time complexity.
    pub fn contains<K: SparseIndex>(&self, key: K) -> bool {
        self.dense_index(key).is_some()
    }

    /// Returns the number of elements in the set.
    ///
    /// O(1) time complexity.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns true if the set is empty.
    ///
    /// O(1) time complexity.
    pub fn is_empty(&self) -> bool {
        self.storage.len() == 0
    }

    /// Returns the number of possible keys, set at construction.
    pub fn capacity(&self) -> usize {
        self.storage.get_sparse().len()
    }

    /// Returns an iterator over the values of the set.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.storage.get_dense_values().iter()
    }

    /// Returns an iterator over the mutable values of the set.
    pub fn values_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut T> + ExactSizeIterator {
        self.storage.get_dense_values_mut().iter_mut()
    }

    /// Returns an iterator over the keys of the set.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = usize> + ExactSizeIterator + '_ {
        self.storage.get_dense_keys().iter().copied()
    }

    /// Returns an iterator over the key-value pairs of the set.
    ///
    /// Every present element is visited exactly once, in the same order as [`values`](Self::values).
    /// The iterator is lazy, dropping it early doesn't do any extra work.
    pub fn key_values(&self) -> Iter<'_, T> {
        self.storage
            .get_dense_keys()
            .iter()
            .copied()
            .zip(self.storage.get_dense_values().iter())
    }

    /// Returns an iterator over the keys and mutable values of the set.
    pub fn key_values_mut(&mut self) -> IterMut<'_, T> {
        let (keys, values) = self.storage.get_dense_keys_and_values_mut();
        keys.iter().copied().zip(values.iter_mut())
    }

    /// Same as [`key_values`](Self::key_values).
    pub fn iter(&self) -> Iter<'_, T> {
        self.key_values()
    }

    /// Same as [`key_values_mut`](Self::key_values_mut).
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.key_values_mut()
    }

    // back-pointer check: the dense entry the sparse cell points to must claim the key
    fn dense_index<K: SparseIndex>(&self, key: K) -> Option<usize> {
        let sparse_index = key.to_sparse_index()?;
        let dense_index = *self.storage.get_sparse().get(sparse_index)?;

        match self.storage.get_dense_keys().get(dense_index) {
            Some(&stored_key) if stored_key == sparse_index => Some(dense_index),
            _ => None,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SparseSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.key_values()).finish()
    }
}

impl<'a, T> IntoIterator for &'a SparseSet<T> {
    type Item = (usize, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.key_values()
    }
}

impl<'a, T> IntoIterator for &'a mut SparseSet<T> {
    type Item = (usize, &'a mut T);
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.key_values_mut()
    }
}
