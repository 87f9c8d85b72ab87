// Copyright (C) Pavel Grebnev 2024
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

/// SparseArrayStorage is a storage for sparse set, it is a combination of dense and sparse arrays.
/// Dense arrays store keys and values of present entries, sparse array stores indexes into the
/// dense arrays.
///
/// All arrays are allocated once at construction for the full capacity and never grow.
#[derive(Clone)]
pub(crate) struct SparseArrayStorage<T> {
    // has as many values as elements stored in the set
    dense_values: Vec<T>,
    // same size as the dense array, stores the key of each value
    dense_keys: Vec<usize>,
    // one cell per possible key, stale for keys that are not present
    sparse: Vec<usize>,
}

impl<T> SparseArrayStorage<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            dense_values: Vec::with_capacity(capacity),
            dense_keys: Vec::with_capacity(capacity),
            sparse: vec![0; capacity],
        }
    }

    pub(crate) fn push_dense(&mut self, key: usize, value: T) {
        debug_assert!(self.dense_keys.len() < self.sparse.len());

        self.sparse[key] = self.dense_values.len();
        self.dense_keys.push(key);
        self.dense_values.push(value);
    }

    pub(crate) fn remove_dense(&mut self, index: usize) -> T {
        self.dense_keys.remove(index);
        self.dense_values.remove(index)
    }

    pub(crate) fn swap_remove_dense(&mut self, index: usize) -> T {
        self.dense_keys.swap_remove(index);
        self.dense_values.swap_remove(index)
    }

    pub(crate) fn clear_dense(&mut self) {
        self.dense_keys.clear();
        self.dense_values.clear();
    }

    pub(crate) fn len(&self) -> usize {
        debug_assert_eq!(self.dense_keys.len(), self.dense_values.len());
        self.dense_values.len()
    }

    pub(crate) fn get_dense_values(&self) -> &[T] {
        &self.dense_values
    }

    pub(crate) fn get_dense_values_mut(&mut self) -> &mut [T] {
        &mut self.dense_values
    }

    pub(crate) fn get_dense_keys(&self) -> &[usize] {
        &self.dense_keys
    }

    pub(crate) fn get_dense_keys_mut(&mut self) -> &mut [usize] {
        &mut self.dense_keys
    }

    pub(crate) fn get_dense_keys_and_values_mut(&mut self) -> (&[usize], &mut [T]) {
        (&self.dense_keys, &mut self.dense_values)
    }

    pub(crate) fn get_sparse(&self) -> &[usize] {
        &self.sparse
    }

    pub(crate) fn get_sparse_mut(&mut self) -> &mut [usize] {
        &mut self.sparse
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_capacity_allocates_sparse_and_reserves_dense() {
        let storage: SparseArrayStorage<String> = SparseArrayStorage::with_capacity(8);

        assert_eq!(storage.get_sparse().len(), 8);
        assert_eq!(storage.len(), 0);
        assert!(storage.dense_values.capacity() >= 8);
        assert!(storage.dense_keys.capacity() >= 8);
    }

    #[test]
    fn push_dense_points_sparse_cell_to_new_slot() {
        let mut storage = SparseArrayStorage::with_capacity(4);

        storage.push_dense(3, "a");
        storage.push_dense(1, "b");

        assert_eq!(storage.get_sparse()[3], 0);
        assert_eq!(storage.get_sparse()[1], 1);
        assert_eq!(storage.get_dense_keys(), &[3, 1]);
        assert_eq!(storage.get_dense_values(), &["a", "b"]);
    }

    #[test]
    fn swap_remove_dense_moves_last_entry_into_the_gap() {
        let mut storage = SparseArrayStorage::with_capacity(4);
        storage.push_dense(0, "a");
        storage.push_dense(1, "b");
        storage.push_dense(2, "c");

        let removed = storage.swap_remove_dense(0);

        assert_eq!(removed, "a");
        assert_eq!(storage.get_dense_keys(), &[2, 1]);
        assert_eq!(storage.get_dense_values(), &["c", "b"]);
    }

    #[test]
    fn remove_dense_keeps_order() {
        let mut storage = SparseArrayStorage::with_capacity(4);
        storage.push_dense(0, "a");
        storage.push_dense(1, "b");
        storage.push_dense(2, "c");

        let removed = storage.remove_dense(0);

        assert_eq!(removed, "a");
        assert_eq!(storage.get_dense_keys(), &[1, 2]);
        assert_eq!(storage.get_dense_values(), &["b", "c"]);
    }
}
