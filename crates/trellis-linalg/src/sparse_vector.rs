//! Compressed sparse vectors and their reductions.
//!
//! Only non-zero entries are stored. Reductions fold over the stored
//! entries alone, so `prod` of a vector with implicit zeros is the product
//! of its non-zero entries.

use std::ops::{Add, Mul};

use trellis_rings::traits::{Element, Ring};

/// Sparse vector in compressed format.
///
/// # Memory Layout
///
/// For a vector of logical length `size` with nnz non-zero entries:
/// - `indices`: strictly increasing positions of the nnz entries
/// - `values`: the nnz entries, parallel to `indices`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SparseVector<R> {
    /// Strictly increasing positions of the stored entries.
    indices: Vec<usize>,
    /// Stored entries.
    values: Vec<R>,
    /// Logical length.
    size: usize,
}

impl<R> SparseVector<R> {
    /// Creates an all-zero vector of the given length.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            indices: Vec::new(),
            values: Vec::new(),
            size,
        }
    }

    /// Returns the logical length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Returns the stored entries in index order.
    #[must_use]
    pub fn values(&self) -> &[R] {
        &self.values
    }

    /// Returns the entry at `index`, or None if it is not stored.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&R> {
        let pos = self.indices.binary_search(&index).ok()?;
        Some(&self.values[pos])
    }

    /// Iterates over the stored `(index, value)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &R)> {
        self.indices.iter().copied().zip(&self.values)
    }

    /// Reduces the stored entries with `op`.
    ///
    /// Returns the default value for a vector of length zero or without
    /// stored entries. Otherwise the first stored value seeds a left fold
    /// over the remaining ones in index order.
    pub fn reduce<F>(&self, op: F) -> R
    where
        R: Clone + Default,
        F: Fn(R, R) -> R,
    {
        if self.size == 0 {
            return R::default();
        }
        let mut values = self.values.iter().cloned();
        match values.next() {
            Some(first) => values.fold(first, op),
            None => R::default(),
        }
    }

    /// Sums the stored entries.
    pub fn sum(&self) -> R
    where
        R: Clone + Default + Add<Output = R>,
    {
        self.reduce(|a, b| a + b)
    }

    /// Multiplies the stored entries.
    pub fn prod(&self) -> R
    where
        R: Clone + Default + Mul<Output = R>,
    {
        self.reduce(|a, b| a * b)
    }
}

impl<R: Ring> SparseVector<R> {
    /// Creates a sparse vector from a dense slice.
    ///
    /// Zero entries are not stored.
    #[must_use]
    pub fn from_dense(dense: &[R]) -> Self {
        let mut indices = Vec::new();
        let mut values = Vec::new();
        for (i, val) in dense.iter().enumerate() {
            if !val.is_zero() {
                indices.push(i);
                values.push(val.clone());
            }
        }
        Self {
            indices,
            values,
            size: dense.len(),
        }
    }

    /// Creates a sparse vector from `(index, value)` pairs.
    ///
    /// Duplicate indices are summed; entries that end up zero are dropped.
    ///
    /// # Panics
    ///
    /// Panics if an index is not below `size`.
    #[must_use]
    pub fn from_pairs(size: usize, pairs: &[(usize, R)]) -> Self {
        let mut sorted: Vec<_> = pairs.to_vec();
        sorted.sort_by_key(|(i, _)| *i);

        let mut indices: Vec<usize> = Vec::with_capacity(sorted.len());
        let mut values: Vec<R> = Vec::with_capacity(sorted.len());

        for (index, val) in sorted {
            assert!(index < size, "index {index} out of bounds for length {size}");
            if indices.last() == Some(&index) {
                if let Some(last) = values.last_mut() {
                    *last = last.clone() + val;
                }
            } else {
                indices.push(index);
                values.push(val);
            }
        }

        let mut out = Self::new(size);
        for (index, val) in indices.into_iter().zip(values) {
            if !val.is_zero() {
                out.indices.push(index);
                out.values.push(val);
            }
        }
        out
    }

    /// Sets the entry at `index`. Storing zero removes the entry.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below the vector length.
    pub fn insert(&mut self, index: usize, value: R) {
        assert!(
            index < self.size,
            "index {index} out of bounds for length {}",
            self.size
        );
        match self.indices.binary_search(&index) {
            Ok(pos) if value.is_zero() => {
                self.indices.remove(pos);
                self.values.remove(pos);
            }
            Ok(pos) => self.values[pos] = value,
            Err(_) if value.is_zero() => {}
            Err(pos) => {
                self.indices.insert(pos, index);
                self.values.insert(pos, value);
            }
        }
    }

    /// Expands into a dense vector.
    #[must_use]
    pub fn to_dense(&self) -> Vec<R> {
        let mut dense = vec![R::zero(); self.size];
        for (i, val) in self.iter() {
            dense[i] = val.clone();
        }
        dense
    }
}

/// Reduces the stored entries of `vector` with `op`.
pub fn reduce<R, F>(vector: &SparseVector<R>, op: F) -> R
where
    R: Element,
    F: Fn(R, R) -> R,
{
    vector.reduce(op)
}

/// Sums the stored entries of `vector`.
pub fn sum<R: Ring>(vector: &SparseVector<R>) -> R {
    vector.sum()
}

/// Multiplies the stored entries of `vector`.
pub fn prod<R: Ring>(vector: &SparseVector<R>) -> R {
    vector.prod()
}
