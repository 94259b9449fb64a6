//! Parallel reductions.
//!
//! Large sparse vectors are reduced with rayon's work-stealing `reduce`.
//! The combining operation must be associative, since rayon groups the
//! stored entries arbitrarily.

use rayon::prelude::*;
use tracing::trace;

use trellis_rings::traits::{Element, Ring};

use crate::sparse_vector::SparseVector;

/// Configuration for parallel reductions.
#[derive(Clone, Debug)]
pub struct ReduceConfig {
    /// Minimum number of stored entries to enable parallelism.
    pub parallel_threshold: usize,
}

impl Default for ReduceConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 4096,
        }
    }
}

/// Reduces the stored entries of `vector` with an associative `op`.
///
/// Falls back to [`SparseVector::reduce`] below the configured threshold.
/// The result matches the sequential one for associative `op`.
pub fn reduce_parallel<R, F>(vector: &SparseVector<R>, op: F, config: &ReduceConfig) -> R
where
    R: Element + Send + Sync,
    F: Fn(R, R) -> R + Send + Sync,
{
    if vector.nnz() < config.parallel_threshold {
        return vector.reduce(op);
    }

    trace!(nnz = vector.nnz(), "reducing sparse vector in parallel");
    vector
        .values()
        .par_iter()
        .cloned()
        .reduce_with(|a, b| op(a, b))
        .unwrap_or_default()
}

/// Parallel sum of the stored entries.
pub fn parallel_sum<R: Ring + Send + Sync>(vector: &SparseVector<R>, config: &ReduceConfig) -> R {
    reduce_parallel(vector, |a, b| a + b, config)
}

/// Parallel product of the stored entries.
pub fn parallel_prod<R: Ring + Send + Sync>(vector: &SparseVector<R>, config: &ReduceConfig) -> R {
    reduce_parallel(vector, |a, b| a * b, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn force_parallel() -> ReduceConfig {
        ReduceConfig {
            parallel_threshold: 1, // Force parallel path for testing
        }
    }

    #[test]
    fn test_parallel_sum_matches_sequential() {
        let dense: Vec<i64> = (0..1000).map(|i| if i % 3 == 0 { 0 } else { i }).collect();
        let v = SparseVector::from_dense(&dense);

        assert_eq!(parallel_sum(&v, &force_parallel()), v.sum());
        assert_eq!(parallel_sum(&v, &ReduceConfig::default()), v.sum());
    }

    #[test]
    fn test_parallel_prod() {
        let v = SparseVector::from_dense(&[1, 2, 0, 3, 4]);
        assert_eq!(parallel_prod(&v, &force_parallel()), 24);
    }

    #[test]
    fn test_parallel_empty() {
        let v: SparseVector<i32> = SparseVector::new(10);
        assert_eq!(parallel_sum(&v, &force_parallel()), 0);
    }

    #[test]
    fn test_parallel_max() {
        let v = SparseVector::from_dense(&[3, -1, 8, 2]);
        assert_eq!(reduce_parallel(&v, i32::max, &force_parallel()), 8);
    }
}
