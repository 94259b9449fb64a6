//! Dense row-major matrix storage.
//!
//! `DenseMatrix` places no structural constraint on its entries. It is the
//! backing storage that [`StructuredMatrix`](crate::StructuredMatrix) wraps
//! and that [`ElementProxy`](crate::ElementProxy) borrows into.

use std::ops::{Index, IndexMut};

use trellis_rings::traits::Ring;

/// Dense matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DenseMatrix<R> {
    /// Matrix entries in row-major order.
    data: Vec<R>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl<R> DenseMatrix<R> {
    /// Creates a matrix from a 2D vector.
    ///
    /// # Panics
    ///
    /// Panics if the rows have different lengths.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<R>>) -> Self {
        if rows.is_empty() {
            return Self {
                data: Vec::new(),
                num_rows: 0,
                num_cols: 0,
            };
        }
        let num_rows = rows.len();
        let num_cols = rows[0].len();
        let data: Vec<R> = rows.into_iter().flatten().collect();
        assert_eq!(data.len(), num_rows * num_cols);
        Self {
            data,
            num_rows,
            num_cols,
        }
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    /// Returns a reference to the entry at (row, col).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&R> {
        if row < self.num_rows && col < self.num_cols {
            Some(&self.data[row * self.num_cols + col])
        } else {
            None
        }
    }

    /// Iterates over `(row, col, &value)` in row-major order.
    pub fn iter_indexed(&self) -> impl Iterator<Item = (usize, usize, &R)> {
        let num_cols = self.num_cols;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, v)| (i / num_cols, i % num_cols, v))
    }
}

impl<R: Clone> DenseMatrix<R> {
    /// Returns the transpose of the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.num_cols {
            for i in 0..self.num_rows {
                data.push(self[(i, j)].clone());
            }
        }
        Self {
            data,
            num_rows: self.num_cols,
            num_cols: self.num_rows,
        }
    }
}

impl<R: Ring> DenseMatrix<R> {
    /// Creates a new matrix filled with zeros.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self {
            data: vec![R::zero(); num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = R::one();
        }
        m
    }
}

impl<R> Index<(usize, usize)> for DenseMatrix<R> {
    type Output = R;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.num_rows && col < self.num_cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.num_rows,
            self.num_cols
        );
        &self.data[row * self.num_cols + col]
    }
}

impl<R> IndexMut<(usize, usize)> for DenseMatrix<R> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(
            row < self.num_rows && col < self.num_cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.num_rows,
            self.num_cols
        );
        &mut self.data[row * self.num_cols + col]
    }
}
