//! Square matrices constrained to a structural shape.
//!
//! `StructuredMatrix` adapts a [`DenseMatrix`] so that its restricted
//! positions always hold their mandated value: zero, or one on the diagonal
//! of a unit shape. Reads go through [`Index`] or [`StructuredMatrix::get`];
//! writes go through the [`ElementProxy`] returned by
//! [`StructuredMatrix::element`].

use std::ops::Index;

use tracing::debug;
use trellis_rings::traits::Ring;

use crate::dense_matrix::DenseMatrix;
use crate::error::{Result, StructureError};
use crate::proxy::ElementProxy;
use crate::shape::Shape;

/// A square matrix that enforces a [`Shape`] on every write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredMatrix<T> {
    inner: DenseMatrix<T>,
    shape: Shape,
}

impl<T: Ring> StructuredMatrix<T> {
    /// Creates an `n`x`n` matrix holding only mandated values.
    #[must_use]
    pub fn new(shape: Shape, n: usize) -> Self {
        let inner = if shape.is_unit() {
            DenseMatrix::identity(n)
        } else {
            DenseMatrix::zeros(n, n)
        };
        Self { inner, shape }
    }

    /// Creates an `n`x`n` lower triangular matrix.
    #[must_use]
    pub fn lower(n: usize) -> Self {
        Self::new(Shape::Lower, n)
    }

    /// Creates an `n`x`n` upper triangular matrix.
    #[must_use]
    pub fn upper(n: usize) -> Self {
        Self::new(Shape::Upper, n)
    }

    /// Creates an `n`x`n` diagonal matrix.
    #[must_use]
    pub fn diagonal(n: usize) -> Self {
        Self::new(Shape::Diagonal, n)
    }

    /// Creates an `n`x`n` lower unitriangular matrix.
    #[must_use]
    pub fn uni_lower(n: usize) -> Self {
        Self::new(Shape::UniLower, n)
    }

    /// Creates an `n`x`n` upper unitriangular matrix.
    #[must_use]
    pub fn uni_upper(n: usize) -> Self {
        Self::new(Shape::UniUpper, n)
    }

    /// Adapts an existing dense matrix.
    ///
    /// # Errors
    ///
    /// Returns [`StructureError::NonSquare`] for rectangular input and
    /// [`StructureError::InvariantViolation`] naming the first restricted
    /// position, in row-major order, that does not hold its mandated value.
    pub fn try_from_dense(inner: DenseMatrix<T>, shape: Shape) -> Result<Self> {
        if !inner.is_square() {
            return Err(StructureError::NonSquare {
                shape,
                num_rows: inner.num_rows(),
                num_cols: inner.num_cols(),
            });
        }
        let matrix = Self { inner, shape };
        matrix.check_invariant()?;
        Ok(matrix)
    }

    /// Verifies that every restricted position holds its mandated value.
    ///
    /// # Errors
    ///
    /// Returns [`StructureError::InvariantViolation`] for the first
    /// offending position in row-major order.
    pub fn check_invariant(&self) -> Result<()> {
        let shape = self.shape;
        let offending = self.inner.iter_indexed().find(|&(row, column, value)| {
            if !shape.is_restricted(row, column) {
                return false;
            }
            if shape.requires_one(row, column) {
                !value.is_one()
            } else {
                !value.is_zero()
            }
        });

        match offending {
            Some((row, column, value)) => {
                debug!(%shape, row, column, ?value, "structural invariant violated");
                Err(StructureError::InvariantViolation { shape, row, column })
            }
            None => Ok(()),
        }
    }

    /// Restores every element to its mandated or default value.
    pub fn reset(&mut self) {
        let n = self.size();
        for row in 0..n {
            for column in 0..n {
                self.element(row, column).reset();
            }
        }
    }
}

impl<T> StructuredMatrix<T> {
    /// Returns the number of rows (and columns).
    #[must_use]
    pub fn size(&self) -> usize {
        self.inner.num_rows()
    }

    /// Returns the enforced shape.
    #[must_use]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Returns a reference to the entry at (row, column).
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        self.inner.get(row, column)
    }

    /// Returns a write-guarded proxy for the entry at (row, column).
    ///
    /// # Panics
    ///
    /// Panics if (row, column) is out of bounds.
    pub fn element(&mut self, row: usize, column: usize) -> ElementProxy<'_, T> {
        ElementProxy::new(&mut self.inner, self.shape, row, column)
    }

    /// Returns a write-guarded proxy, or `None` if out of bounds.
    pub fn try_element(&mut self, row: usize, column: usize) -> Option<ElementProxy<'_, T>> {
        let n = self.size();
        if row < n && column < n {
            Some(ElementProxy::new(&mut self.inner, self.shape, row, column))
        } else {
            None
        }
    }

    /// Returns true if writes to (row, column) are forbidden.
    #[must_use]
    pub fn is_restricted(&self, row: usize, column: usize) -> bool {
        self.shape.is_restricted(row, column)
    }

    /// Returns the backing storage.
    #[must_use]
    pub fn as_dense(&self) -> &DenseMatrix<T> {
        &self.inner
    }

    /// Consumes the adaptor, returning the backing storage.
    #[must_use]
    pub fn into_inner(self) -> DenseMatrix<T> {
        self.inner
    }
}

impl<T: Clone> StructuredMatrix<T> {
    /// Returns the transpose; the shape is transposed with it.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self {
            inner: self.inner.transpose(),
            shape: self.shape.transposed(),
        }
    }
}

impl<T> Index<(usize, usize)> for StructuredMatrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.inner[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn test_lower_writes() {
        let mut a = StructuredMatrix::<i32>::lower(3);
        a.element(0, 0).assign(-2).unwrap();
        a.element(1, 0).assign(3).unwrap();
        a.element(2, 1).assign(5).unwrap();

        let err = a.element(0, 2).assign(7).unwrap_err();
        assert!(matches!(
            err,
            StructureError::RestrictedElementWrite { row: 0, column: 2, .. }
        ));

        let expected = DenseMatrix::from_rows(vec![vec![-2, 0, 0], vec![3, 0, 0], vec![0, 5, 0]]);
        assert_eq!(a.as_dense(), &expected);
        assert!(a.check_invariant().is_ok());
    }

    #[test]
    fn test_diagonal_writes() {
        let mut d = StructuredMatrix::<f64>::diagonal(2);
        d.element(1, 1).assign(4.0).unwrap();
        assert!(d.element(0, 1).assign(1.0).is_err());
        assert!(d.element(1, 0).add_assign(1.0).is_err());
        assert!((d[(1, 1)] - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unit_shapes_start_at_identity() {
        let l = StructuredMatrix::<i64>::uni_lower(3);
        let u = StructuredMatrix::<i64>::uni_upper(3);
        assert_eq!(l.as_dense(), &DenseMatrix::identity(3));
        assert_eq!(u.as_dense(), &DenseMatrix::identity(3));
        assert!(l.is_restricted(1, 1));
        assert!(!l.is_restricted(2, 1));
    }

    #[test]
    fn test_try_from_dense() {
        let dense = DenseMatrix::from_rows(vec![vec![1, 2], vec![0, 3]]);
        let upper = StructuredMatrix::try_from_dense(dense.clone(), Shape::Upper).unwrap();
        assert_eq!(upper.shape(), Shape::Upper);

        let err = StructuredMatrix::try_from_dense(dense, Shape::Lower).unwrap_err();
        assert_eq!(
            err,
            StructureError::InvariantViolation {
                shape: Shape::Lower,
                row: 0,
                column: 1,
            }
        );
    }

    #[test]
    fn test_try_from_dense_unit_diagonal() {
        let dense = DenseMatrix::from_rows(vec![vec![1, 0], vec![7, 2]]);
        let err = StructuredMatrix::try_from_dense(dense, Shape::UniLower).unwrap_err();
        assert_eq!(
            err,
            StructureError::InvariantViolation {
                shape: Shape::UniLower,
                row: 1,
                column: 1,
            }
        );
    }

    #[test]
    fn test_try_from_dense_non_square() {
        let dense: DenseMatrix<i32> = DenseMatrix::zeros(2, 3);
        let err = StructuredMatrix::try_from_dense(dense, Shape::Diagonal).unwrap_err();
        assert!(matches!(err, StructureError::NonSquare { num_rows: 2, num_cols: 3, .. }));
    }

    #[test]
    fn test_try_element_bounds() {
        let mut a = StructuredMatrix::<i32>::upper(2);
        assert!(a.try_element(1, 1).is_some());
        assert!(a.try_element(2, 0).is_none());
        assert_eq!(a.get(0, 5), None);
    }

    #[test]
    fn test_transpose_swaps_shape() {
        let mut a = StructuredMatrix::<i32>::lower(3);
        a.element(2, 0).assign(9).unwrap();
        let t = a.transpose();
        assert_eq!(t.shape(), Shape::Upper);
        assert_eq!(t[(0, 2)], 9);
        assert!(t.check_invariant().is_ok());
    }

    #[test]
    fn test_reset_restores_mandated_values() {
        let mut a = StructuredMatrix::<i32>::uni_upper(2);
        a.element(0, 1).assign(4).unwrap();
        a.reset();
        assert_eq!(a.as_dense(), &DenseMatrix::identity(2));
    }

    #[test]
    #[traced_test]
    fn test_invariant_violation_is_logged() {
        let dense = DenseMatrix::from_rows(vec![vec![0, 1], vec![1, 0]]);
        assert!(StructuredMatrix::try_from_dense(dense, Shape::Diagonal).is_err());
        assert!(logs_contain("structural invariant violated"));
    }
}
