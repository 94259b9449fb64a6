//! Structural shapes of adapted matrices.

use std::fmt;

/// The structural invariant a [`StructuredMatrix`](crate::StructuredMatrix)
/// enforces.
///
/// A shape partitions the positions of a square matrix into free positions,
/// which may be written, and restricted positions, which must keep their
/// mandated value (zero, or one on the diagonal of a unit shape).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Lower triangular: the strictly upper part is zero.
    Lower,
    /// Upper triangular: the strictly lower part is zero.
    Upper,
    /// Diagonal: every off-diagonal element is zero.
    Diagonal,
    /// Lower unitriangular: the strictly upper part is zero, the diagonal is one.
    UniLower,
    /// Upper unitriangular: the strictly lower part is zero, the diagonal is one.
    UniUpper,
}

impl Shape {
    /// All shapes, in declaration order.
    pub const ALL: [Shape; 5] = [
        Shape::Lower,
        Shape::Upper,
        Shape::Diagonal,
        Shape::UniLower,
        Shape::UniUpper,
    ];

    /// Returns true if writes to (row, column) are forbidden.
    #[must_use]
    #[inline]
    pub fn is_restricted(self, row: usize, column: usize) -> bool {
        match self {
            Shape::Lower => row < column,
            Shape::Upper => row > column,
            Shape::Diagonal => row != column,
            Shape::UniLower => row <= column,
            Shape::UniUpper => row >= column,
        }
    }

    /// Returns true if the diagonal is fixed to one.
    #[must_use]
    pub fn is_unit(self) -> bool {
        matches!(self, Shape::UniLower | Shape::UniUpper)
    }

    /// Returns true if (row, column) must hold one rather than zero.
    #[must_use]
    #[inline]
    pub fn requires_one(self, row: usize, column: usize) -> bool {
        self.is_unit() && row == column
    }

    /// Names the part of the matrix that cannot be written.
    #[must_use]
    pub fn forbidden_region(self) -> &'static str {
        match self {
            Shape::Lower => "upper",
            Shape::Upper => "lower",
            Shape::Diagonal => "non-diagonal",
            Shape::UniLower => "diagonal or upper",
            Shape::UniUpper => "diagonal or lower",
        }
    }

    /// Returns the shape of the transposed matrix.
    #[must_use]
    pub fn transposed(self) -> Self {
        match self {
            Shape::Lower => Shape::Upper,
            Shape::Upper => Shape::Lower,
            Shape::Diagonal => Shape::Diagonal,
            Shape::UniLower => Shape::UniUpper,
            Shape::UniUpper => Shape::UniLower,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Shape::Lower => "lower",
            Shape::Upper => "upper",
            Shape::Diagonal => "diagonal",
            Shape::UniLower => "unilower",
            Shape::UniUpper => "uniupper",
        };
        f.write_str(name)
    }
}
