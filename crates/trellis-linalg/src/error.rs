//! Errors raised by structured matrices and their element proxies.

use thiserror::Error;

use crate::shape::Shape;

/// Errors that can occur when building or writing a structured matrix.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StructureError {
    /// A write targeted a position the shape forbids.
    #[error("invalid assignment to {} matrix element ({row}, {column})", .shape.forbidden_region())]
    RestrictedElementWrite {
        /// Shape of the adapted matrix.
        shape: Shape,
        /// Row of the rejected write.
        row: usize,
        /// Column of the rejected write.
        column: usize,
    },

    /// Structured matrices must be square.
    #[error("{shape} matrix must be square, got {num_rows}x{num_cols}")]
    NonSquare {
        /// Requested shape.
        shape: Shape,
        /// Rows of the rejected input.
        num_rows: usize,
        /// Columns of the rejected input.
        num_cols: usize,
    },

    /// Storage holds a non-mandated value at a restricted position.
    #[error("{shape} invariant violated at ({row}, {column})")]
    InvariantViolation {
        /// Shape whose invariant was checked.
        shape: Shape,
        /// Row of the offending element.
        row: usize,
        /// Column of the offending element.
        column: usize,
    },
}

/// Result alias for structured matrix operations.
pub type Result<T> = std::result::Result<T, StructureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = StructureError::RestrictedElementWrite {
            shape: Shape::Lower,
            row: 0,
            column: 2,
        };
        assert_eq!(
            err.to_string(),
            "invalid assignment to upper matrix element (0, 2)"
        );

        let err = StructureError::RestrictedElementWrite {
            shape: Shape::Diagonal,
            row: 1,
            column: 0,
        };
        assert_eq!(
            err.to_string(),
            "invalid assignment to non-diagonal matrix element (1, 0)"
        );

        let err = StructureError::NonSquare {
            shape: Shape::Upper,
            num_rows: 2,
            num_cols: 3,
        };
        assert_eq!(err.to_string(), "upper matrix must be square, got 2x3");
    }
}
