//! Property-based tests for structured element access.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::shape::Shape;
    use crate::sparse_vector::SparseVector;
    use crate::structured_matrix::StructuredMatrix;
    use crate::{ReduceConfig, reduce_parallel};

    const N: usize = 6;

    fn shape() -> impl Strategy<Value = Shape> {
        prop_oneof![
            Just(Shape::Lower),
            Just(Shape::Upper),
            Just(Shape::Diagonal),
            Just(Shape::UniLower),
            Just(Shape::UniUpper),
        ]
    }

    fn position() -> impl Strategy<Value = (usize, usize)> {
        (0..N, 0..N)
    }

    proptest! {
        #[test]
        fn restricted_writes_leave_element_unchanged(
            shape in shape(),
            (row, column) in position(),
            value in -1000i64..1000i64,
        ) {
            let mut m = StructuredMatrix::<i64>::new(shape, N);
            let before = m[(row, column)];
            let mut p = m.element(row, column);
            prop_assume!(p.is_restricted());

            prop_assert!(p.assign(value).is_err());
            prop_assert!(p.add_assign(value).is_err());
            prop_assert!(p.sub_assign(value).is_err());
            prop_assert!(p.mul_assign(value).is_err());
            prop_assert_eq!(p.value(), before);
            prop_assert!(m.check_invariant().is_ok());
        }

        #[test]
        fn free_writes_are_read_back(
            shape in shape(),
            (row, column) in position(),
            value in -1000i64..1000i64,
        ) {
            let mut m = StructuredMatrix::<i64>::new(shape, N);
            prop_assume!(!m.is_restricted(row, column));

            m.element(row, column).assign(value).unwrap();
            prop_assert_eq!(m[(row, column)], value);
            prop_assert!(m.check_invariant().is_ok());
        }

        #[test]
        fn reset_always_restores_invariant(
            shape in shape(),
            (row, column) in position(),
        ) {
            let mut m = StructuredMatrix::<i64>::new(shape, N);
            let mut p = m.element(row, column);
            let restricted = p.is_restricted();
            p.reset();
            prop_assert_eq!(p.is_restricted(), restricted);
            prop_assert!(m.check_invariant().is_ok());
        }

        #[test]
        fn restriction_depends_only_on_position(
            shape in shape(),
            (row, column) in position(),
            value in -1000i64..1000i64,
        ) {
            let mut m = StructuredMatrix::<i64>::new(shape, N);
            let mut p = m.element(row, column);
            let restricted = p.is_restricted();
            prop_assert_eq!(restricted, shape.is_restricted(row, column));
            let _ = p.assign(value);
            prop_assert_eq!(p.is_restricted(), restricted);
        }

        #[test]
        fn parallel_sum_matches_sequential(
            dense in prop::collection::vec(-1000i64..1000i64, 0..200),
            threshold in 0usize..50,
        ) {
            let v = SparseVector::from_dense(&dense);
            let config = ReduceConfig { parallel_threshold: threshold };
            prop_assert_eq!(reduce_parallel(&v, |a, b| a + b, &config), v.sum());
            prop_assert_eq!(v.sum(), dense.iter().sum::<i64>());
        }
    }
}
