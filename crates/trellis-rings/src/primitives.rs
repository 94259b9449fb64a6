//! Element and ring impls for the built-in numeric types.

use crate::traits::{Element, Ring};

macro_rules! impl_primitive {
    ($($t:ty => $zero:expr, $one:expr);* $(;)?) => {
        $(
            impl Element for $t {}

            impl Ring for $t {
                #[inline]
                fn zero() -> Self {
                    $zero
                }

                #[inline]
                fn one() -> Self {
                    $one
                }

                #[inline]
                #[allow(clippy::float_cmp)]
                fn is_zero(&self) -> bool {
                    *self == $zero
                }

                #[inline]
                #[allow(clippy::float_cmp)]
                fn is_one(&self) -> bool {
                    *self == $one
                }
            }
        )*
    };
}

impl_primitive! {
    i8 => 0, 1;
    i16 => 0, 1;
    i32 => 0, 1;
    i64 => 0, 1;
    i128 => 0, 1;
    isize => 0, 1;
    u8 => 0, 1;
    u16 => 0, 1;
    u32 => 0, 1;
    u64 => 0, 1;
    u128 => 0, 1;
    usize => 0, 1;
    f32 => 0.0, 1.0;
    f64 => 0.0, 1.0;
}

impl Element for bool {}
