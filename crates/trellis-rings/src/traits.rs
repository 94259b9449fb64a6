//! Element traits.
//!
//! Every value stored in a Trellis matrix or vector implements [`Element`].
//! Arithmetic containers additionally require [`Ring`], which supplies the
//! additive and multiplicative identities used to initialise structured
//! storage.

use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

/// A value that can live in a matrix cell.
///
/// The default value is the one a freshly allocated cell holds. Structural
/// adaptors rely on it being the additive identity for numeric types.
pub trait Element: Clone + PartialEq + Debug + Default {
    /// Returns true if this is the default value.
    fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Returns true if the value has no imaginary part.
    fn is_real(&self) -> bool {
        true
    }

    /// Resets the value to its default.
    fn reset(&mut self) {
        *self = Self::default();
    }

    /// Clears the value.
    ///
    /// For scalars this is the same as [`Element::reset`]. Container-like
    /// elements may additionally release their storage.
    fn clear(&mut self) {
        self.reset();
    }
}

/// A ring is a set with addition and multiplication operations.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - Multiplication distributes over addition
/// - `zero()` equals `Default::default()`
pub trait Ring: Element + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> {
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Computes self^n for non-negative n.
    fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::one();
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            exp >>= 1;
        }

        result
    }
}
