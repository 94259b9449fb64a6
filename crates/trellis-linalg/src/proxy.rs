//! Guarded access to a single element of a structured matrix.
//!
//! A [`StructuredMatrix`](crate::StructuredMatrix) never hands out `&mut T`.
//! Indexed write access goes through an [`ElementProxy`] instead, which
//! borrows the backing cell and refuses every write to a position that the
//! matrix's [`Shape`] forbids:
//!
//! ```
//! use trellis_linalg::{StructureError, StructuredMatrix};
//!
//! let mut a = StructuredMatrix::<i32>::lower(3);
//! a.element(0, 0).assign(-2)?;
//! a.element(1, 0).assign(3)?;
//! a.element(2, 1).assign(5)?;
//! assert!(a.element(0, 2).assign(7).is_err());
//! assert_eq!(a[(0, 2)], 0);
//! # Ok::<(), StructureError>(())
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops::{AddAssign, Deref, DivAssign, MulAssign, RemAssign, SubAssign};

use num_complex::Complex;
use tracing::debug;
use trellis_rings::traits::{Element, Ring};

use crate::dense_matrix::DenseMatrix;
use crate::error::{Result, StructureError};
use crate::shape::Shape;

/// Write-guarded view of one matrix element.
///
/// The restriction flag is computed once from the shape and the position
/// when the proxy is created. Reads always succeed; writes to a restricted
/// position fail with [`StructureError::RestrictedElementWrite`] and leave
/// the element untouched.
#[derive(Debug)]
pub struct ElementProxy<'a, T> {
    value: &'a mut T,
    shape: Shape,
    row: usize,
    column: usize,
    restricted: bool,
}

impl<'a, T> ElementProxy<'a, T> {
    /// Binds a proxy to `matrix[(row, column)]` under the given shape.
    ///
    /// # Panics
    ///
    /// Panics if (row, column) is out of bounds for `matrix`.
    pub fn new(matrix: &'a mut DenseMatrix<T>, shape: Shape, row: usize, column: usize) -> Self {
        Self {
            value: &mut matrix[(row, column)],
            shape,
            row,
            column,
            restricted: shape.is_restricted(row, column),
        }
    }

    /// Returns the current value of the element.
    #[must_use]
    pub fn get(&self) -> &T {
        &*self.value
    }

    /// Returns true if writes through this proxy are forbidden.
    #[must_use]
    pub fn is_restricted(&self) -> bool {
        self.restricted
    }

    /// Returns the shape the proxy enforces.
    #[must_use]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Returns the row of the element.
    #[must_use]
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the column of the element.
    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }

    fn ensure_writable(&self) -> Result<()> {
        if self.restricted {
            debug!(
                shape = %self.shape,
                row = self.row,
                column = self.column,
                "rejected write to restricted element"
            );
            return Err(StructureError::RestrictedElementWrite {
                shape: self.shape,
                row: self.row,
                column: self.column,
            });
        }
        Ok(())
    }

    /// Applies `op` to the element if the position is writable.
    ///
    /// All mutating operations funnel through here.
    pub fn update<F>(&mut self, op: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut T),
    {
        self.ensure_writable()?;
        op(&mut *self.value);
        Ok(self)
    }

    /// Assigns a new value.
    ///
    /// The returned reference borrows the proxy. When the proxy is a
    /// temporary, as in `matrix.element(i, j).assign(v)`, consume the result
    /// within the same expression (`?`, `.is_ok()`, `.map(|_| ())`).
    pub fn assign(&mut self, value: T) -> Result<&mut Self> {
        self.update(|v| *v = value)
    }

    /// Assigns the value currently seen by another proxy.
    pub fn assign_proxy(&mut self, other: &ElementProxy<'_, T>) -> Result<&mut Self>
    where
        T: Clone,
    {
        let value = other.get().clone();
        self.assign(value)
    }

    /// Replaces a container element with the collected items.
    pub fn assign_from_iter<I>(&mut self, items: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        T: FromIterator<I::Item>,
    {
        self.ensure_writable()?;
        *self.value = items.into_iter().collect();
        Ok(self)
    }

    /// Adds `rhs` to the element in place.
    pub fn add_assign<U>(&mut self, rhs: U) -> Result<&mut Self>
    where
        T: AddAssign<U>,
    {
        self.update(|v| *v += rhs)
    }

    /// Subtracts `rhs` from the element in place.
    pub fn sub_assign<U>(&mut self, rhs: U) -> Result<&mut Self>
    where
        T: SubAssign<U>,
    {
        self.update(|v| *v -= rhs)
    }

    /// Multiplies the element by `rhs` in place.
    pub fn mul_assign<U>(&mut self, rhs: U) -> Result<&mut Self>
    where
        T: MulAssign<U>,
    {
        self.update(|v| *v *= rhs)
    }

    /// Divides the element by `rhs` in place.
    pub fn div_assign<U>(&mut self, rhs: U) -> Result<&mut Self>
    where
        T: DivAssign<U>,
    {
        self.update(|v| *v /= rhs)
    }

    /// Replaces the element by its remainder modulo `rhs`.
    pub fn rem_assign<U>(&mut self, rhs: U) -> Result<&mut Self>
    where
        T: RemAssign<U>,
    {
        self.update(|v| *v %= rhs)
    }
}

impl<T: Clone> ElementProxy<'_, T> {
    /// Returns a copy of the current value.
    #[must_use]
    pub fn value(&self) -> T {
        self.value.clone()
    }
}

impl<T: Element> ElementProxy<'_, T> {
    /// Returns true if the element holds its default value.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.value.is_default()
    }

    /// Returns true if the element has no imaginary part.
    #[must_use]
    pub fn is_real(&self) -> bool {
        self.value.is_real()
    }
}

impl<T: Ring> ElementProxy<'_, T> {
    /// Returns true if the element is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Returns true if the element is one.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.value.is_one()
    }

    /// Resets the element to its default value.
    ///
    /// Never checks the restriction: the default is always a legal value.
    /// On the diagonal of a unit shape the element is set to one instead.
    pub fn reset(&mut self) {
        if self.shape.requires_one(self.row, self.column) {
            *self.value = T::one();
        } else {
            self.value.reset();
        }
    }

    /// Clears the element. Same restriction rules as [`Self::reset`].
    pub fn clear(&mut self) {
        if self.shape.requires_one(self.row, self.column) {
            *self.value = T::one();
        } else {
            self.value.clear();
        }
    }
}

impl<T> Deref for ElementProxy<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &*self.value
    }
}

impl<T: PartialEq> PartialEq for ElementProxy<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        *self.value == *other.value
    }
}

impl<T: PartialEq> PartialEq<T> for ElementProxy<'_, T> {
    fn eq(&self, other: &T) -> bool {
        *self.value == *other
    }
}

impl<T: PartialOrd> PartialOrd for ElementProxy<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (*self.value).partial_cmp(&*other.value)
    }
}

impl<T: PartialOrd> PartialOrd<T> for ElementProxy<'_, T> {
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        (*self.value).partial_cmp(other)
    }
}

impl<T: PartialEq> PartialEq<ElementProxy<'_, Complex<T>>> for Complex<T> {
    fn eq(&self, other: &ElementProxy<'_, Complex<T>>) -> bool {
        *self == *other.value
    }
}

macro_rules! impl_scalar_cmp {
    ($($t:ty),* $(,)?) => {
        $(
            impl PartialEq<ElementProxy<'_, $t>> for $t {
                fn eq(&self, other: &ElementProxy<'_, $t>) -> bool {
                    *self == *other.value
                }
            }

            impl PartialOrd<ElementProxy<'_, $t>> for $t {
                fn partial_cmp(&self, other: &ElementProxy<'_, $t>) -> Option<Ordering> {
                    <$t as PartialOrd>::partial_cmp(self, &*other.value)
                }
            }
        )*
    };
}

impl_scalar_cmp!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl<T: fmt::Display> fmt::Display for ElementProxy<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.value, f)
    }
}

/// Returns true if the proxied element holds its default value.
#[must_use]
pub fn is_default<T: Element>(proxy: &ElementProxy<'_, T>) -> bool {
    proxy.is_default()
}

/// Returns true if the proxied element has no imaginary part.
#[must_use]
pub fn is_real<T: Element>(proxy: &ElementProxy<'_, T>) -> bool {
    proxy.is_real()
}

/// Returns true if the proxied element is zero.
#[must_use]
pub fn is_zero<T: Ring>(proxy: &ElementProxy<'_, T>) -> bool {
    proxy.is_zero()
}

/// Returns true if the proxied element is one.
#[must_use]
pub fn is_one<T: Ring>(proxy: &ElementProxy<'_, T>) -> bool {
    proxy.is_one()
}

/// Resets the proxied element, bypassing the restriction check.
pub fn reset<T: Ring>(proxy: &mut ElementProxy<'_, T>) {
    proxy.reset();
}

/// Clears the proxied element, bypassing the restriction check.
pub fn clear<T: Ring>(proxy: &mut ElementProxy<'_, T>) {
    proxy.clear();
}
