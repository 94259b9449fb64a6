//! Complex numbers as matrix elements.

use num_complex::Complex;
use num_traits::Num;

use crate::traits::{Element, Ring};

impl<T: Ring + Num> Element for Complex<T> {
    fn is_real(&self) -> bool {
        Ring::is_zero(&self.im)
    }
}

impl<T: Ring + Num> Ring for Complex<T> {
    fn zero() -> Self {
        Complex::new(<T as Ring>::zero(), <T as Ring>::zero())
    }

    fn one() -> Self {
        Complex::new(<T as Ring>::one(), <T as Ring>::zero())
    }

    fn is_zero(&self) -> bool {
        Ring::is_zero(&self.re) && Ring::is_zero(&self.im)
    }

    fn is_one(&self) -> bool {
        Ring::is_one(&self.re) && Ring::is_zero(&self.im)
    }
}
