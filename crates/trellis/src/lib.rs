//! # Trellis
//!
//! Structure-constrained matrices with guarded element access.
//!
//! Trellis adapts dense storage to a structural shape (lower, upper,
//! diagonal, unit-lower, unit-upper) and hands out write-guarded proxies
//! for element access, so a matrix can never leave its shape.
//!
//! ## Quick Start
//!
//! ```rust
//! use trellis::prelude::*;
//!
//! let mut a = StructuredMatrix::<i32>::lower(3);
//! a.element(1, 0).assign(3).unwrap();
//! assert!(a.element(0, 2).assign(7).is_err());
//! assert_eq!(a[(0, 2)], 0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use trellis_linalg as linalg;
pub use trellis_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use trellis_linalg::{
        DenseMatrix, ElementProxy, ReduceConfig, Shape, SparseVector, StructureError,
        StructuredMatrix,
    };
    pub use trellis_rings::{Element, Ring};
}
