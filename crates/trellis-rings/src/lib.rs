//! # trellis-rings
//!
//! Element traits for Trellis matrices and vectors.
//!
//! This crate provides:
//! - `Element`: default-value predicates (`is_default`, `is_real`) and
//!   the `reset`/`clear` mutators
//! - `Ring`: additive and multiplicative identities on top of `Element`
//! - Impls for the primitive integer and float types and for
//!   `num_complex::Complex`
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Element
//!  └── Ring
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod complex;
pub mod primitives;
pub mod traits;

pub use traits::{Element, Ring};
