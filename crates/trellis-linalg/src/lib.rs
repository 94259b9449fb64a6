//! # trellis-linalg
//!
//! Structure-constrained matrices for Trellis.
//!
//! This crate provides:
//! - Dense row-major backing storage
//! - Structural shapes: lower, upper, diagonal and their unit variants
//! - Write-guarded element proxies that reject writes to restricted positions
//! - Sparse vectors with sequential and parallel reductions via rayon
//!
//! ## Element Access
//!
//! A [`StructuredMatrix`] is read through `Index` like any matrix, but
//! writes go through [`StructuredMatrix::element`], which returns an
//! [`ElementProxy`]. The proxy computes once whether its position is
//! restricted and turns every write there into
//! [`StructureError::RestrictedElementWrite`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod dense_matrix;
pub mod error;
pub mod parallel;
pub mod proxy;
pub mod shape;
pub mod sparse_vector;
pub mod structured_matrix;

pub use dense_matrix::DenseMatrix;
pub use error::{Result, StructureError};
pub use parallel::{ReduceConfig, reduce_parallel};
pub use proxy::ElementProxy;
pub use shape::Shape;
pub use sparse_vector::SparseVector;
pub use structured_matrix::StructuredMatrix;

#[cfg(test)]
mod proptests;
