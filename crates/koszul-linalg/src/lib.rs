//! # koszul-linalg
//!
//! Exact sparse and dense linear algebra for the character pipeline.
//!
//! This crate provides:
//! - Sparse matrices in CSR (Compressed Sparse Row) format
//! - Dense matrices for the small square systems
//! - A least-squares pseudo-inverse via the normal equations
//!
//! Everything is generic over the scalar ring/field traits, and the
//! pipeline instantiates it with exact rationals, so "least squares"
//! here is an exact projection rather than a floating approximation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dense_matrix;
pub mod least_squares;
pub mod sparse_matrix;

pub use dense_matrix::DenseMatrix;
pub use least_squares::{pseudo_inverse, SolveError};
pub use sparse_matrix::CsrMatrix;
