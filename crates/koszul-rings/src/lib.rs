//! # koszul-rings
//!
//! Exact scalar arithmetic for the koszul workspace.
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `Field`, `OrderedRing`
//! - Concrete implementations: `Z` (integers), `Q` (rationals)
//!
//! Both scalar types wrap `dashu` arbitrary-precision numbers, so every
//! computation in the workspace is exact. There is no floating point
//! anywhere in the character pipeline.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integers;
pub mod rationals;
pub mod traits;

pub use integers::Z;
pub use rationals::{ParseRationalError, Q};
pub use traits::{CommutativeRing, Field, OrderedRing, Ring};
