//! # koszul-exterior
//!
//! Sparse symbolic arithmetic in the exterior algebra of an ordered
//! vector space.
//!
//! This crate provides:
//! - `Blade`: a wedge product of basis factors with a canonical
//!   standard form (sorted factors, sign tracked exactly)
//! - `Element`: a sparse linear combination of blades, kept in
//!   standard form by construction
//! - `reduce_to_basis`: Gaussian-elimination-style reduction of a
//!   spanning set to a basis, with an injectable pivot tolerance policy
//!
//! Signs follow the antisymmetry of the wedge product: swapping two
//! adjacent factors negates a blade, and a repeated factor annihilates
//! it. All sign bookkeeping is done by counting inversions during
//! merges, so the absolute sign convention is the one induced by sorted
//! factor order.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod blade;
pub mod element;
pub mod reduce;

#[cfg(test)]
mod proptests;

pub use blade::Blade;
pub use element::Element;
pub use reduce::{reduce_to_basis, ExactZero, PivotPolicy, Threshold};
