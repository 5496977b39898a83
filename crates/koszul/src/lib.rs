//! # Koszul
//!
//! Exact character tables for quotients of exterior powers of the
//! permutation module on pairs.
//!
//! For each symmetric group S_n, the module V_n is spanned by the
//! unordered pairs of `0..n`, with S_n permuting indices. The crates in
//! this workspace build the exterior powers Λⁱ(V_n), span the ideal
//! generated by the three-term pair relations, and compute the
//! character of the quotient representation at every cycle type with
//! exact rational arithmetic throughout.
//!
//! ## Quick Start
//!
//! ```rust
//! use koszul::prelude::*;
//!
//! // The character of Λ²(V_4)/I at the five classes of S_4.
//! let values = character(4, 2).unwrap();
//! assert_eq!(values[0], Q::from_integer(11));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use koszul_character as character;
pub use koszul_exterior as exterior;
pub use koszul_linalg as linalg;
pub use koszul_perm as perm;
pub use koszul_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use koszul_character::{
        character, character_dump, character_of_v, read_character_dump, CharacterContext,
        CharacterRecord, Pair, PairElement,
    };
    pub use koszul_exterior::{Blade, Element};
    pub use koszul_linalg::{pseudo_inverse, CsrMatrix, DenseMatrix};
    pub use koszul_perm::{partitions, CycleType, Permutation, SubsetIndexer};
    pub use koszul_rings::{Field, Ring, Q, Z};
}
