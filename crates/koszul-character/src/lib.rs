//! # koszul-character
//!
//! The character pipeline: computes the character of the representation
//! of S_n obtained from the ith exterior power of the permutation
//! module on pairs V_n, quotiented by the ideal spanned by the
//! three-term pair relations.
//!
//! The pipeline composes the other workspace crates:
//! - `pairs`: the ground module V_n, the relation R(j,k,l) and the
//!   permutation action
//! - `ideal`: the relation ideal, its reduced basis and the sparse
//!   matrices of the basis and of a permutation's action on it
//! - `character`: the exterior-power character recursion and the
//!   quotient character assembled from a pseudo-inverse trace
//! - `dump`: append-only persistence of computed character tables
//!
//! All arithmetic is exact; the per-cycle-type evaluation is the only
//! parallel stage and runs over shared read-only inputs.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod character;
pub mod dump;
pub mod ideal;
pub mod pairs;

pub use character::{character, character_of_v, CharacterContext};
pub use dump::{character_dump, read_character_dump, CharacterRecord, DumpError};
pub use ideal::{ideal, ideal_basis_matrix, perm_action_matrix};
pub use pairs::{apply_permutation, pair_basis, relation, Pair, PairElement};
