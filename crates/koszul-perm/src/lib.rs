//! # koszul-perm
//!
//! Combinatorial groundwork for the character pipeline:
//! - Partitions of n and cycle types of symmetric-group elements
//! - Permutations in map representation
//! - k-subset enumeration and the subset index map
//!
//! Cycle types are the conjugacy-class coordinates every character
//! computation is keyed on, so their ordering (lexicographic over
//! ascending parts) is fixed here once and relied on everywhere else.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cycle_type;
pub mod permutation;
pub mod subsets;

pub use cycle_type::{partitions, partitions_with_min, CycleType};
pub use permutation::Permutation;
pub use subsets::{k_subsets, SubsetIndexer};
