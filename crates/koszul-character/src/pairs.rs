//! The permutation module V_n on pairs and the three-term relation.

use std::fmt;

use koszul_exterior::Element;
use koszul_perm::Permutation;
use koszul_rings::{Q, Ring};

/// A basis vector of V_n: an unordered pair {i, j} stored with the
/// smaller index first.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pair {
    lo: u32,
    hi: u32,
}

impl Pair {
    /// Creates a pair, normalizing the order of the indices.
    ///
    /// # Panics
    ///
    /// Panics if the indices coincide.
    #[must_use]
    pub fn new(i: u32, j: u32) -> Self {
        assert_ne!(i, j, "pair indices must be distinct");
        if i < j {
            Self { lo: i, hi: j }
        } else {
            Self { lo: j, hi: i }
        }
    }

    /// The smaller index.
    #[must_use]
    pub fn lo(&self) -> u32 {
        self.lo
    }

    /// The larger index.
    #[must_use]
    pub fn hi(&self) -> u32 {
        self.hi
    }

    /// The image pair under a permutation, re-normalized.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of the permutation's range.
    #[must_use]
    pub fn permuted(&self, perm: &Permutation) -> Self {
        Self::new(
            u32::try_from(perm.apply(self.lo as usize)).expect("index fits"),
            u32::try_from(perm.apply(self.hi as usize)).expect("index fits"),
        )
    }
}

impl fmt::Debug for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.lo, self.hi)
    }
}

/// An element of an exterior power of V_n with rational coefficients.
pub type PairElement = Element<Pair, Q>;

/// The basis of V_n: all pairs (i, j) with 0 ≤ i < j < n, in
/// lexicographic order.
#[must_use]
pub fn pair_basis(n: u32) -> Vec<Pair> {
    let mut basis = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            basis.push(Pair::new(i, j));
        }
    }
    basis
}

/// The relation R(j,k,l) = (jk)∧(kl) + (kl)∧(lj) + (lj)∧(jk).
///
/// This is the coboundary-style syzygy the ideal is spanned by. When
/// two of the indices coincide the three terms cancel (or vanish)
/// identically, so the zero element is returned.
#[must_use]
pub fn relation(j: u32, k: u32, l: u32) -> PairElement {
    if j == k || k == l || l == j {
        return Element::zero();
    }

    let jk = Pair::new(j, k);
    let kl = Pair::new(k, l);
    let lj = Pair::new(l, j);

    Element::from_factors([
        (Q::one(), vec![jk, kl]),
        (Q::one(), vec![kl, lj]),
        (Q::one(), vec![lj, jk]),
    ])
}

/// Applies a permutation to every factor of every blade.
///
/// Permuting a pair can change its internal order and the blade's
/// factor order, so the result is renormalized to standard form with
/// the signs that entails.
#[must_use]
pub fn apply_permutation(element: &PairElement, perm: &Permutation) -> PairElement {
    element.map_factors(|pair| pair.permuted(perm))
}
