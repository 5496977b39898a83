//! Characters of the quotient representations.
//!
//! For each cycle type of S_n the character of Λⁱ(V_n) comes out of the
//! Newton-style power-sum recursion; the ideal's contribution is the
//! trace of the permutation action compressed onto the reduced ideal
//! basis through the least-squares pseudo-inverse. The quotient value is
//! their difference.

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use tracing::{debug, info};

use koszul_linalg::{pseudo_inverse, CsrMatrix, SolveError};
use koszul_perm::{partitions, CycleType, Permutation, SubsetIndexer};
use koszul_rings::{Q, Ring};

use crate::ideal::{ideal, ideal_basis_matrix, perm_action_matrix};
use crate::pairs::{pair_basis, Pair, PairElement};

/// The character of V_n at a cycle type: the number of unordered pairs
/// fixed by any permutation of that type.
///
/// A pair is fixed when both indices are fixed points or when its two
/// indices form a 2-cycle.
#[must_use]
pub fn character_of_v(ct: &CycleType) -> Q {
    let fix = ct.fixed_points();
    let from_fixed = fix * fix.saturating_sub(1) / 2;
    let value = from_fixed + ct.count(2);
    Q::from_integer(i64::try_from(value).expect("character value fits in i64"))
}

/// Memoized exterior-power character values, scoped to one computation
/// run.
///
/// The cache is keyed by (cycle type, power); a single context is meant
/// to be threaded through all the classes of one character table so the
/// power-sum tails are shared.
#[derive(Default)]
pub struct CharacterContext {
    cache: FxHashMap<(CycleType, usize), Q>,
}

impl CharacterContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The character of Λᵏ(V_n) at a cycle type, by the recursion
    ///
    /// χ∧k(g) = (1/k) Σ_{m=1..k} (−1)^{m−1} χ_V(gᵐ) χ∧(k−m)(g)
    ///
    /// with χ∧0 ≡ 1. The whole table up to k is filled in one pass and
    /// cached.
    #[must_use]
    pub fn exterior_power_character(&mut self, ct: &CycleType, k: usize) -> Q {
        if let Some(value) = self.cache.get(&(ct.clone(), k)) {
            return value.clone();
        }

        // χ_V at the powers of the class, gᵐ read off the cycle type.
        let power_chars: Vec<Q> = (1..=k).map(|m| character_of_v(&ct.power(m))).collect();

        let mut table: Vec<Q> = Vec::with_capacity(k + 1);
        table.push(Q::one());
        for kk in 1..=k {
            let mut acc = Q::zero();
            for m in 1..=kk {
                let term = power_chars[m - 1].clone() * table[kk - m].clone();
                acc = if m % 2 == 1 { acc + term } else { acc - term };
            }
            let kk_i64 = i64::try_from(kk).expect("exterior power fits in i64");
            table.push(acc * Q::new(1, kk_i64));
        }

        for (kk, value) in table.iter().enumerate() {
            self.cache.insert((ct.clone(), kk), value.clone());
        }
        table.swap_remove(k)
    }
}

/// tr(P·M) where P is the pseudo-inverse of the ideal basis matrix and
/// M the action matrix: row j of P dotted with column j of M, i.e. row
/// j of Mᵀ.
fn ideal_trace(
    pinv: &CsrMatrix<Q>,
    basis: &[PairElement],
    indexer: &SubsetIndexer<Pair>,
    perm: &Permutation,
) -> Q {
    let action_t = perm_action_matrix(basis, indexer, perm).transpose();
    let mut trace = Q::zero();
    for j in 0..basis.len() {
        trace = trace + pinv.row_dot_row(j, &action_t, j);
    }
    trace
}

/// The character of Λⁱ(V_n) / I_{n,i}, one value per cycle type of S_n
/// in lexicographic partition order.
///
/// The exterior-power values are computed first over a shared context;
/// when the ideal is trivial they are the answer. Otherwise the ideal
/// basis is pseudo-inverted once and each class evaluated in parallel
/// as χ∧i(g) − tr(P·M_g).
///
/// # Errors
///
/// Returns [`SolveError::SingularNormalMatrix`] if the reduced ideal
/// basis fails to have full column rank, which would indicate a broken
/// reduction.
pub fn character(n: u32, i: usize) -> Result<Vec<Q>, SolveError> {
    let cycle_types = partitions(n as usize);

    let mut ctx = CharacterContext::new();
    let ext: Vec<Q> = cycle_types
        .iter()
        .map(|ct| ctx.exterior_power_character(ct, i))
        .collect();

    let basis = ideal(n, i);
    if basis.is_empty() {
        debug!(n, i, "ideal is trivial; exterior character is the answer");
        return Ok(ext);
    }

    let indexer = SubsetIndexer::new(&pair_basis(n), i);
    let a = ideal_basis_matrix(&basis, &indexer);
    let pinv = pseudo_inverse(&a)?;

    let values: Vec<Q> = cycle_types
        .par_iter()
        .zip(ext.par_iter())
        .map(|(ct, ext_value)| {
            let perm = Permutation::from_cycle_type(n as usize, ct);
            let trace = ideal_trace(&pinv, &basis, &indexer, &perm);
            ext_value.clone() - trace
        })
        .collect();

    info!(n, i, classes = values.len(), rank = basis.len(), "character computed");
    Ok(values)
}
