//! The relation ideal inside an exterior power and its sparse matrices.

use tracing::{debug, info};

use koszul_exterior::{reduce_to_basis, Blade, Element, ExactZero};
use koszul_linalg::CsrMatrix;
use koszul_perm::{k_subsets, Permutation, SubsetIndexer};
use koszul_rings::{Q, Ring};

use crate::pairs::{apply_permutation, pair_basis, relation, Pair, PairElement};

/// A reduced basis for the ideal of the ith exterior power of V_n.
///
/// The generating set wedges every size-(i−2) subset blade of the pair
/// basis with every relation R(j,k,l), the triple loop running over the
/// whole cube 0..n³ with no symmetry pruning (degenerate triples vanish
/// on their own). Vanishing generators are dropped and the survivors
/// reduced to a basis.
///
/// The ideal is trivial for i < 2: no relations of lower degree exist.
#[must_use]
pub fn ideal(n: u32, i: usize) -> Vec<PairElement> {
    if i < 2 {
        return Vec::new();
    }

    let ground = pair_basis(n);
    // The subset blades do not depend on the triple, so hoist them.
    let subset_blades: Vec<PairElement> = k_subsets(&ground, i - 2)
        .into_iter()
        .map(|subset| Element::monomial(Blade::from_sorted(subset), Q::one()))
        .collect();

    let mut generators = Vec::new();
    for j in 0..n {
        for k in 0..n {
            for l in 0..n {
                let r = relation(j, k, l);
                if r.is_zero() {
                    continue;
                }
                for blade in &subset_blades {
                    let generator = blade.wedge(&r);
                    if !generator.is_zero() {
                        generators.push(generator);
                    }
                }
            }
        }
    }

    debug!(n, i, raw = generators.len(), "generating set assembled");
    reduce_to_basis(&mut generators, &ExactZero);
    info!(n, i, rank = generators.len(), "ideal basis reduced");

    generators
}

/// Materializes the reduced ideal basis as a sparse matrix: one column
/// per generator, rows indexed by the subset indexer.
///
/// # Panics
///
/// Panics if a generator contains a blade outside the indexed ground
/// set, which would mean the basis and the indexer disagree on (n, i).
#[must_use]
pub fn ideal_basis_matrix(
    basis: &[PairElement],
    indexer: &SubsetIndexer<Pair>,
) -> CsrMatrix<Q> {
    let triplets = basis
        .iter()
        .enumerate()
        .flat_map(|(col, generator)| {
            generator.terms().iter().map(move |(blade, coeff)| {
                let row = indexer
                    .index(blade.factors())
                    .expect("generator blade is a subset of the ground set");
                (row, col, coeff.clone())
            })
        })
        .collect();

    CsrMatrix::from_triplets(indexer.len(), basis.len(), triplets)
}

/// The matrix of a permutation's action on the ideal basis, in the same
/// coordinate system as [`ideal_basis_matrix`].
///
/// # Panics
///
/// Panics if an image blade falls outside the indexed ground set.
#[must_use]
pub fn perm_action_matrix(
    basis: &[PairElement],
    indexer: &SubsetIndexer<Pair>,
    perm: &Permutation,
) -> CsrMatrix<Q> {
    let triplets = basis
        .iter()
        .enumerate()
        .flat_map(|(col, generator)| {
            let image = apply_permutation(generator, perm);
            image
                .terms()
                .iter()
                .map(|(blade, coeff)| {
                    let row = indexer
                        .index(blade.factors())
                        .expect("image blade is a subset of the ground set");
                    (row, col, coeff.clone())
                })
                .collect::<Vec<_>>()
        })
        .collect();

    CsrMatrix::from_triplets(indexer.len(), basis.len(), triplets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use koszul_perm::CycleType;
    use koszul_rings::Field;

    #[test]
    fn test_ideal_trivial_below_degree_two() {
        assert!(ideal(5, 0).is_empty());
        assert!(ideal(5, 1).is_empty());
    }

    #[test]
    fn test_ideal_n4_i2_spans_triples() {
        // Each of the C(4,3) = 4 unordered triples contributes one
        // independent relation; cyclic and reflected copies are
        // dependent.
        let basis = ideal(4, 2);
        assert_eq!(basis.len(), 4);

        // Every generator is a genuine degree-2 element.
        for generator in &basis {
            for (blade, coeff) in generator.terms() {
                assert_eq!(blade.len(), 2);
                assert!(!coeff.is_zero());
            }
        }
    }

    #[test]
    fn test_ideal_basis_independent() {
        let basis = ideal(4, 2);
        for (a, e1) in basis.iter().enumerate() {
            for e2 in &basis[a + 1..] {
                assert_ne!(
                    e1.leading_term().unwrap().0,
                    e2.leading_term().unwrap().0
                );
            }
        }
    }

    #[test]
    fn test_ideal_basis_matrix_shape() {
        let basis = ideal(4, 2);
        let indexer = SubsetIndexer::new(&pair_basis(4), 2);
        let matrix = ideal_basis_matrix(&basis, &indexer);

        // Λ²(V_4) has C(6,2) = 15 basis blades.
        assert_eq!(matrix.num_rows(), 15);
        assert_eq!(matrix.num_cols(), basis.len());
        assert_eq!(
            matrix.nnz(),
            basis.iter().map(Element::len).sum::<usize>()
        );
    }

    #[test]
    fn test_identity_action_matrix() {
        let basis = ideal(4, 2);
        let indexer = SubsetIndexer::new(&pair_basis(4), 2);
        let ibm = ideal_basis_matrix(&basis, &indexer);
        let action = perm_action_matrix(&basis, &indexer, &Permutation::id(4));
        assert_eq!(ibm, action);
    }

    #[test]
    fn test_action_stays_in_ideal_span() {
        // The ideal is S_n-stable: the image of each generator must
        // eliminate to zero against the reduced basis.
        let basis = ideal(4, 2);
        let perm = Permutation::from_cycle_type(4, &CycleType::new(vec![4]));

        for generator in &basis {
            let mut image = apply_permutation(generator, &perm);
            for b in &basis {
                let (blade, coeff) = b.leading_term().unwrap();
                let c = image.coeff_of(blade);
                if !c.is_zero() {
                    image = image.add(&b.scale(&-c.field_div(coeff)));
                }
            }
            assert!(image.is_zero());
        }
    }
}
