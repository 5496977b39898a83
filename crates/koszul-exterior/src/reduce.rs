//! Reduction of a spanning set to a basis.

use koszul_rings::{Field, OrderedRing, Ring};
use tracing::{debug, warn};

use crate::element::Element;

/// Decides when a candidate pivot coefficient is too small to eliminate
/// with.
///
/// Over exact scalars ([`ExactZero`]) only a true zero is rejected. A
/// threshold policy exists so that near-degenerate inputs are handled
/// explicitly instead of through an implicit float comparison buried in
/// the elimination loop.
pub trait PivotPolicy<R> {
    /// Returns true if `x` must not be used as a pivot.
    fn is_negligible(&self, x: &R) -> bool;
}

/// Rejects only exact zeros. The right policy for exact fields.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExactZero;

impl<R: Ring> PivotPolicy<R> for ExactZero {
    fn is_negligible(&self, x: &R) -> bool {
        x.is_zero()
    }
}

/// Rejects coefficients with absolute value at most `eps`.
#[derive(Clone, Debug)]
pub struct Threshold<R> {
    /// Magnitudes at or below this bound are treated as zero.
    pub eps: R,
}

impl<R: OrderedRing> PivotPolicy<R> for Threshold<R> {
    fn is_negligible(&self, x: &R) -> bool {
        x.abs() <= self.eps
    }
}

/// Reduces a spanning set to a basis for its linear span, in place.
///
/// Sequential elimination with greedy pivots: for each element (in
/// order), its leading blade is eliminated from every later element by
/// subtracting the right multiple; elements that become zero are
/// removed. The surviving elements have pairwise distinct leading
/// blades, hence are linearly independent, and every eliminated element
/// was a combination of survivors, so the span is unchanged.
///
/// A leading coefficient the policy rejects as negligible (while not
/// being exactly zero) is reported via `tracing::warn!` and the term is
/// dropped before a pivot is chosen; silent skipping would leave the
/// set unreduced without any trace of why.
pub fn reduce_to_basis<T, R>(set: &mut Vec<Element<T, R>>, policy: &impl PivotPolicy<R>)
where
    T: Ord + Clone,
    R: Field,
{
    let mut i = 0;
    while i < set.len() {
        if i % 100 == 0 {
            debug!(processed = i, remaining = set.len(), "reducing spanning set");
        }

        // Find a usable pivot term, discarding negligible leaders.
        let pivot = loop {
            let Some((blade, coeff)) = set[i]
                .leading_term()
                .map(|(b, c)| (b.clone(), c.clone()))
            else {
                break None;
            };

            if policy.is_negligible(&coeff) {
                if !coeff.is_zero() {
                    warn!(
                        "dropping negligible pivot candidate; \
                         input may be near-degenerate"
                    );
                }
                set[i] = set[i].sub(&Element::monomial(blade, coeff));
            } else {
                break Some((blade, coeff));
            }
        };

        let Some((pivot_blade, pivot_coeff)) = pivot else {
            // Element vanished entirely.
            set.remove(i);
            continue;
        };

        // Clear the pivot blade from every later element.
        let mut j = i + 1;
        while j < set.len() {
            let c = set[j].coeff_of(&pivot_blade);
            if !c.is_zero() {
                let multiplier = -c.field_div(&pivot_coeff);
                set[j] = set[j].add(&set[i].scale(&multiplier));
            }

            if set[j].is_zero() {
                set.remove(j);
            } else {
                j += 1;
            }
        }

        i += 1;
    }
}
