//! Sparse exterior-algebra elements.

use std::fmt;

use koszul_rings::Ring;

use crate::blade::Blade;

/// A sparse element of an exterior algebra: a linear combination of
/// blades.
///
/// Terms are stored as (blade, coefficient) pairs sorted by blade, with
/// no duplicate blades and no zero coefficients. Every constructor and
/// operation maintains this standard form, so two elements are equal as
/// values iff they are equal as vectors.
#[derive(Clone, PartialEq, Eq)]
pub struct Element<T, R> {
    /// Terms in sorted blade order.
    terms: Vec<(Blade<T>, R)>,
}

impl<T: Ord + Clone, R: Ring> Element<T, R> {
    /// Creates an element from terms whose blades are already in
    /// standard form.
    ///
    /// Terms are sorted, coefficients of equal blades accumulated, and
    /// zero terms dropped.
    #[must_use]
    pub fn new(mut terms: Vec<(Blade<T>, R)>) -> Self {
        terms.sort_by(|a, b| a.0.cmp(&b.0));

        let mut i = 0;
        while i < terms.len() {
            let mut j = i + 1;
            while j < terms.len() && terms[i].0 == terms[j].0 {
                let c = terms.remove(j).1;
                terms[i].1 = terms[i].1.clone() + c;
            }
            if terms[i].1.is_zero() {
                terms.remove(i);
            } else {
                i += 1;
            }
        }

        Self { terms }
    }

    /// Creates an element from raw (coefficient, factor-sequence) pairs.
    ///
    /// Each factor sequence is put in standard form first; vanishing
    /// terms (repeated factors) are dropped.
    #[must_use]
    pub fn from_factors(raw: impl IntoIterator<Item = (R, Vec<T>)>) -> Self {
        let terms = raw
            .into_iter()
            .filter_map(|(coeff, factors)| {
                let (sign, blade) = Blade::standard_form(factors)?;
                Some((blade, coeff.mul_by_scalar(i64::from(sign))))
            })
            .collect();
        Self::new(terms)
    }

    /// A single-term element.
    #[must_use]
    pub fn monomial(blade: Blade<T>, coeff: R) -> Self {
        if coeff.is_zero() {
            Self::zero()
        } else {
            Self {
                terms: vec![(blade, coeff)],
            }
        }
    }

    /// The zero element.
    #[must_use]
    pub fn zero() -> Self {
        Self { terms: Vec::new() }
    }

    /// Returns true for the zero element.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// The number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The terms, sorted by blade.
    #[must_use]
    pub fn terms(&self) -> &[(Blade<T>, R)] {
        &self.terms
    }

    /// The first term in blade order, used as the pivot during span
    /// reduction.
    #[must_use]
    pub fn leading_term(&self) -> Option<&(Blade<T>, R)> {
        self.terms.first()
    }

    /// The coefficient of a blade, zero if absent.
    #[must_use]
    pub fn coeff_of(&self, blade: &Blade<T>) -> R {
        match self.terms.binary_search_by(|(b, _)| b.cmp(blade)) {
            Ok(idx) => self.terms[idx].1.clone(),
            Err(_) => R::zero(),
        }
    }

    /// Adds two elements with a linear-time sorted merge.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let mut terms = Vec::with_capacity(self.terms.len() + other.terms.len());
        let mut i = 0;
        let mut j = 0;

        while i < self.terms.len() && j < other.terms.len() {
            match self.terms[i].0.cmp(&other.terms[j].0) {
                std::cmp::Ordering::Less => {
                    terms.push(self.terms[i].clone());
                    i += 1;
                }
                std::cmp::Ordering::Greater => {
                    terms.push(other.terms[j].clone());
                    j += 1;
                }
                std::cmp::Ordering::Equal => {
                    let sum = self.terms[i].1.clone() + other.terms[j].1.clone();
                    if !sum.is_zero() {
                        terms.push((self.terms[i].0.clone(), sum));
                    }
                    i += 1;
                    j += 1;
                }
            }
        }
        terms.extend(self.terms[i..].iter().cloned());
        terms.extend(other.terms[j..].iter().cloned());

        Self { terms }
    }

    /// Subtracts another element.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Negates the element.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            terms: self
                .terms
                .iter()
                .map(|(b, c)| (b.clone(), -c.clone()))
                .collect(),
        }
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, scalar: &R) -> Self {
        if scalar.is_zero() {
            return Self::zero();
        }
        Self {
            terms: self
                .terms
                .iter()
                .map(|(b, c)| (b.clone(), c.clone() * scalar.clone()))
                .collect(),
        }
    }

    /// Wedge-multiplies two elements.
    ///
    /// Blade products that vanish (shared factors) are dropped; the
    /// result is renormalized since distinct term products can land on
    /// the same blade.
    #[must_use]
    pub fn wedge(&self, other: &Self) -> Self {
        let mut terms = Vec::with_capacity(self.terms.len() * other.terms.len());
        for (b1, c1) in &self.terms {
            for (b2, c2) in &other.terms {
                if let Some((sign, blade)) = b1.wedge(b2) {
                    let coeff = (c1.clone() * c2.clone()).mul_by_scalar(i64::from(sign));
                    terms.push((blade, coeff));
                }
            }
        }
        Self::new(terms)
    }

    /// Applies a function to every factor of every blade and
    /// renormalizes.
    ///
    /// This is how a permutation acts on an element: the image factor
    /// sequences are generally unsorted, so each blade is put back in
    /// standard form with the appropriate sign, and terms re-merged.
    #[must_use]
    pub fn map_factors(&self, mut f: impl FnMut(&T) -> T) -> Self {
        Self::from_factors(self.terms.iter().map(|(blade, coeff)| {
            let factors: Vec<T> = blade.factors().iter().map(&mut f).collect();
            (coeff.clone(), factors)
        }))
    }
}

impl<T: fmt::Debug, R: fmt::Debug> fmt::Debug for Element<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }
        for (i, (blade, coeff)) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{coeff:?}·{blade:?}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use koszul_rings::Q;

    fn elem(raw: Vec<(i64, Vec<u32>)>) -> Element<u32, Q> {
        Element::from_factors(
            raw.into_iter()
                .map(|(c, v)| (Q::from_integer(c), v)),
        )
    }

    #[test]
    fn test_from_factors_normalizes() {
        // 2·(3∧1) = -2·(1∧3)
        let e = elem(vec![(2, vec![3, 1])]);
        assert_eq!(e.len(), 1);
        let (blade, coeff) = &e.terms()[0];
        assert_eq!(blade.factors(), &[1, 3]);
        assert_eq!(coeff, &Q::from_integer(-2));
    }

    #[test]
    fn test_from_factors_drops_vanishing() {
        let e = elem(vec![(5, vec![2, 2])]);
        assert!(e.is_zero());
    }

    #[test]
    fn test_add_cancels() {
        let a = elem(vec![(1, vec![1, 2]), (2, vec![1, 3])]);
        let b = elem(vec![(-1, vec![1, 2]), (1, vec![2, 3])]);
        let sum = a.add(&b);
        assert_eq!(sum.len(), 2);
        assert_eq!(
            sum.coeff_of(&Blade::from_sorted([1, 3])),
            Q::from_integer(2)
        );
        assert_eq!(
            sum.coeff_of(&Blade::from_sorted([2, 3])),
            Q::from_integer(1)
        );
        assert!(sum.coeff_of(&Blade::from_sorted([1, 2])).is_zero());
    }

    #[test]
    fn test_wedge_distributes() {
        // (e1 + e2) ∧ e3 = e1∧e3 + e2∧e3
        let a = elem(vec![(1, vec![1]), (1, vec![2])]);
        let b = elem(vec![(1, vec![3])]);
        let prod = a.wedge(&b);
        assert_eq!(prod, elem(vec![(1, vec![1, 3]), (1, vec![2, 3])]));
    }

    #[test]
    fn test_wedge_self_vanishes() {
        let a = elem(vec![(1, vec![1]), (1, vec![2])]);
        // (e1 + e2) ∧ (e1 + e2) = e1∧e2 + e2∧e1 = 0
        assert!(a.wedge(&a).is_zero());
    }

    #[test]
    fn test_map_factors_renormalizes() {
        // Swap 1 <-> 2 in e1∧e2: the image 2∧1 is -(1∧2).
        let a = elem(vec![(1, vec![1, 2])]);
        let swapped = a.map_factors(|&x| match x {
            1 => 2,
            2 => 1,
            other => other,
        });
        assert_eq!(swapped, a.neg());
    }

    #[test]
    fn test_scale_by_zero() {
        let a = elem(vec![(1, vec![1, 2])]);
        assert!(a.scale(&Q::zero()).is_zero());
    }
}
