//! Property-based tests for the exterior-algebra engine.

use proptest::prelude::*;

use koszul_rings::{Field, Q, Ring};

use crate::blade::Blade;
use crate::element::Element;
use crate::reduce::{reduce_to_basis, ExactZero};

// Strategy for raw factor sequences, duplicates allowed
fn raw_factors() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(0u8..12, 0..6)
}

// Strategy for factor sequences with distinct entries
fn distinct_factors() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::btree_set(0u8..12, 0..6).prop_map(|s| s.into_iter().collect())
}

fn small_coeff() -> impl Strategy<Value = Q> {
    (-20i64..20).prop_map(Q::from_integer)
}

// Strategy for small elements
fn small_element() -> impl Strategy<Value = Element<u8, Q>> {
    proptest::collection::vec((small_coeff(), raw_factors()), 0..5)
        .prop_map(Element::from_factors)
}

/// Eliminates `e` against `basis` by leading blades.
fn reduce_against(mut e: Element<u8, Q>, basis: &[Element<u8, Q>]) -> Element<u8, Q> {
    for b in basis {
        let Some((blade, coeff)) = b.leading_term().map(|(b, c)| (b.clone(), c.clone())) else {
            continue;
        };
        let c = e.coeff_of(&blade);
        if !c.is_zero() {
            e = e.add(&b.scale(&-c.field_div(&coeff)));
        }
    }
    e
}

proptest! {
    #[test]
    fn standard_form_idempotent(factors in distinct_factors()) {
        let (sign, blade) = Blade::standard_form(factors.clone()).unwrap();
        prop_assert_eq!(sign, 1);
        prop_assert_eq!(blade.factors(), factors.as_slice());
    }

    #[test]
    fn standard_form_swap_negates(factors in distinct_factors(), idx in any::<prop::sample::Index>()) {
        prop_assume!(factors.len() >= 2);
        let i = idx.index(factors.len() - 1);
        let mut swapped = factors.clone();
        swapped.swap(i, i + 1);

        let (sign, blade) = Blade::standard_form(swapped).unwrap();
        prop_assert_eq!(sign, -1);
        prop_assert_eq!(blade.factors(), factors.as_slice());
    }

    #[test]
    fn standard_form_repeat_vanishes(factors in distinct_factors(), idx in any::<prop::sample::Index>()) {
        prop_assume!(!factors.is_empty());
        let dup = factors[idx.index(factors.len())];
        let mut with_dup = factors.clone();
        with_dup.push(dup);
        prop_assert!(Blade::standard_form(with_dup).is_none());
    }

    #[test]
    fn wedge_graded_commutativity(a in distinct_factors(), b in distinct_factors()) {
        let (_, blade_a) = Blade::standard_form(a.clone()).unwrap();
        let (_, blade_b) = Blade::standard_form(b.clone()).unwrap();

        match (blade_a.wedge(&blade_b), blade_b.wedge(&blade_a)) {
            (Some((sign_ab, ab)), Some((sign_ba, ba))) => {
                prop_assert_eq!(ab, ba);
                // a∧b = (-1)^{|a||b|} b∧a
                let expected = if (blade_a.len() * blade_b.len()) % 2 == 0 {
                    sign_ba
                } else {
                    -sign_ba
                };
                prop_assert_eq!(sign_ab, expected);
            }
            (None, None) => {}
            _ => prop_assert!(false, "wedge vanishing must be symmetric"),
        }
    }

    #[test]
    fn wedge_associative(a in small_element(), b in small_element(), c in small_element()) {
        prop_assert_eq!(a.wedge(&b).wedge(&c), a.wedge(&b.wedge(&c)));
    }

    #[test]
    fn add_commutative(a in small_element(), b in small_element()) {
        prop_assert_eq!(a.add(&b), b.add(&a));
    }

    #[test]
    fn add_result_in_standard_form(a in small_element(), b in small_element()) {
        let sum = a.add(&b);
        for window in sum.terms().windows(2) {
            prop_assert!(window[0].0 < window[1].0);
        }
        for (_, coeff) in sum.terms() {
            prop_assert!(!coeff.is_zero());
        }
    }

    #[test]
    fn add_neg_is_zero(a in small_element()) {
        prop_assert!(a.add(&a.neg()).is_zero());
    }

    #[test]
    fn reduce_preserves_span(elements in proptest::collection::vec(small_element(), 0..6)) {
        let mut basis = elements.clone();
        reduce_to_basis(&mut basis, &ExactZero);

        // Independence: pairwise distinct leading blades.
        for (i, a) in basis.iter().enumerate() {
            for b in &basis[i + 1..] {
                prop_assert_ne!(
                    &a.leading_term().unwrap().0,
                    &b.leading_term().unwrap().0
                );
            }
        }

        // Span: every input eliminates to zero against the basis.
        for e in elements {
            prop_assert!(reduce_against(e, &basis).is_zero());
        }
    }
}
