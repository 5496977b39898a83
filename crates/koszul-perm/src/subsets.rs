//! k-subset enumeration and the subset index map.

use std::hash::Hash;

use rustc_hash::FxHashMap;

/// All size-k subsets of a sorted slice, as sorted `Vec`s.
///
/// Subsets are generated in lexicographic order: subsets containing the
/// first element come before subsets that skip it. The coordinate system
/// of the ideal matrices depends on this order, so it must stay stable.
#[must_use]
pub fn k_subsets<T: Clone>(s: &[T], k: usize) -> Vec<Vec<T>> {
    if s.len() < k {
        return Vec::new();
    }
    if k == 0 {
        return vec![Vec::new()];
    }

    let mut result = Vec::new();
    // Subsets containing s[0].
    for mut rest in k_subsets(&s[1..], k - 1) {
        let mut subset = Vec::with_capacity(k);
        subset.push(s[0].clone());
        subset.append(&mut rest);
        result.push(subset);
    }
    // Subsets starting with a later element.
    result.extend(k_subsets(&s[1..], k));

    result
}

/// A bijection from size-k subsets of a ground set to column/row
/// positions, used to materialize exterior elements as sparse vectors.
#[derive(Clone, Debug)]
pub struct SubsetIndexer<T> {
    positions: FxHashMap<Vec<T>, usize>,
}

impl<T: Clone + Eq + Hash> SubsetIndexer<T> {
    /// Builds the indexer for size-k subsets of a sorted ground set,
    /// numbered in `k_subsets` order.
    #[must_use]
    pub fn new(ground_set: &[T], k: usize) -> Self {
        let positions = k_subsets(ground_set, k)
            .into_iter()
            .enumerate()
            .map(|(i, subset)| (subset, i))
            .collect();
        Self { positions }
    }

    /// The position of a sorted subset, or `None` if it is not a size-k
    /// subset of the ground set.
    #[must_use]
    pub fn index(&self, subset: &[T]) -> Option<usize> {
        self.positions.get(subset).copied()
    }

    /// The number of indexed subsets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if no subsets are indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_k_subsets_order() {
        let subsets = k_subsets(&[1, 2, 3, 4], 2);
        assert_eq!(
            subsets,
            vec![
                vec![1, 2],
                vec![1, 3],
                vec![1, 4],
                vec![2, 3],
                vec![2, 4],
                vec![3, 4],
            ]
        );
    }

    #[test]
    fn test_k_subsets_edges() {
        assert_eq!(k_subsets(&[1, 2], 3), Vec::<Vec<i32>>::new());
        assert_eq!(k_subsets(&[1, 2], 0), vec![Vec::<i32>::new()]);
        assert_eq!(k_subsets::<i32>(&[], 0), vec![Vec::<i32>::new()]);
    }

    #[test]
    fn test_indexer() {
        let indexer = SubsetIndexer::new(&[1, 2, 3, 4], 2);
        assert_eq!(indexer.len(), 6);
        assert_eq!(indexer.index(&[1, 2]), Some(0));
        assert_eq!(indexer.index(&[3, 4]), Some(5));
        assert_eq!(indexer.index(&[4, 3]), None);
        assert_eq!(indexer.index(&[1, 5]), None);
    }

    #[test]
    fn test_binomial_sizes() {
        // C(6, 3) = 20
        let ground: Vec<usize> = (0..6).collect();
        assert_eq!(k_subsets(&ground, 3).len(), 20);
    }
}
