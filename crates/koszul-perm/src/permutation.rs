//! Permutations of `0..n` in map representation.

use crate::cycle_type::CycleType;

/// A permutation of `0..n`, stored by its direct mapping: `map[i]` is
/// the image of `i`.
///
/// # Examples
///
/// ```
/// use koszul_perm::Permutation;
///
/// let p = Permutation::from_map(vec![2, 0, 1]);
/// assert_eq!(p.apply(0), 2);
/// assert_eq!(p.apply(2), 1);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Permutation {
    map: Vec<usize>,
}

impl Permutation {
    /// Creates the identity permutation of length n.
    #[must_use]
    pub fn id(n: usize) -> Self {
        Self {
            map: (0..n).collect(),
        }
    }

    /// Creates a permutation from a mapping vector.
    ///
    /// # Panics
    ///
    /// Panics if `map` is not a permutation of `0..map.len()`.
    #[must_use]
    pub fn from_map(map: Vec<usize>) -> Self {
        let mut seen = vec![false; map.len()];
        for &img in &map {
            assert!(img < map.len() && !seen[img], "not a permutation");
            seen[img] = true;
        }
        Self { map }
    }

    /// The canonical representative of a conjugacy class: consecutive
    /// index blocks, one per part, each cycled as j -> j+1 with the last
    /// element sent back to the block start.
    ///
    /// # Panics
    ///
    /// Panics if the cycle type is not a partition of n.
    #[must_use]
    pub fn from_cycle_type(n: usize, ct: &CycleType) -> Self {
        assert_eq!(ct.degree(), n, "cycle type must be a partition of n");

        let mut map = Vec::with_capacity(n);
        let mut start = 0;
        for &len in ct.parts() {
            map.extend(start + 1..start + len);
            map.push(start);
            start += len;
        }
        Self { map }
    }

    /// The image of `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    #[must_use]
    pub fn apply(&self, i: usize) -> usize {
        self.map[i]
    }

    /// The size of the set being permuted.
    #[must_use]
    pub fn n(&self) -> usize {
        self.map.len()
    }

    /// The underlying mapping.
    #[must_use]
    pub fn as_map(&self) -> &[usize] {
        &self.map
    }

    /// The cycle type of this permutation.
    #[must_use]
    pub fn cycle_type(&self) -> CycleType {
        let mut visited = vec![false; self.map.len()];
        let mut parts = Vec::new();

        for start in 0..self.map.len() {
            if visited[start] {
                continue;
            }
            let mut len = 0;
            let mut i = start;
            while !visited[i] {
                visited[i] = true;
                i = self.map[i];
                len += 1;
            }
            parts.push(len);
        }

        CycleType::new(parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cycle_type() {
        // Partition (2, 3) of 5: blocks {0,1} and {2,3,4}.
        let ct = CycleType::new(vec![2, 3]);
        let p = Permutation::from_cycle_type(5, &ct);
        assert_eq!(p.as_map(), &[1, 0, 3, 4, 2]);
        assert_eq!(p.cycle_type(), ct);
    }

    #[test]
    fn test_identity_cycle_type() {
        let p = Permutation::id(4);
        assert_eq!(p.cycle_type(), CycleType::new(vec![1, 1, 1, 1]));
    }

    #[test]
    #[should_panic(expected = "not a permutation")]
    fn test_invalid_map() {
        let _ = Permutation::from_map(vec![0, 0, 1]);
    }
}
