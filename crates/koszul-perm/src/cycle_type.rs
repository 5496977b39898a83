//! Partitions of n, viewed as cycle types of symmetric-group elements.

use std::fmt;

/// The cycle type of a permutation: a partition of n with parts sorted
/// ascending.
///
/// Characters are class functions, so a cycle type identifies a
/// conjugacy class of S_n and is the key every character table is
/// indexed by.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct CycleType {
    parts: Vec<usize>,
}

impl CycleType {
    /// Creates a cycle type from a list of cycle lengths.
    ///
    /// Parts are sorted ascending; zero-length parts are rejected.
    ///
    /// # Panics
    ///
    /// Panics if any part is zero.
    #[must_use]
    pub fn new(mut parts: Vec<usize>) -> Self {
        assert!(parts.iter().all(|&p| p > 0), "cycle lengths must be positive");
        parts.sort_unstable();
        Self { parts }
    }

    /// The parts of the partition, ascending.
    #[must_use]
    pub fn parts(&self) -> &[usize] {
        &self.parts
    }

    /// The sum of the parts, i.e. the n this is a partition of.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.parts.iter().sum()
    }

    /// Counts the parts equal to `len`.
    #[must_use]
    pub fn count(&self, len: usize) -> usize {
        self.parts.iter().filter(|&&p| p == len).count()
    }

    /// Number of fixed points, i.e. parts equal to 1.
    #[must_use]
    pub fn fixed_points(&self) -> usize {
        self.count(1)
    }

    /// The cycle type of the kth power of a permutation of this type.
    ///
    /// A cycle of length L splits into gcd(L, k) cycles of length
    /// L / gcd(L, k).
    #[must_use]
    pub fn power(&self, k: usize) -> Self {
        let mut parts = Vec::new();
        for &len in &self.parts {
            let g = gcd(len, k);
            parts.extend(std::iter::repeat(len / g).take(g));
        }
        parts.sort_unstable();
        Self { parts }
    }
}

impl fmt::Display for CycleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, p) in self.parts.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{p}")?;
        }
        write!(f, ")")
    }
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// All partitions of n with smallest part at least `min`, in
/// lexicographic order of the ascending part lists.
#[must_use]
pub fn partitions_with_min(min: usize, n: usize) -> Vec<CycleType> {
    if n == 0 {
        return vec![CycleType { parts: Vec::new() }];
    }

    let mut result = Vec::new();
    for k in min..=n {
        for rest in partitions_with_min(k, n - k) {
            let mut parts = Vec::with_capacity(rest.parts.len() + 1);
            parts.push(k);
            parts.extend_from_slice(&rest.parts);
            result.push(CycleType { parts });
        }
    }
    result
}

/// All partitions of n, in lexicographic order.
///
/// This is the canonical ordering of cycle types used by the character
/// tables.
#[must_use]
pub fn partitions(n: usize) -> Vec<CycleType> {
    partitions_with_min(1, n)
}
