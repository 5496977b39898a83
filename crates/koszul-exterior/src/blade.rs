//! Basis blades: signed wedge products of ordered basis factors.

use std::fmt;

use smallvec::SmallVec;

/// Inline capacity for blade factors. Wedge degrees past this spill to
/// the heap.
const INLINE_FACTORS: usize = 4;

/// A basis vector of an exterior power: an ordered sequence of distinct
/// ground-set factors, representing their wedge product.
///
/// A `Blade` produced by [`Blade::standard_form`] or [`Blade::wedge`]
/// has its factors sorted ascending and pairwise distinct; the sign
/// picked up while sorting is returned alongside, never stored.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Blade<T> {
    factors: SmallVec<[T; INLINE_FACTORS]>,
}

impl<T: Ord + Clone> Blade<T> {
    /// Creates a blade from factors already known to be sorted and
    /// distinct.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the factors are not strictly
    /// increasing.
    #[must_use]
    pub fn from_sorted(factors: impl IntoIterator<Item = T>) -> Self {
        let factors: SmallVec<[T; INLINE_FACTORS]> = factors.into_iter().collect();
        debug_assert!(
            factors.windows(2).all(|w| w[0] < w[1]),
            "factors must be strictly increasing"
        );
        Self { factors }
    }

    /// The empty blade, i.e. the unit of the exterior algebra.
    #[must_use]
    pub fn unit() -> Self {
        Self {
            factors: SmallVec::new(),
        }
    }

    /// Puts an arbitrary factor sequence in standard form.
    ///
    /// Returns the sign of the sorting permutation together with the
    /// sorted blade, or `None` if a factor repeats (the wedge product is
    /// then zero). Sorting is an iterative bottom-up merge sort that
    /// counts inversions, so no recursion depth is tied to the wedge
    /// degree.
    #[must_use]
    pub fn standard_form(factors: impl IntoIterator<Item = T>) -> Option<(i8, Self)> {
        let mut data: Vec<T> = factors.into_iter().collect();
        let n = data.len();
        let mut inversions: u64 = 0;
        let mut buf: Vec<T> = Vec::with_capacity(n);

        let mut width = 1;
        while width < n {
            let mut start = 0;
            while start + width < n {
                let mid = start + width;
                let end = usize::min(start + 2 * width, n);

                // Merge data[start..mid] with data[mid..end] into buf.
                buf.clear();
                let mut i = start;
                let mut j = mid;
                while i < mid && j < end {
                    match data[i].cmp(&data[j]) {
                        std::cmp::Ordering::Less => {
                            buf.push(data[i].clone());
                            i += 1;
                        }
                        std::cmp::Ordering::Greater => {
                            // data[j] crosses every element left in the
                            // first run.
                            inversions += (mid - i) as u64;
                            buf.push(data[j].clone());
                            j += 1;
                        }
                        std::cmp::Ordering::Equal => return None,
                    }
                }
                buf.extend(data[i..mid].iter().cloned());
                buf.extend(data[j..end].iter().cloned());
                data[start..end].clone_from_slice(&buf);

                start = end;
            }
            width *= 2;
        }

        let sign = if inversions % 2 == 0 { 1 } else { -1 };
        Some((
            sign,
            Self {
                factors: data.into_iter().collect(),
            },
        ))
    }

    /// Wedge-multiplies two standard-form blades.
    ///
    /// Merges the factor sequences, counting how many factors of `self`
    /// each factor of `other` crosses. Returns `None` when the blades
    /// share a factor.
    #[must_use]
    pub fn wedge(&self, other: &Self) -> Option<(i8, Self)> {
        let mut factors: SmallVec<[T; INLINE_FACTORS]> =
            SmallVec::with_capacity(self.len() + other.len());
        let mut inversions: u64 = 0;
        let mut i = 0;
        let mut j = 0;

        while i < self.len() && j < other.len() {
            match self.factors[i].cmp(&other.factors[j]) {
                std::cmp::Ordering::Less => {
                    factors.push(self.factors[i].clone());
                    i += 1;
                }
                std::cmp::Ordering::Greater => {
                    inversions += (self.len() - i) as u64;
                    factors.push(other.factors[j].clone());
                    j += 1;
                }
                std::cmp::Ordering::Equal => return None,
            }
        }
        factors.extend(self.factors[i..].iter().cloned());
        factors.extend(other.factors[j..].iter().cloned());

        let sign = if inversions % 2 == 0 { 1 } else { -1 };
        Some((sign, Self { factors }))
    }

    /// The factors of the blade, in order.
    #[must_use]
    pub fn factors(&self) -> &[T] {
        &self.factors
    }

    /// The wedge degree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    /// Returns true for the unit blade.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }
}

impl<T: fmt::Debug> fmt::Debug for Blade<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "⋀")?;
        f.debug_list().entries(self.factors.iter()).finish()
    }
}
