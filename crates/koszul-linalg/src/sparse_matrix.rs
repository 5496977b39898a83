//! Sparse matrix in Compressed Sparse Row (CSR) format.
//!
//! CSR keeps each row's entries contiguous and sorted by column, which
//! is what the trace accumulation needs: the trace of a product is a
//! sum of row-by-row sorted-merge dot products, never materializing the
//! product matrix.

use rustc_hash::FxHashMap;

use koszul_rings::Ring;

/// Sparse matrix in Compressed Sparse Row (CSR) format.
///
/// For an m×n matrix with nnz non-zero entries:
/// - `values`: nnz non-zero values in row-major order
/// - `col_indices`: column index for each value
/// - `row_ptrs`: m+1 offsets; row i spans `row_ptrs[i]..row_ptrs[i+1]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrMatrix<R> {
    values: Vec<R>,
    col_indices: Vec<usize>,
    row_ptrs: Vec<usize>,
    num_cols: usize,
}

impl<R: Ring> CsrMatrix<R> {
    /// Creates a new empty sparse matrix.
    #[must_use]
    pub fn new(num_rows: usize, num_cols: usize) -> Self {
        Self {
            values: Vec::new(),
            col_indices: Vec::new(),
            row_ptrs: vec![0; num_rows + 1],
            num_cols,
        }
    }

    /// Creates a sparse matrix from triplets (row, col, value).
    ///
    /// Duplicate entries are summed; entries summing to zero are
    /// dropped. Construction is deterministic: entries end up sorted by
    /// (row, col).
    #[must_use]
    pub fn from_triplets(num_rows: usize, num_cols: usize, triplets: Vec<(usize, usize, R)>) -> Self {
        let mut sorted = triplets;
        sorted.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));

        let mut values: Vec<R> = Vec::new();
        let mut col_indices: Vec<usize> = Vec::new();
        let mut row_ptrs = Vec::with_capacity(num_rows + 1);
        row_ptrs.push(0);

        let mut current_row = 0;
        for (row, col, val) in sorted {
            assert!(row < num_rows && col < num_cols, "triplet out of bounds");

            if current_row == row
                && row_ptrs.len() == row + 1
                && values.len() > row_ptrs[row]
                && col_indices.last() == Some(&col)
            {
                // Same position as the previous entry: accumulate. The
                // last entry must lie within the current row, or a
                // cancelled pair would let a later duplicate fold into
                // the previous row's entry on the same column.
                let last = values.last_mut().expect("non-empty");
                *last = last.clone() + val;
                if last.is_zero() {
                    values.pop();
                    col_indices.pop();
                }
                continue;
            }

            while current_row < row {
                row_ptrs.push(values.len());
                current_row += 1;
            }

            if !val.is_zero() {
                values.push(val);
                col_indices.push(col);
            }
        }

        while row_ptrs.len() <= num_rows {
            row_ptrs.push(values.len());
        }

        Self {
            values,
            col_indices,
            row_ptrs,
            num_cols,
        }
    }

    /// Creates an identity matrix of size n×n.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        Self {
            values: (0..n).map(|_| R::one()).collect(),
            col_indices: (0..n).collect(),
            row_ptrs: (0..=n).collect(),
            num_cols: n,
        }
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.row_ptrs.len().saturating_sub(1)
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Returns the number of non-zero entries.
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Returns an iterator over non-zero entries in a row, sorted by
    /// column.
    pub fn row_iter(&self, row: usize) -> impl Iterator<Item = (usize, &R)> {
        let start = self.row_ptrs[row];
        let end = self.row_ptrs[row + 1];
        self.col_indices[start..end]
            .iter()
            .zip(&self.values[start..end])
            .map(|(&col, val)| (col, val))
    }

    /// Returns the entry at (row, col), or None if zero.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&R> {
        let start = self.row_ptrs[row];
        let end = self.row_ptrs[row + 1];
        let idx = self.col_indices[start..end].binary_search(&col).ok()?;
        Some(&self.values[start + idx])
    }

    /// Returns the transpose of the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let triplets: Vec<_> = (0..self.num_rows())
            .flat_map(|row| {
                self.row_iter(row)
                    .map(move |(col, val)| (col, row, val.clone()))
            })
            .collect();

        Self::from_triplets(self.num_cols, self.num_rows(), triplets)
    }

    /// Sparse matrix product C = A * B.
    ///
    /// Row i of C is accumulated as the combination of B's rows picked
    /// out by row i of A.
    ///
    /// # Panics
    ///
    /// Panics if the inner dimensions disagree.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        assert_eq!(self.num_cols, other.num_rows(), "dimension mismatch");

        let mut triplets = Vec::new();
        let mut scratch: FxHashMap<usize, R> = FxHashMap::default();

        for row in 0..self.num_rows() {
            scratch.clear();
            for (k, a_val) in self.row_iter(row) {
                for (col, b_val) in other.row_iter(k) {
                    let term = a_val.clone() * b_val.clone();
                    match scratch.get_mut(&col) {
                        Some(acc) => *acc = acc.clone() + term,
                        None => {
                            scratch.insert(col, term);
                        }
                    }
                }
            }
            triplets.extend(
                scratch
                    .drain()
                    .map(|(col, val)| (row, col, val)),
            );
        }

        Self::from_triplets(self.num_rows(), other.num_cols, triplets)
    }

    /// Dot product of row `i` of `self` with row `j` of `other`, by
    /// sorted merge of the two column lists.
    #[must_use]
    pub fn row_dot_row(&self, i: usize, other: &Self, j: usize) -> R {
        let mut a = self.row_iter(i).peekable();
        let mut b = other.row_iter(j).peekable();
        let mut acc = R::zero();

        while let (Some(&(ca, _)), Some(&(cb, _))) = (a.peek(), b.peek()) {
            match ca.cmp(&cb) {
                std::cmp::Ordering::Less => {
                    a.next();
                }
                std::cmp::Ordering::Greater => {
                    b.next();
                }
                std::cmp::Ordering::Equal => {
                    let (_, va) = a.next().expect("peeked");
                    let (_, vb) = b.next().expect("peeked");
                    acc = acc + va.clone() * vb.clone();
                }
            }
        }
        acc
    }

    /// Converts to a dense row-major representation.
    #[must_use]
    pub fn to_dense(&self) -> Vec<Vec<R>> {
        let mut dense = vec![vec![R::zero(); self.num_cols]; self.num_rows()];
        for row in 0..self.num_rows() {
            for (col, val) in self.row_iter(row) {
                dense[row][col] = val.clone();
            }
        }
        dense
    }
}
