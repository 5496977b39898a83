//! Least-squares pseudo-inverse via the normal equations.

use thiserror::Error;
use tracing::debug;

use koszul_rings::Field;

use crate::dense_matrix::DenseMatrix;
use crate::sparse_matrix::CsrMatrix;

/// Errors from the linear solvers.
#[derive(Clone, Debug, Error)]
pub enum SolveError {
    /// The normal matrix AᵀA is singular, i.e. the input columns are
    /// linearly dependent.
    #[error("normal matrix is singular ({size}x{size}); input columns are linearly dependent")]
    SingularNormalMatrix {
        /// Side length of the normal matrix.
        size: usize,
    },
}

/// Computes the least-squares pseudo-inverse P = (AᵀA)⁻¹ Aᵀ of a tall
/// sparse matrix.
///
/// P satisfies P·A = I whenever A has full column rank, which is the
/// case for a matrix whose columns come out of a span reduction. The
/// normal matrix is formed sparse but inverted dense: it is square with
/// side `A.num_cols()`, small next to `A.num_rows()`.
///
/// # Errors
///
/// Returns [`SolveError::SingularNormalMatrix`] when AᵀA is singular
/// (rank-deficient input). Over exact scalars this is a hard failure,
/// never an approximation.
pub fn pseudo_inverse<R: Field>(a: &CsrMatrix<R>) -> Result<CsrMatrix<R>, SolveError> {
    let k = a.num_cols();
    let at = a.transpose();
    let normal = at.mul(a);

    debug!(
        rows = a.num_rows(),
        cols = k,
        nnz = a.nnz(),
        normal_nnz = normal.nnz(),
        "solving normal equations"
    );

    let mut normal_dense = DenseMatrix::zeros(k, k);
    for row in 0..k {
        for (col, val) in normal.row_iter(row) {
            normal_dense[(row, col)] = val.clone();
        }
    }

    let inv = normal_dense
        .inverse()
        .ok_or(SolveError::SingularNormalMatrix { size: k })?;

    // P = (AᵀA)⁻¹ Aᵀ, assembled from Aᵀ's sparsity: entry (s, c) of Aᵀ
    // contributes inv[r, s] * v to P[r, c] for every r.
    let mut triplets = Vec::new();
    for s in 0..k {
        for (c, v) in at.row_iter(s) {
            for r in 0..k {
                let coeff = inv[(r, s)].clone();
                if !coeff.is_zero() {
                    triplets.push((r, c, coeff * v.clone()));
                }
            }
        }
    }

    let p = CsrMatrix::from_triplets(k, a.num_rows(), triplets);
    debug!(rows = p.num_rows(), cols = p.num_cols(), nnz = p.nnz(), "pseudo-inverse assembled");
    Ok(p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use koszul_rings::Q;

    fn q(n: i64) -> Q {
        Q::from_integer(n)
    }

    #[test]
    fn test_pseudo_inverse_is_left_inverse() {
        // 4x2 full-column-rank matrix.
        let a = CsrMatrix::from_triplets(
            4,
            2,
            vec![
                (0, 0, q(1)),
                (1, 0, q(2)),
                (1, 1, q(1)),
                (2, 1, q(3)),
                (3, 0, q(-1)),
            ],
        );
        let p = pseudo_inverse(&a).unwrap();
        assert_eq!(p.num_rows(), 2);
        assert_eq!(p.num_cols(), 4);

        let pa = p.mul(&a);
        assert_eq!(pa, CsrMatrix::identity(2));
    }

    #[test]
    fn test_pseudo_inverse_single_column() {
        // A degenerate single-generator system: P = Aᵀ / (Aᵀ·A).
        let a = CsrMatrix::from_triplets(3, 1, vec![(0, 0, q(1)), (2, 0, q(2))]);
        let p = pseudo_inverse(&a).unwrap();
        assert_eq!(p.num_rows(), 1);
        assert_eq!(p.get(0, 0), Some(&Q::new(1, 5)));
        assert_eq!(p.get(0, 2), Some(&Q::new(2, 5)));
        assert_eq!(p.mul(&a), CsrMatrix::identity(1));
    }

    #[test]
    fn test_rank_deficient_is_reported() {
        // Two proportional columns.
        let a = CsrMatrix::from_triplets(
            3,
            2,
            vec![(0, 0, q(1)), (0, 1, q(2)), (2, 0, q(3)), (2, 1, q(6))],
        );
        match pseudo_inverse(&a) {
            Err(SolveError::SingularNormalMatrix { size }) => assert_eq!(size, 2),
            other => panic!("expected singular normal matrix, got {other:?}"),
        }
    }

    #[test]
    fn test_projection_property() {
        // For any b, A·(P·b) is the closest point in the column space;
        // when b is already in the column space, P recovers the exact
        // coordinates. b = 3*col0 - 2*col1.
        let a = CsrMatrix::from_triplets(
            3,
            2,
            vec![(0, 0, q(1)), (1, 1, q(1)), (2, 0, q(1)), (2, 1, q(1))],
        );
        let b = CsrMatrix::from_triplets(3, 1, vec![(0, 0, q(3)), (1, 0, q(-2)), (2, 0, q(1))]);
        let p = pseudo_inverse(&a).unwrap();
        let x = p.mul(&b);
        assert_eq!(x.get(0, 0), Some(&q(3)));
        assert_eq!(x.get(1, 0), Some(&q(-2)));
        let residual_check = a.mul(&x);
        assert_eq!(residual_check, b);
    }
}
