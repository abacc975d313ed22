//! Matrix decompositions.
//!
//! Wraps nalgebra's LU factorisation so a system matrix can be factored once
//! and solved against many right-hand sides.

use crate::array::Array;
use crate::matrix::Matrix;
use bsfd_core::{
    errors::{Error, Result},
    Real,
};
use nalgebra::{linalg::LU, Dyn};

/// LU decomposition with partial pivoting of a square, non-singular matrix.
#[derive(Debug, Clone)]
pub struct LuDecomposition {
    lu: LU<Real, Dyn, Dyn>,
    size: usize,
}

impl LuDecomposition {
    /// Factor `m`.
    ///
    /// # Errors
    /// [`Error::Precondition`] if `m` is not square, [`Error::Computation`]
    /// if it is singular.
    pub fn new(m: &Matrix) -> Result<Self> {
        bsfd_core::ensure!(
            m.is_square(),
            "LU decomposition needs a square matrix, got {}×{}",
            m.rows(),
            m.cols()
        );
        let lu = m.inner().clone().lu();
        if !lu.is_invertible() {
            return Err(Error::Computation(format!(
                "{n}×{n} system matrix is singular",
                n = m.rows()
            )));
        }
        Ok(Self { lu, size: m.rows() })
    }

    /// Dimension of the factored matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Solve `A · x = rhs`.
    pub fn solve(&self, rhs: &Array) -> Result<Array> {
        bsfd_core::ensure!(
            rhs.size() == self.size(),
            "right-hand side has {} entries, system has {}",
            rhs.size(),
            self.size()
        );
        self.lu
            .solve(rhs.inner())
            .map(Array::from)
            .ok_or_else(|| Error::Computation("LU back-substitution failed".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn lu_solves_tridiagonal_system() {
        // A = [[2, -1, 0], [-1, 2, -1], [0, -1, 2]], x = [1, 2, 3]
        let a = Matrix::from_row_slice(3, 3, &[2.0, -1.0, 0.0, -1.0, 2.0, -1.0, 0.0, -1.0, 2.0]);
        let lu = LuDecomposition::new(&a).unwrap();
        let x = lu.solve(&Array::from_slice(&[0.0, 0.0, 4.0])).unwrap();
        assert_abs_diff_eq!(x[0], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(x[1], 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(x[2], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn lu_is_reusable() {
        let a = Matrix::from_row_slice(2, 2, &[4.0, 1.0, 2.0, 3.0]);
        let lu = LuDecomposition::new(&a).unwrap();
        for rhs in [[5.0, 5.0], [1.0, 0.0], [0.0, 1.0]] {
            let x = lu.solve(&Array::from_slice(&rhs)).unwrap();
            let back = a.mul_vec(&x);
            assert_abs_diff_eq!(back[0], rhs[0], epsilon = 1e-12);
            assert_abs_diff_eq!(back[1], rhs[1], epsilon = 1e-12);
        }
    }

    #[test]
    fn singular_matrix_is_a_computation_error() {
        let a = Matrix::from_row_slice(2, 2, &[1.0, 2.0, 2.0, 4.0]);
        assert!(matches!(LuDecomposition::new(&a), Err(Error::Computation(_))));
    }

    #[test]
    fn non_square_is_rejected() {
        let a = Matrix::zeros(2, 3);
        assert!(matches!(LuDecomposition::new(&a), Err(Error::Precondition(_))));
    }

    #[test]
    fn mismatched_rhs_is_rejected() {
        let lu = LuDecomposition::new(&Matrix::from_row_slice(
            3,
            3,
            &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
        ))
        .unwrap();
        assert!(lu.solve(&Array::zeros(2)).is_err());
    }
}
