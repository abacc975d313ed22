//! Linear-system back-ends for the finite-difference operators.
//!
//! Operators are time-invariant, so each is assembled, and where needed
//! factored, once per pricing request and reused for every time step.

use super::operator::{TridiagonalLu, TridiagonalOperator};
use bsfd_core::errors::Result;
use bsfd_math::{Array, LuDecomposition, Matrix};
use std::fmt;

/// How operators are stored and systems solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SolverBackend {
    /// Band storage with the Thomas algorithm: O(M) per step.
    #[default]
    Tridiagonal,
    /// Dense `(M+1)×(M+1)` matrices with an LU factorisation: O(M²) per step.
    DenseLu,
}

impl fmt::Display for SolverBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverBackend::Tridiagonal => f.write_str("tridiagonal"),
            SolverBackend::DenseLu => f.write_str("dense-lu"),
        }
    }
}

/// An operator applied as `y = A · x` once per step.
#[derive(Debug, Clone)]
pub enum AssembledOperator {
    /// Band storage.
    Tridiagonal(TridiagonalOperator),
    /// Dense storage.
    Dense(Matrix),
}

impl AssembledOperator {
    /// Store `op` for the given back-end.
    pub fn new(op: TridiagonalOperator, backend: SolverBackend) -> Self {
        match backend {
            SolverBackend::Tridiagonal => AssembledOperator::Tridiagonal(op),
            SolverBackend::DenseLu => AssembledOperator::Dense(op.to_matrix()),
        }
    }

    /// `A · x`.
    pub fn apply(&self, x: &Array) -> Result<Array> {
        match self {
            AssembledOperator::Tridiagonal(op) => op.apply(x),
            AssembledOperator::Dense(m) => {
                bsfd_core::ensure!(
                    x.size() == m.cols(),
                    "vector has {} entries, operator has {}",
                    x.size(),
                    m.cols()
                );
                Ok(m.mul_vec(x))
            }
        }
    }
}

/// An operator factored once and solved against a new right-hand side each
/// step.
#[derive(Debug, Clone)]
pub enum FactoredOperator {
    /// Pre-swept Thomas factors.
    Tridiagonal(TridiagonalLu),
    /// Dense LU with partial pivoting.
    Dense(LuDecomposition),
}

impl FactoredOperator {
    /// Factor `op` for the given back-end.
    ///
    /// # Errors
    /// `Error::Computation` if the operator is singular.
    pub fn new(op: &TridiagonalOperator, backend: SolverBackend) -> Result<Self> {
        match backend {
            SolverBackend::Tridiagonal => Ok(FactoredOperator::Tridiagonal(op.factor()?)),
            SolverBackend::DenseLu => {
                Ok(FactoredOperator::Dense(LuDecomposition::new(&op.to_matrix())?))
            }
        }
    }

    /// Solve `A · x = rhs`.
    pub fn solve(&self, rhs: &Array) -> Result<Array> {
        match self {
            FactoredOperator::Tridiagonal(lu) => lu.solve(rhs),
            FactoredOperator::Dense(lu) => lu.solve(rhs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn sample_operator() -> TridiagonalOperator {
        TridiagonalOperator {
            lower: vec![0.0, -0.3, -0.2, -0.1, 0.0],
            diag: vec![1.0, 1.7, 1.5, 1.3, 1.0],
            upper: vec![0.0, -0.4, -0.3, -0.2, 0.0],
        }
    }

    #[test]
    fn backends_agree_on_apply() {
        let x = Array::from_slice(&[5.0, 4.0, 3.0, 2.0, 1.0]);
        let band = AssembledOperator::new(sample_operator(), SolverBackend::Tridiagonal);
        let dense = AssembledOperator::new(sample_operator(), SolverBackend::DenseLu);
        let a = band.apply(&x).unwrap();
        let b = dense.apply(&x).unwrap();
        for i in 0..5 {
            assert_abs_diff_eq!(a[i], b[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn backends_agree_on_solve() {
        let rhs = Array::from_slice(&[1.0, -2.0, 0.5, 3.0, 2.0]);
        let band = FactoredOperator::new(&sample_operator(), SolverBackend::Tridiagonal).unwrap();
        let dense = FactoredOperator::new(&sample_operator(), SolverBackend::DenseLu).unwrap();
        let a = band.solve(&rhs).unwrap();
        let b = dense.solve(&rhs).unwrap();
        for i in 0..5 {
            assert_abs_diff_eq!(a[i], b[i], epsilon = 1e-12);
        }
        // Identity boundary rows pass the right-hand side through.
        assert_abs_diff_eq!(a[0], 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(a[4], 2.0, epsilon = 1e-15);
    }

    #[test]
    fn singular_operator_fails_on_both_backends() {
        let mut op = sample_operator();
        op.diag[2] = 0.0;
        op.lower[2] = 0.0;
        op.upper[2] = 0.0;
        for backend in [SolverBackend::Tridiagonal, SolverBackend::DenseLu] {
            assert!(FactoredOperator::new(&op, backend).is_err(), "{backend}");
        }
    }

    #[test]
    fn default_backend_is_tridiagonal() {
        assert_eq!(SolverBackend::default(), SolverBackend::Tridiagonal);
    }
}
