//! Tridiagonal operators and their pre-factored Thomas solver.
//!
//! Rows 1..M−1 of every finite-difference operator hold a three-point
//! stencil; rows 0 and M are identity rows whose values are dictated by the
//! boundary conditions.

use bsfd_core::{
    ensure,
    errors::{Error, Result},
    Real, Size,
};
use bsfd_math::{Array, Matrix};

/// A tridiagonal matrix operator stored by bands.
#[derive(Debug, Clone, PartialEq)]
pub struct TridiagonalOperator {
    /// Lower diagonal (index 0 unused; starts from row 1).
    pub lower: Vec<Real>,
    /// Main diagonal.
    pub diag: Vec<Real>,
    /// Upper diagonal (last index unused; ends at row n−2).
    pub upper: Vec<Real>,
}

impl TridiagonalOperator {
    /// Create the identity operator of size `n`.
    pub fn identity(n: Size) -> Self {
        Self {
            lower: vec![0.0; n],
            diag: vec![1.0; n],
            upper: vec![0.0; n],
        }
    }

    /// Size (number of rows/columns).
    pub fn size(&self) -> Size {
        self.diag.len()
    }

    /// Turn row `i` into an identity row.
    pub fn set_identity_row(&mut self, i: Size) {
        self.lower[i] = 0.0;
        self.diag[i] = 1.0;
        self.upper[i] = 0.0;
    }

    /// Make the first and last rows identity rows.
    pub fn with_identity_boundaries(mut self) -> Self {
        let last = self.size() - 1;
        self.set_identity_row(0);
        self.set_identity_row(last);
        self
    }

    /// Apply the operator: `y = A · x`.
    pub fn apply(&self, x: &Array) -> Result<Array> {
        let n = self.size();
        ensure!(n >= 2, "operator needs at least 2 rows, got {n}");
        ensure!(x.size() == n, "vector has {} entries, operator has {n}", x.size());
        let mut y = Array::zeros(n);
        y[0] = self.diag[0] * x[0] + self.upper[0] * x[1];
        for i in 1..n - 1 {
            y[i] = self.lower[i] * x[i - 1] + self.diag[i] * x[i] + self.upper[i] * x[i + 1];
        }
        y[n - 1] = self.lower[n - 1] * x[n - 2] + self.diag[n - 1] * x[n - 1];
        Ok(y)
    }

    /// Assemble the dense `n × n` matrix.
    pub fn to_matrix(&self) -> Matrix {
        let n = self.size();
        let mut m = Matrix::zeros(n, n);
        for i in 0..n {
            if i > 0 {
                m[(i, i - 1)] = self.lower[i];
            }
            m[(i, i)] = self.diag[i];
            if i + 1 < n {
                m[(i, i + 1)] = self.upper[i];
            }
        }
        m
    }

    /// Factor the operator once for repeated solves (Thomas algorithm).
    ///
    /// # Errors
    /// [`Error::Computation`] on a zero or non-finite pivot.
    pub fn factor(&self) -> Result<TridiagonalLu> {
        let n = self.size();
        ensure!(n >= 2, "operator needs at least 2 rows, got {n}");
        let mut c_prime = vec![0.0; n];
        let mut inv_pivot = vec![0.0; n];

        let mut pivot = self.diag[0];
        for i in 0..n {
            if i > 0 {
                pivot = self.diag[i] - self.lower[i] * c_prime[i - 1];
            }
            if pivot == 0.0 || !pivot.is_finite() {
                return Err(Error::Computation(format!(
                    "zero pivot in row {i} of the {n}×{n} tridiagonal system"
                )));
            }
            inv_pivot[i] = 1.0 / pivot;
            if i < n - 1 {
                c_prime[i] = self.upper[i] * inv_pivot[i];
            }
        }

        Ok(TridiagonalLu {
            lower: self.lower.clone(),
            c_prime,
            inv_pivot,
        })
    }
}

/// LU factors of a [`TridiagonalOperator`]: the forward-sweep multipliers
/// are computed once, leaving O(n) work per right-hand side.
#[derive(Debug, Clone, PartialEq)]
pub struct TridiagonalLu {
    lower: Vec<Real>,
    c_prime: Vec<Real>,
    inv_pivot: Vec<Real>,
}

impl TridiagonalLu {
    /// Dimension of the system.
    pub fn size(&self) -> Size {
        self.inv_pivot.len()
    }

    /// Solve `A · x = rhs`.
    pub fn solve(&self, rhs: &Array) -> Result<Array> {
        let n = self.size();
        ensure!(rhs.size() == n, "right-hand side has {} entries, system has {n}", rhs.size());

        // Forward sweep
        let mut x = Array::zeros(n);
        x[0] = rhs[0] * self.inv_pivot[0];
        for i in 1..n {
            x[i] = (rhs[i] - self.lower[i] * x[i - 1]) * self.inv_pivot[i];
        }

        // Back substitution
        for i in (0..n - 1).rev() {
            x[i] -= self.c_prime[i] * x[i + 1];
        }
        Ok(x)
    }
}
