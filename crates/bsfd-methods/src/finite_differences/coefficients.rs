//! Stencil coefficients of the discretised Black-Scholes operator.
//!
//! On the grid `S_j = j·ΔS` the spatial part of
//! `∂V/∂t + ½σ²S²·∂²V/∂S² + (r−q)S·∂V/∂S − rV = 0`
//! becomes, at interior node `j`,
//!
//! ```text
//! (L·V)_j = ½(σ²j² − (r−q)j)·V_{j−1} − (σ²j² + r)·V_j + ½(σ²j² + (r−q)j)·V_{j+1}
//! ```
//!
//! ΔS cancels out because `S_j/ΔS = j`. Each scheme then uses
//! `I + (1−θ)ΔT·L` on the explicit side and `I − θΔT·L` on the implicit
//! side, which gives the usual `½ΔT` weights for the explicit and implicit
//! schemes and `¼ΔT` weights for Crank-Nicolson.

use super::operator::TridiagonalOperator;
use bsfd_core::{Rate, Real, Size, Time, Volatility};

/// Stencil weights of `L` at every node (zero on the boundary nodes).
#[derive(Debug, Clone, PartialEq)]
pub struct StencilCoefficients {
    lower: Vec<Real>,
    diag: Vec<Real>,
    upper: Vec<Real>,
}

impl StencilCoefficients {
    /// Coefficients for `space_steps` intervals and the given PDE terms.
    pub fn black_scholes(
        space_steps: Size,
        risk_free_rate: Rate,
        dividend_yield: Rate,
        volatility: Volatility,
    ) -> Self {
        let n = space_steps + 1;
        let sigma2 = volatility * volatility;
        let carry = risk_free_rate - dividend_yield;
        let mut lower = vec![0.0; n];
        let mut diag = vec![0.0; n];
        let mut upper = vec![0.0; n];
        for j in 1..space_steps {
            let jf = j as Real;
            let diffusion = sigma2 * jf * jf;
            let drift = carry * jf;
            lower[j] = 0.5 * (diffusion - drift);
            diag[j] = -(diffusion + risk_free_rate);
            upper[j] = 0.5 * (diffusion + drift);
        }
        Self { lower, diag, upper }
    }

    /// Number of grid nodes covered.
    pub fn size(&self) -> Size {
        self.diag.len()
    }

    /// `I + weight·L` with identity boundary rows.
    ///
    /// For the explicit scheme (`weight = ΔT`) row `j` reads
    /// `a_j = ½ΔT(σ²j² − (r−q)j)`, `b_j = 1 − ΔT(σ²j² + r)`,
    /// `c_j = ½ΔT(σ²j² + (r−q)j)`.
    pub fn explicit_operator(&self, weight: Time) -> TridiagonalOperator {
        self.shifted(weight)
    }

    /// `I − weight·L` with identity boundary rows.
    pub fn implicit_operator(&self, weight: Time) -> TridiagonalOperator {
        self.shifted(-weight)
    }

    fn shifted(&self, weight: Real) -> TridiagonalOperator {
        TridiagonalOperator {
            lower: self.lower.iter().map(|l| weight * l).collect(),
            diag: self.diag.iter().map(|d| 1.0 + weight * d).collect(),
            upper: self.upper.iter().map(|u| weight * u).collect(),
        }
        .with_identity_boundaries()
    }

    /// Largest explicit-side diagonal reduction, `ΔT·(σ²(M−1)² + r)`.
    ///
    /// The explicit scheme is only stable while this stays at or below one
    /// (every `b_j ≥ 0`).
    pub fn explicit_stability_ratio(&self, dt: Time) -> Real {
        self.diag
            .iter()
            .fold(0.0, |acc: Real, d| acc.max(-dt * d))
    }
}
