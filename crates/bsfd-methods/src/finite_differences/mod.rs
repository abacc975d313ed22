//! Finite-difference pricing of European options on the Black-Scholes PDE.
//!
//! The PDE `∂V/∂t + ½σ²S²·∂²V/∂S² + (r−q)S·∂V/∂S − rV = 0` is discretised
//! on a uniform price grid `[0, 2K]` and rolled back from the terminal payoff
//! with a θ-scheme:
//!
//! * [`PriceGrid`], [`TimeGrid`]: nodes `S_j = j·ΔS` and step `ΔT = T/N`
//! * [`StencilCoefficients`]: the three-term spatial operator `L`
//! * [`TridiagonalOperator`] and the [`solver`] back-ends
//! * [`DirichletBoundaries`]: closed-form values at `S = 0` and `S = Smax`
//! * [`FdBlackScholesSolver`]: the time-stepping engine
//! * [`interpolate`]: reads the `t = 0` vector at the spot

/// Dirichlet boundary values.
pub mod boundary;
/// Stencil coefficients of the spatial operator.
pub mod coefficients;
/// Price and time grids.
pub mod grid;
/// Linear interpolation on the price grid.
pub mod interpolator;
/// Tridiagonal operators and the Thomas factorisation.
pub mod operator;
/// Scheme selection.
pub mod scheme;
/// Dense and banded solver back-ends.
pub mod solver;
/// Backward time stepping.
pub mod stepping;

pub use boundary::DirichletBoundaries;
pub use coefficients::StencilCoefficients;
pub use grid::{PriceGrid, TimeGrid, S_MAX_MULTIPLE};
pub use interpolator::interpolate;
pub use operator::{TridiagonalLu, TridiagonalOperator};
pub use scheme::FdmScheme;
pub use solver::{AssembledOperator, FactoredOperator, SolverBackend};
pub use stepping::{
    FdBlackScholesSolver, FdmSettings, ValueLayers, DIVERGENCE_MULTIPLE, MAX_DENSE_SPACE_STEPS,
    MAX_SPACE_STEPS, MAX_TIME_STEPS,
};
