//! # bsfd-methods
//!
//! Numerical methods for the Black-Scholes PDE: uniform grids, the
//! three-term spatial operator, explicit/implicit/Crank-Nicolson time
//! stepping and interpolation of the resulting value vectors.
//!
//! # Modules
//!
//! * [`finite_differences`]: grids, operators, solver back-ends and the
//!   time-stepping engine

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Finite difference methods: grids, tridiagonal operators, θ-scheme solver.
pub mod finite_differences;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use finite_differences::{
    interpolate, FdBlackScholesSolver, FdmScheme, FdmSettings, PriceGrid, SolverBackend,
    TimeGrid, TridiagonalOperator, ValueLayers,
};
