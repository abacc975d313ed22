//! # bsfd-math
//!
//! Mathematical building blocks: vector and matrix newtypes over nalgebra,
//! dense LU solves, price rounding and the normal distribution (via statrs).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// One-dimensional real vectors.
pub mod array;

/// Standard normal distribution.
pub mod distributions;

/// Dense matrices.
pub mod matrix;

/// LU factorisation.
pub mod matrix_utilities;

/// Price rounding.
pub mod rounding;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use array::Array;
pub use distributions::{normal_cdf, normal_pdf};
pub use matrix::Matrix;
pub use matrix_utilities::LuDecomposition;
pub use rounding::{round, round_price, PRICE_DECIMALS};
