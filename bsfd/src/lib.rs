//! # bsfd
//!
//! European call and put pricing by finite-difference solution of the
//! Black-Scholes PDE, with explicit, implicit and Crank-Nicolson schemes.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `bsfd-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use bsfd::pricingengines::{price_european, RawPricingRequest};
//!
//! let request = RawPricingRequest {
//!     spot: "100".into(),
//!     strike: "100".into(),
//!     interest_rate: "5".into(),
//!     dividend_yield: "0".into(),
//!     maturity: "365".into(),
//!     volatility: "20".into(),
//!     space_steps: "100".into(),
//!     time_steps: "100".into(),
//!     scheme: "crank".into(),
//! };
//! let prices = price_european(&request).unwrap();
//! assert!((prices.call - 10.45).abs() < 0.05);
//! assert!((prices.put - 5.57).abs() < 0.05);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, error definitions and input parsing.
pub use bsfd_core as core;

/// Arrays, matrices, LU factorisation, normal distribution, rounding.
pub use bsfd_math as math;

/// Spot quotes and ticker lists.
pub use bsfd_quotes as quotes;

/// Option arguments, payoffs and the pricing-engine trait.
pub use bsfd_instruments as instruments;

/// Grids, operators and time stepping.
pub use bsfd_methods as methods;

/// Finite-difference and analytic engines, and the dispatcher.
pub use bsfd_pricingengines as pricingengines;

pub use bsfd_core::{Error, Result};
pub use bsfd_instruments::{EuropeanOptionArguments, OptionPrices, OptionType, PricingEngine};
pub use bsfd_methods::{FdmScheme, FdmSettings, SolverBackend};
pub use bsfd_pricingengines::{
    price_european, AnalyticEuropeanEngine, FdEuropeanEngine, RawPricingRequest,
};
