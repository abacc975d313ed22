//! # bsfd-pricingengines
//!
//! Pricing engines for European call/put pairs and the string-input
//! dispatcher that fronts them.
//!
//! ## Engines
//!
//! - [`FdEuropeanEngine`]: finite-difference solution of the Black-Scholes PDE
//!   (explicit, implicit or Crank-Nicolson)
//! - [`AnalyticEuropeanEngine`]: Black-Scholes-Merton closed form, for
//!   cross-checking
//!
//! ## Dispatcher
//!
//! - [`price_european`]: raw text inputs in percent/days in, prices rounded
//!   to cents out

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analytic_european_engine;
pub mod dispatcher;
pub mod fd_european_engine;

pub use analytic_european_engine::{black_scholes_merton, AnalyticEuropeanEngine, BlackScholesResults};
pub use dispatcher::{price_european, PricingRequest, RawPricingRequest, DAYS_PER_YEAR, PERCENT};
pub use fd_european_engine::FdEuropeanEngine;
