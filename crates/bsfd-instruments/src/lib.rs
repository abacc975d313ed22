//! # bsfd-instruments
//!
//! European option inputs, payoffs, price pairs and the `PricingEngine`
//! trait shared by the finite-difference and analytic engines.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod instrument;
pub mod option;
pub mod payoff;

pub use instrument::PricingEngine;
pub use option::{EuropeanOptionArguments, OptionPrices};
pub use payoff::{OptionType, Payoff, PlainVanillaPayoff};
