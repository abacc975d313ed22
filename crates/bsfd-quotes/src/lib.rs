//! # bsfd-quotes
//!
//! Spot quotes for bsfd: the `Quote` trait, manual fallbacks for a missing
//! market price, and CSV ticker lists standing in for the market-data
//! collaborator.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Closing-price sources and ticker lists.
pub mod market_data;

/// `Quote` trait and concrete implementations.
pub mod quote;

pub use market_data::{ClosingPriceQuote, ClosingPriceSource, TickerList};
pub use quote::{resolve_spot, FallbackQuote, Quote, SimpleQuote};
