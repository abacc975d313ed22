//! The pricing-engine seam.

use crate::option::{EuropeanOptionArguments, OptionPrices};
use bsfd_core::errors::Result;

/// A method that prices a European call/put pair.
///
/// Implemented by the finite-difference engine and by the closed-form
/// engine used to cross-check it.
pub trait PricingEngine: std::fmt::Debug + Send + Sync {
    /// Price the option pair described by `args`.
    fn calculate(&self, args: &EuropeanOptionArguments) -> Result<OptionPrices>;

    /// Short label for reports.
    fn name(&self) -> String;
}
