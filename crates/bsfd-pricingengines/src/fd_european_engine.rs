//! Finite-difference European option engine.

use bsfd_core::errors::Result;
use bsfd_instruments::{EuropeanOptionArguments, OptionPrices, PricingEngine};
use bsfd_methods::{FdBlackScholesSolver, FdmSettings};
use tracing::debug;

/// Prices a European call/put pair by solving the Black-Scholes PDE on a
/// uniform grid with the configured scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FdEuropeanEngine {
    settings: FdmSettings,
}

impl FdEuropeanEngine {
    /// Create an engine with the given grid and scheme.
    pub fn new(settings: FdmSettings) -> Self {
        Self { settings }
    }

    /// Grid and scheme settings.
    pub fn settings(&self) -> &FdmSettings {
        &self.settings
    }

    /// A solver for `args`, for callers that want the full value vectors.
    pub fn solver(&self, args: &EuropeanOptionArguments) -> Result<FdBlackScholesSolver> {
        FdBlackScholesSolver::new(args, self.settings)
    }
}

impl PricingEngine for FdEuropeanEngine {
    fn calculate(&self, args: &EuropeanOptionArguments) -> Result<OptionPrices> {
        let prices = self.solver(args)?.npv()?;
        debug!(engine = %self.name(), call = prices.call, put = prices.put, "priced");
        Ok(prices)
    }

    fn name(&self) -> String {
        self.settings.scheme.name().to_string()
    }
}
