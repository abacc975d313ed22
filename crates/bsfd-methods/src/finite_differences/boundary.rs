//! Dirichlet boundary values at the ends of the price grid.
//!
//! At `S = 0` a call is worthless and a put is worth the discounted strike;
//! at `S = Smax` the call is worth `Smax` less the discounted strike and the
//! put is worthless.

use bsfd_core::{Rate, Real, Time};
use bsfd_instruments::OptionType;
use bsfd_math::Array;

/// Closed-form values imposed on nodes `0` and `M` at every time layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirichletBoundaries {
    s_max: Real,
    strike: Real,
    risk_free_rate: Rate,
}

impl DirichletBoundaries {
    /// Boundaries for a grid ending at `s_max`.
    pub fn new(s_max: Real, strike: Real, risk_free_rate: Rate) -> Self {
        Self {
            s_max,
            strike,
            risk_free_rate,
        }
    }

    /// `(V_0, V_M)` for `option_type` with `remaining` years to maturity.
    pub fn values(&self, option_type: OptionType, remaining: Time) -> (Real, Real) {
        let discounted_strike = self.strike * (-self.risk_free_rate * remaining).exp();
        match option_type {
            OptionType::Call => (0.0, self.s_max - discounted_strike),
            OptionType::Put => (discounted_strike, 0.0),
        }
    }

    /// Overwrite the first and last entries of `values`.
    pub fn apply(&self, option_type: OptionType, values: &mut Array, remaining: Time) {
        let (low, high) = self.values(option_type, remaining);
        let last = values.size() - 1;
        values[0] = low;
        values[last] = high;
    }
}
