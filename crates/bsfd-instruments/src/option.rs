//! European option arguments and the call/put price pair.

use crate::payoff::OptionType;
use bsfd_core::{
    errors::{Error, Field, Result},
    Rate, Real, Time, Volatility,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Market and contract inputs for pricing a European option pair.
///
/// All rates are decimals (0.05 = 5 %) and the maturity is in years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EuropeanOptionArguments {
    /// Spot price of the underlying.
    pub spot: Real,
    /// Strike price.
    pub strike: Real,
    /// Continuously compounded risk-free rate.
    pub risk_free_rate: Rate,
    /// Continuous dividend yield.
    pub dividend_yield: Rate,
    /// Annualised volatility.
    pub volatility: Volatility,
    /// Time to expiry in years.
    pub maturity: Time,
}

impl EuropeanOptionArguments {
    /// Check the domain of every input.
    ///
    /// # Errors
    /// [`Error::InvalidParameter`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let checks = [
            (Field::Spot, self.spot),
            (Field::Strike, self.strike),
            (Field::InterestRate, self.risk_free_rate),
            (Field::DividendYield, self.dividend_yield),
            (Field::Volatility, self.volatility),
            (Field::Maturity, self.maturity),
        ];
        for (field, value) in checks {
            if !value.is_finite() {
                return Err(Error::invalid(field, format!("must be finite, got {value}")));
            }
        }
        if self.spot <= 0.0 {
            return Err(Error::invalid(Field::Spot, format!("must be positive, got {}", self.spot)));
        }
        if self.strike <= 0.0 {
            return Err(Error::invalid(
                Field::Strike,
                format!("must be positive, got {}", self.strike),
            ));
        }
        if self.volatility < 0.0 {
            return Err(Error::invalid(
                Field::Volatility,
                format!("must be non-negative, got {}", self.volatility),
            ));
        }
        if self.maturity <= 0.0 {
            return Err(Error::invalid(
                Field::Maturity,
                format!("must be positive, got {}", self.maturity),
            ));
        }
        Ok(())
    }

    /// `S·e^{−qT} − K·e^{−rT}`, the model-free value of call minus put.
    pub fn parity_forward(&self) -> Real {
        self.spot * (-self.dividend_yield * self.maturity).exp()
            - self.strike * (-self.risk_free_rate * self.maturity).exp()
    }
}

/// Prices of the call and the put sharing one set of arguments.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OptionPrices {
    /// Call price.
    pub call: Real,
    /// Put price.
    pub put: Real,
}

impl OptionPrices {
    /// Create a price pair.
    pub fn new(call: Real, put: Real) -> Self {
        Self { call, put }
    }

    /// Price of the given option type.
    pub fn get(&self, option_type: OptionType) -> Real {
        match option_type {
            OptionType::Call => self.call,
            OptionType::Put => self.put,
        }
    }

    /// Apply `f` to both prices.
    pub fn map<F: Fn(Real) -> Real>(self, f: F) -> Self {
        Self {
            call: f(self.call),
            put: f(self.put),
        }
    }
}

impl fmt::Display for OptionPrices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "call {:.2}, put {:.2}", self.call, self.put)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn atm() -> EuropeanOptionArguments {
        EuropeanOptionArguments {
            spot: 100.0,
            strike: 100.0,
            risk_free_rate: 0.05,
            dividend_yield: 0.0,
            volatility: 0.20,
            maturity: 1.0,
        }
    }

    #[test]
    fn valid_arguments() {
        assert!(atm().validate().is_ok());
        let zero_vol = EuropeanOptionArguments {
            volatility: 0.0,
            ..atm()
        };
        assert!(zero_vol.validate().is_ok());
    }

    #[test]
    fn invalid_arguments_name_the_field() {
        let cases = [
            (EuropeanOptionArguments { spot: 0.0, ..atm() }, Field::Spot),
            (EuropeanOptionArguments { strike: -1.0, ..atm() }, Field::Strike),
            (EuropeanOptionArguments { volatility: -0.1, ..atm() }, Field::Volatility),
            (EuropeanOptionArguments { maturity: 0.0, ..atm() }, Field::Maturity),
            (
                EuropeanOptionArguments { risk_free_rate: Real::NAN, ..atm() },
                Field::InterestRate,
            ),
        ];
        for (args, field) in cases {
            assert_eq!(args.validate().unwrap_err().field(), Some(field));
        }
    }

    #[test]
    fn parity_forward() {
        let expected = 100.0 - 100.0 * (-0.05_f64).exp();
        assert_abs_diff_eq!(atm().parity_forward(), expected, epsilon = 1e-12);
    }

    #[test]
    fn price_pair_accessors() {
        let p = OptionPrices::new(10.456, 5.571);
        assert_eq!(p.get(OptionType::Call), 10.456);
        assert_eq!(p.get(OptionType::Put), 5.571);
        assert_eq!(p.to_string(), "call 10.46, put 5.57");
        let doubled = p.map(|x| 2.0 * x);
        assert_eq!(doubled.call, 20.912);
    }
}
