//! String-input pricing front door.
//!
//! Form and config inputs arrive as text in market units: rates, yields and
//! volatilities in percent and the maturity in calendar days. The dispatcher
//! parses and normalises them, selects the scheme by name and returns prices
//! rounded to cents.

use crate::fd_european_engine::FdEuropeanEngine;
use bsfd_core::{
    errors::{Field, Result},
    utilities::{parse_count, parse_real},
    Real,
};
use bsfd_instruments::{EuropeanOptionArguments, OptionPrices, PricingEngine};
use bsfd_math::round_price;
use bsfd_methods::{FdmScheme, FdmSettings, PriceGrid, SolverBackend};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Divisor turning a percentage into a decimal.
pub const PERCENT: Real = 100.0;

/// Days in a year for maturity conversion.
pub const DAYS_PER_YEAR: Real = 365.0;

/// A pricing request exactly as entered.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawPricingRequest {
    /// Spot price.
    pub spot: String,
    /// Strike price.
    pub strike: String,
    /// Risk-free rate, percent.
    pub interest_rate: String,
    /// Dividend yield, percent.
    pub dividend_yield: String,
    /// Time to maturity, days.
    pub maturity: String,
    /// Volatility, percent.
    pub volatility: String,
    /// Price intervals `M`.
    pub space_steps: String,
    /// Time steps `N`.
    pub time_steps: String,
    /// `explicit`, `implicit` or `crank`.
    pub scheme: String,
}

/// A parsed, normalised request ready for an engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingRequest {
    /// Inputs in decimal units and years.
    pub arguments: EuropeanOptionArguments,
    /// Grid and scheme.
    pub settings: FdmSettings,
}

impl RawPricingRequest {
    /// Parse every field and convert to decimal units.
    ///
    /// # Errors
    /// `InvalidParameter` naming the first field that does not parse,
    /// `UnsupportedScheme` for an unknown selector.
    pub fn parse(&self) -> Result<PricingRequest> {
        let arguments = EuropeanOptionArguments {
            spot: parse_real(Field::Spot, &self.spot)?,
            strike: parse_real(Field::Strike, &self.strike)?,
            risk_free_rate: parse_real(Field::InterestRate, &self.interest_rate)? / PERCENT,
            dividend_yield: parse_real(Field::DividendYield, &self.dividend_yield)? / PERCENT,
            maturity: parse_real(Field::Maturity, &self.maturity)? / DAYS_PER_YEAR,
            volatility: parse_real(Field::Volatility, &self.volatility)? / PERCENT,
        };
        let space_steps = parse_count(Field::SpaceSteps, &self.space_steps)?;
        let time_steps = parse_count(Field::TimeSteps, &self.time_steps)?;
        let scheme: FdmScheme = self.scheme.parse()?;

        Ok(PricingRequest {
            arguments,
            settings: FdmSettings::new(space_steps, time_steps, scheme),
        })
    }
}

impl PricingRequest {
    /// Check argument and grid domains, and that the spot lies on the
    /// grid, before any time step runs.
    ///
    /// # Errors
    /// `InvalidParameter` for out-of-domain inputs, `SpotOutOfRange` unless
    /// `0 ≤ spot < 2·strike`.
    pub fn validate(&self) -> Result<()> {
        self.arguments.validate()?;
        self.settings.validate()?;
        PriceGrid::new(self.arguments.strike, self.settings.space_steps)?
            .locate(self.arguments.spot)?;
        Ok(())
    }

    /// Replace the solver back-end.
    pub fn with_backend(mut self, backend: SolverBackend) -> Self {
        self.settings = self.settings.with_backend(backend);
        self
    }

    /// Price with the finite-difference engine, unrounded.
    pub fn price(&self) -> Result<OptionPrices> {
        self.validate()?;
        FdEuropeanEngine::new(self.settings).calculate(&self.arguments)
    }
}

/// Price a European call/put pair from raw inputs, rounded to two decimals.
///
/// # Errors
/// `InvalidParameter`, `UnsupportedScheme`, `SpotOutOfRange` or
/// `Computation`; a failed request never yields a zero price.
pub fn price_european(request: &RawPricingRequest) -> Result<OptionPrices> {
    let parsed = request.parse()?;
    debug!(
        scheme = %parsed.settings.scheme,
        space_steps = parsed.settings.space_steps,
        time_steps = parsed.settings.time_steps,
        "dispatching pricing request"
    );
    Ok(parsed.price()?.map(round_price))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use bsfd_core::Error;

    fn request(scheme: &str) -> RawPricingRequest {
        RawPricingRequest {
            spot: "100".into(),
            strike: "100".into(),
            interest_rate: "5".into(),
            dividend_yield: "0".into(),
            maturity: "365".into(),
            volatility: "20".into(),
            space_steps: "100".into(),
            time_steps: "100".into(),
            scheme: scheme.into(),
        }
    }

    #[test]
    fn units_are_normalised() {
        let parsed = request("crank").parse().unwrap();
        assert_abs_diff_eq!(parsed.arguments.risk_free_rate, 0.05, epsilon = 1e-15);
        assert_abs_diff_eq!(parsed.arguments.volatility, 0.20, epsilon = 1e-15);
        assert_abs_diff_eq!(parsed.arguments.maturity, 1.0, epsilon = 1e-15);
        assert_eq!(parsed.settings.scheme, FdmScheme::CrankNicolson);
        assert_eq!(parsed.settings.backend, SolverBackend::Tridiagonal);
    }

    #[test]
    fn malformed_number_names_the_field() {
        let mut r = request("crank");
        r.volatility = "twenty".into();
        let e = price_european(&r).unwrap_err();
        assert_eq!(e.field(), Some(Field::Volatility));
    }

    #[test]
    fn unknown_scheme() {
        assert_eq!(
            price_european(&request("unknown")),
            Err(Error::UnsupportedScheme("unknown".into()))
        );
        assert!(matches!(
            price_european(&request("Crank")),
            Err(Error::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn zero_space_steps() {
        let mut r = request("implicit");
        r.space_steps = "0".into();
        let e = price_european(&r).unwrap_err();
        assert!(matches!(
            e,
            Error::InvalidParameter {
                field: Field::SpaceSteps,
                ..
            }
        ));
    }

    #[test]
    fn oversized_step_counts_are_rejected() {
        let mut r = request("implicit");
        r.space_steps = "18446744073709551615".into();
        assert_eq!(price_european(&r).unwrap_err().field(), Some(Field::SpaceSteps));
        r.space_steps = "1e12".into();
        assert_eq!(price_european(&r).unwrap_err().field(), Some(Field::SpaceSteps));

        let mut r = request("crank");
        r.time_steps = "1e12".into();
        assert_eq!(price_european(&r).unwrap_err().field(), Some(Field::TimeSteps));
    }

    #[test]
    fn spot_off_the_grid_fails_validation() {
        let mut r = request("crank");
        r.spot = "200".into();
        let parsed = r.parse().unwrap();
        assert!(matches!(
            parsed.validate(),
            Err(Error::SpotOutOfRange { spot, s_max }) if spot == 200.0 && s_max == 200.0
        ));
        r.spot = "199.99".into();
        assert!(r.parse().unwrap().validate().is_ok());
    }

    #[test]
    fn crank_prices_are_rounded() {
        let p = price_european(&request("crank")).unwrap();
        assert_abs_diff_eq!(p.call, 10.45, epsilon = 0.05);
        assert_abs_diff_eq!(p.put, 5.57, epsilon = 0.05);
        assert_eq!(round_price(p.call), p.call);
        assert_eq!(round_price(p.put), p.put);
    }
}
