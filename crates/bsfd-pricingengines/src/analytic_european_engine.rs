//! Analytic European option engine (Black-Scholes-Merton).
//!
//! Prices European vanilla options using the closed-form Black-Scholes-Merton
//! formula. Computes the price and first/second-order Greeks. Used to
//! cross-check the finite-difference engine.

use bsfd_core::{errors::Result, Real};
use bsfd_instruments::{EuropeanOptionArguments, OptionPrices, OptionType, PricingEngine};
use bsfd_math::{normal_cdf, normal_pdf};
use serde::Serialize;

/// Price and Greeks of one option.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct BlackScholesResults {
    /// Present value.
    pub price: Real,
    /// ∂V/∂S.
    pub delta: Real,
    /// ∂²V/∂S².
    pub gamma: Real,
    /// ∂V/∂σ per 1.0 absolute vol.
    pub vega: Real,
    /// ∂V/∂t per year.
    pub theta: Real,
    /// ∂V/∂r per 1.0 rate shift.
    pub rho: Real,
}

/// Analytic pricing engine for European vanilla options.
///
/// Implements the Black-Scholes-Merton closed-form solution:
///
/// $$C = S e^{-qT} N(d_1) - K e^{-rT} N(d_2)$$
/// $$P = K e^{-rT} N(-d_2) - S e^{-qT} N(-d_1)$$
///
/// where $d_{1,2} = \frac{\ln(S/K) + (r - q \pm \sigma^2/2)T}{\sigma\sqrt{T}}$
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticEuropeanEngine;

impl AnalyticEuropeanEngine {
    /// Create the engine.
    pub fn new() -> Self {
        Self
    }

    /// Price and Greeks for one option type.
    pub fn results(
        &self,
        args: &EuropeanOptionArguments,
        option_type: OptionType,
    ) -> Result<BlackScholesResults> {
        args.validate()?;
        Ok(black_scholes_merton(
            option_type,
            args.spot,
            args.strike,
            args.risk_free_rate,
            args.dividend_yield,
            args.volatility,
            args.maturity,
        ))
    }
}

/// Compute Black-Scholes price and Greeks for a European option.
pub fn black_scholes_merton(
    option_type: OptionType,
    spot: Real,
    strike: Real,
    risk_free_rate: Real,
    dividend_yield: Real,
    volatility: Real,
    time_to_expiry: Real,
) -> BlackScholesResults {
    let phi = option_type.sign();
    let t = time_to_expiry;

    if t <= 0.0 {
        return BlackScholesResults {
            price: (phi * (spot - strike)).max(0.0),
            ..BlackScholesResults::default()
        };
    }

    let r = risk_free_rate;
    let q = dividend_yield;
    let sigma = volatility;
    let sqrt_t = t.sqrt();
    let std_dev = sigma * sqrt_t;
    let df_r = (-r * t).exp();
    let df_q = (-q * t).exp();
    let fwd = spot * ((r - q) * t).exp();

    let (d1, d2) = if std_dev > 1e-15 {
        let d1 = ((spot / strike).ln() + (r - q + 0.5 * sigma * sigma) * t) / std_dev;
        (d1, d1 - std_dev)
    } else {
        let big = if fwd > strike { 1e15 } else { -1e15 };
        (big, big)
    };

    let nd1 = normal_cdf(phi * d1);
    let nd2 = normal_cdf(phi * d2);
    let npd1 = normal_pdf(d1);

    let gamma = if std_dev > 1e-15 {
        df_q * npd1 / (spot * std_dev)
    } else {
        0.0
    };
    let theta = {
        let decay = if sqrt_t > 0.0 {
            -(spot * df_q * npd1 * sigma) / (2.0 * sqrt_t)
        } else {
            0.0
        };
        decay - phi * r * strike * df_r * nd2 + phi * q * spot * df_q * nd1
    };

    BlackScholesResults {
        price: phi * (spot * df_q * nd1 - strike * df_r * nd2),
        delta: phi * df_q * nd1,
        gamma,
        vega: spot * df_q * npd1 * sqrt_t,
        theta,
        rho: phi * strike * t * df_r * nd2,
    }
}

impl PricingEngine for AnalyticEuropeanEngine {
    fn calculate(&self, args: &EuropeanOptionArguments) -> Result<OptionPrices> {
        Ok(OptionPrices::new(
            self.results(args, OptionType::Call)?.price,
            self.results(args, OptionType::Put)?.price,
        ))
    }

    fn name(&self) -> String {
        "analytic".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn bs_call_price() {
        // S=100, K=100, r=5%, q=0%, σ=20%, T=1
        let res = black_scholes_merton(OptionType::Call, 100.0, 100.0, 0.05, 0.0, 0.20, 1.0);
        assert_abs_diff_eq!(res.price, 10.4506, epsilon = 1e-3);
        assert!(res.delta > 0.5 && res.delta < 0.8, "delta = {}", res.delta);
        assert!(res.gamma > 0.0);
        assert!(res.vega > 0.0);
        assert!(res.rho > 0.0);
    }

    #[test]
    fn bs_put_call_parity_with_dividends() {
        let (s, k, r, q, sigma, t) = (100.0, 105.0, 0.08, 0.03, 0.25, 0.5);
        let call = black_scholes_merton(OptionType::Call, s, k, r, q, sigma, t).price;
        let put = black_scholes_merton(OptionType::Put, s, k, r, q, sigma, t).price;
        assert_abs_diff_eq!(call, 5.8993, epsilon = 1e-3);
        assert_abs_diff_eq!(put, 8.2710, epsilon = 1e-3);
        let parity = call - s * (-q * t).exp() + k * (-r * t).exp();
        assert_abs_diff_eq!(put, parity, epsilon = 1e-10);
    }

    #[test]
    fn bs_deep_otm_put() {
        let res = black_scholes_merton(OptionType::Put, 200.0, 100.0, 0.05, 0.0, 0.20, 1.0);
        assert!(res.price < 1.0, "price = {}", res.price);
        assert!(res.delta > -0.05, "delta = {}", res.delta);
    }

    #[test]
    fn bs_zero_vol_is_discounted_forward_payoff() {
        let call = black_scholes_merton(OptionType::Call, 100.0, 95.0, 0.05, 0.0, 0.0, 1.0);
        let put = black_scholes_merton(OptionType::Put, 100.0, 95.0, 0.05, 0.0, 0.0, 1.0);
        assert_abs_diff_eq!(call.price, 100.0 - 95.0 * (-0.05_f64).exp(), epsilon = 1e-10);
        assert_abs_diff_eq!(put.price, 0.0, epsilon = 1e-10);
        assert_eq!(call.gamma, 0.0);
    }

    #[test]
    fn engine_prices_both_types() {
        let args = EuropeanOptionArguments {
            spot: 100.0,
            strike: 100.0,
            risk_free_rate: 0.05,
            dividend_yield: 0.0,
            volatility: 0.20,
            maturity: 1.0,
        };
        let prices = AnalyticEuropeanEngine::new().calculate(&args).unwrap();
        assert_abs_diff_eq!(prices.call, 10.4506, epsilon = 1e-3);
        assert_abs_diff_eq!(prices.put, 5.5735, epsilon = 1e-3);
    }

    #[test]
    fn engine_rejects_bad_arguments() {
        let args = EuropeanOptionArguments {
            spot: 100.0,
            strike: 0.0,
            risk_free_rate: 0.05,
            dividend_yield: 0.0,
            volatility: 0.20,
            maturity: 1.0,
        };
        assert!(AnalyticEuropeanEngine::new().calculate(&args).is_err());
    }
}
