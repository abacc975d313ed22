//! Compare command implementation
//!
//! Prices the same request with every scheme and with the closed form.
//! A scheme that fails (typically the explicit one on a coarse time grid)
//! is reported in its row rather than aborting the comparison.

use bsfd_instruments::{OptionPrices, PricingEngine};
use bsfd_math::round_price;
use bsfd_methods::FdmScheme;
use bsfd_pricingengines::AnalyticEuropeanEngine;
use tracing::{info, warn};

use super::{build_request, PriceArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output::{PriceReport, PriceRow};

/// Run the compare command
pub fn run(args: &PriceArgs, config: &Config) -> Result<()> {
    let mut raw = build_request(args, config)?;
    // The scheme is varied below; any valid selector passes parsing.
    raw.scheme = FdmScheme::CrankNicolson.name().to_string();
    let base = raw.parse()?.with_backend(args.backend.into());
    base.validate()?;

    let mut rows = Vec::with_capacity(FdmScheme::ALL.len() + 1);
    for scheme in FdmScheme::ALL {
        let mut request = base;
        request.settings.scheme = scheme;
        info!(%scheme, "pricing");
        rows.push(row(scheme.name(), request.price()));
    }
    rows.push(row(
        "analytic",
        AnalyticEuropeanEngine::new().calculate(&base.arguments),
    ));

    let report = PriceReport {
        ticker: args.ticker.clone(),
        spot: base.arguments.spot,
        strike: base.arguments.strike,
        space_steps: base.settings.space_steps,
        time_steps: base.settings.time_steps,
        rows,
    };
    println!("{}", report.render(args.format)?);
    Ok(())
}

fn row(method: &str, result: bsfd_core::Result<OptionPrices>) -> PriceRow {
    match result {
        Ok(p) => {
            let p = p.map(round_price);
            PriceRow {
                method: method.to_string(),
                call: Some(p.call),
                put: Some(p.put),
                error: None,
            }
        }
        Err(e) => {
            warn!(method, error = %e, "method failed");
            PriceRow {
                method: method.to_string(),
                call: None,
                put: None,
                error: Some(e.to_string()),
            }
        }
    }
}
