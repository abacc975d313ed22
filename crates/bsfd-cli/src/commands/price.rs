//! Price command implementation
//!
//! Prices the call/put pair with one finite-difference scheme.

use bsfd_math::round_price;
use tracing::info;

use super::{build_request, PriceArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output::{PriceReport, PriceRow};

/// Run the price command
pub fn run(args: &PriceArgs, config: &Config) -> Result<()> {
    let raw = build_request(args, config)?;
    let request = raw.parse()?.with_backend(args.backend.into());
    info!(
        scheme = %request.settings.scheme,
        backend = %request.settings.backend,
        "pricing"
    );
    let prices = request.price()?.map(round_price);

    let report = PriceReport {
        ticker: args.ticker.clone(),
        spot: request.arguments.spot,
        strike: request.arguments.strike,
        space_steps: request.settings.space_steps,
        time_steps: request.settings.time_steps,
        rows: vec![PriceRow {
            method: request.settings.scheme.name().to_string(),
            call: Some(prices.call),
            put: Some(prices.put),
            error: None,
        }],
    };
    println!("{}", report.render(args.format)?);
    Ok(())
}
