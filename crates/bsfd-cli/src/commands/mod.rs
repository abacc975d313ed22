//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. The pricing commands
//! share [`PriceArgs`] and the request assembly below: request file first,
//! then flags, then configuration defaults for whatever is still empty.

pub mod compare;
pub mod price;
pub mod tickers;

use std::path::{Path, PathBuf};

use bsfd_core::{utilities::parse_real, Field};
use bsfd_methods::SolverBackend;
use bsfd_pricingengines::RawPricingRequest;
use bsfd_quotes::{resolve_spot, ClosingPriceQuote, ClosingPriceSource, SimpleQuote, TickerList};
use clap::{Args, ValueEnum};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{read_file, CliError, Result};
use crate::output::OutputFormat;

/// Linear-algebra back-end selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    /// Banded Thomas solver.
    #[default]
    Tridiagonal,
    /// Dense LU factorisation.
    DenseLu,
}

impl From<BackendArg> for SolverBackend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Tridiagonal => SolverBackend::Tridiagonal,
            BackendArg::DenseLu => SolverBackend::DenseLu,
        }
    }
}

/// Pricing inputs. Rates, yield and volatility are in percent, the
/// maturity in days.
#[derive(Debug, Clone, Default, Args)]
pub struct PriceArgs {
    /// TOML file holding any of the pricing fields
    #[arg(short, long)]
    pub request: Option<PathBuf>,

    /// Spot price; with --ticker, used when no closing price is found
    #[arg(long)]
    pub spot: Option<String>,

    /// Ticker whose closing price is the spot
    #[arg(short, long)]
    pub ticker: Option<String>,

    /// Ticker CSV with a Symbol column and optional Close column
    #[arg(long)]
    pub tickers: Option<PathBuf>,

    /// Strike price
    #[arg(short = 'k', long)]
    pub strike: Option<String>,

    /// Risk-free rate in percent
    #[arg(long = "rate")]
    pub interest_rate: Option<String>,

    /// Dividend yield in percent [default: 0]
    #[arg(long = "dividend")]
    pub dividend_yield: Option<String>,

    /// Time to maturity in days
    #[arg(long = "days")]
    pub maturity: Option<String>,

    /// Volatility in percent
    #[arg(long = "vol")]
    pub volatility: Option<String>,

    /// Price intervals M
    #[arg(short = 'm', long)]
    pub space_steps: Option<String>,

    /// Time steps N
    #[arg(short = 'n', long)]
    pub time_steps: Option<String>,

    /// Scheme: explicit, implicit or crank
    #[arg(short, long)]
    pub scheme: Option<String>,

    /// Linear-algebra back-end
    #[arg(long, value_enum, default_value_t)]
    pub backend: BackendArg,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

/// Assemble the raw request for `args`, resolving the spot from the ticker
/// list when `--ticker` is given.
pub fn build_request(args: &PriceArgs, config: &Config) -> Result<RawPricingRequest> {
    let mut raw = match &args.request {
        Some(path) => request_from_toml(&read_file(path)?, path)?,
        None => RawPricingRequest::default(),
    };

    let overrides = [
        (&mut raw.spot, &args.spot),
        (&mut raw.strike, &args.strike),
        (&mut raw.interest_rate, &args.interest_rate),
        (&mut raw.dividend_yield, &args.dividend_yield),
        (&mut raw.maturity, &args.maturity),
        (&mut raw.volatility, &args.volatility),
        (&mut raw.space_steps, &args.space_steps),
        (&mut raw.time_steps, &args.time_steps),
        (&mut raw.scheme, &args.scheme),
    ];
    for (slot, flag) in overrides {
        if let Some(value) = flag {
            *slot = value.clone();
        }
    }

    fill_if_empty(&mut raw.dividend_yield, "0".to_string());
    fill_if_empty(&mut raw.space_steps, config.grid.space_steps.to_string());
    fill_if_empty(&mut raw.time_steps, config.grid.time_steps.to_string());
    fill_if_empty(&mut raw.scheme, config.scheme.clone());

    if let Some(ticker) = &args.ticker {
        let path = args.tickers.as_ref().or(config.tickers.as_ref());
        let list = path.map(|p| load_tickers(p)).transpose()?;
        let source = list.as_ref().map(|l| l as &dyn ClosingPriceSource);
        raw.spot = ticker_spot(ticker, source, &raw.spot)?.to_string();
    }

    debug!(?raw, "assembled pricing request");
    Ok(raw)
}

/// Spot for `ticker`: its closing price from `source`, else `manual`.
pub fn ticker_spot(
    ticker: &str,
    source: Option<&dyn ClosingPriceSource>,
    manual: &str,
) -> Result<f64> {
    let manual = if manual.trim().is_empty() {
        None
    } else {
        Some(parse_real(Field::Spot, manual)?)
    };
    let spot = match source {
        Some(source) => resolve_spot(ticker, &ClosingPriceQuote::new(source, ticker), manual)?,
        None => {
            warn!(ticker, "no ticker list configured");
            resolve_spot(ticker, &SimpleQuote::empty(), manual)?
        }
    };
    Ok(spot)
}

/// Load a ticker CSV.
pub fn load_tickers(path: &Path) -> Result<TickerList> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.to_path_buf()));
    }
    Ok(TickerList::from_path(path)?)
}

/// Parse a TOML request. Values may be strings or numbers.
pub fn request_from_toml(text: &str, path: &Path) -> Result<RawPricingRequest> {
    let table: toml::Table = text.parse().map_err(|e: toml::de::Error| CliError::Toml {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut raw = RawPricingRequest::default();
    for (key, value) in &table {
        let slot = match key.as_str() {
            "spot" => &mut raw.spot,
            "strike" => &mut raw.strike,
            "interest_rate" => &mut raw.interest_rate,
            "dividend_yield" => &mut raw.dividend_yield,
            "maturity" => &mut raw.maturity,
            "volatility" => &mut raw.volatility,
            "space_steps" => &mut raw.space_steps,
            "time_steps" => &mut raw.time_steps,
            "scheme" => &mut raw.scheme,
            other => {
                return Err(CliError::InvalidArgument(format!(
                    "unknown request field `{other}` in {}",
                    path.display()
                )))
            }
        };
        *slot = match value {
            toml::Value::String(s) => s.clone(),
            toml::Value::Integer(i) => i.to_string(),
            toml::Value::Float(f) => f.to_string(),
            other => {
                return Err(CliError::InvalidArgument(format!(
                    "request field `{key}` must be a string or number, got {}",
                    other.type_str()
                )))
            }
        };
    }
    Ok(raw)
}

fn fill_if_empty(slot: &mut String, default: String) {
    if slot.trim().is_empty() {
        *slot = default;
    }
}
