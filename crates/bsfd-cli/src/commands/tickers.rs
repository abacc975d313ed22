//! Tickers command implementation
//!
//! Lists the symbols of a ticker CSV with their closing prices.

use std::path::PathBuf;

use bsfd_quotes::ClosingPriceSource;
use serde::Serialize;

use super::load_tickers;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::OutputFormat;

#[derive(Debug, Serialize)]
struct TickerRow<'a> {
    symbol: &'a str,
    close: Option<f64>,
}

/// Run the tickers command
pub fn run(file: Option<&PathBuf>, format: OutputFormat, config: &Config) -> Result<()> {
    let path = file.or(config.tickers.as_ref()).ok_or_else(|| {
        CliError::InvalidArgument("no ticker file: pass --file or set `tickers` in the config".into())
    })?;
    let list = load_tickers(path)?;
    let rows: Vec<_> = list
        .symbols()
        .iter()
        .map(|s| TickerRow {
            symbol: s,
            close: list.closing_price(s),
        })
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Table => {
            for row in &rows {
                match row.close {
                    Some(c) => println!("{:<10} {c:>12.2}", row.symbol),
                    None => println!("{:<10} {:>12}", row.symbol, "-"),
                }
            }
        }
    }
    Ok(())
}
