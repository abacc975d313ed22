//! Adapters for the external market-data collaborator.
//!
//! The collaborator provides a list of tradable tickers and the previous
//! closing price of each. Fetching is out of scope here; this module only
//! defines the seam ([`ClosingPriceSource`]) and a CSV-backed
//! [`TickerList`] implementation of it.

use crate::quote::Quote;
use bsfd_core::{
    errors::{Error, Result},
    Real,
};
use std::collections::HashMap;
use std::fmt;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Column holding the ticker symbol.
pub const SYMBOL_COLUMN: &str = "Symbol";

/// Columns accepted for the previous closing price, in priority order.
pub const CLOSE_COLUMNS: [&str; 2] = ["Previous Close", "Close"];

/// Anything able to report the previous closing price of a ticker.
pub trait ClosingPriceSource: fmt::Debug + Send + Sync {
    /// Previous close of `ticker`, or `None` if it cannot be resolved.
    fn closing_price(&self, ticker: &str) -> Option<Real>;
}

/// Exposes one ticker of a [`ClosingPriceSource`] as a [`Quote`].
#[derive(Debug)]
pub struct ClosingPriceQuote<'a, S: ClosingPriceSource + ?Sized> {
    source: &'a S,
    ticker: String,
}

impl<'a, S: ClosingPriceSource + ?Sized> ClosingPriceQuote<'a, S> {
    /// Quote `ticker` from `source`.
    pub fn new(source: &'a S, ticker: impl Into<String>) -> Self {
        Self {
            source,
            ticker: ticker.into(),
        }
    }

    /// The quoted ticker.
    pub fn ticker(&self) -> &str {
        &self.ticker
    }
}

impl<S: ClosingPriceSource + ?Sized> Quote for ClosingPriceQuote<'_, S> {
    fn value(&self) -> Option<Real> {
        self.source.closing_price(&self.ticker)
    }
}

/// Ticker symbols in file order, with optional closing prices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickerList {
    symbols: Vec<String>,
    closes: HashMap<String, Real>,
}

impl TickerList {
    /// Read a CSV with a `Symbol` column and an optional close column.
    ///
    /// Blank symbols are skipped; unparsable or empty closes leave the
    /// ticker without a price.
    ///
    /// # Errors
    /// [`Error::Precondition`] if the CSV is malformed or has no `Symbol`
    /// column.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let headers = rdr
            .headers()
            .map_err(|e| Error::Precondition(format!("ticker list: {e}")))?
            .clone();
        let symbol_idx = headers
            .iter()
            .position(|h| h == SYMBOL_COLUMN)
            .ok_or_else(|| {
                Error::Precondition(format!("ticker list has no `{SYMBOL_COLUMN}` column"))
            })?;
        let close_idx = CLOSE_COLUMNS
            .iter()
            .find_map(|c| headers.iter().position(|h| h == *c));

        let mut list = TickerList::default();
        for record in rdr.records() {
            let record = record.map_err(|e| Error::Precondition(format!("ticker list: {e}")))?;
            let symbol = match record.get(symbol_idx) {
                Some(s) if !s.is_empty() => s.to_string(),
                _ => continue,
            };
            let close = close_idx
                .and_then(|i| record.get(i))
                .and_then(|s| s.parse::<Real>().ok())
                .filter(|v| v.is_finite() && *v > 0.0);
            list.push(symbol, close);
        }
        debug!(tickers = list.len(), "loaded ticker list");
        Ok(list)
    }

    /// Read a ticker CSV from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .map_err(|e| Error::Precondition(format!("cannot open {}: {e}", path.display())))?;
        Self::from_reader(file)
    }

    /// Append a ticker, replacing any previous close for the same symbol.
    pub fn push(&mut self, symbol: impl Into<String>, close: Option<Real>) {
        let symbol = symbol.into();
        if !self.symbols.contains(&symbol) {
            self.symbols.push(symbol.clone());
        }
        match close {
            Some(c) => {
                self.closes.insert(symbol, c);
            }
            None => {
                self.closes.remove(&symbol);
            }
        }
    }

    /// All symbols in insertion order.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// The first symbol, the default selection of a ticker picker.
    pub fn first(&self) -> Option<&str> {
        self.symbols.first().map(String::as_str)
    }

    /// Number of tickers.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// `true` if the list holds no tickers.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl ClosingPriceSource for TickerList {
    fn closing_price(&self, ticker: &str) -> Option<Real> {
        self.closes.get(ticker).copied()
    }
}
