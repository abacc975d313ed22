//! Result rendering.

use clap::ValueEnum;
use serde::Serialize;

use crate::error::Result;

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text columns.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
}

/// One line of a price report; failed methods carry their error instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceRow {
    /// Scheme selector or `analytic`.
    pub method: String,
    /// Call price, rounded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call: Option<f64>,
    /// Put price, rounded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put: Option<f64>,
    /// Why the method produced no price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Everything printed by `price` and `compare`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceReport {
    /// Ticker the spot came from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    /// Spot used.
    pub spot: f64,
    /// Strike.
    pub strike: f64,
    /// Price intervals `M`.
    pub space_steps: usize,
    /// Time steps `N`.
    pub time_steps: usize,
    /// One row per method.
    pub rows: Vec<PriceRow>,
}

impl PriceReport {
    /// Render in `format`.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Table => Ok(self.table()),
        }
    }

    fn table(&self) -> String {
        let mut out = String::new();
        if let Some(ticker) = &self.ticker {
            out.push_str(&format!("ticker  {ticker}\n"));
        }
        out.push_str(&format!(
            "spot    {:.2}   strike {:.2}   grid {}x{}\n\n",
            self.spot, self.strike, self.space_steps, self.time_steps
        ));
        out.push_str(&format!("{:<10} {:>12} {:>12}\n", "method", "call", "put"));
        for row in &self.rows {
            match (&row.error, row.call, row.put) {
                (Some(e), _, _) => out.push_str(&format!("{:<10} {e}\n", row.method)),
                (None, Some(c), Some(p)) => {
                    out.push_str(&format!("{:<10} {c:>12.2} {p:>12.2}\n", row.method))
                }
                _ => out.push_str(&format!("{:<10} {:>12} {:>12}\n", row.method, "-", "-")),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> PriceReport {
        PriceReport {
            ticker: None,
            spot: 100.0,
            strike: 100.0,
            space_steps: 100,
            time_steps: 100,
            rows: vec![
                PriceRow {
                    method: "crank".into(),
                    call: Some(10.45),
                    put: Some(5.57),
                    error: None,
                },
                PriceRow {
                    method: "explicit".into(),
                    call: None,
                    put: None,
                    error: Some("computation failed: diverged".into()),
                },
            ],
        }
    }

    #[test]
    fn table_lists_prices_and_errors() {
        let t = report().render(OutputFormat::Table).unwrap();
        assert!(t.contains("10.45"));
        assert!(t.contains("5.57"));
        assert!(t.contains("explicit   computation failed"));
        assert!(!t.contains("ticker"));
    }

    #[test]
    fn json_omits_missing_fields() {
        let j = report().render(OutputFormat::Json).unwrap();
        let v: serde_json::Value = serde_json::from_str(&j).unwrap();
        assert_eq!(v["rows"][0]["call"], 10.45);
        assert!(v["rows"][0].get("error").is_none());
        assert!(v["rows"][1].get("call").is_none());
        assert!(v.get("ticker").is_none());
    }
}
