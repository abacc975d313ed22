//! `bsfd.toml` configuration.
//!
//! Every key is optional; command-line flags take precedence.
//!
//! ```toml
//! scheme = "crank"
//! log_level = "info"
//! tickers = "data/stock_list.csv"
//!
//! [grid]
//! space_steps = 200
//! time_steps = 400
//! ```

use crate::error::{read_file, CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default grid resolution.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    /// Price intervals `M`.
    pub space_steps: usize,
    /// Time steps `N`.
    pub time_steps: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            space_steps: 100,
            time_steps: 100,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Grid defaults.
    pub grid: GridConfig,
    /// Default scheme selector.
    pub scheme: String,
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Ticker CSV used by `--ticker` when `--tickers` is not given.
    pub tickers: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            scheme: "crank".to_string(),
            log_level: "warn".to_string(),
            tickers: None,
        }
    }
}

impl Config {
    /// Parse configuration text; `path` is only used in messages.
    pub fn from_toml(text: &str, path: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|e| CliError::Toml {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load `path`. A missing file yields the defaults unless the user
    /// named it explicitly.
    pub fn load(path: &Path, explicit: bool) -> Result<Self> {
        match read_file(path) {
            Ok(text) => Self::from_toml(&text, path),
            Err(CliError::FileNotFound(_)) if !explicit => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let c = Config::from_toml("", Path::new("bsfd.toml")).unwrap();
        assert_eq!(c, Config::default());
        assert_eq!(c.grid.space_steps, 100);
        assert_eq!(c.scheme, "crank");
    }

    #[test]
    fn partial_grid_keeps_other_defaults() {
        let c = Config::from_toml(
            "scheme = \"implicit\"\n[grid]\ntime_steps = 400\n",
            Path::new("bsfd.toml"),
        )
        .unwrap();
        assert_eq!(c.scheme, "implicit");
        assert_eq!(c.grid.space_steps, 100);
        assert_eq!(c.grid.time_steps, 400);
    }

    #[test]
    fn unknown_key_is_an_error() {
        let e = Config::from_toml("sheme = \"crank\"", Path::new("bsfd.toml")).unwrap_err();
        assert!(matches!(e, CliError::Toml { .. }));
    }

    #[test]
    fn missing_default_file_is_fine() {
        let path = Path::new("definitely/not/here/bsfd.toml");
        assert_eq!(Config::load(path, false).unwrap(), Config::default());
        assert!(matches!(
            Config::load(path, true),
            Err(CliError::FileNotFound(_))
        ));
    }
}
