//! bsfd CLI - European option pricing on the command line
//!
//! # Commands
//!
//! - `bsfd price` - Price a call/put pair with one finite-difference scheme
//! - `bsfd compare` - Price with every scheme and the closed form side by side
//! - `bsfd tickers` - List the symbols of a ticker CSV
//!
//! Rates, dividend yield and volatility are given in percent and the
//! maturity in days, e.g.
//!
//! ```text
//! bsfd price --spot 100 -k 100 --rate 5 --days 365 --vol 20 -m 100 -n 100 -s crank
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use commands::PriceArgs;
use config::Config;
use output::OutputFormat;

const DEFAULT_CONFIG: &str = "bsfd.toml";

/// Black-Scholes finite-difference option pricer
#[derive(Parser)]
#[command(name = "bsfd")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path [default: bsfd.toml if present]
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a European call and put
    Price(PriceArgs),

    /// Compare explicit, implicit, Crank-Nicolson and analytic prices
    Compare(PriceArgs),

    /// List tickers and closing prices from a CSV
    Tickers {
        /// Ticker CSV (defaults to `tickers` in the config)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
}

fn init_tracing(verbose: bool, config: &Config) {
    let default_level = if verbose { "debug" } else { config.log_level.as_str() };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path, true)?,
        None => Config::load(Path::new(DEFAULT_CONFIG), false)?,
    };
    init_tracing(cli.verbose, &config);
    debug!(?config, "configuration loaded");

    match &cli.command {
        Commands::Price(args) => commands::price::run(args, &config),
        Commands::Compare(args) => commands::compare::run(args, &config),
        Commands::Tickers { file, format } => {
            commands::tickers::run(file.as_ref(), *format, &config)
        }
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
