//! CLI error type.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a `bsfd` command.
#[derive(Debug, Error)]
pub enum CliError {
    /// The pricing library rejected the request.
    #[error(transparent)]
    Pricing(#[from] bsfd_core::Error),

    /// A named input file does not exist.
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    /// Reading a file failed.
    #[error("cannot read {path}: {source}")]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// A TOML config or request file is malformed.
    #[error("invalid TOML in {path}: {message}")]
    Toml {
        /// File being parsed.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// JSON rendering failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Command-line arguments that clap cannot check on its own.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias for CLI commands.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Read a whole file, mapping a missing file to [`CliError::FileNotFound`].
pub fn read_file(path: &std::path::Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            CliError::FileNotFound(path.to_path_buf())
        } else {
            CliError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}
