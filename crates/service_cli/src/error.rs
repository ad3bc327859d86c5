//! CLI error types.

use layout_patterns::PatternError;
use thiserror::Error;

/// Errors surfaced by `layout-bench` commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading the config file or writing a report failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for `BenchConfig`
    #[error("Failed to parse config {path}: {source}")]
    ConfigParse {
        /// Path of the offending file
        path: String,
        /// Underlying parse error
        #[source]
        source: toml::de::Error,
    },

    /// A command line argument is not recognised
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The configuration parsed but is unusable
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A benchmark case could not be built
    #[error(transparent)]
    Pattern(#[from] PatternError),

    /// JSON report serialisation failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV report serialisation failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Printing the resolved configuration failed
    #[error("TOML error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// AOS and SOA results disagree
    #[error("Layout verification failed: {0} mismatching case(s)")]
    Verification(usize),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
