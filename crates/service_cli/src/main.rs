//! layout-bench - AOS vs SOA memory layout benchmarks
//!
//! Command line entry point for timing the same access patterns over a
//! row-oriented and a column-oriented record store.
//!
//! # Commands
//!
//! - `layout-bench sweep` - Time every pattern over the configured size sweep
//! - `layout-bench verify` - Check that both layouts compute identical results
//! - `layout-bench check` - Print the resolved configuration and sizes
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate drives `layout_patterns`
//! cases over `layout_core` stores and owns all configuration and I/O.

use std::path::Path;

use clap::{Parser, Subcommand};
use layout_core::Layout;
use layout_patterns::{Pattern, Strategy};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod oracle;
mod report;

pub use error::{CliError, Result};

use config::{BenchConfig, SweepConfig};

/// AOS vs SOA layout benchmark harness
#[derive(Parser)]
#[command(name = "layout-bench")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "layout-bench.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Time access patterns over both layouts
    Sweep {
        /// Patterns to run (comma separated, e.g. read,merge)
        #[arg(short, long, value_delimiter = ',')]
        patterns: Vec<Pattern>,

        /// Layouts to run (aos, soa)
        #[arg(short, long, value_delimiter = ',')]
        layouts: Vec<Layout>,

        /// Strategies to run (iter, raw)
        #[arg(short, long, value_delimiter = ',')]
        strategies: Vec<Strategy>,

        /// Smallest fixture size
        #[arg(long)]
        min_size: Option<usize>,

        /// Largest fixture size
        #[arg(long)]
        max_size: Option<usize>,

        /// Minimum timed batch per case, in milliseconds
        #[arg(long)]
        min_time_ms: Option<u64>,

        /// Output format (json, csv, table)
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Check that AOS and SOA produce identical results
    Verify {
        /// Largest fixture size to check
        #[arg(long, default_value = "4096")]
        max_size: usize,
    },

    /// Print the resolved configuration and size sweep
    Check,
}

/// Applies command line overrides on top of the loaded sweep.
fn apply_overrides(
    sweep: &mut SweepConfig,
    patterns: Vec<Pattern>,
    layouts: Vec<Layout>,
    strategies: Vec<Strategy>,
    min_size: Option<usize>,
    max_size: Option<usize>,
    min_time_ms: Option<u64>,
) {
    if !patterns.is_empty() {
        sweep.patterns = patterns;
    }
    if !layouts.is_empty() {
        sweep.layouts = layouts;
    }
    if !strategies.is_empty() {
        sweep.strategies = strategies;
    }
    if let Some(min) = min_size {
        sweep.min_size = min;
    }
    if let Some(max) = max_size {
        sweep.max_size = max;
    }
    if let Some(ms) = min_time_ms {
        sweep.min_time_ms = ms;
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialise tracing; reports go to stdout, logs to stderr
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let config_path = Path::new(&cli.config);
    let mut config = BenchConfig::load(config_path)?;

    match cli.command {
        Commands::Sweep {
            patterns,
            layouts,
            strategies,
            min_size,
            max_size,
            min_time_ms,
            format,
            output,
        } => {
            apply_overrides(
                &mut config.sweep,
                patterns,
                layouts,
                strategies,
                min_size,
                max_size,
                min_time_ms,
            );
            commands::sweep::run(&config.sweep, &format, output.as_deref())
        }
        Commands::Verify { max_size } => commands::verify::run(&config.sweep, max_size),
        Commands::Check => commands::check::run(&config, config_path),
    }
}
