//! Sweep configuration.
//!
//! Loaded from an optional TOML file; a missing file means defaults. Command
//! line flags override individual fields afterwards.
//!
//! ```toml
//! [sweep]
//! min_size = 1000
//! max_size = 1000000
//! multiplier = 8
//! search_min_size = 10
//! min_time_ms = 100
//! patterns = ["read", "merge"]
//! layouts = ["aos", "soa"]
//! strategies = ["iter", "raw"]
//! ```

use std::fs;
use std::path::Path;

use layout_core::Layout;
use layout_patterns::{Pattern, Strategy};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{CliError, Result};

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchConfig {
    /// Parameter sweep settings
    pub sweep: SweepConfig,
}

/// Which cases to run and how long to time each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SweepConfig {
    /// Smallest fixture size
    pub min_size: usize,
    /// Largest fixture size
    pub max_size: usize,
    /// Geometric spacing between sizes
    pub multiplier: usize,
    /// Smallest fixture size for linear search
    pub search_min_size: usize,
    /// Minimum timed batch duration per case, in milliseconds
    pub min_time_ms: u64,
    /// Upper bound on timed iterations per case
    pub max_iterations: u64,
    /// Patterns to run
    pub patterns: Vec<Pattern>,
    /// Layouts to run
    pub layouts: Vec<Layout>,
    /// Strategies to run, where the pattern supports them
    pub strategies: Vec<Strategy>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            min_size: 1_000,
            max_size: 1_000_000,
            multiplier: 8,
            search_min_size: 10,
            min_time_ms: 100,
            max_iterations: 1_000_000_000,
            patterns: Pattern::ALL.to_vec(),
            layouts: Layout::ALL.to_vec(),
            strategies: vec![Strategy::Iter, Strategy::Raw],
        }
    }
}

impl BenchConfig {
    /// Loads the configuration from `path`, or defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Io` if the file exists but cannot be read, and
    /// `CliError::ConfigParse` if it is not valid.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path)?;
        let config = Self::from_toml(&text).map_err(|source| CliError::ConfigParse {
            path: path.display().to_string(),
            source,
        })?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

impl SweepConfig {
    /// Checks that the sweep describes at least one runnable case.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Config` describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.min_size == 0 || self.search_min_size == 0 {
            return Err(CliError::Config("sizes must be positive".to_string()));
        }
        if self.max_size < self.min_size || self.max_size < self.search_min_size {
            return Err(CliError::Config(format!(
                "max_size {} is below min_size {} or search_min_size {}",
                self.max_size, self.min_size, self.search_min_size
            )));
        }
        if self.max_size > i32::MAX as usize {
            return Err(CliError::Config(format!(
                "max_size {} exceeds the i32 key range",
                self.max_size
            )));
        }
        if self.multiplier < 2 {
            return Err(CliError::Config(format!(
                "multiplier must be at least 2, got {}",
                self.multiplier
            )));
        }
        if self.max_iterations == 0 {
            return Err(CliError::Config("max_iterations must be positive".to_string()));
        }
        if self.patterns.is_empty() || self.layouts.is_empty() || self.strategies.is_empty() {
            return Err(CliError::Config(
                "patterns, layouts and strategies must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Fixture sizes swept for `pattern`.
    pub fn sizes_for(&self, pattern: Pattern) -> Vec<usize> {
        let min = match pattern {
            Pattern::LinearSearch => self.search_min_size,
            _ => self.min_size,
        };
        geometric_sizes(min, self.max_size, self.multiplier)
    }

    /// Strategies to run for `pattern`: the configured ones it supports.
    pub fn strategies_for(&self, pattern: Pattern) -> Vec<Strategy> {
        pattern
            .strategies()
            .iter()
            .copied()
            .filter(|s| self.strategies.contains(s))
            .collect()
    }
}

/// Geometrically spaced sizes in `[min, max]`.
///
/// `min`, then every power of `multiplier` strictly between `min` and `max`,
/// then `max`.
///
/// # Examples
///
/// `geometric_sizes(1000, 1_000_000, 8)` is
/// `[1000, 4096, 32768, 262144, 1000000]`.
pub fn geometric_sizes(min: usize, max: usize, multiplier: usize) -> Vec<usize> {
    let mut sizes = vec![min];
    if max <= min || multiplier < 2 {
        return sizes;
    }

    let mut power: usize = 1;
    while power < max {
        if power > min {
            sizes.push(power);
        }
        power = match power.checked_mul(multiplier) {
            Some(next) => next,
            None => break,
        };
    }

    if sizes.last() != Some(&max) {
        sizes.push(max);
    }
    sizes
}
