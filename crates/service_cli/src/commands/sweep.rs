//! Sweep command implementation
//!
//! Times every selected (pattern, layout, strategy, size) case and writes a
//! report.

use std::fs::File;
use std::io::{self, BufWriter};
use std::time::Duration;

use layout_patterns::BenchCase;
use tracing::info;

use crate::config::SweepConfig;
use crate::oracle::{Measurement, TimingOracle};
use crate::report::{write_report, OutputFormat};
use crate::Result;

/// Run the sweep command
pub fn run(sweep: &SweepConfig, format: &str, output: Option<&str>) -> Result<()> {
    let format: OutputFormat = format.parse()?;
    sweep.validate()?;

    info!("Starting sweep...");
    info!("  Patterns: {}", sweep.patterns.len());
    info!(
        "  Sizes: {} to {} (x{})",
        sweep.min_size, sweep.max_size, sweep.multiplier
    );
    info!("  Minimum time per case: {} ms", sweep.min_time_ms);
    info!("  Output format: {}", format);

    let measurements = measure_all(sweep)?;

    match output {
        Some(path) => {
            let file = BufWriter::new(File::create(path)?);
            write_report(&measurements, format, file)?;
            info!("Report written to {}", path);
        }
        None => write_report(&measurements, format, io::stdout().lock())?,
    }

    info!("Sweep complete: {} cases", measurements.len());
    Ok(())
}

/// Times every case the sweep selects, in pattern, size, layout, strategy order.
pub fn measure_all(sweep: &SweepConfig) -> Result<Vec<Measurement>> {
    let oracle = TimingOracle::new(
        Duration::from_millis(sweep.min_time_ms),
        sweep.max_iterations,
    );
    let mut measurements = Vec::new();

    for &pattern in &sweep.patterns {
        let strategies = sweep.strategies_for(pattern);
        if strategies.is_empty() {
            info!("Skipping {}: no selected strategy is supported", pattern);
            continue;
        }

        for size in sweep.sizes_for(pattern) {
            for &layout in &sweep.layouts {
                for &strategy in &strategies {
                    let mut case = BenchCase::new(pattern, layout, strategy, size)?;
                    let m = oracle.measure(&mut case);
                    info!(
                        "{:<22} {:<9} n={:<8} {:>12.1} ns/iter",
                        pattern.name(),
                        case.label(),
                        size,
                        m.ns_per_iter
                    );
                    measurements.push(m);
                }
            }
        }
    }

    Ok(measurements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use layout_core::Layout;
    use layout_patterns::{Pattern, Strategy};

    fn tiny_sweep() -> SweepConfig {
        SweepConfig {
            min_size: 8,
            max_size: 64,
            multiplier: 8,
            search_min_size: 8,
            min_time_ms: 0,
            max_iterations: 2,
            ..SweepConfig::default()
        }
    }

    #[test]
    fn test_measure_all_covers_every_case() {
        let sweep = SweepConfig {
            patterns: vec![Pattern::Compute, Pattern::Merge],
            ..tiny_sweep()
        };
        let measurements = measure_all(&sweep).unwrap();

        // compute: 2 sizes x 2 layouts x iter; merge: 2 sizes x 2 layouts x 2 strategies
        assert_eq!(measurements.len(), 4 + 8);
        assert!(measurements
            .iter()
            .all(|m| m.pattern != Pattern::Compute || m.strategy == Strategy::Iter));
        assert_eq!(measurements[0].size, 8);
        assert_eq!(measurements[0].layout, Layout::Aos);
    }

    #[test]
    fn test_measure_all_skips_unsupported_strategy() {
        let sweep = SweepConfig {
            patterns: vec![Pattern::ComputePushBack],
            strategies: vec![Strategy::Raw],
            ..tiny_sweep()
        };
        assert!(measure_all(&sweep).unwrap().is_empty());
    }

    #[test]
    fn test_run_rejects_unknown_format() {
        let result = run(&tiny_sweep(), "yaml", None);
        assert!(matches!(result, Err(CliError::InvalidArgument(_))));
    }

    #[test]
    fn test_run_rejects_invalid_sweep() {
        let sweep = SweepConfig {
            multiplier: 0,
            ..tiny_sweep()
        };
        assert!(matches!(run(&sweep, "json", None), Err(CliError::Config(_))));
    }
}
