//! Verify command implementation
//!
//! Checks that every layout and strategy computes the same result as the AOS
//! iterator case before any timing is trusted.

use layout_patterns::equivalence::check_pattern;
use tracing::{info, warn};

use crate::config::SweepConfig;
use crate::{CliError, Result};

/// Run the verify command
///
/// Sizes come from the sweep, capped at `max_size`.
pub fn run(sweep: &SweepConfig, max_size: usize) -> Result<()> {
    let sweep = SweepConfig {
        max_size: max_size.max(sweep.min_size).max(sweep.search_min_size),
        ..sweep.clone()
    };
    sweep.validate()?;

    info!("Verifying layout equivalence up to {} records...", sweep.max_size);

    let mut checked = 0usize;
    let mut failures = 0usize;
    for &pattern in &sweep.patterns {
        for size in sweep.sizes_for(pattern) {
            let mismatches = check_pattern(pattern, size)?;
            checked += 1;
            for m in &mismatches {
                warn!(
                    "{} n={}: {}/{} disagrees with aos/iter",
                    m.pattern, m.size, m.layout, m.strategy
                );
            }
            failures += mismatches.len();
        }
    }

    if failures > 0 {
        return Err(CliError::Verification(failures));
    }

    info!("All layouts agree ({} pattern/size checks)", checked);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use layout_patterns::Pattern;

    #[test]
    fn test_verify_all_patterns_small() {
        let sweep = SweepConfig {
            min_size: 16,
            search_min_size: 4,
            ..SweepConfig::default()
        };
        assert!(run(&sweep, 256).is_ok());
    }

    #[test]
    fn test_verify_raises_max_to_min() {
        let sweep = SweepConfig {
            min_size: 100,
            patterns: vec![Pattern::Merge],
            ..SweepConfig::default()
        };
        assert!(run(&sweep, 1).is_ok());
    }
}
