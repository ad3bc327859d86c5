//! Layout equivalence checks.
//!
//! The comparison is only meaningful if both layouts compute the same thing.
//! For a pattern and a size, every supported (layout, strategy) case is run
//! once on a fresh fixture and its full [`Outcome`] compared with the AOS
//! iterator case.

use layout_core::Layout;
use serde::Serialize;

use crate::case::{BenchCase, Outcome, Pattern, Strategy};
use crate::error::PatternError;

/// Times a write case is applied before its fixture is compared.
pub const WRITE_REPETITIONS: usize = 3;

/// One case whose outcome differs from the reference case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    /// Pattern under test
    pub pattern: Pattern,
    /// Layout of the diverging case
    pub layout: Layout,
    /// Strategy of the diverging case
    pub strategy: Strategy,
    /// Fixture size
    pub size: usize,
    /// Outcome of the AOS iterator case
    pub expected: Outcome,
    /// Outcome of the diverging case
    pub actual: Outcome,
}

fn run_case(
    pattern: Pattern,
    layout: Layout,
    strategy: Strategy,
    size: usize,
) -> Result<Outcome, PatternError> {
    let mut case = BenchCase::new(pattern, layout, strategy, size)?;
    if pattern == Pattern::Write {
        for _ in 1..WRITE_REPETITIONS {
            case.run();
        }
    }
    Ok(case.outcome())
}

/// Compares every (layout, strategy) case of `pattern` at `size`.
///
/// Returns the cases that disagree with the AOS iterator case; an empty
/// vector means all layouts and strategies agree.
///
/// # Errors
///
/// Propagates fixture construction errors.
///
/// # Examples
/// ```
/// use layout_patterns::equivalence::check_pattern;
/// use layout_patterns::Pattern;
///
/// assert!(check_pattern(Pattern::Merge, 100).unwrap().is_empty());
/// ```
pub fn check_pattern(pattern: Pattern, size: usize) -> Result<Vec<Mismatch>, PatternError> {
    let expected = run_case(pattern, Layout::Aos, Strategy::Iter, size)?;
    let mut mismatches = Vec::new();

    for layout in Layout::ALL {
        for &strategy in pattern.strategies() {
            if layout == Layout::Aos && strategy == Strategy::Iter {
                continue;
            }
            let actual = run_case(pattern, layout, strategy, size)?;
            if actual != expected {
                mismatches.push(Mismatch {
                    pattern,
                    layout,
                    strategy,
                    size,
                    expected: expected.clone(),
                    actual,
                });
            }
        }
    }

    Ok(mismatches)
}
