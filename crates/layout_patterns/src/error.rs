//! Error types for benchmark case setup.

use layout_core::{Layout, LayoutError};
use thiserror::Error;

use crate::case::{Pattern, Strategy};

/// Errors raised while building a [`BenchCase`](crate::BenchCase).
///
/// Timed calls never fail; all checks happen during setup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// The pattern has no implementation for the requested strategy.
    #[error("Pattern {pattern} has no {strategy} implementation for {layout}")]
    UnsupportedStrategy {
        /// Requested pattern
        pattern: Pattern,
        /// Requested strategy
        strategy: Strategy,
        /// Requested layout
        layout: Layout,
    },

    /// A generated fixture failed validation.
    #[error("Invalid fixture: {0}")]
    Layout(#[from] LayoutError),
}
