//! Benchmark cases: the contract between the patterns and a timing oracle.
//!
//! A timing oracle drives a case in two steps:
//!
//! 1. **Setup** ([`BenchCase::new`]): build the fixture and any output
//!    buffers once, outside the timed region.
//! 2. **Timed call** ([`BenchCase::run`]): run the pattern once against the
//!    fixture and return an [`Observation`] the caller feeds to `black_box`.
//!
//! Write patterns mutate the fixture on every timed call, so their values
//! drift upward across iterations; all arithmetic wraps.

use std::fmt;
use std::hint::black_box;
use std::str::FromStr;
use std::sync::atomic::{compiler_fence, Ordering};

use layout_core::generators::{sequential, sorted, validate_strictly_increasing};
use layout_core::{ColumnStore, Layout, Record, RecordStore, RowStore};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::compute::{compute_collect, compute_discard, compute_into, conditional_transform};
use crate::error::PatternError;
use crate::filter::filter_copy;
use crate::merge::merge_sorted;
use crate::raw;
use crate::read::read_sum;
use crate::search::{linear_search, search_target};
use crate::write::write_increment;

/// The menu of access patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pattern {
    /// Sum `a + b + c` over all records
    Read,
    /// Add `(1, 2, 3)` to every record in place
    Write,
    /// Fold `a * b + c` into a scalar
    Compute,
    /// Write `a * b + c` into a preallocated buffer
    ComputeVector,
    /// Push `a * b + c` onto an initially empty vector
    ComputePushBack,
    /// Branchy per-record transform into a preallocated buffer
    ConditionalTransform,
    /// First index whose `a` equals `size / 2`
    LinearSearch,
    /// Copy records with `a < b` into a new store
    ///
    /// The iter form reserves `size / 2` and may regrow; the raw form
    /// reserves `size` up front, so its timings exclude reallocation.
    FilterCopy,
    /// Two-way merge of sorted inputs
    Merge,
}

impl Pattern {
    /// Every pattern, in report order.
    pub const ALL: [Pattern; 9] = [
        Pattern::Read,
        Pattern::Write,
        Pattern::Compute,
        Pattern::ComputeVector,
        Pattern::ComputePushBack,
        Pattern::ConditionalTransform,
        Pattern::LinearSearch,
        Pattern::FilterCopy,
        Pattern::Merge,
    ];

    /// Stable kebab-case name.
    pub fn name(&self) -> &'static str {
        match self {
            Pattern::Read => "read",
            Pattern::Write => "write",
            Pattern::Compute => "compute",
            Pattern::ComputeVector => "compute-vector",
            Pattern::ComputePushBack => "compute-push-back",
            Pattern::ConditionalTransform => "conditional-transform",
            Pattern::LinearSearch => "linear-search",
            Pattern::FilterCopy => "filter-copy",
            Pattern::Merge => "merge",
        }
    }

    /// Returns whether a raw implementation exists for both layouts.
    pub fn supports_raw(&self) -> bool {
        matches!(
            self,
            Pattern::Read
                | Pattern::Write
                | Pattern::ComputeVector
                | Pattern::LinearSearch
                | Pattern::FilterCopy
                | Pattern::Merge
        )
    }

    /// Strategies available for this pattern.
    pub fn strategies(&self) -> &'static [Strategy] {
        if self.supports_raw() {
            &[Strategy::Iter, Strategy::Raw]
        } else {
            &[Strategy::Iter]
        }
    }

    /// Records processed by one call on a fixture of `size`.
    ///
    /// A merge reads two inputs of `size` records each.
    pub fn items_per_call(&self, size: usize) -> usize {
        match self {
            Pattern::Merge => 2 * size,
            _ => size,
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.to_ascii_lowercase().replace('_', "-");
        Pattern::ALL
            .iter()
            .copied()
            .find(|p| p.name() == normalised)
            .ok_or_else(|| {
                let names: Vec<&str> = Pattern::ALL.iter().map(|p| p.name()).collect();
                format!("Unknown pattern: {}. Supported: {}", s, names.join(", "))
            })
    }
}

/// How a pattern walks the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Generic code over the `RecordStore` facade
    Iter,
    /// Layout-specific pointer arithmetic and bulk copies
    Raw,
}

impl Strategy {
    /// Lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Iter => "iter",
            Strategy::Raw => "raw",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "iter" => Ok(Strategy::Iter),
            "raw" => Ok(Strategy::Raw),
            other => Err(format!("Unknown strategy: {}. Supported: iter, raw", other)),
        }
    }
}

/// Value returned by a timed call.
///
/// Small and `Copy` so the oracle can hand it to `black_box` without cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    /// Scalar result of a read or compute fold
    Sum(i64),
    /// Search result (`size` when not found)
    Index(usize),
    /// Length of a freshly produced collection
    Len(usize),
    /// Length of the case-owned output buffer that was filled
    Buffer(usize),
    /// In-place mutation only; paired with a compiler fence
    Clobber,
}

/// Full result of one call, for equivalence checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Scalar result
    Sum(i64),
    /// Search result
    Index(usize),
    /// Per-record output values
    Values(Vec<i32>),
    /// Records of an output store, or of the fixture after a write
    Records(Vec<Record>),
}

enum Fixture {
    Aos(RowStore),
    Soa(ColumnStore),
    AosPair(RowStore, RowStore),
    SoaPair(ColumnStore, ColumnStore),
}

/// What one execution produced, before it is reduced to an observation.
enum Output {
    Sum(i64),
    Index(usize),
    Buffer,
    Values(Vec<i32>),
    Rows(RowStore),
    Columns(ColumnStore),
    Written,
}

/// A fixture plus the pattern to run against it.
///
/// # Examples
///
/// ```
/// use layout_core::Layout;
/// use layout_patterns::{BenchCase, Observation, Pattern, Strategy};
///
/// let mut case = BenchCase::new(Pattern::LinearSearch, Layout::Soa, Strategy::Raw, 5).unwrap();
/// assert_eq!(case.run(), Observation::Index(2));
/// ```
pub struct BenchCase {
    pattern: Pattern,
    layout: Layout,
    strategy: Strategy,
    size: usize,
    fixture: Fixture,
    buffer: Vec<i32>,
    target: i32,
}

impl BenchCase {
    /// Builds the fixture for one (pattern, layout, strategy, size) case.
    ///
    /// Merge cases use two sorted inputs with offsets 0 and 1; every other
    /// pattern uses the sequential dataset. Buffer-writing patterns get a
    /// zeroed buffer of length `size`.
    ///
    /// # Errors
    ///
    /// - `PatternError::UnsupportedStrategy` if `strategy` is `Raw` and the
    ///   pattern has no raw form
    /// - `PatternError::Layout` if a merge input is not strictly increasing
    pub fn new(
        pattern: Pattern,
        layout: Layout,
        strategy: Strategy,
        size: usize,
    ) -> Result<Self, PatternError> {
        if strategy == Strategy::Raw && !pattern.supports_raw() {
            return Err(PatternError::UnsupportedStrategy {
                pattern,
                strategy,
                layout,
            });
        }

        let fixture = match (pattern, layout) {
            (Pattern::Merge, Layout::Aos) => {
                let left: RowStore = sorted(size, 0);
                let right: RowStore = sorted(size, 1);
                validate_strictly_increasing(&left)?;
                validate_strictly_increasing(&right)?;
                Fixture::AosPair(left, right)
            }
            (Pattern::Merge, Layout::Soa) => {
                let left: ColumnStore = sorted(size, 0);
                let right: ColumnStore = sorted(size, 1);
                validate_strictly_increasing(&left)?;
                validate_strictly_increasing(&right)?;
                Fixture::SoaPair(left, right)
            }
            (_, Layout::Aos) => Fixture::Aos(sequential(size)),
            (_, Layout::Soa) => Fixture::Soa(sequential(size)),
        };

        let buffer = match pattern {
            Pattern::ComputeVector | Pattern::ConditionalTransform => vec![0; size],
            _ => Vec::new(),
        };

        debug!(
            pattern = %pattern,
            layout = %layout,
            strategy = %strategy,
            size,
            "built benchmark fixture"
        );

        Ok(Self {
            pattern,
            layout,
            strategy,
            size,
            fixture,
            buffer,
            target: search_target(size),
        })
    }

    /// The pattern this case runs.
    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    /// The fixture layout.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// The strategy this case runs.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The fixture size.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Records processed per call.
    pub fn items_per_call(&self) -> usize {
        self.pattern.items_per_call(self.size)
    }

    /// Short label such as `soa/raw`.
    pub fn label(&self) -> String {
        format!("{}/{}", self.layout, self.strategy)
    }

    /// Timed call: runs the pattern once and returns an observable result.
    ///
    /// Produced collections and the output buffer pass through `black_box`
    /// before being reduced; write patterns end with a compiler fence.
    #[inline]
    pub fn run(&mut self) -> Observation {
        match self.execute() {
            Output::Sum(sum) => Observation::Sum(sum),
            Output::Index(index) => Observation::Index(index),
            Output::Buffer => Observation::Buffer(black_box(self.buffer.as_slice()).len()),
            Output::Values(values) => Observation::Len(black_box(values).len()),
            Output::Rows(rows) => Observation::Len(black_box(rows).len()),
            Output::Columns(columns) => Observation::Len(black_box(columns).len()),
            Output::Written => {
                let _ = black_box(&mut self.fixture);
                compiler_fence(Ordering::SeqCst);
                Observation::Clobber
            }
        }
    }

    /// Runs the pattern once and captures its full result.
    ///
    /// Used for equivalence checks, not for timing.
    pub fn outcome(&mut self) -> Outcome {
        match self.execute() {
            Output::Sum(sum) => Outcome::Sum(sum),
            Output::Index(index) => Outcome::Index(index),
            Output::Buffer => Outcome::Values(self.buffer.clone()),
            Output::Values(values) => Outcome::Values(values),
            Output::Rows(rows) => Outcome::Records(rows.into_records()),
            Output::Columns(columns) => Outcome::Records(columns.to_records()),
            Output::Written => Outcome::Records(self.fixture_records()),
        }
    }

    fn fixture_records(&self) -> Vec<Record> {
        match &self.fixture {
            Fixture::Aos(store) => store.to_records(),
            Fixture::Soa(store) => store.to_records(),
            Fixture::AosPair(left, right) => {
                let mut records = left.to_records();
                records.extend(right.to_records());
                records
            }
            Fixture::SoaPair(left, right) => {
                let mut records = left.to_records();
                records.extend(right.to_records());
                records
            }
        }
    }

    #[inline]
    fn execute(&mut self) -> Output {
        let pattern = self.pattern;
        let target = self.target;
        let buffer = &mut self.buffer;
        match (&mut self.fixture, self.strategy) {
            (Fixture::Aos(store), Strategy::Iter) => run_facade(pattern, store, buffer, target),
            (Fixture::Soa(store), Strategy::Iter) => run_facade(pattern, store, buffer, target),
            (Fixture::Aos(store), Strategy::Raw) => run_raw_aos(pattern, store, buffer, target),
            (Fixture::Soa(store), Strategy::Raw) => run_raw_soa(pattern, store, buffer, target),
            (Fixture::AosPair(left, right), Strategy::Iter) => {
                Output::Rows(merge_sorted(left, right))
            }
            (Fixture::SoaPair(left, right), Strategy::Iter) => {
                Output::Columns(merge_sorted(left, right))
            }
            (Fixture::AosPair(left, right), Strategy::Raw) => {
                Output::Rows(raw::aos::merge_sorted(left, right))
            }
            (Fixture::SoaPair(left, right), Strategy::Raw) => {
                Output::Columns(raw::soa::merge_sorted(left, right))
            }
        }
    }
}

/// Wraps a produced store in the output variant for its layout.
trait IntoOutput {
    fn into_output(self) -> Output;
}

impl IntoOutput for RowStore {
    fn into_output(self) -> Output {
        Output::Rows(self)
    }
}

impl IntoOutput for ColumnStore {
    fn into_output(self) -> Output {
        Output::Columns(self)
    }
}

#[inline]
fn run_facade<S: RecordStore + IntoOutput>(
    pattern: Pattern,
    store: &mut S,
    buffer: &mut [i32],
    target: i32,
) -> Output {
    match pattern {
        Pattern::Read => Output::Sum(read_sum(store)),
        Pattern::Write => {
            write_increment(store);
            Output::Written
        }
        Pattern::Compute => Output::Sum(compute_discard(store)),
        Pattern::ComputeVector => {
            compute_into(store, buffer);
            Output::Buffer
        }
        Pattern::ComputePushBack => Output::Values(compute_collect(store)),
        Pattern::ConditionalTransform => {
            conditional_transform(store, buffer);
            Output::Buffer
        }
        Pattern::LinearSearch => Output::Index(linear_search(store, target)),
        Pattern::FilterCopy => filter_copy(store).into_output(),
        Pattern::Merge => unreachable!("merge cases use a paired fixture"),
    }
}

#[inline]
fn run_raw_aos(pattern: Pattern, store: &mut RowStore, buffer: &mut [i32], target: i32) -> Output {
    match pattern {
        Pattern::Read => Output::Sum(raw::aos::read_sum(store)),
        Pattern::Write => {
            raw::aos::write_increment(store);
            Output::Written
        }
        Pattern::ComputeVector => {
            raw::aos::compute_into(store, buffer);
            Output::Buffer
        }
        Pattern::LinearSearch => Output::Index(raw::aos::linear_search(store, target)),
        Pattern::FilterCopy => Output::Rows(raw::aos::filter_copy(store)),
        other => unreachable!("raw {} rejected at setup", other),
    }
}

#[inline]
fn run_raw_soa(
    pattern: Pattern,
    store: &mut ColumnStore,
    buffer: &mut [i32],
    target: i32,
) -> Output {
    match pattern {
        Pattern::Read => Output::Sum(raw::soa::read_sum(store)),
        Pattern::Write => {
            raw::soa::write_increment(store);
            Output::Written
        }
        Pattern::ComputeVector => {
            raw::soa::compute_into(store, buffer);
            Output::Buffer
        }
        Pattern::LinearSearch => Output::Index(raw::soa::linear_search(store, target)),
        Pattern::FilterCopy => Output::Columns(raw::soa::filter_copy(store)),
        other => unreachable!("raw {} rejected at setup", other),
    }
}
