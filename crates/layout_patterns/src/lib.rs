//! # layout_patterns (L2: Kernel)
//!
//! Access patterns over AOS and SOA record stores, and the benchmark cases
//! a timing oracle drives.
//!
//! This crate provides:
//! - Facade patterns generic over [`RecordStore`](layout_core::RecordStore):
//!   read, write, compute, conditional transform, search, filter, merge
//! - Raw patterns per layout using pointer arithmetic and bulk copies
//!   (`raw::aos`, `raw::soa`)
//! - `BenchCase`: fixture setup plus a single timed call per pattern
//! - Equivalence checks across layouts and strategies (`equivalence`)
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          layout_patterns (L2)           │
//! ├─────────────────────────────────────────┤
//! │  read/      - read-sum                  │
//! │  write/     - write-increment           │
//! │  compute/   - compute, transform        │
//! │  search/    - linear search             │
//! │  filter/    - filter-copy               │
//! │  merge/     - two-pointer sorted merge  │
//! │  raw/       - pointer-based variants    │
//! │  case/      - setup + timed call glue   │
//! │  equivalence/ - cross-layout checks     │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │            layout_core (L1)             │
//! │  RowStore, ColumnStore, generators      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Arithmetic
//!
//! Per-record arithmetic is wrapping `i32`; scalar sums accumulate in
//! wrapping `i64`. Write patterns run repeatedly over the same fixture, so
//! values grow without bound and must never hit overflow panics.
//!
//! ## Example
//!
//! ```
//! use layout_core::generators::generate_sequential;
//! use layout_patterns::{linear_search, read_sum};
//!
//! let (aos, soa) = generate_sequential(5);
//!
//! assert_eq!(read_sum(&aos), 45);
//! assert_eq!(read_sum(&soa), 45);
//! assert_eq!(linear_search(&soa, 2), 2);
//! assert_eq!(linear_search(&aos, 5), 5); // not found: sentinel == len
//! ```

#![warn(missing_docs)]

pub mod case;
pub mod compute;
pub mod equivalence;
pub mod error;
pub mod filter;
pub mod merge;
pub mod raw;
pub mod read;
pub mod search;
pub mod write;

// Re-export commonly used items
pub use case::{BenchCase, Observation, Outcome, Pattern, Strategy};
pub use compute::{compute_collect, compute_discard, compute_into, conditional_transform};
pub use error::PatternError;
pub use filter::filter_copy;
pub use merge::{merge_sorted, merge_sorted_elementwise};
pub use read::read_sum;
pub use search::linear_search;
pub use write::write_increment;
