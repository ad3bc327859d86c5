//! # layout_core: Storage Layouts for the AOS/SOA Comparison
//!
//! ## Layer 1 (Foundation) Role
//!
//! layout_core is the bottom layer of the workspace, providing:
//! - The fixed three-field record type: `Record` (`record`)
//! - Array-of-structures storage: `RowStore` (`row_store`)
//! - Structure-of-arrays storage with a virtual record facade: `ColumnStore`,
//!   `RecordRef`, `RecordMut` (`column_store`)
//! - The common contract both layouts implement: `RecordRead`, `RecordWrite`,
//!   `RecordStore`, `Layout` (`facade`)
//! - Deterministic fixture generators (`generators`)
//! - Error types: `LayoutError` (`error`)
//!
//! ## Memory Layouts
//!
//! ```text
//! RowStore (AOS):    [{a0, b0, c0}, {a1, b1, c1}, {a2, b2, c2}, ...]
//!
//! ColumnStore (SOA): a: [a0, a1, a2, ...]
//!                    b: [b0, b1, b2, ...]
//!                    c: [c0, c1, c2, ...]
//! ```
//!
//! Both layouts iterate through the same `RecordStore` contract, so an access
//! pattern written once runs unmodified against either layout and measured
//! differences reflect memory layout rather than code-path divergence.
//!
//! ## Usage Examples
//!
//! ```rust
//! use layout_core::generators::generate_sequential;
//! use layout_core::{RecordRead, RecordStore};
//!
//! let (rows, columns) = generate_sequential(5);
//!
//! let row_sum: i64 = rows.iter().map(|r| (r.a() + r.b() + r.c()) as i64).sum();
//! let col_sum: i64 = columns.iter().map(|r| (r.a() + r.b() + r.c()) as i64).sum();
//!
//! assert_eq!(row_sum, 45);
//! assert_eq!(row_sum, col_sum);
//! assert_eq!(rows.to_records(), columns.to_records());
//! ```
//!
//! ## Invariants
//!
//! All fixtures are generated in-process. Broken invariants (column length
//! mismatch, out-of-range index) are programming errors and panic; the
//! `LayoutError` type is only returned from construction and validation
//! boundaries.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod column_store;
pub mod error;
pub mod facade;
pub mod generators;
pub mod record;
pub mod row_store;

pub use column_store::{ColumnStore, RecordMut, RecordRef};
pub use error::LayoutError;
pub use facade::{Layout, RecordRead, RecordStore, RecordWrite};
pub use record::Record;
pub use row_store::RowStore;
