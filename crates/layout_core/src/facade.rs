//! The uniform record contract shared by both layouts.
//!
//! Access patterns are written once against these traits:
//!
//! - [`RecordRead`]: read the three fields of a record-like value
//! - [`RecordWrite`]: write back through a record-like handle
//! - [`RecordStore`]: a collection of records in some [`Layout`]
//!
//! `RowStore` iterates plain `&Record`/`&mut Record`; `ColumnStore`
//! synthesises [`RecordRef`](crate::RecordRef) and
//! [`RecordMut`](crate::RecordMut) views over its three columns. Both
//! yield handles with the same call-site ergonomics.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// Memory layout of a store.
///
/// # Examples
/// ```
/// use layout_core::Layout;
///
/// assert_eq!("soa".parse::<Layout>().unwrap(), Layout::Soa);
/// assert_eq!(Layout::Aos.to_string(), "aos");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Array of structures: records stored contiguously
    Aos,
    /// Structure of arrays: one contiguous column per field
    Soa,
}

impl Layout {
    /// Both layouts, AOS first.
    pub const ALL: [Layout; 2] = [Layout::Aos, Layout::Soa];

    /// Lowercase name used in reports and configuration.
    pub fn name(&self) -> &'static str {
        match self {
            Layout::Aos => "aos",
            Layout::Soa => "soa",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "aos" => Ok(Layout::Aos),
            "soa" => Ok(Layout::Soa),
            other => Err(format!("Unknown layout: {}. Supported: aos, soa", other)),
        }
    }
}

/// Read access to a record-like value.
pub trait RecordRead {
    /// Field `a`.
    fn a(&self) -> i32;
    /// Field `b`.
    fn b(&self) -> i32;
    /// Field `c`.
    fn c(&self) -> i32;

    /// Snapshot of the three fields.
    #[inline]
    fn to_record(&self) -> Record {
        Record::new(self.a(), self.b(), self.c())
    }
}

/// Write access through a record-like handle.
///
/// Writes go straight to the backing storage of the store that produced the
/// handle.
pub trait RecordWrite: RecordRead {
    /// Sets field `a`.
    fn set_a(&mut self, value: i32);
    /// Sets field `b`.
    fn set_b(&mut self, value: i32);
    /// Sets field `c`.
    fn set_c(&mut self, value: i32);

    /// Adds the deltas to the three fields with wrapping arithmetic.
    ///
    /// Write patterns are applied repeatedly to the same fixture, so values
    /// grow without bound; wrapping keeps that well defined.
    #[inline]
    fn add_wrapping(&mut self, da: i32, db: i32, dc: i32) {
        let (a, b, c) = (self.a(), self.b(), self.c());
        self.set_a(a.wrapping_add(da));
        self.set_b(b.wrapping_add(db));
        self.set_c(c.wrapping_add(dc));
    }
}

impl RecordRead for Record {
    #[inline]
    fn a(&self) -> i32 {
        self.a
    }
    #[inline]
    fn b(&self) -> i32 {
        self.b
    }
    #[inline]
    fn c(&self) -> i32 {
        self.c
    }
    #[inline]
    fn to_record(&self) -> Record {
        *self
    }
}

impl RecordRead for &Record {
    #[inline]
    fn a(&self) -> i32 {
        self.a
    }
    #[inline]
    fn b(&self) -> i32 {
        self.b
    }
    #[inline]
    fn c(&self) -> i32 {
        self.c
    }
    #[inline]
    fn to_record(&self) -> Record {
        **self
    }
}

impl RecordRead for &mut Record {
    #[inline]
    fn a(&self) -> i32 {
        self.a
    }
    #[inline]
    fn b(&self) -> i32 {
        self.b
    }
    #[inline]
    fn c(&self) -> i32 {
        self.c
    }
}

impl RecordWrite for &mut Record {
    #[inline]
    fn set_a(&mut self, value: i32) {
        self.a = value;
    }
    #[inline]
    fn set_b(&mut self, value: i32) {
        self.b = value;
    }
    #[inline]
    fn set_c(&mut self, value: i32) {
        self.c = value;
    }
    #[inline]
    fn add_wrapping(&mut self, da: i32, db: i32, dc: i32) {
        self.a = self.a.wrapping_add(da);
        self.b = self.b.wrapping_add(db);
        self.c = self.c.wrapping_add(dc);
    }
}

/// A collection of records in a specific memory layout.
///
/// Both [`RowStore`](crate::RowStore) and [`ColumnStore`](crate::ColumnStore)
/// implement this trait with equivalent semantics:
///
/// - traversal order is index order
/// - producing a handle is O(1) and allocation free
/// - appends keep every field in step (no partial records)
///
/// Out-of-range indices panic.
pub trait RecordStore: Sized {
    /// Read handle yielded by [`iter`](RecordStore::iter).
    type Ref<'a>: RecordRead + Copy
    where
        Self: 'a;

    /// Write handle yielded by [`iter_mut`](RecordStore::iter_mut).
    type Mut<'a>: RecordWrite
    where
        Self: 'a;

    /// Read iterator.
    type Iter<'a>: ExactSizeIterator<Item = Self::Ref<'a>>
    where
        Self: 'a;

    /// Write iterator.
    type IterMut<'a>: ExactSizeIterator<Item = Self::Mut<'a>>
    where
        Self: 'a;

    /// Layout of this store.
    const LAYOUT: Layout;

    /// Creates a store of `len` zeroed records.
    fn zeroed(len: usize) -> Self;

    /// Creates an empty store with room for `capacity` records.
    fn with_capacity(capacity: usize) -> Self;

    /// Number of records.
    fn len(&self) -> usize;

    /// Returns whether the store holds no records.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Record at `index` by value.
    fn get(&self, index: usize) -> Record;

    /// Field `a` of the record at `index`; the sort key for merges.
    fn key(&self, index: usize) -> i32;

    /// Overwrites the record at `index`.
    fn set(&mut self, index: usize, record: Record);

    /// Appends one record.
    fn push(&mut self, record: Record);

    /// Reserves room for at least `additional` more records without changing
    /// the logical length.
    fn reserve(&mut self, additional: usize);

    /// Iterates read handles in index order.
    fn iter(&self) -> Self::Iter<'_>;

    /// Iterates write handles in index order.
    fn iter_mut(&mut self) -> Self::IterMut<'_>;

    /// Appends `src[start..]` in one bulk operation.
    ///
    /// # Panics
    ///
    /// Panics if `start > src.len()`.
    fn extend_from_tail(&mut self, src: &Self, start: usize);

    /// Copies the store out as a vector of records.
    fn to_records(&self) -> Vec<Record> {
        self.iter().map(|r| r.to_record()).collect()
    }
}
