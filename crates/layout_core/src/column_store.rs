//! Structure of Arrays storage for records.
//!
//! Stores each field in its own contiguous column:
//!
//! ```text
//! a: [a0, a1, a2, ...]
//! b: [b0, b1, b2, ...]
//! c: [c0, c1, c2, ...]
//! ```
//!
//! Index `i` across the three columns denotes one logical record. The store
//! synthesises per-index virtual records ([`RecordRef`], [`RecordMut`]) so
//! callers see the same record-like handles a `RowStore` yields.
//!
//! # Invariant
//!
//! `a.len() == b.len() == c.len()` after every public operation. There is no
//! API that appends to one column alone.

use std::iter::FusedIterator;
use std::slice;

use crate::error::LayoutError;
use crate::facade::{Layout, RecordRead, RecordStore, RecordWrite};
use crate::record::Record;

/// SoA representation of a record collection.
///
/// # Examples
///
/// ```
/// use layout_core::{ColumnStore, Record, RecordRead, RecordWrite};
///
/// let mut soa = ColumnStore::new(3);
/// soa.set(1, Record::new(1, 2, 3));
///
/// // Reference mode: writes land in the columns.
/// for mut r in soa.iter_mut() {
///     r.add_wrapping(1, 1, 1);
/// }
/// assert_eq!(soa.a(), &[1, 2, 1]);
///
/// // Value-copy mode: snapshots.
/// let snapshot: Vec<Record> = soa.values().collect();
/// assert_eq!(snapshot[1], Record::new(2, 3, 4));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnStore {
    a: Vec<i32>,
    b: Vec<i32>,
    c: Vec<i32>,
}

impl ColumnStore {
    /// Creates a store of `len` zeroed records.
    pub fn new(len: usize) -> Self {
        Self {
            a: vec![0; len],
            b: vec![0; len],
            c: vec![0; len],
        }
    }

    /// Creates an empty store with the given capacity in every column.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            a: Vec::with_capacity(capacity),
            b: Vec::with_capacity(capacity),
            c: Vec::with_capacity(capacity),
        }
    }

    /// Assembles a store from three existing columns.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::LengthMismatch` if the columns differ in length.
    pub fn from_columns(a: Vec<i32>, b: Vec<i32>, c: Vec<i32>) -> Result<Self, LayoutError> {
        if a.len() != b.len() || a.len() != c.len() {
            return Err(LayoutError::LengthMismatch {
                a: a.len(),
                b: b.len(),
                c: c.len(),
            });
        }
        Ok(Self { a, b, c })
    }

    /// Assembles a store from three columns without checking their lengths.
    ///
    /// # Safety
    ///
    /// The three columns must have the same length. Unchecked accessors such
    /// as [`get_unchecked`](Self::get_unchecked) rely on it. Checked in debug
    /// builds.
    #[inline]
    pub unsafe fn from_columns_unchecked(a: Vec<i32>, b: Vec<i32>, c: Vec<i32>) -> Self {
        let soa = Self { a, b, c };
        soa.debug_check();
        soa
    }

    /// Builds a store from a slice of records.
    pub fn from_records(records: &[Record]) -> Self {
        let mut soa = Self::with_capacity(records.len());
        for r in records {
            soa.push(*r);
        }
        soa
    }

    /// Returns the number of records.
    #[inline]
    pub fn len(&self) -> usize {
        self.debug_check();
        self.a.len()
    }

    /// Returns whether the store is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    /// Returns the number of records the columns can hold without
    /// reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.a.capacity().min(self.b.capacity()).min(self.c.capacity())
    }

    /// Returns slice of column `a`.
    #[inline]
    pub fn a(&self) -> &[i32] {
        &self.a
    }

    /// Returns slice of column `b`.
    #[inline]
    pub fn b(&self) -> &[i32] {
        &self.b
    }

    /// Returns slice of column `c`.
    #[inline]
    pub fn c(&self) -> &[i32] {
        &self.c
    }

    /// Returns the three columns as disjoint mutable slices.
    ///
    /// Slices cannot change length, so the joint-length invariant holds.
    #[inline]
    pub fn columns_mut(&mut self) -> (&mut [i32], &mut [i32], &mut [i32]) {
        (&mut self.a, &mut self.b, &mut self.c)
    }

    /// Returns the record at `index` by value.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn get(&self, index: usize) -> Record {
        self.check_index(index);
        Record::new(self.a[index], self.b[index], self.c[index])
    }

    /// Returns the record at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than `self.len()`. Checked in debug builds.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> Record {
        debug_assert!(index < self.len(), "index {} out of range", index);
        Record::new(
            *self.a.get_unchecked(index),
            *self.b.get_unchecked(index),
            *self.c.get_unchecked(index),
        )
    }

    /// Overwrites the record at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn set(&mut self, index: usize, record: Record) {
        self.check_index(index);
        self.a[index] = record.a;
        self.b[index] = record.b;
        self.c[index] = record.c;
    }

    /// Returns a read view of the record at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn record(&self, index: usize) -> RecordRef<'_> {
        self.check_index(index);
        RecordRef {
            a: &self.a[index],
            b: &self.b[index],
            c: &self.c[index],
        }
    }

    /// Returns a write view of the record at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn record_mut(&mut self, index: usize) -> RecordMut<'_> {
        self.check_index(index);
        RecordMut {
            a: &mut self.a[index],
            b: &mut self.b[index],
            c: &mut self.c[index],
        }
    }

    /// Appends one record to all three columns.
    #[inline]
    pub fn push(&mut self, record: Record) {
        self.a.push(record.a);
        self.b.push(record.b);
        self.c.push(record.c);
        self.debug_check();
    }

    /// Reserves room for `additional` more records in every column.
    pub fn reserve(&mut self, additional: usize) {
        self.a.reserve(additional);
        self.b.reserve(additional);
        self.c.reserve(additional);
    }

    /// Appends `src[start..]`, one bulk copy per column.
    ///
    /// # Panics
    ///
    /// Panics if `start > src.len()`.
    pub fn extend_from_tail(&mut self, src: &ColumnStore, start: usize) {
        assert!(
            start <= src.len(),
            "tail start {} beyond source length {}",
            start,
            src.len()
        );
        self.a.extend_from_slice(&src.a[start..]);
        self.b.extend_from_slice(&src.b[start..]);
        self.c.extend_from_slice(&src.c[start..]);
        self.debug_check();
    }

    /// Iterates read views in index order (reference mode).
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            a: self.a.iter(),
            b: self.b.iter(),
            c: self.c.iter(),
        }
    }

    /// Iterates write views in index order (reference mode).
    ///
    /// Writing through a yielded [`RecordMut`] mutates the columns in place.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_> {
        IterMut {
            a: self.a.iter_mut(),
            b: self.b.iter_mut(),
            c: self.c.iter_mut(),
        }
    }

    /// Iterates record snapshots in index order (value-copy mode).
    #[inline]
    pub fn values(&self) -> Values<'_> {
        Values { inner: self.iter() }
    }

    /// Verifies the joint-length invariant.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::LengthMismatch` if the columns have drifted.
    pub fn check_invariants(&self) -> Result<(), LayoutError> {
        if self.a.len() != self.b.len() || self.a.len() != self.c.len() {
            return Err(LayoutError::LengthMismatch {
                a: self.a.len(),
                b: self.b.len(),
                c: self.c.len(),
            });
        }
        Ok(())
    }

    #[inline]
    fn check_index(&self, index: usize) {
        assert!(
            index < self.a.len(),
            "index {} out of range for ColumnStore of length {}",
            index,
            self.a.len()
        );
    }

    #[inline]
    fn debug_check(&self) {
        debug_assert!(
            self.a.len() == self.b.len() && self.a.len() == self.c.len(),
            "column length mismatch: a={}, b={}, c={}",
            self.a.len(),
            self.b.len(),
            self.c.len()
        );
    }
}

/// Read view of one logical record in a [`ColumnStore`].
///
/// A borrowed triple of column elements; lives no longer than the borrow of
/// the store it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordRef<'a> {
    a: &'a i32,
    b: &'a i32,
    c: &'a i32,
}

impl RecordRead for RecordRef<'_> {
    #[inline]
    fn a(&self) -> i32 {
        *self.a
    }
    #[inline]
    fn b(&self) -> i32 {
        *self.b
    }
    #[inline]
    fn c(&self) -> i32 {
        *self.c
    }
}

/// Write view of one logical record in a [`ColumnStore`].
#[derive(Debug, PartialEq, Eq)]
pub struct RecordMut<'a> {
    a: &'a mut i32,
    b: &'a mut i32,
    c: &'a mut i32,
}

impl RecordRead for RecordMut<'_> {
    #[inline]
    fn a(&self) -> i32 {
        *self.a
    }
    #[inline]
    fn b(&self) -> i32 {
        *self.b
    }
    #[inline]
    fn c(&self) -> i32 {
        *self.c
    }
}

impl RecordWrite for RecordMut<'_> {
    #[inline]
    fn set_a(&mut self, value: i32) {
        *self.a = value;
    }
    #[inline]
    fn set_b(&mut self, value: i32) {
        *self.b = value;
    }
    #[inline]
    fn set_c(&mut self, value: i32) {
        *self.c = value;
    }
    #[inline]
    fn add_wrapping(&mut self, da: i32, db: i32, dc: i32) {
        *self.a = self.a.wrapping_add(da);
        *self.b = self.b.wrapping_add(db);
        *self.c = self.c.wrapping_add(dc);
    }
}

/// Iterator over [`RecordRef`] views. Created by [`ColumnStore::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    a: slice::Iter<'a, i32>,
    b: slice::Iter<'a, i32>,
    c: slice::Iter<'a, i32>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = RecordRef<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match (self.a.next(), self.b.next(), self.c.next()) {
            (Some(a), Some(b), Some(c)) => Some(RecordRef { a, b, c }),
            _ => None,
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.a.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}

/// Iterator over [`RecordMut`] views. Created by [`ColumnStore::iter_mut`].
#[derive(Debug)]
pub struct IterMut<'a> {
    a: slice::IterMut<'a, i32>,
    b: slice::IterMut<'a, i32>,
    c: slice::IterMut<'a, i32>,
}

impl<'a> Iterator for IterMut<'a> {
    type Item = RecordMut<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match (self.a.next(), self.b.next(), self.c.next()) {
            (Some(a), Some(b), Some(c)) => Some(RecordMut { a, b, c }),
            _ => None,
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.a.size_hint()
    }
}

impl ExactSizeIterator for IterMut<'_> {}
impl FusedIterator for IterMut<'_> {}

/// Iterator over record snapshots. Created by [`ColumnStore::values`].
#[derive(Debug, Clone)]
pub struct Values<'a> {
    inner: Iter<'a>,
}

impl Iterator for Values<'_> {
    type Item = Record;

    #[inline]
    fn next(&mut self) -> Option<Record> {
        self.inner.next().map(|r| r.to_record())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Values<'_> {}
impl FusedIterator for Values<'_> {}

impl<'s> IntoIterator for &'s ColumnStore {
    type Item = RecordRef<'s>;
    type IntoIter = Iter<'s>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'s> IntoIterator for &'s mut ColumnStore {
    type Item = RecordMut<'s>;
    type IntoIter = IterMut<'s>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl RecordStore for ColumnStore {
    type Ref<'a> = RecordRef<'a>;
    type Mut<'a> = RecordMut<'a>;
    type Iter<'a> = Iter<'a>;
    type IterMut<'a> = IterMut<'a>;

    const LAYOUT: Layout = Layout::Soa;

    fn zeroed(len: usize) -> Self {
        ColumnStore::new(len)
    }

    fn with_capacity(capacity: usize) -> Self {
        ColumnStore::with_capacity(capacity)
    }

    #[inline]
    fn len(&self) -> usize {
        ColumnStore::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Record {
        ColumnStore::get(self, index)
    }

    #[inline]
    fn key(&self, index: usize) -> i32 {
        self.a[index]
    }

    #[inline]
    fn set(&mut self, index: usize, record: Record) {
        ColumnStore::set(self, index, record)
    }

    #[inline]
    fn push(&mut self, record: Record) {
        ColumnStore::push(self, record)
    }

    fn reserve(&mut self, additional: usize) {
        ColumnStore::reserve(self, additional)
    }

    #[inline]
    fn iter(&self) -> Iter<'_> {
        ColumnStore::iter(self)
    }

    #[inline]
    fn iter_mut(&mut self) -> IterMut<'_> {
        ColumnStore::iter_mut(self)
    }

    fn extend_from_tail(&mut self, src: &Self, start: usize) {
        ColumnStore::extend_from_tail(self, src, start)
    }
}
