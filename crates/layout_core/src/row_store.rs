//! Array of Structures storage for records.
//!
//! A single contiguous sequence of [`Record`] values; traversal order is
//! storage order by construction, so no facade is needed.

use std::slice;

use crate::facade::{Layout, RecordStore};
use crate::record::Record;

/// AoS representation of a record collection.
///
/// # Examples
///
/// ```
/// use layout_core::{Record, RowStore};
///
/// let mut aos = RowStore::new(2);
/// aos.set(0, Record::new(1, 2, 3));
/// for r in aos.iter_mut() {
///     r.c += 1;
/// }
/// assert_eq!(aos.get(0), Record::new(1, 2, 4));
/// assert_eq!(aos.get(1), Record::new(0, 0, 1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowStore {
    records: Vec<Record>,
}

impl RowStore {
    /// Creates a store of `len` zeroed records.
    pub fn new(len: usize) -> Self {
        Self {
            records: vec![Record::default(); len],
        }
    }

    /// Creates an empty store with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    /// Wraps an existing vector of records.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Unwraps the store into its vector.
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Returns the number of records.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the store is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of records the store can hold without
    /// reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.records.capacity()
    }

    /// Returns the records as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Record] {
        &self.records
    }

    /// Returns the records as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Record] {
        &mut self.records
    }

    /// Returns the record at `index` by value.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn get(&self, index: usize) -> Record {
        self.records[index]
    }

    /// Overwrites the record at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn set(&mut self, index: usize, record: Record) {
        self.records[index] = record;
    }

    /// Appends one record.
    #[inline]
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Reserves room for `additional` more records.
    pub fn reserve(&mut self, additional: usize) {
        self.records.reserve(additional);
    }

    /// Appends `src[start..]` in one bulk copy.
    ///
    /// # Panics
    ///
    /// Panics if `start > src.len()`.
    pub fn extend_from_tail(&mut self, src: &RowStore, start: usize) {
        assert!(
            start <= src.len(),
            "tail start {} beyond source length {}",
            start,
            src.len()
        );
        self.records.extend_from_slice(&src.records[start..]);
    }

    /// Iterates records in storage order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Iterates mutable records in storage order.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Record> {
        self.records.iter_mut()
    }
}

impl From<Vec<Record>> for RowStore {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl<'s> IntoIterator for &'s RowStore {
    type Item = &'s Record;
    type IntoIter = slice::Iter<'s, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'s> IntoIterator for &'s mut RowStore {
    type Item = &'s mut Record;
    type IntoIter = slice::IterMut<'s, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl RecordStore for RowStore {
    type Ref<'a> = &'a Record;
    type Mut<'a> = &'a mut Record;
    type Iter<'a> = slice::Iter<'a, Record>;
    type IterMut<'a> = slice::IterMut<'a, Record>;

    const LAYOUT: Layout = Layout::Aos;

    fn zeroed(len: usize) -> Self {
        RowStore::new(len)
    }

    fn with_capacity(capacity: usize) -> Self {
        RowStore::with_capacity(capacity)
    }

    #[inline]
    fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    fn get(&self, index: usize) -> Record {
        self.records[index]
    }

    #[inline]
    fn key(&self, index: usize) -> i32 {
        self.records[index].a
    }

    #[inline]
    fn set(&mut self, index: usize, record: Record) {
        self.records[index] = record;
    }

    #[inline]
    fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    fn reserve(&mut self, additional: usize) {
        self.records.reserve(additional);
    }

    #[inline]
    fn iter(&self) -> slice::Iter<'_, Record> {
        self.records.iter()
    }

    #[inline]
    fn iter_mut(&mut self) -> slice::IterMut<'_, Record> {
        self.records.iter_mut()
    }

    fn extend_from_tail(&mut self, src: &Self, start: usize) {
        RowStore::extend_from_tail(self, src, start)
    }

    fn to_records(&self) -> Vec<Record> {
        self.records.clone()
    }
}
