//! Raw SOA patterns over the three columns.
//!
//! Columns are walked in lockstep with one pointer each. The joint-length
//! invariant of `ColumnStore` is what makes a single bound valid for all
//! three.

use std::ptr;

use layout_core::ColumnStore;

/// Three output columns being filled through raw pointers.
struct ColumnWriter {
    a: Vec<i32>,
    b: Vec<i32>,
    c: Vec<i32>,
    written: usize,
}

impl ColumnWriter {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            a: Vec::with_capacity(capacity),
            b: Vec::with_capacity(capacity),
            c: Vec::with_capacity(capacity),
            written: 0,
        }
    }

    /// Writes one record at the next free slot.
    ///
    /// # Safety
    ///
    /// `self.written` must be below the capacity the writer was created with.
    #[inline(always)]
    unsafe fn write(&mut self, a: i32, b: i32, c: i32) {
        let at = self.written;
        ptr::write(self.a.as_mut_ptr().add(at), a);
        ptr::write(self.b.as_mut_ptr().add(at), b);
        ptr::write(self.c.as_mut_ptr().add(at), c);
        self.written = at + 1;
    }

    /// Bulk-copies `src[start..]` after the written slots.
    ///
    /// # Safety
    ///
    /// `start <= src.len()` and `self.written + src.len() - start` must not
    /// exceed the capacity the writer was created with.
    #[inline]
    unsafe fn copy_tail(&mut self, src: &ColumnStore, start: usize) {
        let count = src.len() - start;
        let at = self.written;
        ptr::copy_nonoverlapping(src.a().as_ptr().add(start), self.a.as_mut_ptr().add(at), count);
        ptr::copy_nonoverlapping(src.b().as_ptr().add(start), self.b.as_mut_ptr().add(at), count);
        ptr::copy_nonoverlapping(src.c().as_ptr().add(start), self.c.as_mut_ptr().add(at), count);
        self.written = at + count;
    }

    fn finish(mut self) -> ColumnStore {
        // SAFETY: exactly `written` slots of each column were initialised.
        unsafe {
            self.a.set_len(self.written);
            self.b.set_len(self.written);
            self.c.set_len(self.written);
            ColumnStore::from_columns_unchecked(self.a, self.b, self.c)
        }
    }
}

/// Lockstep column walk version of [`read_sum`](crate::read_sum).
pub fn read_sum(store: &ColumnStore) -> i64 {
    let len = store.len();
    let (pa, pb, pc) = (store.a().as_ptr(), store.b().as_ptr(), store.c().as_ptr());
    let mut sum = 0i64;
    for i in 0..len {
        // SAFETY: i < len and all three columns have length len.
        let (a, b, c) = unsafe { (*pa.add(i), *pb.add(i), *pc.add(i)) };
        sum = sum
            .wrapping_add(a as i64)
            .wrapping_add(b as i64)
            .wrapping_add(c as i64);
    }
    sum
}

/// Lockstep column walk version of [`write_increment`](crate::write_increment).
pub fn write_increment(store: &mut ColumnStore) {
    let (a, b, c) = store.columns_mut();
    let len = a.len();
    let (pa, pb, pc) = (a.as_mut_ptr(), b.as_mut_ptr(), c.as_mut_ptr());
    for i in 0..len {
        // SAFETY: i < len and all three columns have length len.
        unsafe {
            *pa.add(i) = (*pa.add(i)).wrapping_add(1);
            *pb.add(i) = (*pb.add(i)).wrapping_add(2);
            *pc.add(i) = (*pc.add(i)).wrapping_add(3);
        }
    }
}

/// Lockstep column walk version of [`compute_into`](crate::compute_into).
///
/// # Panics
///
/// Panics if `out.len() != store.len()`.
pub fn compute_into(store: &ColumnStore, out: &mut [i32]) {
    let len = store.len();
    assert_eq!(out.len(), len, "output buffer must match store length");
    let (pa, pb, pc) = (store.a().as_ptr(), store.b().as_ptr(), store.c().as_ptr());
    let dst = out.as_mut_ptr();
    for i in 0..len {
        // SAFETY: i < len for the three columns and for `out`.
        unsafe {
            *dst.add(i) = (*pa.add(i)).wrapping_mul(*pb.add(i)).wrapping_add(*pc.add(i));
        }
    }
}

/// Column `a` scan version of [`linear_search`](crate::linear_search).
///
/// Only the key column is touched. One index, advanced once per step.
pub fn linear_search(store: &ColumnStore, target: i32) -> usize {
    let keys = store.a();
    let len = keys.len();
    let base = keys.as_ptr();
    let mut index = 0;
    while index < len {
        // SAFETY: index < len.
        if unsafe { *base.add(index) } == target {
            return index;
        }
        index += 1;
    }
    len
}

/// Unchecked-write version of [`filter_copy`](crate::filter_copy).
///
/// Reserves the worst case (`len`) in every column.
pub fn filter_copy(store: &ColumnStore) -> ColumnStore {
    let len = store.len();
    let (pa, pb, pc) = (store.a().as_ptr(), store.b().as_ptr(), store.c().as_ptr());
    let mut out = ColumnWriter::with_capacity(len);
    for i in 0..len {
        // SAFETY: i < len for the inputs; at most `len` writes into
        // capacity `len`.
        unsafe {
            let (a, b) = (*pa.add(i), *pb.add(i));
            if a < b {
                out.write(a, b, *pc.add(i));
            }
        }
    }
    out.finish()
}

/// Column two-pointer merge with `copy_nonoverlapping` tails.
///
/// Same ordering and tie rule as [`merge_sorted`](crate::merge_sorted).
pub fn merge_sorted(left: &ColumnStore, right: &ColumnStore) -> ColumnStore {
    let (n1, n2) = (left.len(), right.len());
    let mut out = ColumnWriter::with_capacity(n1 + n2);
    let (k1, k2) = (left.a().as_ptr(), right.a().as_ptr());
    let (mut i, mut j) = (0, 0);
    // SAFETY: i < n1 and j < n2 inside the loop; each step writes one record
    // and the tails write the remaining n1 - i + n2 - j, for n1 + n2 total.
    unsafe {
        while i < n1 && j < n2 {
            let (ka, kb) = (*k1.add(i), *k2.add(j));
            if ka <= kb {
                out.write(ka, *left.b().as_ptr().add(i), *left.c().as_ptr().add(i));
                i += 1;
            } else {
                out.write(kb, *right.b().as_ptr().add(j), *right.c().as_ptr().add(j));
                j += 1;
            }
        }
        out.copy_tail(left, i);
        out.copy_tail(right, j);
    }
    out.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use layout_core::generators::{generate_sequential, generate_sorted};
    use layout_core::Record;

    #[test]
    fn test_raw_read_sum_matches_facade() {
        let (_, soa) = generate_sequential(5);
        assert_eq!(read_sum(&soa), 45);
        let (_, soa) = generate_sequential(4096);
        assert_eq!(read_sum(&soa), crate::read_sum(&soa));
    }

    #[test]
    fn test_raw_write_increment_matches_facade() {
        let (_, mut raw) = generate_sequential(64);
        let (_, mut facade) = generate_sequential(64);
        for _ in 0..5 {
            write_increment(&mut raw);
            crate::write_increment(&mut facade);
        }
        assert_eq!(raw, facade);
        assert_eq!(raw.get(0), Record::new(5, 11, 17));
    }

    #[test]
    fn test_raw_compute_into_matches_facade() {
        let (_, soa) = generate_sequential(300);
        let mut raw_out = vec![0; 300];
        let mut facade_out = vec![0; 300];
        compute_into(&soa, &mut raw_out);
        crate::compute_into(&soa, &mut facade_out);
        assert_eq!(raw_out, facade_out);
    }

    #[test]
    fn test_raw_linear_search_single_step_index() {
        // A double increment would skip odd indices; every index must be
        // reachable.
        let (_, soa) = generate_sequential(10);
        for target in 0..10 {
            assert_eq!(linear_search(&soa, target), target as usize);
        }
        assert_eq!(linear_search(&soa, 10), 10);
    }

    #[test]
    fn test_raw_filter_copy() {
        let soa = ColumnStore::from_records(&[
            Record::new(3, 2, 9),
            Record::new(0, 1, 8),
            Record::new(5, 6, 7),
        ]);
        let filtered = filter_copy(&soa);
        assert_eq!(filtered.a(), &[0, 5]);
        assert_eq!(filtered.c(), &[8, 7]);
        assert!(filtered.check_invariants().is_ok());
        assert_eq!(filtered, crate::filter_copy(&soa));
    }

    #[test]
    fn test_raw_filter_copy_empty_input() {
        assert!(filter_copy(&ColumnStore::new(0)).is_empty());
    }

    #[test]
    fn test_raw_filter_copy_reserves_full_length() {
        // Every sequential record has a < b, so the whole input survives.
        let (_, soa) = generate_sequential(1000);
        let filtered = filter_copy(&soa);
        assert_eq!(filtered.len(), 1000);
        assert!(filtered.capacity() >= 1000);
        assert_eq!(filtered, crate::filter_copy(&soa));
    }

    #[test]
    fn test_raw_merge_scenario() {
        let (_, soa1) = generate_sorted(3, 0);
        let (_, soa2) = generate_sorted(3, 1);
        let merged = merge_sorted(&soa1, &soa2);
        assert_eq!(merged.a(), &[0, 1, 2, 3, 4, 5]);
        assert_eq!(merged, crate::merge_sorted(&soa1, &soa2));
    }

    #[test]
    fn test_raw_merge_uneven_tail() {
        let (_, short) = generate_sorted(2, 1);
        let (_, long) = generate_sorted(50, 0);
        let merged = merge_sorted(&long, &short);
        assert_eq!(merged.len(), 52);
        assert!(merged.check_invariants().is_ok());
        assert_eq!(merged, crate::merge_sorted_elementwise(&long, &short));
    }

    #[test]
    fn test_raw_merge_with_empty() {
        let (_, soa) = generate_sorted(6, 1);
        let empty = ColumnStore::new(0);
        assert_eq!(merge_sorted(&soa, &empty), soa);
        assert_eq!(merge_sorted(&empty, &soa), soa);
    }
}
