//! Raw AOS patterns over the contiguous record array.

use std::ptr;

use layout_core::{Record, RowStore};

use crate::compute::compute_value;

/// Pointer-walk version of [`read_sum`](crate::read_sum).
pub fn read_sum(store: &RowStore) -> i64 {
    let records = store.as_slice();
    let mut sum = 0i64;
    // SAFETY: `p` walks from the slice start to one past its end.
    unsafe {
        let mut p = records.as_ptr();
        let end = p.add(records.len());
        while p != end {
            let r = &*p;
            sum = sum
                .wrapping_add(r.a as i64)
                .wrapping_add(r.b as i64)
                .wrapping_add(r.c as i64);
            p = p.add(1);
        }
    }
    sum
}

/// Pointer-walk version of [`write_increment`](crate::write_increment).
pub fn write_increment(store: &mut RowStore) {
    let records = store.as_mut_slice();
    // SAFETY: `p` walks from the slice start to one past its end, and the
    // slice is borrowed mutably for the whole loop.
    unsafe {
        let mut p = records.as_mut_ptr();
        let end = p.add(records.len());
        while p != end {
            let r = &mut *p;
            r.a = r.a.wrapping_add(1);
            r.b = r.b.wrapping_add(2);
            r.c = r.c.wrapping_add(3);
            p = p.add(1);
        }
    }
}

/// Pointer-walk version of [`compute_into`](crate::compute_into).
///
/// # Panics
///
/// Panics if `out.len() != store.len()`.
pub fn compute_into(store: &RowStore, out: &mut [i32]) {
    let records = store.as_slice();
    assert_eq!(
        out.len(),
        records.len(),
        "output buffer must match store length"
    );
    // SAFETY: both pointers advance in lockstep over equal-length slices.
    unsafe {
        let mut src = records.as_ptr();
        let end = src.add(records.len());
        let mut dst = out.as_mut_ptr();
        while src != end {
            *dst = compute_value(&*src);
            src = src.add(1);
            dst = dst.add(1);
        }
    }
}

/// Indexed unchecked version of [`linear_search`](crate::linear_search).
pub fn linear_search(store: &RowStore, target: i32) -> usize {
    let records = store.as_slice();
    let len = records.len();
    let base = records.as_ptr();
    let mut index = 0;
    while index < len {
        // SAFETY: index < len.
        if unsafe { (*base.add(index)).a } == target {
            return index;
        }
        index += 1;
    }
    len
}

/// Unchecked-write version of [`filter_copy`](crate::filter_copy).
///
/// Reserves the worst case (`len`) so every write lands in capacity.
pub fn filter_copy(store: &RowStore) -> RowStore {
    let records = store.as_slice();
    let mut filtered: Vec<Record> = Vec::with_capacity(records.len());
    // SAFETY: at most `len` records are written into capacity `len`, and the
    // length is set to exactly the number written.
    unsafe {
        let mut src = records.as_ptr();
        let end = src.add(records.len());
        let mut dst = filtered.as_mut_ptr();
        let mut count = 0;
        while src != end {
            let r = *src;
            if r.a < r.b {
                ptr::write(dst, r);
                dst = dst.add(1);
                count += 1;
            }
            src = src.add(1);
        }
        filtered.set_len(count);
    }
    RowStore::from_records(filtered)
}

/// Pointer two-pointer merge with a `copy_nonoverlapping` tail.
///
/// Same ordering and tie rule as [`merge_sorted`](crate::merge_sorted).
pub fn merge_sorted(left: &RowStore, right: &RowStore) -> RowStore {
    let (l, r) = (left.as_slice(), right.as_slice());
    let total = l.len() + r.len();
    let mut merged: Vec<Record> = Vec::with_capacity(total);
    // SAFETY: each step writes one record and advances exactly one input,
    // so the head phase writes `consumed` records; the two tails add up to
    // the rest, filling capacity `total` exactly before `set_len`.
    unsafe {
        let mut p1 = l.as_ptr();
        let end1 = p1.add(l.len());
        let mut p2 = r.as_ptr();
        let end2 = p2.add(r.len());
        let mut dst = merged.as_mut_ptr();

        while p1 != end1 && p2 != end2 {
            if (*p1).a <= (*p2).a {
                ptr::write(dst, *p1);
                p1 = p1.add(1);
            } else {
                ptr::write(dst, *p2);
                p2 = p2.add(1);
            }
            dst = dst.add(1);
        }

        let rest1 = end1.offset_from(p1) as usize;
        ptr::copy_nonoverlapping(p1, dst, rest1);
        dst = dst.add(rest1);

        let rest2 = end2.offset_from(p2) as usize;
        ptr::copy_nonoverlapping(p2, dst, rest2);

        merged.set_len(total);
    }
    RowStore::from_records(merged)
}
