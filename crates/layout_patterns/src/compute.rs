//! Arithmetic compute patterns.
//!
//! All compute `a * b + c` per record and differ only in where the result
//! goes:
//!
//! - [`compute_discard`]: folded into a scalar
//! - [`compute_into`]: written into a buffer sized exactly `len` up front
//! - [`compute_collect`]: pushed onto an initially empty `Vec`, so amortised
//!   growth is part of the measurement
//!
//! [`conditional_transform`] adds a data-dependent branch per record.

use layout_core::{RecordRead, RecordStore};

/// `a * b + c` with wrapping arithmetic.
#[inline(always)]
pub fn compute_value<R: RecordRead>(r: &R) -> i32 {
    r.a().wrapping_mul(r.b()).wrapping_add(r.c())
}

/// `c * 2` if `a > b`, otherwise `c + 1`, with wrapping arithmetic.
#[inline(always)]
pub fn transform_value<R: RecordRead>(r: &R) -> i32 {
    if r.a() > r.b() {
        r.c().wrapping_mul(2)
    } else {
        r.c().wrapping_add(1)
    }
}

/// Folds `a * b + c` over every record into a wrapping `i64` sum.
#[inline]
pub fn compute_discard<S: RecordStore>(store: &S) -> i64 {
    let mut result = 0i64;
    for r in store.iter() {
        result = result.wrapping_add(compute_value(&r) as i64);
    }
    result
}

/// Writes `a * b + c` for record `i` into `out[i]`.
///
/// # Panics
///
/// Panics if `out.len() != store.len()`.
#[inline]
pub fn compute_into<S: RecordStore>(store: &S, out: &mut [i32]) {
    assert_eq!(
        out.len(),
        store.len(),
        "output buffer must match store length"
    );
    for (slot, r) in out.iter_mut().zip(store.iter()) {
        *slot = compute_value(&r);
    }
}

/// Collects `a * b + c` per record into a fresh `Vec` grown by `push`.
#[inline]
pub fn compute_collect<S: RecordStore>(store: &S) -> Vec<i32> {
    let mut results = Vec::new();
    for r in store.iter() {
        results.push(compute_value(&r));
    }
    results
}

/// Writes the branchy transform of record `i` into `out[i]`.
///
/// # Panics
///
/// Panics if `out.len() != store.len()`.
#[inline]
pub fn conditional_transform<S: RecordStore>(store: &S, out: &mut [i32]) {
    assert_eq!(
        out.len(),
        store.len(),
        "output buffer must match store length"
    );
    for (slot, r) in out.iter_mut().zip(store.iter()) {
        *slot = transform_value(&r);
    }
}
