//! Linear search pattern.

use layout_core::{RecordRead, RecordStore};

/// Returns the index of the first record whose `a` equals `target`, or
/// `store.len()` when there is none.
///
/// Stops at the first match.
///
/// # Examples
/// ```
/// use layout_core::generators::generate_sequential;
/// use layout_patterns::linear_search;
///
/// let (aos, soa) = generate_sequential(1000);
/// assert_eq!(linear_search(&aos, 500), 500);
/// assert_eq!(linear_search(&soa, 1000), 1000);
/// ```
#[inline]
pub fn linear_search<S: RecordStore>(store: &S, target: i32) -> usize {
    for (index, r) in store.iter().enumerate() {
        if r.a() == target {
            return index;
        }
    }
    store.len()
}

/// Search target used by the benchmark: `size / 2`.
///
/// Always present in a sequential fixture of that size when `size > 0`.
///
/// # Panics
///
/// Panics if `size / 2` does not fit in `i32`.
#[inline]
pub fn search_target(size: usize) -> i32 {
    i32::try_from(size / 2).expect("search target exceeds i32 range")
}
