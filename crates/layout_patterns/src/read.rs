//! Sequential read pattern.

use layout_core::{RecordRead, RecordStore};

/// Sums `a + b + c` over every record.
///
/// Accumulates in wrapping `i64`. Touches all three fields of each record,
/// the case where AOS record locality matters.
///
/// # Examples
/// ```
/// use layout_core::generators::generate_sequential;
/// use layout_patterns::read_sum;
///
/// let (aos, soa) = generate_sequential(5);
/// assert_eq!(read_sum(&aos), 45);
/// assert_eq!(read_sum(&soa), 45);
/// ```
#[inline]
pub fn read_sum<S: RecordStore>(store: &S) -> i64 {
    let mut sum = 0i64;
    for r in store.iter() {
        sum = sum
            .wrapping_add(r.a() as i64)
            .wrapping_add(r.b() as i64)
            .wrapping_add(r.c() as i64);
    }
    sum
}
