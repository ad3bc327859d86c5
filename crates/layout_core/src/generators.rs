//! Deterministic fixture generators.
//!
//! Each generator fills both layouts with the same logical dataset so the
//! two layouts can be checked for result equivalence. Generators run once
//! per benchmark case, outside the timed region.

use crate::column_store::ColumnStore;
use crate::error::LayoutError;
use crate::facade::RecordStore;
use crate::record::Record;
use crate::row_store::RowStore;

/// Converts a fixture index to a key.
///
/// # Panics
///
/// Panics if `i` does not fit in `i32`; a wrapped index would duplicate keys.
#[inline]
fn fixture_index(i: usize) -> i32 {
    i32::try_from(i).expect("fixture index exceeds i32 range")
}

/// Record `i` of the sequential dataset: `(i, i + 1, i + 2)`.
///
/// # Panics
///
/// Panics if `i > i32::MAX`.
#[inline]
pub fn sequential_record(i: usize) -> Record {
    let i = fixture_index(i);
    Record::new(i, i.wrapping_add(1), i.wrapping_add(2))
}

/// Record `i` of the sorted dataset: `(2i + offset, i + 1, i + 2)`.
///
/// # Panics
///
/// Panics if `i > i32::MAX`.
#[inline]
pub fn sorted_record(i: usize, offset: i32) -> Record {
    let i = fixture_index(i);
    Record::new(
        i.wrapping_mul(2).wrapping_add(offset),
        i.wrapping_add(1),
        i.wrapping_add(2),
    )
}

/// Builds a single-layout store of the sequential dataset.
pub fn sequential<S: RecordStore>(size: usize) -> S {
    let mut store = S::with_capacity(size);
    for i in 0..size {
        store.push(sequential_record(i));
    }
    store
}

/// Builds a single-layout store of the sorted dataset.
pub fn sorted<S: RecordStore>(size: usize, offset: i32) -> S {
    let mut store = S::with_capacity(size);
    for i in 0..size {
        store.push(sorted_record(i, offset));
    }
    store
}

/// Generates the sequential dataset in both layouts.
///
/// `a[i] = i`, `b[i] = i + 1`, `c[i] = i + 2`.
///
/// # Examples
/// ```
/// use layout_core::generators::generate_sequential;
///
/// let (aos, soa) = generate_sequential(5);
/// assert_eq!(soa.a(), &[0, 1, 2, 3, 4]);
/// assert_eq!(soa.b(), &[1, 2, 3, 4, 5]);
/// assert_eq!(soa.c(), &[2, 3, 4, 5, 6]);
/// assert_eq!(aos.get(4).c, 6);
/// ```
pub fn generate_sequential(size: usize) -> (RowStore, ColumnStore) {
    (sequential(size), sequential(size))
}

/// Generates a dataset strictly increasing in `a`, in both layouts.
///
/// `a[i] = 2i + offset`, `b[i] = i + 1`, `c[i] = i + 2`. Two calls with
/// offsets 0 and 1 produce streams whose keys interleave without ties.
///
/// # Examples
/// ```
/// use layout_core::generators::generate_sorted;
///
/// let (_, evens) = generate_sorted(3, 0);
/// let (_, odds) = generate_sorted(3, 1);
/// assert_eq!(evens.a(), &[0, 2, 4]);
/// assert_eq!(odds.a(), &[1, 3, 5]);
/// ```
pub fn generate_sorted(size: usize, offset: i32) -> (RowStore, ColumnStore) {
    (sorted(size, offset), sorted(size, offset))
}

/// Checks that field `a` strictly increases across the store.
///
/// Merge fixtures are validated with this before timing starts.
///
/// # Errors
///
/// Returns `LayoutError::NotStrictlyIncreasing` at the first violation.
pub fn validate_strictly_increasing<S: RecordStore>(store: &S) -> Result<(), LayoutError> {
    for index in 1..store.len() {
        let previous = store.key(index - 1);
        let current = store.key(index);
        if current <= previous {
            return Err(LayoutError::NotStrictlyIncreasing {
                index,
                previous,
                current,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_at_i32_max_index() {
        let max = i32::MAX as usize;
        assert_eq!(sequential_record(max).a, i32::MAX);
        assert_eq!(sorted_record(0, 7).a, 7);
    }

    #[test]
    #[should_panic(expected = "fixture index exceeds i32 range")]
    fn test_sequential_record_rejects_oversized_index() {
        sequential_record(i32::MAX as usize + 1);
    }

    #[test]
    #[should_panic(expected = "fixture index exceeds i32 range")]
    fn test_sorted_record_rejects_oversized_index() {
        sorted_record(i32::MAX as usize + 1, 0);
    }

    #[test]
    fn test_generate_sequential_layouts_agree() {
        let (aos, soa) = generate_sequential(100);
        assert_eq!(aos.len(), 100);
        assert_eq!(soa.len(), 100);
        assert_eq!(aos.to_records(), soa.to_records());
    }

    #[test]
    fn test_generate_sequential_empty() {
        let (aos, soa) = generate_sequential(0);
        assert!(aos.is_empty());
        assert!(soa.is_empty());
    }

    #[test]
    fn test_generate_sorted_scenario() {
        let (aos, soa) = generate_sorted(3, 1);
        assert_eq!(soa.a(), &[1, 3, 5]);
        assert_eq!(soa.b(), &[1, 2, 3]);
        assert_eq!(soa.c(), &[2, 3, 4]);
        assert_eq!(aos.to_records(), soa.to_records());
    }

    #[test]
    fn test_sorted_is_strictly_increasing() {
        let (aos, soa) = generate_sorted(1000, 1);
        assert!(validate_strictly_increasing(&aos).is_ok());
        assert!(validate_strictly_increasing(&soa).is_ok());
    }

    #[test]
    fn test_validate_rejects_tie() {
        let soa = ColumnStore::from_columns(vec![0, 2, 2], vec![0; 3], vec![0; 3]).unwrap();
        assert_eq!(
            validate_strictly_increasing(&soa),
            Err(LayoutError::NotStrictlyIncreasing {
                index: 2,
                previous: 2,
                current: 2
            })
        );
    }

    #[test]
    fn test_validate_trivial_stores() {
        assert!(validate_strictly_increasing(&RowStore::new(0)).is_ok());
        assert!(validate_strictly_increasing(&RowStore::new(1)).is_ok());
    }
}
