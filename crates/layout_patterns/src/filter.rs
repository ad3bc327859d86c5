//! Filter-copy pattern.

use layout_core::{RecordRead, RecordStore};

/// Copies the records with `a < b` into a new store of the same layout,
/// preserving their relative order.
///
/// Reserves `len / 2` up front. The reservation only amortises growth; the
/// actual match count may be anything from zero to `len`.
///
/// # Examples
/// ```
/// use layout_core::{ColumnStore, Record};
/// use layout_patterns::filter_copy;
///
/// let soa = ColumnStore::from_records(&[
///     Record::new(1, 2, 0),
///     Record::new(2, 1, 0),
///     Record::new(3, 4, 0),
/// ]);
/// let filtered = filter_copy(&soa);
/// assert_eq!(filtered.a(), &[1, 3]);
/// ```
#[inline]
pub fn filter_copy<S: RecordStore>(store: &S) -> S {
    let mut filtered = S::with_capacity(store.len() / 2);
    for r in store.iter() {
        if r.a() < r.b() {
            filtered.push(r.to_record());
        }
    }
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use layout_core::generators::generate_sequential;
    use layout_core::{ColumnStore, Record, RowStore};

    #[test]
    fn test_filter_copy_all_match() {
        let (aos, soa) = generate_sequential(100);
        assert_eq!(filter_copy(&aos), aos);
        assert_eq!(filter_copy(&soa), soa);
    }

    #[test]
    fn test_filter_copy_none_match() {
        let records: Vec<Record> = (0..50).map(|i| Record::new(i, i, i)).collect();
        let aos = RowStore::from_records(records.clone());
        let soa = ColumnStore::from_records(&records);
        assert!(filter_copy(&aos).is_empty());
        assert!(filter_copy(&soa).is_empty());
    }

    #[test]
    fn test_filter_copy_preserves_order() {
        let records = vec![
            Record::new(5, 6, 1),
            Record::new(9, 2, 2),
            Record::new(-3, 0, 3),
            Record::new(4, 4, 4),
            Record::new(0, 1, 5),
        ];
        let aos = RowStore::from_records(records.clone());
        let soa = ColumnStore::from_records(&records);

        let expected = vec![records[0], records[2], records[4]];
        assert_eq!(filter_copy(&aos).to_records(), expected);
        assert_eq!(filter_copy(&soa).to_records(), expected);
    }

    #[test]
    fn test_filter_copy_soa_columns_in_step() {
        let (_, soa) = generate_sequential(33);
        let filtered = filter_copy(&soa);
        assert!(filtered.check_invariants().is_ok());
        assert_eq!(filtered.len(), 33);
    }
}
