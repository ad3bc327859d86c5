//! In-place write pattern.

use layout_core::{RecordStore, RecordWrite};

/// Field deltas applied by [`write_increment`].
pub const WRITE_DELTAS: (i32, i32, i32) = (1, 2, 3);

/// Adds `(1, 2, 3)` to every record in place.
///
/// Wrapping arithmetic: the benchmark applies this to the same fixture on
/// every timed iteration. There is no return value, only memory effects;
/// timing oracles pair it with a compiler fence.
///
/// # Examples
/// ```
/// use layout_core::generators::generate_sequential;
/// use layout_core::Record;
/// use layout_patterns::write_increment;
///
/// let (mut aos, mut soa) = generate_sequential(2);
/// write_increment(&mut aos);
/// write_increment(&mut soa);
/// assert_eq!(aos.get(0), Record::new(1, 3, 5));
/// assert_eq!(soa.get(1), Record::new(2, 4, 6));
/// ```
#[inline]
pub fn write_increment<S: RecordStore>(store: &mut S) {
    let (da, db, dc) = WRITE_DELTAS;
    for mut r in store.iter_mut() {
        r.add_wrapping(da, db, dc);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layout_core::generators::generate_sequential;
    use layout_core::{ColumnStore, Record, RowStore};

    #[test]
    fn test_write_increment_once() {
        let (mut aos, mut soa) = generate_sequential(100);
        write_increment(&mut aos);
        write_increment(&mut soa);

        for i in 0..100 {
            let expected = Record::new(i as i32 + 1, i as i32 + 3, i as i32 + 5);
            assert_eq!(aos.get(i), expected);
            assert_eq!(soa.get(i), expected);
        }
    }

    #[test]
    fn test_write_increment_k_times() {
        let k = 7;
        let (mut aos, mut soa) = generate_sequential(10);
        for _ in 0..k {
            write_increment(&mut aos);
            write_increment(&mut soa);
        }
        assert_eq!(aos.get(3), Record::new(3 + k, 4 + 2 * k, 5 + 3 * k));
        assert_eq!(aos.to_records(), soa.to_records());
    }

    #[test]
    fn test_write_increment_wraps() {
        let records = vec![Record::new(i32::MAX, i32::MAX - 1, i32::MAX - 2)];
        let mut aos = RowStore::from_records(records.clone());
        let mut soa = ColumnStore::from_records(&records);
        write_increment(&mut aos);
        write_increment(&mut soa);

        let expected = Record::new(i32::MIN, i32::MIN, i32::MIN);
        assert_eq!(aos.get(0), expected);
        assert_eq!(soa.get(0), expected);
    }
}
