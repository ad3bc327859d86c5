//! The fixed three-field record.

use serde::{Deserialize, Serialize};

/// A plain record of three 32-bit integer fields.
///
/// Records have value semantics and no identity beyond their position in a
/// store.
///
/// # Examples
/// ```
/// use layout_core::Record;
///
/// let r = Record::new(1, 2, 3);
/// assert_eq!(r.a + r.b + r.c, 6);
/// assert_eq!(Record::default(), Record::new(0, 0, 0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(C)]
pub struct Record {
    /// First field, also the sort key for merge fixtures
    pub a: i32,
    /// Second field
    pub b: i32,
    /// Third field
    pub c: i32,
}

impl Record {
    /// Creates a record from its three fields.
    #[inline]
    pub const fn new(a: i32, b: i32, c: i32) -> Self {
        Self { a, b, c }
    }
}

impl From<(i32, i32, i32)> for Record {
    #[inline]
    fn from((a, b, c): (i32, i32, i32)) -> Self {
        Self { a, b, c }
    }
}
