//! Two-way sorted merge.
//!
//! Classic two-pointer merge of two inputs strictly increasing in field `a`:
//!
//! 1. Compare the heads of both inputs and emit the smaller one. Ties go to
//!    the left input (`<=` on the left key), which keeps the merge stable.
//! 2. Once either input is exhausted, append the remainder of the other in
//!    one bulk operation ([`RecordStore::extend_from_tail`]).
//!
//! [`merge_sorted`] is the canonical form. [`merge_sorted_elementwise`] runs
//! the same head phase and pushes the tail one record at a time; the two are
//! observably identical.

use layout_core::generators::validate_strictly_increasing;
use layout_core::RecordStore;

/// Head phase shared by both merge forms.
///
/// Returns the positions at which `left` and `right` stopped. At least one
/// of them is exhausted.
#[inline]
fn merge_heads<S: RecordStore>(left: &S, right: &S, out: &mut S) -> (usize, usize) {
    let (n1, n2) = (left.len(), right.len());
    let (mut i, mut j) = (0, 0);
    while i < n1 && j < n2 {
        if left.key(i) <= right.key(j) {
            out.push(left.get(i));
            i += 1;
        } else {
            out.push(right.get(j));
            j += 1;
        }
    }
    (i, j)
}

#[inline]
fn debug_check_inputs<S: RecordStore>(left: &S, right: &S) {
    debug_assert!(
        validate_strictly_increasing(left).is_ok(),
        "left merge input is not strictly increasing"
    );
    debug_assert!(
        validate_strictly_increasing(right).is_ok(),
        "right merge input is not strictly increasing"
    );
}

/// Merges two stores sorted on `a` into one, with a bulk-copy tail.
///
/// Output length is `left.len() + right.len()`. The output is sorted on `a`
/// whenever both inputs are.
///
/// # Examples
/// ```
/// use layout_core::generators::generate_sorted;
/// use layout_patterns::merge_sorted;
///
/// let (_, evens) = generate_sorted(3, 0);
/// let (_, odds) = generate_sorted(3, 1);
/// let merged = merge_sorted(&evens, &odds);
/// assert_eq!(merged.a(), &[0, 1, 2, 3, 4, 5]);
/// ```
pub fn merge_sorted<S: RecordStore>(left: &S, right: &S) -> S {
    debug_check_inputs(left, right);

    let mut out = S::with_capacity(left.len() + right.len());
    let (i, j) = merge_heads(left, right, &mut out);

    // Only one of these is non-empty.
    out.extend_from_tail(left, i);
    out.extend_from_tail(right, j);
    out
}

/// Same merge as [`merge_sorted`], with the tail appended record by record.
pub fn merge_sorted_elementwise<S: RecordStore>(left: &S, right: &S) -> S {
    debug_check_inputs(left, right);

    let mut out = S::with_capacity(left.len() + right.len());
    let (i, j) = merge_heads(left, right, &mut out);

    for k in i..left.len() {
        out.push(left.get(k));
    }
    for k in j..right.len() {
        out.push(right.get(k));
    }
    out
}
