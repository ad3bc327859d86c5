//! Error types for fixture construction and validation.
//!
//! Hot paths never return these: a broken invariant inside an access pattern
//! panics. `LayoutError` is only produced where stores are assembled from
//! external parts or where generated fixtures are validated before timing.

use thiserror::Error;

/// Errors from building or validating a store.
///
/// # Variants
/// - `LengthMismatch`: Parallel columns disagree on length
/// - `NotStrictlyIncreasing`: A merge input is not strictly increasing in `a`
/// - `BufferLength`: An output buffer does not match the store length
///
/// # Examples
/// ```
/// use layout_core::LayoutError;
///
/// let err = LayoutError::LengthMismatch { a: 3, b: 3, c: 2 };
/// assert_eq!(
///     format!("{}", err),
///     "Column length mismatch: a=3, b=3, c=2"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The three columns do not have the same length.
    #[error("Column length mismatch: a={a}, b={b}, c={c}")]
    LengthMismatch {
        /// Length of column `a`
        a: usize,
        /// Length of column `b`
        b: usize,
        /// Length of column `c`
        c: usize,
    },

    /// Field `a` does not strictly increase at `index`.
    #[error("Key not strictly increasing at index {index}: {previous} then {current}")]
    NotStrictlyIncreasing {
        /// Index of the offending record
        index: usize,
        /// Key of the record before it
        previous: i32,
        /// Key of the offending record
        current: i32,
    },

    /// An output buffer has the wrong length.
    #[error("Buffer length mismatch: expected {expected}, got {actual}")]
    BufferLength {
        /// Required length
        expected: usize,
        /// Provided length
        actual: usize,
    },
}
