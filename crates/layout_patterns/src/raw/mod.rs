//! Raw pattern variants.
//!
//! Same semantics as the facade patterns, implemented per layout with direct
//! pointer arithmetic instead of bounds-checked iteration, and with
//! `ptr::copy_nonoverlapping` for bulk tails. Every function here returns
//! exactly what its facade counterpart returns for the same input.
//!
//! - `aos`: pointer walks over the contiguous `Record` array
//! - `soa`: pointer walks over the three columns in lockstep
//!
//! Filter and merge write into capacity reserved up front for the worst
//! case, then fix the length once with `set_len`.

pub mod aos;
pub mod soa;
