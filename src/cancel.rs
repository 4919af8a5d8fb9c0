//! Cooperative cancellation for the unbounded search loops.
//!
//! The DSA probable-primes outer loop never fails spontaneously (FIPS has
//! it re-seed and retry forever), and a few RSA rejection loops are
//! bounded only by a FIPS-prescribed iteration count large enough to be
//! impractical to wait out. Both accept a stop token checked once per
//! outer iteration, as a plain function argument rather than global
//! mutable state.

/// Checked once per outer loop iteration; returning `true` aborts the
/// search with [`crate::error::Error::GenerationFailed`].
pub type StopToken<'a> = &'a dyn Fn() -> bool;

/// A token that never requests a stop, for callers that don't need
/// cancellation.
pub fn never() -> StopToken<'static> {
    &|| false
}
