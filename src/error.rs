//! Error taxonomy for the FIPS 186-4 core.
//!
//! Verification is deliberately excluded from this enum: per the standard,
//! a verifier rejecting untrusted input is an expected outcome, not an
//! error, so every `verify_*` function returns a plain `bool`.

use thiserror::Error;

/// Failure modes a generator can report.
///
/// A generator either returns `Ok` with a fully-populated result struct or
/// one of these variants — never a partially-populated success.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Inputs violate a precondition of the algorithm (unapproved key
    /// size, a seed of the wrong bit length, an out-of-range public
    /// exponent, a hash whose output is too short, ...). Not retried
    /// internally.
    #[error("bad parameters: {0}")]
    BadParameters(String),

    /// The algorithm exhausted its FIPS-prescribed iteration bound without
    /// finding a witness (e.g. a Shawe-Taylor counter overflow, or a
    /// cancellation token firing). The caller may retry with a fresh seed.
    #[error("generation failed: {0}")]
    GenerationFailed(&'static str),

    /// An internal contract was violated (e.g. an odd modulus required
    /// for a Jacobi symbol, or a negative operand where none is allowed).
    /// This indicates a programmer bug in the caller, not bad luck.
    #[error("math domain error: {0}")]
    MathDomain(&'static str),
}

pub type Result<T> = core::result::Result<T, Error>;
