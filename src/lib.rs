//! A FIPS 186-4 prime-generation and domain-parameter engine.
//!
//! Covers the primality tests of Appendix C (Miller-Rabin, strong Lucas,
//! trial division, deterministic Shawe-Taylor construction), the DSA
//! domain-parameter constructions of Appendix A (probable and provable
//! prime pairs, unverifiable and verifiable generator-`g`), and the RSA
//! prime-pair constructions of Appendix B (provable, probable, and the
//! with-auxiliary-primes variants built on the Appendix C.9 embedding).
//!
//! Built on `num-bigint`/`num-integer`/`num-traits` for arbitrary
//! precision, `digest`/`sha1`/`sha2` for the hash functions the standard
//! requires, and `rand` behind a small [`random::RandomSource`]
//! abstraction so deterministic tests and the Shawe-Taylor constructive
//! path (which takes an explicit seed instead) compose cleanly with it.
//!
//! The crate is a pure, single-threaded library: no I/O, no global
//! mutable state, no signing or verification of messages. Verification
//! here means checking that a generation result could have been produced
//! honestly, not validating a signature.

pub mod arithmetic;
pub mod cancel;
pub mod dsa;
pub mod error;
pub mod hash;
pub mod keysize;
pub mod primality;
pub mod random;
pub mod rsa;

pub use error::{Error, Result};
