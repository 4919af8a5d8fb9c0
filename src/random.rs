//! Randomness abstraction.
//!
//! Every primality and prime-construction routine that needs fresh
//! randomness consumes it through this trait rather than calling
//! `OsRng` directly, so that tests (and the deterministic constructive
//! paths, which take an explicit seed instead) can inject a reproducible
//! stream. Mirrors the `Samplable` trait pattern from
//! `src/arithmetic/samplable.rs`, generalized so the generator is an
//! explicit capability instead of a hardcoded `OsRng`.

use num_bigint::{BigUint, RandBigInt};
use rand::rngs::OsRng;
use rand::RngCore;

/// A source of cryptographically meaningful random bits.
pub trait RandomSource {
    /// Returns a uniformly random nonnegative integer in `[0, 2^n)`.
    fn random_bits(&mut self, n: usize) -> BigUint;

    /// Returns a uniformly random nonnegative integer in `[0, upper)`.
    ///
    /// `upper` must be strictly positive.
    fn random_below(&mut self, upper: &BigUint) -> BigUint;

    /// Fills `buf` with random bytes.
    fn fill_bytes(&mut self, buf: &mut [u8]);
}

/// Default production randomness source, backed by the OS CSPRNG.
pub struct OsRandomSource(OsRng);

impl Default for OsRandomSource {
    fn default() -> Self {
        OsRandomSource(OsRng)
    }
}

impl RandomSource for OsRandomSource {
    fn random_bits(&mut self, n: usize) -> BigUint {
        if n == 0 {
            return BigUint::from(0u32);
        }
        self.0.gen_biguint(n as u64)
    }

    fn random_below(&mut self, upper: &BigUint) -> BigUint {
        self.0.gen_biguint_below(upper)
    }

    fn fill_bytes(&mut self, buf: &mut [u8]) {
        RngCore::fill_bytes(&mut self.0, buf)
    }
}

/// Wraps an arbitrary [`rand::RngCore`] (e.g. a seeded `StdRng`) so tests
/// can exercise the probable-primes search path with a reproducible
/// stream.
pub struct RngSource<R: RngCore>(pub R);

impl<R: RngCore> RandomSource for RngSource<R> {
    fn random_bits(&mut self, n: usize) -> BigUint {
        if n == 0 {
            return BigUint::from(0u32);
        }
        self.0.gen_biguint(n as u64)
    }

    fn random_below(&mut self, upper: &BigUint) -> BigUint {
        self.0.gen_biguint_below(upper)
    }

    fn fill_bytes(&mut self, buf: &mut [u8]) {
        RngCore::fill_bytes(&mut self.0, buf)
    }
}
