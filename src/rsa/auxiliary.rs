//! Auxiliary-prime production for the with-auxiliary-primes RSA
//! constructions, FIPS 186-4 Appendix B.3.4/B.3.5/B.3.6.
//!
//! `test_rsa.py::testGenerateProbablePrimesWithAuxiliaryPrimes` chains two
//! `shaweTaylor` calls (`p2`'s seed is `p1`'s output seed) before handing
//! the pair to the C.9 embedding — [`aux_primes_provable`] follows that
//! exactly. [`aux_primes_probable`] is the B.3.6 alternative: plain
//! rejection-sampled odd candidates instead of a deterministic
//! construction.

use num_bigint::BigUint;
use num_traits::One;
use zeroize::Zeroizing;

use crate::error::{Error, Result};
use crate::hash::HashAlgorithm;
use crate::primality::{miller_rabin, shawe_taylor};
use crate::random::RandomSource;

use super::zeroize_big::ZeroizeBigUint;

/// Produces `(p1, p2, next_seed)` deterministically via chained
/// Shawe-Taylor calls, FIPS 186-4 B.3.4/B.3.5. `p2` is constructed from
/// the seed `p1` leaves behind; `next_seed` is the seed `p2` leaves
/// behind, for chaining into a subsequent call (e.g. producing `q1, q2`
/// after `p1, p2`). All three are secret witness material held zeroizing
/// until the caller extracts a plain value from them.
pub fn aux_primes_provable<H: HashAlgorithm>(
    seed: &BigUint,
    p1_len: usize,
    p2_len: usize,
) -> Result<(Zeroizing<ZeroizeBigUint>, Zeroizing<ZeroizeBigUint>, Zeroizing<ZeroizeBigUint>)> {
    let p1_result = shawe_taylor::<H>(p1_len, seed);
    if !p1_result.ok {
        return Err(Error::GenerationFailed("p1 construction exhausted its counter bound"));
    }
    let p2_result = shawe_taylor::<H>(p2_len, &p1_result.prime_seed);
    if !p2_result.ok {
        return Err(Error::GenerationFailed("p2 construction exhausted its counter bound"));
    }
    Ok((
        Zeroizing::new(ZeroizeBigUint::from(p1_result.prime)),
        Zeroizing::new(ZeroizeBigUint::from(p2_result.prime)),
        Zeroizing::new(ZeroizeBigUint::from(p2_result.prime_seed)),
    ))
}

/// Produces `(p1, p2)` by rejection-sampling odd candidates of the
/// required bit lengths until each passes `checks` rounds of
/// Miller-Rabin, FIPS 186-4 B.3.6.
pub fn aux_primes_probable<R: RandomSource>(
    rng: &mut R,
    p1_len: usize,
    p2_len: usize,
    checks: usize,
) -> (Zeroizing<ZeroizeBigUint>, Zeroizing<ZeroizeBigUint>) {
    let p1 = probable_candidate(rng, p1_len, checks);
    let p2 = probable_candidate(rng, p2_len, checks);
    (Zeroizing::new(ZeroizeBigUint::from(p1)), Zeroizing::new(ZeroizeBigUint::from(p2)))
}

fn probable_candidate<R: RandomSource>(rng: &mut R, bit_len: usize, checks: usize) -> BigUint {
    let top_bit = BigUint::one() << (bit_len - 1);
    loop {
        let candidate = rng.random_bits(bit_len) | &top_bit | BigUint::one();
        if miller_rabin(rng, &candidate, checks) {
            return candidate;
        }
    }
}
