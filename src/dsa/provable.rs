//! DSA provable-primes construction and verification, FIPS 186-4
//! A.1.2.1.2 / A.1.2.2.
//!
//! No reference implementation for this path was available; built
//! directly from the standard's own algorithmic text, chaining three
//! [`shawe_taylor`] calls the way FIPS 186-4 chains them (`q` from
//! `firstSeed`, `p0` from `qSeed`, then `p` built on top of `q*p0`), using
//! the same hash-concatenation witness trick as the Shawe-Taylor
//! recursive case.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::arithmetic::gcd;
use crate::error::{Error, Result};
use crate::hash::HashAlgorithm;
use crate::keysize::ffc_security_level;
use crate::primality::{ceil_div, hash_block, shawe_taylor};

use super::types::{Primes, ProvablePrimesResult};

/// Generates a provable DSA prime pair `(p, q)` of bit lengths `(L, N)`
/// from `first_seed`, per FIPS 186-4 A.1.2.1.2. Deterministic: equal
/// `(N, L, first_seed, H)` always produce an equal result.
pub fn generate_provable_primes<H: HashAlgorithm>(
    n_bits: u32,
    l_bits: u32,
    first_seed: &BigUint,
) -> Result<ProvablePrimesResult> {
    if ffc_security_level(n_bits, l_bits) == 0 {
        return Err(Error::BadParameters(format!(
            "(N={}, L={}) is not an approved FFC pair",
            n_bits, l_bits
        )));
    }
    let min_seed = BigUint::one() << (n_bits as usize - 1);
    if first_seed < &min_seed {
        return Err(Error::BadParameters(
            "firstSeed must be >= 2^(N-1)".to_string(),
        ));
    }

    let outlen = H::outlen();
    let l = l_bits as usize;

    let q_result = shawe_taylor::<H>(n_bits as usize, first_seed);
    if !q_result.ok {
        return Err(Error::GenerationFailed("q construction exhausted its counter bound"));
    }
    let q = q_result.prime;
    let q_seed = q_result.prime_seed;
    let q_gen_counter = q_result.prime_gen_counter;

    let p0_length = (l + 1) / 2 + 1;
    let p0_result = shawe_taylor::<H>(p0_length, &q_seed);
    if !p0_result.ok {
        return Err(Error::GenerationFailed("p0 construction exhausted its counter bound"));
    }
    let p0 = p0_result.prime;
    let mut p_seed = p0_result.prime_seed;
    let old_counter = p0_result.prime_gen_counter;

    let iters = (l + outlen - 1) / outlen - 1;

    let mut x = hash_block::<H>(&p_seed, iters);
    p_seed += (iters as u64) + 1;
    let lower = BigUint::one() << (l - 1);
    x = &lower + (&x % &lower);

    let two_q_p0 = BigUint::from(2u32) * &q * &p0;
    let mut t = ceil_div(&x, &two_q_p0);

    let mut p_gen_counter = old_counter;
    let upper = BigUint::one() << l;

    loop {
        let candidate = (BigUint::from(2u32) * &t * &q * &p0) + 1u32;
        if candidate > upper {
            t = ceil_div(&lower, &two_q_p0);
        }
        let p = (BigUint::from(2u32) * &t * &q * &p0) + 1u32;
        p_gen_counter += 1;

        let a_raw = hash_block::<H>(&p_seed, iters);
        p_seed += (iters as u64) + 1;
        let p_minus_3 = &p - 3u32;
        let a = BigUint::from(2u32) + (&a_raw % &p_minus_3);

        let two_t_q = BigUint::from(2u32) * &t * &q;
        let z = a.modpow(&two_t_q, &p);

        let z_minus_1 = if z.is_zero() { &p - 1u32 } else { &z - 1u32 };
        if gcd(&z_minus_1, &p) == BigUint::one() && z.modpow(&p0, &p) == BigUint::one() {
            return Ok(ProvablePrimesResult {
                primes: Primes { p, q },
                first_seed: first_seed.clone(),
                p_seed,
                q_seed,
                p_gen_counter,
                q_gen_counter,
            });
        }

        if p_gen_counter >= 4 * (l as u64) + old_counter {
            log::debug!("p construction exhausted its counter bound");
            return Err(Error::GenerationFailed("p construction exhausted its counter bound"));
        }
        t += 1u32;
    }
}

/// Re-runs generation from `result.first_seed` and accepts iff every
/// produced value matches the supplied result bit-for-bit.
pub fn verify_provable_primes_generation_result<H: HashAlgorithm>(
    result: &ProvablePrimesResult,
) -> bool {
    let n_bits = result.primes.q.bits() as u32;
    let l_bits = result.primes.p.bits() as u32;
    match generate_provable_primes::<H>(n_bits, l_bits, &result.first_seed) {
        Ok(recomputed) => {
            let matches = recomputed == *result;
            if !matches {
                log::debug!("recomputed provable-primes result does not match the claimed one");
            }
            matches
        }
        Err(_) => {
            log::debug!("reconstructing from firstSeed failed during verification");
            false
        }
    }
}
