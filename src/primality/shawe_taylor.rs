//! Deterministic constructive prime generation, FIPS 186-4 Appendix C.6.
//!
//! Grounded on `ptCrypt/Math/primality.py::shaweTaylor`. Unlike
//! Miller-Rabin/Lucas this takes no randomness at all — the output is a
//! pure function of `(length, inputSeed, H)`, which is what makes the
//! DSA/RSA provable-primes paths reproducible and verifiable.
//!
//! The `n`/`t` formulas below always use the ceiling form, never the
//! boolean-addition approximation some source revisions use.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::arithmetic::{bytes_to_int, gcd, int_to_bytes, ByteOrder};
use crate::hash::HashAlgorithm;
use crate::primality::trial_division::trial_division;

/// Result of a Shawe-Taylor construction. `ok = false` means the
/// FIPS-prescribed iteration bound was exhausted without finding a
/// witness; `prime`/`prime_seed`/`prime_gen_counter` are meaningless in
/// that case.
#[derive(Debug, Clone)]
pub struct ShaweTaylorResult {
    pub ok: bool,
    pub prime: BigUint,
    pub prime_seed: BigUint,
    pub prime_gen_counter: u64,
}

impl ShaweTaylorResult {
    fn failure() -> Self {
        ShaweTaylorResult {
            ok: false,
            prime: BigUint::zero(),
            prime_seed: BigUint::zero(),
            prime_gen_counter: 0,
        }
    }
}

pub(crate) fn ceil_div(a: &BigUint, b: &BigUint) -> BigUint {
    let (q, r) = a.div_rem(b);
    if r.is_zero() {
        q
    } else {
        q + 1u32
    }
}

pub(crate) fn hash_at(seed: &BigUint, offset: u64) -> Vec<u8> {
    int_to_bytes(&(seed + offset), 0, ByteOrder::Big)
}

/// Concatenates `H(seed+i)` for `i` in `0..=iters` into a single big
/// integer: `x = sum_i H(seed+i) * 2^(i*outlen)`, matching the standard's
/// `Hash(seed) || Hash(seed+1) || ...` byte-string building blocks read as
/// one big-endian integer.
pub(crate) fn hash_block<H: HashAlgorithm>(seed: &BigUint, iters: usize) -> BigUint {
    let outlen = H::outlen();
    let mut x = BigUint::zero();
    for i in 0..=iters {
        let digest = H::hash(&hash_at(seed, i as u64));
        let word = bytes_to_int(&digest, ByteOrder::Big);
        x += word << (i * outlen);
    }
    x
}

/// Runs the Shawe-Taylor algorithm for a prime of exactly `length` bits,
/// starting from `input_seed`.
pub fn shawe_taylor<H: HashAlgorithm>(length: usize, input_seed: &BigUint) -> ShaweTaylorResult {
    if length < 2 {
        return ShaweTaylorResult::failure();
    }

    if length < 33 {
        return shawe_taylor_base::<H>(length, input_seed);
    }

    let smaller_length = (length + 1) / 2 + 1;
    let inner = shawe_taylor::<H>(smaller_length, input_seed);
    if !inner.ok {
        return ShaweTaylorResult::failure();
    }
    let c0 = inner.prime;
    let old_counter = inner.prime_gen_counter;
    let mut prime_seed = inner.prime_seed;

    let outlen = H::outlen();
    let iters = (length + outlen - 1) / outlen - 1;

    let mut x = hash_block::<H>(&prime_seed, iters);
    prime_seed += (iters as u64) + 1;

    let lower = BigUint::one() << (length - 1);
    x = &lower + (&x % &lower);

    let two_c0 = BigUint::from(2u32) * &c0;
    let mut t = ceil_div(&x, &two_c0);

    let mut counter = old_counter;
    let upper = BigUint::one() << length;

    loop {
        let candidate = (BigUint::from(2u32) * &t * &c0) + 1u32;
        if candidate > upper {
            t = ceil_div(&lower, &two_c0);
        }

        let c = (BigUint::from(2u32) * &t * &c0) + 1u32;
        counter += 1;

        let mut a = hash_block::<H>(&prime_seed, iters);
        prime_seed += (iters as u64) + 1;
        let c_minus_3 = &c - 3u32;
        a = BigUint::from(2u32) + (&a % &c_minus_3);

        let two_t = BigUint::from(2u32) * &t;
        let z = a.modpow(&two_t, &c);

        let z_minus_1 = if z.is_zero() { &c - 1u32 } else { &z - 1u32 };
        if gcd(&z_minus_1, &c) == BigUint::one() && z.modpow(&c0, &c) == BigUint::one() {
            return ShaweTaylorResult {
                ok: true,
                prime: c,
                prime_seed,
                prime_gen_counter: counter,
            };
        }

        if counter >= 4 * (length as u64) + old_counter {
            log::debug!("shawe_taylor: counter bound exhausted at length {}", length);
            return ShaweTaylorResult::failure();
        }
        t += 1u32;
    }
}

fn shawe_taylor_base<H: HashAlgorithm>(length: usize, input_seed: &BigUint) -> ShaweTaylorResult {
    let mut prime_seed = input_seed.clone();
    let mut counter: u64 = 0;
    let lower = BigUint::one() << (length - 1);

    loop {
        let h0 = H::hash(&hash_at(&prime_seed, 0));
        let h1 = H::hash(&hash_at(&prime_seed, 1));
        let xored: Vec<u8> = h0.iter().zip(h1.iter()).map(|(a, b)| a ^ b).collect();
        let mut c = bytes_to_int(&xored, ByteOrder::Big);

        c = &lower + (&c % &lower);
        if c.is_even() {
            c += 1u32;
        }

        counter += 1;
        prime_seed += 2u32;

        if trial_division(&c) {
            return ShaweTaylorResult {
                ok: true,
                prime: c,
                prime_seed,
                prime_gen_counter: counter,
            };
        }

        if counter > 4 * (length as u64) {
            log::debug!("shawe_taylor_base: counter bound exhausted at length {}", length);
            return ShaweTaylorResult::failure();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::Sha256;
    use crate::primality::miller_rabin::miller_rabin;
    use crate::random::RngSource;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn deterministic_for_equal_inputs() {
        let seed = BigUint::from(0xDEADBEEFu64);
        let a = shawe_taylor::<Sha256>(160, &seed);
        let b = shawe_taylor::<Sha256>(160, &seed);
        assert!(a.ok && b.ok);
        assert_eq!(a.prime, b.prime);
        assert_eq!(a.prime_seed, b.prime_seed);
        assert_eq!(a.prime_gen_counter, b.prime_gen_counter);
    }

    #[test]
    fn output_is_prime_by_miller_rabin() {
        let seed = BigUint::from(0x1234_5678_9ABC_DEF0u64);
        let result = shawe_taylor::<Sha256>(256, &seed);
        assert!(result.ok);
        let mut rng = RngSource(StdRng::seed_from_u64(99));
        assert!(miller_rabin(&mut rng, &result.prime, 64));
    }

    #[test]
    fn output_has_requested_bit_length() {
        let seed = BigUint::from(7u32);
        let result = shawe_taylor::<Sha256>(512, &seed);
        assert!(result.ok);
        assert_eq!(result.prime.bits() as usize, 512);
    }

    #[test]
    fn rejects_length_below_two() {
        let seed = BigUint::from(1u32);
        let result = shawe_taylor::<Sha256>(1, &seed);
        assert!(!result.ok);
    }

    #[test]
    fn different_seeds_give_different_primes() {
        let a = shawe_taylor::<Sha256>(160, &BigUint::from(1u32));
        let b = shawe_taylor::<Sha256>(160, &BigUint::from(2u32));
        assert!(a.ok && b.ok);
        assert_ne!(a.prime, b.prime);
    }
}
