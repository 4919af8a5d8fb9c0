//! DSA probable-primes construction and verification, FIPS 186-4 A.1.1.2
//! / A.1.1.3.
//!
//! Grounded on `Asymmetric/DSA.py::generateProbablePrimes` /
//! `verifyProbablePrimesGenerationResult`, generalized to take the
//! Miller-Rabin round counts from the key-size policy table instead of a
//! hardcoded `10`, to run a single Lucas test after the Miller-Rabin
//! battery, and restructured to take an explicit [`StopToken`] on the
//! outer loop (the reference version never terminates on its own).

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::arithmetic::{bytes_to_int, int_to_bytes, ByteOrder};
use crate::cancel::StopToken;
use crate::error::{Error, Result};
use crate::hash::HashAlgorithm;
use crate::keysize::{dsa_miller_rabin_counts, ffc_security_level};
use crate::primality::{lucas_test, miller_rabin};
use crate::random::RandomSource;

use super::types::{Primes, ProbablePrimesResult};

fn n_and_b(l: usize, outlen: usize) -> (usize, usize) {
    let n = if l % outlen == 0 { l / outlen - 1 } else { l / outlen };
    let b = l - 1 - n * outlen;
    (n, b)
}

/// Generates a probable DSA prime pair `(p, q)` of bit lengths `(L, N)`
/// with an `outlen >= N` hash, per FIPS 186-4 A.1.1.2. The outer loop
/// re-seeds `q` and retries indefinitely on a failed `p` search; `stop`
/// is checked once per outer iteration so a caller can bound the search.
pub fn generate_probable_primes<H: HashAlgorithm, R: RandomSource>(
    rng: &mut R,
    n_bits: u32,
    l_bits: u32,
    seed_length: usize,
    stop: StopToken,
) -> Result<ProbablePrimesResult> {
    if ffc_security_level(n_bits, l_bits) == 0 {
        return Err(Error::BadParameters(format!(
            "(N={}, L={}) is not an approved FFC pair",
            n_bits, l_bits
        )));
    }
    if seed_length < n_bits as usize {
        return Err(Error::BadParameters("seedLength must be >= N".to_string()));
    }
    let outlen = H::outlen();
    if outlen < n_bits as usize {
        return Err(Error::BadParameters("hash outlen must be >= N".to_string()));
    }

    let l = l_bits as usize;
    let (n, b) = n_and_b(l, outlen);
    let (q_tests, p_tests) = dsa_miller_rabin_counts(n_bits, l_bits);

    let two_pow_n_min_1 = BigUint::one() << (n_bits as usize - 1);
    let two_pow_seed_length = BigUint::one() << seed_length;
    let two_pow_l_min_1 = BigUint::one() << (l - 1);
    let two_pow_b = BigUint::one() << b;

    loop {
        if stop() {
            return Err(Error::GenerationFailed("cancelled"));
        }

        let (domain_parameter_seed, q) =
            find_q::<H, R>(rng, seed_length, &two_pow_n_min_1, q_tests as usize, stop)?;

        let two_q = BigUint::from(2u32) * &q;
        let mut offset: u64 = 1;

        for counter in 0..(4 * l as u64) {
            if stop() {
                return Err(Error::GenerationFailed("cancelled"));
            }

            let x = build_candidate::<H>(
                &domain_parameter_seed,
                offset,
                n,
                outlen,
                &two_pow_seed_length,
                &two_pow_b,
                &two_pow_l_min_1,
            );
            let c = &x % &two_q;
            let p = (&x - &c) + 1u32;

            if p >= two_pow_l_min_1 && miller_rabin(rng, &p, p_tests as usize) && lucas_test(&p) {
                return Ok(ProbablePrimesResult {
                    primes: Primes { p, q },
                    domain_parameter_seed,
                    counter,
                });
            }
            offset += n as u64 + 1;
        }

        log::debug!("p search exhausted its counter bound, re-seeding q");
    }
}

fn find_q<H: HashAlgorithm, R: RandomSource>(
    rng: &mut R,
    seed_length: usize,
    two_pow_n_min_1: &BigUint,
    q_tests: usize,
    stop: StopToken,
) -> Result<(BigUint, BigUint)> {
    loop {
        if stop() {
            return Err(Error::GenerationFailed("cancelled"));
        }
        let seed = rng.random_bits(seed_length) | (BigUint::one() << (seed_length - 1));
        let digest = H::hash(&int_to_bytes(&seed, 0, ByteOrder::Big));
        let u = bytes_to_int(&digest, ByteOrder::Big) % two_pow_n_min_1;
        let parity = &u % 2u32;
        let q = two_pow_n_min_1 + &u + 1u32 - parity;
        if miller_rabin(rng, &q, q_tests) && lucas_test(&q) {
            return Ok((seed, q));
        }
        log::debug!("candidate q failed primality, drawing a new seed");
    }
}

#[allow(clippy::too_many_arguments)]
fn build_candidate<H: HashAlgorithm>(
    domain_parameter_seed: &BigUint,
    offset: u64,
    n: usize,
    outlen: usize,
    two_pow_seed_length: &BigUint,
    two_pow_b: &BigUint,
    two_pow_l_min_1: &BigUint,
) -> BigUint {
    let mut w = BigUint::zero();
    for j in 0..n {
        let payload = int_to_bytes(
            &((domain_parameter_seed + offset + j as u64) % two_pow_seed_length),
            0,
            ByteOrder::Big,
        );
        let v = bytes_to_int(&H::hash(&payload), ByteOrder::Big);
        w += v << (j * outlen);
    }
    let payload = int_to_bytes(
        &((domain_parameter_seed + offset + n as u64) % two_pow_seed_length),
        0,
        ByteOrder::Big,
    );
    let v = bytes_to_int(&H::hash(&payload), ByteOrder::Big) % two_pow_b;
    w += v << (n * outlen);

    w + two_pow_l_min_1
}

/// Verifies a [`ProbablePrimesResult`] by retracing the generation and
/// checking that `counter` is the first index at which a valid `p` was
/// produced from `domain_parameter_seed`, per FIPS 186-4 A.1.1.3.
pub fn verify_probable_primes_generation_result<H: HashAlgorithm>(
    result: &ProbablePrimesResult,
) -> bool {
    let p = &result.primes.p;
    let q = &result.primes.q;
    let domain_parameter_seed = &result.domain_parameter_seed;
    let counter = result.counter;

    let n_bits = q.bits() as u32;
    let l_bits = p.bits() as u32;
    if ffc_security_level(n_bits, l_bits) == 0 {
        log::debug!("reject 1: (N, L) is not an approved FFC pair");
        return false;
    }
    if counter > 4 * (l_bits as u64) - 1 {
        log::debug!("reject 2: counter exceeds 4L - 1");
        return false;
    }

    let seed_length = domain_parameter_seed.bits() as usize;
    if seed_length < n_bits as usize {
        log::debug!("reject 3: seedLength is shorter than N");
        return false;
    }

    let outlen = H::outlen();
    let two_pow_n_min_1 = BigUint::one() << (n_bits as usize - 1);
    let digest = H::hash(&int_to_bytes(domain_parameter_seed, 0, ByteOrder::Big));
    let u = bytes_to_int(&digest, ByteOrder::Big) % &two_pow_n_min_1;
    let parity = &u % 2u32;
    let computed_q = &two_pow_n_min_1 + &u + 1u32 - parity;
    if &computed_q != q || !trial_and_probabilistic_prime(&computed_q) {
        log::debug!("reject 4: recomputed q does not match or is not prime");
        return false;
    }

    let l = l_bits as usize;
    let (n, b) = n_and_b(l, outlen);
    let two_pow_seed_length = BigUint::one() << seed_length;
    let two_pow_b = BigUint::one() << b;
    let two_pow_l_min_1 = BigUint::one() << (l - 1);
    let two_q = BigUint::from(2u32) * q;
    let mut offset: u64 = 1;

    for i in 0..=counter {
        let x = build_candidate::<H>(
            domain_parameter_seed,
            offset,
            n,
            outlen,
            &two_pow_seed_length,
            &two_pow_b,
            &two_pow_l_min_1,
        );
        let c = &x % &two_q;
        let computed_p = (&x - &c) + 1u32;

        if computed_p < two_pow_l_min_1 {
            offset += n as u64 + 1;
            continue;
        }

        if trial_and_probabilistic_prime(&computed_p) {
            if i == counter && &computed_p == p {
                return true;
            }
            log::debug!("reject 5: first valid p does not match the claimed counter/value");
            return false;
        }
        offset += n as u64 + 1;
    }

    log::debug!("reject 6: no valid p found up to the claimed counter");
    false
}

fn trial_and_probabilistic_prime(n: &BigUint) -> bool {
    use crate::random::OsRandomSource;
    let mut rng = OsRandomSource::default();
    miller_rabin(&mut rng, n, 10) && lucas_test(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cancel::never;
    use crate::hash::Sha256;
    use crate::random::RngSource;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn generated_result_verifies() {
        let mut rng = RngSource(StdRng::seed_from_u64(0x5EED));
        let result =
            generate_probable_primes::<Sha256, _>(&mut rng, 160, 1024, 160, never()).unwrap();
        assert_eq!(result.primes.q.bits() as u32, 160);
        assert_eq!(result.primes.p.bits() as u32, 1024);
        assert_eq!((&result.primes.p - 1u32) % &result.primes.q, BigUint::zero());
        assert!(verify_probable_primes_generation_result::<Sha256>(&result));
    }

    #[test]
    fn tampered_counter_fails_verification() {
        let mut rng = RngSource(StdRng::seed_from_u64(0xF00D));
        let mut result =
            generate_probable_primes::<Sha256, _>(&mut rng, 160, 1024, 160, never()).unwrap();
        result.counter += 1;
        assert!(!verify_probable_primes_generation_result::<Sha256>(&result));
    }

    #[test]
    fn rejects_unapproved_pair() {
        let mut rng = RngSource(StdRng::seed_from_u64(1));
        let err = generate_probable_primes::<Sha256, _>(&mut rng, 161, 1024, 161, never())
            .unwrap_err();
        assert!(matches!(err, Error::BadParameters(_)));
    }
}
