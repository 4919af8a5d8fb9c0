//! RSA probable prime-pair construction, FIPS 186-4 Appendix B.3.3.
//!
//! Grounded on `ptCrypt/Asymmetric/RSA.py::generateProbablePrimes`,
//! including its `665857/470832` rational approximation of `sqrt(2)`.

use num_bigint::BigUint;
use num_traits::One;

use crate::arithmetic::gcd;
use crate::error::{Error, Result};
use crate::keysize::ifc_miller_rabin_tests;
use crate::primality::miller_rabin;
use crate::random::RandomSource;

use super::types::RsaPrimePair;
use super::{validate_exponent, RSA_APPROVED_LENGTHS};

/// `sqrt(2) * 2^(half - 1)`, computed via the standard's own rational
/// approximation `665857/470832` rather than floating point.
fn sqrt2_threshold(half: u32) -> BigUint {
    (BigUint::from(665857u32) * (BigUint::one() << (half as usize - 1))) / BigUint::from(470832u32)
}

/// Generates a probable RSA prime pair `(p, q)` for a modulus of `n_bits`
/// bits and public exponent `e`. Aborts after `5 * n_bits/2` rejected
/// candidates per prime, matching the standard's bound on a search that
/// in practice never comes close to it.
pub fn generate_probable_primes<R: RandomSource>(
    rng: &mut R,
    e: &BigUint,
    n_bits: u32,
) -> Result<RsaPrimePair> {
    if !RSA_APPROVED_LENGTHS.contains(&n_bits) {
        return Err(Error::BadParameters(format!(
            "{} is not an approved RSA modulus length",
            n_bits
        )));
    }
    validate_exponent(e)?;

    let test_count = ifc_miller_rabin_tests(n_bits, false) as usize;
    let half = n_bits / 2;
    let threshold = sqrt2_threshold(half);
    let max_rejects = 5 * half as u64 / 2;

    let p = find_candidate(rng, half, &threshold, e, test_count, max_rejects, None)?;
    let min_sep = BigUint::one() << (half as usize - 100);
    let q = loop {
        let candidate = find_candidate(rng, half, &threshold, e, test_count, max_rejects, Some(&p))?;
        let diff = if p > candidate { &p - &candidate } else { &candidate - &p };
        if diff > min_sep {
            break candidate;
        }
    };

    Ok(RsaPrimePair { p, q })
}

fn find_candidate<R: RandomSource>(
    rng: &mut R,
    half: u32,
    threshold: &BigUint,
    e: &BigUint,
    test_count: usize,
    max_rejects: u64,
    separated_from: Option<&BigUint>,
) -> Result<BigUint> {
    let min_sep = BigUint::one() << (half as usize - 100);
    let mut rejects = 0u64;
    loop {
        let candidate = rng.random_bits(half as usize) | BigUint::one();

        if &candidate < threshold {
            rejects += 1;
        } else if let Some(other) = separated_from {
            let diff = if &candidate > other { &candidate - other } else { other - &candidate };
            if diff <= min_sep {
                rejects += 1;
            } else if gcd(&(&candidate - 1u32), e) == BigUint::one()
                && miller_rabin(rng, &candidate, test_count)
            {
                return Ok(candidate);
            } else {
                rejects += 1;
            }
        } else if gcd(&(&candidate - 1u32), e) == BigUint::one()
            && miller_rabin(rng, &candidate, test_count)
        {
            return Ok(candidate);
        } else {
            rejects += 1;
        }

        if rejects >= max_rejects {
            log::debug!("rsa probable prime search exceeded its rejection bound");
            return Err(Error::GenerationFailed(
                "probable RSA prime search exceeded its rejection bound",
            ));
        }
        log::debug!("rsa probable candidate rejected, bumping rejection counter to {}", rejects);
    }
}
