//! Auxiliary-prime embedding, FIPS 186-4 Appendix C.9
//! (`generateProbablePrimeWithAuxiliaryPrimes`).
//!
//! Referenced but not implemented anywhere in the available reference
//! sources (`RSA.py::generateProbablePrimeWithAuxiliaryPrimes` is called
//! from `test_rsa.py` but its definition is missing); built directly from
//! the standard's own Appendix C.9 algorithmic text. Shared by both the
//! provable (B.3.4) and probable (B.3.5/B.3.6) with-auxiliary-primes
//! constructions — they differ only in how `p1`/`p2` are produced before
//! calling this.

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::One;
use zeroize::Zeroizing;

use crate::arithmetic::{egcd, gcd};
use crate::error::{Error, Result};
use crate::random::RandomSource;

use super::sqrt2_threshold;
use super::zeroize_big::ZeroizeBigUint;

fn crt2(r1: &BigUint, m1: &BigUint, r2: &BigUint, m2: &BigUint) -> BigUint {
    let m1i = BigInt::from(m1.clone());
    let m2i = BigInt::from(m2.clone());
    let r1i = BigInt::from(r1.clone());
    let r2i = BigInt::from(r2.clone());

    let (_, x, _) = egcd(&m1i, &m2i);
    let x = x.mod_floor(&m2i);
    let delta = (&r2i - &r1i).mod_floor(&m2i);
    let k = (&delta * &x).mod_floor(&m2i);
    let r = &r1i + &m1i * &k;

    r.mod_floor(&(&m1i * &m2i)).to_biguint().expect("CRT result reduced mod a positive modulus is nonnegative")
}

/// Embeds auxiliary primes `p1`, `p2` into a prime `Y` of bit length
/// `n_bits / 2` with `Y ≡ 1 (mod p1)`, `Y ≡ -1 (mod p2)`. `X` is the
/// unreduced random draw that produced `Y` — the `Xp`/`Xq` witness RSA's
/// `|Xp - Xq|` separation requirement is checked against — and is secret
/// per the same witness-scrubbing rule as the seeds it was drawn from, so
/// it's returned zeroizing rather than as a plain `BigUint`.
pub fn embed_auxiliary_primes<R: RandomSource>(
    rng: &mut R,
    p1: &BigUint,
    p2: &BigUint,
    n_bits: u32,
    e: &BigUint,
    test_count: usize,
) -> Result<(BigUint, Zeroizing<ZeroizeBigUint>)> {
    let two_p1 = BigUint::from(2u32) * p1;
    if gcd(&two_p1, p2) != BigUint::one() {
        return Err(Error::BadParameters("gcd(2*p1, p2) must be 1".to_string()));
    }

    let r = crt2(&BigUint::one(), &two_p1, &(p2 - 1u32), p2);

    let half = (n_bits / 2) as usize;
    let threshold = sqrt2_threshold(n_bits / 2);
    let upper_x = (BigUint::one() << half) - 1u32;
    let upper_y = BigUint::one() << half;
    let two_p1_p2 = &two_p1 * p2;

    let range = &upper_x - &threshold + 1u32;
    let r_int = BigInt::from(r.clone());
    let m_int = BigInt::from(two_p1_p2.clone());

    let x0 = &threshold + rng.random_below(&range);
    let mut y = &x0 + (&r_int - BigInt::from(x0.clone()))
        .mod_floor(&m_int)
        .to_biguint()
        .expect("CRT delta reduced mod a positive modulus is nonnegative");
    let mut x = Zeroizing::new(ZeroizeBigUint::from(x0));
    let max_iters = 5u64 * half as u64;
    let mut iters = 0u64;

    loop {
        if y >= upper_y {
            let redraw = &threshold + rng.random_below(&range);
            y = &redraw + (&r_int - BigInt::from(redraw.clone()))
                .mod_floor(&m_int)
                .to_biguint()
                .expect("CRT delta reduced mod a positive modulus is nonnegative");
            x = Zeroizing::new(ZeroizeBigUint::from(redraw));
        } else if gcd(&(&y - 1u32), e) == BigUint::one()
            && crate::primality::miller_rabin(rng, &y, test_count)
        {
            return Ok((y, x));
        } else {
            y += &two_p1_p2;
        }

        iters += 1;
        if iters >= max_iters {
            log::debug!("auxiliary-prime embedding exceeded its iteration bound");
            return Err(Error::GenerationFailed(
                "auxiliary-prime embedding exceeded its iteration bound",
            ));
        }
        log::debug!("auxiliary-prime embedding candidate rejected, iteration {}", iters);
    }
}
