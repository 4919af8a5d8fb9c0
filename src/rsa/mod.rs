//! RSA prime-pair construction: provable, probable, and
//! with-auxiliary-primes variants, FIPS 186-4 Appendix B.3/C.9.

mod auxiliary;
mod embed;
mod probable;
mod provable;
mod seed;
mod types;
mod zeroize_big;

pub use auxiliary::{aux_primes_probable, aux_primes_provable};
pub use embed::embed_auxiliary_primes;
pub use probable::generate_probable_primes;
pub use provable::generate_provable_primes;
pub use seed::get_seed;
pub use types::RsaPrimePair;
pub use zeroize_big::ZeroizeBigUint;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;
use zeroize::Zeroizing;

use crate::error::{Error, Result};
use crate::hash::HashAlgorithm;
use crate::keysize::{auxiliary_prime_length_bounds, ifc_miller_rabin_tests};
use crate::random::RandomSource;

pub(crate) const RSA_APPROVED_LENGTHS: [u32; 3] = [1024, 2048, 3072];

pub(crate) fn validate_exponent(e: &BigUint) -> Result<()> {
    let lower = BigUint::one() << 16;
    let upper = BigUint::one() << 256;
    if e <= &lower || e >= &upper || e.is_even() {
        return Err(Error::BadParameters(
            "e must be odd with 2^16 < e < 2^256".to_string(),
        ));
    }
    Ok(())
}

/// `sqrt(2) * 2^(half - 1)`, via the standard's `665857/470832` rational
/// approximation. Shared by the probable-primes and auxiliary-embedding
/// constructions, both of which reject candidates below this bound.
pub(crate) fn sqrt2_threshold(half: u32) -> BigUint {
    (BigUint::from(665857u32) * (BigUint::one() << (half as usize - 1))) / BigUint::from(470832u32)
}

/// RSA prime-pair construction with auxiliary-prime conditions,
/// FIPS 186-4 B.3.4 (`use_provable_aux_primes = true`) / B.3.5
/// (`use_provable_aux_primes = false`). The two only differ in how the
/// auxiliary primes `p1, p2, q1, q2` are produced — see
/// [`aux_primes_provable`] and [`aux_primes_probable`] — both feed the
/// same [`embed_auxiliary_primes`] (C.9) construction.
pub fn generate_primes_with_conditions<H: HashAlgorithm, R: RandomSource>(
    rng: &mut R,
    e: &BigUint,
    n_bits: u32,
    seed: Option<&BigUint>,
    use_provable_aux_primes: bool,
) -> Result<RsaPrimePair> {
    if !RSA_APPROVED_LENGTHS.contains(&n_bits) {
        return Err(Error::BadParameters(format!(
            "{} is not an approved RSA modulus length",
            n_bits
        )));
    }
    validate_exponent(e)?;

    let (aux_min, _aux_max) = auxiliary_prime_length_bounds(n_bits);
    let aux_len = aux_min as usize;
    let test_count = ifc_miller_rabin_tests(n_bits, use_provable_aux_primes) as usize;
    let min_sep = BigUint::one() << (n_bits as usize / 2 - 100);

    let mut chained_seed: Option<Zeroizing<ZeroizeBigUint>> =
        seed.map(|s| Zeroizing::new(ZeroizeBigUint::from(s)));

    let (p1, p2) = if use_provable_aux_primes {
        let s = chained_seed
            .as_ref()
            .ok_or_else(|| Error::BadParameters("provable auxiliary primes require a seed".to_string()))?
            .to_biguint();
        let (p1, p2, next_seed) = aux_primes_provable::<H>(&s, aux_len, aux_len)?;
        chained_seed = Some(next_seed);
        (p1, p2)
    } else {
        aux_primes_probable(rng, aux_len, aux_len, test_count)
    };
    let (p, xp) = embed_auxiliary_primes(rng, &p1.to_biguint(), &p2.to_biguint(), n_bits, e, test_count)?;

    loop {
        let (q1, q2) = if use_provable_aux_primes {
            let s = chained_seed
                .as_ref()
                .expect("chained_seed set on the provable-auxiliary path")
                .to_biguint();
            let (q1, q2, next_seed) = aux_primes_provable::<H>(&s, aux_len, aux_len)?;
            chained_seed = Some(next_seed);
            (q1, q2)
        } else {
            aux_primes_probable(rng, aux_len, aux_len, test_count)
        };
        let (q, xq) = embed_auxiliary_primes(rng, &q1.to_biguint(), &q2.to_biguint(), n_bits, e, test_count)?;

        let xp_val = xp.to_biguint();
        let xq_val = xq.to_biguint();
        let x_diff = if xp_val > xq_val { &xp_val - &xq_val } else { &xq_val - &xp_val };
        if x_diff > min_sep {
            return Ok(RsaPrimePair { p, q });
        }
        log::debug!("auxiliary-prime q too close to p, redrawing q1/q2");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::Sha256;
    use crate::primality::miller_rabin;
    use crate::random::RngSource;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn probable_auxiliary_construction_yields_separated_primes() {
        let mut rng = RngSource(StdRng::seed_from_u64(0x99));
        let e = BigUint::from(65537u32);
        let pair =
            generate_primes_with_conditions::<Sha256, _>(&mut rng, &e, 2048, None, false).unwrap();
        assert!(miller_rabin(&mut rng, &pair.p, 56));
        assert!(miller_rabin(&mut rng, &pair.q, 56));
    }

    #[test]
    fn provable_auxiliary_construction_is_deterministic_in_aux_primes() {
        let mut rng = RngSource(StdRng::seed_from_u64(0x77));
        let e = BigUint::from(65537u32);
        let seed = BigUint::from(0x1357_FACE_9BDFu64);
        let pair = generate_primes_with_conditions::<Sha256, _>(&mut rng, &e, 2048, Some(&seed), true)
            .unwrap();
        assert!(miller_rabin(&mut rng, &pair.p, 56));
        assert!(miller_rabin(&mut rng, &pair.q, 56));
    }

    #[test]
    fn provable_path_requires_a_seed() {
        let mut rng = RngSource(StdRng::seed_from_u64(1));
        let e = BigUint::from(65537u32);
        assert!(generate_primes_with_conditions::<Sha256, _>(&mut rng, &e, 2048, None, true).is_err());
    }
}
