//! RSA provable prime-pair construction, FIPS 186-4 Appendix B.3.2.
//!
//! Grounded on `ptCrypt/Asymmetric/RSA.py::generateProvablePrimes`, which
//! delegates the actual prime construction to a `primality.ifcProvablePrime`
//! whose definition isn't available anywhere in the reference sources.
//! FIPS Appendix C.10 degenerates to plain Shawe-Taylor (Appendix C.6)
//! when it is invoked with no auxiliary primes (`N1 = N2 = 1`, the B.3.2
//! case), which is the construction used here: Shawe-Taylor retried until
//! the witness also satisfies `gcd(p-1, e) = 1`.

use num_bigint::BigUint;
use num_traits::One;
use zeroize::Zeroizing;

use crate::arithmetic::gcd;
use crate::error::{Error, Result};
use crate::hash::HashAlgorithm;
use crate::primality::shawe_taylor;

use super::types::RsaPrimePair;
use super::validate_exponent;
use super::zeroize_big::ZeroizeBigUint;

fn ifc_single_provable_prime<H: HashAlgorithm>(
    length: usize,
    seed: &BigUint,
    e: &BigUint,
) -> Result<(BigUint, Zeroizing<ZeroizeBigUint>)> {
    let mut current_seed = Zeroizing::new(ZeroizeBigUint::from(seed));
    loop {
        let result = shawe_taylor::<H>(length, &current_seed.to_biguint());
        if !result.ok {
            log::debug!("provable prime construction exhausted its counter bound");
            return Err(Error::GenerationFailed(
                "provable prime construction exhausted its counter bound",
            ));
        }
        let p_minus_1 = &result.prime - 1u32;
        if gcd(&p_minus_1, e) == BigUint::one() {
            return Ok((result.prime, Zeroizing::new(ZeroizeBigUint::from(result.prime_seed))));
        }
        log::debug!("provable prime candidate failed gcd(p-1, e) = 1, re-seeding");
        current_seed = Zeroizing::new(ZeroizeBigUint::from(result.prime_seed));
    }
}

/// Generates a provable RSA prime pair `(p, q)` for a modulus of `n_bits`
/// bits and public exponent `e`, from `seed` (see
/// [`super::seed::get_seed`]). The seed material is zeroed on every exit
/// path.
pub fn generate_provable_primes<H: HashAlgorithm>(
    e: &BigUint,
    n_bits: u32,
    seed: &BigUint,
) -> Result<RsaPrimePair> {
    if n_bits != 2048 && n_bits != 3072 {
        return Err(Error::BadParameters(
            "provable RSA primes require N in {2048, 3072}".to_string(),
        ));
    }
    validate_exponent(e)?;

    let l = (n_bits / 2) as usize;
    let min_sep = BigUint::one() << (n_bits as usize / 2 - 100);

    let (p, p_seed) = ifc_single_provable_prime::<H>(l, seed, e)?;
    let mut working_seed = p_seed;

    loop {
        let (q, q_seed) = ifc_single_provable_prime::<H>(l, &working_seed.to_biguint(), e)?;
        working_seed = q_seed;

        let diff = if p > q { &p - &q } else { &q - &p };
        if diff > min_sep {
            return Ok(RsaPrimePair { p, q });
        }
        log::debug!("provable q too close to p, re-seeding");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::Sha256;
    use crate::primality::miller_rabin;
    use crate::random::RngSource;
    use crate::rsa::seed::get_seed;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn generated_pair_is_prime_and_separated() {
        let mut rng = RngSource(StdRng::seed_from_u64(0x51ED));
        let e = BigUint::from(65537u32);
        let seed = get_seed(&mut rng, 2048).unwrap();
        let pair = generate_provable_primes::<Sha256>(&e, 2048, &seed).unwrap();

        assert_ne!(pair.p, pair.q);
        let diff = if pair.p > pair.q { &pair.p - &pair.q } else { &pair.q - &pair.p };
        assert!(diff > BigUint::one() << (2048 / 2 - 100));

        assert!(miller_rabin(&mut rng, &pair.p, 56));
        assert!(miller_rabin(&mut rng, &pair.q, 56));
        assert_eq!(gcd(&(&pair.p - 1u32), &e), BigUint::one());
        assert_eq!(gcd(&(&pair.q - 1u32), &e), BigUint::one());
    }

    #[test]
    fn rejects_bad_modulus_length() {
        let e = BigUint::from(65537u32);
        let seed = BigUint::from(1u32) << 223;
        assert!(generate_provable_primes::<Sha256>(&e, 1024, &seed).is_err());
    }

    #[test]
    fn rejects_even_exponent() {
        let e = BigUint::from(65538u32);
        let seed = BigUint::from(1u32) << 223;
        assert!(generate_provable_primes::<Sha256>(&e, 2048, &seed).is_err());
    }
}
