//! RSA provable-primes seed generation, FIPS 186-4 Appendix B.3.2.1.
//!
//! Grounded on `ptCrypt/Asymmetric/RSA.py::getSeed`.

use num_bigint::BigUint;
use num_traits::One;

use crate::error::{Error, Result};
use crate::keysize::ifc_security_level;
use crate::random::RandomSource;

/// Draws a seed of bit length `2 * securityStrength(N)` with the top bit
/// forced, suitable for [`super::provable::generate_provable_primes`].
pub fn get_seed<R: RandomSource>(rng: &mut R, n_bits: u32) -> Result<BigUint> {
    let sec_level = ifc_security_level(n_bits);
    if sec_level == 0 {
        return Err(Error::BadParameters(format!("{} is not an approved IFC modulus length", n_bits)));
    }
    let bits = 2 * sec_level as usize;
    let top_bit = BigUint::one() << (bits - 1);
    Ok(rng.random_bits(bits) | top_bit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::RngSource;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn seed_has_expected_bit_length() {
        let mut rng = RngSource(StdRng::seed_from_u64(11));
        let seed = get_seed(&mut rng, 2048).unwrap();
        assert_eq!(seed.bits() as usize, 2 * 112);
    }

    #[test]
    fn rejects_unapproved_length() {
        let mut rng = RngSource(StdRng::seed_from_u64(12));
        assert!(get_seed(&mut rng, 999).is_err());
    }
}
