//! DSA domain-parameter construction: probable and provable prime-pair
//! generation plus generator-`g` construction, FIPS 186-4 Appendix A.

mod generator;
mod probable;
mod provable;
mod types;

pub use generator::{
    generate_unverifiable_g, generate_verifiable_g, partially_verify_root_generation,
    verify_root_generation,
};
pub use probable::{generate_probable_primes, verify_probable_primes_generation_result};
pub use provable::{generate_provable_primes, verify_provable_primes_generation_result};
pub use types::{DsaParams, Primes, ProbablePrimesResult, ProvablePrimesResult};

use num_bigint::BigUint;
use num_traits::One;

use crate::cancel::StopToken;
use crate::error::Result;
use crate::hash::HashAlgorithm;
use crate::random::RandomSource;

/// Draws a `seed_length`-bit candidate with the top bit forced, retrying
/// until it satisfies the `firstSeed >= 2^(N-1)` precondition of the
/// provable-primes construction (FIPS 186-4 A.1.2.1.2).
pub fn get_first_seed<R: RandomSource>(rng: &mut R, n_bits: u32, seed_length: usize) -> BigUint {
    let min = BigUint::one() << (n_bits as usize - 1);
    loop {
        let candidate = rng.random_bits(seed_length) | (BigUint::one() << (seed_length - 1));
        if candidate >= min {
            return candidate;
        }
    }
}

/// Convenience wrapper composing a prime-pair construction with a
/// generator construction into full [`DsaParams`].
pub fn generate_params<H: HashAlgorithm, R: RandomSource>(
    rng: &mut R,
    n_bits: u32,
    l_bits: u32,
    use_provable_primes: bool,
    use_verifiable_g: bool,
    stop: StopToken,
) -> Result<DsaParams> {
    let primes = if use_provable_primes {
        let first_seed = get_first_seed(rng, n_bits, n_bits as usize);
        generate_provable_primes::<H>(n_bits, l_bits, &first_seed)?.primes
    } else {
        generate_probable_primes::<H, R>(rng, n_bits, l_bits, n_bits as usize, stop)?.primes
    };

    let g = if use_verifiable_g {
        let seed = rng.random_bits(n_bits as usize);
        generate_verifiable_g::<H>(&primes, &seed, 1)?.0
    } else {
        generate_unverifiable_g(rng, &primes)
    };

    Ok(DsaParams { primes, g })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsa::generator::partially_verify_root_generation;
    use crate::hash::Sha256;
    use crate::random::RngSource;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn generate_params_probable_unverifiable_g_is_consistent() {
        let mut rng = RngSource(StdRng::seed_from_u64(42));
        let params =
            generate_params::<Sha256, _>(&mut rng, 160, 1024, false, false, crate::cancel::never())
                .unwrap();
        assert!(partially_verify_root_generation(&params.primes, &params.g));
    }

    #[test]
    fn generate_params_provable_verifiable_g_is_consistent() {
        let mut rng = RngSource(StdRng::seed_from_u64(99));
        let params =
            generate_params::<Sha256, _>(&mut rng, 160, 1024, true, true, crate::cancel::never())
                .unwrap();
        assert!(partially_verify_root_generation(&params.primes, &params.g));
    }

    #[test]
    fn first_seed_meets_minimum_bound() {
        let mut rng = RngSource(StdRng::seed_from_u64(5));
        for _ in 0..20 {
            let seed = get_first_seed(&mut rng, 160, 160);
            assert!(seed >= BigUint::one() << 159);
        }
    }
}
