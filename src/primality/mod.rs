//! Primality testing: Miller-Rabin, strong Lucas, trial division, and
//! deterministic Shawe-Taylor constructive generation, plus the
//! general-purpose `get_prime` built on top of them.

mod lucas;
mod miller_rabin;
mod shawe_taylor;
mod small_primes;
mod trial_division;

pub use lucas::lucas_test;
pub use miller_rabin::miller_rabin;
pub(crate) use shawe_taylor::{ceil_div, hash_block};
pub use shawe_taylor::{shawe_taylor, ShaweTaylorResult};
pub use small_primes::SMALL_PRIMES;
pub use trial_division::trial_division;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;

use crate::random::RandomSource;

/// Draws a random odd candidate of exactly `bit_len` bits (top and bottom
/// bits forced) and returns the first one that survives trial division
/// against the small-primes table and `checks` rounds of Miller-Rabin.
/// Grounded on `ptCrypt/Math/primality.py::getPrime` — a general-purpose
/// prime generator for callers outside the FIPS DSA/RSA paths, which
/// build their own candidates with FIPS-mandated structure instead.
pub fn get_prime<R: RandomSource>(rng: &mut R, bit_len: usize, checks: usize) -> BigUint {
    let top_bit = BigUint::one() << (bit_len - 1);
    loop {
        let mut candidate = rng.random_bits(bit_len);
        candidate |= &top_bit;
        if candidate.is_even() {
            candidate += 1u32;
        }

        if !trial_division(&candidate) {
            continue;
        }
        if miller_rabin(rng, &candidate, checks) {
            return candidate;
        }
    }
}
