//! Miller-Rabin probabilistic primality test, FIPS 186-4 Appendix C.3.1.
//!
//! Grounded on `ptCrypt/Math/primality.py::millerRabin`, restructured to
//! take randomness through [`RandomSource`] instead of calling a global
//! RNG, per `random.rs`'s doc comment.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;

use crate::random::RandomSource;

/// Runs `t` rounds of Miller-Rabin against `n`. Error probability of a
/// false "probably prime" is at most `(1/4)^t`. Returns `false` for `n <=
/// 1`.
pub fn miller_rabin<R: RandomSource>(rng: &mut R, n: &BigUint, t: usize) -> bool {
    if n <= &BigUint::one() {
        return false;
    }
    if n == &BigUint::from(2u32) {
        return true;
    }
    if n.is_even() {
        return false;
    }

    let n_minus_1 = n - 1u32;
    // n - 1 = 2^b * m, m odd.
    let b = n_minus_1.trailing_zeros().unwrap_or(0) as usize;
    let m = &n_minus_1 >> b;
    let plen = n.bits() as usize;

    'next_round: for _ in 0..t {
        let a = loop {
            let candidate = rng.random_bits(plen);
            if candidate > BigUint::one() && candidate < n_minus_1 {
                break candidate;
            }
        };

        let mut z = a.modpow(&m, n);
        if z.is_one() || z == n_minus_1 {
            continue;
        }

        for _ in 0..b.saturating_sub(1) {
            z = z.modpow(&BigUint::from(2u32), n);
            if z.is_one() {
                return false;
            }
            if z == n_minus_1 {
                continue 'next_round;
            }
        }

        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::RngSource;
    use num_traits::Zero;
    use rand::{rngs::StdRng, SeedableRng};

    fn rng() -> RngSource<StdRng> {
        RngSource(StdRng::seed_from_u64(0xC0FFEE))
    }

    #[test]
    fn rejects_n_leq_one() {
        let mut rng = rng();
        assert!(!miller_rabin(&mut rng, &BigUint::zero(), 10));
        assert!(!miller_rabin(&mut rng, &BigUint::one(), 10));
    }

    #[test]
    fn accepts_small_primes() {
        let mut rng = rng();
        for p in [2u32, 3, 5, 7, 11, 13, 97, 65537] {
            assert!(miller_rabin(&mut rng, &BigUint::from(p), 20), "{} should be prime", p);
        }
    }

    #[test]
    fn rejects_small_composites() {
        let mut rng = rng();
        for n in [4u32, 6, 8, 9, 15, 21, 341] {
            assert!(!miller_rabin(&mut rng, &BigUint::from(n), 20), "{} should be composite", n);
        }
    }

    #[test]
    fn accepts_known_large_prime() {
        let mut rng = rng();
        // 2^127 - 1, a Mersenne prime.
        let n = (BigUint::from(1u32) << 127) - 1u32;
        assert!(miller_rabin(&mut rng, &n, 40));
    }
}
