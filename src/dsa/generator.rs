//! Generator-`g` construction, FIPS 186-4 Appendix A.2.
//!
//! No reference implementation for this path was available; built from
//! the standard's own text. Mirrors the probable-primes module's structure —
//! an unverifiable quick path and a verifiable, seed-replayable path with
//! a matching tight-equality verifier.

use num_bigint::BigUint;
use num_traits::One;

use crate::arithmetic::{bytes_to_int, int_to_bytes, ByteOrder};
use crate::error::{Error, Result};
use crate::hash::HashAlgorithm;
use crate::random::RandomSource;

use super::types::Primes;

/// Picks an unverifiable generator `g` for `(p, q)`, FIPS 186-4 A.2.1.
/// `g` cannot later be proven to have been constructed honestly — use
/// [`generate_verifiable_g`] when a third party must be able to check it.
pub fn generate_unverifiable_g<R: RandomSource>(rng: &mut R, primes: &Primes) -> BigUint {
    let e = (&primes.p - 1u32) / &primes.q;
    loop {
        let h = rng.random_below(&(&primes.p - 2u32)) + 2u32;
        let g = h.modpow(&e, &primes.p);
        if g > BigUint::one() {
            return g;
        }
    }
}

/// Builds the `seed || "ggen" || index || count` hash payload used by the
/// verifiable generator construction.
fn ggen_payload(seed: &BigUint, index: u8, count: u16) -> Vec<u8> {
    let mut payload = int_to_bytes(seed, 0, ByteOrder::Big);
    payload.extend_from_slice(b"ggen");
    payload.push(index);
    payload.extend_from_slice(&count.to_be_bytes());
    payload
}

/// Constructs a verifiable generator `g` for `(p, q)`, FIPS 186-4 A.2.3.
/// `index` disambiguates multiple independent generators derived from the
/// same `(p, q, seed)`. Returns `(g, count)`; a verifier with the same
/// inputs can retrace the search and confirm `g` was the first candidate
/// found.
pub fn generate_verifiable_g<H: HashAlgorithm>(
    primes: &Primes,
    seed: &BigUint,
    index: u8,
) -> Result<(BigUint, u16)> {
    let e = (&primes.p - 1u32) / &primes.q;
    for count in 1u16..=0xFFFF {
        let digest = H::hash(&ggen_payload(seed, index, count));
        let w = bytes_to_int(&digest, ByteOrder::Big) % &primes.p;
        let g = w.modpow(&e, &primes.p);
        if g > BigUint::one() {
            return Ok((g, count));
        }
    }
    Err(Error::GenerationFailed("verifiable g search exhausted its count space"))
}

/// Recomputes `g` from `(seed, index, count)` and checks it matches the
/// supplied value, FIPS 186-4 A.2.4.
pub fn verify_root_generation<H: HashAlgorithm>(
    primes: &Primes,
    seed: &BigUint,
    index: u8,
    count: u16,
    g: &BigUint,
) -> bool {
    let e = (&primes.p - 1u32) / &primes.q;
    let digest = H::hash(&ggen_payload(seed, index, count));
    let w = bytes_to_int(&digest, ByteOrder::Big) % &primes.p;
    let recomputed = w.modpow(&e, &primes.p);
    &recomputed == g
}

/// Cheap check usable without the seed that produced `g`, FIPS 186-4
/// A.2.2: `2 <= g <= p-2` and `g^q mod p == 1`.
pub fn partially_verify_root_generation(primes: &Primes, g: &BigUint) -> bool {
    let two = BigUint::from(2u32);
    let p_minus_2 = &primes.p - 2u32;
    if g < &two || g > &p_minus_2 {
        return false;
    }
    g.modpow(&primes.q, &primes.p) == BigUint::one()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsa::generate_probable_primes;
    use crate::hash::Sha256;
    use crate::random::RngSource;
    use rand::{rngs::StdRng, SeedableRng};

    fn sample_primes() -> Primes {
        let mut rng = RngSource(StdRng::seed_from_u64(0xB16B00B5));
        generate_probable_primes::<Sha256, _>(&mut rng, 160, 1024, 160, crate::cancel::never())
            .unwrap()
            .primes
    }

    #[test]
    fn unverifiable_g_satisfies_partial_check() {
        let primes = sample_primes();
        let mut rng = RngSource(StdRng::seed_from_u64(7));
        let g = generate_unverifiable_g(&mut rng, &primes);
        assert!(partially_verify_root_generation(&primes, &g));
    }

    #[test]
    fn verifiable_g_round_trips() {
        let primes = sample_primes();
        let seed = BigUint::from(0xA5A5_A5A5u64);
        let (g, count) = generate_verifiable_g::<Sha256>(&primes, &seed, 1).unwrap();
        assert!(partially_verify_root_generation(&primes, &g));
        assert!(verify_root_generation::<Sha256>(&primes, &seed, 1, count, &g));
    }

    #[test]
    fn verification_rejects_wrong_count() {
        let primes = sample_primes();
        let seed = BigUint::from(0xA5A5_A5A5u64);
        let (g, count) = generate_verifiable_g::<Sha256>(&primes, &seed, 1).unwrap();
        assert!(!verify_root_generation::<Sha256>(&primes, &seed, 1, count + 1, &g));
    }

    #[test]
    fn different_index_gives_different_generator_with_same_seed() {
        let primes = sample_primes();
        let seed = BigUint::from(0xA5A5_A5A5u64);
        let (g1, _) = generate_verifiable_g::<Sha256>(&primes, &seed, 1).unwrap();
        let (g2, _) = generate_verifiable_g::<Sha256>(&primes, &seed, 2).unwrap();
        assert_ne!(g1, g2);
    }
}
