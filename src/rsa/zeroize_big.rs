//! Byte-backed `BigUint` wrapper for secret witness material.
//!
//! `num_bigint::BigUint` doesn't implement `Zeroize` and exposes no way to
//! wipe its internal limbs in place, so `firstSeed`/`pSeed`/`qSeed`/
//! `workingSeed` and the `Xp`/`Xq`/`p1`/`p2`/`q1`/`q2` witnesses in the
//! with-auxiliary-primes and provable RSA constructions are held as the
//! value's big-endian bytes instead — `Vec<u8>` has a real `Zeroize` impl,
//! so wrapping one in `zeroize::Zeroizing` actually wipes it on drop.

use num_bigint::BigUint;
use zeroize::Zeroize;

#[derive(Clone)]
pub struct ZeroizeBigUint(Vec<u8>);

impl ZeroizeBigUint {
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.0)
    }
}

impl From<&BigUint> for ZeroizeBigUint {
    fn from(value: &BigUint) -> Self {
        ZeroizeBigUint(value.to_bytes_be())
    }
}

impl From<BigUint> for ZeroizeBigUint {
    fn from(value: BigUint) -> Self {
        ZeroizeBigUint(value.to_bytes_be())
    }
}

impl Zeroize for ZeroizeBigUint {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}
