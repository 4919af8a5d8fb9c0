//! RSA prime-pair value type.

use num_bigint::BigUint;

/// An RSA prime pair. Invariant: `p != q`, `|p - q| > 2^(N/2 - 100)` for
/// the modulus length `N` the pair was generated for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPrimePair {
    pub p: BigUint,
    pub q: BigUint,
}
