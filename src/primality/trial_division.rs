//! Deterministic compositeness test by trial division against the small
//! primes table. Slow — appropriate only for small numbers (Shawe-Taylor
//! base case, below ~33 bits) per `ptCrypt/Math/primality.py::
//! trialDivisionTest`.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::arithmetic::iroot;
use crate::primality::small_primes::SMALL_PRIMES;

/// `true` iff `n` is definitely prime by exhaustive trial division up to
/// `floor(sqrt(n))`.
pub fn trial_division(n: &BigUint) -> bool {
    let root = iroot(2, n);
    if &(&root * &root) == n {
        return false;
    }

    for &p in SMALL_PRIMES.iter() {
        let p = BigUint::from(p);
        if n == &p {
            return true;
        }
        if (n % &p).is_zero() {
            return false;
        }
        if &p > n {
            return true;
        }
    }

    let mut x = BigUint::from(*SMALL_PRIMES.last().unwrap());
    while x <= root {
        if (n % &x).is_zero() {
            return false;
        }
        x += 2u32;
    }

    true
}
