//! Strong Lucas probable-prime test, FIPS 186-4 Appendix C.3.3.
//!
//! Grounded on `ptCrypt/Math/primality.py::lucasTest`. Composites caught
//! by this test are rarely caught by Miller-Rabin and vice versa, which
//! is why the standard runs both.

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::arithmetic::{is_perfect_square, jacobi_symbol};

/// `true` iff `n` passes the strong Lucas test. Rejects even `n` and
/// perfect squares outright.
pub fn lucas_test(n: &BigUint) -> bool {
    if n.is_even() || is_perfect_square(n) {
        return false;
    }

    let n_int = BigInt::from(n.clone());

    // Step 2: search D = 5, -7, 9, -11, ... for the first with jacobi(D, n) = -1.
    let d = match find_d(&n_int) {
        Some(d) => d,
        None => return false,
    };

    let k = n + 1u32;
    let r = (k.bits() as usize).saturating_sub(1);

    let inv_of_two = match mod_inverse(&BigInt::from(2), &n_int) {
        Some(v) => v,
        None => return false,
    };

    let mut u_i = BigInt::one();
    let mut v_i = BigInt::one();

    for i in (0..r).rev() {
        // Doubling step.
        let u_t = (&u_i * &v_i).mod_floor(&n_int);
        let mut v_t = (&u_i * &u_i * &d + &v_i * &v_i).mod_floor(&n_int);
        v_t = (&v_t * &inv_of_two).mod_floor(&n_int);

        if (&k >> i) & BigUint::one() == BigUint::one() {
            u_i = (&(&u_t + &v_t) * &inv_of_two).mod_floor(&n_int);
            v_i = (&(&v_t + &u_t * &d) * &inv_of_two).mod_floor(&n_int);
        } else {
            u_i = u_t;
            v_i = v_t;
        }
    }

    u_i.is_zero()
}

/// Searches `D = 5, -7, 9, -11, ...` for the first value whose Jacobi
/// symbol against `n` is `-1`. Returns `None` as soon as a Jacobi value of
/// `0` is found (`n` shares a factor with `D`, so it's composite).
fn find_d(n: &BigInt) -> Option<BigInt> {
    let mut magnitude: i64 = 5;
    loop {
        let d = BigInt::from(magnitude);
        match jacobi_symbol(&d, n) {
            Some(0) => return None,
            Some(-1) => return Some(d),
            Some(_) => {}
            None => return None,
        }
        magnitude = if magnitude > 0 { magnitude + 2 } else { magnitude - 2 };
        magnitude = -magnitude;
    }
}

fn mod_inverse(a: &BigInt, modulus: &BigInt) -> Option<BigInt> {
    let (d, x, _) = crate::arithmetic::egcd(a, modulus);
    if d != BigInt::one() && d != BigInt::from(-1) {
        return None;
    }
    Some(x.mod_floor(modulus))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_even_numbers_above_two() {
        for n in [4u32, 6, 100, 1000] {
            assert!(!lucas_test(&BigUint::from(n)));
        }
    }

    #[test]
    fn rejects_perfect_squares() {
        for k in 2u32..30 {
            assert!(!lucas_test(&(&BigUint::from(k) * &BigUint::from(k))));
        }
    }

    #[test]
    fn accepts_small_primes() {
        for p in [3u32, 5, 7, 11, 13, 17, 19, 23, 97, 997] {
            assert!(lucas_test(&BigUint::from(p)), "{} should pass Lucas", p);
        }
    }

    #[test]
    fn rejects_small_odd_composites() {
        for n in [9u32, 15, 21, 25, 33, 35, 45] {
            assert!(!lucas_test(&BigUint::from(n)), "{} should fail Lucas", n);
        }
    }
}
