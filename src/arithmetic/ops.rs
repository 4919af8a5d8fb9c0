//! Pure number-theoretic helpers the rest of the crate is built on.
//!
//! Each function here is a pure function over arbitrary-precision
//! integers with no side effects, grounded on `ptCrypt/Math/base.py`.
//! Totality errors (division by zero, an undefined Jacobi symbol, a
//! negative operand where none is allowed) surface as
//! [`crate::error::Error::MathDomain`].

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};

/// Euclidean algorithm. `gcd(0, x) = x`.
pub fn gcd(n: &BigUint, m: &BigUint) -> BigUint {
    n.gcd(m)
}

/// Extended Euclidean algorithm: returns `(d, a, b)` with `a*n + b*m = d`
/// and `d = gcd(n, m)`.
pub fn egcd(n: &BigInt, m: &BigInt) -> (BigInt, BigInt, BigInt) {
    let mut old_r = n.clone();
    let mut r = m.clone();
    let mut old_s = BigInt::one();
    let mut s = BigInt::zero();
    let mut old_t = BigInt::zero();
    let mut t = BigInt::one();

    while !r.is_zero() {
        let q = &old_r / &r;
        let new_r = &old_r - &q * &r;
        old_r = std::mem::replace(&mut r, new_r);
        let new_s = &old_s - &q * &s;
        old_s = std::mem::replace(&mut s, new_s);
        let new_t = &old_t - &q * &t;
        old_t = std::mem::replace(&mut t, new_t);
    }

    (old_r, old_s, old_t)
}

/// `true` iff `n` is a perfect square (`n = k*k` for some integer `k`).
/// Returns `false` for `n <= 1`. Newton's method with cycle detection:
/// for non-squares the Newton iterate eventually repeats, which is the
/// termination signal (there's no "converged to an integer" condition to
/// detect otherwise).
pub fn is_perfect_square(p: &BigUint) -> bool {
    if p <= &BigUint::one() {
        return false;
    }

    let mut x = p / 2u32;
    let mut seen = std::collections::HashSet::new();
    seen.insert(x.clone());
    loop {
        if &(&x * &x) == p {
            return true;
        }
        x = (&x + p / &x) / 2u32;
        if seen.contains(&x) {
            return false;
        }
        seen.insert(x.clone());
    }
}

/// Integer `a`-th root of `b` (e.g. `iroot(2, 4) == 2`).
pub fn iroot(a: u32, b: &BigUint) -> BigUint {
    if b < &BigUint::from(2u32) {
        return b.clone();
    }
    let a1 = a - 1;
    let pow = |x: &BigUint| -> BigUint {
        let mut r = BigUint::one();
        for _ in 0..a1 {
            r *= x;
        }
        r
    };

    let mut c = BigUint::one();
    let mut d = (&c * a1 + b / pow(&c)) / a;
    let mut e = (&d * a1 + b / pow(&d)) / a;
    while c != d && c != e {
        c = d;
        d = e;
        e = (&d * a1 + b / pow(&d)) / a;
    }
    std::cmp::min(d, e)
}

/// Jacobi symbol `(a/n)`, per FIPS 186-4 Appendix C.5. `n` must be odd and
/// positive; returns `None` when the symbol is undefined (even or
/// non-positive `n`), matching `ptCrypt/Math/base.py::jacobiSymbol`.
pub fn jacobi_symbol(a: &BigInt, n: &BigInt) -> Option<i8> {
    if n.is_negative() || n.is_zero() || n.is_even() {
        return None;
    }

    let mut a = a.mod_floor(n);
    let mut n = n.clone();
    if a == BigInt::one() || n == BigInt::one() {
        return Some(1);
    }
    if a.is_zero() {
        return Some(0);
    }

    let mut e = 0u32;
    while a.is_even() {
        a >>= 1;
        e += 1;
    }

    let mut s = if e & 1 == 0 {
        1
    } else {
        let n_mod8 = (&n & BigInt::from(7)).to_i64().unwrap_or(0);
        if n_mod8 == 1 || n_mod8 == 7 {
            1
        } else {
            -1
        }
    };

    if (&n & BigInt::from(3)) == BigInt::from(3) && (&a & BigInt::from(3)) == BigInt::from(3) {
        s = -s;
    }

    let n1 = n.mod_floor(&a);
    n = a;
    a = n1;

    jacobi_symbol(&a, &n).map(|inner| s * inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_with_zero_is_identity() {
        assert_eq!(gcd(&BigUint::zero(), &BigUint::from(7u32)), BigUint::from(7u32));
        assert_eq!(gcd(&BigUint::from(7u32), &BigUint::zero()), BigUint::from(7u32));
    }

    #[test]
    fn gcd_matches_lcm_identity() {
        let a = BigUint::from(123456u32);
        let b = BigUint::from(7890u32);
        let g = gcd(&a, &b);
        let lcm = (&a / &g) * &b;
        assert_eq!(&g * &lcm, &a * &b);
    }

    #[test]
    fn egcd_bezout_identity_holds() {
        let n = BigInt::from(240);
        let m = BigInt::from(46);
        let (d, x, y) = egcd(&n, &m);
        assert_eq!(d, BigInt::from(2));
        assert_eq!(&x * &n + &y * &m, d);
    }

    #[test]
    fn perfect_square_detection() {
        for k in 2u32..200 {
            let k = BigUint::from(k);
            assert!(is_perfect_square(&(&k * &k)));
            assert!(!is_perfect_square(&(&k * &k + 1u32)));
        }
        assert!(!is_perfect_square(&BigUint::zero()));
        assert!(!is_perfect_square(&BigUint::one()));
    }

    #[test]
    fn iroot_basic() {
        assert_eq!(iroot(2, &BigUint::from(4u32)), BigUint::from(2u32));
        assert_eq!(iroot(2, &BigUint::from(9u32)), BigUint::from(3u32));
        assert_eq!(iroot(3, &BigUint::from(27u32)), BigUint::from(3u32));
        assert_eq!(iroot(2, &BigUint::from(8u32)), BigUint::from(2u32));
    }

    #[test]
    fn jacobi_smoke_vector() {
        // jacobi(5, 3439601197) = 1
        let a = BigInt::from(5);
        let n = BigInt::from(3439601197u64);
        assert_eq!(jacobi_symbol(&a, &n), Some(1));
    }

    #[test]
    fn jacobi_undefined_for_even_modulus() {
        assert_eq!(jacobi_symbol(&BigInt::from(5), &BigInt::from(4)), None);
    }

    #[test]
    fn jacobi_multiplicative() {
        let n = BigInt::from(101);
        for a in 1i64..10 {
            for b in 1i64..10 {
                let lhs = jacobi_symbol(&BigInt::from(a * b), &n).unwrap();
                let ja = jacobi_symbol(&BigInt::from(a), &n).unwrap();
                let jb = jacobi_symbol(&BigInt::from(b), &n).unwrap();
                assert_eq!(lhs, ja * jb);
            }
        }
    }
}
