//! Key-size / security-level policy tables, SP 800-57 / FIPS 186-4.
//!
//! Grounded on `ptCrypt/Util/keys.py`, translated from its `if/elif`
//! chains over fixed tuples into lookups over `const` slices. These are
//! plain Rust constants rather than a loaded config file: the crate has
//! no other runtime configuration surface.

/// Approved `(N, L)` pairs for finite-field cryptography (DSA, DH, MQV),
/// paired with their SP 800-57 security level.
pub const FFC_APPROVED_LENGTHS: [(u32, u32, u32); 6] = [
    (160, 1024, 80),
    (224, 2048, 112),
    (256, 2048, 128),
    (256, 3072, 128),
    (384, 7680, 192),
    (512, 15360, 256),
];

/// Approved moduli for integer-factorization cryptography (RSA), paired
/// with their security level.
pub const IFC_APPROVED_LENGTHS: [(u32, u32); 5] = [
    (1024, 80),
    (2048, 112),
    (3072, 128),
    (7680, 192),
    (15360, 256),
];

/// Approved minimum key bit lengths for elliptic-curve cryptography,
/// paired with their security level. Buckets, not exact matches: any `N`
/// in `[lo, next_lo)` gets `lo`'s security level.
pub const ECC_APPROVED_LENGTHS: [(u32, u32); 5] = [
    (160, 80),
    (224, 112),
    (256, 128),
    (384, 192),
    (512, 256),
];

/// Security level of an `(N, L)` pair, or `0` if the pair isn't approved.
pub fn ffc_security_level(n: u32, l: u32) -> u32 {
    FFC_APPROVED_LENGTHS
        .iter()
        .find(|&&(fn_, fl, _)| fn_ == n && fl == l)
        .map(|&(_, _, level)| level)
        .unwrap_or(0)
}

/// Security level of an IFC modulus length, or `0` if unapproved.
pub fn ifc_security_level(n: u32) -> u32 {
    IFC_APPROVED_LENGTHS
        .iter()
        .find(|&&(len, _)| len == n)
        .map(|&(_, level)| level)
        .unwrap_or(0)
}

/// Security level of an ECC key bit length, bucketed per SP 800-57.
pub fn ecc_security_level(n: u32) -> u32 {
    if n < ECC_APPROVED_LENGTHS[0].0 {
        return 0;
    }
    for window in ECC_APPROVED_LENGTHS.windows(2) {
        if n >= window[0].0 && n < window[1].0 {
            return window[0].1;
        }
    }
    ECC_APPROVED_LENGTHS.last().unwrap().1
}

/// Smallest approved `(N, L)` pair meeting `security_level`.
pub fn ffc_key_length(security_level: u32) -> (u32, u32) {
    let (n, l, _) = FFC_APPROVED_LENGTHS
        .iter()
        .find(|&&(_, _, level)| level >= security_level)
        .copied()
        .unwrap_or_else(|| *FFC_APPROVED_LENGTHS.last().unwrap());
    (n, l)
}

/// Smallest approved IFC modulus length meeting `security_level`.
pub fn ifc_key_length(security_level: u32) -> u32 {
    IFC_APPROVED_LENGTHS
        .iter()
        .find(|&&(_, level)| level >= security_level)
        .map(|&(n, _)| n)
        .unwrap_or_else(|| IFC_APPROVED_LENGTHS.last().unwrap().0)
}

/// DSA Miller-Rabin iteration counts `(q_tests, p_tests)` for an approved
/// `(N, L)` pair. Pairs not explicitly tabulated by FIPS 186-4 Table C.1
/// fall back to the standard's own "final rule": `p_tests = 2`, `q_tests =
/// 27`. A single Lucas test always follows the Miller-Rabin battery.
pub fn dsa_miller_rabin_counts(n: u32, l: u32) -> (u32, u32) {
    match (n, l) {
        (160, 1024) => (19, 3),
        (224, 2048) => (24, 3),
        (256, 2048) => (27, 3),
        (256, 3072) => (27, 2),
        _ => (27, 2),
    }
}

/// IFC Miller-Rabin round count for a given modulus length and
/// construction method, SP 800-57 Table B.1.
pub fn ifc_miller_rabin_tests(n: u32, provable: bool) -> u32 {
    match (n, provable) {
        (1024, false) => 40,
        (1024, true) => 32,
        (2048, false) => 56,
        (2048, true) => 56,
        (3072, false) => 64,
        (3072, true) => 64,
        _ => 64,
    }
}

/// Minimum and maximum auxiliary-prime bit lengths for RSA
/// with-auxiliary-primes construction (FIPS 186-4 Table B.1), by modulus
/// length.
pub fn auxiliary_prime_length_bounds(n: u32) -> (u32, u32) {
    match n {
        1024 => (101, 496),
        2048 => (141, 1007),
        3072 => (171, 1518),
        _ => (171, 1518),
    }
}
