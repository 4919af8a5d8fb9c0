//! DSA domain-parameter value types.

use num_bigint::BigUint;

/// A DSA prime pair. Invariant: `q | (p - 1)`, `q` smaller than `p`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Primes {
    pub p: BigUint,
    pub q: BigUint,
}

/// Full DSA domain parameters: a prime pair plus a generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DsaParams {
    pub primes: Primes,
    pub g: BigUint,
}

/// Output of [`crate::dsa::generate_probable_primes`] (FIPS A.1.1.2).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbablePrimesResult {
    pub primes: Primes,
    pub domain_parameter_seed: BigUint,
    pub counter: u64,
}

/// Output of [`crate::dsa::generate_provable_primes`] (FIPS A.1.2.1.2).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvablePrimesResult {
    pub primes: Primes,
    pub first_seed: BigUint,
    pub p_seed: BigUint,
    pub q_seed: BigUint,
    pub p_gen_counter: u64,
    pub q_gen_counter: u64,
}
