//! Hash-function capability.
//!
//! Modeled as a small interface (`outlen`, `hash`) rather than passing a
//! callable around as the Python original does. Generation and
//! verification routines are generic over `H: HashAlgorithm` and
//! monomorphized at the call site — mirrors the `DigestExt` blanket-impl
//! pattern from `src/cryptographic_primitives/hashing/ext.rs`, which
//! blanket-implements ergonomic hashing helpers for any `D: Digest`.

use digest::Digest;

/// A FIPS-approved hash function, monomorphized at entry points so the
/// primality/prime-construction inner loops never pay for dynamic
/// dispatch.
pub trait HashAlgorithm: Digest + Clone {
    /// Output size in bits (`outlen` in the standard's notation).
    fn outlen() -> usize {
        <Self as Digest>::output_size() * 8
    }

    /// Hashes `payload` and returns the digest bytes.
    fn hash(payload: &[u8]) -> Vec<u8> {
        Self::digest(payload).to_vec()
    }
}

impl<D: Digest + Clone> HashAlgorithm for D {}

pub type Sha1 = sha1::Sha1;
pub type Sha224 = sha2::Sha224;
pub type Sha256 = sha2::Sha256;
pub type Sha384 = sha2::Sha384;
pub type Sha512 = sha2::Sha512;

/// Object-safe wrapper for call sites that need to select a hash
/// algorithm at runtime (e.g. a CLI collaborator reading a config value).
/// The core's own generation/verification loops always take `H:
/// HashAlgorithm` generically instead, per spec's guidance against
/// dynamic dispatch in hot paths.
pub trait DynHashAlgorithm {
    fn outlen(&self) -> usize;
    fn digest(&self, payload: &[u8]) -> Vec<u8>;
}

macro_rules! dyn_hash_impl {
    ($name:ident, $ty:ty) => {
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;
        impl DynHashAlgorithm for $name {
            fn outlen(&self) -> usize {
                <$ty as HashAlgorithm>::outlen()
            }
            fn digest(&self, payload: &[u8]) -> Vec<u8> {
                <$ty as HashAlgorithm>::hash(payload)
            }
        }
    };
}

dyn_hash_impl!(DynSha1, Sha1);
dyn_hash_impl!(DynSha224, Sha224);
dyn_hash_impl!(DynSha256, Sha256);
dyn_hash_impl!(DynSha384, Sha384);
dyn_hash_impl!(DynSha512, Sha512);
