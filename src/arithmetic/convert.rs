//! Integer/byte-string conversions and the small byte-manipulation
//! helpers the FIPS algorithms build candidates out of. Grounded on
//! `ptCrypt/Math/base.py::intToBytes/bytesToInt/partition/xor/
//! getRandomBytes`.

use num_bigint::BigUint;
use std::collections::HashSet;

use crate::random::RandomSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    Big,
    Little,
}

/// Minimal number of bytes needed to hold `n` (`0` itself needs zero
/// bytes, matching `bit_length(0) = 0`).
pub fn byte_length(n: &BigUint) -> usize {
    ((n.bits() as usize) + 7) / 8
}

/// Converts `n` to a byte string at least `min_len` bytes long, padded
/// with leading (big-endian) or trailing (little-endian) zero bytes.
pub fn int_to_bytes(n: &BigUint, min_len: usize, order: ByteOrder) -> Vec<u8> {
    let len = byte_length(n).max(min_len);
    let mut be = n.to_bytes_be();
    if be.len() < len {
        let mut padded = vec![0u8; len - be.len()];
        padded.append(&mut be);
        be = padded;
    }
    match order {
        ByteOrder::Big => be,
        ByteOrder::Little => {
            be.reverse();
            be
        }
    }
}

/// Inverse of [`int_to_bytes`].
pub fn bytes_to_int(b: &[u8], order: ByteOrder) -> BigUint {
    match order {
        ByteOrder::Big => BigUint::from_bytes_be(b),
        ByteOrder::Little => BigUint::from_bytes_le(b),
    }
}

/// Splits `b` into chunks of `length` bytes; the final chunk may be
/// shorter.
pub fn partition(b: &[u8], length: usize) -> Vec<Vec<u8>> {
    if length == 0 {
        return vec![b.to_vec()];
    }
    b.chunks(length).map(|c| c.to_vec()).collect()
}

/// XORs two byte strings. When `repeat` is `false` the result is as long
/// as the shorter input; when `true` the shorter input wraps around to
/// cover the longer one.
pub fn xor(a: &[u8], b: &[u8], repeat: bool) -> Vec<u8> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let iterations = if repeat {
        a.len().max(b.len())
    } else {
        a.len().min(b.len())
    };
    (0..iterations)
        .map(|i| a[i % a.len()] ^ b[i % b.len()])
        .collect()
}

/// Draws `count` random bytes from `rng`, excluding any byte value listed
/// in `exclude`.
pub fn get_random_bytes<R: RandomSource>(rng: &mut R, count: usize, exclude: &HashSet<u8>) -> Vec<u8> {
    let mut result = Vec::with_capacity(count);
    let mut scratch = [0u8; 1];
    while result.len() != count {
        rng.fill_bytes(&mut scratch);
        if !exclude.contains(&scratch[0]) {
            result.push(scratch[0]);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;

    #[test]
    fn round_trip_holds_for_any_sufficient_min_len() {
        for n in [0u64, 1, 255, 256, 65535, 1_000_000_007] {
            let n = BigUint::from(n);
            for min_len in 0..10 {
                let bytes = int_to_bytes(&n, min_len, ByteOrder::Big);
                assert_eq!(bytes_to_int(&bytes, ByteOrder::Big), n);
            }
        }
    }

    #[test]
    fn int_to_bytes_vector() {
        assert_eq!(
            int_to_bytes(&BigUint::from(0x0102u32), 2, ByteOrder::Big),
            vec![0x01, 0x02]
        );
        assert_eq!(
            int_to_bytes(&BigUint::from(0x0102u32), 2, ByteOrder::Little),
            vec![0x02, 0x01]
        );
        assert_eq!(
            int_to_bytes(&BigUint::from(0x01u32), 2, ByteOrder::Big),
            vec![0x00, 0x01]
        );
    }

    #[test]
    fn partition_vector() {
        let b = [0x00, 0x01, 0x02, 0x03, 0x04];
        let parts = partition(&b, 2);
        assert_eq!(
            parts,
            vec![vec![0x00, 0x01], vec![0x02, 0x03], vec![0x04]]
        );
    }

    #[test]
    fn xor_no_repeat_truncates_to_shorter() {
        let a = [0xff, 0x00, 0xaa];
        let b = [0x0f];
        assert_eq!(xor(&a, &b, false), vec![0xf0]);
    }

    #[test]
    fn xor_repeat_wraps_shorter_input() {
        let a = [0xff, 0xff];
        let b = [0x0f];
        assert_eq!(xor(&a, &b, true), vec![0xf0, 0xf0]);
    }

    #[test]
    fn byte_length_of_zero_is_zero() {
        assert_eq!(byte_length(&BigUint::zero()), 0);
    }
}
