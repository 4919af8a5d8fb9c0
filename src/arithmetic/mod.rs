//! Arbitrary-precision integer utilities the rest of the crate depends
//! on: gcd/extended gcd, perfect-square test, integer roots, Jacobi
//! symbol, and integer/byte-string conversions.
//!
//! Built directly on `num_bigint`/`num_integer`/`num_traits` rather than
//! behind a custom wrapper type: swapping big-integer backends in and
//! out isn't a goal here, so that indirection buys nothing (see
//! `DESIGN.md`).

mod convert;
mod ops;

pub use convert::{byte_length, bytes_to_int, get_random_bytes, int_to_bytes, partition, xor, ByteOrder};
pub use ops::{egcd, gcd, is_perfect_square, iroot, jacobi_symbol};
