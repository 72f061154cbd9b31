//! Primitive value generators.

use avrogen_core::GeneratedValue;
use rand::Rng;

/// Constant emitted for every `bytes` value.
pub const BYTES_SAMPLE: [u8; 5] = [97, 98, 99, 100, 101];

/// Uniformly random signed 32-bit integer.
pub fn generate_int<R: Rng + ?Sized>(rng: &mut R) -> GeneratedValue {
    GeneratedValue::Int32(rng.gen())
}

/// Uniformly random integer in `[0, i64::MAX)`.
pub fn generate_long<R: Rng + ?Sized>(rng: &mut R) -> GeneratedValue {
    GeneratedValue::Int64(rng.gen_range(0..i64::MAX))
}

/// Uniformly random float in `[0, 1)`.
pub fn generate_float<R: Rng + ?Sized>(rng: &mut R) -> GeneratedValue {
    GeneratedValue::Float32(rng.gen())
}

/// Uniformly random double in `[0, 1)`.
pub fn generate_double<R: Rng + ?Sized>(rng: &mut R) -> GeneratedValue {
    GeneratedValue::Float64(rng.gen())
}

pub fn generate_bytes() -> GeneratedValue {
    GeneratedValue::Bytes(BYTES_SAMPLE.to_vec())
}

/// Zero-filled bytes of the declared size.
pub fn generate_fixed(size: usize) -> GeneratedValue {
    GeneratedValue::Bytes(vec![0; size])
}
