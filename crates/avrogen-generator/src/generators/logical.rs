//! Logical type value generators.
//!
//! Time-based generators read the supplied clock instant instead of calling
//! `Utc::now()` themselves, so a generator pinned to one instant produces
//! the same values on every call.

use avrogen_core::GeneratedValue;
use chrono::{DateTime, Timelike, Utc};
use rand::Rng;

/// Byte length of an Avro duration.
pub const DURATION_SIZE: usize = 12;

const SECONDS_PER_DAY: i64 = 60 * 60 * 24;

/// Reinterpret up to eight random bytes as a little-endian `f64` bit
/// pattern. Precisions below eight leave the high bytes zero.
///
/// This approximates a decimal; it is not a fixed-point value.
pub fn generate_decimal<R: Rng + ?Sized>(rng: &mut R, precision: usize) -> GeneratedValue {
    let mut head = [0u8; 8];
    rng.fill(&mut head[..precision.min(8)]);
    GeneratedValue::Float64(f64::from_bits(u64::from_le_bytes(head)))
}

/// Days since the Unix epoch.
pub fn generate_date(now: &DateTime<Utc>) -> GeneratedValue {
    GeneratedValue::Int32((now.timestamp() / SECONDS_PER_DAY) as i32)
}

/// Seconds of the current minute, scaled to milliseconds.
pub fn generate_time_millis(now: &DateTime<Utc>) -> GeneratedValue {
    GeneratedValue::Int32(now.second() as i32 * 1_000)
}

/// Seconds of the current minute, scaled to microseconds.
pub fn generate_time_micros(now: &DateTime<Utc>) -> GeneratedValue {
    GeneratedValue::Int64(now.second() as i64 * 1_000_000)
}

pub fn generate_timestamp_millis(now: &DateTime<Utc>) -> GeneratedValue {
    GeneratedValue::Int64(now.timestamp_millis())
}

pub fn generate_timestamp_micros(now: &DateTime<Utc>) -> GeneratedValue {
    GeneratedValue::Int64(now.timestamp_micros())
}

/// Zero-filled duration bytes.
pub fn generate_duration() -> GeneratedValue {
    GeneratedValue::Bytes(vec![0; DURATION_SIZE])
}
