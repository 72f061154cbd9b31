//! UUID value generator.

use avrogen_core::GeneratedValue;
use rand::Rng;
use uuid::{Builder, Uuid};

/// Generate a random UUID v4 using the provided RNG.
pub fn generate_uuid_v4<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);
    Builder::from_random_bytes(bytes).into_uuid()
}

/// Generate a UUID-formatted string value.
pub fn generate_uuid_string<R: Rng + ?Sized>(rng: &mut R) -> GeneratedValue {
    GeneratedValue::String(generate_uuid_v4(rng).to_string())
}
