//! Deterministic value streams.

use crate::error::GenerationError;
use crate::handle::SchemaHandle;
use avrogen_core::GeneratedValue;
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Produces a reproducible sequence of values for one schema.
///
/// The RNG for position `N` is derived from the seed and `N`, so a stream
/// resumed with [`DataGenerator::with_start_index`] continues exactly where
/// an uninterrupted stream would have been.
pub struct DataGenerator {
    handle: SchemaHandle,
    seed: u64,
    index: u64,
    /// Clock pinned for every value; `None` reads the current time per value
    now: Option<DateTime<Utc>>,
}

impl DataGenerator {
    pub fn new(handle: SchemaHandle, seed: u64) -> Self {
        Self {
            handle,
            seed,
            index: 0,
            now: None,
        }
    }

    /// Set the index of the next value to generate.
    pub fn with_start_index(mut self, index: u64) -> Self {
        self.index = index;
        self
    }

    /// Pin the clock instant for date and time values.
    pub fn with_clock(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    /// Combine the base seed with the index.
    fn compute_rng_seed_for_index(&self, index: u64) -> u64 {
        self.seed
            .wrapping_add(index.wrapping_mul(0x9E3779B97F4A7C15))
    }

    /// Get the current value index.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    pub fn handle(&self) -> &SchemaHandle {
        &self.handle
    }

    /// Generate the value at the current index and advance.
    pub fn next_value(&mut self) -> Result<GeneratedValue, GenerationError> {
        let mut rng = StdRng::seed_from_u64(self.compute_rng_seed_for_index(self.index));
        let now = self.now.unwrap_or_else(Utc::now);
        let value = self.handle.generate_value_at(&mut rng, now)?;
        self.index += 1;
        Ok(value)
    }

    /// Lazily generate `count` values.
    pub fn values(&mut self, count: u64) -> ValueIterator<'_> {
        ValueIterator {
            generator: self,
            remaining: count,
        }
    }
}

/// Iterator that lazily generates values.
pub struct ValueIterator<'a> {
    generator: &'a mut DataGenerator,
    remaining: u64,
}

impl Iterator for ValueIterator<'_> {
    type Item = Result<GeneratedValue, GenerationError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ValueIterator<'_> {}
