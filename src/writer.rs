//! JSON Lines output for generated values.

use anyhow::Context;
use avrogen_generator::DataGenerator;
use avrogen_json::generated_value_to_json;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for JSONL writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from a write operation.
#[derive(Debug, Clone, Default)]
pub struct WriteMetrics {
    /// Number of values written.
    pub values_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent generating values.
    pub generation_duration: Duration,
}

impl WriteMetrics {
    /// Calculate values per second.
    pub fn values_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.values_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Writes one JSON document per generated value.
pub struct JsonlWriter {
    generator: DataGenerator,
}

impl JsonlWriter {
    pub fn new(generator: DataGenerator) -> Self {
        Self { generator }
    }

    /// Get the current generation index.
    pub fn current_index(&self) -> u64 {
        self.generator.current_index()
    }

    /// Generate `count` values into `writer`.
    ///
    /// Stops at the first generation error; lines already written stay
    /// written.
    pub fn write_to<W: Write>(&mut self, writer: &mut W, count: u64) -> anyhow::Result<WriteMetrics> {
        let start_time = Instant::now();
        let mut metrics = WriteMetrics::default();
        let mut generation_time = Duration::ZERO;

        for _ in 0..count {
            let gen_start = Instant::now();
            let value = self.generator.next_value().with_context(|| {
                format!("Failed to generate value #{}", metrics.values_written + 1)
            })?;
            generation_time += gen_start.elapsed();

            serde_json::to_writer(&mut *writer, &generated_value_to_json(&value))?;
            writeln!(writer)?;

            metrics.values_written += 1;
            if metrics.values_written % 10000 == 0 {
                debug!("Written {} values", metrics.values_written);
            }
        }
        writer.flush()?;

        metrics.total_duration = start_time.elapsed();
        metrics.generation_duration = generation_time;
        Ok(metrics)
    }

    /// Generate `count` values into a new file at `output_path`.
    pub fn write_file<P: AsRef<Path>>(
        &mut self,
        output_path: P,
        count: u64,
    ) -> anyhow::Result<WriteMetrics> {
        let output_path = output_path.as_ref();
        info!(
            "Generating JSONL file '{}' with {} values",
            output_path.display(),
            count
        );

        let file = File::create(output_path)
            .with_context(|| format!("Failed to create {}", output_path.display()))?;
        let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let metrics = self.write_to(&mut writer, count)?;

        info!(
            "JSONL generation complete: {} values in {:?} ({:.2} values/sec)",
            metrics.values_written,
            metrics.total_duration,
            metrics.values_per_second()
        );
        Ok(metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use avrogen_generator::SchemaHandle;

    fn writer(schema: &str, seed: u64) -> JsonlWriter {
        let handle = SchemaHandle::from_canonical_json(schema).unwrap();
        JsonlWriter::new(DataGenerator::new(handle, seed))
    }

    #[test]
    fn test_write_lines() {
        let mut jsonl = writer(r#"{"type": "enum", "name": "E", "symbols": ["A"]}"#, 1);
        let mut out = Vec::new();
        let metrics = jsonl.write_to(&mut out, 3).unwrap();

        assert_eq!(metrics.values_written, 3);
        assert_eq!(String::from_utf8(out).unwrap(), "\"A\"\n\"A\"\n\"A\"\n");
        assert_eq!(jsonl.current_index(), 3);
    }

    #[test]
    fn test_generation_error_stops_writing() {
        let mut jsonl = writer(r#""null""#, 1);
        let mut out = Vec::new();
        let err = jsonl.write_to(&mut out, 2).unwrap_err();

        assert!(format!("{err:#}").contains("null schema"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_write_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("out.jsonl");
        let mut jsonl = writer(r#"{"type": "array", "items": "boolean"}"#, 9);

        let metrics = jsonl.write_file(&path, 4).unwrap();
        assert_eq!(metrics.values_written, 4);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 4);
        for line in contents.lines() {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(value.as_array().unwrap().iter().all(|v| v == &serde_json::json!(true)));
        }
    }
}
