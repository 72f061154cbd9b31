//! Subcommand implementations.

use crate::args::{GenerateArgs, PrepareArgs};
use crate::writer::{JsonlWriter, WriteMetrics};
use anyhow::Context;
use avrogen_core::{prepare_schema, SchemaDescription};
use avrogen_generator::{construct, DataGenerator, GeneratorConfig};
use std::io::Write;

/// Load the description and return its canonical schema JSON.
pub fn run_prepare(args: &PrepareArgs) -> anyhow::Result<String> {
    let desc = SchemaDescription::from_file(&args.schema)
        .with_context(|| format!("Failed to load schema from {:?}", args.schema))?;
    let canonical = prepare_schema(&desc).context("Failed to normalize schema")?;

    let json = if args.pretty {
        canonical.to_json_string_pretty()?
    } else {
        canonical.to_json_string()?
    };
    Ok(json)
}

/// Load the description and write `args.count` JSON lines to the output
/// file, or to `stdout` when no output file is given.
pub fn run_generate<W: Write>(args: &GenerateArgs, stdout: &mut W) -> anyhow::Result<WriteMetrics> {
    let desc = SchemaDescription::from_file(&args.schema)
        .with_context(|| format!("Failed to load schema from {:?}", args.schema))?;
    let handle = construct(&desc)
        .context("Failed to prepare schema")?
        .with_config(GeneratorConfig {
            max_depth: args.max_depth,
        });

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!("Generating {} values (seed={})", args.count, seed);

    let mut writer = JsonlWriter::new(DataGenerator::new(handle, seed));
    match &args.output {
        Some(path) => writer.write_file(path, args.count),
        None => writer.write_to(stdout, args.count),
    }
}
