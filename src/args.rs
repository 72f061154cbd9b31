//! CLI argument definitions.

use clap::Args;
use std::path::PathBuf;

/// Arguments for `avrogen prepare`.
#[derive(Args, Clone, Debug)]
pub struct PrepareArgs {
    /// Path to the schema description (YAML or JSON)
    #[arg(long, short = 's')]
    pub schema: PathBuf,

    /// Pretty-print the canonical schema
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for `avrogen generate`.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Path to the schema description (YAML or JSON)
    #[arg(long, short = 's')]
    pub schema: PathBuf,

    /// Number of values to generate
    #[arg(long, default_value = "1")]
    pub count: u64,

    /// Random seed for deterministic generation (same seed = same data).
    /// Unseeded runs draw a seed from entropy.
    #[arg(long, env = "AVROGEN_SEED")]
    pub seed: Option<u64>,

    /// Nesting depth at which generation of recursive schemas fails
    #[arg(long, default_value_t = avrogen_generator::DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Write JSON lines to this file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}
