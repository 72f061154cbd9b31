//! Command-line interface for avrogen
//!
//! # Usage Examples
//!
//! ```bash
//! # Canonical schema for a shorthand description
//! avrogen prepare --schema user.yaml --pretty
//!
//! # Ten values, reproducible across runs
//! avrogen generate --schema user.yaml --count 10 --seed 42
//!
//! # Seed from the environment, output to a file
//! AVROGEN_SEED=7 avrogen generate --schema user.yaml --count 1000 --output users.jsonl
//! ```

use avrogen::{run_generate, run_prepare, GenerateArgs, PrepareArgs};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "avrogen")]
#[command(about = "Normalize Avro schema descriptions and generate sample data")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canonical Avro schema for a description
    Prepare {
        #[command(flatten)]
        args: PrepareArgs,
    },

    /// Generate values as JSON lines
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Prepare { args } => {
            let json = run_prepare(&args)?;
            println!("{json}");
        }
        Commands::Generate { args } => {
            let stdout = std::io::stdout();
            let metrics = run_generate(&args, &mut stdout.lock())?;
            tracing::info!(
                "Generated {} values in {:?}",
                metrics.values_written,
                metrics.total_duration
            );
        }
    }

    Ok(())
}
