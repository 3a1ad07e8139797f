//! Command-line interface for fixture-forge
//!
//! # Usage Examples
//!
//! ```bash
//! # Print fixtures for every field in the plan
//! fixture-forge generate --plan fixtures.yaml
//!
//! # Reproduce a run with an explicit seed
//! FIXTURE_FORGE_SEED=1234567 fixture-forge generate --plan fixtures.yaml --pretty
//!
//! # Write to a file, with debug logging
//! RUST_LOG=debug fixture-forge generate --plan fixtures.yaml --output fixtures.json
//! ```
//!
//! ## Plan Format
//! ```yaml
//! seed: 1234567
//! fields:
//!   - name: username
//!     kind: string
//!     required: true
//!     rules: { minLength: 3, maxLength: 12 }
//!   - name: scores
//!     kind: integer
//!     rules: { gte: 0, lte: 100, multipleOf: 5 }
//!     array: { minItems: 1, maxItems: 3, uniqueItems: true }
//! ```

use clap::{Parser, Subcommand};
use fixture_forge::{generate::run_generate, GenerateArgs};

#[derive(Parser)]
#[command(name = "fixture-forge")]
#[command(about = "Generate reproducible valid and invalid test fixtures from declarative rules")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate fixtures for every field in a plan
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
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { args } => run_generate(args)?,
    }

    Ok(())
}
