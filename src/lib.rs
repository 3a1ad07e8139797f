//! fixture-forge library
//!
//! Generates reproducible valid and invalid test fixtures from declarative
//! rule sets.
//!
//! # Features
//!
//! - Deterministic: a fixed seed and plan always produce the same fixtures
//! - Valid values: one value per field satisfying every declared rule
//! - Invalid values: one value per declared rule breaking exactly that rule,
//!   plus wrong-typed values, each titled as a negative test case
//! - Arrays: item count and uniqueness rules over any primitive kind
//!
//! # CLI Usage
//!
//! ```bash
//! # Generate fixtures for a plan, using the plan's seed
//! fixture-forge generate --plan fixtures.yaml
//!
//! # Override the seed and write pretty JSON to a file
//! fixture-forge generate --plan fixtures.yaml --seed 1234567 --output fixtures.json --pretty
//! ```

use clap::Parser;
use std::path::PathBuf;

pub mod generate;

// Re-export the workspace crates for convenience
pub use fixture_core as types;
pub use fixture_generator as generator;

#[derive(Parser, Clone, Debug)]
pub struct GenerateArgs {
    /// Fixture plan file (YAML)
    #[arg(long, value_name = "PATH")]
    pub plan: PathBuf,

    /// Seed for the generator (overrides the plan's seed)
    #[arg(long, env = "FIXTURE_FORGE_SEED")]
    pub seed: Option<u32>,

    /// Write fixtures to this file instead of stdout
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}
