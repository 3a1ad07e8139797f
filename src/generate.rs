//! Generate command handler.

use crate::GenerateArgs;
use anyhow::Context;
use fixture_core::FixturePlan;
use fixture_generator::{FieldFixtures, FixtureGenerator};
use serde::Serialize;

/// Fixtures for a whole plan, as written by the generate command.
#[derive(Debug, Serialize)]
pub struct FixtureOutput {
    /// Seed the fixtures were generated with
    pub seed: u32,
    /// Per-field fixtures, in plan order
    pub fields: Vec<FieldFixtures>,
}

/// Pick the seed: command line first, then the plan.
pub fn resolve_seed(cli_seed: Option<u32>, plan: &FixturePlan) -> Option<u32> {
    cli_seed.or(plan.seed)
}

/// Load the plan and generate its fixtures.
pub fn generate_fixtures(args: &GenerateArgs) -> anyhow::Result<FixtureOutput> {
    let plan = FixturePlan::from_file(&args.plan)
        .with_context(|| format!("Failed to load plan: {}", args.plan.display()))?;
    tracing::info!(
        "Loaded plan {} with {} fields",
        args.plan.display(),
        plan.fields.len()
    );

    let mut generator = match resolve_seed(args.seed, &plan) {
        Some(seed) => FixtureGenerator::new(seed),
        None => {
            let generator = FixtureGenerator::from_entropy();
            tracing::info!(
                "No seed given, using random seed {} (pass --seed {} to reproduce)",
                generator.seed(),
                generator.seed()
            );
            generator
        }
    };

    let fields = generator
        .run_plan(&plan)
        .context("Failed to generate fixtures")?;

    Ok(FixtureOutput {
        seed: generator.seed(),
        fields,
    })
}

/// Run the generate command.
pub fn run_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let output = generate_fixtures(&args)?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Generated: {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
