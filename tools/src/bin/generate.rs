//! funding-generate: rebuilds the startup-funding store from scratch.
//!
//! Usage:
//!   funding-generate
//!   FUNDING_SEED=12345 funding-generate

use anyhow::{Context, Result};
use funding_core::{
    clock::GenerationClock, config::GeneratorConfig, engine::GeneratorEngine, store::FundingStore,
};
use funding_tools::{DB_PATH, GENERATOR_CONFIG_PATH};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = funding_tools::seed_from_env()?;
    let config = GeneratorConfig::load_or_default(GENERATOR_CONFIG_PATH)?;
    let clock = GenerationClock::system();

    println!("Generating startup funding database...");
    println!("  seed:   {seed}");
    println!("  now:    {}", clock.now());
    println!("  db:     {DB_PATH}");
    println!();

    funding_tools::ensure_parent_dir(DB_PATH)?;
    let store = FundingStore::open(DB_PATH).with_context(|| format!("Cannot open {DB_PATH}"))?;

    let mut engine = GeneratorEngine::build(seed, config, clock)?;
    let (dataset, counts) = engine.generate_into(&store)?;

    let with_metrics = dataset
        .metrics
        .iter()
        .map(|m| m.startup_id.as_str())
        .collect::<std::collections::HashSet<_>>()
        .len();

    println!("=== DATABASE SUMMARY ===");
    println!("  startups:       {}", counts.startups);
    println!("  investors:      {}", counts.investors);
    println!("  funding rounds: {}", counts.rounds);
    println!("  metric records: {} ({with_metrics} startups)", counts.metrics);
    println!();
    println!("Database saved to: {DB_PATH}");
    Ok(())
}
