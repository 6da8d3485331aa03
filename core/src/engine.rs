//! The generator engine: runs every sampler once and persists the result.
//!
//! EXECUTION ORDER (fixed, documented, never reordered):
//!   1. Investor sampler
//!   2. Startup sampler
//!   3. Round sampler    (needs investors and startups)
//!   4. Metric sampler   (needs startups)
//!
//! RULES:
//!   - Samplers execute in registration order, exactly once per run.
//!   - Each sampler only appends to the dataset.
//!   - All randomness flows through the RngBank.
//!   - The store is rebuilt from scratch before the dataset is written.

use crate::{
    clock::GenerationClock,
    config::GeneratorConfig,
    dataset::Dataset,
    error::FundingResult,
    investor_sampler::InvestorSampler,
    metric_sampler::MetricSampler,
    rng::RngBank,
    round_sampler::RoundSampler,
    sampler::{SampleContext, Sampler},
    startup_sampler::StartupSampler,
    store::{FundingStore, TableCounts},
};

pub struct GeneratorEngine {
    pub clock:    GenerationClock,
    pub rng_bank: RngBank,
    config:       GeneratorConfig,
    samplers:     Vec<Box<dyn Sampler>>,
}

impl GeneratorEngine {
    pub fn new(seed: u64, config: GeneratorConfig, clock: GenerationClock) -> Self {
        Self {
            clock,
            rng_bank: RngBank::new(seed),
            config,
            samplers: Vec::new(),
        }
    }

    /// Build an engine with all samplers registered.
    /// Call this instead of new() + manual register() calls.
    pub fn build(seed: u64, config: GeneratorConfig, clock: GenerationClock) -> FundingResult<Self> {
        config.validate()?;
        let mut engine = GeneratorEngine::new(seed, config, clock);

        // EXECUTION ORDER: fixed, documented, never reordered.
        engine.register(Box::new(InvestorSampler));
        engine.register(Box::new(StartupSampler));
        engine.register(Box::new(RoundSampler::new()));
        engine.register(Box::new(MetricSampler::new()));
        Ok(engine)
    }

    /// Register a sampler. Call in the documented execution order.
    pub fn register(&mut self, sampler: Box<dyn Sampler>) {
        self.samplers.push(sampler);
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run every sampler once and return the full dataset.
    pub fn generate(&mut self) -> FundingResult<Dataset> {
        let ctx = SampleContext { config: &self.config, clock: self.clock };
        let mut dataset = Dataset::new();

        for sampler in &mut self.samplers {
            let mut rng = self.rng_bank.for_sampler(sampler.slot());
            let produced = sampler.sample(&ctx, &mut dataset, &mut rng)?;
            log::info!("{} sampler produced {produced} row(s)", sampler.name());
        }
        Ok(dataset)
    }

    /// Destroy and rebuild the store, then write a freshly generated dataset.
    pub fn generate_into(&mut self, store: &FundingStore) -> FundingResult<(Dataset, TableCounts)> {
        let dataset = self.generate()?;
        store.rebuild_schema()?;
        store.write_dataset(&dataset)?;
        store.create_views()?;

        let counts = store.table_counts()?;
        log::info!(
            "Store rebuilt: {} startups, {} investors, {} rounds, {} metric rows",
            counts.startups,
            counts.investors,
            counts.rounds,
            counts.metrics
        );
        Ok((dataset, counts))
    }
}
