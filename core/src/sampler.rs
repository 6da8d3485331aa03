//! Sampler trait.
//!
//! RULE: Every generation stage implements Sampler.
//! The engine calls sample() on each registered sampler once,
//! in registration order. Execution order is fixed and
//! documented in engine.rs.

use crate::{
    clock::GenerationClock,
    config::GeneratorConfig,
    dataset::Dataset,
    error::FundingResult,
    rng::{SamplerRng, SamplerSlot},
};

/// Read-only inputs shared by every sampler of one run.
pub struct SampleContext<'a> {
    pub config: &'a GeneratorConfig,
    pub clock: GenerationClock,
}

/// The contract every sampler must fulfill.
pub trait Sampler {
    /// Unique stable name for this sampler.
    fn name(&self) -> &'static str;

    /// RNG stream this sampler draws from.
    fn slot(&self) -> SamplerSlot;

    /// Called once per run by the engine.
    ///
    /// - `ctx`:     config and generation clock
    /// - `dataset`: everything produced by earlier samplers; append only
    /// - `rng`:     this sampler's deterministic RNG stream
    ///
    /// Returns the number of rows appended.
    fn sample(
        &mut self,
        ctx: &SampleContext<'_>,
        dataset: &mut Dataset,
        rng: &mut SamplerRng,
    ) -> FundingResult<usize>;
}
