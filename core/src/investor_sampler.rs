use crate::{
    catalog,
    dataset::Dataset,
    error::FundingResult,
    rng::{SamplerRng, SamplerSlot},
    sampler::{SampleContext, Sampler},
    types::{EntityId, InvestorKind},
};

#[derive(Debug, Clone, PartialEq)]
pub struct InvestorRecord {
    pub investor_id: EntityId,
    pub name: String,
    pub kind: InvestorKind,
    pub focus: Vec<String>,
}

impl InvestorRecord {
    pub fn focuses_on(&self, industry: &str) -> bool {
        self.focus.iter().any(|f| f == industry)
    }
}

/// Loads the curated investor list verbatim, one fresh id each.
pub struct InvestorSampler;

impl Sampler for InvestorSampler {
    fn name(&self) -> &'static str {
        "investor"
    }

    fn slot(&self) -> SamplerSlot {
        SamplerSlot::Investor
    }

    fn sample(
        &mut self,
        _ctx: &SampleContext<'_>,
        dataset: &mut Dataset,
        rng: &mut SamplerRng,
    ) -> FundingResult<usize> {
        let before = dataset.investors.len();
        dataset.investors.extend(catalog::investors().iter().map(|inv| InvestorRecord {
            investor_id: rng.uuid().to_string(),
            name: inv.name.to_string(),
            kind: inv.kind,
            focus: inv.focus.iter().map(|f| f.to_string()).collect(),
        }));
        Ok(dataset.investors.len() - before)
    }
}
