//! Staged funding progression per startup.
//!
//! Older startups can reach later stages: the highest reachable stage
//! index grows with years since founding. Rounds are emitted in stage
//! order, each 6 to 18 months after the previous one, and the sequence is
//! cut short at the first round that would land after "now".

use crate::{
    clock::add_months,
    dataset::Dataset,
    error::{FundingError, FundingResult},
    investor_sampler::InvestorRecord,
    rng::{SamplerRng, SamplerSlot},
    sampler::{SampleContext, Sampler},
    startup_sampler::StartupRecord,
    types::{EntityId, Stage},
};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct FundingRoundRecord {
    pub round_id: EntityId,
    pub startup_id: EntityId,
    pub stage: Stage,
    pub amount_usd: i64,
    pub funding_date: NaiveDate,
    pub lead_investor_id: EntityId,
    pub valuation_usd: i64,
    pub announced: bool,
}

pub struct RoundSampler {
    /// Startups whose candidate pool came up empty.
    pub pool_fallbacks: usize,
}

impl RoundSampler {
    pub fn new() -> Self {
        Self { pool_fallbacks: 0 }
    }

    /// Highest stage index this startup can have reached by now.
    pub fn max_stage_index(ctx: &SampleContext<'_>, founded: NaiveDate) -> usize {
        let reachable = (ctx.clock.years_since(founded) * ctx.config.stage_years_factor).floor();
        if reachable <= 0.0 {
            0
        } else {
            (reachable as usize).min(Stage::ALL.len() - 1)
        }
    }

    fn rounds_for_startup(
        &mut self,
        ctx: &SampleContext<'_>,
        startup: &StartupRecord,
        investors: &[InvestorRecord],
        rng: &mut SamplerRng,
    ) -> FundingResult<Vec<FundingRoundRecord>> {
        let max_index = Self::max_stage_index(ctx, startup.founded_date);
        let round_count = rng.int_inclusive(1, max_index as i64 + 1) as usize;
        let [gap_lo, gap_hi] = ctx.config.round_gap_months;

        let mut rounds = Vec::with_capacity(round_count);
        let mut last_date = startup.founded_date;
        for stage in Stage::ALL.into_iter().take(round_count) {
            let months = rng.int_inclusive(gap_lo as i64, gap_hi as i64) as u64;
            let funding_date = add_months(last_date, months);
            if ctx.clock.is_future(funding_date) {
                break;
            }

            let range = ctx.config.stage_range(stage)?;
            let amount_usd = rng.int_inclusive(range.min, range.max);
            let lead = self.pick_lead(ctx, &startup.industry, investors, rng)?;

            rounds.push(FundingRoundRecord {
                round_id: rng.uuid().to_string(),
                startup_id: startup.startup_id.clone(),
                stage,
                amount_usd,
                funding_date,
                lead_investor_id: lead.investor_id.clone(),
                valuation_usd: amount_usd * range.valuation_multiple,
                announced: rng.chance(ctx.config.announce_probability),
            });
            last_date = funding_date;
        }
        Ok(rounds)
    }

    /// Uniform pick among investors focused on `industry`, plus each other
    /// investor with the long-tail probability. An empty pool falls back
    /// to every investor.
    fn pick_lead<'a>(
        &mut self,
        ctx: &SampleContext<'_>,
        industry: &str,
        investors: &'a [InvestorRecord],
        rng: &mut SamplerRng,
    ) -> FundingResult<&'a InvestorRecord> {
        let pool: Vec<&InvestorRecord> = investors
            .iter()
            .filter(|inv| inv.focuses_on(industry) || rng.chance(ctx.config.long_tail_probability))
            .collect();

        if let Some(lead) = rng.pick(&pool) {
            return Ok(*lead);
        }

        self.pool_fallbacks += 1;
        log::warn!("No investor focused on '{industry}' was drawn, falling back to the full pool");
        rng.pick(investors).ok_or(FundingError::NoInvestors)
    }
}

impl Default for RoundSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl Sampler for RoundSampler {
    fn name(&self) -> &'static str {
        "round"
    }

    fn slot(&self) -> SamplerSlot {
        SamplerSlot::Round
    }

    fn sample(
        &mut self,
        ctx: &SampleContext<'_>,
        dataset: &mut Dataset,
        rng: &mut SamplerRng,
    ) -> FundingResult<usize> {
        let mut produced = Vec::new();
        for startup in &dataset.startups {
            let rounds = self.rounds_for_startup(ctx, startup, &dataset.investors, rng)?;
            log::debug!("{}: {} round(s)", startup.name, rounds.len());
            produced.extend(rounds);
        }
        let count = produced.len();
        dataset.rounds.extend(produced);
        Ok(count)
    }
}
