use crate::{
    catalog::{self, CURATED_INDUSTRY},
    clock::add_days,
    dataset::Dataset,
    error::FundingResult,
    name_generator::StartupNameGenerator,
    rng::{SamplerRng, SamplerSlot},
    sampler::{SampleContext, Sampler},
    types::EntityId,
};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct StartupRecord {
    pub startup_id: EntityId,
    pub name: String,
    pub industry: String,
    pub sub_industry: String,
    pub founded_date: NaiveDate,
    pub description: String,
    pub website: String,
    pub headquarters: String,
}

/// Founding window for the curated AI coding tools.
const CURATED_FOUNDED: (NaiveDate, NaiveDate) = (ymd(2019, 1, 1), ymd(2023, 6, 1));
/// Founding window for synthesized startups.
const SYNTHETIC_FOUNDED: (NaiveDate, NaiveDate) = (ymd(2018, 1, 1), ymd(2024, 6, 1));

const fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(y, m, d) {
        Some(date) => date,
        None => panic!("invalid calendar date"),
    }
}

/// Seeds the curated tools, then synthesizes uniquely named startups
/// until the target count is reached.
pub struct StartupSampler;

impl StartupSampler {
    fn seed_curated(dataset: &mut Dataset, rng: &mut SamplerRng) {
        for tool in catalog::curated_startups() {
            let (start, end) = CURATED_FOUNDED;
            let record = StartupRecord {
                startup_id: rng.uuid().to_string(),
                name: tool.name.to_string(),
                industry: CURATED_INDUSTRY.to_string(),
                sub_industry: tool.sub_industry.to_string(),
                founded_date: random_date(rng, start, end),
                description: tool.description.to_string(),
                website: format!("https://{}.ai", tool.name.to_lowercase().replace(' ', "")),
                headquarters: pick_city(rng),
            };
            dataset.used_names.insert(record.name.clone());
            dataset.startups.push(record);
        }
    }

    fn synthesize(
        ctx: &SampleContext<'_>,
        dataset: &mut Dataset,
        rng: &mut SamplerRng,
    ) -> FundingResult<()> {
        let industries = catalog::industries();
        while dataset.startups.len() < ctx.config.target_startups {
            let industry = &industries[rng.next_u64_below(industries.len() as u64) as usize];
            let name = StartupNameGenerator::generate_unique(
                rng,
                &mut dataset.used_names,
                ctx.config.name_retry_limit,
            )?;
            let (start, end) = SYNTHETIC_FOUNDED;
            let founded_date = random_date(rng, start, end);
            let sub_industry = industry.sub_industries
                [rng.next_u64_below(industry.sub_industries.len() as u64) as usize];

            dataset.startups.push(StartupRecord {
                startup_id: rng.uuid().to_string(),
                website: format!("https://{}.com", name.to_lowercase()),
                name,
                industry: industry.name.to_string(),
                sub_industry: sub_industry.to_string(),
                founded_date,
                description: format!("{sub_industry} platform for enterprise customers"),
                headquarters: pick_city(rng),
            });
        }
        Ok(())
    }
}

impl Sampler for StartupSampler {
    fn name(&self) -> &'static str {
        "startup"
    }

    fn slot(&self) -> SamplerSlot {
        SamplerSlot::Startup
    }

    fn sample(
        &mut self,
        ctx: &SampleContext<'_>,
        dataset: &mut Dataset,
        rng: &mut SamplerRng,
    ) -> FundingResult<usize> {
        let before = dataset.startups.len();
        Self::seed_curated(dataset, rng);
        Self::synthesize(ctx, dataset, rng)?;
        Ok(dataset.startups.len() - before)
    }
}

/// Uniform date in [start, end).
fn random_date(rng: &mut SamplerRng, start: NaiveDate, end: NaiveDate) -> NaiveDate {
    let span = (end - start).num_days().max(1) as u64;
    add_days(start, rng.next_u64_below(span))
}

fn pick_city(rng: &mut SamplerRng) -> String {
    let cities = catalog::cities();
    cities[rng.next_u64_below(cities.len() as u64) as usize].to_string()
}
