//! Quarterly growth-metric series for a random subset of startups.
//!
//! The row cap is global and first-come: startups earlier in iteration
//! order fill it first, and once it is hit every later series is cut
//! short or left empty.

use crate::{
    clock::{add_days, add_months},
    dataset::Dataset,
    error::FundingResult,
    rng::{SamplerRng, SamplerSlot},
    sampler::{SampleContext, Sampler},
    startup_sampler::StartupRecord,
    types::EntityId,
};
use chrono::NaiveDate;

pub const SERIES_OFFSET_MONTHS: u64 = 6;
pub const SNAPSHOT_INTERVAL_DAYS: u64 = 90;

#[derive(Debug, Clone, PartialEq)]
pub struct MetricSnapshotRecord {
    pub metric_id: EntityId,
    pub startup_id: EntityId,
    pub metric_date: NaiveDate,
    pub arr_usd: i64,
    pub employee_count: i64,
    pub monthly_active_users: i64,
}

pub struct MetricSampler {
    /// Series that stopped because the global row cap was reached.
    pub truncated_series: usize,
}

impl MetricSampler {
    pub fn new() -> Self {
        Self { truncated_series: 0 }
    }

    fn series_for(
        &mut self,
        ctx: &SampleContext<'_>,
        startup: &StartupRecord,
        remaining: usize,
        rng: &mut SamplerRng,
    ) -> Vec<MetricSnapshotRecord> {
        let now = ctx.clock.now();
        let mut date = add_months(startup.founded_date, SERIES_OFFSET_MONTHS);
        let mut arr = rng.int_inclusive(50_000, 200_000);
        let mut employees = rng.int_inclusive(3, 10);
        let mut mau = rng.int_inclusive(100, 5_000);

        let mut series = Vec::new();
        while date < now {
            if series.len() >= remaining {
                self.truncated_series += 1;
                log::warn!(
                    "Metric row cap reached, series for {} truncated at {} snapshot(s)",
                    startup.name,
                    series.len()
                );
                break;
            }
            series.push(MetricSnapshotRecord {
                metric_id: rng.uuid().to_string(),
                startup_id: startup.startup_id.clone(),
                metric_date: date,
                arr_usd: arr,
                employee_count: employees,
                monthly_active_users: mau,
            });

            let growth = rng.uniform(1.05, 1.35);
            arr = grow(arr, growth);
            employees = grow(employees, rng.uniform(1.0, 1.2));
            mau = grow(mau, growth);
            date = add_days(date, SNAPSHOT_INTERVAL_DAYS);
        }
        series
    }
}

impl Default for MetricSampler {
    fn default() -> Self {
        Self::new()
    }
}

/// Compound and round; never shrinks for factors >= 1.
fn grow(value: i64, factor: f64) -> i64 {
    ((value as f64 * factor).round() as i64).max(value)
}

impl Sampler for MetricSampler {
    fn name(&self) -> &'static str {
        "metric"
    }

    fn slot(&self) -> SamplerSlot {
        SamplerSlot::Metric
    }

    fn sample(
        &mut self,
        ctx: &SampleContext<'_>,
        dataset: &mut Dataset,
        rng: &mut SamplerRng,
    ) -> FundingResult<usize> {
        let p = ctx.config.metric_selection_probability;
        let selected: Vec<&StartupRecord> = dataset
            .startups
            .iter()
            .filter(|_| rng.chance(p))
            .take(ctx.config.max_metric_startups)
            .collect();

        let cap = ctx.config.max_metric_rows;
        let mut produced = Vec::new();
        for startup in selected {
            let remaining = cap.saturating_sub(produced.len());
            produced.extend(self.series_for(ctx, startup, remaining, rng));
        }

        let count = produced.len();
        dataset.metrics.extend(produced);
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{clock::GenerationClock, config::GeneratorConfig, rng::RngBank};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn startup(id: &str, founded: NaiveDate) -> StartupRecord {
        StartupRecord {
            startup_id: id.into(),
            name: id.into(),
            industry: "Fintech".into(),
            sub_industry: "Payments".into(),
            founded_date: founded,
            description: String::new(),
            website: String::new(),
            headquarters: "Miami, FL".into(),
        }
    }

    #[test]
    fn growth_never_shrinks() {
        assert_eq!(grow(3, 1.0), 3);
        assert_eq!(grow(3, 1.19), 4);
        assert_eq!(grow(100, 1.05), 105);
    }

    #[test]
    fn series_is_quarterly_and_monotone() {
        let config = GeneratorConfig::default();
        let ctx = SampleContext { config: &config, clock: GenerationClock::fixed(d(2025, 1, 1)) };
        let mut rng = RngBank::new(21).for_sampler(SamplerSlot::Metric);
        let series = MetricSampler::new().series_for(&ctx, &startup("a", d(2020, 1, 1)), 500, &mut rng);

        assert_eq!(series[0].metric_date, d(2020, 6, 29));
        assert!(series.last().unwrap().metric_date < d(2025, 1, 1));
        for pair in series.windows(2) {
            assert_eq!((pair[1].metric_date - pair[0].metric_date).num_days(), 90);
            assert!(pair[1].arr_usd >= pair[0].arr_usd);
            assert!(pair[1].monthly_active_users >= pair[0].monthly_active_users);
            assert!(pair[1].employee_count >= pair[0].employee_count);
        }
    }

    #[test]
    fn global_cap_truncates_later_startups_first() {
        let config = GeneratorConfig {
            metric_selection_probability: 1.0,
            max_metric_rows: 30,
            ..GeneratorConfig::default()
        };
        let ctx = SampleContext { config: &config, clock: GenerationClock::fixed(d(2025, 1, 1)) };
        let mut dataset = Dataset::new();
        dataset.startups = vec![
            startup("first", d(2019, 1, 1)),
            startup("second", d(2019, 1, 1)),
            startup("third", d(2019, 1, 1)),
        ];
        let mut sampler = MetricSampler::new();
        let mut rng = RngBank::new(4).for_sampler(SamplerSlot::Metric);
        let count = sampler.sample(&ctx, &mut dataset, &mut rng).unwrap();

        assert_eq!(count, 30);
        // ~23 quarters fit between mid-2019 and 2025, so "first" is complete.
        let first = dataset.metrics_for("first").count();
        assert!(first > 20, "first series has {first} rows");
        assert_eq!(dataset.metrics_for("second").count(), 30 - first);
        assert_eq!(dataset.metrics_for("third").count(), 0);
        assert!(sampler.truncated_series >= 1);
    }

    #[test]
    fn startup_cap_limits_selection() {
        let config = GeneratorConfig {
            metric_selection_probability: 1.0,
            max_metric_startups: 2,
            ..GeneratorConfig::default()
        };
        let ctx = SampleContext { config: &config, clock: GenerationClock::fixed(d(2025, 1, 1)) };
        let mut dataset = Dataset::new();
        dataset.startups = (0..5).map(|i| startup(&format!("s{i}"), d(2023, 1, 1))).collect();
        let mut rng = RngBank::new(4).for_sampler(SamplerSlot::Metric);
        MetricSampler::new().sample(&ctx, &mut dataset, &mut rng).unwrap();

        let with_metrics: std::collections::HashSet<_> =
            dataset.metrics.iter().map(|m| m.startup_id.as_str()).collect();
        assert_eq!(with_metrics.len(), 2);
        assert!(with_metrics.contains("s0") && with_metrics.contains("s1"));
    }
}
