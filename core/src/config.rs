use crate::{
    error::{FundingError, FundingResult},
    types::Stage,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Amount range and valuation multiple for one funding stage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct StageRange {
    pub min: i64,
    pub max: i64,
    pub valuation_multiple: i64,
}

/// Every tunable knob of the generator. Missing fields in a config
/// file fall back to the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    pub target_startups: usize,
    /// Draws allowed per synthesized name before the run fails.
    pub name_retry_limit: usize,
    pub long_tail_probability: f64,
    pub announce_probability: f64,
    /// Reachable stages per year since founding.
    pub stage_years_factor: f64,
    pub round_gap_months: [u64; 2],
    pub metric_selection_probability: f64,
    pub max_metric_startups: usize,
    pub max_metric_rows: usize,
    /// Keyed by stage label ("Pre-Seed", "Series A", ...).
    pub stage_ranges: BTreeMap<String, StageRange>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let stage_ranges = [
            (Stage::PreSeed, 500_000, 3_000_000, 8),
            (Stage::Seed, 2_000_000, 10_000_000, 10),
            (Stage::SeriesA, 10_000_000, 40_000_000, 12),
            (Stage::SeriesB, 30_000_000, 100_000_000, 10),
            (Stage::SeriesC, 80_000_000, 300_000_000, 8),
        ]
        .into_iter()
        .map(|(stage, min, max, valuation_multiple)| {
            (stage.label().to_string(), StageRange { min, max, valuation_multiple })
        })
        .collect();

        Self {
            target_startups: 200,
            name_retry_limit: 1_000,
            long_tail_probability: 0.10,
            announce_probability: 0.95,
            stage_years_factor: 0.8,
            round_gap_months: [6, 18],
            metric_selection_probability: 0.25,
            max_metric_startups: 50,
            max_metric_rows: 500,
            stage_ranges,
        }
    }
}

impl GeneratorConfig {
    /// Load a JSON override file and validate it.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: GeneratorConfig = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` when it exists, otherwise use the defaults.
    pub fn load_or_default(path: &str) -> anyhow::Result<Self> {
        if std::path::Path::new(path).exists() {
            log::info!("Loading generator config from {path}");
            Self::load(path)
        } else {
            log::info!("No generator config at {path}, using defaults");
            Ok(Self::default())
        }
    }

    pub fn stage_range(&self, stage: Stage) -> FundingResult<&StageRange> {
        self.stage_ranges.get(stage.label()).ok_or_else(|| {
            FundingError::InvalidConfig(format!("no amount range for stage '{stage}'"))
        })
    }

    pub fn validate(&self) -> FundingResult<()> {
        for stage in Stage::ALL {
            let range = self.stage_range(stage)?;
            if range.min > range.max || range.min < 0 {
                return Err(FundingError::InvalidConfig(format!(
                    "stage '{stage}' has range [{}, {}]",
                    range.min, range.max
                )));
            }
            if range.valuation_multiple <= 0 {
                return Err(FundingError::InvalidConfig(format!(
                    "stage '{stage}' has non-positive valuation multiple"
                )));
            }
        }

        let probabilities = [
            ("long_tail_probability", self.long_tail_probability),
            ("announce_probability", self.announce_probability),
            ("metric_selection_probability", self.metric_selection_probability),
        ];
        for (name, p) in probabilities {
            if !(0.0..=1.0).contains(&p) {
                return Err(FundingError::InvalidConfig(format!("{name} = {p} outside [0, 1]")));
            }
        }

        let [lo, hi] = self.round_gap_months;
        if lo == 0 || lo > hi {
            return Err(FundingError::InvalidConfig(format!(
                "round_gap_months [{lo}, {hi}] must be increasing and start above zero"
            )));
        }
        if self.name_retry_limit == 0 {
            return Err(FundingError::InvalidConfig("name_retry_limit must be positive".into()));
        }
        Ok(())
    }
}
