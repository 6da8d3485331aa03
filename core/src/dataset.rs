//! In-memory accumulator for one generation pass.

use crate::{
    investor_sampler::InvestorRecord,
    metric_sampler::MetricSnapshotRecord,
    round_sampler::FundingRoundRecord,
    startup_sampler::StartupRecord,
};
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub investors: Vec<InvestorRecord>,
    pub startups: Vec<StartupRecord>,
    pub rounds: Vec<FundingRoundRecord>,
    pub metrics: Vec<MetricSnapshotRecord>,
    /// Every startup name handed out so far.
    pub used_names: HashSet<String>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshots of one startup, in date order.
    pub fn metrics_for<'a>(&'a self, startup_id: &'a str) -> impl Iterator<Item = &'a MetricSnapshotRecord> + 'a {
        self.metrics.iter().filter(move |m| m.startup_id == startup_id)
    }
}
