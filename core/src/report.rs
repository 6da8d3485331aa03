//! The aggregate document the dashboard embeds.
//!
//! Field names serialize in camelCase because the dashboard template's
//! own script reads them under those names.

use crate::{error::FundingResult, store::FundingStore};
use serde::{Deserialize, Serialize};

/// Number of investors listed in `topInvestors`.
pub const TOP_INVESTOR_LIMIT: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub total_startups: i64,
    pub total_rounds: i64,
    pub total_investors: i64,
    pub total_funding: i64,
    pub avg_deal_size: Option<i64>,
    pub avg_valuation: Option<i64>,
    pub min_date: Option<String>,
    pub max_date: Option<String>,
    pub top_industry: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearStageFunding {
    pub year: String,
    pub stage: String,
    pub total: i64,
    pub deals: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageBucket {
    pub stage: String,
    pub count: i64,
    pub total: i64,
    pub avg: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryTotal {
    pub industry: String,
    pub deals: i64,
    pub total: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestorRanking {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub companies: i64,
    pub deals: i64,
    pub total_invested: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRollup {
    pub name: String,
    pub industry: String,
    pub headquarters: Option<String>,
    pub founded_date: Option<String>,
    pub rounds: i64,
    pub total_funding: i64,
    pub latest_stage: Option<String>,
    pub latest_valuation: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDocument {
    pub overview: Overview,
    pub funding_by_year_stage: Vec<YearStageFunding>,
    pub stage_distribution: Vec<StageBucket>,
    pub industry_breakdown: Vec<IndustryTotal>,
    pub top_investors: Vec<InvestorRanking>,
    pub companies: Vec<CompanyRollup>,
}

impl ReportDocument {
    /// Run every aggregate query once. Read-only.
    pub fn build(store: &FundingStore) -> FundingResult<Self> {
        let doc = Self {
            overview: store.report_overview()?,
            funding_by_year_stage: store.report_funding_by_year_stage()?,
            stage_distribution: store.report_stage_distribution()?,
            industry_breakdown: store.report_industry_breakdown()?,
            top_investors: store.report_top_investors(TOP_INVESTOR_LIMIT)?,
            companies: store.report_companies()?,
        };
        log::info!(
            "Report built: {} startups, {} rounds, {} investors ranked",
            doc.overview.total_startups,
            doc.overview.total_rounds,
            doc.top_investors.len()
        );
        Ok(doc)
    }
}
