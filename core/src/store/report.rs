//! Aggregate queries behind the dashboard document.

use super::FundingStore;
use crate::{
    error::FundingResult,
    report::{CompanyRollup, IndustryTotal, InvestorRanking, Overview, StageBucket, YearStageFunding},
    types::Stage,
};
use rusqlite::{params, OptionalExtension};

/// SQL expression ranking `column` by stage progression (Pre-Seed = 1).
/// Unknown labels rank last.
pub fn stage_rank_sql(column: &str) -> String {
    let arms: String = Stage::ALL
        .iter()
        .map(|s| format!(" WHEN '{}' THEN {}", s.label(), s.index() + 1))
        .collect();
    format!("CASE {column}{arms} ELSE {} END", Stage::ALL.len() + 1)
}

impl FundingStore {
    pub fn report_overview(&self) -> FundingResult<Overview> {
        let top_industry: Option<String> = self
            .conn
            .query_row(
                "SELECT s.industry
                 FROM funding_rounds fr JOIN startups s ON fr.startup_id = s.id
                 GROUP BY s.industry
                 ORDER BY SUM(fr.amount_usd) DESC, s.industry ASC
                 LIMIT 1",
                [],
                |r| r.get(0),
            )
            .optional()?;

        Ok(self.conn.query_row(
            "SELECT
                (SELECT COUNT(*) FROM startups),
                (SELECT COUNT(*) FROM funding_rounds),
                (SELECT COUNT(*) FROM investors),
                (SELECT COALESCE(SUM(amount_usd), 0) FROM funding_rounds),
                (SELECT CAST(ROUND(AVG(amount_usd)) AS INTEGER) FROM funding_rounds),
                (SELECT CAST(ROUND(AVG(valuation_usd)) AS INTEGER)
                   FROM funding_rounds WHERE valuation_usd > 0),
                (SELECT MIN(funding_date) FROM funding_rounds),
                (SELECT MAX(funding_date) FROM funding_rounds)",
            [],
            |r| {
                Ok(Overview {
                    total_startups: r.get(0)?,
                    total_rounds: r.get(1)?,
                    total_investors: r.get(2)?,
                    total_funding: r.get(3)?,
                    avg_deal_size: r.get(4)?,
                    avg_valuation: r.get(5)?,
                    min_date: r.get(6)?,
                    max_date: r.get(7)?,
                    top_industry: top_industry.unwrap_or_else(|| "N/A".to_string()),
                })
            },
        )?)
    }

    pub fn report_funding_by_year_stage(&self) -> FundingResult<Vec<YearStageFunding>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT strftime('%Y', funding_date) AS year, stage,
                    SUM(amount_usd), COUNT(*)
             FROM funding_rounds
             GROUP BY year, stage
             ORDER BY year ASC, {}",
            stage_rank_sql("stage")
        ))?;
        let rows = stmt
            .query_map([], |r| {
                Ok(YearStageFunding {
                    year: r.get(0)?,
                    stage: r.get(1)?,
                    total: r.get(2)?,
                    deals: r.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    pub fn report_stage_distribution(&self) -> FundingResult<Vec<StageBucket>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT stage, COUNT(*), SUM(amount_usd), CAST(ROUND(AVG(amount_usd)) AS INTEGER)
             FROM funding_rounds
             GROUP BY stage
             ORDER BY {}",
            stage_rank_sql("stage")
        ))?;
        let rows = stmt
            .query_map([], |r| {
                Ok(StageBucket {
                    stage: r.get(0)?,
                    count: r.get(1)?,
                    total: r.get(2)?,
                    avg: r.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    pub fn report_industry_breakdown(&self) -> FundingResult<Vec<IndustryTotal>> {
        let mut stmt = self.conn.prepare(
            "SELECT s.industry, COUNT(*), SUM(fr.amount_usd) AS total
             FROM funding_rounds fr JOIN startups s ON fr.startup_id = s.id
             GROUP BY s.industry
             ORDER BY total DESC, s.industry ASC",
        )?;
        let rows = stmt
            .query_map([], |r| {
                Ok(IndustryTotal {
                    industry: r.get(0)?,
                    deals: r.get(1)?,
                    total: r.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Investors ranked by capital led, read through `investor_portfolio`.
    pub fn report_top_investors(&self, limit: usize) -> FundingResult<Vec<InvestorRanking>> {
        let mut stmt = self.conn.prepare(
            "SELECT investor_name, investor_type, portfolio_companies,
                    total_investments, total_invested
             FROM investor_portfolio
             ORDER BY total_invested DESC, investor_name ASC
             LIMIT ?1",
        )?;
        let rows = stmt
            .query_map(params![limit as i64], |r| {
                Ok(InvestorRanking {
                    name: r.get(0)?,
                    kind: r.get(1)?,
                    companies: r.get(2)?,
                    deals: r.get(3)?,
                    total_invested: r.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// One row per startup, funded or not, by total funding descending.
    pub fn report_companies(&self) -> FundingResult<Vec<CompanyRollup>> {
        let rank = stage_rank_sql("l.stage");
        let mut stmt = self.conn.prepare(&format!(
            "SELECT s.name, s.industry, s.headquarters, s.founded_date,
                    COUNT(fr.id),
                    COALESCE(SUM(fr.amount_usd), 0) AS total_funding,
                    (SELECT l.stage FROM funding_rounds l
                      WHERE l.startup_id = s.id
                      ORDER BY {rank} DESC LIMIT 1),
                    (SELECT l.valuation_usd FROM funding_rounds l
                      WHERE l.startup_id = s.id
                      ORDER BY l.funding_date DESC LIMIT 1)
             FROM startups s
             LEFT JOIN funding_rounds fr ON fr.startup_id = s.id
             GROUP BY s.id
             ORDER BY total_funding DESC, s.name ASC"
        ))?;
        let rows = stmt
            .query_map([], |r| {
                Ok(CompanyRollup {
                    name: r.get(0)?,
                    industry: r.get(1)?,
                    headquarters: r.get(2)?,
                    founded_date: r.get(3)?,
                    rounds: r.get(4)?,
                    total_funding: r.get(5)?,
                    latest_stage: r.get(6)?,
                    latest_valuation: r.get(7)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}
