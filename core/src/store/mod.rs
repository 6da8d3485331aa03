//! SQLite persistence layer.
//!
//! RULE: Only the store talks to the database.
//! Samplers and the report builder call store methods and never
//! execute SQL directly.

mod report;

use crate::{
    dataset::Dataset,
    error::{FundingError, FundingResult},
    investor_sampler::InvestorRecord,
    metric_sampler::MetricSnapshotRecord,
    round_sampler::FundingRoundRecord,
    startup_sampler::StartupRecord,
    types::Stage,
};
use chrono::NaiveDate;
use rusqlite::{params, types::Type, Connection, OpenFlags, OptionalExtension, Row};
use std::path::Path;

pub use report::stage_rank_sql;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct FundingStore {
    conn: Connection,
}

/// Row counts of the four base tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableCounts {
    pub startups: i64,
    pub investors: i64,
    pub rounds: i64,
    pub metrics: i64,
}

/// One row of the `funding_summary` view.
#[derive(Debug, Clone, PartialEq)]
pub struct FundingSummaryRow {
    pub year: String,
    pub industry: String,
    pub stage: String,
    pub deal_count: i64,
    pub total_funding: i64,
    pub avg_deal_size: f64,
    pub avg_valuation: f64,
}

impl FundingStore {
    /// Open (or create) the store at `path` for writing.
    pub fn open(path: &str) -> FundingResult<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE,
        )?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Open an existing store without write access.
    pub fn open_read_only(path: &str) -> FundingResult<Self> {
        if !Path::new(path).is_file() {
            return Err(FundingError::StoreMissing { path: path.to_string() });
        }
        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> FundingResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Drop every table and view, then recreate the base tables and indexes.
    pub fn rebuild_schema(&self) -> FundingResult<()> {
        self.conn
            .execute_batch(include_str!("../../../migrations/001_schema.sql"))?;
        Ok(())
    }

    /// Create the derived summary views. Idempotent.
    pub fn create_views(&self) -> FundingResult<()> {
        self.conn
            .execute_batch(include_str!("../../../migrations/002_views.sql"))?;
        Ok(())
    }

    /// Write a whole dataset in one transaction, parents before children.
    pub fn write_dataset(&self, dataset: &Dataset) -> FundingResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        for investor in &dataset.investors {
            self.insert_investor(investor)?;
        }
        for startup in &dataset.startups {
            self.insert_startup(startup)?;
        }
        for round in &dataset.rounds {
            self.insert_round(round)?;
        }
        for metric in &dataset.metrics {
            self.insert_metric(metric)?;
        }
        tx.commit()?;
        Ok(())
    }

    // ── Inserts ───────────────────────────────────────────────

    pub fn insert_investor(&self, inv: &InvestorRecord) -> FundingResult<()> {
        let focus_json = serde_json::to_string(&inv.focus)?;
        self.conn.execute(
            "INSERT INTO investors (id, name, type, focus_areas, notable_investments)
             VALUES (?1, ?2, ?3, ?4, NULL)",
            params![inv.investor_id, inv.name, inv.kind.as_str(), focus_json],
        )?;
        Ok(())
    }

    pub fn insert_startup(&self, s: &StartupRecord) -> FundingResult<()> {
        self.conn.execute(
            "INSERT INTO startups (
                id, name, industry, sub_industry, founded_date,
                description, website, headquarters
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                s.startup_id,
                s.name,
                s.industry,
                s.sub_industry,
                format_date(s.founded_date),
                s.description,
                s.website,
                s.headquarters,
            ],
        )?;
        Ok(())
    }

    pub fn insert_round(&self, r: &FundingRoundRecord) -> FundingResult<()> {
        self.conn.execute(
            "INSERT INTO funding_rounds (
                id, startup_id, stage, amount_usd, funding_date,
                lead_investor_id, valuation_usd, announced
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                r.round_id,
                r.startup_id,
                r.stage.label(),
                r.amount_usd,
                format_date(r.funding_date),
                r.lead_investor_id,
                r.valuation_usd,
                r.announced,
            ],
        )?;
        Ok(())
    }

    pub fn insert_metric(&self, m: &MetricSnapshotRecord) -> FundingResult<()> {
        self.conn.execute(
            "INSERT INTO startup_metrics (
                id, startup_id, metric_date, arr_usd, employee_count, monthly_active_users
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                m.metric_id,
                m.startup_id,
                format_date(m.metric_date),
                m.arr_usd,
                m.employee_count,
                m.monthly_active_users,
            ],
        )?;
        Ok(())
    }

    // ── Reads ─────────────────────────────────────────────────

    pub fn table_counts(&self) -> FundingResult<TableCounts> {
        Ok(self.conn.query_row(
            "SELECT
                (SELECT COUNT(*) FROM startups),
                (SELECT COUNT(*) FROM investors),
                (SELECT COUNT(*) FROM funding_rounds),
                (SELECT COUNT(*) FROM startup_metrics)",
            [],
            |r| {
                Ok(TableCounts {
                    startups: r.get(0)?,
                    investors: r.get(1)?,
                    rounds: r.get(2)?,
                    metrics: r.get(3)?,
                })
            },
        )?)
    }

    pub fn startup_by_name(&self, name: &str) -> FundingResult<Option<StartupRecord>> {
        let row = self
            .conn
            .query_row(
                "SELECT id, name, industry, sub_industry, founded_date,
                        description, website, headquarters
                 FROM startups WHERE name = ?1",
                params![name],
                |r| {
                    Ok(StartupRecord {
                        startup_id: r.get(0)?,
                        name: r.get(1)?,
                        industry: r.get(2)?,
                        sub_industry: r.get(3)?,
                        founded_date: date_column(r, 4)?,
                        description: r.get(5)?,
                        website: r.get(6)?,
                        headquarters: r.get(7)?,
                    })
                },
            )
            .optional()?;
        Ok(row)
    }

    /// Rounds of one startup ordered by date.
    pub fn rounds_for_startup(&self, startup_id: &str) -> FundingResult<Vec<FundingRoundRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, startup_id, stage, amount_usd, funding_date,
                    lead_investor_id, valuation_usd, announced
             FROM funding_rounds WHERE startup_id = ?1
             ORDER BY funding_date ASC",
        )?;
        let rounds = stmt
            .query_map(params![startup_id], |r| {
                Ok(FundingRoundRecord {
                    round_id: r.get(0)?,
                    startup_id: r.get(1)?,
                    stage: stage_column(r, 2)?,
                    amount_usd: r.get(3)?,
                    funding_date: date_column(r, 4)?,
                    lead_investor_id: r.get(5)?,
                    valuation_usd: r.get(6)?,
                    announced: r.get(7)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rounds)
    }

    /// Metric snapshots of one startup ordered by date.
    pub fn metrics_for_startup(&self, startup_id: &str) -> FundingResult<Vec<MetricSnapshotRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, startup_id, metric_date, arr_usd, employee_count, monthly_active_users
             FROM startup_metrics WHERE startup_id = ?1
             ORDER BY metric_date ASC",
        )?;
        let metrics = stmt
            .query_map(params![startup_id], |r| {
                Ok(MetricSnapshotRecord {
                    metric_id: r.get(0)?,
                    startup_id: r.get(1)?,
                    metric_date: date_column(r, 2)?,
                    arr_usd: r.get(3)?,
                    employee_count: r.get(4)?,
                    monthly_active_users: r.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(metrics)
    }

    /// Focus industries of an investor as persisted (JSON array text).
    pub fn investor_focus(&self, investor_id: &str) -> FundingResult<Option<Vec<String>>> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT focus_areas FROM investors WHERE id = ?1",
                params![investor_id],
                |r| r.get(0),
            )
            .optional()?;
        match raw {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Announced-round rollup from the `funding_summary` view.
    pub fn funding_summary(&self) -> FundingResult<Vec<FundingSummaryRow>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT year, industry, stage, deal_count, total_funding, avg_deal_size, avg_valuation
             FROM funding_summary
             ORDER BY year ASC, industry ASC, {}",
            stage_rank_sql("stage")
        ))?;
        let rows = stmt
            .query_map([], |r| {
                Ok(FundingSummaryRow {
                    year: r.get(0)?,
                    industry: r.get(1)?,
                    stage: r.get(2)?,
                    deal_count: r.get(3)?,
                    total_funding: r.get(4)?,
                    avg_deal_size: r.get(5)?,
                    avg_valuation: r.get(6)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn date_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<NaiveDate> {
    let raw: String = row.get(idx)?;
    NaiveDate::parse_from_str(&raw, DATE_FORMAT)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn stage_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Stage> {
    let raw: String = row.get(idx)?;
    Stage::from_label(&raw)
        .ok_or_else(|| rusqlite::Error::InvalidColumnType(idx, format!("stage '{raw}'"), Type::Text))
}
