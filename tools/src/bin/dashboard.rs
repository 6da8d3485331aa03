//! funding-dashboard: aggregates the store into the static HTML dashboard.
//!
//! Usage:
//!   funding-dashboard

use anyhow::Result;
use funding_core::{assembler, report::ReportDocument, store::FundingStore};
use funding_tools::{DASHBOARD_OUTPUT_PATH, DASHBOARD_TEMPLATE_PATH, DB_PATH};
use std::path::Path;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let doc = {
        let store = FundingStore::open_read_only(DB_PATH)?;
        ReportDocument::build(&store)?
    };

    assembler::write_dashboard(
        Path::new(DASHBOARD_TEMPLATE_PATH),
        Path::new(DASHBOARD_OUTPUT_PATH),
        &doc,
    )?;

    let o = &doc.overview;
    println!("Dashboard written to {DASHBOARD_OUTPUT_PATH}");
    println!(
        "  {} startups, {} rounds, {} investors",
        o.total_startups, o.total_rounds, o.total_investors
    );
    println!("  Total funding: ${:.2}B", o.total_funding as f64 / 1e9);
    Ok(())
}
