//! Fixed locations and small helpers shared by the batch binaries.

use anyhow::{Context, Result};
use std::path::Path;

pub const DB_PATH: &str = "./data/startup-funding.db";
pub const GENERATOR_CONFIG_PATH: &str = "./data/generator_config.json";
pub const DASHBOARD_TEMPLATE_PATH: &str = "./templates/funding-dashboard-template.html";
pub const DASHBOARD_OUTPUT_PATH: &str = "./output/startup-funding-dashboard.html";

/// Seed from `FUNDING_SEED`, or from the wall clock when unset.
pub fn seed_from_env() -> Result<u64> {
    match std::env::var("FUNDING_SEED") {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("FUNDING_SEED must be an unsigned integer, got '{raw}'")),
        Err(_) => {
            let seed = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64;
            log::info!("FUNDING_SEED not set, using seed {seed} (set it to reproduce this run)");
            Ok(seed)
        }
    }
}

pub fn ensure_parent_dir(path: &str) -> Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Cannot create {}", parent.display()))?;
    }
    Ok(())
}
