//! Shared primitive types used across the generator and the reporter.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A stable, unique identifier for any persisted entity.
pub type EntityId = String;

/// Funding round stage. Declaration order is the progression order,
/// so the derived `Ord` is the stage order used everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stage {
    #[serde(rename = "Pre-Seed")]
    PreSeed,
    #[serde(rename = "Seed")]
    Seed,
    #[serde(rename = "Series A")]
    SeriesA,
    #[serde(rename = "Series B")]
    SeriesB,
    #[serde(rename = "Series C")]
    SeriesC,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::PreSeed,
        Stage::Seed,
        Stage::SeriesA,
        Stage::SeriesB,
        Stage::SeriesC,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::PreSeed => "Pre-Seed",
            Self::Seed    => "Seed",
            Self::SeriesA => "Series A",
            Self::SeriesB => "Series B",
            Self::SeriesC => "Series C",
        }
    }

    pub fn from_label(label: &str) -> Option<Stage> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }

    /// Position in the progression, starting at 0 for Pre-Seed.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Investor category as persisted in `investors.type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvestorKind {
    Venture,
    GrowthEquity,
    SeedFund,
    Corporate,
}

impl InvestorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Venture      => "vc",
            Self::GrowthEquity => "growth_equity",
            Self::SeedFund     => "seed_fund",
            Self::Corporate    => "corporate",
        }
    }
}
