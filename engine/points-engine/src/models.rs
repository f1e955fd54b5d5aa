use player_scraper::{GameLogSamples, StatKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::calculator::summarize;

/// Mean and population standard deviation of one stat, rounded to 2 decimals
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StatSummary {
    pub mean: f64,
    pub std_dev: f64,
}

/// Game-log statistics of a player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerStats {
    /// The season-table lookup found no unique game log; every stat reads as zero
    Unresolved,
    /// Summaries computed from a resolved game log
    Observed(BTreeMap<StatKind, StatSummary>),
}

impl PlayerStats {
    /// Summarize the weekly samples of each tracked stat
    ///
    /// A stat without samples is summarized as a single 0.0 week.
    pub fn from_samples(stats: &[StatKind], samples: &GameLogSamples) -> Self {
        let summaries = stats
            .iter()
            .map(|stat| {
                let weeks = samples.get(stat).map(Vec::as_slice).unwrap_or(&[]);
                (*stat, summarize(weeks))
            })
            .collect();
        PlayerStats::Observed(summaries)
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, PlayerStats::Observed(_))
    }

    /// Summary of a stat, zero when unresolved or not tracked
    pub fn summary(&self, stat: StatKind) -> StatSummary {
        match self {
            PlayerStats::Unresolved => StatSummary::default(),
            PlayerStats::Observed(summaries) => summaries.get(&stat).copied().unwrap_or_default(),
        }
    }

    /// Starting ranks before peer comparison: (1, 1) when resolved, (0, 0) otherwise
    pub fn initial_ranks(&self, stats: &[StatKind]) -> StatRanks {
        let start = if self.is_resolved() { StatRank::FIRST } else { StatRank::UNRANKED };
        stats.iter().map(|stat| (*stat, start)).collect()
    }
}

/// Position among same-position peers, 1 = best
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatRank {
    /// Rank by mean
    pub by_volume: u32,
    /// Rank by standard deviation, lower deviation ranks better
    pub by_consistency: u32,
}

impl StatRank {
    pub const UNRANKED: StatRank = StatRank { by_volume: 0, by_consistency: 0 };
    pub const FIRST: StatRank = StatRank { by_volume: 1, by_consistency: 1 };
}

pub type StatRanks = BTreeMap<StatKind, StatRank>;

/// Derived fantasy point estimates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ScoreLine {
    /// RB/WR/TE: estimates with and without touchdowns
    Split { with_td: f64, no_td: f64, volatility: f64 },
    /// QB: a single expectation
    Combined { expected: f64, volatility: f64 },
}

impl ScoreLine {
    /// Values in sheet column order
    pub fn values(&self) -> Vec<f64> {
        match *self {
            ScoreLine::Split { with_td, no_td, volatility } => vec![with_td, no_td, volatility],
            ScoreLine::Combined { expected, volatility } => vec![expected, volatility],
        }
    }

    pub fn volatility(&self) -> f64 {
        match *self {
            ScoreLine::Split { volatility, .. } | ScoreLine::Combined { volatility, .. } => {
                volatility
            }
        }
    }
}
