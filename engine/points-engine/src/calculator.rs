use crate::config::{PositionFormula, ScoringConfig};
use crate::models::*;
use player_scraper::Position;
use tracing::debug;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Population mean and standard deviation of weekly samples, rounded to 2 decimals
///
/// An empty sample list is treated as a single 0.0 week.
pub fn summarize(samples: &[f64]) -> StatSummary {
    let samples = if samples.is_empty() { &[0.0][..] } else { samples };
    let n = samples.len() as f64;

    let mean = samples.iter().sum::<f64>() / n;
    let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;

    StatSummary { mean: round2(mean), std_dev: round2(variance.sqrt()) }
}

/// Points calculator for the derived per-player scores
pub struct PointsCalculator {
    config: ScoringConfig,
}

impl PointsCalculator {
    /// Create a new points calculator
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Derived scores of a player, or `None` for positions without a formula
    pub fn score(&self, position: Position, stats: &PlayerStats) -> Option<ScoreLine> {
        let formula = self.config.formula_for(position)?;
        let line = self.apply(formula, stats);
        debug!("Scored {} line {:?}", position, line);
        Some(line)
    }

    fn apply(&self, formula: &PositionFormula, stats: &PlayerStats) -> ScoreLine {
        let k = self.config.deviation_multiplier;

        let mut with_td = 0.0;
        let mut no_td = 0.0;
        let mut low = 0.0;
        let mut high = 0.0;

        for term in &formula.terms {
            let summary = stats.summary(term.stat);
            let points = term.weight * summary.mean;

            with_td += points;
            if !term.touchdown {
                no_td += points;
            }

            if let Some(shift) = term.shift {
                let (low_sign, high_sign) = shift.signs();
                low += term.weight * (summary.mean + low_sign * k * summary.std_dev);
                high += term.weight * (summary.mean + high_sign * k * summary.std_dev);
            }
        }

        let volatility = (low - high).abs();
        if formula.split_touchdowns {
            ScoreLine::Split { with_td, no_td, volatility }
        } else {
            ScoreLine::Combined { expected: with_td, volatility }
        }
    }
}
