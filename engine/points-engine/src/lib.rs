//! Points Engine
//!
//! Reduces weekly game-log samples to per-stat mean and standard deviation,
//! computes expected fantasy points and point volatility with position-specific
//! linear formulas, and ranks players against same-position peers.

pub mod calculator;
pub mod config;
pub mod models;
pub mod ranker;

pub use calculator::{summarize, PointsCalculator};
pub use config::{PositionFormula, ScoringConfig, ScoringTerm, Shift};
pub use models::*;
pub use ranker::rank_pool;
