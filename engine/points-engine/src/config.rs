use player_scraper::{Position, StatKind};
use serde::{Deserialize, Serialize};

/// Direction each volatility scenario shifts a stat's mean by its deviation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shift {
    /// Low scenario subtracts the deviation, high scenario adds it
    Standard,
    /// Low scenario adds the deviation, high scenario subtracts it
    Inverted,
    /// Both scenarios add the deviation; the term cancels out of volatility
    Pinned,
}

impl Shift {
    /// Deviation signs for the (low, high) scenarios
    pub fn signs(&self) -> (f64, f64) {
        match self {
            Shift::Standard => (-1.0, 1.0),
            Shift::Inverted => (1.0, -1.0),
            Shift::Pinned => (1.0, 1.0),
        }
    }
}

/// One weighted stat of a scoring formula
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringTerm {
    pub stat: StatKind,

    /// League points per unit of the stat
    pub weight: f64,

    /// Touchdown terms are left out of the no-TD estimate
    #[serde(default)]
    pub touchdown: bool,

    /// Volatility perturbation; `None` keeps the term out of volatility
    #[serde(default)]
    pub shift: Option<Shift>,
}

impl ScoringTerm {
    pub fn new(stat: StatKind, weight: f64) -> Self {
        Self { stat, weight, touchdown: false, shift: None }
    }

    pub fn shifted(mut self, shift: Shift) -> Self {
        self.shift = Some(shift);
        self
    }

    pub fn touchdown(mut self) -> Self {
        self.touchdown = true;
        self
    }
}

/// Linear scoring formula for one position group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionFormula {
    pub terms: Vec<ScoringTerm>,

    /// Report with-TD and no-TD estimates separately instead of a single expectation
    pub split_touchdowns: bool,
}

/// Configuration of the derived scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Standard deviations applied in the volatility scenarios
    pub deviation_multiplier: f64,

    /// Positions whose players are ranked against each other
    pub ranked_positions: Vec<Position>,

    pub rb: PositionFormula,

    /// Shared by WR and TE
    pub receiver: PositionFormula,

    pub qb: PositionFormula,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            deviation_multiplier: 1.0,
            ranked_positions: vec![Position::Rb],
            rb: PositionFormula {
                terms: vec![
                    ScoringTerm::new(StatKind::RushYds, 0.1).shifted(Shift::Standard),
                    ScoringTerm::new(StatKind::Rec, 0.5).shifted(Shift::Inverted),
                    ScoringTerm::new(StatKind::RecYds, 0.1).shifted(Shift::Standard),
                    ScoringTerm::new(StatKind::RushTd, 6.0).touchdown(),
                ],
                split_touchdowns: true,
            },
            receiver: PositionFormula {
                terms: vec![
                    ScoringTerm::new(StatKind::RecYds, 0.1).shifted(Shift::Standard),
                    ScoringTerm::new(StatKind::Rec, 0.5).shifted(Shift::Standard),
                    ScoringTerm::new(StatKind::RecTd, 5.0).touchdown(),
                ],
                split_touchdowns: true,
            },
            qb: PositionFormula {
                terms: vec![
                    ScoringTerm::new(StatKind::PassCmp, 0.25).shifted(Shift::Standard),
                    ScoringTerm::new(StatKind::PassYds, 0.04).shifted(Shift::Standard),
                    ScoringTerm::new(StatKind::PassTd, 4.0).touchdown().shifted(Shift::Standard),
                    ScoringTerm::new(StatKind::PassInt, -2.0).shifted(Shift::Pinned),
                ],
                split_touchdowns: false,
            },
        }
    }
}

impl ScoringConfig {
    /// Formula for a position; kickers and defenses are not scored
    pub fn formula_for(&self, position: Position) -> Option<&PositionFormula> {
        match position {
            Position::Rb => Some(&self.rb),
            Position::Wr | Position::Te => Some(&self.receiver),
            Position::Qb => Some(&self.qb),
            Position::K | Position::Def => None,
        }
    }

    pub fn is_ranked(&self, position: Position) -> bool {
        self.ranked_positions.contains(&position)
    }
}
