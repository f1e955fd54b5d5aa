use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ScrapeError;

/// Fantasy roster position as listed on the draft board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    Rb,
    Wr,
    Te,
    Qb,
    K,
    Def,
}

impl Position {
    /// Fixed block order of the positional sheet
    pub const ORDER: [Position; 6] =
        [Position::Rb, Position::Wr, Position::Te, Position::Qb, Position::K, Position::Def];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Rb => "RB",
            Position::Wr => "WR",
            Position::Te => "TE",
            Position::Qb => "QB",
            Position::K => "K",
            Position::Def => "DEF",
        }
    }

    /// Game-log columns collected for players at this position
    pub fn tracked_stats(&self) -> &'static [StatKind] {
        match self {
            Position::Rb => &[
                StatKind::RushAtt,
                StatKind::RushYds,
                StatKind::Rec,
                StatKind::RecYds,
                StatKind::RushTd,
            ],
            Position::Wr | Position::Te => &[StatKind::Rec, StatKind::RecYds, StatKind::RecTd],
            Position::Qb => {
                &[StatKind::PassCmp, StatKind::PassYds, StatKind::PassTd, StatKind::PassInt]
            }
            Position::K | Position::Def => &[],
        }
    }

    /// Season table that indexes players at this position
    pub fn season_table(&self) -> Option<SeasonKind> {
        match self {
            Position::Rb => Some(SeasonKind::Rushing),
            Position::Wr | Position::Te => Some(SeasonKind::Receiving),
            Position::Qb => Some(SeasonKind::Passing),
            Position::K | Position::Def => None,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = ScrapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "RB" => Ok(Position::Rb),
            "WR" => Ok(Position::Wr),
            "TE" => Ok(Position::Te),
            "QB" => Ok(Position::Qb),
            "K" => Ok(Position::K),
            "DEF" => Ok(Position::Def),
            other => Err(ScrapeError::UnknownPosition(other.to_string())),
        }
    }
}

/// A per-game statistic column of the game-log table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    RushAtt,
    RushYds,
    RushTd,
    Rec,
    RecYds,
    RecTd,
    PassCmp,
    PassYds,
    PassTd,
    PassInt,
}

impl StatKind {
    /// Column key used by the game-log table (`data-stat` attribute)
    pub fn as_str(&self) -> &'static str {
        match self {
            StatKind::RushAtt => "rush_att",
            StatKind::RushYds => "rush_yds",
            StatKind::RushTd => "rush_td",
            StatKind::Rec => "rec",
            StatKind::RecYds => "rec_yds",
            StatKind::RecTd => "rec_td",
            StatKind::PassCmp => "pass_cmp",
            StatKind::PassYds => "pass_yds",
            StatKind::PassTd => "pass_td",
            StatKind::PassInt => "pass_int",
        }
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Yearly stat listing pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonKind {
    Rushing,
    Receiving,
    Passing,
}

impl SeasonKind {
    /// Page slug, which is also the id of the table on the page
    pub fn as_str(&self) -> &'static str {
        match self {
            SeasonKind::Rushing => "rushing",
            SeasonKind::Receiving => "receiving",
            SeasonKind::Passing => "passing",
        }
    }
}

impl fmt::Display for SeasonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the draft-analysis listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftEntry {
    /// ASCII display name (e.g., "Christian McCaffrey")
    pub name: String,
    /// Upper-cased team abbreviation (e.g., "CAR")
    pub team: String,
    pub position: Position,
    /// Average draft pick
    pub avg_pick: f64,
    /// Average draft round
    pub avg_round: f64,
}

/// Team defense ratings, passed through as published
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefenseRatings {
    pub overall: String,
    pub pass: String,
    pub run: String,
}

/// Weekly values per statistic, one entry per game-log row
pub type GameLogSamples = BTreeMap<StatKind, Vec<f64>>;
