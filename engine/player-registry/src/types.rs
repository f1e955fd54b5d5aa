use player_scraper::{DefenseRatings, GameLogSamples, Position};
use points_engine::{PlayerStats, ScoreLine, StatRanks};
use serde::{Deserialize, Serialize};

/// Who a roster entry is and where it sits in its position bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerIdentity {
    /// ASCII display name (e.g., "Christian McCaffrey")
    pub name: String,

    /// Upper-cased team abbreviation (e.g., "CAR")
    pub team: String,

    pub position: Position,

    /// Position-sequence label in fetch order (e.g., "RB3")
    pub label: String,
}

/// Draft-analysis metrics
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DraftMetrics {
    pub avg_pick: f64,
    pub avg_round: f64,
}

/// A drafted RB, WR, TE, QB or K
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub identity: PlayerIdentity,
    pub draft: DraftMetrics,

    /// Weekly values behind `stats`, kept only when a game log was found
    pub samples: Option<GameLogSamples>,

    /// `None` until looked up; kickers are never looked up
    pub stats: Option<PlayerStats>,

    /// Ranks against same-position peers, empty unless the position is ranked
    pub ranks: StatRanks,

    pub scores: Option<ScoreLine>,
}

impl Player {
    pub fn new(identity: PlayerIdentity, draft: DraftMetrics) -> Self {
        Self {
            identity,
            draft,
            samples: None,
            stats: None,
            ranks: StatRanks::new(),
            scores: None,
        }
    }
}

/// A drafted team defense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defense {
    pub identity: PlayerIdentity,
    pub draft: DraftMetrics,

    /// `None` when the team is missing from the ratings page
    pub ratings: Option<DefenseRatings>,
}

/// One row of the roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RosterEntry {
    Player(Player),
    Defense(Defense),
}

impl RosterEntry {
    pub fn identity(&self) -> &PlayerIdentity {
        match self {
            RosterEntry::Player(player) => &player.identity,
            RosterEntry::Defense(defense) => &defense.identity,
        }
    }

    pub fn draft(&self) -> &DraftMetrics {
        match self {
            RosterEntry::Player(player) => &player.draft,
            RosterEntry::Defense(defense) => &defense.draft,
        }
    }

    pub fn position(&self) -> Position {
        self.identity().position
    }
}
