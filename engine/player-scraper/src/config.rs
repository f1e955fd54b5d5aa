//! Configuration for the scraper

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::types::SeasonKind;

/// Default draft season; stats are pulled from the season before it
pub const DEFAULT_SEASON: u16 = 2020;

/// Player cap, sized for a 15 round draft
pub const DEFAULT_MAX_PLAYERS: usize = 500;

/// Rows served per draft-listing page
pub const DEFAULT_PAGE_SIZE: usize = 25;

pub const DEFAULT_USER_AGENT: &str = concat!(
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 ",
    "(KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
);

/// Configuration for the page fetchers
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// Draft season (e.g., 2020)
    pub season: u16,

    /// Stop collecting the draft listing after this many players
    pub max_players: usize,

    /// Entries per draft-listing page
    pub page_size: usize,

    /// User agent sent with every request
    pub user_agent: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Source endpoints
    pub urls: SourceUrls,
}

/// Remote endpoints the scraper reads from
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceUrls {
    /// First page of the draft-analysis listing
    pub draft_listing: String,

    /// Query appended to the listing for later pages, followed by the running count
    pub draft_page_query: String,

    /// Site root of the season tables and game logs
    pub stats_base: String,

    /// Team defense ratings page, followed by the stats year
    pub defense_ratings: String,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            season: DEFAULT_SEASON,
            max_players: DEFAULT_MAX_PLAYERS,
            page_size: DEFAULT_PAGE_SIZE,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 30,
            urls: SourceUrls::default(),
        }
    }
}

impl Default for SourceUrls {
    fn default() -> Self {
        Self {
            draft_listing: "https://football.fantasysports.yahoo.com/f1/draftanalysis".to_string(),
            draft_page_query: "?tab=SD&pos=ALL&sort=DA_AP&count=".to_string(),
            stats_base: "https://www.pro-football-reference.com".to_string(),
            defense_ratings: "https://www.footballoutsiders.com/stats/nfl/team-defense/"
                .to_string(),
        }
    }
}

impl ScraperConfig {
    /// Season whose stats feed the draft season
    pub fn stats_year(&self) -> u16 {
        self.season.saturating_sub(1)
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Draft listing page starting after `count` collected players
    pub fn draft_page_url(&self, count: usize) -> String {
        if count == 0 {
            self.urls.draft_listing.clone()
        } else {
            format!("{}{}{}", self.urls.draft_listing, self.urls.draft_page_query, count)
        }
    }

    pub fn season_table_url(&self, kind: SeasonKind) -> String {
        format!("{}/years/{}/{}.htm", self.urls.stats_base, self.stats_year(), kind)
    }

    /// Game log page for a player link taken from a season table
    pub fn game_log_url(&self, player_link: &str) -> String {
        let player_path = player_link.strip_suffix(".htm").unwrap_or(player_link);
        format!("{}{}/gamelog/{}/", self.urls.stats_base, player_path, self.stats_year())
    }

    pub fn defense_ratings_url(&self) -> String {
        format!("{}{}", self.urls.defense_ratings, self.stats_year())
    }
}
