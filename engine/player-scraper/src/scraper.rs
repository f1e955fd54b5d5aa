use tracing::info;

use crate::config::ScraperConfig;
use crate::defense_ratings::DefenseRatingsTable;
use crate::draft_board::parse_draft_page;
use crate::error::Result;
use crate::fetcher::PageSource;
use crate::game_log::parse_game_log;
use crate::season_table::SeasonTable;
use crate::types::{DraftEntry, GameLogSamples, SeasonKind, StatKind};

/// Fetches and extracts the draft board, season tables, game logs and defense ratings
pub struct StatsScraper<S: PageSource> {
    source: S,
    config: ScraperConfig,
}

impl<S: PageSource> StatsScraper<S> {
    /// Create a new scraper over a page source
    pub fn new(source: S, config: ScraperConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// Collect the draft listing up to the configured player cap
    ///
    /// Each page after the first is requested with the number of players
    /// collected so far. A page shorter than the configured page size ends the
    /// listing.
    pub async fn fetch_draft_board(&self) -> Result<Vec<DraftEntry>> {
        let max_players = self.config.max_players;
        let season = self.config.season;
        info!("Starting to scrape up to {} players for the {} draft", max_players, season);

        let mut entries: Vec<DraftEntry> = Vec::new();
        while entries.len() < max_players {
            let url = self.config.draft_page_url(entries.len());
            let html = self.source.fetch(&url).await?;
            let page = parse_draft_page(&html, max_players - entries.len())?;

            info!("Parsed {} players from page at offset {}", page.len(), entries.len());

            let exhausted = page.is_empty() || page.len() < self.config.page_size;
            entries.extend(page);
            if exhausted {
                break;
            }
        }

        info!("Successfully scraped {} players", entries.len());
        Ok(entries)
    }

    pub async fn fetch_season_table(&self, kind: SeasonKind) -> Result<SeasonTable> {
        let html = self.source.fetch(&self.config.season_table_url(kind)).await?;
        SeasonTable::parse(&html, kind)
    }

    /// Weekly samples of `stats` from the game log behind a season-table link
    pub async fn fetch_game_log(
        &self,
        player_link: &str,
        stats: &[StatKind],
    ) -> Result<GameLogSamples> {
        let html = self.source.fetch(&self.config.game_log_url(player_link)).await?;
        parse_game_log(&html, stats)
    }

    pub async fn fetch_defense_ratings(&self) -> Result<DefenseRatingsTable> {
        let html = self.source.fetch(&self.config.defense_ratings_url()).await?;
        DefenseRatingsTable::parse(&html)
    }
}
