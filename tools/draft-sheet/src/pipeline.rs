//! Fetch, enrich, rank and score the roster

use anyhow::{Context, Result};
use player_registry::PlayerRegistry;
use player_scraper::{PageSource, Position, SeasonKind, SeasonTable, StatsScraper};
use points_engine::{rank_pool, PlayerStats, PointsCalculator};
use std::collections::HashMap;
use tracing::{debug, info, warn};

use crate::config::SheetConfig;

/// One draft sheet run over a page source
pub struct DraftSheetPipeline<S: PageSource> {
    scraper: StatsScraper<S>,
    calculator: PointsCalculator,
}

impl<S: PageSource> DraftSheetPipeline<S> {
    /// Create a new pipeline
    pub fn new(source: S, config: &SheetConfig) -> Self {
        Self {
            scraper: StatsScraper::new(source, config.scraper.clone()),
            calculator: PointsCalculator::new(config.scoring.clone()),
        }
    }

    /// Build the fully enriched roster
    pub async fn build_registry(&self) -> Result<PlayerRegistry> {
        let board = self.scraper.fetch_draft_board().await.context("failed to fetch draft board")?;
        let mut registry = PlayerRegistry::from_draft(board);

        self.add_player_stats(&mut registry).await?;
        self.rank_players(&mut registry);
        self.score_players(&mut registry);
        self.add_defense_ratings(&mut registry).await?;

        Ok(registry)
    }

    async fn add_player_stats(&self, registry: &mut PlayerRegistry) -> Result<()> {
        let mut tables: HashMap<SeasonKind, SeasonTable> = HashMap::new();

        for position in Position::ORDER {
            let Some(kind) = position.season_table() else {
                continue;
            };
            if registry.players(position).next().is_none() {
                continue;
            }

            info!("Adding {} stats", position);
            if !tables.contains_key(&kind) {
                let table = self
                    .scraper
                    .fetch_season_table(kind)
                    .await
                    .with_context(|| format!("failed to fetch {} table", kind))?;
                tables.insert(kind, table);
            }
            let table = &tables[&kind];
            let tracked = position.tracked_stats();

            for player in registry.players_mut(position) {
                let name = &player.identity.name;
                match table.find_player_link(name) {
                    Some(link) => {
                        let samples = self
                            .scraper
                            .fetch_game_log(link, tracked)
                            .await
                            .with_context(|| format!("failed to fetch game log of {}", name))?;
                        player.stats = Some(PlayerStats::from_samples(tracked, &samples));
                        player.samples = Some(samples);
                    }
                    None => {
                        debug!("No game log for {}, stats default to zero", name);
                        player.stats = Some(PlayerStats::Unresolved);
                    }
                }
            }
        }

        Ok(())
    }

    fn rank_players(&self, registry: &mut PlayerRegistry) {
        let unresolved = PlayerStats::Unresolved;

        for position in Position::ORDER {
            if !self.calculator.config().is_ranked(position) {
                continue;
            }
            info!("Adding {} ranks", position);

            let tracked = position.tracked_stats();
            let ranks = {
                let pool: Vec<(&str, &PlayerStats)> = registry
                    .players(position)
                    .map(|p| (p.identity.name.as_str(), p.stats.as_ref().unwrap_or(&unresolved)))
                    .collect();
                rank_pool(&pool, tracked)
            };

            for (player, player_ranks) in registry.players_mut(position).zip(ranks) {
                player.ranks = player_ranks;
            }
        }
    }

    fn score_players(&self, registry: &mut PlayerRegistry) {
        for position in Position::ORDER {
            for player in registry.players_mut(position) {
                if let Some(stats) = &player.stats {
                    player.scores = self.calculator.score(position, stats);
                }
            }
        }
    }

    async fn add_defense_ratings(&self, registry: &mut PlayerRegistry) -> Result<()> {
        if registry.by_position(Position::Def).next().is_none() {
            return Ok(());
        }

        info!("Adding defense ratings");
        let table =
            self.scraper.fetch_defense_ratings().await.context("failed to fetch defense ratings")?;

        for defense in registry.defenses_mut() {
            defense.ratings = table.ratings_for(&defense.identity.team);
            if defense.ratings.is_none() {
                warn!("No defense ratings for {}", defense.identity.team);
            }
        }

        Ok(())
    }
}
