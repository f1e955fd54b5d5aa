//! Player scraper
//!
//! Fetches the fantasy draft-analysis listing, the yearly rushing/receiving/passing
//! tables, per-player game logs and the team defense ratings page, and extracts
//! typed records from them with CSS selector queries.

pub mod config;
pub mod defense_ratings;
pub mod draft_board;
pub mod error;
pub mod fetcher;
pub mod game_log;
mod html;
pub mod names;
pub mod scraper;
pub mod season_table;
pub mod types;

pub use config::ScraperConfig;
pub use defense_ratings::DefenseRatingsTable;
pub use error::{Result, ScrapeError};
pub use fetcher::{HttpPageSource, PageSource, StaticPageSource};
pub use crate::scraper::StatsScraper;
pub use season_table::SeasonTable;
pub use types::{DefenseRatings, DraftEntry, GameLogSamples, Position, SeasonKind, StatKind};
