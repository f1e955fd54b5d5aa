//! Draft sheet configuration

use anyhow::{Context, Result};
use player_scraper::ScraperConfig;
use points_engine::ScoringConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration of a draft sheet run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    /// Page sources and draft season
    pub scraper: ScraperConfig,

    /// Derived score formulas and ranked positions
    pub scoring: ScoringConfig,

    pub output: OutputConfig,

    pub logging: LoggingConfig,
}

/// Where the sheet is written
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub directory: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error); `RUST_LOG` takes precedence
    pub level: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { directory: PathBuf::from(".") }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string() }
    }
}

impl SheetConfig {
    /// Load configuration from TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: SheetConfig = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Config file when given, defaults otherwise, then environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Override settings from `DRAFT_SHEET_*` variables
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(season) = lookup("DRAFT_SHEET_SEASON") {
            self.scraper.season = parse_override("DRAFT_SHEET_SEASON", &season)?;
        }

        if let Some(max_players) = lookup("DRAFT_SHEET_MAX_PLAYERS") {
            self.scraper.max_players = parse_override("DRAFT_SHEET_MAX_PLAYERS", &max_players)?;
        }

        if let Some(directory) = lookup("DRAFT_SHEET_OUTPUT_DIR") {
            self.output.directory = PathBuf::from(directory);
        }

        if let Some(level) = lookup("DRAFT_SHEET_LOG_LEVEL") {
            self.logging.level = level;
        }

        Ok(())
    }
}

fn parse_override<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value.trim().parse().with_context(|| format!("invalid value '{value}' for {key}"))
}
