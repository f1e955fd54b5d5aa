//! Draft Sheet
//!
//! Scrapes the fantasy draft listing and last season's game logs, derives
//! expected points per player and writes the result to a CSV sheet.

pub mod cli;
pub mod config;
pub mod logging;
pub mod pipeline;
pub mod writer;


use anyhow::Result;
use player_scraper::{HttpPageSource, PageSource};
use std::path::PathBuf;
use tracing::info;

pub use cli::{Cli, Command, USAGE};
pub use config::SheetConfig;
pub use pipeline::DraftSheetPipeline;
pub use writer::OutputMode;

/// Run the whole pipeline against the live sites
pub async fn run(config: &SheetConfig, mode: OutputMode) -> Result<PathBuf> {
    let source = HttpPageSource::new(&config.scraper)?;
    run_with_source(source, config, mode, chrono::Utc::now().timestamp()).await
}

/// Run the whole pipeline over any page source, stamping the file with `timestamp`
pub async fn run_with_source<S: PageSource>(
    source: S,
    config: &SheetConfig,
    mode: OutputMode,
    timestamp: i64,
) -> Result<PathBuf> {
    info!("Building {:?} draft sheet for the {} season", mode, config.scraper.season);

    let pipeline = DraftSheetPipeline::new(source, config);
    let registry = pipeline.build_registry().await?;

    writer::write_sheet(&registry, mode, &config.output.directory, config.scraper.season, timestamp)
}
