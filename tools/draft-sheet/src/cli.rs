//! # Command Line Interface
//!
//! `draft-sheet [MODE] [--config FILE]`

use clap::Parser;
use std::path::PathBuf;

use crate::writer::OutputMode;

pub const USAGE: &str = "Permitted arguments for this script:
   > no arguments: generate unsorted list of players with stats
   > \"sorted\": generate list of players sorted and separated by position
   > \"-h\": print this help message
";

/// Draft sheet generator
#[derive(Parser, Debug)]
#[command(name = "draft-sheet")]
#[command(about = "Builds a fantasy football draft sheet CSV")]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Output mode: none for the raw list, "sorted" for the positional sheet
    #[arg(allow_hyphen_values = true)]
    pub mode: Option<String>,

    /// Path to a TOML configuration file
    #[arg(long, env = "DRAFT_SHEET_CONFIG")]
    pub config: Option<PathBuf>,
}

/// What an invocation asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(OutputMode),
    Help,
    Invalid(String),
}

impl Cli {
    pub fn command(&self) -> Command {
        match self.mode.as_deref() {
            None => Command::Run(OutputMode::Flat),
            Some("sorted") => Command::Run(OutputMode::Grouped),
            Some("-h") => Command::Help,
            Some(other) => Command::Invalid(other.to_string()),
        }
    }
}
