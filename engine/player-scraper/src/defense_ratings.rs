//! Team defense ratings table

use scraper::Html;
use tracing::{debug, warn};

use crate::error::Result;
use crate::html::{raw_text, selector};
use crate::types::DefenseRatings;

const ROW_SELECTOR: &str = "table.sticky-headers.sortable.stats tr";

const TEAM_COLUMN: usize = 1;
const OVERALL_COLUMN: usize = 0;
const PASS_COLUMN: usize = 7;
const RUN_COLUMN: usize = 9;

/// Data rows of the ratings table, as trimmed cell texts
#[derive(Debug, Clone, Default)]
pub struct DefenseRatingsTable {
    rows: Vec<Vec<String>>,
}

impl DefenseRatingsTable {
    pub fn parse(html: &str) -> Result<Self> {
        let document = Html::parse_document(html);
        let row_selector = selector(ROW_SELECTOR)?;
        let cell_selector = selector("td")?;

        let mut rows = Vec::new();
        for row in document.select(&row_selector) {
            let cells: Vec<String> =
                row.select(&cell_selector).map(|td| raw_text(&td).trim().to_string()).collect();
            if cells.is_empty() {
                continue;
            }
            if cells.len() <= RUN_COLUMN {
                warn!("Skipping defense row with {} cells", cells.len());
                continue;
            }
            rows.push(cells);
        }

        debug!("Parsed {} defense rating rows", rows.len());
        Ok(Self { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Ratings of the team with this abbreviation; the last matching row wins
    pub fn ratings_for(&self, team: &str) -> Option<DefenseRatings> {
        self.rows.iter().filter(|cells| cells[TEAM_COLUMN] == team).last().map(|cells| {
            DefenseRatings {
                overall: cells[OVERALL_COLUMN].clone(),
                pass: cells[PASS_COLUMN].clone(),
                run: cells[RUN_COLUMN].clone(),
            }
        })
    }
}
