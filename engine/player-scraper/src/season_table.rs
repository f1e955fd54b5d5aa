//! Yearly rushing/receiving/passing tables and player link lookup

use scraper::Html;
use tracing::{debug, warn};

use crate::error::Result;
use crate::html::selector;
use crate::names::{dotted_initials, lookup_key, split_name};
use crate::types::SeasonKind;

/// A player cell of a season table: its `"Last,First"` key and the links inside it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonRow {
    pub key: String,
    pub links: Vec<String>,
}

/// Index of one season table, keyed by player
#[derive(Debug, Clone)]
pub struct SeasonTable {
    kind: SeasonKind,
    rows: Vec<SeasonRow>,
}

impl SeasonTable {
    /// Index every keyed player cell of the table whose id is the page slug
    pub fn parse(html: &str, kind: SeasonKind) -> Result<Self> {
        let document = Html::parse_document(html);
        let cells = selector(&format!("table#{} td[csk]", kind.as_str()))?;
        let anchors = selector("a[href]")?;

        let rows: Vec<SeasonRow> = document
            .select(&cells)
            .filter_map(|cell| {
                let key = cell.value().attr("csk")?.to_string();
                let links = cell
                    .select(&anchors)
                    .filter_map(|a| a.value().attr("href"))
                    .map(str::to_string)
                    .collect();
                Some(SeasonRow { key, links })
            })
            .collect();

        if rows.is_empty() {
            warn!("No player rows found in {} table", kind);
        } else {
            debug!("Indexed {} rows of the {} table", rows.len(), kind);
        }

        Ok(Self { kind, rows })
    }

    pub fn kind(&self) -> SeasonKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn rows_keyed(&self, key: &str) -> Vec<&SeasonRow> {
        self.rows.iter().filter(|row| row.key == key).collect()
    }

    /// Resolve a draft-board name to the link of the player's page
    ///
    /// Requires exactly one row keyed `"Last,First"`; when that fails and the
    /// first name is two uppercase initials, `"Last,F.M."` is tried instead.
    /// The matched cell must carry exactly one link.
    pub fn find_player_link(&self, name: &str) -> Option<&str> {
        let (first, last) = split_name(name)?;

        let mut candidates = self.rows_keyed(&lookup_key(first, last));
        if candidates.len() != 1 {
            if let Some(dotted) = dotted_initials(first) {
                candidates = self.rows_keyed(&lookup_key(&dotted, last));
            }
        }

        match candidates.as_slice() {
            [row] if row.links.len() == 1 => Some(row.links[0].as_str()),
            _ => {
                let count = candidates.len();
                debug!("No unique {} row for {} ({} candidates)", self.kind, name, count);
                None
            }
        }
    }
}
