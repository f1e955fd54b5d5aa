//! Per-player weekly game log extractor

use scraper::Html;
use tracing::debug;

use crate::error::{Result, ScrapeError};
use crate::html::{raw_text, selector};
use crate::types::{GameLogSamples, StatKind};

const BODY_SELECTOR: &str = "table#stats tbody";

/// Collect one sample per game-log row for each requested statistic
///
/// A statistic with no cells in the table maps to an empty sample list.
pub fn parse_game_log(html: &str, stats: &[StatKind]) -> Result<GameLogSamples> {
    let document = Html::parse_document(html);
    let body_selector = selector(BODY_SELECTOR)?;
    let body = document
        .select(&body_selector)
        .next()
        .ok_or_else(|| ScrapeError::missing("game log table body"))?;

    let mut samples = GameLogSamples::new();
    for stat in stats {
        let cells = selector(&format!(r#"td[data-stat="{}"]"#, stat.as_str()))?;
        let weeks: Vec<f64> =
            body.select(&cells).map(|cell| cell_value(&raw_text(&cell))).collect();
        debug!("{}: {} weekly values", stat, weeks.len());
        samples.insert(*stat, weeks);
    }

    Ok(samples)
}

/// Numeric value of a game-log cell
///
/// Only text made entirely of digits counts as a number; anything else,
/// including empty cells and negative values, reads as 0.0.
pub fn cell_value(text: &str) -> f64 {
    if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
        text.parse().unwrap_or(0.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GAME_LOG: &str = r#"<html><body>
        <table id="stats">
          <thead>
            <tr><th data-stat="week_num">Week</th><th data-stat="rush_att">Att</th></tr>
          </thead>
          <tbody>
            <tr><th data-stat="week_num">1</th><td data-stat="rush_att">19</td>
                <td data-stat="rush_yds">128</td><td data-stat="rec">10</td></tr>
            <tr><th data-stat="week_num">2</th><td data-stat="rush_att">16</td>
                <td data-stat="rush_yds">-3</td><td data-stat="rec"></td></tr>
            <tr><th data-stat="week_num">3</th><td data-stat="rush_att">24</td>
                <td data-stat="rush_yds">153</td><td data-stat="rec">2</td></tr>
          </tbody>
        </table>
        <table id="other"><tbody><tr><td data-stat="rush_att">99</td></tr></tbody></table>
    </body></html>"#;

    #[test]
    fn test_parse_game_log() {
        let samples = parse_game_log(
            GAME_LOG,
            &[StatKind::RushAtt, StatKind::RushYds, StatKind::Rec, StatKind::RushTd],
        )
        .unwrap();

        assert_eq!(samples[&StatKind::RushAtt], vec![19.0, 16.0, 24.0]);
        assert_eq!(samples[&StatKind::RushYds], vec![128.0, 0.0, 153.0]);
        assert_eq!(samples[&StatKind::Rec], vec![10.0, 0.0, 2.0]);
        assert!(samples[&StatKind::RushTd].is_empty());
    }

    #[test]
    fn test_missing_table_is_an_error() {
        let result = parse_game_log("<html><body><p>gone</p></body></html>", &[StatKind::Rec]);
        assert!(matches!(result, Err(ScrapeError::MissingElement(_))));
    }

    #[test]
    fn test_cell_value() {
        assert_eq!(cell_value("128"), 128.0);
        assert_eq!(cell_value("0"), 0.0);
        assert_eq!(cell_value(""), 0.0);
        assert_eq!(cell_value("-3"), 0.0);
        assert_eq!(cell_value("4.5"), 0.0);
        assert_eq!(cell_value(" 7"), 0.0);
        assert_eq!(cell_value("Inactive"), 0.0);
    }
}
