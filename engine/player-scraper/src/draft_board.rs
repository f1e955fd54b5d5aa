//! Draft-analysis listing extractor

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::error::{Result, ScrapeError};
use crate::html::{child_text, selector};
use crate::names::ascii_name;
use crate::types::{DraftEntry, Position};

const ROW_SELECTOR: &str = "table#draftanalysistable tbody tr";
const LABEL_SELECTOR: &str = "span.Fz-xxs";
const NAME_SELECTOR: &str = "a.name";
const PICK_SELECTOR: &str = "td.Ta-end div";
const ROUND_SELECTOR: &str = "td.Alt.Last div";

struct RowSelectors {
    label: Selector,
    name: Selector,
    pick: Selector,
    round: Selector,
}

/// Parse one page of the draft listing, reading at most `remaining` rows
pub fn parse_draft_page(html: &str, remaining: usize) -> Result<Vec<DraftEntry>> {
    let document = Html::parse_document(html);
    let rows = selector(ROW_SELECTOR)?;
    let selectors = RowSelectors {
        label: selector(LABEL_SELECTOR)?,
        name: selector(NAME_SELECTOR)?,
        pick: selector(PICK_SELECTOR)?,
        round: selector(ROUND_SELECTOR)?,
    };

    let mut entries = Vec::new();
    for row in document.select(&rows) {
        if entries.len() >= remaining {
            break;
        }
        let entry = parse_draft_row(&row, &selectors)?;
        debug!("Draft row {}: {} ({} - {})", entries.len(), entry.name, entry.team, entry.position);
        entries.push(entry);
    }

    Ok(entries)
}

fn parse_draft_row(row: &ElementRef, selectors: &RowSelectors) -> Result<DraftEntry> {
    let label = child_text(row, &selectors.label)
        .ok_or_else(|| ScrapeError::missing("team/position label"))?;
    let (team, position) = parse_position_label(&label)?;

    let name = child_text(row, &selectors.name)
        .map(|raw| ascii_name(&raw))
        .ok_or_else(|| ScrapeError::missing("player name link"))?;

    let avg_pick = parse_metric(row, &selectors.pick, "avg_pick")?;
    let avg_round = parse_metric(row, &selectors.round, "avg_round")?;

    Ok(DraftEntry { name, team, position, avg_pick, avg_round })
}

/// Split a compact "TEAM - POS" label into upper-cased team and position
pub fn parse_position_label(label: &str) -> Result<(String, Position)> {
    let (team, position) = label
        .trim()
        .split_once(" - ")
        .ok_or_else(|| ScrapeError::missing(format!("' - ' separator in label '{label}'")))?;

    Ok((team.trim().to_uppercase(), position.parse()?))
}

fn parse_metric(row: &ElementRef, cell: &Selector, field: &'static str) -> Result<f64> {
    let text = child_text(row, cell).ok_or_else(|| ScrapeError::missing(format!("{field} cell")))?;
    text.parse::<f64>().map_err(|_| ScrapeError::InvalidNumber { field, value: text })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(label: &str, name: &str, pick: &str, round: &str) -> String {
        format!(
            r#"<tr>
                <td><div><a class="Nowrap name F-link" href="/p">{name}</a>
                    <span class="Fz-xxs">{label}</span></div></td>
                <td class="Ta-end"><div>{pick}</div></td>
                <td class="Alt Last"><div>{round}</div></td>
            </tr>"#
        )
    }

    fn page(rows: &[String]) -> String {
        format!(
            r#"<html><body><table id="draftanalysistable"><thead><tr><th>Player</th></tr></thead>
               <tbody>{}</tbody></table></body></html>"#,
            rows.join("\n")
        )
    }

    #[test]
    fn test_parse_draft_page() {
        let html = page(&[
            row("Car - RB", "Christian McCaffrey", "1.3", "1.0"),
            row("Pit - DEF", "Pittsburgh", "120.5", "10.6"),
            row("NO - WR", "Michael Thomas", "4.8", "1.2"),
        ]);

        let entries = parse_draft_page(&html, 500).unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(
            entries[0],
            DraftEntry {
                name: "Christian McCaffrey".to_string(),
                team: "CAR".to_string(),
                position: Position::Rb,
                avg_pick: 1.3,
                avg_round: 1.0,
            }
        );
        assert_eq!(entries[1].position, Position::Def);
        assert_eq!(entries[1].team, "PIT");
        assert_eq!(entries[2].avg_pick, 4.8);
    }

    #[test]
    fn test_parse_draft_page_stops_at_cap_mid_page() {
        let rows: Vec<String> =
            (0..5).map(|i| row("KC - QB", &format!("Player {i}"), "10.0", "2.0")).collect();

        let entries = parse_draft_page(&page(&rows), 2).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].name, "Player 1");
    }

    #[test]
    fn test_parse_draft_page_transliterates_names() {
        let html = page(&[row("HOU - K", "Ka&#699;imi Fairbairn", "150.0", "13.1")]);

        let entries = parse_draft_page(&html, 10).unwrap();

        assert!(entries[0].name.is_ascii());
        assert!(entries[0].name.ends_with("imi Fairbairn"));
    }

    #[test]
    fn test_parse_draft_page_rejects_bad_numbers() {
        let html = page(&[row("KC - QB", "Patrick Mahomes", "-", "2.0")]);

        match parse_draft_page(&html, 10) {
            Err(ScrapeError::InvalidNumber { field, value }) => {
                assert_eq!(field, "avg_pick");
                assert_eq!(value, "-");
            }
            other => panic!("expected invalid number, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_position_label() {
        assert_eq!(parse_position_label("Ten - RB").unwrap(), ("TEN".to_string(), Position::Rb));
        assert_eq!(parse_position_label(" LAR - WR ").unwrap(), ("LAR".to_string(), Position::Wr));
        assert!(matches!(parse_position_label("NE - DB"), Err(ScrapeError::UnknownPosition(_))));
        assert!(matches!(parse_position_label("NE RB"), Err(ScrapeError::MissingElement(_))));
    }
}
