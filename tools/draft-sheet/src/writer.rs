//! CSV serialization of the roster

use anyhow::{Context, Result};
use player_registry::{Defense, Player, PlayerRegistry, RosterEntry};
use player_scraper::Position;
use points_engine::PlayerStats;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

pub const HEADERS: [&str; 5] = ["Name", "Team", "Avg Pick", "Avg Round", "Pos Rank"];

/// Layout of the sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// One row per entry in fetch order
    Flat,
    /// One block per position with stat and score columns
    Grouped,
}

impl OutputMode {
    fn file_stem(&self) -> &'static str {
        match self {
            OutputMode::Flat => "raw_list",
            OutputMode::Grouped => "positional_analysis",
        }
    }
}

/// `football_{raw_list|positional_analysis}_{year}_{timestamp}.csv`
pub fn output_file_name(mode: OutputMode, season: u16, timestamp: i64) -> String {
    format!("football_{}_{}_{}.csv", mode.file_stem(), season, timestamp)
}

/// Write the sheet into `directory` and return its path
pub fn write_sheet(
    registry: &PlayerRegistry,
    mode: OutputMode,
    directory: &Path,
    season: u16,
    timestamp: i64,
) -> Result<PathBuf> {
    let path = directory.join(output_file_name(mode, season, timestamp));
    let file =
        File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;

    write_records(registry, mode, file)
        .with_context(|| format!("failed to write {}", path.display()))?;

    info!("Wrote {} entries to {}", registry.len(), path.display());
    Ok(path)
}

/// Serialize the roster to `out`
pub fn write_records<W: Write>(registry: &PlayerRegistry, mode: OutputMode, out: W) -> Result<W> {
    let mut sheet = SheetWriter::new(out);
    sheet.row(HEADERS.iter().map(|h| h.to_string()))?;

    match mode {
        OutputMode::Flat => {
            for entry in registry.entries() {
                sheet.row(identity_fields(entry))?;
            }
        }
        OutputMode::Grouped => {
            for position in Position::ORDER {
                sheet.row(sub_header(position))?;
                for entry in registry.by_position(position) {
                    let mut fields = identity_fields(entry);
                    match entry {
                        RosterEntry::Player(player) => fields.extend(player_fields(player)),
                        RosterEntry::Defense(defense) => fields.extend(defense_fields(defense)),
                    }
                    sheet.row(fields)?;
                }
                sheet.blank_row()?;
            }
        }
    }

    sheet.finish()
}

/// Sub-header row opening a position block
pub fn sub_header(position: Position) -> Vec<String> {
    let mut header = vec![position.to_string()];
    header.extend(std::iter::repeat(String::new()).take(HEADERS.len() - 1));
    header.extend(position.tracked_stats().iter().map(|stat| format!("{} avg", stat)));

    if position != Position::Qb && position != Position::Def {
        header.push("Avg Total Points".to_string());
    }
    if position == Position::Def {
        header.extend(["Overall DVOA Rank", "Pass DVOA Rank", "Run DVOA Rank"].map(String::from));
    } else {
        header.extend(["Avg Exp Points", "Point Volatility"].map(String::from));
    }
    header
}

fn identity_fields(entry: &RosterEntry) -> Vec<String> {
    let identity = entry.identity();
    let draft = entry.draft();
    vec![
        identity.name.clone(),
        identity.team.clone(),
        format_number(draft.avg_pick),
        format_number(draft.avg_round),
        identity.label.clone(),
    ]
}

fn player_fields(player: &Player) -> Vec<String> {
    let mut fields: Vec<String> = player
        .identity
        .position
        .tracked_stats()
        .iter()
        .map(|stat| match &player.stats {
            Some(stats @ PlayerStats::Observed(_)) => format_number(stats.summary(*stat).mean),
            Some(PlayerStats::Unresolved) | None => "0".to_string(),
        })
        .collect();

    match &player.scores {
        Some(line) => fields.extend(line.values().into_iter().map(format_number)),
        // unscored positions keep the two-value placeholder
        None => fields.extend(["0.0", "0.0"].map(String::from)),
    }
    fields
}

fn defense_fields(defense: &Defense) -> Vec<String> {
    match &defense.ratings {
        Some(ratings) => vec![ratings.overall.clone(), ratings.pass.clone(), ratings.run.clone()],
        None => vec![String::new(); 3],
    }
}

/// Shortest round-trip form, always with a decimal point for whole numbers
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

/// Owns the output so blank separator lines can go straight to it
struct SheetWriter<W: Write> {
    out: W,
}

impl<W: Write> SheetWriter<W> {
    fn new(out: W) -> Self {
        Self { out }
    }

    fn row<I>(&mut self, fields: I) -> Result<()>
    where
        I: IntoIterator<Item = String>,
    {
        let mut csv = csv::WriterBuilder::new()
            .flexible(true)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(&mut self.out);
        csv.write_record(fields)?;
        csv.flush()?;
        Ok(())
    }

    /// An empty line; the csv crate would quote an empty record as `""`
    fn blank_row(&mut self) -> Result<()> {
        self.out.write_all(b"\n")?;
        Ok(())
    }

    fn finish(mut self) -> Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use player_scraper::{DefenseRatings, DraftEntry, StatKind};
    use points_engine::{ScoreLine, StatSummary};
    use std::collections::BTreeMap;

    fn draft_entry(
        name: &str,
        team: &str,
        position: Position,
        avg_pick: f64,
        avg_round: f64,
    ) -> DraftEntry {
        DraftEntry { name: name.to_string(), team: team.to_string(), position, avg_pick, avg_round }
    }

    fn create_test_registry() -> PlayerRegistry {
        let mut registry = PlayerRegistry::from_draft(vec![
            draft_entry("Christian McCaffrey", "CAR", Position::Rb, 1.3, 1.0),
            draft_entry("Lamar Jackson", "BAL", Position::Qb, 25.75, 3.0),
            draft_entry("Steelers", "PIT", Position::Def, 110.0, 10.4),
            draft_entry("Justin Tucker", "BAL", Position::K, 120.5, 11.0),
            draft_entry("Rookie Back", "NYJ", Position::Rb, 90.0, 8.0),
        ]);

        let mut summaries = BTreeMap::new();
        summaries.insert(StatKind::RushAtt, StatSummary { mean: 17.88, std_dev: 4.1 });
        summaries.insert(StatKind::RushYds, StatSummary { mean: 72.0, std_dev: 30.0 });
        {
            let mut rbs = registry.players_mut(Position::Rb);
            let cmc = rbs.next().unwrap();
            cmc.stats = Some(PlayerStats::Observed(summaries));
            cmc.scores = Some(ScoreLine::Split { with_td: 23.5, no_td: 18.0, volatility: 6.25 });
            let rookie = rbs.next().unwrap();
            rookie.stats = Some(PlayerStats::Unresolved);
            rookie.scores = Some(ScoreLine::Split { with_td: 0.0, no_td: 0.0, volatility: 0.0 });
        }

        let qb = registry.players_mut(Position::Qb).next().unwrap();
        qb.stats = Some(PlayerStats::Unresolved);
        qb.scores = Some(ScoreLine::Combined { expected: 0.0, volatility: 0.0 });

        registry.defenses_mut().next().unwrap().ratings = Some(DefenseRatings {
            overall: "3".to_string(),
            pass: "1".to_string(),
            run: "12".to_string(),
        });
        registry
    }

    fn render(registry: &PlayerRegistry, mode: OutputMode) -> String {
        String::from_utf8(write_records(registry, mode, Vec::new()).unwrap()).unwrap()
    }

    #[test]
    fn test_flat_sheet() {
        let output = render(&create_test_registry(), OutputMode::Flat);

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Name,Team,Avg Pick,Avg Round,Pos Rank",
                "Christian McCaffrey,CAR,1.3,1.0,RB1",
                "Lamar Jackson,BAL,25.75,3.0,QB1",
                "Steelers,PIT,110.0,10.4,DEF1",
                "Justin Tucker,BAL,120.5,11.0,K1",
                "Rookie Back,NYJ,90.0,8.0,RB2",
            ]
        );
    }

    #[test]
    fn test_grouped_sheet() {
        let output = render(&create_test_registry(), OutputMode::Grouped);

        let expected = "\
Name,Team,Avg Pick,Avg Round,Pos Rank
RB,,,,,rush_att avg,rush_yds avg,rec avg,rec_yds avg,rush_td avg,\
Avg Total Points,Avg Exp Points,Point Volatility
Christian McCaffrey,CAR,1.3,1.0,RB1,17.88,72.0,0.0,0.0,0.0,23.5,18.0,6.25
Rookie Back,NYJ,90.0,8.0,RB2,0,0,0,0,0,0.0,0.0,0.0

WR,,,,,rec avg,rec_yds avg,rec_td avg,Avg Total Points,Avg Exp Points,Point Volatility

TE,,,,,rec avg,rec_yds avg,rec_td avg,Avg Total Points,Avg Exp Points,Point Volatility

QB,,,,,pass_cmp avg,pass_yds avg,pass_td avg,pass_int avg,Avg Exp Points,Point Volatility
Lamar Jackson,BAL,25.75,3.0,QB1,0,0,0,0,0.0,0.0

K,,,,,Avg Total Points,Avg Exp Points,Point Volatility
Justin Tucker,BAL,120.5,11.0,K1,0.0,0.0

DEF,,,,,Overall DVOA Rank,Pass DVOA Rank,Run DVOA Rank
Steelers,PIT,110.0,10.4,DEF1,3,1,12

";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_empty_grouped_sheet_keeps_every_block() {
        let output = render(&PlayerRegistry::new(), OutputMode::Grouped);

        let blank_lines = output.lines().filter(|line| line.is_empty()).count();
        assert_eq!(blank_lines, 6);
        let blocks: Vec<&str> = output
            .lines()
            .skip(1)
            .filter_map(|line| line.split(',').next())
            .filter(|s| !s.is_empty())
            .collect();
        assert_eq!(blocks, vec!["RB", "WR", "TE", "QB", "K", "DEF"]);
    }

    #[test]
    fn test_blank_rows_are_bare_line_breaks() {
        let output = render(&PlayerRegistry::new(), OutputMode::Grouped);

        assert!(!output.contains("\"\""));
        assert!(output.ends_with("Run DVOA Rank\n\n"));
        assert_eq!(output.matches("\n\n").count(), 6);
    }

    #[test]
    fn test_write_records_returns_the_sink() {
        let out = write_records(&PlayerRegistry::new(), OutputMode::Flat, Vec::new()).unwrap();

        assert_eq!(out, b"Name,Team,Avg Pick,Avg Round,Pos Rank\n".to_vec());
    }

    #[test]
    fn test_missing_ratings_are_empty_cells() {
        let jets = draft_entry("Jets", "NYJ", Position::Def, 150.0, 13.0);
        let registry = PlayerRegistry::from_draft(vec![jets]);

        let output = render(&registry, OutputMode::Grouped);

        assert!(output.contains("Jets,NYJ,150.0,13.0,DEF1,,,\n"));
    }

    #[test]
    fn test_output_file_name() {
        assert_eq!(
            output_file_name(OutputMode::Flat, 2020, 1598918400),
            "football_raw_list_2020_1598918400.csv"
        );
        assert_eq!(
            output_file_name(OutputMode::Grouped, 2021, 1630454400),
            "football_positional_analysis_2021_1630454400.csv"
        );
    }

    #[test]
    fn test_write_sheet_creates_file() {
        let dir = tempfile::tempdir().unwrap();

        let path =
            write_sheet(&create_test_registry(), OutputMode::Flat, dir.path(), 2020, 42).unwrap();

        assert_eq!(path, dir.path().join("football_raw_list_2020_42.csv"));
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Name,Team,Avg Pick,Avg Round,Pos Rank\n"));
        assert_eq!(content.lines().count(), 6);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(10.0), "10.0");
        assert_eq!(format_number(4.25), "4.25");
        assert_eq!(format_number(0.0), "0.0");
        assert_eq!(format_number(12.1), "12.1");
    }
}
