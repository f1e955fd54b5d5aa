use crate::types::{Defense, DraftMetrics, Player, PlayerIdentity, RosterEntry};
use player_scraper::{DraftEntry, Position};
use std::collections::HashMap;
use tracing::debug;

/// Next position-sequence number per position for one run
#[derive(Debug, Clone, Default)]
pub struct PositionCounters {
    next: HashMap<Position, u32>,
}

impl PositionCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Label for the next entry of a position ("RB1", "RB2", ...)
    pub fn next_label(&mut self, position: Position) -> String {
        let counter = self.next.entry(position).or_insert(1);
        let label = format!("{}{}", position, counter);
        *counter += 1;
        label
    }

    /// Number of entries labelled so far for a position
    pub fn count(&self, position: Position) -> u32 {
        self.next.get(&position).map(|next| next - 1).unwrap_or(0)
    }
}

/// Player Registry - roster of drafted players and defenses
///
/// Entries keep the order they were added in. Position buckets are views
/// over that order.
#[derive(Debug, Default)]
pub struct PlayerRegistry {
    entries: Vec<RosterEntry>,
    counters: PositionCounters,
}

impl PlayerRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from draft listing entries in fetch order
    pub fn from_draft(entries: Vec<DraftEntry>) -> Self {
        let mut registry = Self::new();
        for entry in entries {
            registry.add(entry);
        }
        registry
    }

    /// Add a draft listing entry, assigning its position-sequence label
    pub fn add(&mut self, entry: DraftEntry) -> &RosterEntry {
        let label = self.counters.next_label(entry.position);
        let identity =
            PlayerIdentity { name: entry.name, team: entry.team, position: entry.position, label };
        let draft = DraftMetrics { avg_pick: entry.avg_pick, avg_round: entry.avg_round };

        debug!("Added {} {} ({})", identity.label, identity.name, identity.team);

        let roster_entry = match entry.position {
            Position::Def => RosterEntry::Defense(Defense { identity, draft, ratings: None }),
            _ => RosterEntry::Player(Player::new(identity, draft)),
        };
        self.entries.push(roster_entry);
        &self.entries[self.entries.len() - 1]
    }

    /// All entries in fetch order
    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn counters(&self) -> &PositionCounters {
        &self.counters
    }

    /// Entries of one position in fetch order
    pub fn by_position(&self, position: Position) -> impl Iterator<Item = &RosterEntry> + '_ {
        self.entries.iter().filter(move |entry| entry.position() == position)
    }

    /// Players of one position in fetch order
    pub fn players(&self, position: Position) -> impl Iterator<Item = &Player> + '_ {
        self.by_position(position).filter_map(|entry| match entry {
            RosterEntry::Player(player) => Some(player),
            RosterEntry::Defense(_) => None,
        })
    }

    pub fn players_mut(&mut self, position: Position) -> impl Iterator<Item = &mut Player> + '_ {
        self.entries.iter_mut().filter_map(move |entry| match entry {
            RosterEntry::Player(player) if player.identity.position == position => Some(player),
            _ => None,
        })
    }

    pub fn defenses_mut(&mut self) -> impl Iterator<Item = &mut Defense> + '_ {
        self.entries.iter_mut().filter_map(|entry| match entry {
            RosterEntry::Defense(defense) => Some(defense),
            RosterEntry::Player(_) => None,
        })
    }
}
