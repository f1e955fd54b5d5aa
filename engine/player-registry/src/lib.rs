//! Player Registry - Roster of drafted players and defenses
//!
//! Entries are created once from the draft listing, labelled with a
//! per-position sequence number, and enriched in place by later stages.

pub mod registry;
pub mod types;

pub use registry::{PlayerRegistry, PositionCounters};
pub use types::{Defense, DraftMetrics, Player, PlayerIdentity, RosterEntry};
