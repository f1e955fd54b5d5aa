use player_scraper::StatKind;
use tracing::info;

use crate::models::{PlayerStats, StatRanks};

/// Rank each player's tracked stats against the rest of the pool
///
/// A rank starts at 1 and grows by one for every peer with a strictly higher
/// mean (volume) or a strictly lower standard deviation (consistency). Peers
/// whose mean for the stat is zero are not compared against. Players whose
/// leading stat has a zero mean are treated as rookies and keep their initial
/// ranks. The result is in pool order.
pub fn rank_pool(pool: &[(&str, &PlayerStats)], stats: &[StatKind]) -> Vec<StatRanks> {
    let Some(&leading) = stats.first() else {
        return vec![StatRanks::new(); pool.len()];
    };

    pool.iter()
        .enumerate()
        .map(|(spot, (name, player))| {
            let mut ranks = player.initial_ranks(stats);
            if player.summary(leading).mean == 0.0 {
                if player.is_resolved() {
                    info!("{} is a rookie", name);
                }
                return ranks;
            }

            for (other, (_, peer)) in pool.iter().enumerate() {
                if other == spot {
                    continue;
                }
                for stat in stats {
                    let mine = player.summary(*stat);
                    let theirs = peer.summary(*stat);
                    if theirs.mean == 0.0 {
                        continue;
                    }
                    let rank = ranks.entry(*stat).or_default();
                    if mine.mean < theirs.mean {
                        rank.by_volume += 1;
                    }
                    if mine.std_dev > theirs.std_dev {
                        rank.by_consistency += 1;
                    }
                }
            }
            ranks
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{StatRank, StatSummary};
    use std::collections::BTreeMap;

    const STATS: [StatKind; 2] = [StatKind::RushAtt, StatKind::RushYds];

    fn observed(att: (f64, f64), yds: (f64, f64)) -> PlayerStats {
        let mut summaries = BTreeMap::new();
        summaries.insert(StatKind::RushAtt, StatSummary { mean: att.0, std_dev: att.1 });
        summaries.insert(StatKind::RushYds, StatSummary { mean: yds.0, std_dev: yds.1 });
        PlayerStats::Observed(summaries)
    }

    fn rank(by_volume: u32, by_consistency: u32) -> StatRank {
        StatRank { by_volume, by_consistency }
    }

    #[test]
    fn test_rank_by_volume_and_consistency() {
        let lead = observed((20.0, 5.0), (100.0, 30.0));
        let backup = observed((10.0, 2.0), (40.0, 10.0));
        let third = observed((15.0, 3.0), (60.0, 40.0));
        let pool = [("Lead", &lead), ("Backup", &backup), ("Third", &third)];

        let ranks = rank_pool(&pool, &STATS);

        assert_eq!(ranks[0][&StatKind::RushAtt], rank(1, 3));
        assert_eq!(ranks[1][&StatKind::RushAtt], rank(3, 1));
        assert_eq!(ranks[2][&StatKind::RushAtt], rank(2, 2));
        assert_eq!(ranks[0][&StatKind::RushYds], rank(1, 2));
        assert_eq!(ranks[2][&StatKind::RushYds], rank(2, 3));
    }

    #[test]
    fn test_only_stronger_peers_push_a_rank_down() {
        let steady = observed((15.0, 1.0), (70.0, 5.0));
        let weaker = observed((5.0, 9.0), (20.0, 50.0));
        let pool = [("Steady", &steady), ("Weaker", &weaker)];

        let ranks = rank_pool(&pool, &STATS);

        // a lower mean or a higher deviation elsewhere in the pool never counts
        assert_eq!(ranks[0][&StatKind::RushAtt], StatRank::FIRST);
        assert_eq!(ranks[0][&StatKind::RushYds], StatRank::FIRST);
        assert_eq!(ranks[1][&StatKind::RushAtt], rank(2, 2));
        assert_eq!(ranks[1][&StatKind::RushYds], rank(2, 2));
    }

    #[test]
    fn test_ties_do_not_increment() {
        let a = observed((10.0, 2.0), (50.0, 5.0));
        let b = observed((10.0, 2.0), (50.0, 5.0));
        let pool = [("A", &a), ("B", &b)];

        let ranks = rank_pool(&pool, &STATS);

        assert!(ranks.iter().all(|r| r.values().all(|rank| *rank == StatRank::FIRST)));
    }

    #[test]
    fn test_rookies_and_unresolved_are_skipped() {
        let starter = observed((18.0, 4.0), (80.0, 20.0));
        let rookie = observed((0.0, 0.0), (0.0, 0.0));
        let unknown = PlayerStats::Unresolved;
        let pool = [("Starter", &starter), ("Rookie", &rookie), ("Unknown", &unknown)];

        let ranks = rank_pool(&pool, &STATS);

        assert_eq!(ranks[0][&StatKind::RushAtt], StatRank::FIRST);
        assert_eq!(ranks[1][&StatKind::RushAtt], StatRank::FIRST);
        assert_eq!(ranks[2][&StatKind::RushAtt], StatRank::UNRANKED);
    }

    #[test]
    fn test_zero_mean_peer_not_compared() {
        let a = observed((10.0, 2.0), (0.0, 0.0));
        let b = observed((12.0, 1.0), (50.0, 5.0));
        let pool = [("A", &a), ("B", &b)];

        let ranks = rank_pool(&pool, &STATS);

        assert_eq!(ranks[1][&StatKind::RushYds], StatRank::FIRST);
        assert_eq!(ranks[0][&StatKind::RushYds], rank(2, 1));
    }
}
