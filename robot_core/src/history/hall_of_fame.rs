//! Hall of fame - Robots ranked by recorded wins

use super::BattleRecord;
use crate::types::RobotId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Entries shown on the hall of fame
pub const HALL_OF_FAME_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HallOfFameEntry {
    pub robot_id: RobotId,
    pub wins: u32,
}

/// Count wins per robot, most wins first, ties broken by lower robot id
pub fn hall_of_fame<'a>(
    records: impl IntoIterator<Item = &'a BattleRecord>,
    limit: usize,
) -> Vec<HallOfFameEntry> {
    let mut wins: HashMap<RobotId, u32> = HashMap::new();
    for record in records {
        *wins.entry(record.winner_id).or_insert(0) += 1;
    }

    let mut entries: Vec<HallOfFameEntry> = wins
        .into_iter()
        .map(|(robot_id, wins)| HallOfFameEntry { robot_id, wins })
        .collect();
    entries.sort_by(|a, b| b.wins.cmp(&a.wins).then(a.robot_id.cmp(&b.robot_id)));
    entries.truncate(limit);
    entries
}

/// Number of recorded wins for one robot
pub fn win_count<'a>(records: impl IntoIterator<Item = &'a BattleRecord>, robot_id: RobotId) -> u32 {
    records
        .into_iter()
        .filter(|r| r.winner_id == robot_id)
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::BattleId;

    fn record(battle: u64, winner: u64, loser: u64) -> BattleRecord {
        BattleRecord {
            battle_id: BattleId(battle),
            winner_id: RobotId(winner),
            participants: [RobotId(winner), RobotId(loser)],
        }
    }

    #[test]
    fn test_ranking_order() {
        let records = vec![
            record(1, 2, 1),
            record(2, 3, 2),
            record(3, 2, 3),
            record(4, 1, 3),
            record(5, 3, 1),
            record(6, 2, 1),
        ];

        let ranking = hall_of_fame(&records, HALL_OF_FAME_SIZE);

        assert_eq!(
            ranking,
            vec![
                HallOfFameEntry { robot_id: RobotId(2), wins: 3 },
                HallOfFameEntry { robot_id: RobotId(3), wins: 2 },
                HallOfFameEntry { robot_id: RobotId(1), wins: 1 },
            ]
        );
    }

    #[test]
    fn test_equal_wins_ordered_by_id() {
        let records = vec![record(1, 9, 1), record(2, 4, 1), record(3, 7, 1)];
        let ids: Vec<_> = hall_of_fame(&records, 10).iter().map(|e| e.robot_id).collect();
        assert_eq!(ids, vec![RobotId(4), RobotId(7), RobotId(9)]);
    }

    #[test]
    fn test_limit() {
        let records: Vec<_> = (0..15).map(|i| record(i, i + 100, 1)).collect();
        assert_eq!(hall_of_fame(&records, HALL_OF_FAME_SIZE).len(), 10);
        assert!(hall_of_fame(&records, 0).is_empty());
        assert!(hall_of_fame(&Vec::<BattleRecord>::new(), 10).is_empty());
    }

    #[test]
    fn test_win_count() {
        let records = vec![record(1, 2, 1), record(2, 2, 3), record(3, 1, 2)];
        assert_eq!(win_count(&records, RobotId(2)), 2);
        assert_eq!(win_count(&records, RobotId(3)), 0);
    }
}
