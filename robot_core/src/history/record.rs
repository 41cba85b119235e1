//! BattleRecord - What the host stores for each battle

use crate::combat::BattleResult;
use crate::types::RobotId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Battle identity, assigned by the persistence layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BattleId(pub u64);

impl fmt::Display for BattleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "battle #{}", self.0)
    }
}

/// A stored battle: the `battles` row plus one join row per participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleRecord {
    pub battle_id: BattleId,
    pub winner_id: RobotId,
    /// Both participants, winner first
    pub participants: [RobotId; 2],
}

impl BattleRecord {
    pub fn from_result(battle_id: BattleId, result: &BattleResult) -> Self {
        BattleRecord {
            battle_id,
            winner_id: result.winner_id,
            participants: [result.winner_id, result.loser_id],
        }
    }

    pub fn loser_id(&self) -> RobotId {
        self.participants[1]
    }

    /// Whether `robot_id` took part in this battle
    pub fn involves(&self, robot_id: RobotId) -> bool {
        self.participants.contains(&robot_id)
    }
}
