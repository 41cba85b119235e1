//! BattleResult - Outcome and turn log of one battle

use crate::types::RobotId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One attack within a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundEvent {
    /// Round number, starting at 1
    pub round: u32,
    pub attacker_id: RobotId,
    pub defender_id: RobotId,
    /// Damage dealt by this attack
    pub damage: u32,
    /// Defender health once the whole round has been applied (may be negative)
    pub defender_health_after: i64,
}

/// Rule that decided a simultaneous knockout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Higher strength won
    Strength,
    /// Equal strength, higher dexterity won
    Dexterity,
    /// Fully tied, the left operand won
    LeftOperand,
}

/// Result of resolving a battle between two robots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleResult {
    pub winner_id: RobotId,
    pub loser_id: RobotId,
    /// Every attack, in order: left robot first within each round
    pub rounds: Vec<RoundEvent>,
    /// Working health of both robots when the battle ended
    pub final_health: BTreeMap<RobotId, i64>,
    /// Set when both robots fell in the same round
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tie_break: Option<TieBreak>,
}

impl BattleResult {
    /// Number of rounds fought
    pub fn round_count(&self) -> u32 {
        self.rounds.last().map(|e| e.round).unwrap_or(0)
    }

    /// Whether the winner was decided by the tie-break rule
    pub fn is_tie_break(&self) -> bool {
        self.tie_break.is_some()
    }

    /// Final health of one participant
    pub fn health_of(&self, robot_id: RobotId) -> Option<i64> {
        self.final_health.get(&robot_id).copied()
    }

    /// Attacks made by one participant
    pub fn events_for(&self, attacker_id: RobotId) -> impl Iterator<Item = &RoundEvent> + '_ {
        self.rounds.iter().filter(move |e| e.attacker_id == attacker_id)
    }

    /// Total damage dealt by one participant
    pub fn total_damage_by(&self, attacker_id: RobotId) -> u64 {
        self.events_for(attacker_id).map(|e| e.damage as u64).sum()
    }

    /// Serialize for the host's response body
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        let rounds = self.round_count();
        let mut summary = format!(
            "Robot {} defeats robot {} in {} round{}",
            self.winner_id,
            self.loser_id,
            rounds,
            if rounds == 1 { "" } else { "s" }
        );

        match self.tie_break {
            Some(TieBreak::Strength) => summary.push_str(" (double knockout, decided by strength)"),
            Some(TieBreak::Dexterity) => summary.push_str(" (double knockout, decided by dexterity)"),
            Some(TieBreak::LeftOperand) => summary.push_str(" (double knockout, full tie)"),
            None => {}
        }

        summary
    }
}
