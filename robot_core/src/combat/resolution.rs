//! Battle resolution - Run two robots against each other until one falls

use super::hit::{base_damage, exchange_damage, hit_factor};
use super::result::{BattleResult, RoundEvent, TieBreak};
use super::CombatError;
use crate::config::{CombatConstants, ConfigError};
use crate::types::{RobotAttributes, RobotId};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Resolves battles with a fixed set of combat constants
#[derive(Debug, Clone, Default)]
pub struct CombatEngine {
    constants: CombatConstants,
}

impl CombatEngine {
    /// Create an engine, rejecting constants that could break the round bound
    pub fn new(constants: CombatConstants) -> Result<Self, ConfigError> {
        constants.validate()?;
        Ok(CombatEngine { constants })
    }

    pub fn constants(&self) -> &CombatConstants {
        &self.constants
    }

    /// Resolve a battle between `a` (left operand) and `b`
    ///
    /// Each round both robots attack at once; damage is computed from the
    /// round-start state so neither side strikes first. The battle ends as
    /// soon as either health drops to zero or below:
    /// 1. One robot down: the other wins
    /// 2. Both down: higher strength wins, then higher dexterity, then `a`
    ///
    /// Every exchange deals at least 1 damage, so the battle lasts at most
    /// `min(a.health, b.health)` rounds. Stored attributes are never touched;
    /// health loss only exists inside the returned result.
    pub fn resolve(
        &self,
        a: &RobotAttributes,
        b: &RobotAttributes,
        rng: &mut impl Rng,
    ) -> Result<BattleResult, CombatError> {
        let a_id = combatant_id(a)?;
        let b_id = combatant_id(b)?;
        if a_id == b_id {
            return Err(CombatError::InvalidCombatant(format!(
                "robot {} cannot fight itself",
                a_id
            )));
        }

        let mut health_a = a.health as i64;
        let mut health_b = b.health as i64;
        let mut rounds = Vec::new();
        let mut round = 0u32;

        while health_a > 0 && health_b > 0 {
            round += 1;

            // Both rolls happen before either hit lands
            let damage_to_b = self.exchange(a, b, rng);
            let damage_to_a = self.exchange(b, a, rng);
            health_b -= damage_to_b as i64;
            health_a -= damage_to_a as i64;

            rounds.push(RoundEvent {
                round,
                attacker_id: a_id,
                defender_id: b_id,
                damage: damage_to_b,
                defender_health_after: health_b,
            });
            rounds.push(RoundEvent {
                round,
                attacker_id: b_id,
                defender_id: a_id,
                damage: damage_to_a,
                defender_health_after: health_a,
            });

            debug!(
                round,
                %a_id,
                %b_id,
                damage_to_a,
                damage_to_b,
                health_a,
                health_b,
                "round resolved"
            );
        }

        let (a_wins, tie_break) = if health_a <= 0 && health_b <= 0 {
            let (a_wins, rule) = break_tie(a, b);
            (a_wins, Some(rule))
        } else {
            (health_b <= 0, None)
        };

        let (winner_id, loser_id) = if a_wins { (a_id, b_id) } else { (b_id, a_id) };

        info!(
            %winner_id,
            %loser_id,
            rounds = round,
            tie_break = ?tie_break,
            "battle resolved"
        );

        Ok(BattleResult {
            winner_id,
            loser_id,
            rounds,
            final_health: BTreeMap::from([(a_id, health_a), (b_id, health_b)]),
            tie_break,
        })
    }

    fn exchange(&self, attacker: &RobotAttributes, defender: &RobotAttributes, rng: &mut impl Rng) -> u32 {
        let base = base_damage(attacker.strength, defender.armour);
        let factor = hit_factor(attacker.dexterity, defender.dexterity, &self.constants, rng);
        exchange_damage(base, factor)
    }
}

/// Resolve a battle with default combat constants
pub fn resolve(
    a: &RobotAttributes,
    b: &RobotAttributes,
    rng: &mut impl Rng,
) -> Result<BattleResult, CombatError> {
    CombatEngine::default().resolve(a, b, rng)
}

/// Resolve a battle from a seed; the same seed always replays the same battle
pub fn resolve_seeded(a: &RobotAttributes, b: &RobotAttributes, seed: u64) -> Result<BattleResult, CombatError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    resolve(a, b, &mut rng)
}

fn combatant_id(robot: &RobotAttributes) -> Result<RobotId, CombatError> {
    let id = robot.id.ok_or_else(|| {
        CombatError::InvalidCombatant("robot has not been saved and has no id".to_string())
    })?;

    if robot.health == 0 {
        return Err(CombatError::InvalidCombatant(format!(
            "robot {} has no health left",
            id
        )));
    }

    Ok(id)
}

/// Pick the winner of a double knockout; `true` means `a` wins
fn break_tie(a: &RobotAttributes, b: &RobotAttributes) -> (bool, TieBreak) {
    match a.strength.cmp(&b.strength) {
        Ordering::Greater => return (true, TieBreak::Strength),
        Ordering::Less => return (false, TieBreak::Strength),
        Ordering::Equal => {}
    }

    match a.dexterity.cmp(&b.dexterity) {
        Ordering::Greater => (true, TieBreak::Dexterity),
        Ordering::Less => (false, TieBreak::Dexterity),
        Ordering::Equal => (true, TieBreak::LeftOperand),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn robot(id: u64, health: u32, strength: u32, dexterity: u32, armour: u32) -> RobotAttributes {
        RobotAttributes::new(health, strength, dexterity, armour).with_id(RobotId(id))
    }

    /// Engine whose hit factor is always exactly 1 for equal dexterity
    fn exact_engine() -> CombatEngine {
        CombatEngine::new(CombatConstants {
            roll_min: 1.0,
            roll_max: 1.0,
            ..CombatConstants::default()
        })
        .unwrap()
    }

    fn make_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn test_clear_winner() {
        let a = robot(1, 12, 10, 10, 5);
        let b = robot(2, 10, 10, 10, 5);

        let result = exact_engine().resolve(&a, &b, &mut make_test_rng()).unwrap();

        // 5 damage each way per round: b falls after 2 rounds, a is left on 2
        assert_eq!(result.winner_id, RobotId(1));
        assert_eq!(result.loser_id, RobotId(2));
        assert_eq!(result.round_count(), 2);
        assert_eq!(result.rounds.len(), 4);
        assert_eq!(result.health_of(RobotId(1)), Some(2));
        assert_eq!(result.health_of(RobotId(2)), Some(0));
        assert_eq!(result.tie_break, None);
    }

    #[test]
    fn test_event_order_and_health_log() {
        let a = robot(1, 12, 10, 10, 5);
        let b = robot(2, 10, 10, 10, 5);

        let result = exact_engine().resolve(&a, &b, &mut make_test_rng()).unwrap();
        let first = result.rounds[0];
        let second = result.rounds[1];

        assert_eq!((first.round, first.attacker_id, first.defender_id), (1, RobotId(1), RobotId(2)));
        assert_eq!(first.defender_health_after, 5);
        assert_eq!((second.round, second.attacker_id, second.defender_id), (1, RobotId(2), RobotId(1)));
        assert_eq!(second.defender_health_after, 7);
    }

    #[test]
    fn test_no_first_strike() {
        // Both one-shot each other: a does not get to win by attacking first
        let a = robot(1, 5, 20, 10, 0);
        let b = robot(2, 5, 25, 10, 0);

        let result = exact_engine().resolve(&a, &b, &mut make_test_rng()).unwrap();

        assert_eq!(result.round_count(), 1);
        assert!(result.health_of(RobotId(1)).unwrap() <= 0);
        assert!(result.health_of(RobotId(2)).unwrap() <= 0);
        assert_eq!(result.winner_id, RobotId(2));
        assert_eq!(result.tie_break, Some(TieBreak::Strength));
    }

    #[test]
    fn test_tie_break_on_dexterity() {
        let a = robot(1, 5, 10, 8, 5);
        let b = robot(2, 5, 10, 9, 5);

        // Unequal dexterity biases the roll; only check the rule when it fired
        let result = resolve_seeded(&a, &b, 7).unwrap();
        if result.is_tie_break() {
            assert_eq!(result.winner_id, RobotId(2));
            assert_eq!(result.tie_break, Some(TieBreak::Dexterity));
        }

        assert_eq!(break_tie(&a, &b), (false, TieBreak::Dexterity));
        assert_eq!(break_tie(&b, &a), (true, TieBreak::Dexterity));
    }

    #[test]
    fn test_full_tie_goes_to_left_operand() {
        let a = robot(1, 10, 10, 10, 5);
        let b = robot(2, 10, 10, 10, 5);

        let result = exact_engine().resolve(&a, &b, &mut make_test_rng()).unwrap();
        assert_eq!(result.winner_id, RobotId(1));
        assert_eq!(result.tie_break, Some(TieBreak::LeftOperand));

        let swapped = exact_engine().resolve(&b, &a, &mut make_test_rng()).unwrap();
        assert_eq!(swapped.winner_id, RobotId(2));
    }

    #[test]
    fn test_zero_net_damage_terminates() {
        // Strength never beats armour: every exchange deals the minimum of 1
        let a = robot(1, 10, 0, 0, 50);
        let b = robot(2, 7, 3, 0, 50);

        let result = resolve_seeded(&a, &b, 99).unwrap();

        assert_eq!(result.round_count(), 7);
        assert!(result.rounds.iter().all(|e| e.damage == 1));
        assert_eq!(result.winner_id, RobotId(1));
        assert_eq!(result.health_of(RobotId(1)), Some(3));
        assert_eq!(result.health_of(RobotId(2)), Some(0));
    }

    #[test]
    fn test_same_seed_same_battle() {
        let a = robot(1, 30, 12, 14, 4);
        let b = robot(2, 28, 11, 9, 6);

        let first = resolve_seeded(&a, &b, 1234).unwrap();
        let second = resolve_seeded(&a, &b, 1234).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_attributes_not_mutated() {
        let a = robot(1, 10, 10, 10, 5);
        let b = robot(2, 10, 10, 10, 5);
        let (a_before, b_before) = (a, b);

        resolve_seeded(&a, &b, 42).unwrap();

        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }

    #[test]
    fn test_invalid_combatants() {
        let healthy = robot(1, 10, 10, 10, 5);

        let defeated = robot(2, 0, 10, 10, 5);
        assert!(matches!(
            resolve_seeded(&healthy, &defeated, 1),
            Err(CombatError::InvalidCombatant(_))
        ));

        let unsaved = RobotAttributes::new(10, 10, 10, 5);
        assert!(matches!(
            resolve_seeded(&unsaved, &healthy, 1),
            Err(CombatError::InvalidCombatant(_))
        ));

        assert!(matches!(
            resolve_seeded(&healthy, &healthy, 1),
            Err(CombatError::InvalidCombatant(_))
        ));
    }

    #[test]
    fn test_invalid_constants_rejected() {
        let constants = CombatConstants {
            roll_min: 1.3,
            roll_max: 1.2,
            ..CombatConstants::default()
        };
        assert!(CombatEngine::new(constants).is_err());
    }
}
