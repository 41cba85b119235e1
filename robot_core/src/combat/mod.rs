//! Combat resolution - Simultaneous-exchange battles between two robots

mod hit;
mod resolution;
mod result;

pub use hit::{base_damage, dexterity_bias, exchange_damage, hit_factor};
pub use resolution::{resolve, resolve_seeded, CombatEngine};
pub use result::{BattleResult, RoundEvent, TieBreak};

use thiserror::Error;

/// Combat error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CombatError {
    #[error("Invalid combatant: {0}")]
    InvalidCombatant(String),
}
