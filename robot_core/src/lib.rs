//! robot_core - Robot building and combat for the robot arena
//!
//! This library provides:
//! - StatBudget / RobotGenerator: Random robots that spend a point budget exactly
//! - StatAllocator: Point-buy customization before a robot is saved
//! - CombatEngine: Deterministic, terminating battles with a turn log
//! - BattleRecord / hall_of_fame: What gets stored after a battle, and the win leaderboard

pub mod allocation;
pub mod build;
pub mod combat;
pub mod config;
pub mod history;
pub mod prelude;
pub mod types;

// Re-export core types for convenience
pub use allocation::{AllocationError, AllocationState, StatAllocator};
pub use build::{generate, generate_starters, generate_with_rng, BuildError, RobotGenerator, StatBudget};
pub use combat::{resolve, resolve_seeded, BattleResult, CombatEngine, CombatError, RoundEvent, TieBreak};
pub use config::{default_arena, ArenaConfig, CombatConstants, ConfigError};
pub use history::{hall_of_fame, BattleId, BattleRecord, HallOfFameEntry};
pub use types::{Attribute, RobotAttributes, RobotId};
