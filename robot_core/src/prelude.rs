//! Prelude module for convenient imports
//!
//! ```rust
//! use robot_core::prelude::*;
//! ```

// Core types
pub use crate::types::{Attribute, RobotAttributes, RobotId};

// Building
pub use crate::build::{generate, generate_with_rng, StatBudget};

// Allocation
pub use crate::allocation::{AllocationError, StatAllocator};

// Combat
pub use crate::combat::{resolve, resolve_seeded, BattleResult, CombatEngine, RoundEvent};

// History
pub use crate::history::{hall_of_fame, BattleId, BattleRecord};

// Config
pub use crate::config::{default_arena, ArenaConfig};
