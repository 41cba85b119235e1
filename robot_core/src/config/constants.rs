//! Arena constants configuration

use super::ConfigError;
use crate::build::StatBudget;
use serde::{Deserialize, Serialize};

/// Tunable arena constants
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArenaConfig {
    #[serde(default)]
    pub starter: StarterConstants,
    #[serde(default)]
    pub allocation: AllocationConstants,
    #[serde(default)]
    pub combat: CombatConstants,
}

impl ArenaConfig {
    /// Check every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.starter.validate()?;
        self.combat.validate()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarterConstants {
    /// Robots offered to a new player
    #[serde(default = "default_starter_count")]
    pub count: usize,
    /// Budget every starter robot is generated under
    #[serde(default = "default_starter_budget")]
    pub budget: StatBudget,
}

impl Default for StarterConstants {
    fn default() -> Self {
        StarterConstants {
            count: 3,
            budget: StatBudget::STARTER,
        }
    }
}

impl StarterConstants {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.count < 1 {
            return Err(ConfigError::ValidationError(
                "starter.count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_starter_count() -> usize {
    3
}
fn default_starter_budget() -> StatBudget {
    StatBudget::STARTER
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationConstants {
    /// Points a player may spend while customizing a robot
    #[serde(default = "default_allocation_pool")]
    pub pool: u32,
}

impl Default for AllocationConstants {
    fn default() -> Self {
        AllocationConstants { pool: 5 }
    }
}

fn default_allocation_pool() -> u32 {
    5
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatConstants {
    /// Lower bound of the uniform hit roll
    #[serde(default = "default_roll_min")]
    pub roll_min: f64,
    /// Upper bound of the uniform hit roll
    #[serde(default = "default_roll_max")]
    pub roll_max: f64,
    /// Largest fraction dexterity can add to or remove from a hit
    #[serde(default = "default_max_dexterity_bias")]
    pub max_dexterity_bias: f64,
    /// Dexterity difference at which half the maximum bias applies
    #[serde(default = "default_dexterity_scale")]
    pub dexterity_scale: f64,
}

impl Default for CombatConstants {
    fn default() -> Self {
        CombatConstants {
            roll_min: 0.8,
            roll_max: 1.2,
            max_dexterity_bias: 0.25,
            dexterity_scale: 10.0,
        }
    }
}

impl CombatConstants {
    /// Largest possible hit factor: `roll_max * (1 + max_dexterity_bias)`
    pub fn max_hit_factor(&self) -> f64 {
        self.roll_max * (1.0 + self.max_dexterity_bias)
    }

    /// Reject constants that leave the hit factor unbounded or non-positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.roll_min.is_finite() || self.roll_min <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "combat.roll_min must be positive, got {}",
                self.roll_min
            )));
        }
        if !self.roll_max.is_finite() || self.roll_max < self.roll_min {
            return Err(ConfigError::ValidationError(format!(
                "combat.roll_max must be at least roll_min ({}), got {}",
                self.roll_min, self.roll_max
            )));
        }
        if !(0.0..1.0).contains(&self.max_dexterity_bias) {
            return Err(ConfigError::ValidationError(format!(
                "combat.max_dexterity_bias must be in [0, 1), got {}",
                self.max_dexterity_bias
            )));
        }
        if !self.dexterity_scale.is_finite() || self.dexterity_scale <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "combat.dexterity_scale must be positive, got {}",
                self.dexterity_scale
            )));
        }
        Ok(())
    }
}

fn default_roll_min() -> f64 {
    0.8
}
fn default_roll_max() -> f64 {
    1.2
}
fn default_max_dexterity_bias() -> f64 {
    0.25
}
fn default_dexterity_scale() -> f64 {
    10.0
}
