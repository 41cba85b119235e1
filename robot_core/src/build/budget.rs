//! StatBudget - Per-attribute floor plus a redistributable point pool

use super::BuildError;
use crate::types::{Attribute, RobotAttributes};
use serde::{Deserialize, Serialize};

/// A uniform floor for every attribute and a pool of extra points
///
/// The pool is the only quantity that generation and allocation may
/// redistribute. Floors cannot change once the budget is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BudgetSpec")]
pub struct StatBudget {
    floor: u32,
    pool: u32,
}

/// Signed budget as written by hosts and config files, validated on conversion
#[derive(Debug, Clone, Copy, Deserialize)]
struct BudgetSpec {
    floor: i64,
    pool: i64,
}

impl StatBudget {
    /// Budget of the starter robots offered to new players
    pub const STARTER: StatBudget = StatBudget { floor: 1, pool: 30 };

    /// Create a budget, rejecting totals that do not fit a `u32`
    pub fn new(floor: u32, pool: u32) -> Result<Self, BuildError> {
        let attributes = Attribute::ALL.len() as u32;
        floor
            .checked_mul(attributes)
            .and_then(|floors| floors.checked_add(pool))
            .ok_or_else(|| {
                BuildError::InvalidBudget(format!(
                    "total of floor {} x {} + pool {} overflows",
                    floor, attributes, pool
                ))
            })?;

        Ok(StatBudget { floor, pool })
    }

    /// Minimum value of every attribute
    pub fn floor(&self) -> u32 {
        self.floor
    }

    /// Extra points distributable beyond the floors
    pub fn pool(&self) -> u32 {
        self.pool
    }

    /// Attribute total of any robot built under this budget: `4 * floor + pool`
    pub fn total(&self) -> u32 {
        // Checked in `new`
        self.floor * Attribute::ALL.len() as u32 + self.pool
    }

    /// A robot with every attribute at the floor and nothing spent
    pub fn baseline(&self) -> RobotAttributes {
        RobotAttributes::uniform(self.floor)
    }
}

impl TryFrom<(i64, i64)> for StatBudget {
    type Error = BuildError;

    fn try_from((floor, pool): (i64, i64)) -> Result<Self, Self::Error> {
        if floor < 0 {
            return Err(BuildError::InvalidBudget(format!(
                "floor must be non-negative, got {}",
                floor
            )));
        }
        if pool < 0 {
            return Err(BuildError::InvalidBudget(format!(
                "pool must be non-negative, got {}",
                pool
            )));
        }

        let floor = u32::try_from(floor)
            .map_err(|_| BuildError::InvalidBudget(format!("floor {} is too large", floor)))?;
        let pool = u32::try_from(pool)
            .map_err(|_| BuildError::InvalidBudget(format!("pool {} is too large", pool)))?;

        StatBudget::new(floor, pool)
    }
}

impl TryFrom<BudgetSpec> for StatBudget {
    type Error = BuildError;

    fn try_from(spec: BudgetSpec) -> Result<Self, Self::Error> {
        StatBudget::try_from((spec.floor, spec.pool))
    }
}
