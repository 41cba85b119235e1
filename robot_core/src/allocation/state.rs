//! AllocationState - Immutable point-buy state with pure transitions

use super::AllocationError;
use crate::types::{Attribute, RobotAttributes};
use serde::Serialize;

/// Baseline, current values and unspent points of a robot being customized
///
/// Always holds `remaining + Σ(current - baseline) == pool` and
/// `current >= baseline` for every attribute. Transitions return a new state
/// and leave `self` untouched, so a rejected action cannot partially apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocationState {
    baseline: RobotAttributes,
    current: RobotAttributes,
    remaining: u32,
    pool: u32,
}

impl AllocationState {
    /// Start allocating `pool` points on top of `baseline`
    pub fn new(baseline: RobotAttributes, pool: u32) -> Result<Self, AllocationError> {
        // Any single attribute may end up holding the whole pool
        if let Some(attribute) = Attribute::ALL
            .iter()
            .copied()
            .find(|a| baseline.get(*a).checked_add(pool).is_none())
        {
            return Err(AllocationError::Overflow { attribute });
        }

        Ok(AllocationState {
            baseline,
            current: baseline,
            remaining: pool,
            pool,
        })
    }

    /// State after spending one point on `attribute`
    pub fn incremented(&self, attribute: Attribute) -> Result<Self, AllocationError> {
        if self.remaining == 0 {
            return Err(AllocationError::DepletedPool);
        }

        let mut next = self.clone();
        *next.current.get_mut(attribute) += 1;
        next.remaining -= 1;
        Ok(next)
    }

    /// State after refunding one point from `attribute`
    pub fn decremented(&self, attribute: Attribute) -> Result<Self, AllocationError> {
        if self.current.get(attribute) <= self.baseline.get(attribute) {
            return Err(AllocationError::BelowBaseline { attribute });
        }

        let mut next = self.clone();
        *next.current.get_mut(attribute) -= 1;
        next.remaining += 1;
        Ok(next)
    }

    /// State with every spent point returned to the pool
    pub fn reset(&self) -> Self {
        AllocationState {
            baseline: self.baseline,
            current: self.baseline,
            remaining: self.pool,
            pool: self.pool,
        }
    }

    pub fn baseline(&self) -> &RobotAttributes {
        &self.baseline
    }

    pub fn current(&self) -> &RobotAttributes {
        &self.current
    }

    /// Points not yet spent
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Points available when allocation started
    pub fn pool(&self) -> u32 {
        self.pool
    }

    /// Points spent on one attribute
    pub fn spent_on(&self, attribute: Attribute) -> u32 {
        self.current.get(attribute) - self.baseline.get(attribute)
    }

    /// Points spent across all attributes
    pub fn spent(&self) -> u32 {
        Attribute::ALL.iter().map(|a| self.spent_on(*a)).sum()
    }
}
