//! RobotGenerator - Random robots that spend a budget exactly

use super::{BuildError, StatBudget};
use crate::config::ArenaConfig;
use crate::types::{Attribute, RobotAttributes};
use rand::rngs::ThreadRng;
use rand::Rng;
use std::iter::FusedIterator;
use tracing::debug;

/// Lazy, one-shot sequence of freshly generated robots
///
/// Each robot starts with every attribute at the budget floor, then receives
/// the pool one point at a time, each point going to a uniformly random
/// attribute. The pool is always spent exactly.
#[derive(Debug)]
pub struct RobotGenerator<R> {
    budget: StatBudget,
    remaining: usize,
    rng: R,
}

impl<R: Rng> RobotGenerator<R> {
    /// Budget every generated robot is built under
    pub fn budget(&self) -> StatBudget {
        self.budget
    }

    fn roll_robot(&mut self) -> RobotAttributes {
        let mut robot = self.budget.baseline();

        for _ in 0..self.budget.pool() {
            let attr = Attribute::ALL[self.rng.gen_range(0..Attribute::ALL.len())];
            // floor + pool fits u32, checked by StatBudget::new
            *robot.get_mut(attr) += 1;
        }

        robot
    }
}

impl<R: Rng> Iterator for RobotGenerator<R> {
    type Item = RobotAttributes;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let robot = self.roll_robot();
        debug!(
            health = robot.health,
            strength = robot.strength,
            dexterity = robot.dexterity,
            armour = robot.armour,
            "generated robot"
        );
        Some(robot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R: Rng> ExactSizeIterator for RobotGenerator<R> {}

impl<R: Rng> FusedIterator for RobotGenerator<R> {}

/// Generate `count` robots under `budget` using the thread-local RNG
pub fn generate(count: usize, budget: StatBudget) -> Result<RobotGenerator<ThreadRng>, BuildError> {
    generate_with_rng(count, budget, rand::thread_rng())
}

/// Generate robots with a provided RNG (for deterministic testing)
///
/// Pass `&mut rng` to keep using the RNG after the sequence is drained.
pub fn generate_with_rng<R: Rng>(
    count: usize,
    budget: StatBudget,
    rng: R,
) -> Result<RobotGenerator<R>, BuildError> {
    if count < 1 {
        return Err(BuildError::InvalidBudget(
            "robot count must be at least 1".to_string(),
        ));
    }

    Ok(RobotGenerator {
        budget,
        remaining: count,
        rng,
    })
}

/// Generate the starter robots offered to a new player
pub fn generate_starters(config: &ArenaConfig) -> Result<RobotGenerator<ThreadRng>, BuildError> {
    generate(config.starter.count, config.starter.budget)
}
