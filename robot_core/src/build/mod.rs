//! Robot building - Stat budgets and procedural generation

mod budget;
mod generator;

pub use budget::StatBudget;
pub use generator::{generate, generate_starters, generate_with_rng, RobotGenerator};

use thiserror::Error;

/// Robot building error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("Invalid budget: {0}")]
    InvalidBudget(String),
}
