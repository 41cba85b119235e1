//! Stat allocation - Point-buy customization before a robot is finalized

mod allocator;
mod state;

pub use allocator::StatAllocator;
pub use state::AllocationState;

use crate::types::{Attribute, UnknownAttribute};
use thiserror::Error;

/// Rejected allocation action; the allocation state is never changed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AllocationError {
    #[error("No points left to spend")]
    DepletedPool,
    #[error("{attribute} is already at its baseline value")]
    BelowBaseline { attribute: Attribute },
    #[error("Invalid allocation target: {0}")]
    InvalidAttribute(#[from] UnknownAttribute),
    #[error("{attribute} cannot hold the full pool without overflowing")]
    Overflow { attribute: Attribute },
}
