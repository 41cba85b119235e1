//! Battle history - Records handed to persistence and the hall of fame

mod hall_of_fame;
mod record;

pub use hall_of_fame::{hall_of_fame, win_count, HallOfFameEntry, HALL_OF_FAME_SIZE};
pub use record::{BattleId, BattleRecord};
