//! StatAllocator - Mutable handle over an AllocationState

use super::{AllocationError, AllocationState};
use crate::config::ArenaConfig;
use crate::types::{Attribute, RobotAttributes};
use tracing::debug;

/// Point-buy allocator used while a robot is being customized
///
/// Every action goes through the pure [`AllocationState`] transitions and
/// only replaces the held state on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatAllocator {
    state: AllocationState,
}

impl StatAllocator {
    /// Create an allocator with `pool` points to spend on top of `baseline`
    pub fn new(baseline: RobotAttributes, pool: u32) -> Result<Self, AllocationError> {
        Ok(StatAllocator {
            state: AllocationState::new(baseline, pool)?,
        })
    }

    /// Create an allocator with the configured customization pool
    pub fn from_config(baseline: RobotAttributes, config: &ArenaConfig) -> Result<Self, AllocationError> {
        Self::new(baseline, config.allocation.pool)
    }

    /// Spend one point on `attribute`
    pub fn increment(&mut self, attribute: Attribute) -> Result<(), AllocationError> {
        let next = self.state.incremented(attribute);
        self.apply("increment", attribute, next)
    }

    /// Refund one point from `attribute`
    pub fn decrement(&mut self, attribute: Attribute) -> Result<(), AllocationError> {
        let next = self.state.decremented(attribute);
        self.apply("decrement", attribute, next)
    }

    /// Spend one point on the attribute called `name`
    ///
    /// Names that are not numeric attributes (such as `"active"`) fail with
    /// [`AllocationError::InvalidAttribute`].
    pub fn increment_named(&mut self, name: &str) -> Result<(), AllocationError> {
        let attribute = parse_target(name)?;
        self.increment(attribute)
    }

    /// Refund one point from the attribute called `name`
    pub fn decrement_named(&mut self, name: &str) -> Result<(), AllocationError> {
        let attribute = parse_target(name)?;
        self.decrement(attribute)
    }

    /// Return every spent point to the pool
    pub fn reset(&mut self) {
        self.state = self.state.reset();
    }

    /// Current attribute values
    pub fn snapshot(&self) -> RobotAttributes {
        *self.state.current()
    }

    pub fn baseline(&self) -> &RobotAttributes {
        self.state.baseline()
    }

    pub fn remaining(&self) -> u32 {
        self.state.remaining()
    }

    pub fn pool(&self) -> u32 {
        self.state.pool()
    }

    pub fn state(&self) -> &AllocationState {
        &self.state
    }

    /// Finalize the robot, returning it with its unspent points
    pub fn finish(self) -> (RobotAttributes, u32) {
        (*self.state.current(), self.state.remaining())
    }

    fn apply(
        &mut self,
        action: &'static str,
        attribute: Attribute,
        next: Result<AllocationState, AllocationError>,
    ) -> Result<(), AllocationError> {
        match next {
            Ok(state) => {
                self.state = state;
                debug!(
                    action,
                    %attribute,
                    value = self.state.current().get(attribute),
                    remaining = self.state.remaining(),
                    "allocation applied"
                );
                Ok(())
            }
            Err(err) => {
                debug!(action, %attribute, error = %err, "allocation rejected");
                Err(err)
            }
        }
    }
}

fn parse_target(name: &str) -> Result<Attribute, AllocationError> {
    name.parse::<Attribute>().map_err(|err| {
        debug!(target_name = name, "allocation rejected: not a numeric attribute");
        AllocationError::from(err)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RobotId;

    fn make_allocator(pool: u32) -> StatAllocator {
        StatAllocator::new(RobotAttributes::new(10, 10, 10, 5).with_id(RobotId(1)), pool).unwrap()
    }

    #[test]
    fn test_spend_and_refund() {
        let mut allocator = make_allocator(5);
        allocator.increment(Attribute::Strength).unwrap();
        allocator.increment(Attribute::Strength).unwrap();
        allocator.decrement(Attribute::Strength).unwrap();

        assert_eq!(allocator.snapshot().strength, 11);
        assert_eq!(allocator.remaining(), 4);
    }

    #[test]
    fn test_failed_decrement_leaves_state() {
        let mut allocator = make_allocator(5);
        let before = allocator.clone();

        let err = allocator.decrement(Attribute::Health).unwrap_err();
        assert_eq!(err, AllocationError::BelowBaseline { attribute: Attribute::Health });
        assert_eq!(allocator, before);
    }

    #[test]
    fn test_failed_increment_leaves_state() {
        let mut allocator = make_allocator(1);
        allocator.increment(Attribute::Armour).unwrap();
        let before = allocator.clone();

        assert_eq!(allocator.increment(Attribute::Armour), Err(AllocationError::DepletedPool));
        assert_eq!(allocator, before);
    }

    #[test]
    fn test_active_is_not_allocatable() {
        let mut allocator = make_allocator(5);
        let before = allocator.clone();

        assert!(matches!(
            allocator.increment_named("active"),
            Err(AllocationError::InvalidAttribute(_))
        ));
        assert!(matches!(
            allocator.decrement_named("active"),
            Err(AllocationError::InvalidAttribute(_))
        ));
        assert_eq!(allocator, before);
    }

    #[test]
    fn test_named_targets() {
        let mut allocator = make_allocator(5);
        allocator.increment_named("dexterity").unwrap();
        allocator.increment_named("armour").unwrap();
        allocator.decrement_named("dexterity").unwrap();

        assert_eq!(allocator.snapshot().dexterity, 10);
        assert_eq!(allocator.snapshot().armour, 6);
        assert_eq!(allocator.remaining(), 4);
    }

    #[test]
    fn test_snapshot_does_not_mutate() {
        let mut allocator = make_allocator(5);
        allocator.increment(Attribute::Health).unwrap();

        let first = allocator.snapshot();
        let second = allocator.snapshot();
        assert_eq!(first, second);
        assert_eq!(allocator.remaining(), 4);
    }

    #[test]
    fn test_reset_and_finish() {
        let mut allocator = make_allocator(5);
        allocator.increment(Attribute::Health).unwrap();
        allocator.increment(Attribute::Dexterity).unwrap();
        allocator.reset();
        assert_eq!(allocator.remaining(), 5);
        assert_eq!(allocator.snapshot(), *allocator.baseline());

        allocator.increment(Attribute::Strength).unwrap();
        let (robot, unspent) = allocator.finish();
        assert_eq!(robot.strength, 11);
        assert_eq!(unspent, 4);
        assert_eq!(robot.id, Some(RobotId(1)));
    }

    #[test]
    fn test_from_config_uses_customization_pool() {
        let config = ArenaConfig::default();
        let allocator = StatAllocator::from_config(RobotAttributes::uniform(1), &config).unwrap();
        assert_eq!(allocator.pool(), config.allocation.pool);
        assert_eq!(allocator.remaining(), config.allocation.pool);
    }
}
