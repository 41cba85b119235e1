//! Core types shared by generation, allocation and combat

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the four numeric dimensions of a robot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Health,
    Strength,
    Dexterity,
    Armour,
}

impl Attribute {
    /// Every attribute, in display order
    pub const ALL: [Attribute; 4] = [
        Attribute::Health,
        Attribute::Strength,
        Attribute::Dexterity,
        Attribute::Armour,
    ];

    /// Get all attributes
    pub fn all() -> &'static [Attribute] {
        &Self::ALL
    }

    /// Lowercase name, as used by hosts and config files
    pub fn name(&self) -> &'static str {
        match self {
            Attribute::Health => "health",
            Attribute::Strength => "strength",
            Attribute::Dexterity => "dexterity",
            Attribute::Armour => "armour",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A name that does not denote a numeric attribute (e.g. `"active"`)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{0}' is not a numeric robot attribute")]
pub struct UnknownAttribute(pub String);

impl FromStr for Attribute {
    type Err = UnknownAttribute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "health" | "hp" => Ok(Attribute::Health),
            "strength" | "str" => Ok(Attribute::Strength),
            "dexterity" | "dex" => Ok(Attribute::Dexterity),
            "armour" | "armor" | "arm" => Ok(Attribute::Armour),
            _ => Err(UnknownAttribute(s.to_string())),
        }
    }
}

/// Opaque robot identity, assigned by the persistence layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RobotId(pub u64);

impl From<u64> for RobotId {
    fn from(id: u64) -> Self {
        RobotId(id)
    }
}

impl fmt::Display for RobotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Attribute values of one robot
///
/// `id` is `None` until the persistence layer stores the robot. `active` is
/// carried through untouched: neither allocation nor combat changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RobotAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RobotId>,
    pub health: u32,
    pub strength: u32,
    pub dexterity: u32,
    pub armour: u32,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl RobotAttributes {
    /// Create an unidentified, active robot
    pub fn new(health: u32, strength: u32, dexterity: u32, armour: u32) -> Self {
        RobotAttributes {
            id: None,
            health,
            strength,
            dexterity,
            armour,
            active: true,
        }
    }

    /// Create a robot with every attribute at the same value
    pub fn uniform(value: u32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Attach a persistence identity
    pub fn with_id(mut self, id: RobotId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn get(&self, attribute: Attribute) -> u32 {
        match attribute {
            Attribute::Health => self.health,
            Attribute::Strength => self.strength,
            Attribute::Dexterity => self.dexterity,
            Attribute::Armour => self.armour,
        }
    }

    pub fn get_mut(&mut self, attribute: Attribute) -> &mut u32 {
        match attribute {
            Attribute::Health => &mut self.health,
            Attribute::Strength => &mut self.strength,
            Attribute::Dexterity => &mut self.dexterity,
            Attribute::Armour => &mut self.armour,
        }
    }

    pub fn set(&mut self, attribute: Attribute, value: u32) {
        *self.get_mut(attribute) = value;
    }

    /// Sum of all four attribute values
    pub fn total(&self) -> u64 {
        Attribute::ALL.iter().map(|a| self.get(*a) as u64).sum()
    }

    /// Iterate over `(attribute, value)` pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, u32)> + '_ {
        Attribute::ALL.iter().map(move |a| (*a, self.get(*a)))
    }
}
