//! Strongly-typed identifiers and the [`Weight`] unit.

use std::fmt;

/// Mass of a container or a group of containers, in kilograms.
///
/// Single containers fit comfortably in `u32`; aggregates over a ship
/// are accumulated in `u64` to rule out overflow.
pub type Weight = u32;

/// Identifies a container within a loading batch.
///
/// IDs are assigned by the caller and are expected to be unique within
/// one batch. They carry no ordering semantics for placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContainerId(pub u32);

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for ContainerId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
