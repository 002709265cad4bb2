//! Error types for ship construction and slot access.

use std::fmt;

use crate::slot::SlotRef;

/// Errors arising from ship construction or slot lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShipError {
    /// Attempted to construct a ship with zero columns.
    NoColumns,
    /// Attempted to construct a ship whose columns hold zero stacks.
    NoStacks,
    /// The minimum cargo weight exceeds the maximum.
    InvertedWeightBounds {
        /// Configured minimum aggregate weight.
        min: u64,
        /// Configured maximum aggregate weight.
        max: u64,
    },
    /// Balance tolerance must be a percentage in `0..=100`.
    InvalidTolerance {
        /// The rejected value.
        value: u8,
    },
    /// A slot reference does not exist on this ship.
    SlotOutOfRange {
        /// The offending slot.
        slot: SlotRef,
        /// Column count of the ship.
        width: usize,
        /// Stacks per column.
        length: usize,
    },
}

impl fmt::Display for ShipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoColumns => write!(f, "ship must have at least one column"),
            Self::NoStacks => write!(f, "ship columns must hold at least one stack"),
            Self::InvertedWeightBounds { min, max } => {
                write!(f, "minimum weight {min} exceeds maximum weight {max}")
            }
            Self::InvalidTolerance { value } => {
                write!(f, "balance tolerance must be within 0..=100 percent, got {value}")
            }
            Self::SlotOutOfRange {
                slot,
                width,
                length,
            } => write!(f, "{slot} out of range for a {width}x{length} ship"),
        }
    }
}

impl std::error::Error for ShipError {}
