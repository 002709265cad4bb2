//! Error types for loading runs.
//!
//! Every error is terminal for the operation that raised it. Nothing is
//! retried or compensated internally.

use std::error::Error;
use std::fmt;

use stowage_core::{ContainerCategory, ContainerId, Weight};
use stowage_ship::ShipError;

use crate::config::ConfigError;

/// The batch cannot possibly fit; raised before any container is placed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeasibilityError {
    /// Total batch weight exceeds the ship's maximum.
    TooHeavy {
        /// Sum of all container weights.
        total: u64,
        /// Ship's maximum aggregate weight.
        max: u64,
    },
    /// Total batch weight is below the ship's minimum.
    TooLight {
        /// Sum of all container weights.
        total: u64,
        /// Ship's minimum aggregate weight.
        min: u64,
    },
    /// More valuable containers (including valuable-cooled) than stacks
    /// certified for valuable cargo.
    NotEnoughValuableSpace {
        /// Valuable plus valuable-cooled containers in the batch.
        containers: usize,
        /// Stacks eligible for valuable cargo.
        slots: usize,
    },
    /// More valuable-cooled containers than stacks certified for them.
    NotEnoughValuableCooledSpace {
        /// Valuable-cooled containers in the batch.
        containers: usize,
        /// Stacks eligible for valuable-cooled cargo.
        slots: usize,
    },
}

impl fmt::Display for FeasibilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooHeavy { total, max } => write!(
                f,
                "containers weigh too much for the ship: {total} kg exceeds maximum {max} kg"
            ),
            Self::TooLight { total, min } => write!(
                f,
                "containers weigh too little: {total} kg is below minimum {min} kg"
            ),
            Self::NotEnoughValuableSpace { containers, slots } => write!(
                f,
                "not enough space for valuable containers: {containers} containers, {slots} slots"
            ),
            Self::NotEnoughValuableCooledSpace { containers, slots } => write!(
                f,
                "not enough space for valuable-cooled containers: {containers} containers, {slots} slots"
            ),
        }
    }
}

impl Error for FeasibilityError {}

/// Placement failed part-way or at the final balance check.
///
/// The ship is left in whatever state the run reached; containers
/// already placed stay placed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlacementError {
    /// No eligible stack could take the container.
    NoValidLocation {
        /// The container that could not be placed.
        container: ContainerId,
        /// Its category.
        category: ContainerCategory,
        /// Its weight.
        weight: Weight,
    },
    /// Every container was placed but the ship ended unbalanced.
    Imbalance {
        /// Final left-side weight.
        left: u64,
        /// Final right-side weight.
        right: u64,
    },
    /// The engine addressed a stack the ship does not have.
    Ship(ShipError),
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoValidLocation {
                container,
                category,
                weight,
            } => write!(
                f,
                "no valid location for {category} container {container} ({weight} kg)"
            ),
            Self::Imbalance { left, right } => write!(
                f,
                "not able to balance ship: left {left} kg, right {right} kg"
            ),
            Self::Ship(e) => write!(f, "ship: {e}"),
        }
    }
}

impl Error for PlacementError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Ship(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ShipError> for PlacementError {
    fn from(e: ShipError) -> Self {
        Self::Ship(e)
    }
}

/// Any failure of [`Crane::load`](crate::Crane::load).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CraneError {
    /// The crane configuration is invalid.
    Config(ConfigError),
    /// The batch failed a pre-placement check.
    Feasibility(FeasibilityError),
    /// Placement itself failed.
    Placement(PlacementError),
}

impl fmt::Display for CraneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Feasibility(e) => write!(f, "feasibility: {e}"),
            Self::Placement(e) => write!(f, "placement: {e}"),
        }
    }
}

impl Error for CraneError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Feasibility(e) => Some(e),
            Self::Placement(e) => Some(e),
        }
    }
}

impl From<ConfigError> for CraneError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<FeasibilityError> for CraneError {
    fn from(e: FeasibilityError) -> Self {
        Self::Feasibility(e)
    }
}

impl From<PlacementError> for CraneError {
    fn from(e: PlacementError) -> Self {
        Self::Placement(e)
    }
}
