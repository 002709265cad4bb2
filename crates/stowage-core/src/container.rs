//! Containers and their handling categories.

use std::fmt;
use std::str::FromStr;

use crate::error::{ContainerError, ParseCategoryError};
use crate::id::{ContainerId, Weight};

/// Handling requirements of a container.
///
/// The category decides which stacks a container may occupy and in
/// which pass of the placement run it is seated. The set is closed:
/// every consumer matches on it exhaustively.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContainerCategory {
    /// Ordinary dry cargo. May go anywhere.
    Normal,
    /// Needs a refrigeration hookup.
    Cooled,
    /// High-value cargo. Must stay accessible, so nothing may be stacked
    /// on top of another valuable container's stack.
    Valuable,
    /// Both refrigerated and high-value.
    ValuableCooled,
}

impl ContainerCategory {
    /// Categories in the order the crane seats them.
    ///
    /// Most space-constrained first, so later passes cannot take a slot a
    /// restricted category needed.
    pub const PLACEMENT_ORDER: [ContainerCategory; 4] = [
        ContainerCategory::ValuableCooled,
        ContainerCategory::Cooled,
        ContainerCategory::Valuable,
        ContainerCategory::Normal,
    ];

    /// `true` for [`Valuable`](Self::Valuable) and [`ValuableCooled`](Self::ValuableCooled).
    pub fn is_valuable(self) -> bool {
        matches!(self, Self::Valuable | Self::ValuableCooled)
    }

    /// `true` for [`Cooled`](Self::Cooled) and [`ValuableCooled`](Self::ValuableCooled).
    pub fn is_cooled(self) -> bool {
        matches!(self, Self::Cooled | Self::ValuableCooled)
    }

    /// Canonical lowercase name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Cooled => "cooled",
            Self::Valuable => "valuable",
            Self::ValuableCooled => "valuable-cooled",
        }
    }
}

impl fmt::Display for ContainerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContainerCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "cooled" => Ok(Self::Cooled),
            "valuable" => Ok(Self::Valuable),
            "valuable-cooled" | "valuable_cooled" => Ok(Self::ValuableCooled),
            _ => Err(ParseCategoryError {
                input: s.to_string(),
            }),
        }
    }
}

/// A single shipping container.
///
/// Immutable once built. The crane copies containers into stacks; the
/// caller's batch is never modified.
///
/// # Examples
///
/// ```
/// use stowage_core::{Container, ContainerCategory, ContainerId};
///
/// let c = Container::new(ContainerId(1), 12_000, ContainerCategory::Cooled).unwrap();
/// assert_eq!(c.weight(), 12_000);
/// assert!(c.category().is_cooled());
/// assert!(!c.is_valuable());
///
/// assert!(Container::new(ContainerId(2), 0, ContainerCategory::Normal).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Container {
    id: ContainerId,
    weight: Weight,
    category: ContainerCategory,
}

impl Container {
    /// Build a container. Returns `Err(ContainerError::ZeroWeight)` if
    /// `weight == 0`.
    pub fn new(
        id: ContainerId,
        weight: Weight,
        category: ContainerCategory,
    ) -> Result<Self, ContainerError> {
        if weight == 0 {
            return Err(ContainerError::ZeroWeight { id });
        }
        Ok(Self {
            id,
            weight,
            category,
        })
    }

    /// Caller-assigned identifier.
    pub fn id(&self) -> ContainerId {
        self.id
    }

    /// Gross weight in kilograms. Always positive.
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Handling category.
    pub fn category(&self) -> ContainerCategory {
        self.category
    }

    /// Shorthand for `self.category().is_valuable()`.
    pub fn is_valuable(&self) -> bool {
        self.category.is_valuable()
    }
}
