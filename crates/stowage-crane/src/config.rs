//! Crane configuration and validation.

use std::error::Error;
use std::fmt;

use stowage_core::Weight;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`CraneConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `max_top_weight` is zero, so not even a single container fits.
    ZeroTopWeight,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroTopWeight => write!(f, "max_top_weight must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

// ── CraneConfig ────────────────────────────────────────────────────

/// Settings for a [`Crane`](crate::Crane).
///
/// The ship-side parameters (dimensions, weight bounds, balance
/// tolerance) live on [`ShipSpec`](stowage_ship::ShipSpec); this struct
/// only carries what the crane itself needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CraneConfig {
    /// Maximum load a stack's bottom container may carry, in kg.
    /// Default: 120 000.
    pub max_top_weight: Weight,
}

impl Default for CraneConfig {
    fn default() -> Self {
        Self {
            max_top_weight: 120_000,
        }
    }
}

impl CraneConfig {
    /// Validate all invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_top_weight == 0 {
            return Err(ConfigError::ZeroTopWeight);
        }
        Ok(())
    }
}
