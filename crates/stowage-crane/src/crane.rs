//! A configured crane running complete loading jobs.

use stowage_core::Container;
use stowage_ship::Ship;

use crate::config::{ConfigError, CraneConfig};
use crate::error::{CraneError, PlacementError};
use crate::feasibility::check_feasibility;
use crate::placement::sort;
use crate::report::StowageReport;

/// Loads container batches onto ships under a validated [`CraneConfig`].
///
/// The crane holds no state between jobs; one instance can serve any
/// number of ships.
///
/// # Examples
///
/// ```
/// use stowage_core::{Container, ContainerCategory, ContainerId};
/// use stowage_crane::{Crane, CraneConfig};
/// use stowage_ship::{Ship, ShipSpec};
///
/// let crane = Crane::new(CraneConfig::default()).unwrap();
/// let ship = Ship::new(ShipSpec::new(2, 2, 80_000)).unwrap();
/// let batch: Vec<Container> = (0..4)
///     .map(|i| Container::new(ContainerId(i), 15_000, ContainerCategory::Normal).unwrap())
///     .collect();
///
/// let (loaded, report) = crane.plan(&ship, &batch).unwrap();
/// assert_eq!(report.len(), 4);
/// assert_eq!(loaded.container_count(), 4);
/// assert_eq!(ship.container_count(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct Crane {
    config: CraneConfig,
}

impl Crane {
    /// Create a crane, validating `config`.
    pub fn new(config: CraneConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &CraneConfig {
        &self.config
    }

    /// [`sort`] with the configured top-weight limit. No feasibility
    /// checks are run.
    pub fn sort(
        &self,
        ship: &mut Ship,
        containers: &[Container],
    ) -> Result<StowageReport, PlacementError> {
        sort(ship, containers, self.config.max_top_weight)
    }

    /// Run the feasibility checks, then place the batch.
    ///
    /// A feasibility failure leaves the ship untouched. A placement
    /// failure leaves it partially loaded; see [`sort`].
    pub fn load(
        &self,
        ship: &mut Ship,
        containers: &[Container],
    ) -> Result<StowageReport, CraneError> {
        let summary = check_feasibility(ship, containers)?;
        tracing::info!(
            containers = summary.len(),
            total_weight = summary.total_weight(),
            width = ship.width(),
            length = ship.length(),
            "loading ship"
        );
        Ok(self.sort(ship, containers)?)
    }

    /// Like [`load`](Crane::load), but on a copy of `ship`.
    ///
    /// Returns the loaded copy and the report; the caller's ship is never
    /// modified, so a failure needs no cleanup.
    pub fn plan(
        &self,
        ship: &Ship,
        containers: &[Container],
    ) -> Result<(Ship, StowageReport), CraneError> {
        let mut loaded = ship.clone();
        let report = self.load(&mut loaded, containers)?;
        Ok((loaded, report))
    }
}
