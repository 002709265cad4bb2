//! Pre-placement checks.
//!
//! These checks are necessary but not sufficient: per-stack weight
//! limits and side balance are not modelled here, so a batch that passes
//! may still fail in [`sort`](crate::sort). A batch that fails any check
//! can never be placed.

use indexmap::IndexMap;
use stowage_core::{Container, ContainerCategory};
use stowage_ship::Ship;

use crate::error::FeasibilityError;

/// Aggregate figures for a container batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManifestSummary {
    total_weight: u64,
    counts: IndexMap<ContainerCategory, usize>,
}

impl ManifestSummary {
    /// Tally `containers`. Categories appear in placement order, every
    /// category present even when its count is zero.
    pub fn from_containers(containers: &[Container]) -> Self {
        let mut counts: IndexMap<ContainerCategory, usize> = ContainerCategory::PLACEMENT_ORDER
            .iter()
            .map(|&c| (c, 0))
            .collect();
        let mut total_weight = 0u64;
        for container in containers {
            total_weight += u64::from(container.weight());
            *counts.entry(container.category()).or_default() += 1;
        }
        Self {
            total_weight,
            counts,
        }
    }

    /// Sum of all container weights.
    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    /// Number of containers of `category`.
    pub fn count(&self, category: ContainerCategory) -> usize {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    /// Valuable plus valuable-cooled containers.
    pub fn valuable_count(&self) -> usize {
        self.count(ContainerCategory::Valuable) + self.count(ContainerCategory::ValuableCooled)
    }

    /// Number of containers in the batch.
    pub fn len(&self) -> usize {
        self.counts.values().sum()
    }

    /// `true` for an empty batch.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Per-category counts in placement order.
    pub fn counts(&self) -> impl Iterator<Item = (ContainerCategory, usize)> + '_ {
        self.counts.iter().map(|(&c, &n)| (c, n))
    }
}

/// Reject batches that provably cannot be loaded onto `ship`.
///
/// Checks run in a fixed order and the first failure is returned:
/// too heavy, too light, valuable space, valuable-cooled space. Weight
/// bounds are inclusive. On success the batch summary is returned.
pub fn check_feasibility(
    ship: &Ship,
    containers: &[Container],
) -> Result<ManifestSummary, FeasibilityError> {
    let summary = ManifestSummary::from_containers(containers);
    let total = summary.total_weight();

    if total > ship.max_weight() {
        return Err(FeasibilityError::TooHeavy {
            total,
            max: ship.max_weight(),
        });
    }
    if total < ship.min_weight() {
        return Err(FeasibilityError::TooLight {
            total,
            min: ship.min_weight(),
        });
    }

    let valuable_slots = ship
        .eligible_places(ContainerCategory::Valuable)
        .slot_count();
    if summary.valuable_count() > valuable_slots {
        return Err(FeasibilityError::NotEnoughValuableSpace {
            containers: summary.valuable_count(),
            slots: valuable_slots,
        });
    }

    let valuable_cooled_slots = ship
        .eligible_places(ContainerCategory::ValuableCooled)
        .slot_count();
    let valuable_cooled = summary.count(ContainerCategory::ValuableCooled);
    if valuable_cooled > valuable_cooled_slots {
        return Err(FeasibilityError::NotEnoughValuableCooledSpace {
            containers: valuable_cooled,
            slots: valuable_cooled_slots,
        });
    }

    tracing::debug!(
        total_weight = total,
        containers = summary.len(),
        valuable = summary.valuable_count(),
        valuable_cooled,
        "batch passed feasibility checks"
    );
    Ok(summary)
}
