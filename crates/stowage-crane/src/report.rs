//! Outcome of a successful loading run.

use stowage_core::{ContainerCategory, ContainerId, Weight};
use stowage_ship::{Ship, SlotRef};

/// Where one container ended up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// The placed container.
    pub container: ContainerId,
    /// Its category.
    pub category: ContainerCategory,
    /// Its weight.
    pub weight: Weight,
    /// The stack it was appended to.
    pub slot: SlotRef,
    /// Height within the stack, `0` is the bottom.
    pub tier: usize,
}

/// Every placement of a run, in the order the crane made them, plus
/// the resulting weight distribution.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StowageReport {
    placements: Vec<Placement>,
    left_weight: u64,
    right_weight: u64,
    middle_weight: u64,
}

impl StowageReport {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            placements: Vec::with_capacity(n),
            ..Self::default()
        }
    }

    pub(crate) fn record(&mut self, placement: Placement) {
        self.placements.push(placement);
    }

    pub(crate) fn finish(&mut self, ship: &Ship) {
        self.left_weight = ship.left_side_weight();
        self.right_weight = ship.right_side_weight();
        self.middle_weight = ship.middle_weight();
    }

    /// Placements in crane order.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Iterate placements in crane order.
    pub fn iter(&self) -> std::slice::Iter<'_, Placement> {
        self.placements.iter()
    }

    /// Number of containers placed.
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// `true` if the batch was empty.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Placement of container `id`, if it was part of the run.
    pub fn placement_of(&self, id: ContainerId) -> Option<&Placement> {
        self.placements.iter().find(|p| p.container == id)
    }

    /// Final left-side weight.
    pub fn left_weight(&self) -> u64 {
        self.left_weight
    }

    /// Final right-side weight.
    pub fn right_weight(&self) -> u64 {
        self.right_weight
    }

    /// Final middle-column weight (zero on even-width ships).
    pub fn middle_weight(&self) -> u64 {
        self.middle_weight
    }
}

impl<'a> IntoIterator for &'a StowageReport {
    type Item = &'a Placement;
    type IntoIter = std::slice::Iter<'a, Placement>;

    fn into_iter(self) -> Self::IntoIter {
        self.placements.iter()
    }
}
