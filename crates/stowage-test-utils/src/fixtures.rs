//! Reusable ship and batch fixtures.
//!
//! - [`roomy_ship`] — a ship whose aggregate weight bounds never trip.
//! - [`BatchBuilder`] — hand-written batches with sequential IDs.
//! - [`generate_batch`] — deterministic pseudo-random batches.
//! - [`check_stowage`] — post-condition audit of a loaded ship.

use std::collections::HashMap;
use std::fmt;

use stowage_core::{Container, ContainerCategory, ContainerId, Weight};
use stowage_ship::{Ship, ShipSpec, SlotRef};

/// A `width` x `length` ship with `min_weight = 0` and an effectively
/// unlimited `max_weight`, so only placement rules matter.
pub fn roomy_ship(width: usize, length: usize) -> Ship {
    let spec = ShipSpec {
        min_weight: 0,
        ..ShipSpec::new(width, length, u64::MAX)
    };
    Ship::new(spec).expect("roomy_ship requires non-zero dimensions")
}

/// Builds a container batch with IDs assigned in insertion order.
#[derive(Default)]
pub struct BatchBuilder {
    containers: Vec<Container>,
}

impl BatchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, weight: Weight, category: ContainerCategory) -> Self {
        let id = ContainerId(self.containers.len() as u32);
        self.containers
            .push(Container::new(id, weight, category).expect("fixture weights are positive"));
        self
    }

    pub fn normal(self, weight: Weight) -> Self {
        self.add(weight, ContainerCategory::Normal)
    }

    pub fn cooled(self, weight: Weight) -> Self {
        self.add(weight, ContainerCategory::Cooled)
    }

    pub fn valuable(self, weight: Weight) -> Self {
        self.add(weight, ContainerCategory::Valuable)
    }

    pub fn valuable_cooled(self, weight: Weight) -> Self {
        self.add(weight, ContainerCategory::ValuableCooled)
    }

    /// Add `n` containers of the same weight and category.
    pub fn repeat(mut self, n: usize, weight: Weight, category: ContainerCategory) -> Self {
        for _ in 0..n {
            self = self.add(weight, category);
        }
        self
    }

    pub fn build(self) -> Vec<Container> {
        self.containers
    }
}

/// Relative frequencies for [`generate_batch`], in percent of the batch.
/// Whatever is left over is `Normal`.
#[derive(Clone, Copy, Debug)]
pub struct CategoryMix {
    pub cooled: u8,
    pub valuable: u8,
    pub valuable_cooled: u8,
}

impl CategoryMix {
    /// Only normal containers.
    pub const NORMAL_ONLY: Self = Self {
        cooled: 0,
        valuable: 0,
        valuable_cooled: 0,
    };

    fn pick(&self, roll: u64) -> ContainerCategory {
        let roll = roll % 100;
        let cooled = u64::from(self.cooled);
        let valuable = cooled + u64::from(self.valuable);
        let valuable_cooled = valuable + u64::from(self.valuable_cooled);
        if roll < cooled {
            ContainerCategory::Cooled
        } else if roll < valuable {
            ContainerCategory::Valuable
        } else if roll < valuable_cooled {
            ContainerCategory::ValuableCooled
        } else {
            ContainerCategory::Normal
        }
    }
}

impl Default for CategoryMix {
    fn default() -> Self {
        Self {
            cooled: 10,
            valuable: 2,
            valuable_cooled: 1,
        }
    }
}

/// Deterministic batch of `n` containers with weights in
/// `min_weight..=max_weight`. Same `seed`, same batch.
pub fn generate_batch(
    n: usize,
    seed: u64,
    min_weight: Weight,
    max_weight: Weight,
    mix: CategoryMix,
) -> Vec<Container> {
    assert!(
        0 < min_weight && min_weight <= max_weight,
        "weight range must be positive and non-empty"
    );
    let span = u64::from(max_weight - min_weight) + 1;
    let mut state = seed;
    let mut next = || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        state >> 33
    };
    (0..n)
        .map(|i| {
            let weight = min_weight + (next() % span) as Weight;
            let category = mix.pick(next());
            Container::new(ContainerId(i as u32), weight, category)
                .expect("generated weights are positive")
        })
        .collect()
}

/// A broken post-condition found by [`check_stowage`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StowageViolation {
    Missing(ContainerId),
    Duplicated(ContainerId),
    Unexpected(ContainerId),
    TopWeightExceeded { slot: SlotRef, top_weight: u64 },
    ValuablesShareStack(SlotRef),
    IneligibleSlot { container: ContainerId, slot: SlotRef },
    Unbalanced { left: u64, right: u64 },
}

impl fmt::Display for StowageViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(id) => write!(f, "container {id} missing"),
            Self::Duplicated(id) => write!(f, "container {id} placed more than once"),
            Self::Unexpected(id) => write!(f, "container {id} not in batch"),
            Self::TopWeightExceeded { slot, top_weight } => {
                write!(f, "{slot} carries {top_weight} kg on its bottom container")
            }
            Self::ValuablesShareStack(slot) => write!(f, "{slot} holds several valuables"),
            Self::IneligibleSlot { container, slot } => {
                write!(f, "container {container} sits in ineligible {slot}")
            }
            Self::Unbalanced { left, right } => {
                write!(f, "ship unbalanced: left {left} kg, right {right} kg")
            }
        }
    }
}

/// Audit a loaded ship against `batch`.
///
/// Checks that every batch container is aboard exactly once and
/// nothing else is, that no stack exceeds `max_top_weight`, that no
/// stack holds two valuables, that every container sits in a stack its
/// category is eligible for, and that the ship is balanced. Returns
/// every violation found.
pub fn check_stowage(
    ship: &Ship,
    batch: &[Container],
    max_top_weight: Weight,
) -> Vec<StowageViolation> {
    let mut violations = Vec::new();
    let mut seen: HashMap<ContainerId, usize> = batch.iter().map(|c| (c.id(), 0)).collect();

    for (slot, stack) in ship.stacks() {
        if stack.top_weight() > u64::from(max_top_weight) {
            violations.push(StowageViolation::TopWeightExceeded {
                slot,
                top_weight: stack.top_weight(),
            });
        }
        if stack.containers().iter().filter(|c| c.is_valuable()).count() > 1 {
            violations.push(StowageViolation::ValuablesShareStack(slot));
        }
        for container in stack.containers() {
            match seen.get_mut(&container.id()) {
                Some(count) => *count += 1,
                None => violations.push(StowageViolation::Unexpected(container.id())),
            }
            if !ship.eligible_places(container.category()).contains(slot) {
                violations.push(StowageViolation::IneligibleSlot {
                    container: container.id(),
                    slot,
                });
            }
        }
    }

    for container in batch {
        match seen.get(&container.id()).copied().unwrap_or(0) {
            0 => violations.push(StowageViolation::Missing(container.id())),
            1 => {}
            _ => violations.push(StowageViolation::Duplicated(container.id())),
        }
    }

    if !ship.is_balanced() {
        violations.push(StowageViolation::Unbalanced {
            left: ship.left_side_weight(),
            right: ship.right_side_weight(),
        });
    }
    violations
}
