//! The ship: a left-to-right row of columns plus cargo weight bounds.

use std::ops::Range;

use stowage_core::{Container, ContainerCategory};

use crate::balance::BalancePolicy;
use crate::column::Column;
use crate::eligibility::{eligible_places, EligiblePlaces};
use crate::error::ShipError;
use crate::slot::{Side, SlotRef};
use crate::stack::Stack;

/// Construction input for a [`Ship`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShipSpec {
    /// Number of columns, left to right. Must be at least 1.
    pub width: usize,
    /// Number of stacks per column, front to back. Must be at least 1.
    pub length: usize,
    /// Maximum aggregate cargo weight (inclusive).
    pub max_weight: u64,
    /// Minimum aggregate cargo weight (inclusive).
    pub min_weight: u64,
    /// Left/right balance tolerance.
    pub balance: BalancePolicy,
}

impl ShipSpec {
    /// A spec whose minimum cargo weight is half of `max_weight`,
    /// with the default balance policy.
    pub fn new(width: usize, length: usize, max_weight: u64) -> Self {
        Self {
            width,
            length,
            max_weight,
            min_weight: max_weight / 2,
            balance: BalancePolicy::default(),
        }
    }

    /// Check structural invariants without building anything.
    pub fn validate(&self) -> Result<(), ShipError> {
        if self.width == 0 {
            return Err(ShipError::NoColumns);
        }
        if self.length == 0 {
            return Err(ShipError::NoStacks);
        }
        if self.min_weight > self.max_weight {
            return Err(ShipError::InvertedWeightBounds {
                min: self.min_weight,
                max: self.max_weight,
            });
        }
        self.balance.validate()
    }
}

/// A cargo ship's stowage layout.
///
/// Columns run left to right; every column holds the same number of
/// stacks, front to back. The layout is fixed at construction. The only
/// mutation is [`place`](Ship::place), which appends a container to a
/// stack.
///
/// # Examples
///
/// ```
/// use stowage_core::{Container, ContainerCategory, ContainerId};
/// use stowage_ship::{Ship, ShipSpec, Side, SlotRef};
///
/// let mut ship = Ship::new(ShipSpec::new(3, 2, 100_000)).unwrap();
/// assert_eq!(ship.columns_on(Side::Left), 0..1);
/// assert_eq!(ship.columns_on(Side::Right), 2..3);
/// assert_eq!(ship.middle_column(), Some(1));
///
/// let c = Container::new(ContainerId(1), 10_000, ContainerCategory::Normal).unwrap();
/// ship.place(SlotRef::new(2, 0), c).unwrap();
/// assert_eq!(ship.right_side_weight(), 10_000);
/// assert!(!ship.is_balanced());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ship {
    columns: Vec<Column>,
    length: usize,
    max_weight: u64,
    min_weight: u64,
    balance: BalancePolicy,
}

impl Ship {
    /// Build an empty ship from `spec`.
    pub fn new(spec: ShipSpec) -> Result<Self, ShipError> {
        spec.validate()?;
        Ok(Self {
            columns: (0..spec.width)
                .map(|_| Column::with_length(spec.length))
                .collect(),
            length: spec.length,
            max_weight: spec.max_weight,
            min_weight: spec.min_weight,
            balance: spec.balance,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Number of stacks per column.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Maximum aggregate cargo weight (inclusive).
    pub fn max_weight(&self) -> u64 {
        self.max_weight
    }

    /// Minimum aggregate cargo weight (inclusive).
    pub fn min_weight(&self) -> u64 {
        self.min_weight
    }

    /// Balance policy used by [`is_balanced`](Ship::is_balanced).
    pub fn balance_policy(&self) -> BalancePolicy {
        self.balance
    }

    /// Columns, left to right.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column at `index`, or `None` if out of range.
    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Stack at `slot`, or `None` if out of range.
    pub fn slot(&self, slot: SlotRef) -> Option<&Stack> {
        self.columns.get(slot.column)?.stack(slot.stack)
    }

    /// Every stack with its location, columns left to right, stacks front
    /// to back.
    pub fn stacks(&self) -> impl Iterator<Item = (SlotRef, &Stack)> + '_ {
        self.columns.iter().enumerate().flat_map(|(ci, column)| {
            column
                .stacks()
                .iter()
                .enumerate()
                .map(move |(si, stack)| (SlotRef::new(ci, si), stack))
        })
    }

    /// Column indices belonging to `side`.
    ///
    /// Left is `0..floor(width / 2)`, right is `ceil(width / 2)..width`.
    pub fn columns_on(&self, side: Side) -> Range<usize> {
        let width = self.width();
        match side {
            Side::Left => 0..width / 2,
            Side::Right => width.div_ceil(2)..width,
        }
    }

    /// The unpaired middle column of an odd-width ship.
    pub fn middle_column(&self) -> Option<usize> {
        let width = self.width();
        (width % 2 == 1).then_some(width / 2)
    }

    /// Which side `column` belongs to; `None` for the middle column or
    /// an out-of-range index.
    pub fn side_of(&self, column: usize) -> Option<Side> {
        if self.columns_on(Side::Left).contains(&column) {
            Some(Side::Left)
        } else if self.columns_on(Side::Right).contains(&column) {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// Total cargo weight on `side`.
    pub fn side_weight(&self, side: Side) -> u64 {
        self.columns[self.columns_on(side)]
            .iter()
            .map(Column::total_weight)
            .sum()
    }

    /// Total cargo weight on the left side.
    pub fn left_side_weight(&self) -> u64 {
        self.side_weight(Side::Left)
    }

    /// Total cargo weight on the right side.
    pub fn right_side_weight(&self) -> u64 {
        self.side_weight(Side::Right)
    }

    /// Cargo weight in the middle column; zero for even-width ships.
    pub fn middle_weight(&self) -> u64 {
        self.middle_column()
            .map_or(0, |i| self.columns[i].total_weight())
    }

    /// Total cargo weight aboard.
    pub fn total_weight(&self) -> u64 {
        self.columns.iter().map(Column::total_weight).sum()
    }

    /// Number of containers aboard.
    pub fn container_count(&self) -> usize {
        self.stacks().map(|(_, s)| s.size()).sum()
    }

    /// Whether the left/right difference is within the balance policy.
    pub fn is_balanced(&self) -> bool {
        self.balance.is_balanced(
            self.left_side_weight(),
            self.right_side_weight(),
            self.total_weight(),
        )
    }

    /// Stacks `category` may occupy. See [`eligible_places`].
    pub fn eligible_places(&self, category: ContainerCategory) -> EligiblePlaces {
        eligible_places(self, category)
    }

    /// Append `container` to the stack at `slot`, returning its tier.
    ///
    /// Performs no admissibility checks: weight limits and category
    /// rules are the caller's responsibility.
    pub fn place(&mut self, slot: SlotRef, container: Container) -> Result<usize, ShipError> {
        let width = self.width();
        let length = self.length;
        let stack = self
            .columns
            .get_mut(slot.column)
            .and_then(|c| c.stack_mut(slot.stack))
            .ok_or(ShipError::SlotOutOfRange {
                slot,
                width,
                length,
            })?;
        Ok(stack.push(container))
    }
}
