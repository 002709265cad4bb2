//! Which stacks a container category may occupy.
//!
//! Refrigeration hookups exist only at the front of each column, and
//! valuable cargo must stay reachable from the front or the back. The
//! mapping from [`ContainerCategory`] to stacks is fixed:
//!
//! | Category | Stacks per column |
//! |---|---|
//! | `Normal` | all |
//! | `Cooled`, `ValuableCooled` | front |
//! | `Valuable`, length 1 | front |
//! | `Valuable`, length > 1 | front and back |

use smallvec::{smallvec, SmallVec};
use stowage_core::ContainerCategory;

use crate::ship::Ship;
use crate::slot::SlotRef;

/// The stacks of one column a category may use, front to back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnView {
    column: usize,
    stacks: SmallVec<[usize; 2]>,
}

impl ColumnView {
    /// Index of the viewed column on the ship.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Eligible stack indices within the column.
    pub fn stacks(&self) -> &[usize] {
        &self.stacks
    }

    /// Eligible slots of this column, in scan order.
    pub fn slots(&self) -> impl Iterator<Item = SlotRef> + '_ {
        self.stacks.iter().map(|&s| SlotRef::new(self.column, s))
    }
}

/// Category-filtered view of a ship's stacks.
///
/// Holds indices rather than borrows, so one view can be computed per
/// category and reused while containers are appended to the ship. The
/// layout never changes during a run, so the view never goes stale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EligiblePlaces {
    category: ContainerCategory,
    columns: Vec<ColumnView>,
}

impl EligiblePlaces {
    /// The category this view was resolved for.
    pub fn category(&self) -> ContainerCategory {
        self.category
    }

    /// One view per ship column, left to right.
    pub fn columns(&self) -> &[ColumnView] {
        &self.columns
    }

    /// View of column `index`, or `None` if out of range.
    pub fn column(&self, index: usize) -> Option<&ColumnView> {
        self.columns.get(index)
    }

    /// Total number of eligible stacks across the ship.
    pub fn slot_count(&self) -> usize {
        self.columns.iter().map(|c| c.stacks.len()).sum()
    }

    /// Every eligible slot, columns left to right.
    pub fn slots(&self) -> impl Iterator<Item = SlotRef> + '_ {
        self.columns.iter().flat_map(ColumnView::slots)
    }

    /// Whether `slot` is eligible for this category.
    pub fn contains(&self, slot: SlotRef) -> bool {
        self.columns
            .get(slot.column)
            .is_some_and(|c| c.stacks.contains(&slot.stack))
    }
}

/// Resolve the stacks `category` may occupy on `ship`.
///
/// # Examples
///
/// ```
/// use stowage_core::ContainerCategory;
/// use stowage_ship::{eligible_places, Ship, ShipSpec, SlotRef};
///
/// let ship = Ship::new(ShipSpec::new(2, 3, 100)).unwrap();
/// let valuable = eligible_places(&ship, ContainerCategory::Valuable);
/// assert_eq!(valuable.slot_count(), 4);
/// assert!(valuable.contains(SlotRef::new(1, 2)));
/// assert!(!valuable.contains(SlotRef::new(1, 1)));
/// ```
pub fn eligible_places(ship: &Ship, category: ContainerCategory) -> EligiblePlaces {
    let length = ship.length();
    let back = length - 1;
    let stacks: SmallVec<[usize; 2]> = match category {
        ContainerCategory::Normal => (0..length).collect(),
        ContainerCategory::Cooled | ContainerCategory::ValuableCooled => smallvec![0],
        ContainerCategory::Valuable if length == 1 => smallvec![0],
        ContainerCategory::Valuable => smallvec![0, back],
    };
    let columns = (0..ship.width())
        .map(|column| ColumnView {
            column,
            stacks: stacks.clone(),
        })
        .collect();
    EligiblePlaces { category, columns }
}
