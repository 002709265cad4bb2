//! The placement engine.
//!
//! Containers are seated one category at a time, in
//! [`ContainerCategory::PLACEMENT_ORDER`], heaviest first within a
//! category. For each container the engine picks a primary side:
//!
//! - left weight >= right weight: scan the right side first,
//! - otherwise: scan the left side first.
//!
//! On odd-width ships the middle column is then consulted if the
//! primary side offered nothing, or if the ship is currently balanced
//! (it competes with the primary side's candidate and wins only when
//! strictly shorter). If there is still no candidate the opposite side
//! is scanned in full.
//!
//! Within a scan the shortest admissible stack wins; ties go to the
//! first stack encountered (columns ascending, stacks front to back).

use stowage_core::{Container, ContainerCategory, Weight};
use stowage_ship::{ColumnView, EligiblePlaces, Ship, Side, SlotRef};

use crate::error::PlacementError;
use crate::report::{Placement, StowageReport};

/// Place every container of `containers` onto `ship`.
///
/// `max_top_weight` bounds the load any stack's bottom container may
/// carry. On success the ship holds every container exactly once and is
/// balanced. On failure the run stops at the first container that could
/// not be placed (or at the final balance check); containers placed so
/// far stay on the ship. Callers that need the prior state should keep
/// a clone, or use [`Crane::plan`](crate::Crane::plan).
///
/// # Examples
///
/// ```
/// use stowage_core::{Container, ContainerCategory, ContainerId};
/// use stowage_crane::sort;
/// use stowage_ship::{Ship, ShipSpec, SlotRef};
///
/// let mut ship = Ship::new(ShipSpec::new(2, 1, 100)).unwrap();
/// let batch = [
///     Container::new(ContainerId(1), 10, ContainerCategory::Normal).unwrap(),
///     Container::new(ContainerId(2), 10, ContainerCategory::Normal).unwrap(),
/// ];
/// let report = sort(&mut ship, &batch, 100).unwrap();
/// assert_eq!(report.placement_of(ContainerId(1)).unwrap().slot, SlotRef::new(1, 0));
/// assert_eq!(report.placement_of(ContainerId(2)).unwrap().slot, SlotRef::new(0, 0));
/// assert!(ship.is_balanced());
/// ```
pub fn sort(
    ship: &mut Ship,
    containers: &[Container],
    max_top_weight: Weight,
) -> Result<StowageReport, PlacementError> {
    let mut report = StowageReport::with_capacity(containers.len());

    for category in ContainerCategory::PLACEMENT_ORDER {
        sort_category(ship, containers, category, max_top_weight, &mut report)?;
    }

    if !ship.is_balanced() {
        let (left, right) = (ship.left_side_weight(), ship.right_side_weight());
        tracing::warn!(left, right, "ship unbalanced after placement");
        return Err(PlacementError::Imbalance { left, right });
    }

    report.finish(ship);
    tracing::debug!(
        placed = report.len(),
        left = report.left_weight(),
        right = report.right_weight(),
        middle = report.middle_weight(),
        "placement complete"
    );
    Ok(report)
}

fn sort_category(
    ship: &mut Ship,
    containers: &[Container],
    category: ContainerCategory,
    max_top_weight: Weight,
    report: &mut StowageReport,
) -> Result<(), PlacementError> {
    let mut batch: Vec<&Container> = containers
        .iter()
        .filter(|c| c.category() == category)
        .collect();
    if batch.is_empty() {
        return Ok(());
    }
    // Stable: equal weights keep batch order.
    batch.sort_by(|a, b| b.weight().cmp(&a.weight()));

    let places = ship.eligible_places(category);
    tracing::debug!(
        %category,
        containers = batch.len(),
        eligible_slots = places.slot_count(),
        "placing category"
    );

    for container in batch {
        let Some(slot) = find_slot(ship, &places, container, max_top_weight) else {
            tracing::warn!(
                container = %container.id(),
                %category,
                weight = container.weight(),
                "no valid location"
            );
            return Err(PlacementError::NoValidLocation {
                container: container.id(),
                category,
                weight: container.weight(),
            });
        };
        let tier = ship.place(slot, *container)?;
        tracing::trace!(
            container = %container.id(),
            column = slot.column,
            stack = slot.stack,
            tier,
            "placed"
        );
        report.record(Placement {
            container: container.id(),
            category,
            weight: container.weight(),
            slot,
            tier,
        });
    }
    Ok(())
}

/// Side the next container should go to: the currently lighter one,
/// right on a tie.
fn primary_side(ship: &Ship) -> Side {
    if ship.left_side_weight() >= ship.right_side_weight() {
        Side::Right
    } else {
        Side::Left
    }
}

fn side_slots<'a>(
    ship: &Ship,
    places: &'a EligiblePlaces,
    side: Side,
) -> impl Iterator<Item = SlotRef> + 'a {
    places.columns()[ship.columns_on(side)]
        .iter()
        .flat_map(ColumnView::slots)
}

fn find_slot(
    ship: &Ship,
    places: &EligiblePlaces,
    container: &Container,
    max_top_weight: Weight,
) -> Option<SlotRef> {
    let primary = primary_side(ship);
    let mut best = best_stack(
        ship,
        side_slots(ship, places, primary),
        container,
        max_top_weight,
        None,
    );

    if let Some(middle) = ship.middle_column() {
        if best.is_none() || ship.is_balanced() {
            let slots = places.column(middle).into_iter().flat_map(ColumnView::slots);
            best = best_stack(ship, slots, container, max_top_weight, best);
        }
    }

    if best.is_none() {
        best = best_stack(
            ship,
            side_slots(ship, places, primary.opposite()),
            container,
            max_top_weight,
            None,
        );
    }

    best.map(|(slot, _)| slot)
}

/// Shortest admissible stack among `candidates`, starting from `best`.
///
/// A stack is admissible when its top weight plus the container stays
/// within `max_top_weight`, and, for valuable containers, it holds no
/// valuable container yet. A candidate replaces `best` only if strictly
/// shorter. Returns the slot together with its stack size.
fn best_stack(
    ship: &Ship,
    candidates: impl IntoIterator<Item = SlotRef>,
    container: &Container,
    max_top_weight: Weight,
    mut best: Option<(SlotRef, usize)>,
) -> Option<(SlotRef, usize)> {
    let weight = u64::from(container.weight());
    let limit = u64::from(max_top_weight);
    for slot in candidates {
        let Some(stack) = ship.slot(slot) else {
            continue;
        };
        if stack.top_weight() + weight > limit {
            continue;
        }
        if container.is_valuable() && stack.contains_valuable() {
            continue;
        }
        if best.is_none_or(|(_, size)| stack.size() < size) {
            best = Some((slot, stack.size()));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use stowage_core::ContainerId;
    use stowage_ship::ShipSpec;

    fn container(id: u32, weight: u32, category: ContainerCategory) -> Container {
        Container::new(ContainerId(id), weight, category).unwrap()
    }

    fn normal(id: u32, weight: u32) -> Container {
        container(id, weight, ContainerCategory::Normal)
    }

    fn empty_ship(width: usize, length: usize) -> Ship {
        Ship::new(ShipSpec {
            min_weight: 0,
            ..ShipSpec::new(width, length, 10_000_000)
        })
        .unwrap()
    }

    #[test]
    fn empty_ship_sends_first_container_right() {
        let mut ship = empty_ship(4, 2);
        let c = normal(1, 10);
        let places = ship.eligible_places(ContainerCategory::Normal);
        assert_eq!(find_slot(&ship, &places, &c, 100), Some(SlotRef::new(2, 0)));

        // The single container leaves the ship lopsided.
        let err = sort(&mut ship, &[c], 100).unwrap_err();
        assert_eq!(err, PlacementError::Imbalance { left: 0, right: 10 });
        assert_eq!(ship.slot(SlotRef::new(2, 0)).unwrap().size(), 1);
    }

    #[test]
    fn heavier_right_side_routes_left() {
        let mut ship = empty_ship(4, 2);
        ship.place(SlotRef::new(3, 1), normal(1, 50)).unwrap();
        let places = ship.eligible_places(ContainerCategory::Normal);
        assert_eq!(
            find_slot(&ship, &places, &normal(2, 10), 100),
            Some(SlotRef::new(0, 0))
        );
    }

    #[test]
    fn shortest_stack_wins_and_ties_keep_scan_order() {
        let mut ship = empty_ship(4, 2);
        ship.place(SlotRef::new(2, 0), normal(1, 10)).unwrap();
        ship.place(SlotRef::new(0, 0), normal(2, 10)).unwrap();
        let places = ship.eligible_places(ContainerCategory::Normal);
        // Right side: (2,0) has one, (2,1), (3,0), (3,1) are empty.
        assert_eq!(
            find_slot(&ship, &places, &normal(3, 10), 100),
            Some(SlotRef::new(2, 1))
        );
    }

    #[test]
    fn balanced_odd_ship_prefers_shorter_middle() {
        let mut ship = empty_ship(3, 1);
        ship.place(SlotRef::new(0, 0), normal(1, 10)).unwrap();
        ship.place(SlotRef::new(2, 0), normal(2, 10)).unwrap();
        let v = container(3, 10, ContainerCategory::Valuable);
        let places = ship.eligible_places(ContainerCategory::Valuable);
        assert_eq!(find_slot(&ship, &places, &v, 100), Some(SlotRef::new(1, 0)));
    }

    #[test]
    fn balanced_odd_ship_keeps_primary_on_tie() {
        let ship = empty_ship(3, 1);
        let places = ship.eligible_places(ContainerCategory::Valuable);
        let v = container(1, 10, ContainerCategory::Valuable);
        assert_eq!(find_slot(&ship, &places, &v, 100), Some(SlotRef::new(2, 0)));
    }

    #[test]
    fn unbalanced_odd_ship_skips_middle_when_primary_has_room() {
        let mut ship = empty_ship(3, 1);
        ship.place(SlotRef::new(0, 0), normal(1, 100)).unwrap();
        ship.place(SlotRef::new(2, 0), normal(2, 10)).unwrap();
        assert!(!ship.is_balanced());
        let places = ship.eligible_places(ContainerCategory::Normal);
        assert_eq!(
            find_slot(&ship, &places, &normal(3, 10), 1000),
            Some(SlotRef::new(2, 0))
        );
    }

    #[test]
    fn middle_used_when_primary_side_is_full() {
        let mut ship = empty_ship(3, 1);
        ship.place(SlotRef::new(0, 0), normal(1, 100)).unwrap();
        ship.place(SlotRef::new(2, 0), normal(2, 20)).unwrap();
        ship.place(SlotRef::new(2, 0), normal(3, 10)).unwrap();
        let places = ship.eligible_places(ContainerCategory::Normal);
        // Right stack already carries 10 on its bottom container.
        assert_eq!(
            find_slot(&ship, &places, &normal(4, 10), 15),
            Some(SlotRef::new(1, 0))
        );
    }

    #[test]
    fn falls_back_to_opposite_side() {
        let mut ship = empty_ship(2, 1);
        ship.place(SlotRef::new(1, 0), normal(1, 50)).unwrap();
        ship.place(SlotRef::new(1, 0), normal(2, 10)).unwrap();
        ship.place(SlotRef::new(0, 0), normal(3, 100)).unwrap();
        let places = ship.eligible_places(ContainerCategory::Normal);
        assert_eq!(
            find_slot(&ship, &places, &normal(4, 5), 10),
            Some(SlotRef::new(0, 0))
        );
    }

    #[test]
    fn stack_with_valuable_is_never_a_candidate_for_another() {
        let mut ship = empty_ship(2, 2);
        ship.place(
            SlotRef::new(1, 0),
            container(1, 10, ContainerCategory::Valuable),
        )
        .unwrap();
        let v = container(2, 10, ContainerCategory::Valuable);
        let vc = container(3, 10, ContainerCategory::ValuableCooled);
        let only = [SlotRef::new(1, 0)];
        assert_eq!(best_stack(&ship, only, &v, u32::MAX, None), None);
        assert_eq!(best_stack(&ship, only, &vc, u32::MAX, None), None);
        // Ordinary cargo may still go on top.
        assert_eq!(
            best_stack(&ship, only, &normal(4, 10), u32::MAX, None),
            Some((SlotRef::new(1, 0), 1))
        );
    }

    #[test]
    fn top_weight_limit_is_inclusive() {
        let mut ship = empty_ship(1, 1);
        ship.place(SlotRef::new(0, 0), normal(1, 30)).unwrap();
        ship.place(SlotRef::new(0, 0), normal(2, 15)).unwrap();
        let only = [SlotRef::new(0, 0)];
        assert!(best_stack(&ship, only, &normal(3, 10), 25, None).is_some());
        assert!(best_stack(&ship, only, &normal(3, 11), 25, None).is_none());
    }

    #[test]
    fn exhausted_stacks_report_no_valid_location() {
        let mut ship = empty_ship(1, 1);
        let batch: Vec<Container> = (0..4).map(|i| normal(i, 10)).collect();
        let err = sort(&mut ship, &batch, 25).unwrap_err();
        assert_eq!(
            err,
            PlacementError::NoValidLocation {
                container: ContainerId(3),
                category: ContainerCategory::Normal,
                weight: 10,
            }
        );
        // No rollback: the first three stay aboard.
        assert_eq!(ship.container_count(), 3);
    }

    #[test]
    fn categories_are_placed_in_priority_order_heaviest_first() {
        use ContainerCategory::*;
        let mut ship = empty_ship(2, 3);
        let batch = vec![
            container(1, 5, Normal),
            container(2, 7, Valuable),
            container(3, 9, Cooled),
            container(4, 8, ValuableCooled),
            container(5, 9, Normal),
            container(6, 9, Cooled),
            container(7, 8, ValuableCooled),
            container(8, 7, Valuable),
        ];
        let report = sort(&mut ship, &batch, 1_000).unwrap();
        let order: Vec<u32> = report.iter().map(|p| p.container.0).collect();
        // Equal weights keep batch order.
        assert_eq!(order, vec![4, 7, 3, 6, 2, 8, 5, 1]);
        assert_eq!(report.len(), batch.len());
        assert!(ship.is_balanced());
    }

    #[test]
    fn alternates_sides_on_odd_ship() {
        let mut ship = empty_ship(3, 1);
        let batch = vec![normal(1, 10), normal(2, 10), normal(3, 10)];
        let report = sort(&mut ship, &batch, 100).unwrap();
        let slots: Vec<SlotRef> = report.iter().map(|p| p.slot).collect();
        assert_eq!(
            slots,
            vec![SlotRef::new(2, 0), SlotRef::new(0, 0), SlotRef::new(1, 0)]
        );
        assert_eq!(report.middle_weight(), 10);
    }

    #[test]
    fn report_records_tiers() {
        let mut ship = empty_ship(2, 1);
        let batch = vec![normal(1, 10), normal(2, 10), normal(3, 5), normal(4, 5)];
        let report = sort(&mut ship, &batch, 100).unwrap();
        assert_eq!(report.placement_of(ContainerId(1)).unwrap().tier, 0);
        assert_eq!(report.placement_of(ContainerId(3)).unwrap().tier, 1);
        assert_eq!(report.left_weight(), 15);
        assert_eq!(report.right_weight(), 15);
    }

    #[test]
    fn empty_batch_is_trivially_placed() {
        let mut ship = empty_ship(2, 2);
        let report = sort(&mut ship, &[], 10).unwrap();
        assert!(report.is_empty());
        assert_eq!(ship.container_count(), 0);
    }
}
