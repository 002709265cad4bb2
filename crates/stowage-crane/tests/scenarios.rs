use stowage_core::{ContainerCategory, ContainerId};
use stowage_crane::{check_feasibility, sort, Crane, CraneConfig, CraneError, FeasibilityError, PlacementError};
use stowage_ship::{Ship, ShipSpec, SlotRef};
use stowage_test_utils::{check_stowage, generate_batch, roomy_ship, BatchBuilder, CategoryMix};

#[test]
fn first_container_on_empty_even_ship_lands_right_front() {
    let mut ship = roomy_ship(4, 2);
    let batch = BatchBuilder::new().normal(10).build();
    // One container can never balance a ship; the placement still happens.
    let err = sort(&mut ship, &batch, 100).unwrap_err();
    assert!(matches!(err, PlacementError::Imbalance { left: 0, right: 10 }));
    assert_eq!(ship.slot(SlotRef::new(2, 0)).unwrap().size(), 1);
}

#[test]
fn balanced_odd_ship_tries_middle_before_opposite_side() {
    let mut ship = roomy_ship(3, 2);
    let setup = BatchBuilder::new().normal(10).normal(10).build();
    ship.place(SlotRef::new(0, 0), setup[0]).unwrap();
    ship.place(SlotRef::new(2, 0), setup[1]).unwrap();
    ship.place(SlotRef::new(2, 1), setup[1]).unwrap();
    ship.place(SlotRef::new(0, 1), setup[0]).unwrap();
    assert!(ship.is_balanced());

    // Right side stacks hold one container each, the middle is empty.
    let valuable = BatchBuilder::new().valuable(10).build();
    let report = sort(&mut ship, &valuable, 100).unwrap();
    assert_eq!(report.placements()[0].slot.column, 1);
}

#[test]
fn second_valuable_never_joins_the_first() {
    // One column, two stacks: the back stack is the only other valuable slot.
    let mut ship = roomy_ship(1, 2);
    let batch = BatchBuilder::new().valuable(20).valuable(10).build();
    let report = sort(&mut ship, &batch, 1_000).unwrap();
    let a = report.placement_of(ContainerId(0)).unwrap().slot;
    let b = report.placement_of(ContainerId(1)).unwrap().slot;
    assert_ne!(a, b);

    // A third has nowhere to go even though both stacks have headroom.
    let mut ship = roomy_ship(1, 2);
    let batch = BatchBuilder::new().repeat(3, 10, ContainerCategory::Valuable).build();
    let err = sort(&mut ship, &batch, 1_000).unwrap_err();
    assert_eq!(
        err,
        PlacementError::NoValidLocation {
            container: ContainerId(2),
            category: ContainerCategory::Valuable,
            weight: 10,
        }
    );
}

#[test]
fn overweight_batch_fails_before_placement() {
    let crane = Crane::new(CraneConfig::default()).unwrap();
    let mut ship = Ship::new(ShipSpec::new(2, 2, 50_000)).unwrap();
    let batch = BatchBuilder::new().repeat(3, 20_000, ContainerCategory::Normal).build();
    assert_eq!(
        check_feasibility(&ship, &batch).unwrap_err(),
        FeasibilityError::TooHeavy {
            total: 60_000,
            max: 50_000,
        }
    );
    let err = crane.load(&mut ship, &batch).unwrap_err();
    assert!(matches!(err, CraneError::Feasibility(FeasibilityError::TooHeavy { .. })));
    assert_eq!(ship.container_count(), 0);
}

#[test]
fn exact_weight_bounds_pass() {
    let ship = Ship::new(ShipSpec {
        min_weight: 20_000,
        ..ShipSpec::new(2, 2, 40_000)
    })
    .unwrap();
    let at_max = BatchBuilder::new().normal(20_000).normal(20_000).build();
    let at_min = BatchBuilder::new().normal(10_000).normal(10_000).build();
    assert!(check_feasibility(&ship, &at_max).is_ok());
    assert!(check_feasibility(&ship, &at_min).is_ok());
}

#[test]
fn valuable_cooled_only_in_front_stacks() {
    let crane = Crane::new(CraneConfig::default()).unwrap();
    let mut ship = Ship::new(ShipSpec::new(4, 3, 600_000)).unwrap();
    let batch = BatchBuilder::new()
        .repeat(4, 25_000, ContainerCategory::ValuableCooled)
        .repeat(4, 20_000, ContainerCategory::Cooled)
        .repeat(4, 15_000, ContainerCategory::Valuable)
        .repeat(8, 20_000, ContainerCategory::Normal)
        .build();
    let report = crane.load(&mut ship, &batch).unwrap();
    for p in report.iter() {
        if p.category == ContainerCategory::ValuableCooled {
            assert_eq!(p.slot.stack, 0, "{:?}", p);
        }
    }
    assert!(check_stowage(&ship, &batch, crane.config().max_top_weight).is_empty());
}

#[test]
fn realistic_voyage_loads_cleanly() {
    let crane = Crane::new(CraneConfig::default()).unwrap();
    let ship = Ship::new(ShipSpec::new(6, 8, 3_000_000)).unwrap();
    let mix = CategoryMix {
        cooled: 10,
        valuable: 2,
        valuable_cooled: 1,
    };
    let batch = generate_batch(120, 11, 4_000, 26_000, mix);
    let (loaded, report) = crane.plan(&ship, &batch).unwrap();
    assert_eq!(report.len(), batch.len());
    let violations = check_stowage(&loaded, &batch, crane.config().max_top_weight);
    assert!(violations.is_empty(), "{violations:?}");
}
