//! Stowage Quickstart — load a small feeder ship end to end.
//!
//! Demonstrates:
//!   1. Describing a ship with `ShipSpec`
//!   2. Building a container batch with mixed categories
//!   3. Running feasibility checks and placement through a `Crane`
//!   4. Reading the placement report and final weight distribution
//!
//! Run with:
//!   RUST_LOG=stowage_crane=trace cargo run --example quickstart

use stowage_core::{Container, ContainerCategory, ContainerId};
use stowage_crane::{Crane, CraneConfig};
use stowage_ship::{BalancePolicy, Ship, ShipSpec};
use tracing_subscriber::EnvFilter;

// ─── Ship parameters ────────────────────────────────────────────

const WIDTH: usize = 5;
const LENGTH: usize = 4;
const MAX_WEIGHT: u64 = 1_200_000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 1. Ship: five columns, four stacks deep, the default 20 % balance
    //    tolerance and a minimum load of half capacity.
    let ship = Ship::new(ShipSpec {
        balance: BalancePolicy::default(),
        ..ShipSpec::new(WIDTH, LENGTH, MAX_WEIGHT)
    })?;

    // 2. Batch.
    let manifest: &[(u32, ContainerCategory)] = &[
        (26_000, ContainerCategory::ValuableCooled),
        (22_000, ContainerCategory::ValuableCooled),
        (24_000, ContainerCategory::Cooled),
        (18_000, ContainerCategory::Cooled),
        (21_000, ContainerCategory::Cooled),
        (30_000, ContainerCategory::Valuable),
        (12_000, ContainerCategory::Valuable),
        (9_000, ContainerCategory::Valuable),
    ];
    let mut batch = Vec::new();
    for (i, &(weight, category)) in manifest.iter().enumerate() {
        batch.push(Container::new(ContainerId(i as u32), weight, category)?);
    }
    for i in 0..30u32 {
        let weight = 10_000 + (i * 7_919) % 18_000;
        batch.push(Container::new(
            ContainerId(manifest.len() as u32 + i),
            weight,
            ContainerCategory::Normal,
        )?);
    }

    // 3. Load a copy of the ship; the original stays empty.
    let crane = Crane::new(CraneConfig::default())?;
    let (loaded, report) = crane.plan(&ship, &batch)?;

    // 4. Report.
    println!("placed {} containers", report.len());
    for p in report.iter().take(10) {
        println!(
            "  {:>4} {:<16} {:>6} kg -> column {}, stack {}, tier {}",
            p.container.to_string(),
            p.category.to_string(),
            p.weight,
            p.slot.column,
            p.slot.stack,
            p.tier
        );
    }
    println!(
        "left {} kg | middle {} kg | right {} kg (balanced: {})",
        report.left_weight(),
        report.middle_weight(),
        report.right_weight(),
        loaded.is_balanced()
    );
    Ok(())
}
