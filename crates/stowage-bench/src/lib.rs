//! Benchmark profiles for the Stowage placement planner.
//!
//! Each profile pairs an empty ship with a deterministic batch that is
//! known to load successfully under [`CraneConfig::default`]:
//!
//! - [`feeder_profile`]: 8x6 ship, 150 containers
//! - [`post_panamax_profile`]: 20x20 ship, 1500 containers

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use stowage_core::Container;
use stowage_crane::CraneConfig;
use stowage_ship::{Ship, ShipSpec};
use stowage_test_utils::{generate_batch, CategoryMix};

/// An empty ship and the batch to load onto it.
pub struct Profile {
    pub ship: Ship,
    pub batch: Vec<Container>,
    pub config: CraneConfig,
}

fn profile(spec: ShipSpec, n: usize, seed: u64, mix: CategoryMix) -> Profile {
    Profile {
        ship: Ship::new(spec).expect("profile ship specs are valid"),
        batch: generate_batch(n, seed, 4_000, 30_000, mix),
        config: CraneConfig::default(),
    }
}

/// Small feeder vessel: 8 columns, 6 stacks deep, 150 containers.
pub fn feeder_profile() -> Profile {
    profile(
        ShipSpec::new(8, 6, 4_500_000),
        150,
        42,
        CategoryMix {
            cooled: 10,
            valuable: 2,
            valuable_cooled: 1,
        },
    )
}

/// Large vessel: 20 columns, 20 stacks deep, 1500 containers.
pub fn post_panamax_profile() -> Profile {
    profile(
        ShipSpec::new(20, 20, 45_000_000),
        1500,
        7,
        CategoryMix {
            cooled: 8,
            valuable: 1,
            valuable_cooled: 1,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use stowage_crane::Crane;
    use stowage_test_utils::check_stowage;

    #[test]
    fn profiles_load_cleanly() {
        for p in [feeder_profile(), post_panamax_profile()] {
            let crane = Crane::new(p.config.clone()).unwrap();
            let (loaded, report) = crane.plan(&p.ship, &p.batch).unwrap();
            assert_eq!(report.len(), p.batch.len());
            assert!(check_stowage(&loaded, &p.batch, p.config.max_top_weight).is_empty());
        }
    }
}
