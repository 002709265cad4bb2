//! Stowage: container placement for cargo ships.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Stowage sub-crates. For most users, adding `stowage` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use stowage::prelude::*;
//!
//! // Two columns, two stacks deep, 100 t capacity (50 t minimum load).
//! let mut ship = Ship::new(ShipSpec::new(2, 2, 100_000)).unwrap();
//! let batch = vec![
//!     Container::new(ContainerId(1), 20_000, ContainerCategory::Cooled).unwrap(),
//!     Container::new(ContainerId(2), 20_000, ContainerCategory::Cooled).unwrap(),
//!     Container::new(ContainerId(3), 15_000, ContainerCategory::Normal).unwrap(),
//!     Container::new(ContainerId(4), 15_000, ContainerCategory::Normal).unwrap(),
//! ];
//!
//! let crane = Crane::new(CraneConfig::default()).unwrap();
//! let report = crane.load(&mut ship, &batch).unwrap();
//! assert_eq!(report.len(), 4);
//! assert!(ship.is_balanced());
//!
//! // Cooled containers sit in front stacks.
//! let cooled = report.placement_of(ContainerId(1)).unwrap();
//! assert_eq!(cooled.slot.stack, 0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `stowage-core` | Containers, categories, IDs |
//! | [`ship`] | `stowage-ship` | Ship topology, balance policy, slot eligibility |
//! | [`crane`] | `stowage-crane` | Feasibility checks, placement engine, reports |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core container types (`stowage-core`).
pub use stowage_core as types;

/// Ship topology and eligibility (`stowage-ship`).
pub use stowage_ship as ship;

/// Feasibility checks and placement (`stowage-crane`).
pub use stowage_crane as crane;

/// Commonly used types for a loading run.
pub mod prelude {
    pub use stowage_core::{Container, ContainerCategory, ContainerId, Weight};
    pub use stowage_crane::{
        check_feasibility, sort, Crane, CraneConfig, CraneError, FeasibilityError,
        PlacementError, StowageReport,
    };
    pub use stowage_ship::{BalancePolicy, Ship, ShipSpec, Side, SlotRef};
}
