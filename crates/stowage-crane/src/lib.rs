//! Feasibility checks and greedy container placement.
//!
//! A loading run has two phases:
//!
//! 1. [`check_feasibility`] rejects batches that provably cannot fit
//!    (aggregate weight out of bounds, too many valuable containers for
//!    the certified slots). Passing is necessary, not sufficient.
//! 2. [`sort`] seats every container, category by category in
//!    [`ContainerCategory::PLACEMENT_ORDER`](stowage_core::ContainerCategory::PLACEMENT_ORDER),
//!    steering weight toward the lighter side, and finally verifies the
//!    ship is balanced.
//!
//! [`Crane`] bundles both phases behind a validated [`CraneConfig`].
//! The placement is a single greedy pass with no backtracking; a batch
//! that a smarter search could fit may still be rejected.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod crane;
pub mod error;
pub mod feasibility;
pub mod placement;
pub mod report;

pub use config::{ConfigError, CraneConfig};
pub use crane::Crane;
pub use error::{CraneError, FeasibilityError, PlacementError};
pub use feasibility::{check_feasibility, ManifestSummary};
pub use placement::sort;
pub use report::{Placement, StowageReport};
