//! Ship topology for the Stowage placement planner.
//!
//! This crate models the physical layout a loading run works against:
//! a [`Ship`] is a left-to-right row of [`Column`]s, each holding a
//! fixed front-to-back row of [`Stack`]s. Containers are appended to
//! stacks and never removed.
//!
//! # Eligibility
//!
//! Not every stack can take every container. [`eligible_places`]
//! resolves, per [`ContainerCategory`](stowage_core::ContainerCategory),
//! the subset of stacks that category may occupy, as an index-based
//! [`EligiblePlaces`] view that stays valid while the ship is mutated.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod balance;
pub mod column;
pub mod eligibility;
pub mod error;
pub mod ship;
pub mod slot;
pub mod stack;

pub use balance::BalancePolicy;
pub use column::Column;
pub use eligibility::{eligible_places, ColumnView, EligiblePlaces};
pub use error::ShipError;
pub use ship::{Ship, ShipSpec};
pub use slot::{Side, SlotRef};
pub use stack::Stack;
