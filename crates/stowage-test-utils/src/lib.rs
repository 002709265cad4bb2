//! Test utilities for Stowage development.
//!
//! Provides ship and batch fixtures ([`roomy_ship`], [`BatchBuilder`],
//! [`generate_batch`]) and [`check_stowage`], which verifies the
//! post-conditions every successful loading run must satisfy.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    check_stowage, generate_batch, roomy_ship, BatchBuilder, CategoryMix, StowageViolation,
};
