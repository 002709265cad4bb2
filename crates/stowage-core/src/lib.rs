//! Core types for the Stowage placement planner.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the container value type, its handling category, identifiers, and
//! the errors raised while constructing them.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod container;
pub mod error;
pub mod id;

pub use container::{Container, ContainerCategory};
pub use error::{ContainerError, ParseCategoryError};
pub use id::{ContainerId, Weight};
