//! Error types for container construction and parsing.

use std::error::Error;
use std::fmt;

use crate::ContainerId;

/// Errors arising from [`Container::new`](crate::Container::new).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContainerError {
    /// A container must weigh something.
    ZeroWeight {
        /// The offending container.
        id: ContainerId,
    },
}

impl fmt::Display for ContainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWeight { id } => write!(f, "container {id} has zero weight"),
        }
    }
}

impl Error for ContainerError {}

/// A string did not name a known [`ContainerCategory`](crate::ContainerCategory).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseCategoryError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown container category '{}' (expected normal, cooled, valuable or valuable-cooled)",
            self.input
        )
    }
}

impl Error for ParseCategoryError {}
