//! Addressing stacks and ship sides.

use std::fmt;

/// One half of the ship, split along the keel.
///
/// Odd-width ships have a middle column that belongs to neither side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Columns with index `< floor(width / 2)`.
    Left,
    /// Columns with index `>= ceil(width / 2)`.
    Right,
}

impl Side {
    /// The other side.
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// Location of a single stack: column index (left to right) and stack
/// index within the column (front to back).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotRef {
    /// Column index, `0` is the leftmost column.
    pub column: usize,
    /// Stack index within the column, `0` is the front stack.
    pub stack: usize,
}

impl SlotRef {
    /// Shorthand constructor.
    pub fn new(column: usize, stack: usize) -> Self {
        Self { column, stack }
    }
}

impl fmt::Display for SlotRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot ({}, {})", self.column, self.stack)
    }
}
