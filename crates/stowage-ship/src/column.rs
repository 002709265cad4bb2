//! A ship cross-section at one left-right position.

use crate::stack::Stack;

/// A fixed, front-to-back row of stacks.
///
/// The number of stacks is set when the ship is built and never changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    stacks: Vec<Stack>,
}

impl Column {
    pub(crate) fn with_length(length: usize) -> Self {
        Self {
            stacks: vec![Stack::new(); length],
        }
    }

    /// Stacks from front (`0`) to back.
    pub fn stacks(&self) -> &[Stack] {
        &self.stacks
    }

    /// Stack at `index`, or `None` if out of range.
    pub fn stack(&self, index: usize) -> Option<&Stack> {
        self.stacks.get(index)
    }

    pub(crate) fn stack_mut(&mut self, index: usize) -> Option<&mut Stack> {
        self.stacks.get_mut(index)
    }

    /// Number of stacks.
    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    /// Always `false`: ships reject zero-length columns.
    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    /// Sum of every container weight in this column.
    pub fn total_weight(&self) -> u64 {
        self.stacks.iter().map(Stack::total_weight).sum()
    }
}
