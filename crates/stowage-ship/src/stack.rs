//! A single front-to-back position holding containers bottom to top.

use stowage_core::Container;

/// An append-only pile of containers.
///
/// Index `0` of [`containers`](Stack::containers) is the bottom of the
/// pile. The bottom container carries everything above it, which is
/// what [`top_weight`](Stack::top_weight) reports.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stack {
    containers: Vec<Container>,
}

impl Stack {
    /// An empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of containers in the stack.
    pub fn size(&self) -> usize {
        self.containers.len()
    }

    /// `true` if nothing has been placed here yet.
    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// Containers from bottom to top.
    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    /// Load resting on the bottom container: every container above it.
    ///
    /// Zero for an empty or single-container stack. A new container is
    /// admissible when `top_weight() + weight` stays within the
    /// configured limit.
    pub fn top_weight(&self) -> u64 {
        self.containers
            .iter()
            .skip(1)
            .map(|c| u64::from(c.weight()))
            .sum()
    }

    /// Sum of all container weights in the stack.
    pub fn total_weight(&self) -> u64 {
        self.containers.iter().map(|c| u64::from(c.weight())).sum()
    }

    /// `true` if any container here is valuable.
    pub fn contains_valuable(&self) -> bool {
        self.containers.iter().any(Container::is_valuable)
    }

    /// Put `container` on top. Returns its tier (0 = bottom).
    pub(crate) fn push(&mut self, container: Container) -> usize {
        self.containers.push(container);
        self.containers.len() - 1
    }
}
