use serde::{Deserialize, Serialize};

/// What to do when a push insert would overflow a bounded page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverflowPolicy {
    /// Drop the last element of the sequence, favoring the newly relevant
    /// item over strict page-size fidelity with the server's sort order.
    #[default]
    EvictLast,
    /// Let the page exceed the bound until the next full query result.
    Grow,
}

/// Synchronizer configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Fixed page size, if the store represents a bounded page.
    pub per_page: Option<usize>,
    pub overflow: OverflowPolicy,
}

impl ViewConfig {
    /// Unbounded store: inserts never evict.
    pub fn unbounded() -> Self {
        ViewConfig::default()
    }

    /// Bounded page with the default eviction policy.
    pub fn bounded(per_page: usize) -> Self {
        ViewConfig {
            per_page: Some(per_page),
            overflow: OverflowPolicy::EvictLast,
        }
    }

    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }
}
