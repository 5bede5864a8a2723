use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// The set of user-marked document identifiers for bulk operations.
///
/// Lifecycle is independent of the document store: selection survives query
/// re-fetches and store replacement, and is only emptied by `clear`. Ids that
/// no longer appear on the current page stay selected, which is what makes
/// cross-page bulk actions possible.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    ids: HashSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Selection::default()
    }

    /// Symmetric difference with `{id}`: present → removed, absent → added.
    pub fn toggle(&mut self, id: impl Into<String>) {
        let id = id.into();
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    /// Empty the selection unconditionally.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate the selected ids. No ordering guarantees; display order is the
    /// renderer's concern.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(|id| id.as_str())
    }
}
