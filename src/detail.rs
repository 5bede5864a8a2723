use serde_json::Value;

use crate::document::{self, Document, PatchError};

/// The single open-record slot, decoupled from the list.
///
/// `NotFound` is a distinct terminal state so the renderer can tell "this
/// record does not exist" apart from "nothing is open". A record removed
/// while open clears back to `Empty` — intentionally gone, not an error.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DetailSlot<M> {
    #[default]
    Empty,
    Loading {
        id: String,
    },
    Loaded(M),
    NotFound {
        id: String,
    },
}

impl<M: Document> DetailSlot<M> {
    pub fn loading(id: impl Into<String>) -> Self {
        DetailSlot::Loading { id: id.into() }
    }

    pub fn loaded(document: M) -> Self {
        DetailSlot::Loaded(document)
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        DetailSlot::NotFound { id: id.into() }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, DetailSlot::Empty)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DetailSlot::Loading { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DetailSlot::NotFound { .. })
    }

    pub fn document(&self) -> Option<&M> {
        match self {
            DetailSlot::Loaded(document) => Some(document),
            _ => None,
        }
    }

    /// The identifier this slot currently refers to, if any.
    pub fn id(&self) -> Option<&str> {
        match self {
            DetailSlot::Empty => None,
            DetailSlot::Loading { id } => Some(id),
            DetailSlot::Loaded(document) => Some(document.id()),
            DetailSlot::NotFound { id } => Some(id),
        }
    }

    /// Whether this slot refers to the given identifier.
    pub fn matches(&self, id: &str) -> bool {
        self.id() == Some(id)
    }

    pub fn clear(&mut self) {
        *self = DetailSlot::Empty;
    }

    /// Shallow-merge a partial update into the loaded document, preserving
    /// in-flight unrelated fields. No-op unless the slot is `Loaded`; a
    /// failed merge leaves the slot unchanged.
    pub fn patch(&mut self, patch: &Value) -> Result<bool, PatchError> {
        let loaded = match self {
            DetailSlot::Loaded(document) => document,
            _ => return Ok(false),
        };

        let merged = document::shallow_merge(loaded, patch)?;
        if merged.id() != loaded.id() {
            return Err(PatchError::new("patch changes the document identifier"));
        }

        *loaded = merged;
        Ok(true)
    }
}
