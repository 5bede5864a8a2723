//! View snapshot and reducer.
//!
//! The snapshot is the complete, immutable state bundle consumed by rendering
//! at a point in time. Every processed action produces a new snapshot; the
//! previous one is never mutated, which is what makes race-free diffing by
//! the rendering layer possible.

mod action;
mod reducer;

pub use action::{Action, QueryResult};

use std::collections::HashMap;

use crate::detail::DetailSlot;
use crate::document::Document;
use crate::error::ViewError;
use crate::page::Page;
use crate::selection::Selection;
use crate::store::DocumentStore;

/// Progress of one in-flight upload task, reported as discrete events through
/// the same event loop as everything else.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadProgress {
    pub name: String,
    pub loaded: u64,
    pub total: u64,
}

impl UploadProgress {
    /// Completed fraction in [0, 1].
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.loaded as f64 / self.total as f64
    }
}

/// Transient UI flags: request lifecycle, error surfaces, upload progress.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiFlags {
    /// A query is in flight; stale documents stay visible underneath.
    pub loading: bool,
    /// Generic retryable error banner.
    pub error: Option<ViewError>,
    /// Field-scoped validation messages; user-entered form state stays put.
    pub field_errors: HashMap<String, String>,
    /// In-flight uploads keyed by upload id.
    pub uploads: HashMap<String, UploadProgress>,
}

/// The complete view snapshot: documents, pagination, selection, the open
/// detail record, and transient UI flags.
#[derive(Clone, Debug)]
pub struct ViewState<M: Document> {
    pub documents: DocumentStore<M>,
    pub page: Page,
    pub selection: Selection,
    pub detail: DetailSlot<M>,
    pub flags: UiFlags,
}

impl<M: Document> Default for ViewState<M> {
    fn default() -> Self {
        ViewState {
            documents: DocumentStore::new(),
            page: Page::empty(),
            selection: Selection::new(),
            detail: DetailSlot::Empty,
            flags: UiFlags::default(),
        }
    }
}

impl<M: Document + PartialEq> PartialEq for ViewState<M> {
    fn eq(&self, other: &Self) -> bool {
        self.documents == other.documents
            && self.page == other.page
            && self.selection == other.selection
            && self.detail == other.detail
            && self.flags == other.flags
    }
}

impl<M: Document> ViewState<M> {
    /// A freshly mounted, empty view.
    pub fn new() -> Self {
        ViewState::default()
    }
}
