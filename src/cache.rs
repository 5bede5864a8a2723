//! Snapshot cache for instant re-hydration of a remounted view.
//!
//! Persists the durable parts of a snapshot — documents, pagination envelope,
//! selection — in a compact binary encoding, with a base64 wrapper for
//! string-only storage. Transient flags and the detail slot are not cached;
//! a hydrated view starts with both at their defaults and revalidates with a
//! fresh query.

use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};

use crate::detail::DetailSlot;
use crate::document::Document;
use crate::page::Page;
use crate::selection::Selection;
use crate::store::DocumentStore;
use crate::view::{UiFlags, ViewState};

/// Error when encoding or decoding a cached snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheError {
    pub message: String,
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "snapshot cache error: {}", self.message)
    }
}

impl std::error::Error for CacheError {}

impl CacheError {
    fn new(message: impl ToString) -> Self {
        CacheError {
            message: message.to_string(),
        }
    }
}

/// The durable subset of a view snapshot.
#[derive(Serialize, Deserialize)]
struct CachedView<M> {
    documents: Vec<M>,
    page: Page,
    selection: Selection,
}

/// Encode the durable parts of a snapshot.
pub fn encode<M: Document>(state: &ViewState<M>) -> Result<Vec<u8>, CacheError> {
    let cached = CachedView {
        documents: state.documents.documents().to_vec(),
        page: state.page.clone(),
        selection: state.selection.clone(),
    };

    bitcode::serialize(&cached).map_err(CacheError::new)
}

/// Decode a cached snapshot, re-establishing the document index. The detail
/// slot and transient flags come back at their defaults.
pub fn decode<M: Document>(bytes: &[u8]) -> Result<ViewState<M>, CacheError> {
    let cached: CachedView<M> = bitcode::deserialize(bytes).map_err(CacheError::new)?;

    Ok(ViewState {
        documents: DocumentStore::from_documents(cached.documents),
        page: cached.page,
        selection: cached.selection,
        detail: DetailSlot::Empty,
        flags: UiFlags::default(),
    })
}

/// Encode to a base64 string for storage backends that only take text.
pub fn encode_base64<M: Document>(state: &ViewState<M>) -> Result<String, CacheError> {
    Ok(STANDARD.encode(encode(state)?))
}

/// Decode from a base64 string produced by `encode_base64`.
pub fn decode_base64<M: Document>(text: &str) -> Result<ViewState<M>, CacheError> {
    let bytes = STANDARD.decode(text).map_err(CacheError::new)?;
    decode(&bytes)
}
