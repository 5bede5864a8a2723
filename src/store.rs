use std::cmp::Ordering;
use std::collections::HashMap;

use serde_json::Value;

use crate::document::{self, Document, PatchError};
use crate::push::SortSpec;

/// The currently loaded page of documents: an ordered sequence plus an
/// unordered index from identifier to position for O(1) lookup during merge.
///
/// Invariant: every identifier appears at most once, and the index maps
/// exactly the identifiers present in the sequence to their positions.
#[derive(Clone, Debug)]
pub struct DocumentStore<M: Document> {
    documents: Vec<M>,
    index: HashMap<String, usize>,
}

impl<M: Document> Default for DocumentStore<M> {
    fn default() -> Self {
        DocumentStore {
            documents: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<M: Document + PartialEq> PartialEq for DocumentStore<M> {
    fn eq(&self, other: &Self) -> bool {
        self.documents == other.documents
    }
}

impl<M: Document> DocumentStore<M> {
    pub fn new() -> Self {
        DocumentStore::default()
    }

    /// Build a store from a full query result. Later duplicates of an
    /// identifier are dropped to preserve the uniqueness invariant.
    pub fn from_documents(documents: Vec<M>) -> Self {
        let mut store = DocumentStore::new();
        for document in documents {
            if !store.index.contains_key(document.id()) {
                store
                    .index
                    .insert(document.id().to_string(), store.documents.len());
                store.documents.push(document);
            }
        }
        store
    }

    /// Replace the whole window with a new query result.
    pub fn replace_all(&mut self, documents: Vec<M>) {
        *self = DocumentStore::from_documents(documents);
    }

    pub fn clear(&mut self) {
        self.documents.clear();
        self.index.clear();
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn get(&self, id: &str) -> Option<&M> {
        self.position(id).map(|at| &self.documents[at])
    }

    pub fn documents(&self) -> &[M] {
        &self.documents
    }

    pub fn iter(&self) -> impl Iterator<Item = &M> {
        self.documents.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.documents.iter().map(|document| document.id())
    }

    /// Insert a document at the position determined by the sort spec.
    /// Without a spec, or when the sort field is missing from either side of
    /// a comparison, the document goes to the end of the sequence.
    ///
    /// The caller is responsible for routing already-present identifiers to
    /// `merge` instead; inserting a duplicate id is rejected here.
    pub fn insert_sorted(&mut self, document: M, sort: Option<&SortSpec>) -> Result<usize, PatchError> {
        if self.contains(document.id()) {
            return Err(PatchError::new(format!(
                "duplicate identifier {}",
                document.id()
            )));
        }

        let at = match sort {
            Some(spec) => self.sorted_position(&document, spec)?,
            None => self.documents.len(),
        };

        self.documents.insert(at, document);
        self.reindex_from(at);
        Ok(at)
    }

    /// Shallow-merge a patch into the document with the given identifier,
    /// preserving its position. Returns false (no-op) when the id is absent.
    pub fn merge(&mut self, id: &str, patch: &Value) -> Result<bool, PatchError> {
        let at = match self.position(id) {
            Some(at) => at,
            None => return Ok(false),
        };

        let merged = document::shallow_merge(&self.documents[at], patch)?;
        if merged.id() != id {
            return Err(PatchError::new("patch changes the document identifier"));
        }

        self.documents[at] = merged;
        Ok(true)
    }

    /// Delete the document with the given identifier, if present.
    pub fn remove(&mut self, id: &str) -> Option<M> {
        let at = self.index.remove(id)?;
        let removed = self.documents.remove(at);
        self.reindex_from(at);
        Some(removed)
    }

    /// Drop the last element of the sequence (bounded-page eviction).
    pub fn evict_last(&mut self) -> Option<M> {
        let evicted = self.documents.pop()?;
        self.index.remove(evicted.id());
        Some(evicted)
    }

    fn sorted_position(&self, document: &M, spec: &SortSpec) -> Result<usize, PatchError> {
        let incoming = document::to_json(document)?;
        let key = match document::field(&incoming, &spec.field) {
            Some(value) => value.clone(),
            None => return Ok(self.documents.len()),
        };

        for (at, existing) in self.documents.iter().enumerate() {
            let existing = document::to_json(existing)?;
            let existing_key = match document::field(&existing, &spec.field) {
                Some(value) => value,
                None => continue,
            };

            let ordering = document::compare_values(&key, existing_key);
            let before = if spec.ascending {
                ordering == Ordering::Less
            } else {
                ordering == Ordering::Greater
            };

            if before {
                return Ok(at);
            }
        }

        Ok(self.documents.len())
    }

    fn reindex_from(&mut self, start: usize) {
        for at in start..self.documents.len() {
            self.index
                .insert(self.documents[at].id().to_string(), at);
        }
    }
}
