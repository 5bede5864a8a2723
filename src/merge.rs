//! Push merge operator — applies one incremental push event against the
//! current `(DocumentStore, Page)` pair.
//!
//! The operator is a fold over an ordered event stream: events are applied in
//! arrival order, never reordered or coalesced. A failed event leaves both the
//! store and the envelope exactly as they were.

use crate::config::{OverflowPolicy, ViewConfig};
use crate::document::{self, Document, PatchError};
use crate::page::Page;
use crate::push::{PushEvent, PushKind};
use crate::store::DocumentStore;

/// Apply a single push event.
///
/// - Insert: an already-present identifier is treated as an update. Otherwise
///   the payload is inserted at its sorted position and `total_count` grows by
///   one; on a bounded page the configured overflow policy applies.
/// - Update: shallow-merges the payload into the existing entry in place. The
///   operator never re-sorts on update, only on insert. Absent id → no-op.
/// - Remove: deletes the entry and decrements `total_count` (floor 0).
///   Absent id → no-op.
pub fn apply_push<M: Document>(
    store: &mut DocumentStore<M>,
    page: &mut Page,
    event: &PushEvent,
    config: &ViewConfig,
) -> Result<(), PatchError> {
    match event.kind {
        PushKind::Insert => {
            if store.contains(&event.id) {
                return apply_update(store, event);
            }
            apply_insert(store, page, event, config)
        }
        PushKind::Update => apply_update(store, event),
        PushKind::Remove => {
            if store.remove(&event.id).is_some() {
                page.decrement_total();
            }
            Ok(())
        }
    }
}

/// Apply a sequence of push events in arrival order. Events that fail to
/// decode or merge are skipped (each leaves the state untouched); the rest of
/// the stream still applies. Returns the number of events applied.
pub fn apply_ordered<M: Document>(
    store: &mut DocumentStore<M>,
    page: &mut Page,
    events: &[PushEvent],
    config: &ViewConfig,
) -> usize {
    events
        .iter()
        .filter(|event| apply_push(store, page, event, config).is_ok())
        .count()
}

fn apply_insert<M: Document>(
    store: &mut DocumentStore<M>,
    page: &mut Page,
    event: &PushEvent,
    config: &ViewConfig,
) -> Result<(), PatchError> {
    let payload = event
        .payload
        .as_ref()
        .ok_or_else(|| PatchError::new("insert event has no payload"))?;

    let document: M = document::decode(payload)?;
    if document.id() != event.id {
        return Err(PatchError::new(
            "payload identifier does not match the event identifier",
        ));
    }

    store.insert_sorted(document, event.sort.as_ref())?;
    page.increment_total();

    if let Some(per_page) = config.per_page {
        if store.len() > per_page && config.overflow == OverflowPolicy::EvictLast {
            store.evict_last();
        }
    }

    Ok(())
}

fn apply_update<M: Document>(
    store: &mut DocumentStore<M>,
    event: &PushEvent,
) -> Result<(), PatchError> {
    let payload = event
        .payload
        .as_ref()
        .ok_or_else(|| PatchError::new("update event has no payload"))?;

    store.merge(&event.id, payload)?;
    Ok(())
}
