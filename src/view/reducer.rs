//! The pure state-transition function: `(snapshot, action) -> snapshot`.
//!
//! A failed mutation (malformed payload, invalid patch) returns the input
//! snapshot unchanged — errors never corrupt the document store, the
//! pagination envelope, or the selection tracker.

use crate::config::ViewConfig;
use crate::detail::DetailSlot;
use crate::document::Document;
use crate::merge;
use crate::push::{PushEvent, PushKind};
use crate::store::DocumentStore;
use crate::view::{Action, UploadProgress, ViewState};

impl<M: Document> ViewState<M> {
    /// Apply one action, producing the next snapshot. The receiver is never
    /// mutated.
    pub fn apply(&self, action: Action<M>, config: &ViewConfig) -> ViewState<M> {
        let mut next = self.clone();

        match action {
            Action::QueryRequested { term, page } => {
                // Optimistic: reflect the requested window immediately, keep
                // stale documents visible until the response lands.
                next.page.term = term;
                next.page.page = page;
                next.flags.loading = true;
                next.flags.error = None;
            }
            Action::QuerySucceeded(result) => {
                if !next.page.matches(&result.term, result.page) {
                    // Late response for a superseded request.
                    return next;
                }
                next.documents = DocumentStore::from_documents(result.documents);
                next.page.page = result.page;
                next.page.total_count = result.total_count;
                next.page.page_count = result.page_count;
                next.page.term = result.term;
                next.flags.loading = false;
            }
            Action::QueryFailed(error) => {
                next.flags.loading = false;
                next.flags.error = Some(error);
            }
            Action::Push(event) => {
                if self.apply_push(&mut next, &event, config).is_err() {
                    return self.clone();
                }
            }
            Action::ToggleSelection(id) => next.selection.toggle(id),
            Action::ClearSelection => next.selection.clear(),
            Action::DetailRequested(id) => next.detail = DetailSlot::loading(id),
            Action::DetailSucceeded(document) => next.detail = DetailSlot::loaded(document),
            Action::DetailNotFound(id) => next.detail = DetailSlot::not_found(id),
            Action::DetailPatched(patch) => {
                if next.detail.patch(&patch).is_err() {
                    return self.clone();
                }
            }
            Action::DetailRemoved(id) => {
                if next.detail.matches(&id) {
                    next.detail.clear();
                }
            }
            Action::DetailClosed => next.detail.clear(),
            Action::ValidationFailed { field, message } => {
                next.flags.field_errors.insert(field, message);
            }
            Action::ErrorDismissed => {
                next.flags.error = None;
                next.flags.field_errors.clear();
            }
            Action::UploadStarted {
                upload_id,
                name,
                total,
            } => {
                next.flags.uploads.insert(
                    upload_id,
                    UploadProgress {
                        name,
                        loaded: 0,
                        total,
                    },
                );
            }
            Action::UploadProgressed { upload_id, loaded } => {
                if let Some(upload) = next.flags.uploads.get_mut(&upload_id) {
                    upload.loaded = loaded;
                }
            }
            Action::UploadFinished { upload_id } => {
                next.flags.uploads.remove(&upload_id);
            }
            Action::UploadFailed { upload_id, error } => {
                next.flags.uploads.remove(&upload_id);
                next.flags.error = Some(error);
            }
            Action::Reset => next = ViewState::new(),
        }

        next
    }

    fn apply_push(
        &self,
        next: &mut ViewState<M>,
        event: &PushEvent,
        config: &ViewConfig,
    ) -> Result<(), crate::document::PatchError> {
        merge::apply_push(&mut next.documents, &mut next.page, event, config)?;

        // The open detail tracks the same identifier independently of the list.
        if next.detail.matches(&event.id) {
            match event.kind {
                PushKind::Remove => next.detail.clear(),
                PushKind::Insert | PushKind::Update => {
                    if let Some(payload) = &event.payload {
                        next.detail.patch(payload)?;
                    }
                }
            }
        }

        Ok(())
    }
}
