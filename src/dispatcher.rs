use std::sync::Arc;

#[cfg(feature = "emitter")]
use event_emitter_rs::EventEmitter;

use crate::config::ViewConfig;
use crate::document::Document;
use crate::view::{Action, ViewState};

/// Single-threaded command surface over the reducer.
///
/// Holds the current immutable snapshot and processes one action to
/// completion before the next is considered. Rendering reads snapshots via
/// `snapshot()`; with the `emitter` feature it can subscribe to change
/// notifications instead of polling.
///
/// # Example
///
/// ```ignore
/// let mut view: Dispatcher<Sample> = Dispatcher::new(ViewConfig::bounded(25));
///
/// view.on_change(|revision| {
///     println!("snapshot {} ready", revision);
/// });
///
/// view.request_query("phage", 1);
/// view.dispatch(Action::QuerySucceeded(result));
/// ```
pub struct Dispatcher<M: Document> {
    state: Arc<ViewState<M>>,
    config: ViewConfig,
    revision: u64,
    #[cfg(feature = "emitter")]
    emitter: EventEmitter,
}

impl<M: Document> Default for Dispatcher<M> {
    fn default() -> Self {
        Dispatcher::new(ViewConfig::default())
    }
}

impl<M: Document> Dispatcher<M> {
    pub fn new(config: ViewConfig) -> Self {
        Dispatcher {
            state: Arc::new(ViewState::new()),
            config,
            revision: 0,
            #[cfg(feature = "emitter")]
            emitter: EventEmitter::new(),
        }
    }

    /// The current immutable snapshot.
    pub fn snapshot(&self) -> Arc<ViewState<M>> {
        Arc::clone(&self.state)
    }

    /// Monotonically increasing snapshot revision, starting at 0 for the
    /// pristine view.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Process one action and return the resulting snapshot.
    pub fn dispatch(&mut self, action: Action<M>) -> Arc<ViewState<M>> {
        let next = self.state.apply(action, &self.config);
        self.state = Arc::new(next);
        self.revision += 1;

        #[cfg(feature = "emitter")]
        self.emitter.emit("change", self.revision);

        Arc::clone(&self.state)
    }

    /// Request a new query window. The snapshot reflects the requested
    /// term/page immediately; the network result arrives later as
    /// `Action::QuerySucceeded` or `Action::QueryFailed`.
    pub fn request_query(&mut self, term: impl Into<String>, page: u64) -> Arc<ViewState<M>> {
        self.dispatch(Action::QueryRequested {
            term: term.into(),
            page,
        })
    }

    /// Toggle a document in the selection tracker.
    pub fn select_document(&mut self, id: impl Into<String>) -> Arc<ViewState<M>> {
        self.dispatch(Action::ToggleSelection(id.into()))
    }

    pub fn clear_selection(&mut self) -> Arc<ViewState<M>> {
        self.dispatch(Action::ClearSelection)
    }

    /// Open a record in the detail slot; the fetched document arrives later
    /// as `Action::DetailSucceeded` or `Action::DetailNotFound`.
    pub fn open_detail(&mut self, id: impl Into<String>) -> Arc<ViewState<M>> {
        self.dispatch(Action::DetailRequested(id.into()))
    }

    pub fn close_detail(&mut self) -> Arc<ViewState<M>> {
        self.dispatch(Action::DetailClosed)
    }

    /// Tear the view down to its pristine state (unmount).
    pub fn reset(&mut self) -> Arc<ViewState<M>> {
        self.dispatch(Action::Reset)
    }

    /// Register a listener called with the new revision after every
    /// processed action.
    #[cfg(feature = "emitter")]
    pub fn on_change<F>(&mut self, listener: F)
    where
        F: Fn(u64) + Send + Sync + 'static,
    {
        self.emitter.on("change", listener);
    }
}
