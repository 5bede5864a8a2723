pub mod cache;
#[cfg(feature = "channel")]
mod channel;
mod config;
mod detail;
mod dispatcher;
pub mod document;
mod error;
pub mod merge;
mod page;
mod push;
mod selection;
mod store;
mod view;

#[cfg(feature = "channel")]
pub use channel::PushChannel;
pub use config::{OverflowPolicy, ViewConfig};
pub use detail::DetailSlot;
pub use dispatcher::Dispatcher;
pub use document::{Document, PatchError};
pub use error::ViewError;
pub use page::Page;
pub use push::{PushEvent, PushKind, SortSpec};
pub use selection::Selection;
pub use store::DocumentStore;
pub use view::{Action, QueryResult, UiFlags, UploadProgress, ViewState};

// Re-export the derive macro so `#[derive(Document)]` works with a single import
pub use viewsync_rust_macros::Document;

// Re-export the EventEmitter from the event_emitter_rs crate
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
