use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::Document;
use crate::error::ViewError;
use crate::push::PushEvent;

/// A full-page query result as echoed by the API collaborator.
///
/// `term` and `page` echo the request parameters so the reducer can detect
/// and discard stale responses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueryResult<M> {
    pub term: String,
    pub page: u64,
    pub total_count: u64,
    pub page_count: u64,
    pub documents: Vec<M>,
}

/// Everything that can change the view snapshot.
///
/// Commands originate from the user; result and push events arrive from the
/// transport collaborator. Each action is processed to completion before the
/// next is considered.
#[derive(Clone, Debug, PartialEq)]
pub enum Action<M: Document> {
    QueryRequested { term: String, page: u64 },
    QuerySucceeded(QueryResult<M>),
    QueryFailed(ViewError),
    Push(PushEvent),
    ToggleSelection(String),
    ClearSelection,
    DetailRequested(String),
    DetailSucceeded(M),
    DetailNotFound(String),
    DetailPatched(Value),
    DetailRemoved(String),
    DetailClosed,
    ValidationFailed { field: String, message: String },
    ErrorDismissed,
    UploadStarted { upload_id: String, name: String, total: u64 },
    UploadProgressed { upload_id: String, loaded: u64 },
    UploadFinished { upload_id: String },
    UploadFailed { upload_id: String, error: ViewError },
    Reset,
}
