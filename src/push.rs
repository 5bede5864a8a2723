use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The three push operations delivered over the persistent channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PushKind {
    Insert,
    Update,
    Remove,
}

/// How an inserted document is positioned within the current window.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub ascending: bool,
}

impl SortSpec {
    pub fn ascending(field: impl Into<String>) -> Self {
        SortSpec {
            field: field.into(),
            ascending: true,
        }
    }

    pub fn descending(field: impl Into<String>) -> Self {
        SortSpec {
            field: field.into(),
            ascending: false,
        }
    }
}

/// A single-document insert/update/remove notification, arriving outside the
/// request/response query cycle. Events are applied strictly in arrival order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PushEvent {
    pub kind: PushKind,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortSpec>,
}

impl PushEvent {
    pub fn insert(id: impl Into<String>, payload: Value, sort: Option<SortSpec>) -> Self {
        PushEvent {
            kind: PushKind::Insert,
            id: id.into(),
            payload: Some(payload),
            sort,
        }
    }

    pub fn update(id: impl Into<String>, payload: Value) -> Self {
        PushEvent {
            kind: PushKind::Update,
            id: id.into(),
            payload: Some(payload),
            sort: None,
        }
    }

    pub fn remove(id: impl Into<String>) -> Self {
        PushEvent {
            kind: PushKind::Remove,
            id: id.into(),
            payload: None,
            sort: None,
        }
    }
}
