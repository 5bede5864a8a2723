use std::fmt;

/// Error taxonomy for view-state operations.
///
/// Every variant is terminal to the single operation that raised it; none may
/// leave the snapshot in a partially mutated state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// A query response whose echoed parameters no longer match the current
    /// envelope. Discarded silently, never surfaced.
    Stale { term: String, page: u64 },
    /// A single-document fetch for an identifier that does not exist.
    NotFound { collection: String, id: String },
    /// A field-scoped, recoverable input error (e.g. duplicate name on create).
    Validation { field: String, message: String },
    /// Network or server failure. Retryable; surfaced as a generic banner.
    Transport { message: String },
}

impl ViewError {
    /// Whether the user can retry the failed operation as-is.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ViewError::Transport { .. })
    }
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewError::Stale { term, page } => {
                write!(f, "stale response for term {:?} page {}", term, page)
            }
            ViewError::NotFound { collection, id } => {
                write!(f, "document not found: {}:{}", collection, id)
            }
            ViewError::Validation { field, message } => {
                write!(f, "validation failed on {}: {}", field, message)
            }
            ViewError::Transport { message } => write!(f, "transport failure: {}", message),
        }
    }
}

impl std::error::Error for ViewError {}
