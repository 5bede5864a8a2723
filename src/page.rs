use serde::{Deserialize, Serialize};

/// Pagination envelope describing the current page/filter window of a query.
///
/// `total_count` and `page_count` are trustworthy only immediately after a
/// full query result; push events applied in between adjust `total_count` by
/// one but never recompute `page_count`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub page: u64,
    pub total_count: u64,
    pub page_count: u64,
    pub term: String,
}

impl Default for Page {
    fn default() -> Self {
        Page {
            page: 1,
            total_count: 0,
            page_count: 0,
            term: String::new(),
        }
    }
}

impl Page {
    /// An empty envelope for a freshly mounted view.
    pub fn empty() -> Self {
        Page::default()
    }

    /// Whether an echoed response matches the currently requested window.
    pub fn matches(&self, term: &str, page: u64) -> bool {
        self.term == term && self.page == page
    }

    pub fn increment_total(&mut self) {
        self.total_count += 1;
    }

    /// Decrement the total, flooring at zero.
    pub fn decrement_total(&mut self) {
        self.total_count = self.total_count.saturating_sub(1);
    }
}
