use std::sync::Arc;

use crate::{UserField, UserRecord};

/// Derived output of [`super::TableState::view`] for one frame.
#[derive(Debug, Clone, Default)]
pub struct TableView {
    /// Visible columns in schema order.
    pub columns: Vec<UserField>,
    /// Rows on the current page, filtered and sorted.
    pub rows: Vec<Arc<UserRecord>>,
    /// Rows passing the global filter, across all pages.
    pub filtered_count: usize,
    /// Rows in the working set.
    pub total_count: usize,
    /// Effective page index after clamping.
    pub page_index: usize,
    pub page_count: usize,
    pub page_size: usize,
    pub can_previous: bool,
    pub can_next: bool,
}

impl TableView {
    /// "Page X of Y", 1-based.
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.page_index + 1, self.page_count)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
