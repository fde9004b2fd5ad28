//! Table-state adapter.
//!
//! [`TableState`] holds the view state of the grid: sort spec, global filter,
//! column visibility and widths, and pagination. Its only input is the working
//! record set and its only output is a [`TableView`]; it never edits records.
//!
//! Rules:
//! - the global filter is a case-insensitive substring match over every
//!   column's text, hidden columns included; empty keeps every row
//! - sorting is stable, so rows that compare equal keep working-set order
//! - changing the filter or the sort spec returns to the first page

mod columns;
mod filter;
mod pagination;
mod sorting;
mod view;

use std::sync::Arc;

pub use columns::{ColumnSizing, ColumnVisibility, DEFAULT_COLUMN_WIDTH, MIN_COLUMN_WIDTH};
pub use filter::GlobalFilter;
pub use pagination::{DEFAULT_PAGE_SIZE, PAGE_SIZES, Pagination};
pub use sorting::{ColumnSort, SortDirection, Sorting, natural_cmp};
pub use view::TableView;

use crate::{UserField, UserRecord};

#[derive(Debug, Clone, Default)]
pub struct TableState {
    sorting: Sorting,
    global_filter: String,
    visibility: ColumnVisibility,
    sizing: ColumnSizing,
    pagination: Pagination,
}

impl TableState {
    pub fn new() -> Self {
        Self::default()
    }

    // Sorting

    pub fn sorting(&self) -> &Sorting {
        &self.sorting
    }

    pub fn toggle_sorting(&mut self, column: UserField, multi: bool) {
        self.sorting.toggle(column, multi);
        self.pagination.reset();
    }

    // Filtering

    pub fn global_filter(&self) -> &str {
        &self.global_filter
    }

    pub fn set_global_filter(&mut self, filter: impl Into<String>) {
        let filter = filter.into();
        if filter != self.global_filter {
            self.global_filter = filter;
            self.pagination.reset();
        }
    }

    // Visibility

    pub fn is_visible(&self, column: UserField) -> bool {
        self.visibility.is_visible(column)
    }

    pub fn set_visible(&mut self, column: UserField, visible: bool) {
        self.visibility.set_visible(column, visible);
    }

    pub fn toggle_visibility(&mut self, column: UserField) {
        self.visibility.toggle(column);
    }

    // Sizing

    pub fn column_width(&self, column: UserField) -> f32 {
        self.sizing.width(column)
    }

    pub fn resize_column(&mut self, column: UserField, delta: f32) {
        self.sizing.resize(column, delta);
    }

    pub fn finish_resize(&mut self) {
        self.sizing.finish_resize();
    }

    pub fn is_resizing(&self, column: UserField) -> bool {
        self.sizing.is_resizing(column)
    }

    pub fn reset_column_width(&mut self, column: UserField) {
        self.sizing.reset(column);
    }

    // Pagination. `row_count` is the filtered row count of the current view.

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn set_page_size(&mut self, page_size: usize, row_count: usize) {
        self.pagination.set_page_size(page_size, row_count);
    }

    pub fn set_page_index(&mut self, index: usize, row_count: usize) {
        self.pagination.set_page_index(index, row_count);
    }

    pub fn next_page(&mut self, row_count: usize) {
        self.pagination.next_page(row_count);
    }

    pub fn previous_page(&mut self, row_count: usize) {
        self.pagination.previous_page(row_count);
    }

    /// Derives the rows and controls to render from the working set.
    pub fn view(&self, rows: &[Arc<UserRecord>]) -> TableView {
        let filter = GlobalFilter::new(&self.global_filter);
        let mut matched: Vec<&Arc<UserRecord>> =
            rows.iter().filter(|record| filter.matches(record)).collect();

        if !self.sorting.is_empty() {
            matched.sort_by(|a, b| self.sorting.compare(a, b));
        }

        let filtered_count = matched.len();
        let page = self.pagination.page_range(filtered_count);

        TableView {
            columns: self.visibility.visible_columns(),
            rows: matched[page].iter().copied().cloned().collect(),
            filtered_count,
            total_count: rows.len(),
            page_index: self.pagination.clamped_index(filtered_count),
            page_count: self.pagination.page_count(filtered_count),
            page_size: self.pagination.page_size(),
            can_previous: self.pagination.can_previous(filtered_count),
            can_next: self.pagination.can_next(filtered_count),
        }
    }
}
