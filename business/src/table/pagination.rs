/// Page sizes offered by the page-size selector.
pub const PAGE_SIZES: [usize; 4] = [5, 10, 20, 50];

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_index: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Requested index; may exceed the last page until clamped.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Never less than one, so an empty table still shows "Page 1 of 1".
    pub fn page_count(&self, row_count: usize) -> usize {
        row_count.div_ceil(self.page_size).max(1)
    }

    pub fn clamped_index(&self, row_count: usize) -> usize {
        self.page_index.min(self.page_count(row_count) - 1)
    }

    pub fn can_previous(&self, row_count: usize) -> bool {
        self.clamped_index(row_count) > 0
    }

    pub fn can_next(&self, row_count: usize) -> bool {
        self.clamped_index(row_count) + 1 < self.page_count(row_count)
    }

    /// Row range of the current page within `row_count` rows.
    pub fn page_range(&self, row_count: usize) -> std::ops::Range<usize> {
        let start = self.clamped_index(row_count) * self.page_size;
        start.min(row_count)..(start + self.page_size).min(row_count)
    }

    pub fn set_page_index(&mut self, index: usize, row_count: usize) {
        self.page_index = index.min(self.page_count(row_count) - 1);
    }

    pub fn reset(&mut self) {
        self.page_index = 0;
    }

    pub fn next_page(&mut self, row_count: usize) {
        if self.can_next(row_count) {
            self.page_index = self.clamped_index(row_count) + 1;
        }
    }

    pub fn previous_page(&mut self, row_count: usize) {
        if self.can_previous(row_count) {
            self.page_index = self.clamped_index(row_count) - 1;
        }
    }

    /// Changes the page size, keeping the first row of the current page
    /// on screen. A zero size is ignored.
    pub fn set_page_size(&mut self, page_size: usize, row_count: usize) {
        if page_size == 0 {
            return;
        }
        let top_row = self.clamped_index(row_count) * self.page_size;
        self.page_size = page_size;
        self.set_page_index(top_row / page_size, row_count);
    }
}
