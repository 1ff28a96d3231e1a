//! Page index and page size of the book table.

/// Page sizes offered by the rows-per-page selector.
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [10, 50, 100];

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Total shown by the pager when the catalog does not report a work count.
pub const PLACEHOLDER_TOTAL_COUNT: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("page size {0} is not one of the allowed options (10, 50, 100)")]
pub struct InvalidPageSize(pub usize);

pub fn is_allowed_page_size(size: usize) -> bool {
    PAGE_SIZE_OPTIONS.contains(&size)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    pub fn with_page_size(page_size: usize) -> Result<Self, InvalidPageSize> {
        if !is_allowed_page_size(page_size) {
            return Err(InvalidPageSize(page_size));
        }
        Ok(Self { page: 0, page_size })
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Offset of the first row of the current page.
    pub fn offset(&self) -> usize {
        self.page * self.page_size
    }

    /// Moves to `page`. Returns `true` if the page changed.
    pub fn set_page(&mut self, page: usize) -> bool {
        let changed = self.page != page;
        self.page = page;
        changed
    }

    /// Changes the page size and resets the page index to 0.
    ///
    /// Returns `true` if either value changed.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<bool, InvalidPageSize> {
        if !is_allowed_page_size(page_size) {
            return Err(InvalidPageSize(page_size));
        }
        let changed = self.page_size != page_size || self.page != 0;
        self.page_size = page_size;
        self.page = 0;
        Ok(changed)
    }

    /// Resets the page index to 0. Returns `true` if it was not already 0.
    pub fn reset_page(&mut self) -> bool {
        self.set_page(0)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self, total: u64) -> bool {
        (((self.page + 1) * self.page_size) as u64) < total
    }

    /// Pager caption, e.g. `11–20 of 100`.
    pub fn range_label(&self, total: u64) -> String {
        let first = (self.offset() as u64 + 1).min(total);
        let last = (((self.page + 1) * self.page_size) as u64).min(total);
        format!("{first}–{last} of {total}")
    }
}
