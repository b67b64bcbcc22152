use std::ops::Range;

use crate::foundation::error::{FolioError, FolioResult};

/// Cards shown per page in the project grid.
pub const ITEMS_PER_PAGE: usize = 3;

/// Wrap-around pagination over a fixed number of cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    total_items: usize,
    per_page: usize,
    current: usize,
}

impl Pager {
    /// Pager over `total_items` with [`ITEMS_PER_PAGE`] cards per page.
    pub fn new(total_items: usize) -> Self {
        Self::with_page_size(total_items, ITEMS_PER_PAGE)
    }

    /// Pager with an explicit page size (clamped to at least one card).
    pub fn with_page_size(total_items: usize, per_page: usize) -> Self {
        Self {
            total_items,
            per_page: per_page.max(1),
            current: 0,
        }
    }

    /// Number of pages; zero when there are no cards.
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.per_page)
    }

    /// Zero-based current page.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Advance one page, wrapping from the last page to the first.
    pub fn next(&mut self) {
        let pages = self.total_pages();
        if pages > 0 {
            self.current = (self.current + 1) % pages;
        }
    }

    /// Go back one page, wrapping from the first page to the last.
    pub fn prev(&mut self) {
        let pages = self.total_pages();
        if pages > 0 {
            self.current = (self.current + pages - 1) % pages;
        }
    }

    /// Jump to `page`.
    pub fn go_to(&mut self, page: usize) -> FolioResult<()> {
        let pages = self.total_pages();
        if page >= pages {
            return Err(FolioError::validation(format!(
                "page {page} out of range (0..{pages})"
            )));
        }
        self.current = page;
        Ok(())
    }

    /// Card indices on the current page.
    pub fn visible_range(&self) -> Range<usize> {
        let start = (self.current * self.per_page).min(self.total_items);
        let end = (start + self.per_page).min(self.total_items);
        start..end
    }

    /// Slice `items` down to the current page.
    pub fn page_of<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let r = self.visible_range();
        let end = r.end.min(items.len());
        let start = r.start.min(end);
        &items[start..end]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/pager.rs"]
mod tests;
