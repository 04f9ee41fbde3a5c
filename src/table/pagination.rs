//! Fixed-size page window over a record slice.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_size: usize,
    page: usize,
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            page: 1,
        }
    }

    /// Current page, 1-based.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Any positive page is accepted, including ones past the end; those
    /// yield an empty slice. Callers clamp when they need to.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    pub fn clamp(&mut self, total: usize) {
        self.page = self.page.clamp(1, self.page_count(total));
    }

    pub fn visible_slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.page - 1).saturating_mul(self.page_size);
        if start >= items.len() {
            return &[];
        }
        let end = start.saturating_add(self.page_size).min(items.len());
        &items[start..end]
    }

    /// 1-based `(first, last)` row numbers on the current page, or `None`
    /// when the page is empty.
    pub fn range(&self, total: usize) -> Option<(usize, usize)> {
        let start = (self.page - 1).saturating_mul(self.page_size);
        if start >= total {
            return None;
        }
        Some((start + 1, (start + self.page_size).min(total)))
    }
}
