use serde::Serialize;

pub const DEFAULT_ITEMS_PER_PAGE: usize = 12;

/// Requested page window; pages start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    pub fn offset(&self) -> usize {
        (self.page.max(1) - 1).saturating_mul(self.per_page)
    }

    /// Slices an already loaded list to this page.
    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.offset())
            .take(self.per_page)
            .collect()
    }
}

/// One page of items plus the numbers a pager needs.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub pages: usize,
    pub total: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, page: usize, total: usize, per_page: usize) -> Self {
        Self {
            items,
            page,
            pages: total.div_ceil(per_page.max(1)),
            total,
        }
    }
}
