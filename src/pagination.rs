use serde::{Deserialize, Serialize};

use crate::constants::pagination::{ITEMS_PER_PAGE, MAX_ITEMS_PER_PAGE};

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub page_count: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    total: usize,
    per_page: usize,
}

impl Pagination {
    pub fn new(total: usize, per_page: usize) -> Self {
        Self {
            total,
            per_page: per_page.clamp(1, MAX_ITEMS_PER_PAGE),
        }
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn page_count(&self) -> usize {
        if self.total == 0 {
            1
        } else {
            self.total.div_ceil(self.per_page)
        }
    }

    /// Clamp a 1-based page number into range.
    pub fn clamp_page(&self, page: usize) -> usize {
        page.clamp(1, self.page_count())
    }

    pub fn offset(&self, page: usize) -> usize {
        (self.clamp_page(page) - 1) * self.per_page
    }
}

/// Apply pagination to an already-fetched list.
pub fn paginate<T>(items: Vec<T>, params: &PageParams) -> Page<T> {
    let pagination = Pagination::new(items.len(), params.per_page.unwrap_or(ITEMS_PER_PAGE));
    let page = pagination.clamp_page(params.page.unwrap_or(1));
    let offset = pagination.offset(page);
    let total = items.len();

    let items: Vec<T> = items
        .into_iter()
        .skip(offset)
        .take(pagination.per_page())
        .collect();

    Page {
        items,
        page,
        per_page: pagination.per_page(),
        total,
        page_count: pagination.page_count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_page_clamped_to_max() {
        let p = Pagination::new(500, 200);
        assert_eq!(p.per_page(), MAX_ITEMS_PER_PAGE);
    }

    #[test]
    fn test_per_page_clamped_to_one() {
        let p = Pagination::new(10, 0);
        assert_eq!(p.per_page(), 1);
    }

    #[test]
    fn test_page_count() {
        assert_eq!(Pagination::new(0, 10).page_count(), 1);
        assert_eq!(Pagination::new(10, 10).page_count(), 1);
        assert_eq!(Pagination::new(11, 10).page_count(), 2);
    }

    #[test]
    fn test_clamp_page() {
        let p = Pagination::new(25, 10);
        assert_eq!(p.clamp_page(0), 1);
        assert_eq!(p.clamp_page(2), 2);
        assert_eq!(p.clamp_page(99), 3);
    }

    #[test]
    fn test_paginate_slices() {
        let items: Vec<i32> = (1..=25).collect();
        let page = paginate(
            items,
            &PageParams {
                page: Some(3),
                per_page: Some(10),
            },
        );
        assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
        assert_eq!(page.total, 25);
        assert_eq!(page.page_count, 3);
    }

    #[test]
    fn test_paginate_defaults() {
        let items: Vec<i32> = (1..=25).collect();
        let page = paginate(
            items,
            &PageParams {
                page: None,
                per_page: None,
            },
        );
        assert_eq!(page.items.len(), ITEMS_PER_PAGE);
        assert_eq!(page.page, 1);
    }
}
