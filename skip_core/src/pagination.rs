//! Page slicing for result lists

use serde::{Deserialize, Serialize};

/// Which page to show, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl PageRequest {
    /// Zero values are clamped to 1.
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1, per_page: 5 }
    }
}

/// One page of items plus the totals needed to render page controls.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        (self.page as usize) < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

/// Slice `items` into the requested page. A page past the end is empty.
pub fn paginate<T>(items: &[T], request: PageRequest) -> Page<&T> {
    let request = PageRequest::new(request.page, request.per_page);
    let per_page = request.per_page as usize;
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page);
    let start = (request.page as usize - 1).saturating_mul(per_page);

    let page_items = items.iter().skip(start).take(per_page).collect();

    Page {
        items: page_items,
        page: request.page,
        per_page: request.per_page,
        total_items,
        total_pages,
    }
}
