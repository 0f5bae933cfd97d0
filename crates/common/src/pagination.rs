//! Pagination primitives shared by the service and HTTP layers
//!
//! Pages are zero-based. `PageRequest::normalize` clamps the page size so a
//! caller cannot ask the database for an unbounded slice.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const MAX_PAGE_SIZE: u64 = 100;

/// Zero-based page index plus page size
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
}

impl PageRequest {
    pub fn of(page: u64, size: u64) -> Self {
        Self { page, size }
    }

    /// Clamp size into `1..=MAX_PAGE_SIZE` and the page so its offset fits an `i64`
    pub fn normalize(self) -> Self {
        let size = self.size.clamp(1, MAX_PAGE_SIZE);
        let last_page = i64::MAX as u64 / size;
        Self { page: self.page.min(last_page), size }
    }

    /// Offset of the first row of this page
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self { Self { page: 0, size: DEFAULT_PAGE_SIZE } }
}

/// A bounded slice of results plus total-count metadata
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        let total_pages = if request.size == 0 { 0 } else { total_elements.div_ceil(request.size) };
        Self { content, page: request.page, size: request.size, total_elements, total_pages }
    }

    /// Slice an already filtered and ordered collection.
    pub fn from_slice(items: Vec<T>, request: PageRequest) -> Self {
        let total = items.len() as u64;
        let content = items
            .into_iter()
            .skip(request.offset() as usize)
            .take(request.size as usize)
            .collect();
        Self::new(content, request, total)
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }

    pub fn request(&self) -> PageRequest {
        PageRequest { page: self.page, size: self.size }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_bounds_huge_page_index() {
        let r = PageRequest::of(u64::MAX / 10, 20).normalize();
        assert_eq!(r.size, 20);
        assert!(r.page.checked_mul(r.size).is_some());
        assert!(r.offset() <= i64::MAX as u64);
        assert_eq!(PageRequest::of(7, 20).normalize().page, 7);
    }

    #[test]
    fn normalize_clamps_zero_size() {
        let r = PageRequest::of(3, 0).normalize();
        assert_eq!(r.page, 3);
        assert_eq!(r.size, 1);
    }

    #[test]
    fn normalize_clamps_upper_bound() {
        let r = PageRequest::of(0, 1000).normalize();
        assert_eq!(r.size, MAX_PAGE_SIZE);
    }

    #[test]
    fn default_values_are_sane() {
        let d = PageRequest::default();
        assert_eq!(d.page, 0);
        assert_eq!(d.size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn from_slice_takes_requested_window() {
        let page = Page::from_slice((1..=7).collect::<Vec<_>>(), PageRequest::of(1, 3));
        assert_eq!(page.content, vec![4, 5, 6]);
        assert_eq!(page.total_elements, 7);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn page_past_the_end_is_empty_but_keeps_total() {
        let page = Page::from_slice(vec!['a', 'b'], PageRequest::of(5, 10));
        assert!(page.content.is_empty());
        assert_eq!(page.total_elements, 2);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn map_preserves_metadata() {
        let page = Page::new(vec![1, 2], PageRequest::of(2, 2), 9).map(|n| n * 10);
        assert_eq!(page.content, vec![10, 20]);
        assert_eq!(page.total_pages, 5);
        assert_eq!(page.request(), PageRequest::of(2, 2));
    }
}
