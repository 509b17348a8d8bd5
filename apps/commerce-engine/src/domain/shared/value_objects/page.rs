//! Pagination value objects for paged repository reads.

use serde::{Deserialize, Serialize};

/// Pagination parameters for a paged query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct PageRequest {
    /// Zero-based page index.
    pub page: u64,
    /// Requested page size.
    pub size: u64,
}

impl PageRequest {
    /// Create a new page request.
    #[must_use]
    pub const fn new(page: u64, size: u64) -> Self {
        Self { page, size }
    }

    /// Offset of the first element of this page.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.page * self.size
    }

    /// Return a copy with the size clamped to `max_size`, substituting
    /// `default_size` for a zero size.
    #[must_use]
    pub const fn clamped(self, default_size: u64, max_size: u64) -> Self {
        let size = if self.size == 0 {
            default_size
        } else if self.size > max_size {
            max_size
        } else {
            self.size
        };
        Self {
            page: self.page,
            size,
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 0, size: 20 }
    }
}

/// A page of results with pagination metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    /// Elements of this page.
    pub content: Vec<T>,
    /// Zero-based page index.
    pub page: u64,
    /// Page size used for the query.
    pub size: u64,
    /// Total number of elements across all pages.
    pub total_elements: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl<T> Page<T> {
    /// Build a page from its content and the originating request.
    #[must_use]
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        let total_pages = if request.size == 0 {
            0
        } else {
            total_elements.div_ceil(request.size)
        };
        Self {
            content,
            page: request.page,
            size: request.size,
            total_elements,
            total_pages,
        }
    }

    /// Map the page content, preserving the metadata.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }
}
