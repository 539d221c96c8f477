//! Pagination of query results.

use crate::error::{QueryError, Result};

/// A requested page: 1-based page number and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    number: usize,
    size: usize,
}

impl PageRequest {
    /// Creates a page request. Page `0` is treated as page `1`.
    pub fn new(number: usize, size: usize) -> Result<Self> {
        if size == 0 {
            return Err(QueryError::InvalidPageSize);
        }
        Ok(PageRequest {
            number: number.max(1),
            size,
        })
    }

    pub fn first(size: usize) -> Result<Self> {
        PageRequest::new(1, size)
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of matches skipped before this page.
    pub fn offset(&self) -> usize {
        (self.number - 1).saturating_mul(self.size)
    }
}

/// One page of results plus the totals a screen needs for its pager.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub items: Vec<&'a T>,
    /// Matches across all pages.
    pub total: usize,
    pub number: usize,
    pub size: usize,
}

impl<'a, T> Page<'a, T> {
    pub(crate) fn slice(matches: Vec<&'a T>, request: PageRequest) -> Self {
        let total = matches.len();
        let items = matches
            .into_iter()
            .skip(request.offset())
            .take(request.size())
            .collect();
        Page {
            items,
            total,
            number: request.number(),
            size: request.size(),
        }
    }

    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.size)
    }

    pub fn has_next(&self) -> bool {
        self.number < self.page_count()
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
