//! Page index calculator

use crate::error::{Error, Result};
use serde::Serialize;
use std::ops::{Range, RangeInclusive};
use tracing::{debug, trace};

/// Index of the first page when none is given
pub const FIRST_PAGE_DEFAULT: i64 = 1;

/// Computes the page indexes (first, previous, next, last) of a paginated
/// collection and the offset of the current page's first item.
///
/// Everything but the current page is fixed at construction. The current page
/// is always kept inside `[first_page, last_page]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paginator {
    /// Total number of items to paginate
    item_count: i64,
    /// Number of items shown per page
    items_per_page: i64,
    /// Total number of pages, at least 1
    page_count: i64,
    first_page: i64,
    last_page: i64,
    current_page: i64,
    previous_page: Option<i64>,
    next_page: Option<i64>,
}

impl Paginator {
    /// Create a paginator whose first page is [`FIRST_PAGE_DEFAULT`]
    pub fn create(item_count: i64, items_per_page: i64, current_page: i64) -> Result<Self> {
        Self::create_with_first_page(item_count, items_per_page, current_page, FIRST_PAGE_DEFAULT)
    }

    /// Create a paginator with an explicit first page index
    ///
    /// Out-of-range `current_page` values are clamped, never rejected. A
    /// `first_page` so close to `i64::MAX` that the last page index would
    /// overflow is rejected with [`Error::InvalidFirstPage`].
    pub fn create_with_first_page(
        item_count: i64,
        items_per_page: i64,
        current_page: i64,
        first_page: i64,
    ) -> Result<Self> {
        if item_count < 0 {
            return Err(Error::InvalidItemCount { item_count });
        }

        if items_per_page < 1 {
            return Err(Error::InvalidItemsPerPage { items_per_page });
        }

        let page_count = page_count(item_count, items_per_page);
        let last_page = first_page
            .checked_add(page_count - 1)
            .ok_or(Error::InvalidFirstPage {
                first_page,
                page_count,
            })?;

        trace!(
            item_count,
            items_per_page,
            page_count,
            first_page,
            last_page,
            "Creating paginator"
        );

        let mut paginator = Self {
            item_count,
            items_per_page,
            page_count,
            first_page,
            last_page,
            current_page: first_page,
            previous_page: None,
            next_page: None,
        };
        paginator.set_current_page(current_page);

        Ok(paginator)
    }

    /// Move to another page, clamping it into `[first_page, last_page]`
    pub fn set_current_page(&mut self, page: i64) -> &mut Self {
        let clamped = page.clamp(self.first_page, self.last_page);
        if clamped != page {
            debug!(
                requested = page,
                current_page = clamped,
                "Requested page out of range, clamped"
            );
        }

        self.current_page = clamped;
        self.previous_page = (clamped > self.first_page).then(|| clamped - 1);
        self.next_page = (clamped < self.last_page).then(|| clamped + 1);
        self
    }

    /// Total number of items to paginate
    pub fn item_count(&self) -> i64 {
        self.item_count
    }

    /// Number of items shown per page
    pub fn items_per_page(&self) -> i64 {
        self.items_per_page
    }

    /// Total number of pages, at least 1
    pub fn page_count(&self) -> i64 {
        self.page_count
    }

    /// Index of the current page
    pub fn current_page(&self) -> i64 {
        self.current_page
    }

    /// Index of the first page
    pub fn first_page(&self) -> i64 {
        self.first_page
    }

    /// Index of the last page
    pub fn last_page(&self) -> i64 {
        self.last_page
    }

    /// Index of the previous page
    ///
    /// Fails with [`Error::NoPreviousPage`] on the first page.
    pub fn previous_page(&self) -> Result<i64> {
        self.previous_page.ok_or(Error::NoPreviousPage)
    }

    /// Check if a previous page exists
    pub fn has_previous_page(&self) -> bool {
        self.previous_page.is_some()
    }

    /// Index of the next page
    ///
    /// Fails with [`Error::NoNextPage`] on the last page.
    pub fn next_page(&self) -> Result<i64> {
        self.next_page.ok_or(Error::NoNextPage)
    }

    /// Check if a next page exists
    pub fn has_next_page(&self) -> bool {
        self.next_page.is_some()
    }

    /// Zero-based index of the first item on the current page (an SQL OFFSET)
    pub fn item_index(&self) -> i64 {
        (self.current_page - self.first_page) * self.items_per_page
    }

    /// Item positions shown on the current page, clipped to the item count
    ///
    /// Suitable for slicing the full result set.
    pub fn item_range(&self) -> Range<usize> {
        let start = self.item_index().min(self.item_count);
        let end = start
            .saturating_add(self.items_per_page)
            .min(self.item_count);
        start as usize..end as usize
    }

    /// Every page index from first to last
    pub fn pages(&self) -> RangeInclusive<i64> {
        self.first_page..=self.last_page
    }
}

/// `max(1, ceil(item_count / items_per_page))` without overflowing near `i64::MAX`
fn page_count(item_count: i64, items_per_page: i64) -> i64 {
    let full = item_count / items_per_page;
    let partial = i64::from(item_count % items_per_page != 0);
    (full + partial).max(1)
}
