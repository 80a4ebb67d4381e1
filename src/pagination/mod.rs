//! Pagination module
//!
//! # Overview
//!
//! `Paginator` turns a total item count, a page size and a requested page
//! into the page indexes a pager widget needs (first, previous, current,
//! next, last) and the offset of the current page's first item.

mod paginator;

pub use paginator::{Paginator, FIRST_PAGE_DEFAULT};
