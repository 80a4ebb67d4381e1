//! # navigation-kit
//!
//! Breadcrumb trails and pagination indexes for web view layers.
//!
//! Both components are plain values: no I/O, no rendering. A template or
//! handler builds them per request and hands them to whatever renders the
//! page.
//!
//! ## Quick Start
//!
//! ```rust
//! use navigation_kit::{Attributes, Breadcrumbs, Paginator, Result};
//!
//! fn main() -> Result<()> {
//!     let mut trail = Breadcrumbs::new();
//!     trail
//!         .add("Home", Some("/".to_string()), Attributes::new())
//!         .add("Articles", None, Attributes::new());
//!     assert_eq!(trail.count(), 2);
//!
//!     let paginator = Paginator::create(95, 8, 5)?;
//!     assert_eq!(paginator.last_page(), 12);
//!     assert_eq!(paginator.previous_page()?, 4);
//!     assert_eq!(paginator.next_page()?, 6);
//!     assert_eq!(paginator.item_index(), 32);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────┐   ┌──────────────────────────┐
//! │       Breadcrumbs        │   │        Paginator         │
//! │  add / add_node / iter   │   │  create / set_current_   │
//! │  BreadcrumbsNode (title, │   │  page / previous / next  │
//! │  link?, attributes)      │   │  item_index              │
//! └────────────┬─────────────┘   └────────────┬─────────────┘
//!              └──────────┬───────────────────┘
//!               NavigationConfig (YAML loader)
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// Breadcrumb trails
pub mod breadcrumbs;

/// Page index computation
pub mod pagination;

/// Navigation defaults and named trails
pub mod config;

/// YAML loader for navigation configuration
pub mod loader;

// ============================================================================
// Re-exports
// ============================================================================

pub use breadcrumbs::{Breadcrumbs, BreadcrumbsNode};
pub use config::{NavigationConfig, PaginationDefaults};
pub use error::{Error, ErrorKind, Result};
pub use loader::{load_config, load_config_from_str};
pub use pagination::{Paginator, FIRST_PAGE_DEFAULT};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
