//! Configuration types for navigation defaults
//!
//! A `NavigationConfig` is usually loaded once from YAML (see [`crate::loader`])
//! and shared by the view layer: it carries the site-wide page size and the
//! named breadcrumb trails every page of a section starts from.

use crate::breadcrumbs::Breadcrumbs;
use crate::error::Result;
use crate::pagination::{Paginator, FIRST_PAGE_DEFAULT};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete navigation configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Pagination defaults
    #[serde(default)]
    pub pagination: PaginationDefaults,

    /// Named breadcrumb trails (e.g. "admin" → Home › Admin)
    #[serde(default)]
    pub trails: HashMap<String, Breadcrumbs>,
}

impl NavigationConfig {
    /// Copy of a named trail, ready to be extended for the current page
    pub fn trail(&self, name: &str) -> Option<Breadcrumbs> {
        self.trails.get(name).cloned()
    }
}

// ============================================================================
// Pagination
// ============================================================================

/// Pagination settings applied to every paginator built from the config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationDefaults {
    /// Number of items shown per page
    #[serde(default = "default_items_per_page")]
    pub items_per_page: i64,

    /// Index of the first page
    #[serde(default = "default_first_page")]
    pub first_page: i64,
}

impl Default for PaginationDefaults {
    fn default() -> Self {
        Self {
            items_per_page: default_items_per_page(),
            first_page: default_first_page(),
        }
    }
}

impl PaginationDefaults {
    /// Build a paginator over `item_count` items using these defaults
    pub fn paginator(&self, item_count: i64, current_page: i64) -> Result<Paginator> {
        Paginator::create_with_first_page(
            item_count,
            self.items_per_page,
            current_page,
            self.first_page,
        )
    }
}

fn default_items_per_page() -> i64 {
    20
}

fn default_first_page() -> i64 {
    FIRST_PAGE_DEFAULT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breadcrumbs::BreadcrumbsNode;

    #[test]
    fn test_pagination_defaults() {
        let defaults = PaginationDefaults::default();
        assert_eq!(defaults.items_per_page, 20);
        assert_eq!(defaults.first_page, 1);
    }

    #[test]
    fn test_paginator_from_defaults() {
        let defaults = PaginationDefaults {
            items_per_page: 8,
            first_page: 0,
        };
        let paginator = defaults.paginator(95, 4).unwrap();
        assert_eq!(paginator.page_count(), 12);
        assert_eq!(paginator.first_page(), 0);
        assert_eq!(paginator.item_index(), 32);
    }

    #[test]
    fn test_paginator_from_defaults_propagates_validation() {
        let err = PaginationDefaults::default().paginator(-5, 1).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_trail_is_a_copy() {
        let mut config = NavigationConfig::default();
        let trail: Breadcrumbs = std::iter::once(BreadcrumbsNode::with_link("Home", "/")).collect();
        config.trails.insert("root".to_string(), trail);

        let mut copy = config.trail("root").unwrap();
        copy.add_node(BreadcrumbsNode::create("Page"));

        assert_eq!(copy.count(), 2);
        assert_eq!(config.trails["root"].count(), 1);
        assert!(config.trail("missing").is_none());
    }
}
