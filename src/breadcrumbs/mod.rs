//! Breadcrumbs module
//!
//! An ordered, append-only breadcrumb trail for a view layer to render.
//!
//! # Overview
//!
//! - `BreadcrumbsNode` - Immutable step: title, optional link, attributes
//! - `Breadcrumbs` - Ordered collection of nodes in insertion order

mod node;
mod trail;

pub use node::BreadcrumbsNode;
pub use trail::Breadcrumbs;
