//! Breadcrumb trail collection

use super::node::BreadcrumbsNode;
use crate::types::Attributes;
use serde::{Deserialize, Serialize};

/// Ordered, append-only list of breadcrumb nodes
///
/// Serializes as a plain list of nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Breadcrumbs {
    nodes: Vec<BreadcrumbsNode>,
}

impl Breadcrumbs {
    /// Create an empty trail
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a node and append it
    pub fn add(
        &mut self,
        title: impl Into<String>,
        link: Option<String>,
        attributes: Attributes,
    ) -> &mut Self {
        self.add_node(BreadcrumbsNode::new(title, link, attributes))
    }

    /// Append an existing node
    pub fn add_node(&mut self, node: BreadcrumbsNode) -> &mut Self {
        self.nodes.push(node);
        self
    }

    /// Number of nodes in the trail
    pub fn count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of nodes in the trail, same as [`Breadcrumbs::count`]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the trail has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over nodes in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, BreadcrumbsNode> {
        self.nodes.iter()
    }
}

impl<'a> IntoIterator for &'a Breadcrumbs {
    type Item = &'a BreadcrumbsNode;
    type IntoIter = std::slice::Iter<'a, BreadcrumbsNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl IntoIterator for Breadcrumbs {
    type Item = BreadcrumbsNode;
    type IntoIter = std::vec::IntoIter<BreadcrumbsNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl FromIterator<BreadcrumbsNode> for Breadcrumbs {
    fn from_iter<I: IntoIterator<Item = BreadcrumbsNode>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}
