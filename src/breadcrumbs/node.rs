//! Breadcrumb trail node

use crate::error::{Error, Result};
use crate::types::{Attributes, JsonValue};
use serde::{Deserialize, Serialize};

/// A single step of a breadcrumb trail
///
/// Nodes are immutable once built. The link is optional and an absent link is
/// distinct from an empty one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreadcrumbsNode {
    title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    link: Option<String>,

    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    attributes: Attributes,
}

impl BreadcrumbsNode {
    /// Create a node with a title only
    pub fn create(title: impl Into<String>) -> Self {
        Self::new(title, None, Attributes::new())
    }

    /// Create a node with a title and a link
    pub fn with_link(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self::new(title, Some(link.into()), Attributes::new())
    }

    /// Create a node from all of its parts
    pub fn new(title: impl Into<String>, link: Option<String>, attributes: Attributes) -> Self {
        Self {
            title: title.into(),
            link,
            attributes,
        }
    }

    /// Title shown for this step
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Check if a link is defined
    pub fn has_link(&self) -> bool {
        self.link.is_some()
    }

    /// Get the link
    ///
    /// Fails with [`Error::NoLink`] when the node was built without one.
    pub fn link(&self) -> Result<&str> {
        self.link.as_deref().ok_or(Error::NoLink)
    }

    /// Check if an attribute is defined
    pub fn has_attribute(&self, attribute: &str) -> bool {
        self.attributes.contains_key(attribute)
    }

    /// Get an attribute value
    ///
    /// Fails with [`Error::AttributeNotDefined`] when the key is absent.
    pub fn attribute(&self, attribute: &str) -> Result<&JsonValue> {
        self.attributes
            .get(attribute)
            .ok_or_else(|| Error::attribute_not_defined(attribute))
    }

    /// All attributes of this node
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}
