//! Common types used throughout navigation-kit

use std::collections::HashMap;

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// Arbitrary renderer-facing attributes attached to a breadcrumb node
pub type Attributes = HashMap<String, JsonValue>;
