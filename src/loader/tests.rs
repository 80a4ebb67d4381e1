//! Tests for YAML loader module

use super::*;
use crate::error::{Error, ErrorKind};
use serde_json::json;
use std::io::Write;

// ============================================================================
// Basic Loading Tests
// ============================================================================

#[test]
fn test_load_empty_config_uses_defaults() {
    let config = load_config_from_str("{}").unwrap();
    assert_eq!(config.pagination.items_per_page, 20);
    assert_eq!(config.pagination.first_page, 1);
    assert!(config.trails.is_empty());
}

#[test]
fn test_load_pagination() {
    let yaml = r#"
pagination:
  items_per_page: 8
  first_page: 0
"#;

    let config = load_config_from_str(yaml).unwrap();
    assert_eq!(config.pagination.items_per_page, 8);
    assert_eq!(config.pagination.first_page, 0);
}

#[test]
fn test_load_trails() {
    let yaml = r#"
trails:
  admin:
    - title: Home
      link: /
    - title: Admin
      link: /admin
      attributes:
        icon: gear
        badge: 2
"#;

    let config = load_config_from_str(yaml).unwrap();
    let trail = config.trail("admin").unwrap();
    assert_eq!(trail.count(), 2);

    let nodes: Vec<_> = trail.iter().collect();
    assert_eq!(nodes[0].title(), "Home");
    assert_eq!(nodes[0].link().unwrap(), "/");
    assert_eq!(nodes[1].attribute("icon").unwrap(), &json!("gear"));
    assert_eq!(nodes[1].attribute("badge").unwrap(), &json!(2));
}

#[test]
fn test_load_trail_node_without_link() {
    let yaml = r#"
trails:
  docs:
    - title: Docs
"#;

    let config = load_config_from_str(yaml).unwrap();
    let trail = config.trail("docs").unwrap();
    let node = trail.iter().next().unwrap();
    assert!(!node.has_link());
    assert!(node.attributes().is_empty());
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn test_invalid_items_per_page() {
    let yaml = r#"
pagination:
  items_per_page: 0
"#;

    let err = load_config_from_str(yaml).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
    assert!(err.to_string().contains("items_per_page"));
}

#[test]
fn test_empty_trail_title() {
    let yaml = r#"
trails:
  admin:
    - title: Home
    - title: ""
"#;

    let err = load_config_from_str(yaml).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
    assert!(err.to_string().contains("node 1"));
}

#[test]
fn test_empty_trail_name() {
    let yaml = r#"
trails:
  "":
    - title: Home
"#;

    let err = load_config_from_str(yaml).unwrap_err();
    assert!(err.to_string().contains("Trail name cannot be empty"));
}

#[test]
fn test_malformed_yaml() {
    let err = load_config_from_str("pagination: [unclosed").unwrap_err();
    assert!(matches!(err, Error::YamlParse(_)));
}

#[test]
fn test_node_without_title() {
    let yaml = r#"
trails:
  admin:
    - link: /admin
"#;

    assert!(matches!(
        load_config_from_str(yaml).unwrap_err(),
        Error::YamlParse(_)
    ));
}

// ============================================================================
// File Loading Tests
// ============================================================================

#[test]
fn test_load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "pagination:\n  items_per_page: 50").unwrap();

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.pagination.items_per_page, 50);
}

#[test]
fn test_load_config_missing_file() {
    let err = load_config("/nonexistent/navigation.yaml").unwrap_err();
    assert!(err
        .to_string()
        .contains("Failed to read navigation config '/nonexistent/navigation.yaml'"));
}
