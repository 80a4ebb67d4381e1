//! YAML parser for navigation configuration
//!
//! Parses and validates navigation YAML files.

use crate::config::NavigationConfig;
use crate::error::{Error, Result, ResultExt};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load a navigation configuration from a YAML file
///
/// # Examples
///
/// ```ignore
/// let config = load_config("./navigation.yaml")?;
/// let paginator = config.pagination.paginator(total, requested_page)?;
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<NavigationConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read navigation config '{}'", path.display()))?;

    debug!("Loading navigation config from {}", path.display());
    load_config_from_str(&content)
}

/// Load a navigation configuration from a YAML string
pub fn load_config_from_str(yaml: &str) -> Result<NavigationConfig> {
    let config: NavigationConfig = serde_yaml::from_str(yaml)?;

    validate_config(&config)?;
    debug!(
        items_per_page = config.pagination.items_per_page,
        trails = config.trails.len(),
        "Navigation config loaded"
    );
    Ok(config)
}

/// Validate a navigation configuration
fn validate_config(config: &NavigationConfig) -> Result<()> {
    if config.pagination.items_per_page < 1 {
        return Err(Error::config(format!(
            "pagination.items_per_page must be greater or equal to 1, got {}",
            config.pagination.items_per_page
        )));
    }

    for (name, trail) in &config.trails {
        if name.is_empty() {
            return Err(Error::config("Trail name cannot be empty"));
        }

        if let Some(position) = trail.iter().position(|node| node.title().is_empty()) {
            return Err(Error::config(format!(
                "Trail '{name}' node {position} has an empty title"
            )));
        }
    }

    Ok(())
}
