//! YAML Loader module
//!
//! Parse navigation configuration from YAML strings or files.

mod parser;

pub use parser::{load_config, load_config_from_str};

#[cfg(test)]
mod tests;
