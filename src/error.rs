//! Error types for navigation-kit
//!
//! This module defines the error hierarchy for the entire crate.
//! All fallible public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for navigation-kit
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Validation Errors
    // ============================================================================
    #[error("Provided item count must be greater or equal to 0, got {item_count}.")]
    InvalidItemCount { item_count: i64 },

    #[error("Provided items per page must be greater or equal to 1, got {items_per_page}.")]
    InvalidItemsPerPage { items_per_page: i64 },

    #[error("Provided first page {first_page} leaves no room for {page_count} pages.")]
    InvalidFirstPage { first_page: i64, page_count: i64 },

    // ============================================================================
    // State Errors
    // ============================================================================
    #[error("No link defined.")]
    NoLink,

    #[error("Attribute '{attribute}' not defined.")]
    AttributeNotDefined { attribute: String },

    #[error("No previous page available.")]
    NoPreviousPage,

    #[error("No next page available.")]
    NoNextPage,

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{message}: {source}")]
    Context {
        message: String,
        #[source]
        source: Box<Error>,
    },
}

/// Broad classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Construction inputs out of range; the object was never created
    Validation,
    /// The requested value does not exist in the current state
    State,
    /// Configuration could not be read, parsed or validated
    Config,
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an undefined attribute error
    pub fn attribute_not_defined(attribute: impl Into<String>) -> Self {
        Self::AttributeNotDefined {
            attribute: attribute.into(),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidItemCount { .. }
            | Error::InvalidItemsPerPage { .. }
            | Error::InvalidFirstPage { .. } => ErrorKind::Validation,
            Error::NoLink
            | Error::AttributeNotDefined { .. }
            | Error::NoPreviousPage
            | Error::NoNextPage => ErrorKind::State,
            Error::Config { .. } | Error::YamlParse(_) | Error::Io(_) => ErrorKind::Config,
            Error::Context { source, .. } => source.kind(),
        }
    }

    /// Check if this error was raised while validating construction inputs
    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }

    /// Check if this error signals a value absent from the current state
    pub fn is_state(&self) -> bool {
        self.kind() == ErrorKind::State
    }
}

/// Result type alias for navigation-kit
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
///
/// The wrapped error keeps the [`ErrorKind`] of the error it wraps.
pub trait ResultExt<T> {
    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| Error::Context {
            message: f(),
            source: Box::new(e.into()),
        })
    }
}
