//! Custom error types for cardlist
//!
//! User-friendly error messages for all failure scenarios.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the cardlist application
#[derive(Error, Debug)]
pub enum CardListError {
    /// No dataset given on the command line or in the config
    #[error("No product data to show.\n\n  → Pass a JSON file with '--data products.json' (or '--data -' for stdin).\n  → Or set a default with 'cardlist config set data-file <PATH>'.")]
    NoDataSource,

    /// Data file does not exist
    #[error("Product data file not found: {}\n\n  → Check the path passed to '--data' or the 'data-file' config key.", .0.display())]
    DataFileNotFound(PathBuf),

    /// Data file parsed but is not a list of products
    #[error("Product data is invalid: {0}\n\n  → Expected a JSON array of objects, each with an \"id\" field.")]
    InvalidData(String),

    /// Requested page does not exist
    #[error("Page {page} does not exist.\n\n  → There are {pages} page(s) for this search.")]
    PageOutOfRange { page: usize, pages: usize },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML serialization/deserialization error
    #[error("Configuration file is invalid: {0}")]
    Toml(String),

    /// Terminal/TUI error
    #[error("Terminal error: {0}\n\n  → Try resizing your terminal or restarting it.")]
    Terminal(String),

    /// Invalid input from user
    #[error("{0}")]
    InvalidInput(String),
}

impl From<toml::de::Error> for CardListError {
    fn from(err: toml::de::Error) -> Self {
        CardListError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for CardListError {
    fn from(err: toml::ser::Error) -> Self {
        CardListError::Toml(err.to_string())
    }
}

/// Result type alias using CardListError
pub type Result<T> = std::result::Result<T, CardListError>;
