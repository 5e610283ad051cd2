use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur around recipe extraction.
///
/// Field extraction itself never fails; these cover loading input,
/// building a site extractor from its table, and writing results.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Failed to read an input file or write an output file
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input directory does not exist
    #[error("Directory not found: {0}")]
    MissingDirectory(PathBuf),

    /// No site table is registered under this key
    #[error("No extractor registered for site '{0}'")]
    UnknownSite(String),

    /// A site table carries a pattern that does not compile
    #[error("Invalid pattern in site table: {0}")]
    Pattern(#[from] regex::Error),

    /// A site table carries a CSS selector that does not parse
    #[error("Invalid selector '{selector}' in site table: {message}")]
    Selector { selector: String, message: String },

    /// Failed to serialize an extracted record
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl ExtractError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExtractError::Io {
            path: path.into(),
            source,
        }
    }
}
