//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for ambiclass operations
#[derive(Debug, Error)]
pub enum Error {
    /// Gold standard header is missing a required column
    #[error("Gold standard file {} must contain 'Word' and 'Truth' columns separated by tabs", .path.display())]
    MissingGoldColumns { path: PathBuf },

    /// Gold label that does not normalize to common or proper
    #[error("Unrecognized label '{label}', expected 'Common' or 'Proper'")]
    UnrecognizedLabel { label: String },

    /// The same gold word carries two different normalized labels
    #[error("Conflicting labels detected for word '{word}': '{first}' vs '{second}'")]
    ConflictingLabels {
        word: String,
        first: String,
        second: String,
    },

    /// A word appears in both prediction files
    #[error("Found {count} words present in both prediction files; examples: {preview}")]
    OverlappingPredictions { count: usize, preview: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// File read errors with path context
    #[error("Failed to read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File write errors with path context
    #[error("Failed to write {}: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create a missing-columns error for a gold standard file
    pub fn missing_gold_columns(path: impl Into<PathBuf>) -> Self {
        Self::MissingGoldColumns { path: path.into() }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
