//! Dataset module
//!
//! Loads the bundled composition table and projects it into food items.

pub mod dataset;
pub mod loader;

use std::path::PathBuf;

use thiserror::Error;

pub use dataset::Dataset;
pub use loader::{load_metadata, load_rows, RawFoodRow};

/// Errors raised while loading the dataset. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Metadata lists tag '{0}' more than once")]
    DuplicateTag(String),

    #[error("Row {row}: expected {expected} columns, found {found}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Row {row}: missing {field}")]
    MissingField { row: usize, field: &'static str },

    #[error("Row {row}: invalid category '{value}'")]
    InvalidCategory { row: usize, value: String },

    #[error("Row {row}: invalid food id '{value}'")]
    InvalidFoodId { row: usize, value: String },

    #[error("Food id '{0}' appears more than once")]
    DuplicateFoodId(String),
}

/// Result type for dataset loading
pub type DataResult<T> = Result<T, DataError>;
