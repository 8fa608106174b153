//! Error types for the catalog crate.
//!
//! Loading is strict about structure (missing columns, unknown semester
//! values, duplicate codes) and lenient about credit hours, which fall back
//! to the default instead of failing.

use thiserror::Error;

/// Errors that can occur while loading or building a course catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Line in the catalog file couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// A field had a value outside its allowed set
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// The header row lacks a column the loader cannot do without
    #[error("Missing required column '{column}' in {file}")]
    MissingColumn { file: String, column: String },

    /// Two catalog rows share the same course code
    #[error("Duplicate course code: {code}")]
    DuplicateCode { code: String },

    /// JSON catalog could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
