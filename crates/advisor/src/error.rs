//! Error types for the advisor crate.
//!
//! The engine degrades gracefully on catalog problems, so the only hard
//! failure is a request that breaks the caller contract. An empty
//! recommendation is a normal result, not an error.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AdvisorError {
    /// cgpa outside [0, 4], or a semester other than FALL/SPRING
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },
}

impl AdvisorError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        AdvisorError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
