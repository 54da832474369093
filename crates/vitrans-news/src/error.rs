//! Error types for news-article operations

use thiserror::Error;

/// Errors that can occur while managing news articles
#[derive(Error, Debug)]
pub enum NewsError {
    /// Required article fields were empty after trimming.
    /// Recovered locally: shown to the user, nothing is mutated.
    #[error("Required fields are empty: {}", fields.join(", "))]
    Validation {
        /// Names of the offending fields
        fields: Vec<String>,
    },

    /// The storage collaborator rejected a write
    #[error("Storage error: {0}")]
    Storage(#[from] vitrans_common::VitransError),

    /// The article set could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for news operations
pub type NewsResult<T> = Result<T, NewsError>;
