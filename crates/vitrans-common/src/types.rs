//! Common type definitions and newtype wrappers for domain modeling.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A news article ID.
///
/// Serialized as a bare integer so article sets persisted by earlier
/// versions (which used millisecond timestamps as ids) still load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(pub i64);

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Common result type for the application.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Application-wide error type.
#[derive(thiserror::Error, Debug)]
pub enum VitransError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Persistent storage error.
    #[error("Storage error: {0}")]
    Storage(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_id_display() {
        let id = ArticleId(1_728_950_400_000);
        assert_eq!(id.to_string(), "1728950400000");
    }

    #[test]
    fn test_article_id_serializes_as_bare_integer() {
        let id = ArticleId(3);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "3");

        let back: ArticleId = serde_json::from_str("3").unwrap();
        assert_eq!(back, id);
    }
}
