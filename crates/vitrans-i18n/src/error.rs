//! Error types for internationalization operations

use thiserror::Error;

/// Errors that can occur during internationalization operations
#[derive(Error, Debug)]
pub enum I18nError {
    /// Failed to fetch a dictionary document from its source
    #[error("Failed to fetch dictionary from {location}: {reason}")]
    FetchFailed {
        /// File path or URL of the document
        location: String,
        /// Human-readable failure description
        reason: String,
    },

    /// The dictionary document was fetched but is not valid JSON
    #[error("Failed to parse dictionary from {location}: {source}")]
    ParseFailed {
        /// File path or URL of the document
        location: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Both the requested and the default language failed to load.
    /// This is the only fatal translation failure; the UI stays in the
    /// last-known-good language when it is reported.
    #[error("No dictionary available: '{requested}' and default '{fallback}' both failed to load")]
    DictionaryUnavailable {
        /// Language code the caller asked for
        requested: String,
        /// Default language code that also failed
        fallback: String,
    },

    /// Invalid base URL for an HTTP dictionary source
    #[error("Invalid dictionary URL: {0}")]
    InvalidUrl(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;
