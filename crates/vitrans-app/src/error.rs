//! Application-level error types.

use thiserror::Error;
use vitrans_common::VitransError;
use vitrans_i18n::I18nError;
use vitrans_news::NewsError;

/// Top-level error for the application binary.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading or validation failed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Translation layer failure
    #[error("Translation error: {0}")]
    I18n(#[from] I18nError),

    /// News layer failure
    #[error("News error: {0}")]
    News(#[from] NewsError),

    /// Shared infrastructure failure
    #[error("Storage error: {0}")]
    Storage(#[from] VitransError),

    /// Console or file I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for application operations.
pub type AppResult<T> = std::result::Result<T, AppError>;
