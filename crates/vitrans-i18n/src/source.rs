//! Dictionary document sources.
//!
//! Dictionaries live at the path convention `translations/<code>.json`,
//! either on local disk or behind a static file server. Fetch failures
//! are recoverable at the store level (fallback to the default
//! language), so sources only describe what went wrong.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;
use url::Url;

use crate::dictionary::Dictionary;
use crate::error::{I18nError, I18nResult};
use crate::locale::Locale;

/// A source of dictionary documents, keyed by locale.
#[async_trait]
pub trait DictionarySource: Send + Sync {
    /// Fetches and parses the dictionary document for `locale`.
    async fn fetch(&self, locale: Locale) -> I18nResult<Dictionary>;

    /// Human-readable description of the source for logs.
    fn describe(&self) -> String;
}

/// Reads dictionary documents from a local directory.
#[derive(Debug)]
pub struct FileSource {
    base_dir: PathBuf,
}

impl FileSource {
    /// Creates a source reading `<base_dir>/<code>.json`.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    fn document_path(&self, locale: Locale) -> PathBuf {
        self.base_dir.join(locale.dictionary_file())
    }
}

#[async_trait]
impl DictionarySource for FileSource {
    async fn fetch(&self, locale: Locale) -> I18nResult<Dictionary> {
        let path = self.document_path(locale);
        debug!("Fetching dictionary from {:?}", path);

        let content =
            tokio::fs::read_to_string(&path)
                .await
                .map_err(|e| I18nError::FetchFailed {
                    location: path.to_string_lossy().to_string(),
                    reason: e.to_string(),
                })?;

        Dictionary::from_json(&content).map_err(|e| I18nError::ParseFailed {
            location: path.to_string_lossy().to_string(),
            source: e,
        })
    }

    fn describe(&self) -> String {
        format!("file directory {:?}", self.base_dir)
    }
}

/// Fetches dictionary documents over HTTP from a static site root.
#[derive(Debug)]
pub struct HttpSource {
    base_url: Url,
    client: reqwest::Client,
}

impl HttpSource {
    /// Creates a source fetching `<base_url>/translations/<code>.json`.
    ///
    /// # Errors
    /// Returns `I18nError::InvalidUrl` if `base_url` does not parse.
    pub fn new(base_url: &str) -> I18nResult<Self> {
        let base_url =
            Url::parse(base_url).map_err(|e| I18nError::InvalidUrl(format!("{base_url}: {e}")))?;
        Ok(Self {
            base_url,
            client: reqwest::Client::new(),
        })
    }

    fn document_url(&self, locale: Locale) -> I18nResult<Url> {
        self.base_url
            .join(&format!("translations/{}", locale.dictionary_file()))
            .map_err(|e| I18nError::InvalidUrl(e.to_string()))
    }
}

#[async_trait]
impl DictionarySource for HttpSource {
    async fn fetch(&self, locale: Locale) -> I18nResult<Dictionary> {
        let url = self.document_url(locale)?;
        debug!("Fetching dictionary from {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| I18nError::FetchFailed {
                location: url.to_string(),
                reason: e.to_string(),
            })?;

        let body = response.text().await.map_err(|e| I18nError::FetchFailed {
            location: url.to_string(),
            reason: e.to_string(),
        })?;

        Dictionary::from_json(&body).map_err(|e| I18nError::ParseFailed {
            location: url.to_string(),
            source: e,
        })
    }

    fn describe(&self) -> String {
        format!("http base {}", self.base_url)
    }
}
