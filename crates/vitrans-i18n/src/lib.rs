//! # ViTrans I18n
//!
//! Language-switching layer for the ViTrans site.
//!
//! This crate loads, caches, and serves per-language JSON dictionaries,
//! tracks the single active language, and propagates language changes to
//! dependents. It includes:
//!
//! - Locale management with a fixed set of supported languages
//! - Dictionary fetching from file or HTTP sources with caching
//! - Soft nested key lookup (missing keys degrade, never crash)
//! - An explicit binding registry for translation-bound view elements
//! - Observer notification so dependents re-render on language change
//! - Fallback to the default language when a dictionary fails to load
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use vitrans_common::MemoryStore;
//! use vitrans_i18n::{FileSource, Locale, TranslationStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = TranslationStore::new(
//!     Box::new(FileSource::new("translations")),
//!     Locale::Vietnamese,
//!     Arc::new(MemoryStore::new()),
//! );
//!
//! store.activate(Locale::English).await?;
//! let label = store.get("news.viewMore");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod bindings;
pub mod dictionary;
pub mod error;
pub mod locale;
pub mod source;
pub mod store;

pub use bindings::{Binding, BindingRegistry, BindingSlot, BindingUpdate, ElementId};
pub use dictionary::Dictionary;
pub use error::{I18nError, I18nResult};
pub use locale::Locale;
pub use source::{DictionarySource, FileSource, HttpSource};
pub use store::{ActivationReport, DictionaryObserver, TranslationStore, LANGUAGE_PREFERENCE_KEY};
