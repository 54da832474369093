//! Translation store: dictionary cache, active language, and propagation.

use arc_swap::ArcSwapOption;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use vitrans_common::KeyValueStore;

use crate::bindings::{Binding, BindingRegistry, BindingUpdate};
use crate::dictionary::Dictionary;
use crate::error::{I18nError, I18nResult};
use crate::locale::Locale;
use crate::source::DictionarySource;

/// Storage key holding the user's persisted language preference.
pub const LANGUAGE_PREFERENCE_KEY: &str = "language";

/// Dependent notified whenever the active dictionary changes.
///
/// Registration happens at wiring time, replacing the original
/// implementation's habit of components reaching into each other
/// through ambient globals.
pub trait DictionaryObserver: Send + Sync {
    /// Called after activation completes with the new active language
    /// and its dictionary.
    fn dictionary_changed(&self, locale: Locale, dictionary: &Arc<Dictionary>);
}

/// Outcome of a completed activation, applied by the view layer.
#[derive(Debug)]
pub struct ActivationReport {
    /// The language that is now active.
    pub locale: Locale,
    /// Display text for the "currently selected language" indicator.
    pub indicator: String,
    /// Resolved updates for every registered binding whose key exists
    /// in the new dictionary.
    pub updates: Vec<BindingUpdate>,
}

/// The active language and its dictionary, swapped atomically.
#[derive(Debug)]
struct ActiveState {
    locale: Locale,
    dictionary: Arc<Dictionary>,
}

/// Loads, caches, and serves language dictionaries, tracks the active
/// language, and propagates changes to dependents.
///
/// Concurrency model: activation is awaited end to end, so rendered
/// text always reflects exactly one dictionary. Two racing `activate`
/// calls are last-write-wins on the active language; neither is
/// cancelled. This matches the site's single-user event-driven usage
/// and is an accepted limitation rather than a guarantee.
pub struct TranslationStore {
    default_locale: Locale,
    source: Box<dyn DictionarySource>,
    preferences: Arc<dyn KeyValueStore>,
    cache: RwLock<HashMap<Locale, Arc<Dictionary>>>,
    active: ArcSwapOption<ActiveState>,
    bindings: RwLock<BindingRegistry>,
    observers: RwLock<Vec<Arc<dyn DictionaryObserver>>>,
}

impl TranslationStore {
    /// Creates a store over the given document source.
    ///
    /// The store starts with no active language; callers are expected
    /// to `activate` the initial locale during wiring.
    pub fn new(
        source: Box<dyn DictionarySource>,
        default_locale: Locale,
        preferences: Arc<dyn KeyValueStore>,
    ) -> Self {
        info!(
            "TranslationStore created over {} (default language '{}')",
            source.describe(),
            default_locale.code()
        );
        Self {
            default_locale,
            source,
            preferences,
            cache: RwLock::new(HashMap::new()),
            active: ArcSwapOption::from(None),
            bindings: RwLock::new(BindingRegistry::new()),
            observers: RwLock::new(Vec::new()),
        }
    }

    /// The locale to activate at startup: the persisted preference if
    /// it names a supported language, the default otherwise.
    pub fn initial_locale(&self) -> Locale {
        self.preferences
            .get(LANGUAGE_PREFERENCE_KEY)
            .and_then(|code| Locale::from_code(&code))
            .unwrap_or(self.default_locale)
    }

    /// The default locale dictionaries fall back to.
    pub fn default_locale(&self) -> Locale {
        self.default_locale
    }

    /// Returns the dictionary for `locale`, fetching it on first use.
    ///
    /// Cached dictionaries are served without re-fetching. A fetch
    /// failure for a non-default locale retries once with the default
    /// locale and returns that dictionary instead.
    ///
    /// # Errors
    /// `I18nError::DictionaryUnavailable` when the default language
    /// dictionary itself cannot be loaded.
    pub async fn load(&self, locale: Locale) -> I18nResult<Arc<Dictionary>> {
        if let Some(dictionary) = self.cache.read().get(&locale).cloned() {
            debug!("Dictionary cache hit for '{}'", locale.code());
            return Ok(dictionary);
        }

        match self.fetch_and_cache(locale).await {
            Ok(dictionary) => Ok(dictionary),
            Err(e) if locale != self.default_locale => {
                warn!(
                    "Failed to load dictionary for '{}' ({}), falling back to default '{}'",
                    locale.code(),
                    e,
                    self.default_locale.code()
                );
                if let Some(dictionary) = self.cache.read().get(&self.default_locale).cloned() {
                    return Ok(dictionary);
                }
                self.fetch_and_cache(self.default_locale)
                    .await
                    .map_err(|fallback_err| {
                        error!(
                            "Default dictionary '{}' also failed to load: {}",
                            self.default_locale.code(),
                            fallback_err
                        );
                        I18nError::DictionaryUnavailable {
                            requested: locale.code().to_string(),
                            fallback: self.default_locale.code().to_string(),
                        }
                    })
            }
            Err(e) => {
                error!(
                    "Default dictionary '{}' failed to load: {}",
                    self.default_locale.code(),
                    e
                );
                Err(I18nError::DictionaryUnavailable {
                    requested: locale.code().to_string(),
                    fallback: self.default_locale.code().to_string(),
                })
            }
        }
    }

    async fn fetch_and_cache(&self, locale: Locale) -> I18nResult<Arc<Dictionary>> {
        let dictionary = Arc::new(self.source.fetch(locale).await?);
        self.cache.write().insert(locale, dictionary.clone());
        info!("Loaded and cached dictionary for '{}'", locale.code());
        Ok(dictionary)
    }

    /// Makes `locale` the active language.
    ///
    /// Awaits the dictionary load, persists the preference, swaps the
    /// active snapshot, resolves all registered bindings, and notifies
    /// observers. This is the single propagation point for language
    /// changes; no other component fetches dictionaries.
    ///
    /// The preference records the requested code even when its
    /// dictionary fell back to the default, mirroring the choice the
    /// user made.
    ///
    /// # Errors
    /// Only `I18nError::DictionaryUnavailable`; the previously active
    /// language (if any) stays in effect in that case.
    pub async fn activate(&self, locale: Locale) -> I18nResult<ActivationReport> {
        let dictionary = self.load(locale).await?;

        if let Err(e) = self.preferences.set(LANGUAGE_PREFERENCE_KEY, locale.code()) {
            warn!("Failed to persist language preference: {}", e);
        }

        self.active.store(Some(Arc::new(ActiveState {
            locale,
            dictionary: dictionary.clone(),
        })));

        let updates = self.bindings.read().resolve(&dictionary);

        let observers: Vec<_> = self.observers.read().clone();
        for observer in observers {
            observer.dictionary_changed(locale, &dictionary);
        }

        info!(
            "Activated language '{}' ({} binding updates, {} observers notified)",
            locale.code(),
            updates.len(),
            self.observers.read().len()
        );

        Ok(ActivationReport {
            locale,
            indicator: locale.display_name().to_string(),
            updates,
        })
    }

    /// Soft lookup against the active dictionary.
    ///
    /// Returns `None` before the first activation and for any missing
    /// key path; rendering falls back to existing or hardcoded text.
    pub fn get(&self, path: &str) -> Option<String> {
        self.active
            .load()
            .as_ref()
            .and_then(|state| state.dictionary.get(path).map(ToString::to_string))
    }

    /// The currently active locale, or the default before activation.
    pub fn active_locale(&self) -> Locale {
        self.active
            .load()
            .as_ref()
            .map_or(self.default_locale, |state| state.locale)
    }

    /// The currently active dictionary, if a language has been activated.
    pub fn active_dictionary(&self) -> Option<Arc<Dictionary>> {
        self.active
            .load()
            .as_ref()
            .map(|state| state.dictionary.clone())
    }

    /// Registers a translation-bound element.
    pub fn register_binding(&self, binding: Binding) {
        self.bindings.write().register(binding);
    }

    /// Registers a batch of translation-bound elements.
    pub fn register_bindings(&self, bindings: impl IntoIterator<Item = Binding>) {
        self.bindings.write().register_all(bindings);
    }

    /// Subscribes a dependent to dictionary changes.
    pub fn subscribe(&self, observer: Arc<dyn DictionaryObserver>) {
        self.observers.write().push(observer);
    }
}

impl std::fmt::Debug for TranslationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationStore")
            .field("default_locale", &self.default_locale)
            .field("source", &self.source.describe())
            .field("cached", &self.cache.read().len())
            .field("active", &self.active_locale())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use vitrans_common::test_utils::dictionary_fixtures;
    use vitrans_common::MemoryStore;

    /// In-memory document source with fetch counting.
    struct MapSource {
        documents: HashMap<Locale, String>,
        fetches: Arc<AtomicUsize>,
    }

    impl MapSource {
        fn new(documents: &[(Locale, &str)]) -> Self {
            Self {
                documents: documents
                    .iter()
                    .map(|(l, d)| (*l, (*d).to_string()))
                    .collect(),
                fetches: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn all_languages() -> Self {
            Self::new(&[
                (Locale::Vietnamese, dictionary_fixtures::vi_json()),
                (Locale::English, dictionary_fixtures::en_json()),
                (Locale::Chinese, dictionary_fixtures::zh_json()),
            ])
        }
    }

    #[async_trait]
    impl DictionarySource for MapSource {
        async fn fetch(&self, locale: Locale) -> I18nResult<Dictionary> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            let document =
                self.documents
                    .get(&locale)
                    .ok_or_else(|| I18nError::FetchFailed {
                        location: locale.dictionary_file(),
                        reason: "no such document".to_string(),
                    })?;
            Dictionary::from_json(document).map_err(|e| I18nError::ParseFailed {
                location: locale.dictionary_file(),
                source: e,
            })
        }

        fn describe(&self) -> String {
            "in-memory map".to_string()
        }
    }

    /// Records every notification the store delivers.
    #[derive(Default)]
    struct RecordingObserver {
        seen: Mutex<Vec<(Locale, Option<String>)>>,
    }

    impl DictionaryObserver for RecordingObserver {
        fn dictionary_changed(&self, locale: Locale, dictionary: &Arc<Dictionary>) {
            self.seen
                .lock()
                .push((locale, dictionary.get("news.viewMore").map(String::from)));
        }
    }

    fn store_with(source: MapSource) -> (TranslationStore, Arc<MemoryStore>) {
        let preferences = Arc::new(MemoryStore::new());
        let store = TranslationStore::new(Box::new(source), Locale::Vietnamese, preferences.clone());
        (store, preferences)
    }

    #[tokio::test]
    async fn test_repeated_loads_never_refetch() {
        let source = MapSource::all_languages();
        let fetches = source.fetches.clone();
        let store = TranslationStore::new(
            Box::new(source),
            Locale::Vietnamese,
            Arc::new(MemoryStore::new()),
        );

        store.load(Locale::Chinese).await.unwrap();
        store.load(Locale::Chinese).await.unwrap();
        store.activate(Locale::Chinese).await.unwrap();

        // One fetch for zh; the later load and activate hit the cache.
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
        assert!(store.active_dictionary().is_some());
    }

    #[tokio::test]
    async fn test_load_does_not_activate() {
        let (store, _) = store_with(MapSource::all_languages());
        store.load(Locale::English).await.unwrap();
        assert!(store.active_dictionary().is_none());
        assert_eq!(store.get("news.viewMore"), None);
    }

    #[tokio::test]
    async fn test_missing_language_falls_back_to_default() {
        let (store, _) = store_with(MapSource::new(&[(
            Locale::Vietnamese,
            dictionary_fixtures::vi_json(),
        )]));

        // English has no document; the Vietnamese dictionary is served.
        let dictionary = store.load(Locale::English).await.unwrap();
        assert_eq!(dictionary.get("news.viewMore"), Some("Xem thêm"));
    }

    #[tokio::test]
    async fn test_unavailable_when_default_also_fails() {
        let (store, _) = store_with(MapSource::new(&[]));

        let err = store.load(Locale::English).await.unwrap_err();
        match err {
            I18nError::DictionaryUnavailable {
                requested,
                fallback,
            } => {
                assert_eq!(requested, "en");
                assert_eq!(fallback, "vi");
            }
            other => panic!("expected DictionaryUnavailable, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_activate_falls_back_without_error() {
        let (store, preferences) = store_with(MapSource::new(&[(
            Locale::Vietnamese,
            dictionary_fixtures::vi_json(),
        )]));

        let report = store.activate(Locale::English).await.unwrap();
        // The user's choice is recorded even though the dictionary fell back.
        assert_eq!(report.locale, Locale::English);
        assert_eq!(preferences.get(LANGUAGE_PREFERENCE_KEY), Some("en".to_string()));
        assert_eq!(store.get("news.viewMore"), Some("Xem thêm".to_string()));
    }

    #[tokio::test]
    async fn test_activate_persists_preference_and_notifies() {
        let (store, preferences) = store_with(MapSource::all_languages());
        let observer = Arc::new(RecordingObserver::default());
        store.subscribe(observer.clone());

        store.activate(Locale::Chinese).await.unwrap();

        assert_eq!(preferences.get(LANGUAGE_PREFERENCE_KEY), Some("zh".to_string()));
        let seen = observer.seen.lock();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, Locale::Chinese);
        assert_eq!(seen[0].1, Some("查看更多".to_string()));
    }

    #[tokio::test]
    async fn test_activate_resolves_registered_bindings() {
        let (store, _) = store_with(MapSource::all_languages());
        store.register_bindings([
            Binding::text("header.title", "meta.title"),
            Binding::text("footer.note", "meta.noSuchKey"),
        ]);

        let report = store.activate(Locale::English).await.unwrap();
        assert_eq!(report.indicator, "EN");
        // The missing key produces no update; existing content stays.
        assert_eq!(report.updates.len(), 1);
        assert_eq!(
            report.updates[0].value,
            "ViTrans - Professional Interpreting Services"
        );
    }

    #[tokio::test]
    async fn test_sequential_activations_last_write_wins() {
        let (store, preferences) = store_with(MapSource::all_languages());
        let observer = Arc::new(RecordingObserver::default());
        store.subscribe(observer.clone());

        store.activate(Locale::English).await.unwrap();
        store.activate(Locale::Chinese).await.unwrap();

        assert_eq!(store.active_locale(), Locale::Chinese);
        assert_eq!(preferences.get(LANGUAGE_PREFERENCE_KEY), Some("zh".to_string()));
        // The final notification carries only Chinese strings.
        let seen = observer.seen.lock();
        assert_eq!(seen.last().unwrap().1, Some("查看更多".to_string()));
        assert_eq!(store.get("news.delete"), Some("删除".to_string()));
    }

    #[tokio::test]
    async fn test_racing_activations_settle_on_one_dictionary() {
        let (store, preferences) = store_with(MapSource::all_languages());

        let (first, second) = tokio::join!(
            store.activate(Locale::English),
            store.activate(Locale::Chinese)
        );
        first.unwrap();
        second.unwrap();

        // Whichever activation finished last wins, and the served
        // strings all come from that one dictionary.
        let winner = store.active_locale();
        let expected = match winner {
            Locale::English => ("View more", "Delete", "en"),
            Locale::Chinese => ("查看更多", "删除", "zh"),
            Locale::Vietnamese => ("Xem thêm", "Xóa", "vi"),
        };
        assert_ne!(winner, Locale::Vietnamese);
        assert_eq!(store.get("news.viewMore").as_deref(), Some(expected.0));
        assert_eq!(store.get("news.delete").as_deref(), Some(expected.1));
        assert_eq!(
            preferences.get(LANGUAGE_PREFERENCE_KEY),
            Some(expected.2.to_string())
        );
    }

    #[tokio::test]
    async fn test_get_before_activation_is_none() {
        let (store, _) = store_with(MapSource::all_languages());
        assert_eq!(store.get("news.viewMore"), None);
        assert_eq!(store.active_locale(), Locale::Vietnamese);
    }

    #[test]
    fn test_initial_locale_from_preference() {
        let preferences = Arc::new(MemoryStore::new());
        preferences.set(LANGUAGE_PREFERENCE_KEY, "zh").unwrap();
        let store = TranslationStore::new(
            Box::new(MapSource::all_languages()),
            Locale::Vietnamese,
            preferences,
        );
        assert_eq!(store.initial_locale(), Locale::Chinese);
    }

    #[test]
    fn test_initial_locale_unknown_code_falls_back() {
        let preferences = Arc::new(MemoryStore::new());
        preferences.set(LANGUAGE_PREFERENCE_KEY, "xx").unwrap();
        let store = TranslationStore::new(
            Box::new(MapSource::all_languages()),
            Locale::Vietnamese,
            preferences,
        );
        assert_eq!(store.initial_locale(), Locale::Vietnamese);
    }
}
