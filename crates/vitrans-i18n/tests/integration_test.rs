//! Integration tests for vitrans-i18n.
//!
//! These tests exercise the full activation flow over the file-backed
//! dictionary source: fetch, cache, fallback, binding resolution, and
//! observer notification.

use std::sync::Arc;

use parking_lot::Mutex;
use vitrans_common::test_utils::{create_temp_dir, dictionary_fixtures, init_test_logging};
use vitrans_common::{KeyValueStore, MemoryStore};
use vitrans_i18n::{
    Binding, BindingSlot, Dictionary, DictionaryObserver, FileSource, Locale, TranslationStore,
    LANGUAGE_PREFERENCE_KEY,
};

fn write_dictionaries(dir: &std::path::Path) {
    std::fs::write(dir.join("vi.json"), dictionary_fixtures::vi_json()).unwrap();
    std::fs::write(dir.join("en.json"), dictionary_fixtures::en_json()).unwrap();
    std::fs::write(dir.join("zh.json"), dictionary_fixtures::zh_json()).unwrap();
}

#[derive(Default)]
struct LabelObserver {
    view_more: Mutex<Vec<String>>,
}

impl DictionaryObserver for LabelObserver {
    fn dictionary_changed(&self, _locale: Locale, dictionary: &Arc<Dictionary>) {
        if let Some(label) = dictionary.get("news.viewMore") {
            self.view_more.lock().push(label.to_string());
        }
    }
}

#[tokio::test]
async fn test_activation_over_file_source() {
    init_test_logging();
    let dir = create_temp_dir();
    write_dictionaries(dir.path());

    let preferences = Arc::new(MemoryStore::new());
    let store = TranslationStore::new(
        Box::new(FileSource::new(dir.path())),
        Locale::Vietnamese,
        preferences.clone(),
    );
    store.register_bindings([
        Binding::text("header.title", "meta.title"),
        Binding::new("header.title", BindingSlot::Tooltip, "meta.description"),
        Binding::new("contact.name", BindingSlot::Placeholder, "form.noSuchKey"),
    ]);
    let observer = Arc::new(LabelObserver::default());
    store.subscribe(observer.clone());

    let report = store.activate(store.initial_locale()).await.unwrap();
    assert_eq!(report.locale, Locale::Vietnamese);
    assert_eq!(report.indicator, "VI");
    // Two of three bindings resolve; the missing form key is skipped.
    assert_eq!(report.updates.len(), 2);

    let report = store.activate(Locale::English).await.unwrap();
    assert_eq!(report.indicator, "EN");
    assert_eq!(store.get("news.delete"), Some("Delete".to_string()));
    assert_eq!(
        preferences.get(LANGUAGE_PREFERENCE_KEY),
        Some("en".to_string())
    );

    let seen = observer.view_more.lock();
    assert_eq!(seen.as_slice(), ["Xem thêm", "View more"]);
}

#[tokio::test]
async fn test_missing_file_falls_back_to_default_language() {
    init_test_logging();
    let dir = create_temp_dir();
    // Only the default language document exists.
    std::fs::write(dir.path().join("vi.json"), dictionary_fixtures::vi_json()).unwrap();

    let store = TranslationStore::new(
        Box::new(FileSource::new(dir.path())),
        Locale::Vietnamese,
        Arc::new(MemoryStore::new()),
    );

    let report = store.activate(Locale::Chinese).await.unwrap();
    assert_eq!(report.locale, Locale::Chinese);
    // The served strings come from the Vietnamese fallback dictionary.
    assert_eq!(store.get("news.viewMore"), Some("Xem thêm".to_string()));
}

#[tokio::test]
async fn test_preference_survives_restart() {
    init_test_logging();
    let dir = create_temp_dir();
    write_dictionaries(dir.path());
    let storage_path = dir.path().join("storage.json");

    {
        let preferences = Arc::new(vitrans_common::JsonFileStore::open(&storage_path));
        let store = TranslationStore::new(
            Box::new(FileSource::new(dir.path())),
            Locale::Vietnamese,
            preferences,
        );
        store.activate(Locale::Chinese).await.unwrap();
    }

    // A fresh store over the same storage file resumes in Chinese.
    let preferences = Arc::new(vitrans_common::JsonFileStore::open(&storage_path));
    let store = TranslationStore::new(
        Box::new(FileSource::new(dir.path())),
        Locale::Vietnamese,
        preferences,
    );
    assert_eq!(store.initial_locale(), Locale::Chinese);
}
