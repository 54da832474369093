//! End-to-end tests for the news stack: repository, view, and
//! language switching wired together over real file storage.

use parking_lot::Mutex;
use std::sync::Arc;
use vitrans_common::test_utils::{create_temp_dir, dictionary_fixtures, init_test_logging};
use vitrans_common::{ArticleId, JsonFileStore, KeyValueStore};
use vitrans_i18n::{FileSource, Locale, TranslationStore};
use vitrans_news::{
    ArticleCard, ArticleDraft, ArticleRepository, ArticleView, Category, ConfirmationPrompt,
    RenderSink, ARTICLES_KEY,
};

struct AlwaysYes;

impl ConfirmationPrompt for AlwaysYes {
    fn confirm(&self, _message: &str) -> bool {
        true
    }
}

#[derive(Default)]
struct CapturingSink {
    last: Mutex<Vec<ArticleCard>>,
}

impl RenderSink for CapturingSink {
    fn replace(&self, cards: Vec<ArticleCard>) {
        *self.last.lock() = cards;
    }
}

fn write_dictionaries(dir: &std::path::Path) {
    std::fs::write(dir.join("vi.json"), dictionary_fixtures::vi_json()).unwrap();
    std::fs::write(dir.join("en.json"), dictionary_fixtures::en_json()).unwrap();
    std::fs::write(dir.join("zh.json"), dictionary_fixtures::zh_json()).unwrap();
}

fn draft(title: &str) -> ArticleDraft {
    ArticleDraft {
        title: title.to_string(),
        category: Category::Events,
        content: "Thông tin chi tiết sẽ được cập nhật sớm.".to_string(),
        image: None,
        author: "Admin".to_string(),
    }
}

#[tokio::test]
async fn test_language_switch_rerenders_article_list() {
    init_test_logging();

    let dir = create_temp_dir();
    write_dictionaries(dir.path());
    let storage: Arc<dyn KeyValueStore> = Arc::new(JsonFileStore::open(dir.path().join("app.json")));

    let store = TranslationStore::new(
        Box::new(FileSource::new(dir.path())),
        Locale::Vietnamese,
        storage.clone(),
    );
    let repository = Arc::new(ArticleRepository::new(storage, Arc::new(AlwaysYes)));
    let sink = Arc::new(CapturingSink::default());
    let view = Arc::new(ArticleView::new(repository, sink.clone()));
    store.subscribe(view);

    store.activate(Locale::Vietnamese).await.unwrap();
    {
        let cards = sink.last.lock();
        assert_eq!(cards.len(), 3);
        assert!(cards.iter().all(|c| c.view_more_label == "Xem thêm"));
    }

    store.activate(Locale::English).await.unwrap();
    let cards = sink.last.lock();
    assert!(cards.iter().all(|c| c.view_more_label == "View more"));
    assert_eq!(cards[0].date_label, "10/15/2025");
}

#[tokio::test]
async fn test_mutations_survive_restart_alongside_language_preference() {
    init_test_logging();

    let dir = create_temp_dir();
    write_dictionaries(dir.path());
    let path = dir.path().join("app.json");

    let created_id;
    {
        let storage: Arc<dyn KeyValueStore> = Arc::new(JsonFileStore::open(&path));
        let store = TranslationStore::new(
            Box::new(FileSource::new(dir.path())),
            Locale::Vietnamese,
            storage.clone(),
        );
        store.activate(Locale::Chinese).await.unwrap();

        let repository = ArticleRepository::new(storage, Arc::new(AlwaysYes));
        created_id = repository.create(&draft("Hội thảo phiên dịch 2026")).unwrap().id;
        assert!(repository.delete(ArticleId(1), "xóa?").unwrap());
    }

    // A fresh process over the same file sees both the articles and
    // the language preference.
    let storage: Arc<dyn KeyValueStore> = Arc::new(JsonFileStore::open(&path));
    let store = TranslationStore::new(
        Box::new(FileSource::new(dir.path())),
        Locale::Vietnamese,
        storage.clone(),
    );
    assert_eq!(store.initial_locale(), Locale::Chinese);

    let repository = ArticleRepository::new(storage, Arc::new(AlwaysYes));
    assert_eq!(repository.len(), 3);
    assert!(repository.find_by_id(created_id).is_some());
    assert!(repository.find_by_id(ArticleId(1)).is_none());
}

#[tokio::test]
async fn test_view_localizes_detail_after_activation() {
    init_test_logging();

    let dir = create_temp_dir();
    write_dictionaries(dir.path());
    let storage: Arc<dyn KeyValueStore> = Arc::new(JsonFileStore::open(dir.path().join("app.json")));

    let store = TranslationStore::new(
        Box::new(FileSource::new(dir.path())),
        Locale::Vietnamese,
        storage.clone(),
    );
    let repository = Arc::new(ArticleRepository::new(storage, Arc::new(AlwaysYes)));
    let sink = Arc::new(CapturingSink::default());
    let view = Arc::new(ArticleView::new(repository, sink));
    store.subscribe(view.clone());

    store.activate(Locale::English).await.unwrap();
    let detail = view.article_detail(ArticleId(1)).unwrap();
    assert!(detail.author_line.starts_with("Author:"));
    assert_eq!(view.confirm_delete_message(), "Are you sure you want to delete this news item?");
}

#[test]
fn test_articles_share_storage_file_with_other_keys() {
    init_test_logging();

    let dir = create_temp_dir();
    let path = dir.path().join("app.json");
    let storage = Arc::new(JsonFileStore::open(&path));
    storage.set("language", "en").unwrap();

    let repository = ArticleRepository::new(storage.clone(), Arc::new(AlwaysYes));
    repository.create(&draft("Khóa đào tạo mới")).unwrap();

    // Both keys live in the single storage document.
    assert!(storage.get("language").is_some());
    assert!(storage.get(ARTICLES_KEY).is_some());
}
