//! Read-side rendering of the article set.

use arc_swap::ArcSwapOption;
use std::sync::Arc;
use tracing::debug;
use vitrans_common::{truncate_chars, ArticleId};
use vitrans_i18n::{Dictionary, DictionaryObserver, Locale};

use crate::article::{Article, Category};
use crate::repository::ArticleRepository;

/// Maximum number of characters kept in a card excerpt.
pub const EXCERPT_LENGTH: usize = 120;

/// One article prepared for list display, fully localized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleCard {
    /// Source article id
    pub id: ArticleId,
    /// Headline, shown verbatim
    pub title: String,
    /// Localized category label
    pub category_label: String,
    /// Content truncated for the card
    pub excerpt: String,
    /// Author name
    pub author: String,
    /// Publication date in the active locale's convention
    pub date_label: String,
    /// Image URL
    pub image: String,
    /// Localized "view more" action label
    pub view_more_label: String,
    /// Localized "delete" action label
    pub delete_label: String,
}

/// One article prepared for full display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDetail {
    /// Source article id
    pub id: ArticleId,
    /// Headline
    pub title: String,
    /// Localized category label
    pub category_label: String,
    /// Author name prefixed with the localized author label
    pub author_line: String,
    /// Publication date in the active locale's convention
    pub date_label: String,
    /// Image URL
    pub image: String,
    /// Full article body
    pub content: String,
}

/// Receiver of a freshly rendered card list. Each render replaces the
/// previous output wholesale; nothing is patched in place.
pub trait RenderSink: Send + Sync {
    /// Replaces the currently displayed list with `cards`.
    fn replace(&self, cards: Vec<ArticleCard>);
}

/// Locale context the view renders under.
#[derive(Debug)]
struct ViewLocaleState {
    locale: Locale,
    dictionary: Arc<Dictionary>,
}

/// Renders the article set, newest first, localized for the active
/// language. Reads from the repository but never mutates it.
pub struct ArticleView {
    repository: Arc<ArticleRepository>,
    sink: Arc<dyn RenderSink>,
    state: ArcSwapOption<ViewLocaleState>,
}

impl ArticleView {
    /// Creates a view over `repository` that emits into `sink`.
    ///
    /// Until a dictionary change is observed the view renders with the
    /// default locale and built-in Vietnamese labels.
    pub fn new(repository: Arc<ArticleRepository>, sink: Arc<dyn RenderSink>) -> Self {
        Self {
            repository,
            sink,
            state: ArcSwapOption::empty(),
        }
    }

    fn locale(&self) -> Locale {
        self.state
            .load()
            .as_ref()
            .map_or_else(Locale::default, |s| s.locale)
    }

    fn lookup(&self, path: &str) -> Option<String> {
        let state = self.state.load();
        let state = state.as_ref()?;
        state.dictionary.get(path).map(ToString::to_string)
    }

    /// Renders the full article set into the sink, sorted by
    /// publication date descending. Rendering twice without an
    /// intervening change produces identical output.
    pub fn render(&self) {
        let mut articles = self.repository.articles();
        // Stable sort keeps insertion order among same-date articles.
        articles.sort_by(|a, b| b.date.cmp(&a.date));

        let cards: Vec<ArticleCard> = articles.iter().map(|a| self.card(a)).collect();
        debug!("Rendering {} article cards ({})", cards.len(), self.locale().code());
        self.sink.replace(cards);
    }

    fn card(&self, article: &Article) -> ArticleCard {
        ArticleCard {
            id: article.id,
            title: article.title.clone(),
            category_label: self.category_label(article.category),
            excerpt: excerpt(&article.content),
            author: article.author.clone(),
            date_label: self.locale().format_date(&article.date),
            image: article.image.clone(),
            view_more_label: self.view_more_label(),
            delete_label: self.delete_label(),
        }
    }

    /// Label for `category` in the active language.
    ///
    /// Falls back to the "other" label when the category has no entry
    /// in the active dictionary, and to the built-in Vietnamese label
    /// when the dictionary carries no category section at all.
    pub fn category_label(&self, category: Category) -> String {
        self.lookup(category.dictionary_key())
            .or_else(|| self.lookup(Category::Other.dictionary_key()))
            .unwrap_or_else(|| category.fallback_label().to_string())
    }

    /// Full localized detail for one article, if it exists.
    pub fn article_detail(&self, id: ArticleId) -> Option<ArticleDetail> {
        let article = self.repository.find_by_id(id)?;
        let prefix = self
            .lookup("news.authorPrefix")
            .unwrap_or_else(|| "Tác giả:".to_string());
        Some(ArticleDetail {
            id: article.id,
            title: article.title,
            category_label: self.category_label(article.category),
            author_line: format!("{prefix} {}", article.author),
            date_label: self.locale().format_date(&article.date),
            image: article.image,
            content: article.content,
        })
    }

    /// Localized "view more" action label.
    pub fn view_more_label(&self) -> String {
        self.lookup("news.viewMore")
            .unwrap_or_else(|| "Xem thêm".to_string())
    }

    /// Localized "delete" action label.
    pub fn delete_label(&self) -> String {
        self.lookup("news.delete")
            .unwrap_or_else(|| "Xóa".to_string())
    }

    /// Message shown after a successful article creation.
    pub fn added_message(&self) -> String {
        self.lookup("news.messages.added")
            .unwrap_or_else(|| "Tin tức đã được thêm thành công!".to_string())
    }

    /// Message shown after a successful article deletion.
    pub fn deleted_message(&self) -> String {
        self.lookup("news.messages.deleted")
            .unwrap_or_else(|| "Tin tức đã được xóa!".to_string())
    }

    /// Question asked before deleting an article.
    pub fn confirm_delete_message(&self) -> String {
        self.lookup("news.messages.confirmDelete")
            .unwrap_or_else(|| "Bạn có chắc chắn muốn xóa tin tức này?".to_string())
    }

    /// Message shown when a submitted draft has empty required fields.
    pub fn validation_message(&self) -> String {
        self.lookup("news.messages.required")
            .unwrap_or_else(|| "Vui lòng điền đầy đủ các trường bắt buộc!".to_string())
    }
}

impl DictionaryObserver for ArticleView {
    fn dictionary_changed(&self, locale: Locale, dictionary: &Arc<Dictionary>) {
        self.state.store(Some(Arc::new(ViewLocaleState {
            locale,
            dictionary: dictionary.clone(),
        })));
        self.render();
    }
}

impl std::fmt::Debug for ArticleView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArticleView")
            .field("locale", &self.locale())
            .finish_non_exhaustive()
    }
}

/// Truncates article content for card display.
///
/// Counts Unicode scalar values, not bytes, so Vietnamese text is cut
/// at the intended length.
pub fn excerpt(content: &str) -> String {
    truncate_chars(content, EXCERPT_LENGTH)
}
