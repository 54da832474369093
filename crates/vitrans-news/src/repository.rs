//! Article repository: owns the set, mutates it, persists it.

use parking_lot::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};
use vitrans_common::{ArticleId, KeyValueStore};

use crate::article::{placeholder_image, seed_articles, Article, ArticleDraft};
use crate::error::NewsResult;

/// Storage key holding the serialized article set.
pub const ARTICLES_KEY: &str = "newsArticles";

/// Blocking yes/no prompt collaborator, asked before every delete.
pub trait ConfirmationPrompt: Send + Sync {
    /// Returns whether the user confirmed the action.
    fn confirm(&self, message: &str) -> bool;
}

/// Monotonic article id allocator.
///
/// Seeded from the highest persisted id so rapid creations can never
/// collide, unlike the timestamp ids the previous frontend generated.
#[derive(Debug)]
struct IdAllocator {
    next: AtomicI64,
}

impl IdAllocator {
    fn seeded_after(articles: &[Article]) -> Self {
        let max = articles.iter().map(|a| a.id.0).max().unwrap_or(0);
        Self {
            next: AtomicI64::new(max + 1),
        }
    }

    fn allocate(&self) -> ArticleId {
        ArticleId(self.next.fetch_add(1, Ordering::SeqCst))
    }
}

/// Exclusive owner of the article set and the only writer to its
/// storage key. Never renders.
///
/// Invariant: persisted state and in-memory state are identical
/// immediately after every successful mutating call returns; there is
/// no deferred or batched persistence.
pub struct ArticleRepository {
    storage: Arc<dyn KeyValueStore>,
    prompt: Arc<dyn ConfirmationPrompt>,
    articles: RwLock<Vec<Article>>,
    ids: IdAllocator,
}

impl ArticleRepository {
    /// Creates a repository, rehydrating the article set from storage.
    ///
    /// Absent or unparseable persisted data yields the fixed seed set;
    /// the seed is not written back until the first mutation.
    pub fn new(storage: Arc<dyn KeyValueStore>, prompt: Arc<dyn ConfirmationPrompt>) -> Self {
        let articles = Self::load_all(storage.as_ref());
        let ids = IdAllocator::seeded_after(&articles);
        info!("ArticleRepository loaded {} articles", articles.len());
        Self {
            storage,
            prompt,
            articles: RwLock::new(articles),
            ids,
        }
    }

    /// Reads the full article set from storage, or the seed set when
    /// nothing usable is persisted.
    fn load_all(storage: &dyn KeyValueStore) -> Vec<Article> {
        let Some(raw) = storage.get(ARTICLES_KEY) else {
            debug!("No persisted articles, using seed set");
            return seed_articles();
        };

        match serde_json::from_str(&raw) {
            Ok(articles) => articles,
            Err(e) => {
                warn!("Persisted articles are unparseable ({}), using seed set", e);
                seed_articles()
            }
        }
    }

    fn persist(&self, articles: &[Article]) -> NewsResult<()> {
        let payload = serde_json::to_string(articles)?;
        self.storage.set(ARTICLES_KEY, &payload)?;
        debug!("Persisted {} articles", articles.len());
        Ok(())
    }

    /// Validates the draft and appends a new article.
    ///
    /// The id is allocated monotonically, the image defaults to a
    /// deterministic placeholder derived from the id, and the date is
    /// stamped with the current time. The full set is persisted before
    /// the new article is returned.
    ///
    /// # Errors
    /// `NewsError::Validation` when a required field is empty after
    /// trimming; storage errors when the persist fails (the in-memory
    /// set is rolled back so it keeps matching persisted state).
    pub fn create(&self, draft: &ArticleDraft) -> NewsResult<Article> {
        draft.validate()?;

        let id = self.ids.allocate();
        let image = draft
            .image
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map_or_else(|| placeholder_image(id), ToString::to_string);

        let article = Article {
            id,
            title: draft.title.trim().to_string(),
            category: draft.category,
            content: draft.content.trim().to_string(),
            image,
            author: draft.author.trim().to_string(),
            date: chrono::Utc::now(),
        };

        let mut articles = self.articles.write();
        articles.push(article.clone());
        if let Err(e) = self.persist(&articles) {
            articles.pop();
            return Err(e);
        }

        info!("Created article {} ('{}')", article.id, article.title);
        Ok(article)
    }

    /// Deletes the article with the given id after user confirmation.
    ///
    /// Returns whether a removal occurred: `false` when the user
    /// declined or when no article matches the id (an unknown id is a
    /// no-op, not an error).
    ///
    /// # Errors
    /// Only storage errors; the removal is rolled back in that case.
    pub fn delete(&self, id: ArticleId, confirm_message: &str) -> NewsResult<bool> {
        if !self.prompt.confirm(confirm_message) {
            debug!("Delete of article {} declined", id);
            return Ok(false);
        }

        let mut articles = self.articles.write();
        let Some(position) = articles.iter().position(|a| a.id == id) else {
            debug!("Delete of unknown article {} ignored", id);
            return Ok(false);
        };

        let removed = articles.remove(position);
        if let Err(e) = self.persist(&articles) {
            articles.insert(position, removed);
            return Err(e);
        }

        info!("Deleted article {} ('{}')", removed.id, removed.title);
        Ok(true)
    }

    /// Returns the article with the given id, if present.
    pub fn find_by_id(&self, id: ArticleId) -> Option<Article> {
        self.articles.read().iter().find(|a| a.id == id).cloned()
    }

    /// Snapshot of the current article set in original order.
    pub fn articles(&self) -> Vec<Article> {
        self.articles.read().clone()
    }

    /// Number of articles currently held.
    pub fn len(&self) -> usize {
        self.articles.read().len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.articles.read().is_empty()
    }
}

impl std::fmt::Debug for ArticleRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArticleRepository")
            .field("articles", &self.len())
            .finish_non_exhaustive()
    }
}
