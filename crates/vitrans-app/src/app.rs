//! Application wiring and the interactive command loop.

use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use vitrans_common::{ArticleId, JsonFileStore, KeyValueStore};
use vitrans_i18n::{Binding, DictionarySource, FileSource, HttpSource, Locale, TranslationStore};
use vitrans_news::{
    ArticleDraft, ArticleRepository, ArticleView, Category, ConfirmationPrompt, NewsError,
    Notification, NotificationSink, Notifier, RenderSink,
};

use crate::config::AppConfig;
use crate::console::{ConsoleNotifier, ConsolePrompt, ConsoleRenderer};
use crate::error::{AppError, AppResult};

/// One parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Render the article list.
    List,
    /// Show one article in full.
    View(ArticleId),
    /// Create an article from pipe-separated fields.
    Add {
        /// Headline
        title: String,
        /// Category wire name
        category: String,
        /// Body text
        content: String,
        /// Author name
        author: String,
    },
    /// Delete one article after confirmation.
    Delete(ArticleId),
    /// Switch the active language.
    Language(String),
    /// Print command usage.
    Help,
    /// Leave the command loop.
    Quit,
}

/// Parses one console line into a command.
///
/// Returns `None` for blank lines and unrecognized input.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word {
        "list" => Some(Command::List),
        "view" => rest.parse().ok().map(|id| Command::View(ArticleId(id))),
        "delete" => rest.parse().ok().map(|id| Command::Delete(ArticleId(id))),
        "lang" if !rest.is_empty() => Some(Command::Language(rest.to_string())),
        "add" => {
            let fields: Vec<&str> = rest.split('|').map(str::trim).collect();
            if fields.len() == 4 {
                Some(Command::Add {
                    title: fields[0].to_string(),
                    category: fields[1].to_string(),
                    content: fields[2].to_string(),
                    author: fields[3].to_string(),
                })
            } else {
                None
            }
        }
        "help" => Some(Command::Help),
        "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

const USAGE: &str = "\
Commands:
  list                                     show all articles
  view <id>                                show one article in full
  add <title> | <category> | <content> | <author>
  delete <id>                              delete after confirmation
  lang <vi|en|zh>                          switch language
  help                                     show this message
  quit                                     exit";

/// The assembled application: translation store, news stack, and the
/// presentation collaborators they emit into.
pub struct App {
    store: Arc<TranslationStore>,
    repository: Arc<ArticleRepository>,
    view: Arc<ArticleView>,
    notifier: Notifier,
}

impl App {
    /// Wires the full stack from configuration with the given
    /// presentation collaborators.
    ///
    /// # Errors
    /// Returns `AppError::Config` when the translations URL does not
    /// parse.
    pub fn new(
        config: &AppConfig,
        prompt: Arc<dyn ConfirmationPrompt>,
        renderer: Arc<dyn RenderSink>,
        notifications: Arc<dyn NotificationSink>,
    ) -> AppResult<Self> {
        let storage: Arc<dyn KeyValueStore> = Arc::new(JsonFileStore::open(&config.storage.path));

        let source: Box<dyn DictionarySource> = match &config.language.translations_url {
            Some(url) => Box::new(HttpSource::new(url)?),
            None => Box::new(FileSource::new(&config.language.translations_dir)),
        };

        let store = Arc::new(TranslationStore::new(
            source,
            config.default_locale(),
            storage.clone(),
        ));
        store.register_bindings(site_chrome_bindings());

        let repository = Arc::new(ArticleRepository::new(storage, prompt));
        let view = Arc::new(ArticleView::new(repository.clone(), renderer));
        store.subscribe(view.clone());

        let notifier = Notifier::with_timings(
            notifications,
            Duration::from_millis(config.notifications.fade_in_ms),
            Duration::from_millis(config.notifications.visible_ms),
            Duration::from_millis(config.notifications.fade_out_ms),
        );

        Ok(Self {
            store,
            repository,
            view,
            notifier,
        })
    }

    /// Wires the stack with the console collaborators.
    pub fn with_console(config: &AppConfig) -> AppResult<Self> {
        Self::new(
            config,
            Arc::new(ConsolePrompt),
            Arc::new(ConsoleRenderer),
            Arc::new(ConsoleNotifier),
        )
    }

    /// The translation store driving the active language.
    pub fn store(&self) -> &Arc<TranslationStore> {
        &self.store
    }

    /// The article repository.
    pub fn repository(&self) -> &Arc<ArticleRepository> {
        &self.repository
    }

    /// The article view coordinator.
    pub fn view(&self) -> &Arc<ArticleView> {
        &self.view
    }

    /// Activates the persisted (or default) language and runs the
    /// interactive command loop until `quit` or end of input.
    pub async fn run(&self) -> AppResult<()> {
        let initial = self.store.initial_locale();
        self.store.activate(initial).await?;
        info!("Started with language '{}'", initial.code());

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            let Some(command) = parse_command(&line) else {
                if !line.trim().is_empty() {
                    println!("Unrecognized command, try 'help'");
                }
                continue;
            };
            if !self.execute(command).await? {
                break;
            }
        }
        Ok(())
    }

    /// Executes one command. Returns `false` when the loop should end.
    ///
    /// # Errors
    /// Storage and translation failures propagate; invalid user input
    /// (bad ids, empty fields, unknown codes) is reported through the
    /// notifier or stdout instead.
    pub async fn execute(&self, command: Command) -> AppResult<bool> {
        match command {
            Command::List => self.view.render(),
            Command::View(id) => match self.view.article_detail(id) {
                Some(detail) => {
                    println!("{} ({})", detail.title, detail.category_label);
                    println!("{} | {}", detail.author_line, detail.date_label);
                    println!("{}", detail.content);
                }
                None => println!("No article with id {id}"),
            },
            Command::Add {
                title,
                category,
                content,
                author,
            } => self.add_article(title, &category, content, author)?,
            Command::Delete(id) => self.delete_article(id)?,
            Command::Language(code) => self.switch_language(&code).await?,
            Command::Help => println!("{USAGE}"),
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn add_article(
        &self,
        title: String,
        category: &str,
        content: String,
        author: String,
    ) -> AppResult<()> {
        let draft = ArticleDraft {
            title,
            category: Category::parse(category),
            content,
            image: None,
            author,
        };

        match self.repository.create(&draft) {
            Ok(article) => {
                info!("Added article {}", article.id);
                self.notifier
                    .notify(Notification::success(self.view.added_message()));
                self.view.render();
            }
            Err(NewsError::Validation { .. }) => {
                self.notifier
                    .notify(Notification::error(self.view.validation_message()));
            }
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    fn delete_article(&self, id: ArticleId) -> AppResult<()> {
        let deleted = self
            .repository
            .delete(id, &self.view.confirm_delete_message())?;
        if deleted {
            self.notifier
                .notify(Notification::info(self.view.deleted_message()));
            self.view.render();
        }
        Ok(())
    }

    async fn switch_language(&self, code: &str) -> AppResult<()> {
        let Some(locale) = Locale::from_code(code) else {
            println!("Unknown language code '{code}' (expected vi, en, or zh)");
            return Ok(());
        };

        match self.store.activate(locale).await {
            Ok(report) => {
                println!("Language: {}", report.indicator);
            }
            Err(e) => {
                warn!("Language switch to '{}' failed: {}", code, e);
                self.notifier.notify(Notification::error(e.to_string()));
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("store", &self.store)
            .field("repository", &self.repository)
            .finish_non_exhaustive()
    }
}

/// Bindings for the fixed site chrome: page metadata and the contact
/// form alert. Article content is localized by the view instead.
///
/// The description is plain text content (the meta tag's `content`
/// attribute), not an accessible name.
fn site_chrome_bindings() -> Vec<Binding> {
    vec![
        Binding::text("meta.title", "meta.title"),
        Binding::text("meta.description", "meta.description"),
        Binding::text("form.alert", "form.alert"),
    ]
}
