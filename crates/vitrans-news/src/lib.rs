//! # ViTrans News
//!
//! News-article management for the ViTrans site.
//!
//! The repository owns the article set, validates and applies
//! mutations, and persists the full set to the key-value storage
//! collaborator after every change. The view coordinator turns the set
//! into display cards using the active language dictionary and
//! re-renders whenever either the articles or the dictionary change.
//!
//! Rendering here means producing view models; the actual presentation
//! (console, DOM, whatever hosts the site) sits behind the `RenderSink`
//! and `NotificationSink` traits.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod article;
pub mod error;
pub mod notify;
pub mod repository;
pub mod view;

pub use article::{seed_articles, Article, ArticleDraft, Category};
pub use error::{NewsError, NewsResult};
pub use notify::{Notification, NotificationLevel, NotificationPhase, NotificationSink, Notifier};
pub use repository::{ArticleRepository, ConfirmationPrompt, ARTICLES_KEY};
pub use view::{ArticleCard, ArticleDetail, ArticleView, RenderSink};
