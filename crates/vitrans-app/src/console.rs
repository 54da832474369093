//! Terminal implementations of the presentation collaborators.
//!
//! The core crates only speak through `RenderSink`, `NotificationSink`,
//! and `ConfirmationPrompt`. These implementations bind them to stdout
//! and stdin so the whole stack runs in a terminal.

use std::io::{self, BufRead, Write};
use tracing::debug;
use vitrans_news::{
    ArticleCard, ConfirmationPrompt, Notification, NotificationLevel, NotificationPhase,
    NotificationSink, RenderSink,
};

/// Prints the rendered card list to stdout.
#[derive(Debug, Default)]
pub struct ConsoleRenderer;

impl RenderSink for ConsoleRenderer {
    fn replace(&self, cards: Vec<ArticleCard>) {
        debug!("Printing {} cards", cards.len());
        println!();
        for card in &cards {
            println!("[{}] {} ({})", card.id, card.title, card.category_label);
            println!("    {} | {} | {}", card.date_label, card.author, card.image);
            println!("    {}", card.excerpt);
            println!("    {} / {}", card.view_more_label, card.delete_label);
        }
        if cards.is_empty() {
            println!("(no articles)");
        }
    }
}

/// Prints notifications when they become visible.
///
/// A terminal has no fade animation, so only the `Shown` phase is
/// written; the other phases are traced for debugging.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl NotificationSink for ConsoleNotifier {
    fn phase(&self, notification: &Notification, phase: NotificationPhase) {
        if phase == NotificationPhase::Shown {
            let tag = match notification.level {
                NotificationLevel::Success => "ok",
                NotificationLevel::Error => "error",
                NotificationLevel::Info => "info",
            };
            println!("[{tag}] {}", notification.message);
        } else {
            debug!("Notification phase {:?}", phase);
        }
    }
}

/// Asks a yes/no question on stdin.
#[derive(Debug, Default)]
pub struct ConsolePrompt;

impl ConfirmationPrompt for ConsolePrompt {
    fn confirm(&self, message: &str) -> bool {
        print!("{message} [y/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}
