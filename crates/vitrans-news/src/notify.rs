//! Transient user notifications with a fixed display lifecycle.

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

/// Severity of a notification, used for styling only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    /// Successful operation feedback
    Success,
    /// Failed operation feedback
    Error,
    /// Neutral information
    Info,
}

/// One transient message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Display text, already localized
    pub message: String,
    /// Severity
    pub level: NotificationLevel,
}

impl Notification {
    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Success,
        }
    }

    /// Creates an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Error,
        }
    }

    /// Creates an informational notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Info,
        }
    }
}

/// Lifecycle stage of a displayed notification.
///
/// Every notification passes through all four phases in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    /// Inserted, not yet visible
    Posted,
    /// Fade-in finished, fully visible
    Shown,
    /// Visibility window elapsed, fading out
    Hiding,
    /// Fade-out finished, removed
    Removed,
}

/// Receiver of notification phase transitions.
pub trait NotificationSink: Send + Sync {
    /// Called once per phase, in lifecycle order.
    fn phase(&self, notification: &Notification, phase: NotificationPhase);
}

/// Drives notifications through their timed lifecycle.
///
/// Timings mirror the site styling: a short fade-in, a three second
/// visibility window, then a fade-out before removal.
pub struct Notifier {
    sink: Arc<dyn NotificationSink>,
    fade_in: Duration,
    visible: Duration,
    fade_out: Duration,
}

impl Notifier {
    /// Creates a notifier with the standard timings.
    pub fn new(sink: Arc<dyn NotificationSink>) -> Self {
        Self::with_timings(
            sink,
            Duration::from_millis(100),
            Duration::from_secs(3),
            Duration::from_millis(300),
        )
    }

    /// Creates a notifier with custom phase durations.
    pub fn with_timings(
        sink: Arc<dyn NotificationSink>,
        fade_in: Duration,
        visible: Duration,
        fade_out: Duration,
    ) -> Self {
        Self {
            sink,
            fade_in,
            visible,
            fade_out,
        }
    }

    /// Posts a notification and spawns its lifecycle.
    ///
    /// Returns the handle of the spawned task so callers can await the
    /// full lifecycle; dropping the handle lets it run to completion in
    /// the background. Concurrent notifications run independently.
    pub fn notify(&self, notification: Notification) -> JoinHandle<()> {
        debug!("Posting {:?} notification", notification.level);
        self.sink.phase(&notification, NotificationPhase::Posted);

        let sink = self.sink.clone();
        let fade_in = self.fade_in;
        let visible = self.visible;
        let fade_out = self.fade_out;
        tokio::spawn(async move {
            tokio::time::sleep(fade_in).await;
            sink.phase(&notification, NotificationPhase::Shown);
            tokio::time::sleep(visible).await;
            sink.phase(&notification, NotificationPhase::Hiding);
            tokio::time::sleep(fade_out).await;
            sink.phase(&notification, NotificationPhase::Removed);
        })
    }
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("fade_in", &self.fade_in)
            .field("visible", &self.visible)
            .field("fade_out", &self.fade_out)
            .finish_non_exhaustive()
    }
}
