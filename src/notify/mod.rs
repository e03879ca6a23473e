//! Transient, auto-dismissing notifications
//!
//! A notification is appended hidden, slides in after [`SHOW_DELAY`],
//! slides out once its duration elapses and is removed [`REMOVE_DELAY`]
//! later. There is no queue: concurrent notifications simply coexist.

mod severity;

pub use severity::Severity;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{sleep_until, Instant};
use tracing::{error, info, warn};

/// Delay before the entrance transition starts
pub const SHOW_DELAY: Duration = Duration::from_millis(10);

/// Exit transition length; the element is removed once it has played
pub const REMOVE_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    /// Whether the `show` class is applied
    pub visible: bool,
}

/// Handle to the notification surface of the page
#[derive(Clone, Default)]
pub struct Notifier {
    surface: Arc<Mutex<Vec<Notification>>>,
    next_id: Arc<AtomicU64>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a notification for `duration`, returning its id
    pub async fn show(&self, message: impl Into<String>, severity: Severity, duration: Duration) -> u64 {
        let message = message.into();
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);

        match severity {
            Severity::Error => error!("{}", message),
            Severity::Warning => warn!("{}", message),
            Severity::Info | Severity::Success => info!("{}", message),
        }

        {
            let mut surface = self.surface.lock().await;
            surface.push(Notification {
                id,
                message,
                severity,
                visible: false,
            });
        }

        // Both timers count from the append, so a notification shorter than
        // SHOW_DELAY is hidden and never revealed.
        let appended = Instant::now();
        let show_at = appended + SHOW_DELAY;
        let hide_at = appended + duration;

        let surface = Arc::clone(&self.surface);
        tokio::spawn(async move {
            if show_at < hide_at {
                sleep_until(show_at).await;
                set_visible(&surface, id, true).await;
            }

            sleep_until(hide_at).await;
            set_visible(&surface, id, false).await;

            sleep_until(hide_at + REMOVE_DELAY).await;
            surface.lock().await.retain(|n| n.id != id);
        });

        id
    }

    /// Show a notification with the severity's default duration
    pub async fn notify(&self, message: impl Into<String>, severity: Severity) -> u64 {
        self.show(message, severity, severity.default_duration()).await
    }

    /// Notifications currently attached to the page, oldest first
    pub async fn active(&self) -> Vec<Notification> {
        self.surface.lock().await.clone()
    }
}

async fn set_visible(surface: &Mutex<Vec<Notification>>, id: u64, visible: bool) {
    let mut surface = surface.lock().await;
    if let Some(notification) = surface.iter_mut().find(|n| n.id == id) {
        notification.visible = visible;
    }
}
