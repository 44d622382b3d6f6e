//! Transient toast notifications.
//!
//! The current notification is published on a `watch` channel. Each new
//! notification replaces the previous one and re-arms the auto-clear timer;
//! the timer belonging to the replaced notification is aborted.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// How long a notification stays visible.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
    Error,
}

impl NotificationKind {
    pub fn class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "toast--success",
            NotificationKind::Info => "toast--info",
            NotificationKind::Error => "toast--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
}

struct Inner {
    tx: watch::Sender<Option<Notification>>,
    timer: Mutex<Option<JoinHandle<()>>>,
    next_id: AtomicU64,
    ttl: Duration,
}

/// Publishes the current notification and clears it after a delay.
///
/// Must be used from within a tokio runtime.
#[derive(Clone)]
pub struct NotificationCenter {
    inner: Arc<Inner>,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(NOTIFICATION_TTL)
    }
}

impl std::fmt::Debug for NotificationCenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationCenter")
            .field("current", &self.current())
            .field("ttl", &self.inner.ttl)
            .finish()
    }
}

impl NotificationCenter {
    pub fn new(ttl: Duration) -> Self {
        let (tx, _rx) = watch::channel(None);
        Self {
            inner: Arc::new(Inner {
                tx,
                timer: Mutex::new(None),
                next_id: AtomicU64::new(1),
                ttl,
            }),
        }
    }

    /// Show a notification, replacing any current one. Returns its id.
    pub fn show(&self, message: impl Into<String>, kind: NotificationKind) -> u64 {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        let notification = Notification {
            id,
            message: message.into(),
            kind,
        };
        tracing::debug!(id, ?kind, message = %notification.message, "Notification");
        self.inner.tx.send_replace(Some(notification));

        let inner = Arc::clone(&self.inner);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(inner.ttl).await;
            inner.tx.send_if_modified(|current| {
                if current.as_ref().map(|n| n.id) == Some(id) {
                    *current = None;
                    true
                } else {
                    false
                }
            });
        });

        if let Some(previous) = self.inner.timer.lock().replace(handle) {
            previous.abort();
        }
        id
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.show(message, NotificationKind::Success)
    }

    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.show(message, NotificationKind::Info)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.show(message, NotificationKind::Error)
    }

    /// Clear immediately and cancel the pending timer.
    pub fn dismiss(&self) {
        if let Some(timer) = self.inner.timer.lock().take() {
            timer.abort();
        }
        self.inner.tx.send_replace(None);
    }

    pub fn current(&self) -> Option<Notification> {
        self.inner.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Notification>> {
        self.inner.tx.subscribe()
    }
}
