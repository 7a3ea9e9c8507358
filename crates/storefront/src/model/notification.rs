//! Notification (toast) feed entry.

use std::fmt;
use std::fmt::Display;
use std::sync::Arc;

/// Callback run when an entry is dismissed.
pub type NotificationCallback = Arc<dyn Fn() + Send + Sync>;

/// Type-safe identifier for notification entries, assigned by the feed at
/// enqueue time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(pub u32);

impl From<u32> for NotificationId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for NotificationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "toast_{}", self.0)
    }
}

/// Visual category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationVariant {
    Success,
    Error,
    Info,
}

/// One entry of the notification feed.
///
/// Entries live until explicitly dismissed; the core never expires them on
/// a timer. The optional `on_dismiss` callback runs exactly once, when the
/// entry is dismissed.
#[derive(Clone)]
pub struct NotificationEntry {
    pub id: NotificationId,
    pub variant: NotificationVariant,
    pub message: String,
    pub on_dismiss: Option<NotificationCallback>,
}

impl NotificationEntry {
    pub fn new(
        id: NotificationId,
        variant: NotificationVariant,
        message: impl Into<String>,
        on_dismiss: Option<NotificationCallback>,
    ) -> Self {
        Self {
            id,
            variant,
            message: message.into(),
            on_dismiss,
        }
    }
}

impl fmt::Debug for NotificationEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationEntry")
            .field("id", &self.id)
            .field("variant", &self.variant)
            .field("message", &self.message)
            .field("on_dismiss", &self.on_dismiss.as_ref().map(|_| "<callback>"))
            .finish()
    }
}
