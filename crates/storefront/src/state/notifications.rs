//! Notification slice: an ordered feed of toast entries.
//!
//! The feed is a FIFO set, not a time-driven queue: entries stay until the
//! rendering surface dismisses them (user click, or a display timeout of
//! the surface's choosing). Enqueue never merges or blocks; duplicate messages
//! produce independent entries, each dismissible on its own.

use crate::model::{NotificationCallback, NotificationEntry, NotificationId, NotificationVariant};

/// Notification mutation events.
pub enum NotificationEvent {
    Enqueue {
        variant: NotificationVariant,
        message: String,
        on_dismiss: Option<NotificationCallback>,
    },
    Dismiss(NotificationId),
}

impl std::fmt::Debug for NotificationEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationEvent::Enqueue {
                variant, message, ..
            } => f
                .debug_struct("Enqueue")
                .field("variant", variant)
                .field("message", message)
                .finish(),
            NotificationEvent::Dismiss(id) => f.debug_tuple("Dismiss").field(id).finish(),
        }
    }
}

/// The feed itself: entries in insertion order plus the id counter.
#[derive(Debug, Clone)]
pub struct NotificationFeed {
    entries: Vec<NotificationEntry>,
    next_id: u32,
}

impl Default for NotificationFeed {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }
}

impl NotificationFeed {
    /// Appends an entry and returns its process-unique id.
    pub fn enqueue(
        &mut self,
        variant: NotificationVariant,
        message: String,
        on_dismiss: Option<NotificationCallback>,
    ) -> NotificationId {
        let id = NotificationId::from(self.next_id);
        self.next_id += 1;
        self.entries
            .push(NotificationEntry::new(id, variant, message, on_dismiss));
        id
    }

    /// Dismisses the entry with `id`: runs its `on_dismiss` callback, then
    /// removes and returns it. `None` (and no callback) if the id is
    /// unknown, i.e. already dismissed or never enqueued, which is what
    /// makes the callback exactly-once: a repeat dismiss finds nothing.
    ///
    /// The callback is a synchronous closure and runs inside the store
    /// turn, before subscribers are told about the removal.
    pub fn dismiss(&mut self, id: NotificationId) -> Option<NotificationEntry> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        if let Some(on_dismiss) = self.entries[index].on_dismiss.as_ref() {
            on_dismiss();
        }
        Some(self.entries.remove(index))
    }

    /// The live entries, oldest first.
    pub fn entries(&self) -> &[NotificationEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
