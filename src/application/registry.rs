//! In-flight notification registry
//!
//! Tracks which notifications are currently showing. Entries are inserted
//! when presentation starts and removed when the OS resolves them, so the
//! map stays bounded by the number of concurrently visible notifications.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use crate::domain::notification::{NotificationId, Tag};

/// A notification currently showing in the OS tray
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveNotification {
    pub id: NotificationId,
    pub title: String,
    pub tag: Option<Tag>,
}

/// Registry of in-flight notifications, shared via `Arc` with the dispatcher.
///
/// Tagged notifications key by their channel number so a same-tag dispatch
/// replaces the live entry, mirroring the OS tray's tag coalescing.
/// Untagged notifications get generated ids counted down from the top of
/// the u32 range, which keeps them out of the channel-number space.
pub struct NotificationRegistry {
    entries: Mutex<HashMap<NotificationId, ActiveNotification>>,
    next_generated: AtomicU32,
}

impl NotificationRegistry {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            next_generated: AtomicU32::new(u32::MAX),
        }
    }

    /// Allocate the registry id for a request: the tag's channel number
    /// when tagged, a fresh generated id otherwise.
    pub fn allocate_id(&self, tag: Option<Tag>) -> NotificationId {
        match tag {
            Some(tag) => NotificationId::from_tag(tag),
            None => NotificationId::new(self.next_generated.fetch_sub(1, Ordering::Relaxed)),
        }
    }

    /// Record a notification as in flight.
    /// Returns the replaced entry if the id was already live.
    pub fn insert(&self, entry: ActiveNotification) -> Option<ActiveNotification> {
        self.entries
            .lock()
            .expect("registry lock poisoned")
            .insert(entry.id, entry)
    }

    /// Remove a notification once presentation has resolved
    pub fn remove(&self, id: NotificationId) -> Option<ActiveNotification> {
        self.entries
            .lock()
            .expect("registry lock poisoned")
            .remove(&id)
    }

    /// Snapshot of the currently live notifications
    pub fn active(&self) -> Vec<ActiveNotification> {
        self.entries
            .lock()
            .expect("registry lock poisoned")
            .values()
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().expect("registry lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for NotificationRegistry {
    fn default() -> Self {
        Self::new()
    }
}
