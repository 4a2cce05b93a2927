//! Transient user-facing notifications (toasts).
//!
//! DESIGN
//! ======
//! Notifications are plain queued records. Rendering and timed dismissal
//! live in the component and signal adapter; this module only orders and
//! removes entries.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

/// How long a notification stays on screen in the browser.
pub const NOTIFICATION_TIMEOUT_MS: u32 = 5_000;

/// Severity shown alongside a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
}

impl NotificationLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub level: NotificationLevel,
}

/// Visible notifications, oldest first.
#[derive(Clone, Debug, Default)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
    pub next_id: u64,
}

impl NotificationsState {
    /// Queue a notification and return its id. Ids start at 1 and never repeat.
    pub fn push(&mut self, message: impl Into<String>, level: NotificationLevel) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification { id, message: message.into(), level });
        id
    }

    /// Remove a notification. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }
}
