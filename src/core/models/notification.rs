//! Notification feed entries and per-category switches

use serde::{Deserialize, Serialize};

/// What produced a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationCategory {
    /// Inventory levels
    Inventory,
    /// Donor/recipient matches
    Match,
    /// Synchronization and other system events
    System,
    /// Reminders
    Reminder,
}

impl std::fmt::Display for NotificationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inventory => write!(f, "inventory"),
            Self::Match => write!(f, "match"),
            Self::System => write!(f, "system"),
            Self::Reminder => write!(f, "reminder"),
        }
    }
}

/// A notification in the feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppNotification {
    /// Unique identifier (`NTF-N`)
    pub id: String,
    /// Title; also the deduplication key while unread
    pub title: String,
    /// Body text
    pub message: String,
    /// Category
    pub category: NotificationCategory,
    /// Display timestamp (`YYYY-MM-DD HH:MM`)
    pub timestamp: String,
    /// Whether the feed has been opened since this was created
    #[serde(default)]
    pub read: bool,
}

/// A notification before it has an id and timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationDraft {
    /// Title
    pub title: String,
    /// Body text
    pub message: String,
    /// Category
    pub category: NotificationCategory,
}

impl NotificationDraft {
    /// Create a draft
    #[must_use]
    pub fn new(
        category: NotificationCategory,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            category,
        }
    }
}

/// Which categories of alerts are produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    /// Low-stock alerts
    #[serde(default = "enabled")]
    pub inventory_alerts: bool,
    /// Match alerts
    #[serde(default = "enabled")]
    pub match_alerts: bool,
    /// Sync/system alerts
    #[serde(default = "enabled")]
    pub system_alerts: bool,
}

const fn enabled() -> bool {
    true
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            inventory_alerts: true,
            match_alerts: true,
            system_alerts: true,
        }
    }
}

impl NotificationSettings {
    /// Whether alerts of `category` should be emitted
    #[must_use]
    pub const fn allows(&self, category: NotificationCategory) -> bool {
        match category {
            NotificationCategory::Inventory => self.inventory_alerts,
            NotificationCategory::Match => self.match_alerts,
            NotificationCategory::System => self.system_alerts,
            NotificationCategory::Reminder => true,
        }
    }
}
