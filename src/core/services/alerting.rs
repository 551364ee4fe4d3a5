//! Alerting engine - derives notifications from directory state
//!
//! Notifications are deduplicated on (title, unread): while an alert with a
//! given title is still unread, the same condition does not alert again. Once
//! the feed has been read, a recurring condition alerts anew.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::core::models::{
    Actor, AppNotification, BloodBagUnit, BloodType, Collection, Donor, NotificationCategory,
    NotificationDraft, NotificationSettings, Recipient,
};

use super::compatibility::can_donate;
use super::ids::{NOTIFICATION_PREFIX, next_id};

/// Most notifications kept; older ones are evicted
pub const NOTIFICATION_CAP: usize = 20;

/// A blood type with this many units or fewer is critically low
pub const LOW_STOCK_THRESHOLD: usize = 1;

/// Display format of notification timestamps
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Title of the low-stock alert for `blood_type`
#[must_use]
pub fn low_stock_title(blood_type: BloodType) -> String {
    format!("Critical Stock: {blood_type}")
}

/// Notification feed plus the rules that fill it
#[derive(Debug, Clone, Default)]
pub struct AlertEngine {
    notifications: Vec<AppNotification>,
    settings: NotificationSettings,
    issued: u64,
}

impl AlertEngine {
    /// Engine with an empty feed
    #[must_use]
    pub fn new(settings: NotificationSettings) -> Self {
        Self {
            notifications: Vec::new(),
            settings,
            issued: 0,
        }
    }

    /// Engine resuming an existing feed (trimmed to the cap) and its id mark
    #[must_use]
    pub fn with_feed(
        settings: NotificationSettings,
        mut notifications: Vec<AppNotification>,
        issued: u64,
    ) -> Self {
        notifications.truncate(NOTIFICATION_CAP);
        Self {
            notifications,
            settings,
            issued,
        }
    }

    /// Notifications, newest first
    #[must_use]
    pub fn notifications(&self) -> &[AppNotification] {
        &self.notifications
    }

    /// Number of unread notifications
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    /// Highest notification id number handed out
    #[must_use]
    pub const fn issued(&self) -> u64 {
        self.issued
    }

    /// Current category switches
    #[must_use]
    pub const fn settings(&self) -> NotificationSettings {
        self.settings
    }

    /// Change the category switches
    pub fn set_settings(&mut self, settings: NotificationSettings) {
        self.settings = settings;
    }

    /// Replace the whole feed (external sync); the id mark only moves up
    pub fn replace_feed(&mut self, mut notifications: Vec<AppNotification>, issued: u64) {
        notifications.truncate(NOTIFICATION_CAP);
        self.notifications = notifications;
        self.issued = self.issued.max(issued);
    }

    /// Whether an unread notification titled `title` exists
    #[must_use]
    pub fn has_unread(&self, title: &str) -> bool {
        self.notifications.iter().any(|n| !n.read && n.title == title)
    }

    /// Add a notification unless its category is switched off or an unread
    /// one with the same title exists
    pub fn push(&mut self, draft: NotificationDraft, now: DateTime<Utc>) -> Option<AppNotification> {
        if !self.settings.allows(draft.category) || self.has_unread(&draft.title) {
            return None;
        }

        let notification = AppNotification {
            id: next_id(
                NOTIFICATION_PREFIX,
                &mut self.issued,
                self.notifications.iter().map(|n| n.id.as_str()),
            ),
            title: draft.title,
            message: draft.message,
            category: draft.category,
            timestamp: now.format(TIMESTAMP_FORMAT).to_string(),
            read: false,
        };

        log::debug!("Alert {}: {}", notification.id, notification.title);
        self.notifications.insert(0, notification.clone());
        self.notifications.truncate(NOTIFICATION_CAP);
        Some(notification)
    }

    /// Mark every notification read; returns how many changed
    pub fn mark_all_read(&mut self) -> usize {
        let mut changed = 0;
        for n in self.notifications.iter_mut().filter(|n| !n.read) {
            n.read = true;
            changed += 1;
        }
        changed
    }

    /// Drop every notification; returns how many were removed
    pub fn clear(&mut self) -> usize {
        let removed = self.notifications.len();
        self.notifications.clear();
        removed
    }

    // === Triggers ===

    /// Alert on every blood type with at most [`LOW_STOCK_THRESHOLD`] units
    pub fn check_low_stock(
        &mut self,
        bags: &[BloodBagUnit],
        now: DateTime<Utc>,
    ) -> Vec<AppNotification> {
        let mut levels: BTreeMap<BloodType, usize> =
            BloodType::ALL.into_iter().map(|t| (t, 0)).collect();
        for bag in bags {
            *levels.entry(bag.blood_type).or_default() += 1;
        }

        BloodType::ALL
            .into_iter()
            .filter(|t| levels[t] <= LOW_STOCK_THRESHOLD)
            .filter_map(|t| {
                let count = levels[&t];
                let message = if count == 0 {
                    format!("{t} is out of stock. Schedule donors or request a transfer.")
                } else {
                    format!("Only {count} unit of {t} left in inventory. Replenish soon.")
                };
                self.push(
                    NotificationDraft::new(
                        NotificationCategory::Inventory,
                        low_stock_title(t),
                        message,
                    ),
                    now,
                )
            })
            .collect()
    }

    /// Tell a donor actor about the first pending request they could fulfil
    pub fn check_personal_match<'a>(
        &mut self,
        actor: &Actor,
        recipients: impl IntoIterator<Item = &'a Recipient>,
        now: DateTime<Utc>,
    ) -> Option<AppNotification> {
        let donor_type = actor.donor_blood_type()?;
        let request = recipients
            .into_iter()
            .find(|r| can_donate(donor_type, r.blood_type))?;

        self.push(
            NotificationDraft::new(
                NotificationCategory::Match,
                format!("Match Available: {}", request.name),
                format!(
                    "{} needs {} ({}). Your {} blood is compatible.",
                    request.name, request.blood_type, request.condition, donor_type
                ),
            ),
            now,
        )
    }

    /// Record that a match request found a donor
    pub fn record_match(
        &mut self,
        request: &Recipient,
        donor: &Donor,
        now: DateTime<Utc>,
    ) -> Option<AppNotification> {
        self.push(
            NotificationDraft::new(
                NotificationCategory::Match,
                format!("Donor Matched: {}", request.name),
                format!(
                    "{} ({}) can donate to {} who needs {}.",
                    donor.name, donor.blood_type, request.name, request.blood_type
                ),
            ),
            now,
        )
    }

    /// Record that collections were replaced by another client's changes
    pub fn record_external_refresh(
        &mut self,
        collections: &[Collection],
        now: DateTime<Utc>,
    ) -> Option<AppNotification> {
        if collections.is_empty() {
            return None;
        }
        let names: Vec<&str> = collections.iter().map(|c| c.as_str()).collect();
        self.push(
            NotificationDraft::new(
                NotificationCategory::System,
                "Directory Synced",
                format!("Updated from another session: {}.", names.join(", ")),
            ),
            now,
        )
    }
}
