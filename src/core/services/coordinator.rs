//! Coordinator - the single owner of directory state
//!
//! Every mutation follows the same sequence: apply in memory, run the alert
//! triggers, then save the touched collections. A failed save never rolls the
//! in-memory change back; the caller is told durability is uncertain instead.

use std::collections::BTreeMap;

use crate::core::error::DomainError;
use crate::core::models::{
    Actor, AppNotification, BloodBagUnit, BloodType, Collection, Donor, DonorUpdate, NewDonor,
    NewMatchRequest, NewResourceDonation, NotificationSettings, OutboundMessage, Outcome,
    ResourceDonation, Snapshot,
};
use crate::core::ports::{Clock, Messenger, Persistence};

use super::alerting::AlertEngine;
use super::directory::{Directory, MatchOutcome};
use super::messaging::{alert_confirmation, donor_alert, urgent_request_email};

/// Warning attached to mutations whose save failed
pub const UNSAVED_WARNING: &str = "Change applied locally but may not be saved";

/// Whether a mutation reached durable storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Durability {
    /// Every touched collection was saved
    Saved,
    /// The change stands in memory, but at least one save failed
    Uncertain(String),
}

impl Durability {
    /// Whether every save succeeded
    #[must_use]
    pub const fn is_saved(&self) -> bool {
        matches!(self, Self::Saved)
    }

    /// Warning text for the caller, if the save failed
    #[must_use]
    pub fn warning(&self) -> Option<&str> {
        match self {
            Self::Saved => None,
            Self::Uncertain(warning) => Some(warning),
        }
    }
}

/// Result of a mutation plus what happened around it
#[derive(Debug, Clone)]
pub struct Persisted<T> {
    /// The mutation's result
    pub value: T,
    /// Whether it was saved
    pub durability: Durability,
    /// Notifications raised by the mutation
    pub alerts: Vec<AppNotification>,
}

/// Owns the directory, the alert feed and the collaborators
pub struct Coordinator {
    directory: Directory,
    alerts: AlertEngine,
    store: Box<dyn Persistence>,
    messenger: Box<dyn Messenger>,
    clock: Box<dyn Clock>,
    revision: u64,
    touched: BTreeMap<Collection, u64>,
}

impl std::fmt::Debug for Coordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Coordinator")
            .field("directory", &self.directory)
            .field("alerts", &self.alerts)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

impl Coordinator {
    /// Load the directory from `store`
    ///
    /// No triggers run on open; call [`Self::check_inventory`] to evaluate
    /// stock levels.
    pub fn open(
        store: Box<dyn Persistence>,
        messenger: Box<dyn Messenger>,
        clock: Box<dyn Clock>,
        settings: NotificationSettings,
    ) -> anyhow::Result<Self> {
        let snapshot = store.load()?;
        log::debug!(
            "Loaded {} donors, {} requests, {} bags, {} resources, {} notifications",
            snapshot.donors.len(),
            snapshot.recipients.len(),
            snapshot.bags.len(),
            snapshot.resources.len(),
            snapshot.notifications.len()
        );

        Ok(Self {
            directory: Directory::from_snapshot(&snapshot),
            alerts: AlertEngine::with_feed(
                settings,
                snapshot.notifications,
                snapshot.sequences.notifications,
            ),
            store,
            messenger,
            clock,
            revision: 0,
            touched: BTreeMap::new(),
        })
    }

    // === Reads ===

    /// The directory
    #[must_use]
    pub const fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Notifications, newest first
    #[must_use]
    pub fn notifications(&self) -> &[AppNotification] {
        self.alerts.notifications()
    }

    /// Number of unread notifications
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.alerts.unread_count()
    }

    /// Current alert switches
    #[must_use]
    pub const fn settings(&self) -> NotificationSettings {
        self.alerts.settings()
    }

    /// Change counter, bumped whenever any collection changes
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Collections changed after revision `since`
    #[must_use]
    pub fn changed_since(&self, since: u64) -> Vec<Collection> {
        self.touched
            .iter()
            .filter(|(_, rev)| **rev > since)
            .map(|(c, _)| *c)
            .collect()
    }

    /// Everything, as the persistence port sees it
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let mut snapshot = Snapshot {
            notifications: self.alerts.notifications().to_vec(),
            ..Snapshot::default()
        };
        snapshot
            .sequences
            .raise(Collection::Notifications, self.alerts.issued());
        self.directory.write_into(&mut snapshot);
        snapshot
    }

    /// First compatible donor for `blood_type`; records nothing
    #[must_use]
    pub fn find_match(&self, blood_type: BloodType) -> Option<&Donor> {
        self.directory.find_match(blood_type)
    }

    // === Donors ===

    /// Register a donor
    pub fn register_donor(&mut self, input: NewDonor) -> Result<Persisted<Donor>, DomainError> {
        let donor = self.directory.register_donor(input, self.clock.today())?;
        log::info!("Registered donor {} ({})", donor.id, donor.blood_type);
        Ok(self.commit(donor, &[Collection::Donors], Vec::new()))
    }

    /// Merge `update` into a donor
    pub fn update_donor(
        &mut self,
        id: &str,
        update: DonorUpdate,
    ) -> Result<Outcome<Persisted<Donor>>, DomainError> {
        match self.directory.update_donor(id, update)? {
            Outcome::Applied(donor) => {
                log::info!("Updated donor {}", donor.id);
                Ok(Outcome::Applied(self.commit(donor, &[Collection::Donors], Vec::new())))
            },
            Outcome::NotFound => {
                log::debug!("Update of unknown donor {id} ignored");
                Ok(Outcome::NotFound)
            },
        }
    }

    /// Remove a donor
    pub fn remove_donor(&mut self, id: &str) -> Outcome<Persisted<Donor>> {
        match self.directory.remove_donor(id) {
            Outcome::Applied(donor) => {
                log::info!("Removed donor {}", donor.id);
                Outcome::Applied(self.commit(donor, &[Collection::Donors], Vec::new()))
            },
            Outcome::NotFound => {
                log::debug!("Removal of unknown donor {id} ignored");
                Outcome::NotFound
            },
        }
    }

    // === Match requests ===

    /// Store a match request, look up a donor and run the match triggers
    pub fn submit_match_request(
        &mut self,
        input: NewMatchRequest,
        actor: Option<&Actor>,
    ) -> Result<Persisted<MatchOutcome>, DomainError> {
        let outcome = self.directory.submit_match_request(input)?;
        let now = self.clock.now();

        let mut raised = Vec::new();
        match &outcome.matched {
            Some(donor) => {
                log::info!(
                    "Request {} for {} matched donor {}",
                    outcome.request.id,
                    outcome.request.blood_type,
                    donor.id
                );
                raised.extend(self.alerts.record_match(&outcome.request, donor, now));
            },
            None => log::info!(
                "Request {} for {} has no compatible donor",
                outcome.request.id,
                outcome.request.blood_type
            ),
        }
        if let Some(actor) = actor {
            // The submitter's own request is not a match for them.
            let others = self
                .directory
                .recipients()
                .iter()
                .filter(|r| r.id != outcome.request.id);
            raised.extend(self.alerts.check_personal_match(actor, others, now));
        }

        Ok(self.commit(outcome, &[Collection::Recipients], raised))
    }

    /// Tell a donor actor about a pending request they could fulfil
    pub fn evaluate_personal_match(&mut self, actor: &Actor) -> Persisted<Option<AppNotification>> {
        let now = self.clock.now();
        let raised: Vec<_> = self
            .alerts
            .check_personal_match(actor, self.directory.recipients(), now)
            .into_iter()
            .collect();
        let first = raised.first().cloned();
        self.commit(first, &[], raised)
    }

    // === Inventory ===

    /// Take a unit into inventory
    pub fn intake_blood_bag(&mut self, blood_type: BloodType, volume: &str) -> Persisted<BloodBagUnit> {
        let unit = self
            .directory
            .intake_blood_bag(blood_type, volume, self.clock.today());
        log::info!("Bag {} ({}) taken into inventory", unit.id, unit.blood_type);
        let raised = self.alerts.check_low_stock(self.directory.bags(), self.clock.now());
        self.commit(unit, &[Collection::Bags], raised)
    }

    /// Dispatch a unit; it leaves inventory for good
    pub fn dispatch_blood_bag(&mut self, id: &str) -> Outcome<Persisted<BloodBagUnit>> {
        match self.directory.dispatch_blood_bag(id) {
            Outcome::Applied(unit) => {
                log::info!("Bag {} ({}) dispatched", unit.id, unit.blood_type);
                let raised = self.alerts.check_low_stock(self.directory.bags(), self.clock.now());
                Outcome::Applied(self.commit(unit, &[Collection::Bags], raised))
            },
            Outcome::NotFound => {
                log::debug!("Dispatch of unknown bag {id} ignored");
                Outcome::NotFound
            },
        }
    }

    /// Run the low-stock trigger against current inventory
    pub fn check_inventory(&mut self) -> Persisted<Vec<AppNotification>> {
        let raised = self.alerts.check_low_stock(self.directory.bags(), self.clock.now());
        self.commit(raised.clone(), &[], raised)
    }

    // === Resource ledger ===

    /// Record a resource donation
    pub fn record_resource_donation(
        &mut self,
        input: NewResourceDonation,
    ) -> Result<Persisted<ResourceDonation>, DomainError> {
        let entry = self
            .directory
            .record_resource_donation(input, self.clock.today())?;
        log::info!("Recorded {} donation {} from {}", entry.kind, entry.id, entry.donor_name);
        Ok(self.commit(entry, &[Collection::Resources], Vec::new()))
    }

    // === Notification feed ===

    /// Mark the whole feed read
    pub fn mark_all_read(&mut self) -> Persisted<usize> {
        let changed = self.alerts.mark_all_read();
        let touched: &[Collection] = if changed > 0 {
            &[Collection::Notifications]
        } else {
            &[]
        };
        self.commit(changed, touched, Vec::new())
    }

    /// Clear the feed
    pub fn clear_notifications(&mut self) -> Persisted<usize> {
        let removed = self.alerts.clear();
        log::info!("Cleared {removed} notifications");
        self.commit(removed, &[Collection::Notifications], Vec::new())
    }

    /// Change which alert categories are produced (session only)
    pub fn set_settings(&mut self, settings: NotificationSettings) {
        log::info!("Alert settings changed: {settings:?}");
        self.alerts.set_settings(settings);
    }

    // === Messaging ===

    /// Send a donor an SMS alert; returns the confirmation text
    pub fn notify_donor(&self, id: &str) -> Result<Outcome<String>, DomainError> {
        let Some(donor) = self.directory.donor(id) else {
            return Ok(Outcome::NotFound);
        };
        self.deliver(&donor_alert(donor))?;
        let confirmation = alert_confirmation(donor);
        log::info!("{confirmation}");
        Ok(Outcome::Applied(confirmation))
    }

    /// Send the urgent blood request e-mail
    pub fn send_urgent_request(
        &self,
        to: &str,
        donor_name: &str,
    ) -> Result<OutboundMessage, DomainError> {
        let message = urgent_request_email(to, donor_name)?;
        self.deliver(&message)?;
        log::info!("Urgent request sent to {}", message.to);
        Ok(message)
    }

    fn deliver(&self, message: &OutboundMessage) -> Result<(), DomainError> {
        self.messenger.deliver(message).map_err(|err| {
            log::warn!("Delivery to {} failed: {err:#}", message.to);
            DomainError::Collaborator {
                collaborator: "messenger",
                message: err.to_string(),
            }
        })
    }

    // === External synchronization ===

    /// Pull in changes written by other clients
    ///
    /// Changed collections are replaced wholesale (last writer wins). A
    /// change to a directory collection raises one refresh notification; a
    /// feed-only change is applied silently. Replaced inventory runs the
    /// low-stock trigger. Nothing is saved here, so a client never reacts to
    /// its own refresh; raised alerts reach the file with the next save.
    pub fn sync_external(&mut self) -> anyhow::Result<Vec<Collection>> {
        let Some(external) = self.store.poll_external()? else {
            return Ok(Vec::new());
        };

        let current = self.snapshot();
        let changed = current.changed_collections(&external);
        if changed.is_empty() {
            log::debug!("External write carried no changes");
            return Ok(changed);
        }

        for &collection in &changed {
            match collection {
                Collection::Notifications => self.alerts.replace_feed(
                    external.notifications.clone(),
                    external.sequences.notifications,
                ),
                _ => self.directory.replace_from(collection, &external),
            }
        }

        let now = self.clock.now();
        let domain: Vec<Collection> = changed
            .iter()
            .copied()
            .filter(|c| *c != Collection::Notifications)
            .collect();
        let mut raised: Vec<AppNotification> = self
            .alerts
            .record_external_refresh(&domain, now)
            .into_iter()
            .collect();
        if changed.contains(&Collection::Bags) {
            raised.extend(self.alerts.check_low_stock(self.directory.bags(), now));
        }

        let mut touched = changed.clone();
        if !raised.is_empty() && !touched.contains(&Collection::Notifications) {
            touched.push(Collection::Notifications);
        }
        self.bump(&touched);
        log::info!("Synced external changes: {changed:?}");
        Ok(changed)
    }

    // === Internals ===

    fn bump(&mut self, collections: &[Collection]) {
        if collections.is_empty() {
            return;
        }
        self.revision += 1;
        for &c in collections {
            self.touched.insert(c, self.revision);
        }
    }

    fn commit<T>(
        &mut self,
        value: T,
        collections: &[Collection],
        alerts: Vec<AppNotification>,
    ) -> Persisted<T> {
        let mut touched = collections.to_vec();
        if !alerts.is_empty() && !touched.contains(&Collection::Notifications) {
            touched.push(Collection::Notifications);
        }
        self.bump(&touched);

        let snapshot = self.snapshot();
        let failures: Vec<String> = touched
            .iter()
            .filter_map(|&c| {
                self.store.save(c, &snapshot).err().map(|err| {
                    log::warn!("Saving {c} failed: {err:#}");
                    format!("{c}: {err}")
                })
            })
            .collect();

        let durability = if failures.is_empty() {
            Durability::Saved
        } else {
            Durability::Uncertain(format!("{UNSAVED_WARNING} ({})", failures.join("; ")))
        };

        Persisted {
            value,
            durability,
            alerts,
        }
    }
}
