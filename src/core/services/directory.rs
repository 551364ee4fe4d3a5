//! Directory store - donors, match requests, blood bags and the resource ledger
//!
//! All collections are kept newest first: new records are prepended, and the
//! matcher relies on that order. Every operation either applies completely or
//! not at all. Nothing here performs I/O.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;

use crate::core::error::DomainError;
use crate::core::models::{
    BloodBagUnit, BloodType, Collection, DEFAULT_CONDITION, DEFAULT_DONOR_AGE,
    DEFAULT_REQUEST_AGE, DEFAULT_REQUEST_CONTACT, DEFAULT_VOLUME, Donor, DonorUpdate,
    IdSequences, NewDonor, NewMatchRequest, NewResourceDonation, Outcome, Recipient,
    ResourceDonation, ResourceKind, Snapshot,
};

use super::compatibility::find_best_match;
use super::ids::{BAG_PREFIX, DONOR_PREFIX, REQUEST_PREFIX, RESOURCE_PREFIX, next_id};

static CONTACT_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[0-9]{10}$").ok());

/// Whether `contact` is exactly ten ASCII digits
#[must_use]
pub fn is_valid_contact(contact: &str) -> bool {
    match CONTACT_RE.as_ref() {
        Some(re) => re.is_match(contact),
        None => contact.len() == 10 && contact.bytes().all(|b| b.is_ascii_digit()),
    }
}

/// A submitted request together with the donor it was matched to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchOutcome {
    /// The stored request
    pub request: Recipient,
    /// First compatible donor at submission time
    pub matched: Option<Donor>,
}

/// In-memory donors, requests, inventory and resource ledger
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    donors: Vec<Donor>,
    recipients: Vec<Recipient>,
    bags: Vec<BloodBagUnit>,
    resources: Vec<ResourceDonation>,
    sequences: IdSequences,
}

impl Directory {
    /// Empty directory
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory holding the collections of `snapshot` (notifications are ignored)
    #[must_use]
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            donors: snapshot.donors.clone(),
            recipients: snapshot.recipients.clone(),
            bags: snapshot.bags.clone(),
            resources: snapshot.resources.clone(),
            sequences: snapshot.sequences,
        }
    }

    /// Copy the directory's collections into `snapshot`
    pub fn write_into(&self, snapshot: &mut Snapshot) {
        snapshot.donors.clone_from(&self.donors);
        snapshot.recipients.clone_from(&self.recipients);
        snapshot.bags.clone_from(&self.bags);
        snapshot.resources.clone_from(&self.resources);
        for c in Collection::ALL.into_iter().filter(|c| *c != Collection::Notifications) {
            snapshot.sequences.raise(c, self.sequences.get(c));
        }
    }

    // === Donors ===

    /// Registered donors, newest first
    #[must_use]
    pub fn donors(&self) -> &[Donor] {
        &self.donors
    }

    /// Donor by id
    #[must_use]
    pub fn donor(&self, id: &str) -> Option<&Donor> {
        self.donors.iter().find(|d| d.id == id)
    }

    /// Register a donor, stamping today's date as the last donation
    pub fn register_donor(&mut self, input: NewDonor, today: NaiveDate) -> Result<Donor, DomainError> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("Donor name cannot be empty"));
        }
        let contact = input.contact.trim();
        if !is_valid_contact(contact) {
            return Err(DomainError::validation("Contact number must be exactly 10 digits"));
        }

        let donor = Donor {
            id: next_id(
                DONOR_PREFIX,
                &mut self.sequences.donors,
                self.donors.iter().map(|d| d.id.as_str()),
            ),
            name: name.to_string(),
            age: input.age.unwrap_or(DEFAULT_DONOR_AGE),
            blood_type: input.blood_type,
            contact: contact.to_string(),
            email: input.email.filter(|e| !e.trim().is_empty()),
            last_donation: today,
        };

        self.donors.insert(0, donor.clone());
        Ok(donor)
    }

    /// Merge `update` into the donor with `id`
    ///
    /// A supplied contact or name is validated like a registration; an unknown
    /// id is [`Outcome::NotFound`].
    pub fn update_donor(
        &mut self,
        id: &str,
        mut update: DonorUpdate,
    ) -> Result<Outcome<Donor>, DomainError> {
        if let Some(contact) = update.contact.as_mut() {
            *contact = contact.trim().to_string();
            if !is_valid_contact(contact) {
                return Err(DomainError::validation("Contact number must be exactly 10 digits"));
            }
        }
        if let Some(name) = update.name.as_mut() {
            *name = name.trim().to_string();
            if name.is_empty() {
                return Err(DomainError::validation("Donor name cannot be empty"));
            }
        }

        let Some(donor) = self.donors.iter_mut().find(|d| d.id == id) else {
            return Ok(Outcome::NotFound);
        };
        donor.apply(update);
        Ok(Outcome::Applied(donor.clone()))
    }

    /// Remove the donor with `id`
    pub fn remove_donor(&mut self, id: &str) -> Outcome<Donor> {
        let index = self.donors.iter().position(|d| d.id == id);
        index.map(|i| self.donors.remove(i)).into()
    }

    /// First compatible donor for `blood_type`, in current order
    #[must_use]
    pub fn find_match(&self, blood_type: BloodType) -> Option<&Donor> {
        find_best_match(&self.donors, blood_type)
    }

    // === Match requests ===

    /// Match requests, newest first
    #[must_use]
    pub fn recipients(&self) -> &[Recipient] {
        &self.recipients
    }

    /// Store a match request and look up a donor for it
    pub fn submit_match_request(
        &mut self,
        input: NewMatchRequest,
    ) -> Result<MatchOutcome, DomainError> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("Recipient name cannot be empty"));
        }

        let condition = input
            .condition
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_CONDITION.to_string());
        let contact = input
            .contact
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_REQUEST_CONTACT.to_string());

        let request = Recipient {
            id: next_id(
                REQUEST_PREFIX,
                &mut self.sequences.recipients,
                self.recipients.iter().map(|r| r.id.as_str()),
            ),
            name: name.to_string(),
            age: input.age.unwrap_or(DEFAULT_REQUEST_AGE),
            blood_type: input.blood_type,
            contact,
            email: input.email.filter(|e| !e.trim().is_empty()),
            condition,
        };

        self.recipients.insert(0, request.clone());
        let matched = self.find_match(request.blood_type).cloned();
        Ok(MatchOutcome { request, matched })
    }

    // === Inventory ===

    /// Blood bag units, newest first
    #[must_use]
    pub fn bags(&self) -> &[BloodBagUnit] {
        &self.bags
    }

    /// Units on hand per blood type (every type present, zero included)
    #[must_use]
    pub fn stock_levels(&self) -> BTreeMap<BloodType, usize> {
        let mut levels: BTreeMap<BloodType, usize> =
            BloodType::ALL.into_iter().map(|t| (t, 0)).collect();
        for bag in &self.bags {
            *levels.entry(bag.blood_type).or_default() += 1;
        }
        levels
    }

    /// Take a unit into inventory
    pub fn intake_blood_bag(
        &mut self,
        blood_type: BloodType,
        volume: &str,
        today: NaiveDate,
    ) -> BloodBagUnit {
        let volume = match volume.trim() {
            "" => DEFAULT_VOLUME.to_string(),
            v => v.to_string(),
        };
        let unit = BloodBagUnit::new(
            next_id(
                BAG_PREFIX,
                &mut self.sequences.bags,
                self.bags.iter().map(|b| b.id.as_str()),
            ),
            blood_type,
            volume,
            today,
        );
        self.bags.insert(0, unit.clone());
        unit
    }

    /// Remove a unit from inventory for good
    pub fn dispatch_blood_bag(&mut self, id: &str) -> Outcome<BloodBagUnit> {
        let index = self.bags.iter().position(|b| b.id == id);
        index.map(|i| self.bags.remove(i)).into()
    }

    // === Resource ledger ===

    /// Resource donations, newest first
    #[must_use]
    pub fn resources(&self) -> &[ResourceDonation] {
        &self.resources
    }

    /// Append a resource donation to the ledger
    ///
    /// Money is only accepted once the caller has verified the payment.
    pub fn record_resource_donation(
        &mut self,
        input: NewResourceDonation,
        today: NaiveDate,
    ) -> Result<ResourceDonation, DomainError> {
        let donor_name = input.donor_name.trim();
        let details = input.details.trim();
        if donor_name.is_empty() {
            return Err(DomainError::validation("Donor name cannot be empty"));
        }
        if details.is_empty() {
            return Err(DomainError::validation("Donation details cannot be empty"));
        }
        if input.kind == ResourceKind::Money && !input.payment_verified {
            return Err(DomainError::validation(
                "Money donations require a verified payment",
            ));
        }

        let entry = ResourceDonation {
            id: next_id(
                RESOURCE_PREFIX,
                &mut self.sequences.resources,
                self.resources.iter().map(|r| r.id.as_str()),
            ),
            kind: input.kind,
            donor_name: donor_name.to_string(),
            details: details.to_string(),
            date: today,
        };
        self.resources.insert(0, entry.clone());
        Ok(entry)
    }

    // === Wholesale replacement (external sync) ===

    /// Take `collection` from `source` (last writer wins)
    ///
    /// The id mark is merged rather than replaced, so it never goes down.
    /// Notifications are not part of the directory and are ignored.
    pub fn replace_from(&mut self, collection: Collection, source: &Snapshot) {
        match collection {
            Collection::Donors => self.donors.clone_from(&source.donors),
            Collection::Recipients => self.recipients.clone_from(&source.recipients),
            Collection::Bags => self.bags.clone_from(&source.bags),
            Collection::Resources => self.resources.clone_from(&source.resources),
            Collection::Notifications => return,
        }
        self.sequences.raise(collection, source.sequences.get(collection));
    }
}
