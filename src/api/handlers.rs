//! Pure API handlers
//!
//! These handlers contain business logic and are HTTP-agnostic.
//! They take the coordinator plus typed input and return `Result<T, ApiError>`.

use crate::core::models::{
    Actor, BloodBagUnit, BloodType, Donor, DonorUpdate, NewDonor, NewMatchRequest,
    NewResourceDonation, NotificationSettings, Outcome, ResourceDonation,
};
use crate::core::ports::TextCompletion;
use crate::core::services::{
    ChatReply, Coordinator, LOW_STOCK_THRESHOLD, MatchOutcome, compatible_donor_types, reply,
};

use super::error::ApiError;
use super::types::{
    AlertCheckData, BagIntakeRequest, BagsData, ChatRequest, CompatibilityData, DonorsData,
    EventsData, MatchData, MatchLookupRequest, MessageData, MutationData, NotificationsData,
    RecipientsData, ResourcesData, StatusData, UpdateSettingsRequest, UrgentEmailRequest,
};

// =============================================================================
// STATUS
// =============================================================================

/// Get overall status
pub fn get_status(coordinator: &Coordinator) -> Result<StatusData, ApiError> {
    let directory = coordinator.directory();
    let stock = directory.stock_levels();
    let low_stock = stock
        .iter()
        .filter(|(_, count)| **count <= LOW_STOCK_THRESHOLD)
        .map(|(t, _)| *t)
        .collect();

    Ok(StatusData {
        donors: directory.donors().len(),
        requests: directory.recipients().len(),
        bags: directory.bags().len(),
        resources: directory.resources().len(),
        unread_notifications: coordinator.unread_count(),
        stock,
        low_stock,
        revision: coordinator.revision(),
    })
}

/// Collections changed after revision `since`
pub fn get_events(coordinator: &Coordinator, since: u64) -> Result<EventsData, ApiError> {
    Ok(EventsData {
        revision: coordinator.revision(),
        changed: coordinator.changed_since(since),
    })
}

// =============================================================================
// DONORS
// =============================================================================

/// List donors
pub fn list_donors(coordinator: &Coordinator) -> Result<DonorsData, ApiError> {
    Ok(DonorsData {
        donors: coordinator.directory().donors().to_vec(),
    })
}

/// Register a donor
pub fn create_donor(
    coordinator: &mut Coordinator,
    req: NewDonor,
) -> Result<MutationData<Donor>, ApiError> {
    Ok(coordinator.register_donor(req)?.into())
}

/// Update a donor
pub fn update_donor(
    coordinator: &mut Coordinator,
    id: &str,
    req: DonorUpdate,
) -> Result<MutationData<Donor>, ApiError> {
    if req.is_empty() {
        return Err(ApiError::bad_request("No fields to update"));
    }
    match coordinator.update_donor(id, req)? {
        Outcome::Applied(persisted) => Ok(persisted.into()),
        Outcome::NotFound => Err(donor_not_found(id)),
    }
}

/// Remove a donor
pub fn delete_donor(
    coordinator: &mut Coordinator,
    id: &str,
) -> Result<MutationData<Donor>, ApiError> {
    match coordinator.remove_donor(id) {
        Outcome::Applied(persisted) => Ok(persisted.into()),
        Outcome::NotFound => Err(donor_not_found(id)),
    }
}

/// Send a donor the dispatch alert
pub fn alert_donor(coordinator: &Coordinator, id: &str) -> Result<MessageData, ApiError> {
    let to = coordinator
        .directory()
        .donor(id)
        .map(|d| d.contact.clone())
        .ok_or_else(|| donor_not_found(id))?;
    match coordinator.notify_donor(id)? {
        Outcome::Applied(message) => Ok(MessageData { to, message }),
        Outcome::NotFound => Err(donor_not_found(id)),
    }
}

fn donor_not_found(id: &str) -> ApiError {
    ApiError::not_found(format!("Donor '{id}' not found"))
}

// =============================================================================
// MATCHING
// =============================================================================

/// Compatible donor types for a recipient type
pub fn get_compatibility(blood_type: &str) -> Result<CompatibilityData, ApiError> {
    let recipient: BloodType = blood_type.parse().map_err(ApiError::bad_request)?;
    Ok(CompatibilityData {
        recipient,
        donor_types: compatible_donor_types(recipient).to_vec(),
    })
}

/// Look up the first compatible donor without recording a request
pub fn lookup_match(
    coordinator: &Coordinator,
    req: &MatchLookupRequest,
) -> Result<MatchData, ApiError> {
    Ok(MatchData {
        blood_type: req.blood_type,
        donor_types: compatible_donor_types(req.blood_type).to_vec(),
        matched: coordinator.find_match(req.blood_type).cloned(),
    })
}

/// List match requests
pub fn list_recipients(coordinator: &Coordinator) -> Result<RecipientsData, ApiError> {
    Ok(RecipientsData {
        recipients: coordinator.directory().recipients().to_vec(),
    })
}

/// Submit a match request
pub fn submit_match_request(
    coordinator: &mut Coordinator,
    req: NewMatchRequest,
    actor: &Actor,
) -> Result<MutationData<MatchOutcome>, ApiError> {
    Ok(coordinator.submit_match_request(req, Some(actor))?.into())
}

// =============================================================================
// INVENTORY
// =============================================================================

/// List blood bags
pub fn list_bags(coordinator: &Coordinator) -> Result<BagsData, ApiError> {
    Ok(BagsData {
        bags: coordinator.directory().bags().to_vec(),
    })
}

/// Take a blood bag into inventory
pub fn intake_bag(
    coordinator: &mut Coordinator,
    req: &BagIntakeRequest,
) -> Result<MutationData<BloodBagUnit>, ApiError> {
    let volume = req.volume.as_deref().unwrap_or_default();
    Ok(coordinator.intake_blood_bag(req.blood_type, volume).into())
}

/// Dispatch a blood bag
pub fn dispatch_bag(
    coordinator: &mut Coordinator,
    id: &str,
) -> Result<MutationData<BloodBagUnit>, ApiError> {
    match coordinator.dispatch_blood_bag(id) {
        Outcome::Applied(persisted) => Ok(persisted.into()),
        Outcome::NotFound => Err(ApiError::not_found(format!("Blood bag '{id}' not found"))),
    }
}

// =============================================================================
// RESOURCES
// =============================================================================

/// List resource donations
pub fn list_resources(coordinator: &Coordinator) -> Result<ResourcesData, ApiError> {
    Ok(ResourcesData {
        resources: coordinator.directory().resources().to_vec(),
    })
}

/// Record a resource donation
pub fn create_resource(
    coordinator: &mut Coordinator,
    req: NewResourceDonation,
) -> Result<MutationData<ResourceDonation>, ApiError> {
    Ok(coordinator.record_resource_donation(req)?.into())
}

// =============================================================================
// NOTIFICATIONS
// =============================================================================

/// List notifications
pub fn list_notifications(coordinator: &Coordinator) -> Result<NotificationsData, ApiError> {
    Ok(NotificationsData {
        notifications: coordinator.notifications().to_vec(),
        unread: coordinator.unread_count(),
    })
}

/// Mark every notification read
pub fn mark_notifications_read(
    coordinator: &mut Coordinator,
) -> Result<MutationData<usize>, ApiError> {
    Ok(coordinator.mark_all_read().into())
}

/// Clear the notification feed
pub fn clear_notifications(coordinator: &mut Coordinator) -> Result<MutationData<usize>, ApiError> {
    Ok(coordinator.clear_notifications().into())
}

/// Run the low-stock and personal-match triggers
pub fn check_alerts(coordinator: &mut Coordinator, actor: &Actor) -> Result<AlertCheckData, ApiError> {
    let inventory = coordinator.check_inventory();
    let personal = coordinator.evaluate_personal_match(actor);

    let saved = inventory.durability.is_saved() && personal.durability.is_saved();
    let mut alerts = inventory.alerts;
    alerts.extend(personal.alerts);
    Ok(AlertCheckData { alerts, saved })
}

/// Current alert switches
pub fn get_settings(coordinator: &Coordinator) -> Result<NotificationSettings, ApiError> {
    Ok(coordinator.settings())
}

/// Change alert switches
pub fn update_settings(
    coordinator: &mut Coordinator,
    req: &UpdateSettingsRequest,
) -> Result<NotificationSettings, ApiError> {
    let mut settings = coordinator.settings();
    if let Some(v) = req.inventory_alerts {
        settings.inventory_alerts = v;
    }
    if let Some(v) = req.match_alerts {
        settings.match_alerts = v;
    }
    if let Some(v) = req.system_alerts {
        settings.system_alerts = v;
    }
    coordinator.set_settings(settings);
    Ok(settings)
}

// =============================================================================
// MESSAGING & CHAT
// =============================================================================

/// Send the urgent blood request e-mail
pub fn send_urgent_email(
    coordinator: &Coordinator,
    req: &UrgentEmailRequest,
) -> Result<MessageData, ApiError> {
    let message = coordinator.send_urgent_request(
        req.to.as_deref().unwrap_or_default(),
        req.donor_name.as_deref().unwrap_or_default(),
    )?;
    Ok(MessageData {
        message: format!("Urgent request sent to {}", message.to),
        to: message.to,
    })
}

/// Answer a chat message
pub fn chat(req: &ChatRequest, backend: &dyn TextCompletion) -> Result<ChatReply, ApiError> {
    if req.message.trim().is_empty() {
        return Err(ApiError::bad_request("Message cannot be empty"));
    }
    Ok(reply(&req.message, backend))
}
