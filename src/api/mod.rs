//! HTTP-agnostic API layer
//!
//! This module provides typed request/response structures and handlers that
//! can be used by any HTTP server implementation or directly by clients.
//!
//! ## Design
//!
//! - **Handlers are plain functions**: Take the coordinator and typed input, return `Result<T, ApiError>`
//! - **Types are framework-agnostic**: No HTTP types leak into this module
//! - **Errors carry HTTP semantics**: `ApiError` knows its status code for translation

mod error;
mod handlers;
mod types;

pub use error::{ApiError, ApiErrorData, ErrorCode};
pub use handlers::{
    alert_donor, chat, check_alerts, clear_notifications, create_donor, create_resource,
    delete_donor, dispatch_bag, get_compatibility, get_events, get_settings, get_status,
    intake_bag, list_bags, list_donors, list_notifications, list_recipients, list_resources,
    lookup_match, mark_notifications_read, send_urgent_email, submit_match_request,
    update_donor, update_settings,
};
pub use types::{
    AlertCheckData, ApiResponse, BagIntakeRequest, BagsData, ChatRequest, CompatibilityData,
    DonorsData, EventsData, MatchData, MatchLookupRequest, MessageData, MutationData,
    NotificationsData, RecipientsData, ResourcesData, StatusData, UpdateSettingsRequest,
    UrgentEmailRequest,
};
