//! tiny_http server adapter
//!
//! Handles routing, body parsing, and response conversion for tiny_http.

use std::io::Cursor;
use std::io::Read as _;

use serde::{Serialize, de::DeserializeOwned};
use tiny_http::{Header, Method, Request, Response, StatusCode};

use lifeflow::api::{
    self, ApiError, ApiResponse, BagIntakeRequest, ChatRequest, MatchLookupRequest,
    UpdateSettingsRequest, UrgentEmailRequest,
};
use lifeflow::core::models::{
    Actor, DonorUpdate, NewDonor, NewMatchRequest, NewResourceDonation, Role,
};
use lifeflow::core::ports::TextCompletion;
use lifeflow::core::services::Coordinator;

/// Header naming the caller's role
pub const ROLE_HEADER: &str = "X-Actor-Role";
/// Header carrying the caller's blood type
pub const BLOOD_TYPE_HEADER: &str = "X-Actor-Blood-Type";
/// Header carrying the caller's display name
pub const NAME_HEADER: &str = "X-Actor-Name";

// =============================================================================
// REQUEST HANDLING
// =============================================================================

/// Handle an API request and return a response
///
/// This is the main routing function that maps URL paths to handlers.
pub fn handle_api_request(
    request: &mut Request,
    coordinator: &mut Coordinator,
    assistant: &dyn TextCompletion,
) -> Response<Cursor<Vec<u8>>> {
    let url = request.url().to_string();
    let method = request.method().clone();
    let actor = actor_from_headers(request);

    let (path, query) = url.split_once('?').unwrap_or((url.as_str(), ""));

    // Supports both /api/v1/... (versioned) and /api/... (unversioned)
    let api_path = path
        .strip_prefix("/api/v1")
        .or_else(|| path.strip_prefix("/api"))
        .unwrap_or(path);

    log::debug!("{method} {api_path} as {}", actor.role);

    match (&method, api_path) {
        // GET endpoints
        (&Method::Get, "/status") => handle_result(api::get_status(coordinator)),
        (&Method::Get, "/donors") => handle_result(api::list_donors(coordinator)),
        (&Method::Get, "/recipients") => handle_result(api::list_recipients(coordinator)),
        (&Method::Get, "/bags") => handle_result(api::list_bags(coordinator)),
        (&Method::Get, "/resources") => handle_result(api::list_resources(coordinator)),
        (&Method::Get, "/notifications") => handle_result(api::list_notifications(coordinator)),
        (&Method::Get, "/settings/alerts") => handle_result(api::get_settings(coordinator)),
        (&Method::Get, "/events") => match since_param(query) {
            Ok(since) => handle_result(api::get_events(coordinator, since)),
            Err(e) => error_response(&e),
        },

        // POST endpoints
        (&Method::Post, "/donors") => match read_json_body::<NewDonor>(request) {
            Ok(req) => handle_result(api::create_donor(coordinator, req)),
            Err(e) => error_response(&e),
        },
        (&Method::Post, "/match-requests") => match read_json_body::<NewMatchRequest>(request) {
            Ok(req) => handle_result(api::submit_match_request(coordinator, req, &actor)),
            Err(e) => error_response(&e),
        },
        (&Method::Post, "/match") => match read_json_body::<MatchLookupRequest>(request) {
            Ok(req) => handle_result(api::lookup_match(coordinator, &req)),
            Err(e) => error_response(&e),
        },
        (&Method::Post, "/bags") => match read_json_body::<BagIntakeRequest>(request) {
            Ok(req) => handle_result(api::intake_bag(coordinator, &req)),
            Err(e) => error_response(&e),
        },
        (&Method::Post, "/resources") => match read_json_body::<NewResourceDonation>(request) {
            Ok(req) => handle_result(api::create_resource(coordinator, req)),
            Err(e) => error_response(&e),
        },
        (&Method::Post, "/notifications/read") => {
            handle_result(api::mark_notifications_read(coordinator))
        },
        (&Method::Post, "/alerts/check") => handle_result(api::check_alerts(coordinator, &actor)),
        (&Method::Post, "/send-urgent-email") => {
            match read_json_body::<UrgentEmailRequest>(request) {
                Ok(req) => handle_result(api::send_urgent_email(coordinator, &req)),
                Err(e) => error_response(&e),
            }
        },
        (&Method::Post, "/chat") => match read_json_body::<ChatRequest>(request) {
            Ok(req) => handle_result(api::chat(&req, assistant)),
            Err(e) => error_response(&e),
        },

        // PATCH /settings/alerts
        (&Method::Patch, "/settings/alerts") => {
            match read_json_body::<UpdateSettingsRequest>(request) {
                Ok(req) => handle_result(api::update_settings(coordinator, &req)),
                Err(e) => error_response(&e),
            }
        },

        // DELETE /notifications
        (&Method::Delete, "/notifications") => handle_result(api::clear_notifications(coordinator)),

        // Compatibility row: GET /compatibility/{type}
        _ if method == Method::Get && path_param(api_path, "/compatibility/", "").is_some() => {
            let blood_type = path_param(api_path, "/compatibility/", "").unwrap_or_default();
            handle_result(api::get_compatibility(&percent_decode(blood_type)))
        },

        // Bag dispatch: POST /bags/{id}/dispatch
        _ if method == Method::Post && path_param(api_path, "/bags/", "/dispatch").is_some() => {
            let id = path_param(api_path, "/bags/", "/dispatch").unwrap_or_default();
            handle_result(api::dispatch_bag(coordinator, id))
        },

        // Donor alert: POST /donors/{id}/alert
        _ if method == Method::Post && path_param(api_path, "/donors/", "/alert").is_some() => {
            let id = path_param(api_path, "/donors/", "/alert").unwrap_or_default();
            handle_result(api::alert_donor(coordinator, id))
        },

        // Donor update: PATCH /donors/{id}
        _ if method == Method::Patch && path_param(api_path, "/donors/", "").is_some() => {
            let id = path_param(api_path, "/donors/", "").unwrap_or_default();
            match read_json_body::<DonorUpdate>(request) {
                Ok(req) => handle_result(api::update_donor(coordinator, id, req)),
                Err(e) => error_response(&e),
            }
        },

        // Donor delete: DELETE /donors/{id}
        _ if method == Method::Delete && path_param(api_path, "/donors/", "").is_some() => {
            let id = path_param(api_path, "/donors/", "").unwrap_or_default();
            handle_result(api::delete_donor(coordinator, id))
        },

        // 404 for unknown API routes
        _ => not_found_response(&format!("API endpoint not found: {method} {api_path}")),
    }
}

// =============================================================================
// REQUEST PARSING
// =============================================================================

/// The single path segment between `prefix` and `suffix`
fn path_param<'a>(path: &'a str, prefix: &str, suffix: &str) -> Option<&'a str> {
    let param = path.strip_prefix(prefix)?.strip_suffix(suffix)?;
    (!param.is_empty() && !param.contains('/')).then_some(param)
}

/// Decode `%XX` escapes in a path segment (either hex case)
///
/// Malformed escapes are kept as written.
fn percent_decode(segment: &str) -> String {
    let bytes = segment.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let escaped = (bytes[i] == b'%')
            .then(|| bytes.get(i + 1..i + 3))
            .flatten()
            .and_then(|hex| std::str::from_utf8(hex).ok())
            .and_then(|hex| u8::from_str_radix(hex, 16).ok());
        match escaped {
            Some(byte) => {
                decoded.push(byte);
                i += 3;
            },
            None => {
                decoded.push(bytes[i]);
                i += 1;
            },
        }
    }
    String::from_utf8_lossy(&decoded).into_owned()
}

/// `since` from the query string (0 when absent)
fn since_param(query: &str) -> Result<u64, ApiError> {
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix("since="))
        .map_or(Ok(0), |v| {
            v.parse()
                .map_err(|_| ApiError::bad_request(format!("Invalid since: {v}")))
        })
}

/// Build the acting user from request headers
fn actor_from_headers(request: &Request) -> Actor {
    let header = |name: &'static str| {
        request
            .headers()
            .iter()
            .find(|h| h.field.equiv(name))
            .map(|h| h.value.as_str().trim().to_string())
            .filter(|v| !v.is_empty())
    };

    Actor {
        role: header(ROLE_HEADER)
            .and_then(|r| r.parse::<Role>().ok())
            .unwrap_or_default(),
        blood_type: header(BLOOD_TYPE_HEADER).and_then(|t| t.parse().ok()),
        name: header(NAME_HEADER),
    }
}

/// Read and parse JSON body from request
fn read_json_body<T: DeserializeOwned>(request: &mut Request) -> Result<T, ApiError> {
    let mut body = String::new();
    request
        .as_reader()
        .read_to_string(&mut body)
        .map_err(|e| ApiError::bad_request(format!("Failed to read request body: {e}")))?;

    serde_json::from_str(&body).map_err(|e| ApiError::bad_request(format!("Invalid JSON: {e}")))
}

// =============================================================================
// RESPONSE CONVERSION
// =============================================================================

/// Convert a handler result to an HTTP response
fn handle_result<T: Serialize>(result: Result<T, ApiError>) -> Response<Cursor<Vec<u8>>> {
    match result {
        Ok(data) => success_response(data),
        Err(e) => error_response(&e),
    }
}

/// Create a successful JSON response
fn success_response<T: Serialize>(data: T) -> Response<Cursor<Vec<u8>>> {
    let response = ApiResponse::success(data);
    json_response(&response, 200)
}

/// Create an error JSON response with appropriate status code
fn error_response(error: &ApiError) -> Response<Cursor<Vec<u8>>> {
    let response = ApiResponse::<()>::error(error.code.as_str(), &error.message);
    json_response(&response, error.status_code())
}

/// Create a 404 not found response
fn not_found_response(message: &str) -> Response<Cursor<Vec<u8>>> {
    let response = ApiResponse::<()>::error("NOT_FOUND", message);
    json_response(&response, 404)
}

/// Serialize data to JSON response with status code
fn json_response<T: Serialize>(data: &T, status: u16) -> Response<Cursor<Vec<u8>>> {
    let json = serde_json::to_string(data).unwrap_or_else(|_| r#"{"success":false}"#.to_string());
    let response = Response::from_data(json.into_bytes()).with_status_code(StatusCode(status));
    match Header::from_bytes("Content-Type", "application/json") {
        Ok(header) => response.with_header(header),
        Err(()) => response,
    }
}
