//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and turning
//! failed responses into readable messages.

use contracts::domain::a002_llm_chat::ErrorDetail;
use gloo_net::http::Response;

/// localStorage key holding an explicit backend origin.
const API_BASE_STORAGE_KEY: &str = "docreader_api_base";

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 8000 for the backend server. A non-empty value stored
/// under `docreader_api_base` in localStorage overrides it, for setups
/// where the backend runs on a different host.
///
/// # Returns
/// - API base URL like "http://localhost:8000" or "https://example.com:8000"
/// - Empty string if window is not available
///
/// # Example
/// ```no_run
/// use frontend::shared::api_utils::api_base;
///
/// let url = format!("{}/documents", api_base());
/// ```
pub fn api_base() -> String {
    if let Some(base) = stored_api_base() {
        return base;
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8000", protocol, hostname)
}

fn stored_api_base() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let value = storage.get_item(API_BASE_STORAGE_KEY).ok()??;
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Build a full API URL from a path
///
/// # Example
/// ```no_run
/// use frontend::shared::api_utils::api_url;
///
/// let url = api_url("/documents");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Extract a human-readable message from a failed response.
///
/// FastAPI-style backends put the message in a `{"detail": ...}` body;
/// when that is absent the HTTP status has to do.
pub async fn error_message(response: Response) -> String {
    if let Ok(body) = response.json::<ErrorDetail>().await {
        if let Some(detail) = body.detail {
            if !detail.is_empty() {
                return detail;
            }
        }
    }
    format!("HTTP {}", response.status())
}
