//! Shared HTTP response helpers for the submission client.
//!
//! Centralizes status-code handling (non-success -> [`SubmissionError::Rejected`]
//! with a best-effort server detail) and the status -> user message table, so
//! the transports stay focused on request construction.

use serde_json::Value;

use crate::error::SubmissionError;

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on 2xx. Otherwise reads the body as text
/// and returns [`SubmissionError::Rejected`] with the status and whatever
/// detail [`extract_detail`] finds.
///
/// # Errors
///
/// [`SubmissionError::Rejected`] for non-2xx responses.
pub async fn check_response(
    resp: reqwest::Response,
) -> Result<reqwest::Response, SubmissionError> {
    if resp.status().is_success() {
        return Ok(resp);
    }

    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    tracing::debug!(status, body = %body, "submission endpoint rejected request");
    Err(SubmissionError::Rejected {
        status,
        detail: extract_detail(&body),
    })
}

/// Pull a human-readable detail out of an error body.
///
/// Prefers a JSON `error` field, then `message`; otherwise (non-JSON body,
/// or JSON without either field) falls back to the trimmed raw text. A blank
/// body has no detail.
#[must_use]
pub fn extract_detail(body: &str) -> Option<String> {
    let raw = body.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(raw) {
        for key in ["error", "message"] {
            match map.get(key) {
                Some(Value::String(text)) if !text.trim().is_empty() => {
                    return Some(text.trim().to_string());
                }
                Some(Value::Null | Value::String(_)) | None => {}
                Some(other) => return Some(other.to_string()),
            }
        }
    }

    Some(raw.to_string())
}

/// Map an HTTP status and optional detail to the message shown to the user.
#[must_use]
pub fn status_message(status: u16, detail: Option<&str>) -> String {
    match (status, detail) {
        (400, Some(detail)) => format!("Invalid form data submitted. Details: {detail}"),
        (400, None) => {
            "Invalid form data submitted. Please check your inputs and try again.".to_string()
        }
        (401, Some(detail)) => format!("Authentication failed. Details: {detail}"),
        (401, None) => "Authentication failed. Please try again or contact support.".to_string(),
        (403, Some(detail)) => format!("Access denied. Details: {detail}"),
        (403, None) => {
            "Access denied. You don't have permission to submit this form.".to_string()
        }
        (429, _) => "Too many requests. Please try again later.".to_string(),
        (500, _) => "Server error. Please try again later or contact support.".to_string(),
        (_, Some(detail)) => format!("An error occurred: {detail}"),
        (_, None) => "An error occurred: Please try again.".to_string(),
    }
}
