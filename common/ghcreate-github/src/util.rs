//! Utility functions for GitHub operations

use crate::error::GitHubError;
use reqwest::{Response, StatusCode};
use serde_json::Value;

/// Extract a human-readable message from a GitHub error body
///
/// GitHub error bodies look like `{"message": "...", "errors": [...]}`.
/// Validation failures (422) put the useful detail in the first `errors`
/// entry, which is appended in parentheses.
///
/// # Returns
/// `None` if the body is not JSON or has no `message` field
pub fn extract_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let message = value.get("message")?.as_str()?.to_string();

    let detail = value
        .get("errors")
        .and_then(Value::as_array)
        .and_then(|errors| errors.first())
        .and_then(|first| match first {
            Value::String(s) => Some(s.clone()),
            Value::Object(map) => map.get("message").and_then(Value::as_str).map(str::to_string),
            _ => None,
        });

    match detail {
        Some(detail) => Some(format!("{} ({})", message, detail)),
        None => Some(message),
    }
}

/// Turn a non-success response into the matching [`GitHubError`]
pub(crate) async fn error_from_response(response: Response) -> GitHubError {
    let status = response.status();
    if status == StatusCode::UNAUTHORIZED {
        return GitHubError::Auth;
    }

    let body = response.text().await.unwrap_or_default();
    let message = extract_error_message(&body).unwrap_or_else(|| {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            status.canonical_reason().unwrap_or("Unknown error").to_string()
        } else {
            trimmed.to_string()
        }
    });

    GitHubError::Api {
        status: status.as_u16(),
        message,
    }
}
