//! The request pipeline shared by the blocking and async clients.
//!
//! Both clients run the same three steps around their transport:
//! [`prepare`] resolves a [`Request`] against the configuration and attaches
//! the credential, the transport performs the call, and [`classify`] turns
//! the raw response into JSON or a classified [`FinBrainError`]. Only the
//! waiting differs between the two flavors.

use crate::config::ClientConfig;
use crate::request::{HttpResponse, PreparedRequest, Request};
use finbrain_types::{FinBrainError, Result};
use serde_json::Value;

/// Longest body excerpt quoted in an error message.
const MAX_BODY_EXCERPT: usize = 200;

/// Resolve a request against the configuration.
pub(crate) fn prepare(config: &ClientConfig, request: Request) -> PreparedRequest {
    let url = config.endpoint_url(request.path());
    let method = request.method();
    let params = request.params().clone();

    PreparedRequest {
        method,
        url,
        path: request.path().trim_start_matches('/').to_string(),
        params,
        token: config.api_key().to_string(),
        timeout: config.timeout(),
    }
}

/// Map a raw response to its JSON body or a classified error.
///
/// # Errors
///
/// - 400 → [`FinBrainError::BadRequest`]
/// - 401, 403 → [`FinBrainError::Authentication`]
/// - 404 → [`FinBrainError::NotFound`]
/// - 429 → [`FinBrainError::RateLimited`]
/// - 5xx → [`FinBrainError::Server`]
/// - any other non-2xx → [`FinBrainError::UnexpectedStatus`]
/// - 2xx with a body that is not JSON → [`FinBrainError::InvalidResponse`]
pub(crate) fn classify(response: HttpResponse) -> Result<Value> {
    let (status, body, retry_after) = response.into_parts();

    if (200..300).contains(&status) {
        return serde_json::from_str(&body).map_err(|e| {
            FinBrainError::InvalidResponse(format!("{e}; body: '{}'", excerpt(&body)))
        });
    }

    let message = error_message(status, &body);
    Err(match status {
        400 => FinBrainError::BadRequest(message),
        401 | 403 => FinBrainError::Authentication { status, message },
        404 => FinBrainError::NotFound(message),
        429 => FinBrainError::RateLimited {
            retry_after,
            message,
        },
        500..=599 => FinBrainError::Server { status, message },
        _ => FinBrainError::UnexpectedStatus { status, message },
    })
}

/// Upstream error text: the `message`, `error` or `detail` field of a JSON
/// body, else the body itself, else the status reason.
fn error_message(status: u16, body: &str) -> String {
    let from_json = serde_json::from_str::<Value>(body).ok().and_then(|value| {
        ["message", "error", "detail"]
            .iter()
            .find_map(|key| value.get(key).and_then(Value::as_str).map(str::to_string))
    });
    if let Some(message) = from_json {
        return message;
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("no response body")
            .to_string()
    } else {
        excerpt(trimmed)
    }
}

fn excerpt(body: &str) -> String {
    let mut chars = body.chars();
    let head: String = chars.by_ref().take(MAX_BODY_EXCERPT).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
