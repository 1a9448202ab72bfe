//! CORS headers and shared response helpers.
//!
//! Every response from the public endpoints carries this header set, and
//! any `OPTIONS` request short-circuits to an empty 200 before other
//! logic runs. Browsers will not send the real request otherwise.

use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::{json, Value};

use boxscore_core::BoxscoreError;
use boxscore_logging::redact_secrets;

/// The CORS header set shared by all public responses.
pub fn cors_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type, Authorization, x-tool-token"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    headers
}

/// `OPTIONS` preflight: 200, CORS headers, empty body.
pub async fn preflight() -> Response {
    (StatusCode::OK, cors_headers(), "").into_response()
}

/// Fallback for unsupported methods on a public route.
pub async fn method_not_allowed() -> Response {
    json_response(
        StatusCode::METHOD_NOT_ALLOWED,
        json!({ "error": "Method not allowed" }),
    )
}

/// JSON body with CORS headers.
pub fn json_response(status: StatusCode, body: Value) -> Response {
    let mut headers = cors_headers();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    (status, headers, body.to_string()).into_response()
}

/// Convert a gateway error into its JSON envelope.
pub fn error_response(err: BoxscoreError) -> Response {
    match err {
        BoxscoreError::UnknownAgent { agent, method } => json_response(
            StatusCode::BAD_REQUEST,
            json!({ "error": "Unknown agent or method", "agent": agent, "method": method }),
        ),
        BoxscoreError::InvalidParams(message) => {
            json_response(StatusCode::BAD_REQUEST, json!({ "error": message }))
        }
        BoxscoreError::ConfigMissing(_) => json_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "error": err.to_string() }),
        ),
        BoxscoreError::Upstream { status, body } => json_response(
            StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
            json!({ "error": redact_secrets(&body) }),
        ),
        other => json_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "error": redact_secrets(&other.to_string()) }),
        ),
    }
}
