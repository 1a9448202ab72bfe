//! Handler for `GET /coral-manifest`.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;
use serde_json::json;

use boxscore_registry::build_manifest;

use crate::cors::json_response;
use crate::server::{request_base_url, GatewayState};

/// Enumerate every registered agent with fully-qualified callback URLs
/// (relative paths when no host is derivable).
pub async fn get_manifest(State(state): State<GatewayState>, headers: HeaderMap) -> Response {
    let base = request_base_url(&headers);
    let manifest = build_manifest(&state.registry, base.as_deref());

    match serde_json::to_value(&manifest) {
        Ok(body) => json_response(StatusCode::OK, body),
        Err(e) => json_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "error": e.to_string() }),
        ),
    }
}
