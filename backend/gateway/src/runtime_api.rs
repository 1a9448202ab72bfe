//! Per-user runtime manifest: `GET|POST /coral-runtime-manifest`.

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use boxscore_registry::{build_runtime_manifest, UserProfile};

use crate::cors::json_response;
use crate::server::{request_base_url, GatewayState};

#[derive(Debug, Deserialize)]
pub struct RuntimeQuery {
    #[serde(default)]
    user_id: Option<String>,
}

pub async fn get_runtime_manifest(
    State(state): State<GatewayState>,
    Query(query): Query<RuntimeQuery>,
    headers: HeaderMap,
) -> Response {
    runtime_manifest(state, headers, query.user_id).await
}

pub async fn post_runtime_manifest(
    State(state): State<GatewayState>,
    headers: HeaderMap,
    body: String,
) -> Response {
    let parsed: Value = serde_json::from_str(&body).unwrap_or_else(|_| json!({}));
    let user_id = parsed
        .get("user_id")
        .and_then(|v| v.as_str())
        .map(str::to_string);
    runtime_manifest(state, headers, user_id).await
}

/// Fetch the user's profile from the tool backend and synthesize the
/// personalized manifest around it.
async fn runtime_manifest(
    state: GatewayState,
    headers: HeaderMap,
    user_id: Option<String>,
) -> Response {
    let Some(user_id) = user_id.filter(|id| !id.is_empty()) else {
        return json_response(
            StatusCode::BAD_REQUEST,
            json!({ "error": "user_id parameter is required" }),
        );
    };

    let url = format!(
        "{}/tools/user-profile/{user_id}",
        state.config.backend_base_url.trim_end_matches('/')
    );

    let response = match state.http.get(&url).send().await {
        Ok(response) => response,
        Err(e) => {
            warn!(user_id = %user_id, error = %e, "User profile fetch failed");
            return json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Failed to generate runtime manifest" }),
            );
        }
    };

    if !response.status().is_success() {
        return json_response(
            StatusCode::NOT_FOUND,
            json!({ "error": "User profile not found" }),
        );
    }

    match response.json::<UserProfile>().await {
        Ok(profile) => {
            let base = request_base_url(&headers);
            json_response(
                StatusCode::OK,
                build_runtime_manifest(&profile, base.as_deref()),
            )
        }
        Err(e) => {
            warn!(user_id = %user_id, error = %e, "User profile was not parseable");
            json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Failed to generate runtime manifest" }),
            )
        }
    }
}
