//! Sibling function routes: `POST /.netlify/functions/{function}`.
//!
//! Native capabilities run in-process; `tools*` wrapper functions proxy a
//! single POST to the external tool backend. Either way the handler holds
//! the secrets; callers never need provider keys.

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::Response;
use serde_json::{json, Value};
use tracing::debug;

use anyhow::Context;
use boxscore_core::{BoxscoreError, Transport};

use boxscore_agents::{codegen, crossmint, multi_sport, nft, reasoning, translate};

use crate::cors::{error_response, json_response};
use crate::invoke_api::{backend_tool_url, passthrough};
use crate::server::{header_str, GatewayState};

pub async fn call_function(
    State(state): State<GatewayState>,
    Path(function): Path<String>,
    headers: HeaderMap,
    body: String,
) -> Response {
    let params: Value =
        serde_json::from_str(&body).unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

    debug!(function = %function, "Function call");

    let result = match function.as_str() {
        "multi-sport" => multi_sport::handle(params, &state.chain).await,
        "mistral-reasoning" => reasoning::handle(params, &state.chain).await,
        "mistral-codestral" => codegen::handle(params, &state.chain).await,
        "mistral-multilingual" => translate::handle(params, &state.chain).await,
        "mistral-nft-metadata" => nft::handle(params, &state.chain).await,
        "crossmint-wallet" => crossmint::handle_wallet(params, &state.config).await,
        "crossmint-payment" => crossmint::handle_payment(params, &state.config).await,
        _ => return proxy_function(&state, &function, &headers, &params).await,
    };

    match result {
        Ok(payload) => json_response(StatusCode::OK, payload),
        Err(e) => error_response(e),
    }
}

/// Forward a backend wrapper function (`toolsNews`, `toolsNba`, ...) to
/// its tool on the backend; unknown names get a 404.
async fn proxy_function(
    state: &GatewayState,
    function: &str,
    headers: &HeaderMap,
    params: &Value,
) -> Response {
    let Some(descriptor) = state
        .registry
        .iter()
        .find(|a| a.transport == Transport::Backend && a.function == function)
    else {
        return json_response(
            StatusCode::NOT_FOUND,
            json!({ "error": "Function not found", "function": function }),
        );
    };

    let url = backend_tool_url(&state.config.backend_base_url, &descriptor.operation);
    let token = header_str(headers, "x-tool-token")
        .map(str::to_string)
        .or_else(|| state.config.tool_token.clone());

    let mut request = state
        .http
        .post(&url)
        .header(header::CONTENT_TYPE, "application/json")
        .json(params);
    if let Some(token) = token {
        request = request.header("x-tool-token", token);
    }

    let sent = request.send().await.context("backend request failed");
    match sent {
        Ok(response) => match passthrough(response).await {
            Ok(response) => response,
            Err(e) => error_response(e),
        },
        Err(e) => error_response(BoxscoreError::Other(e)),
    }
}
