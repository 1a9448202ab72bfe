//! The invocation dispatcher: `POST /coral-invoke`.
//!
//! Resolves the named agent, issues exactly one outbound POST on the
//! agent's transport, and passes the upstream response through verbatim:
//! status, content type, and body bytes are never reinterpreted, so
//! upstream error detail survives intact.

use anyhow::Context;
use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::{error, info};
use uuid::Uuid;

use boxscore_core::{AgentDescriptor, BoxscoreError, InvocationRequest, Transport};
use boxscore_registry::FUNCTIONS_PREFIX;

use crate::cors::{cors_headers, error_response};
use crate::server::{header_str, request_base_url, GatewayState};

pub async fn invoke(
    State(state): State<GatewayState>,
    headers: HeaderMap,
    body: String,
) -> Response {
    // Lenient parse: a malformed body degrades to an empty call, which
    // fails resolution deterministically instead of crashing.
    let call: InvocationRequest = serde_json::from_str(&body).unwrap_or_default();

    let descriptor = match state.registry.resolve(&call.agent, &call.method) {
        Ok(descriptor) => descriptor,
        Err(e) => return error_response(e),
    };

    let request_id = Uuid::new_v4();
    info!(
        %request_id,
        agent = %descriptor.id,
        operation = %descriptor.operation,
        transport = ?descriptor.transport,
        "Dispatching invocation"
    );

    let result = match descriptor.transport {
        Transport::Sibling => dispatch_sibling(&state, &headers, descriptor, &call.params).await,
        Transport::Backend => dispatch_backend(&state, &headers, descriptor, &call.params).await,
    };

    match result {
        Ok(response) => response,
        Err(e) => {
            error!(%request_id, agent = %descriptor.id, error = %e, "Invocation failed locally");
            error_response(e)
        }
    }
}

/// Call a sibling function on this gateway via the request's own base URL.
/// Only an inbound trust token is forwarded; sibling functions hold their
/// own secrets.
async fn dispatch_sibling(
    state: &GatewayState,
    headers: &HeaderMap,
    descriptor: &AgentDescriptor,
    params: &serde_json::Value,
) -> Result<Response, BoxscoreError> {
    let base = request_base_url(headers)
        .unwrap_or_else(|| format!("http://127.0.0.1:{}", state.config.port));
    let url = format!("{base}{FUNCTIONS_PREFIX}/{}", descriptor.operation);

    let mut request = state
        .http
        .post(&url)
        .header(header::CONTENT_TYPE, "application/json")
        .json(params);
    if let Some(token) = header_str(headers, "x-tool-token") {
        request = request.header("x-tool-token", token);
    }

    let response = request
        .send()
        .await
        .context("sibling function request failed")?;
    passthrough(response).await
}

/// Call the external tool backend. The trust token falls back to the
/// process-wide default when the caller supplies none.
async fn dispatch_backend(
    state: &GatewayState,
    headers: &HeaderMap,
    descriptor: &AgentDescriptor,
    params: &serde_json::Value,
) -> Result<Response, BoxscoreError> {
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

    let response = request.send().await.context("backend request failed")?;
    passthrough(response).await
}

pub(crate) fn backend_tool_url(base: &str, operation: &str) -> String {
    format!("{}/tools/{operation}", base.trim_end_matches('/'))
}

/// Forward an upstream response unchanged: status, content type, and body
/// bytes, plus the gateway's CORS headers.
pub(crate) async fn passthrough(response: reqwest::Response) -> Result<Response, BoxscoreError> {
    let status = response.status().as_u16();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/json")
        .to_string();
    let bytes = response
        .bytes()
        .await
        .context("failed to read upstream body")?;

    let mut headers = cors_headers();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_str(&content_type)
            .unwrap_or_else(|_| HeaderValue::from_static("application/json")),
    );

    Ok((
        StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
        headers,
        bytes,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_url_trims_trailing_slash() {
        assert_eq!(
            backend_tool_url("http://127.0.0.1:8001/", "news"),
            "http://127.0.0.1:8001/tools/news"
        );
        assert_eq!(
            backend_tool_url("http://127.0.0.1:8001", "compare_stats"),
            "http://127.0.0.1:8001/tools/compare_stats"
        );
    }
}
