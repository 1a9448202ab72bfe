//! Router construction and server startup.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use boxscore_config::Config;
use boxscore_core::LlmProvider;
use boxscore_intel::providers::{MistralProvider, OpenAiProvider};
use boxscore_intel::FallbackChain;
use boxscore_registry::AgentRegistry;

use crate::{cors, functions_api, health_api, invoke_api, manifest_api, runtime_api};

/// Application state shared across routes. Read-only after startup; no
/// locking is needed.
#[derive(Clone)]
pub struct GatewayState {
    pub config: Arc<Config>,
    pub registry: Arc<AgentRegistry>,
    pub chain: Arc<FallbackChain>,
    pub http: reqwest::Client,
}

impl GatewayState {
    pub fn new(
        config: Arc<Config>,
        registry: Arc<AgentRegistry>,
        chain: Arc<FallbackChain>,
    ) -> Self {
        Self {
            config,
            registry,
            chain,
            http: reqwest::Client::new(),
        }
    }

    /// Wire the built-in registry and a chain over whichever providers
    /// have keys configured. With no keys, every generative call falls
    /// through to mock data.
    pub fn from_config(config: Config) -> Self {
        let mut providers: Vec<Arc<dyn LlmProvider>> = Vec::new();
        if let Some(key) = &config.mistral_api_key {
            providers.push(Arc::new(MistralProvider::new(key)));
            info!("Registered Mistral provider");
        }
        if let Some(key) = &config.openai_api_key {
            providers.push(Arc::new(OpenAiProvider::new(key)));
            info!("Registered OpenAI provider");
        }
        Self::new(
            Arc::new(config),
            Arc::new(AgentRegistry::builtin()),
            Arc::new(FallbackChain::new(providers)),
        )
    }
}

/// Extract a header value as a string slice.
pub(crate) fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// Derive the externally visible base URL for this request.
pub(crate) fn request_base_url(headers: &HeaderMap) -> Option<String> {
    boxscore_registry::base_url_from_headers(
        header_str(headers, "x-forwarded-proto"),
        header_str(headers, "x-forwarded-host"),
        header_str(headers, "host"),
    )
}

/// Build the Axum router with all public routes.
///
/// The coral endpoints are served both bare and under the functions
/// prefix; the UI addresses them via the prefix.
pub fn build_router(state: GatewayState) -> Router {
    let manifest = get(manifest_api::get_manifest)
        .options(cors::preflight)
        .fallback(cors::method_not_allowed);
    let invoke = post(invoke_api::invoke)
        .options(cors::preflight)
        .fallback(cors::method_not_allowed);
    let runtime = get(runtime_api::get_runtime_manifest)
        .post(runtime_api::post_runtime_manifest)
        .options(cors::preflight)
        .fallback(cors::method_not_allowed);
    let function = post(functions_api::call_function)
        .options(cors::preflight)
        .fallback(cors::method_not_allowed);

    Router::new()
        .route("/coral-manifest", manifest.clone())
        .route("/.netlify/functions/coral-manifest", manifest)
        .route("/coral-invoke", invoke.clone())
        .route("/.netlify/functions/coral-invoke", invoke)
        .route("/coral-runtime-manifest", runtime.clone())
        .route("/.netlify/functions/coral-runtime-manifest", runtime)
        .route("/.netlify/functions/:function", function)
        .route("/api/health", get(health_api::get_health))
        .with_state(state)
}

/// Start the gateway HTTP server.
pub async fn start_server(addr: SocketAddr, state: GatewayState) -> Result<()> {
    let app = build_router(state);

    info!("Gateway HTTP server listening on {}", addr);
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::extract::Path;
    use axum::http::{header, Request, StatusCode};
    use axum::response::IntoResponse;
    use axum::routing::post;
    use axum::Json;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_state(backend_base_url: &str) -> GatewayState {
        let config = Config {
            backend_base_url: backend_base_url.trim_end_matches('/').to_string(),
            ..Default::default()
        };
        GatewayState::new(
            Arc::new(config),
            Arc::new(AgentRegistry::builtin()),
            Arc::new(FallbackChain::mock_only()),
        )
    }

    fn test_router() -> Router {
        build_router(test_state("http://127.0.0.1:1"))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    /// Fake tool backend: `news` is rate limited, one user profile exists.
    async fn spawn_backend() -> String {
        let app = Router::new()
            .route("/tools/news", post(|| async {
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    [(header::CONTENT_TYPE, "application/json")],
                    r#"{"error":"rate limited"}"#,
                )
            }))
            .route("/tools/user-profile/:id", get(|Path(id): Path<String>| async move {
                if id == "fan-42" {
                    Json(json!({
                        "user_id": "fan-42",
                        "favorite_team": "Red Sox",
                        "sport": "mlb",
                        "preferences": {"notifications": true},
                    }))
                    .into_response()
                } else {
                    (StatusCode::NOT_FOUND, Json(json!({"error": "no such user"}))).into_response()
                }
            }));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn options_preflight_short_circuits() {
        for path in ["/coral-invoke", "/coral-manifest", "/coral-runtime-manifest"] {
            let response = test_router()
                .oneshot(
                    Request::builder()
                        .method("OPTIONS")
                        .uri(path)
                        .body(Body::from("ignored body content"))
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{path}");
            assert_eq!(
                response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
                "*"
            );
            let bytes = response.into_body().collect().await.unwrap().to_bytes();
            assert!(bytes.is_empty(), "{path} preflight body not empty");
        }
    }

    #[tokio::test]
    async fn manifest_emits_absolute_urls_from_forwarded_headers() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/coral-manifest")
                    .header("x-forwarded-host", "app.example.com")
                    .header("x-forwarded-proto", "https")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let manifest = body_json(response).await;
        assert_eq!(manifest["name"], "Sports Intelligence Agents");
        let agents = manifest["agents"].as_array().unwrap();
        assert!(!agents.is_empty());
        for agent in agents {
            let url = agent["methods"][0]["http"]["url"].as_str().unwrap();
            assert!(
                url.starts_with("https://app.example.com/.netlify/functions/"),
                "unexpected url {url}"
            );
        }
    }

    #[tokio::test]
    async fn manifest_emits_relative_urls_without_host() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/coral-manifest")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let manifest = body_json(response).await;
        for agent in manifest["agents"].as_array().unwrap() {
            let url = agent["methods"][0]["http"]["url"].as_str().unwrap();
            assert!(url.starts_with("/.netlify/functions/"), "unexpected url {url}");
        }
    }

    #[tokio::test]
    async fn manifest_rejects_non_get() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/coral-manifest")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body_json(response).await["error"], "Method not allowed");
    }

    #[tokio::test]
    async fn invoke_rejects_unknown_agent() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/coral-invoke")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"agent":"nonexistent-agent-xyz","method":"invoke","params":{}}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Unknown agent or method");
        assert_eq!(body["agent"], "nonexistent-agent-xyz");
        assert_eq!(body["method"], "invoke");
    }

    #[tokio::test]
    async fn invoke_rejects_non_invoke_method() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/coral-invoke")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"agent":"news-brief","method":"describe","params":{}}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Unknown agent or method");
        assert_eq!(body["method"], "describe");
    }

    #[tokio::test]
    async fn invoke_tolerates_malformed_json() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/coral-invoke")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("not json"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["agent"], "");
        assert_eq!(body["method"], "invoke");
    }

    #[tokio::test]
    async fn invoke_passes_backend_errors_through_verbatim() {
        let backend = spawn_backend().await;
        let app = build_router(test_state(&backend));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/coral-invoke")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"agent":"news-brief","method":"invoke","params":{"team":"Yankees"}}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE]
                .to_str()
                .unwrap(),
            "application/json"
        );
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], br#"{"error":"rate limited"}"#);
    }

    #[tokio::test]
    async fn invoke_dispatches_sibling_functions_end_to_end() {
        // Real listener: the sibling dispatch loops back through the
        // request's own host header.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = build_router(test_state("http://127.0.0.1:1"));
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client = reqwest::Client::new();
        let response = client
            .post(format!("http://{addr}/coral-invoke"))
            // Like the deployment proxy would; a bare IP host would
            // otherwise derive an https base.
            .header("x-forwarded-proto", "http")
            .json(&json!({
                "agent": "multi-sport",
                "method": "invoke",
                "params": {"sport": "mlb", "team": "Yankees", "action": "stats"},
            }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 200);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["mock"], true);
        assert_eq!(body["source"], "Mock Data");
        assert_eq!(body["stats"]["wins"], 85);
        assert_eq!(body["stats"]["era"], 3.45);
    }

    #[tokio::test]
    async fn native_function_route_answers_with_provenance() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/.netlify/functions/mistral-reasoning")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"team1":"Yankees","team2":"Red Sox"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["mock"], true);
        assert_eq!(body["source"], "Mock Data");
        assert!(body["analysis"].as_str().unwrap().contains("Yankees"));
    }

    #[tokio::test]
    async fn wrapper_function_route_proxies_to_backend() {
        let backend = spawn_backend().await;
        let app = build_router(test_state(&backend));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/.netlify/functions/toolsNews")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"team":"Yankees"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], br#"{"error":"rate limited"}"#);
    }

    #[tokio::test]
    async fn unknown_function_route_is_404() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/.netlify/functions/toolsNope")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["function"], "toolsNope");
    }

    #[tokio::test]
    async fn unconfigured_crossmint_is_a_500() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/.netlify/functions/crossmint-wallet")
                    .body(Body::from(r#"{"action":"get_balance","userId":"fan-1"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Crossmint not configured");
    }

    #[tokio::test]
    async fn runtime_manifest_requires_user_id() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/coral-runtime-manifest")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["error"],
            "user_id parameter is required"
        );
    }

    #[tokio::test]
    async fn runtime_manifest_personalizes_for_known_user() {
        let backend = spawn_backend().await;
        let app = build_router(test_state(&backend));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/coral-runtime-manifest?user_id=fan-42")
                    .header("x-forwarded-host", "app.example.com")
                    .header("x-forwarded-proto", "https")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let manifest = body_json(response).await;
        assert_eq!(manifest["user_id"], "fan-42");
        assert_eq!(manifest["agents"][0]["id"], "personalized-red-sox-agent");
        assert_eq!(
            manifest["agents"][0]["methods"][0]["http"]["url"],
            "https://app.example.com/.netlify/functions/toolsPersonalizedAgent"
        );
    }

    #[tokio::test]
    async fn runtime_manifest_unknown_user_is_404() {
        let backend = spawn_backend().await;
        let app = build_router(test_state(&backend));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/coral-runtime-manifest?user_id=nobody")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "User profile not found");
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let response = test_router()
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }
}
