use serde::Deserialize;

/// Boxscore gateway configuration.
///
/// Read once from the environment at process start and shared read-only
/// afterwards. Missing provider keys are not fatal: the fallback chain
/// skips unconfigured providers and the Crossmint handlers answer with a
/// configuration error instead.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// HTTP server bind address
    pub bind_address: String,
    /// HTTP server port
    pub port: u16,
    /// Base URL of the external tool backend (no trailing slash)
    pub backend_base_url: String,
    /// Default trust token forwarded to the backend when the caller
    /// supplies none
    pub tool_token: Option<String>,
    /// Mistral API key (primary generative provider)
    pub mistral_api_key: Option<String>,
    /// OpenAI API key (secondary generative provider)
    pub openai_api_key: Option<String>,

    // Crossmint
    pub crossmint_project_id: Option<String>,
    pub crossmint_client_secret: Option<String>,
    pub crossmint_environment: String,

    /// Log level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8888,
            backend_base_url: "http://127.0.0.1:8001".to_string(),
            tool_token: None,
            mistral_api_key: None,
            openai_api_key: None,
            crossmint_project_id: None,
            crossmint_client_secret: None,
            crossmint_environment: "staging".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        Self {
            bind_address: std::env::var("BOXSCORE_BIND")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("BOXSCORE_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8888),
            backend_base_url: std::env::var("BACKEND_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| "http://127.0.0.1:8001".to_string()),
            tool_token: std::env::var("TOOL_TOKEN").ok(),
            mistral_api_key: std::env::var("MISTRAL_API_KEY").ok(),
            openai_api_key: std::env::var("OPENAI_API_KEY").ok(),
            crossmint_project_id: std::env::var("CROSSMINT_PROJECT_ID").ok(),
            crossmint_client_secret: std::env::var("CROSSMINT_CLIENT_SECRET").ok(),
            crossmint_environment: std::env::var("CROSSMINT_ENVIRONMENT")
                .unwrap_or_else(|_| "staging".to_string()),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }

    /// Whether both Crossmint credentials are present.
    pub fn has_crossmint(&self) -> bool {
        self.crossmint_project_id.is_some() && self.crossmint_client_secret.is_some()
    }
}
