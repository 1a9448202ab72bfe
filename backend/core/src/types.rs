use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How an agent's implementation is reached.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Transport {
    /// POST `{BACKEND_BASE_URL}/tools/{operation}` on the external tool server.
    Backend,
    /// POST a sibling function on this gateway, addressed via the request's
    /// own base URL. Used for operations that hold provider secrets.
    Sibling,
}

/// Identity and capability of one invocable agent.
///
/// Constructed once at startup from the catalog; drives both the public
/// manifest and invocation routing, so an id that appears in one always
/// appears in the other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentDescriptor {
    /// Public agent id, stable across releases (part of the API contract).
    pub id: String,
    pub name: String,
    pub description: String,
    /// Internal operation name: the backend tool name for `Backend`
    /// transport, the function route name for `Sibling`.
    pub operation: String,
    /// Function route name advertised in manifest callback URLs.
    pub function: String,
    pub transport: Transport,
    /// JSON Schema describing accepted parameters. Advisory only.
    pub input_schema: Value,
}

/// One `invoke` call as posted by the UI.
///
/// Every field is defaulted so a malformed or empty body degrades to an
/// unknown-agent rejection instead of a parse failure.
#[derive(Debug, Clone, Deserialize)]
pub struct InvocationRequest {
    #[serde(default)]
    pub agent: String,
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default = "default_params")]
    pub params: Value,
}

impl Default for InvocationRequest {
    fn default() -> Self {
        Self {
            agent: String::new(),
            method: default_method(),
            params: default_params(),
        }
    }
}

fn default_method() -> String {
    "invoke".to_string()
}

fn default_params() -> Value {
    Value::Object(serde_json::Map::new())
}

/// Provenance of a generated payload: `mock` is true exactly when no live
/// provider produced the data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProvenanceTag {
    pub mock: bool,
    pub source: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invocation_request_defaults() {
        let req: InvocationRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.agent, "");
        assert_eq!(req.method, "invoke");
        assert!(req.params.is_object());
    }

    #[test]
    fn invocation_request_partial_body() {
        let req: InvocationRequest =
            serde_json::from_str(r#"{"agent":"news-brief"}"#).unwrap();
        assert_eq!(req.agent, "news-brief");
        assert_eq!(req.method, "invoke");
    }

    #[test]
    fn transport_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Transport::Sibling).unwrap(),
            r#""sibling""#
        );
        assert_eq!(
            serde_json::to_string(&Transport::Backend).unwrap(),
            r#""backend""#
        );
    }
}
