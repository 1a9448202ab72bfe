//! Public manifest document and base-URL derivation.

use boxscore_core::AgentDescriptor;
use serde::Serialize;
use serde_json::Value;

use crate::registry::AgentRegistry;

/// Path prefix under which function routes are served. The UI knows this
/// prefix, so it is part of the public contract.
pub const FUNCTIONS_PREFIX: &str = "/.netlify/functions";

/// Derive the externally visible base URL from forwarding headers.
///
/// Proxies rewrite `host`, so `x-forwarded-host`/`x-forwarded-proto` win
/// when present. A host containing "localhost" defaults to plain http.
/// With no resolvable host the result is `None` and callers emit relative
/// paths instead of absolute URLs.
pub fn base_url_from_headers(
    forwarded_proto: Option<&str>,
    forwarded_host: Option<&str>,
    host: Option<&str>,
) -> Option<String> {
    let host = forwarded_host.or(host).filter(|h| !h.is_empty())?;
    let proto = forwarded_proto.unwrap_or(if host.contains("localhost") {
        "http"
    } else {
        "https"
    });
    Some(format!("{proto}://{host}"))
}

/// Absolute (or relative, if `base` is None) URL of a function route.
pub fn function_url(base: Option<&str>, function: &str) -> String {
    match base {
        Some(base) => format!("{base}{FUNCTIONS_PREFIX}/{function}"),
        None => format!("{FUNCTIONS_PREFIX}/{function}"),
    }
}

#[derive(Debug, Serialize)]
pub struct Manifest {
    pub name: String,
    pub description: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation_url: Option<String>,
    pub agents: Vec<ManifestAgent>,
}

#[derive(Debug, Serialize)]
pub struct ManifestAgent {
    pub id: String,
    pub name: String,
    pub description: String,
    pub methods: Vec<ManifestMethod>,
}

#[derive(Debug, Serialize)]
pub struct ManifestMethod {
    pub name: String,
    pub http: HttpBinding,
    pub input_schema: Value,
    pub auth: AuthBinding,
}

#[derive(Debug, Serialize)]
pub struct HttpBinding {
    pub method: String,
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct AuthBinding {
    #[serde(rename = "type")]
    pub kind: String,
    pub header: String,
    pub optional: bool,
}

fn manifest_agent(descriptor: &AgentDescriptor, base: Option<&str>) -> ManifestAgent {
    ManifestAgent {
        id: descriptor.id.clone(),
        name: descriptor.name.clone(),
        description: descriptor.description.clone(),
        methods: vec![ManifestMethod {
            name: "invoke".to_string(),
            http: HttpBinding {
                method: "POST".to_string(),
                url: function_url(base, &descriptor.function),
            },
            input_schema: descriptor.input_schema.clone(),
            auth: AuthBinding {
                kind: "header".to_string(),
                header: "x-tool-token".to_string(),
                optional: true,
            },
        }],
    }
}

/// Build the full manifest document for the given registry.
pub fn build_manifest(registry: &AgentRegistry, base: Option<&str>) -> Manifest {
    Manifest {
        name: "Sports Intelligence Agents".to_string(),
        description:
            "Agents for sports data, news briefs, YouTube scouting, and text-to-speech."
                .to_string(),
        version: "1.0.0".to_string(),
        documentation_url: base.map(|b| format!("{b}/")),
        agents: registry.iter().map(|a| manifest_agent(a, base)).collect(),
    }
}
