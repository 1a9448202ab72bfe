//! Secret redaction.
//!
//! Scrubs API keys and bearer tokens from strings before they reach a log
//! line or an error envelope. Upstream error bodies sometimes quote the
//! credentials that were sent; those must never leave the process.

use regex::Regex;
use std::sync::LazyLock;

static API_KEY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(sk-[a-zA-Z0-9]{20,})|(Bearer\s+[a-zA-Z0-9\-\._~+/]+=*)").unwrap()
});

/// Redacts credential-shaped patterns in a string.
pub fn redact_secrets(input: &str) -> String {
    API_KEY_RE.replace_all(input, "[REDACTED_TOKEN]").to_string()
}
