use thiserror::Error;

/// Top-level error type for the Boxscore gateway.
#[derive(Debug, Error)]
pub enum BoxscoreError {
    /// The invocation named an agent id the registry does not know, or a
    /// method other than `invoke`. Carries both back for client debugging.
    #[error("Unknown agent or method")]
    UnknownAgent { agent: String, method: String },

    #[error("{0}")]
    InvalidParams(String),

    #[error("{0} not configured")]
    ConfigMissing(&'static str),

    /// A non-2xx reply from an upstream service, preserved verbatim so the
    /// caller sees the original status and body rather than a masked 500.
    #[error("upstream returned {status}")]
    Upstream { status: u16, body: String },

    #[error("provider error ({provider}): {message}")]
    Provider { provider: String, message: String },

    #[error("all providers failed")]
    AllProvidersFailed,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
