use anyhow::Result;
use async_trait::async_trait;

use boxscore_core::{LlmProvider, LlmRequest, LlmResponse};

/// A mock LLM provider that returns canned responses (or always fails).
pub struct MockProvider {
    name: String,
    fixed_response: Option<String>,
    fail: bool,
}

impl MockProvider {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fixed_response: None,
            fail: false,
        }
    }

    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.fixed_response = Some(response.into());
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(&self, _req: &LlmRequest) -> Result<LlmResponse> {
        if self.fail {
            anyhow::bail!("mock provider {} configured to fail", self.name);
        }
        Ok(LlmResponse {
            content: self
                .fixed_response
                .clone()
                .unwrap_or_else(|| "Mock response".to_string()),
            provider: self.name.clone(),
            model: "mock".to_string(),
            tokens_used: 0,
            latency_ms: 0,
        })
    }
}
