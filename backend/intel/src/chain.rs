use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tracing::{info, warn};

use boxscore_core::{LlmProvider, LlmRequest, ProvenanceTag};

use crate::prompts;
use crate::synth;
use crate::task::IntelTask;

/// Default per-attempt timeout. A provider that hangs counts as failed.
const ATTEMPT_TIMEOUT: Duration = Duration::from_secs(10);

/// Result of a chain run. The payload is always usable; provenance says
/// whether a live provider produced it.
#[derive(Debug, Clone)]
pub struct Generated {
    pub payload: Value,
    pub model: String,
    pub provenance: ProvenanceTag,
}

impl Generated {
    pub fn mock(&self) -> bool {
        self.provenance.mock
    }
}

/// Ordered provider fallback chain: first success wins, else synthesize.
///
/// Attempts are strictly sequential: the secondary provider is never
/// started while the primary is in flight, and the mock stage runs only
/// after every provider has failed.
pub struct FallbackChain {
    providers: Vec<Arc<dyn LlmProvider>>,
    attempt_timeout: Duration,
}

impl FallbackChain {
    pub fn new(providers: Vec<Arc<dyn LlmProvider>>) -> Self {
        Self {
            providers,
            attempt_timeout: ATTEMPT_TIMEOUT,
        }
    }

    /// Chain with no live providers; every task synthesizes mock data.
    pub fn mock_only() -> Self {
        Self::new(Vec::new())
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.attempt_timeout = timeout;
        self
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Run the chain for one task. Infallible: the mock stage is pure
    /// local computation.
    pub async fn generate(&self, task: &IntelTask) -> Generated {
        let request_base = LlmRequest {
            model: String::new(),
            system_prompt: prompts::system_prompt(task),
            user_prompt: prompts::user_prompt(task),
            max_tokens: task.max_tokens(),
            temperature: task.temperature(),
        };

        for provider in &self.providers {
            let request = LlmRequest {
                model: model_for(provider.name(), task).to_string(),
                ..request_base.clone()
            };

            match tokio::time::timeout(self.attempt_timeout, provider.complete(&request)).await {
                Ok(Ok(response)) if !response.content.trim().is_empty() => {
                    info!(
                        task = task.label(),
                        provider = provider.name(),
                        model = %response.model,
                        latency_ms = response.latency_ms,
                        "Provider succeeded"
                    );
                    return Generated {
                        payload: task.payload_from_text(&response.content),
                        model: response.model,
                        provenance: ProvenanceTag {
                            mock: false,
                            source: source_label(provider.name()).to_string(),
                        },
                    };
                }
                Ok(Ok(_)) => {
                    warn!(
                        task = task.label(),
                        provider = provider.name(),
                        "Provider returned empty content, advancing chain"
                    );
                }
                Ok(Err(e)) => {
                    warn!(
                        task = task.label(),
                        provider = provider.name(),
                        error = %e,
                        "Provider failed, advancing chain"
                    );
                }
                Err(_) => {
                    warn!(
                        task = task.label(),
                        provider = provider.name(),
                        timeout_secs = self.attempt_timeout.as_secs(),
                        "Provider timed out, advancing chain"
                    );
                }
            }
        }

        info!(task = task.label(), "All providers failed, synthesizing mock data");
        Generated {
            payload: synth::mock_payload(task),
            model: "mock".to_string(),
            provenance: ProvenanceTag {
                mock: true,
                source: "Mock Data".to_string(),
            },
        }
    }
}

/// Display label recorded in the provenance tag.
fn source_label(provider: &str) -> &str {
    match provider {
        "mistral" => "Mistral AI",
        "openai" => "OpenAI",
        other => other,
    }
}

/// Model requested from a given provider for a given task.
fn model_for(provider: &str, task: &IntelTask) -> &'static str {
    match provider {
        "openai" => task.openai_model(),
        _ => task.mistral_model(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::MockProvider;

    fn reasoning_task() -> IntelTask {
        IntelTask::Reasoning {
            team1: "Yankees".into(),
            team2: "Red Sox".into(),
            context: None,
            question: None,
        }
    }

    fn sports_task() -> IntelTask {
        IntelTask::SportsData {
            sport: "mlb".into(),
            team: "Yankees".into(),
            team2: "Red Sox".into(),
            action: "stats".into(),
            context: None,
        }
    }

    #[tokio::test]
    async fn first_success_wins() {
        let chain = FallbackChain::new(vec![
            Arc::new(MockProvider::new("primary").with_response("from primary")),
            Arc::new(MockProvider::new("secondary").with_response("from secondary")),
        ]);
        let result = chain.generate(&reasoning_task()).await;
        assert!(!result.mock());
        assert_eq!(result.provenance.source, "primary");
        assert_eq!(result.payload, serde_json::json!("from primary"));
    }

    #[tokio::test]
    async fn failure_advances_to_secondary() {
        let chain = FallbackChain::new(vec![
            Arc::new(MockProvider::new("primary").failing()),
            Arc::new(MockProvider::new("secondary").with_response("from secondary")),
        ]);
        let result = chain.generate(&reasoning_task()).await;
        assert!(!result.mock());
        assert_eq!(result.provenance.source, "secondary");
    }

    #[tokio::test]
    async fn empty_content_counts_as_failure() {
        let chain = FallbackChain::new(vec![
            Arc::new(MockProvider::new("primary").with_response("   ")),
            Arc::new(MockProvider::new("secondary").with_response("ok")),
        ]);
        let result = chain.generate(&reasoning_task()).await;
        assert_eq!(result.provenance.source, "secondary");
    }

    #[tokio::test]
    async fn all_failures_yield_deterministic_mock() {
        let chain = FallbackChain::new(vec![
            Arc::new(MockProvider::new("primary").failing()),
            Arc::new(MockProvider::new("secondary").failing()),
        ]);
        let first = chain.generate(&sports_task()).await;
        let second = chain.generate(&sports_task()).await;

        assert!(first.mock());
        assert_eq!(first.provenance.source, "Mock Data");
        assert_eq!(first.model, "mock");
        assert_eq!(first.payload, second.payload);
        assert_eq!(first.payload["stats"]["wins"], 85);
        assert_eq!(first.payload["stats"]["era"], 3.45);
    }

    #[tokio::test]
    async fn mock_only_chain_tags_provenance() {
        let result = FallbackChain::mock_only().generate(&reasoning_task()).await;
        assert!(result.mock());
        assert_eq!(result.provenance.source, "Mock Data");
        assert!(result.payload.as_str().unwrap().contains("Yankees"));
    }

    #[test]
    fn known_providers_get_display_labels() {
        assert_eq!(source_label("mistral"), "Mistral AI");
        assert_eq!(source_label("openai"), "OpenAI");
        assert_eq!(source_label("custom"), "custom");
    }
}
