//! Matchup reasoning and analysis.

use boxscore_core::BoxscoreError;
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};

use boxscore_intel::{FallbackChain, IntelTask};

#[derive(Debug, Deserialize)]
pub struct ReasoningParams {
    #[serde(default)]
    pub team1: String,
    #[serde(default)]
    pub team2: String,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
}

pub async fn handle(params: Value, chain: &FallbackChain) -> Result<Value, BoxscoreError> {
    let params: ReasoningParams =
        serde_json::from_value(params).map_err(|e| BoxscoreError::InvalidParams(e.to_string()))?;

    let task = IntelTask::Reasoning {
        team1: params.team1,
        team2: params.team2,
        context: params.context,
        question: params.question,
    };

    let generated = chain.generate(&task).await;

    Ok(json!({
        "success": true,
        "analysis": generated.payload,
        "model": generated.model,
        "timestamp": Utc::now().to_rfc3339(),
        "reasoning_type": "advanced_mlb_analysis",
        "mock": generated.provenance.mock,
        "source": generated.provenance.source,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn envelope_carries_provenance() {
        let chain = FallbackChain::mock_only();
        let result = handle(
            json!({"team1": "Yankees", "team2": "Red Sox", "question": "Who has the advantage?"}),
            &chain,
        )
        .await
        .unwrap();

        assert_eq!(result["success"], true);
        assert_eq!(result["mock"], true);
        assert_eq!(result["source"], "Mock Data");
        assert_eq!(result["reasoning_type"], "advanced_mlb_analysis");
        assert!(result["analysis"].as_str().unwrap().contains("Yankees vs Red Sox"));
    }
}
