//! Code generation for analytics, NFT tooling, and betting calculators.

use boxscore_core::BoxscoreError;
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};

use boxscore_intel::{FallbackChain, IntelTask};

#[derive(Debug, Deserialize)]
pub struct CodegenParams {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub requirements: String,
    #[serde(default)]
    pub context: Option<String>,
}

fn default_language() -> String {
    "Python".to_string()
}

pub async fn handle(params: Value, chain: &FallbackChain) -> Result<Value, BoxscoreError> {
    let params: CodegenParams =
        serde_json::from_value(params).map_err(|e| BoxscoreError::InvalidParams(e.to_string()))?;

    let task = IntelTask::CodeGeneration {
        kind: params.kind.clone(),
        language: params.language.clone(),
        requirements: params.requirements,
        context: params.context,
    };

    let generated = chain.generate(&task).await;

    Ok(json!({
        "success": true,
        "code": generated.payload,
        "type": params.kind,
        "language": params.language,
        "model": generated.model,
        "timestamp": Utc::now().to_rfc3339(),
        "generation_type": "codestral_code_generation",
        "mock": generated.provenance.mock,
        "source": generated.provenance.source,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn echoes_type_and_language() {
        let chain = FallbackChain::mock_only();
        let result = handle(
            json!({
                "type": "betting_calculator",
                "language": "TypeScript",
                "requirements": "Compute implied probability from odds",
            }),
            &chain,
        )
        .await
        .unwrap();

        assert_eq!(result["type"], "betting_calculator");
        assert_eq!(result["language"], "TypeScript");
        assert_eq!(result["mock"], true);
        assert!(result["code"].as_str().unwrap().contains("BETTING CALCULATOR"));
    }
}
