//! Multilingual translation of sports commentary.

use boxscore_core::BoxscoreError;
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};

use boxscore_intel::{FallbackChain, IntelTask};

#[derive(Debug, Deserialize)]
pub struct TranslateParams {
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_language")]
    pub target_language: String,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub voice_mode: bool,
}

fn default_language() -> String {
    "English".to_string()
}

pub async fn handle(params: Value, chain: &FallbackChain) -> Result<Value, BoxscoreError> {
    let params: TranslateParams =
        serde_json::from_value(params).map_err(|e| BoxscoreError::InvalidParams(e.to_string()))?;

    let task = IntelTask::Translation {
        text: params.text.clone(),
        target_language: params.target_language.clone(),
        context: params.context,
        voice_mode: params.voice_mode,
    };

    let generated = chain.generate(&task).await;

    Ok(json!({
        "success": true,
        "translation": generated.payload,
        "original_text": params.text,
        "target_language": params.target_language,
        "voice_mode": params.voice_mode,
        "model": generated.model,
        "timestamp": Utc::now().to_rfc3339(),
        "translation_type": "multilingual_sports_analysis",
        "mock": generated.provenance.mock,
        "source": generated.provenance.source,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn echoes_original_text() {
        let chain = FallbackChain::mock_only();
        let result = handle(
            json!({"text": "The Yankees are leading 3-1", "target_language": "Spanish"}),
            &chain,
        )
        .await
        .unwrap();

        assert_eq!(result["original_text"], "The Yankees are leading 3-1");
        assert_eq!(result["target_language"], "Spanish");
        assert_eq!(result["voice_mode"], false);
        assert_eq!(result["mock"], true);
    }
}
