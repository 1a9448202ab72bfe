//! NFT metadata generation for sports achievement badges.

use boxscore_core::BoxscoreError;
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};

use boxscore_intel::{FallbackChain, IntelTask};

#[derive(Debug, Deserialize)]
pub struct NftParams {
    #[serde(default)]
    pub player_name: String,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub achievement: String,
    #[serde(default = "default_rarity")]
    pub rarity: String,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_rarity() -> String {
    "Common".to_string()
}

fn default_language() -> String {
    "English".to_string()
}

pub async fn handle(params: Value, chain: &FallbackChain) -> Result<Value, BoxscoreError> {
    let params: NftParams =
        serde_json::from_value(params).map_err(|e| BoxscoreError::InvalidParams(e.to_string()))?;

    let task = IntelTask::NftMetadata {
        player_name: params.player_name.clone(),
        team: params.team.clone(),
        achievement: params.achievement.clone(),
        rarity: params.rarity.clone(),
        language: params.language.clone(),
    };

    let generated = chain.generate(&task).await;

    Ok(json!({
        "success": true,
        "metadata": generated.payload,
        "player_name": params.player_name,
        "team": params.team,
        "achievement": params.achievement,
        "rarity": params.rarity,
        "language": params.language,
        "model": generated.model,
        "timestamp": Utc::now().to_rfc3339(),
        "metadata_type": "sports_achievement_nft",
        "mock": generated.provenance.mock,
        "source": generated.provenance.source,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn envelope_echoes_badge_fields() {
        let chain = FallbackChain::mock_only();
        let result = handle(
            json!({
                "player_name": "Aaron Judge",
                "team": "Yankees",
                "achievement": "50 home runs in a season",
                "rarity": "Legendary",
            }),
            &chain,
        )
        .await
        .unwrap();

        assert_eq!(result["player_name"], "Aaron Judge");
        assert_eq!(result["rarity"], "Legendary");
        assert_eq!(result["language"], "English");
        assert_eq!(result["metadata_type"], "sports_achievement_nft");
        assert!(result["metadata"].as_str().unwrap().contains("Aaron Judge"));
    }
}
