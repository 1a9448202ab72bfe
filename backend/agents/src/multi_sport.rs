//! Unified multi-sport data generation (MLB, NBA, Cricket, Football, F1).

use boxscore_core::BoxscoreError;
use serde::Deserialize;
use serde_json::Value;

use boxscore_intel::{FallbackChain, IntelTask};

#[derive(Debug, Deserialize)]
pub struct MultiSportParams {
    #[serde(default = "default_sport")]
    pub sport: String,
    #[serde(default = "default_team")]
    pub team: String,
    #[serde(default = "default_team2")]
    pub team2: String,
    #[serde(default = "default_action")]
    pub action: String,
    #[serde(default)]
    pub context: Option<String>,
}

fn default_sport() -> String {
    "mlb".to_string()
}

fn default_team() -> String {
    "Yankees".to_string()
}

fn default_team2() -> String {
    "Red Sox".to_string()
}

fn default_action() -> String {
    "stats".to_string()
}

/// Generate sports data for one team through the fallback chain. The
/// returned object always carries `mock` and `source`.
pub async fn handle(params: Value, chain: &FallbackChain) -> Result<Value, BoxscoreError> {
    let params: MultiSportParams =
        serde_json::from_value(params).map_err(|e| BoxscoreError::InvalidParams(e.to_string()))?;

    let task = IntelTask::SportsData {
        sport: params.sport,
        team: params.team,
        team2: params.team2,
        action: params.action,
        context: params.context,
    };

    let generated = chain.generate(&task).await;

    let mut payload = generated.payload;
    if let Some(map) = payload.as_object_mut() {
        map.insert("mock".to_string(), Value::Bool(generated.provenance.mock));
        map.insert(
            "source".to_string(),
            Value::String(generated.provenance.source),
        );
    }
    Ok(payload)
}
