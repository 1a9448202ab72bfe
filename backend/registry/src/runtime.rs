//! Per-user runtime manifest synthesis.
//!
//! Given a user profile fetched from the tool backend, produce a manifest
//! describing one personalized agent bound to the user's favorite team,
//! with `analyze_team`, `get_insights`, and `update_preferences` methods.

use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::manifest::function_url;

/// User profile as served by `GET {backend}/tools/user-profile/{user_id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    pub favorite_team: String,
    #[serde(default)]
    pub sport: String,
    #[serde(default)]
    pub preferences: Value,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

fn team_slug(team: &str) -> String {
    team.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-")
}

/// Build the personalized runtime manifest for one user.
pub fn build_runtime_manifest(profile: &UserProfile, base: Option<&str>) -> Value {
    let team = &profile.favorite_team;
    let url = function_url(base, "toolsPersonalizedAgent");

    json!({
        "name": format!("Personalized {team} Agent Runtime"),
        "description": format!("Runtime manifest for {team} fan - {}", profile.user_id),
        "version": "1.0.0",
        "user_specific": true,
        "user_id": profile.user_id,
        "favorite_team": team,
        "sport": profile.sport,
        "generated_at": Utc::now().to_rfc3339(),
        "agents": [
            {
                "id": format!("personalized-{}-agent", team_slug(team)),
                "name": format!("{team} Personal Agent"),
                "description": format!("Your personal {team} assistant"),
                "user_id": profile.user_id,
                "favorite_team": team,
                "sport": profile.sport.to_uppercase(),
                "methods": [
                    {
                        "name": "analyze_team",
                        "http": { "method": "POST", "url": url },
                        "input_schema": {
                            "type": "object",
                            "properties": {
                                "analysis_type": { "type": "string", "enum": ["game", "season", "player", "comparison"] },
                                "context": { "type": "string", "description": "Specific context for analysis" },
                                "user_id": { "type": "string", "default": profile.user_id },
                                "favorite_team": { "type": "string", "default": team },
                            },
                            "required": ["analysis_type"],
                        },
                    },
                    {
                        "name": "get_insights",
                        "http": { "method": "POST", "url": url },
                        "input_schema": {
                            "type": "object",
                            "properties": {
                                "insight_type": { "type": "string", "enum": ["stats", "news", "predictions", "recommendations"] },
                                "timeframe": { "type": "string", "enum": ["today", "week", "month", "season"] },
                                "user_id": { "type": "string", "default": profile.user_id },
                                "favorite_team": { "type": "string", "default": team },
                            },
                            "required": ["insight_type"],
                        },
                    },
                    {
                        "name": "update_preferences",
                        "http": { "method": "POST", "url": url },
                        "input_schema": {
                            "type": "object",
                            "properties": {
                                "preferences": { "type": "object", "description": "Updated user preferences" },
                                "user_id": { "type": "string", "default": profile.user_id },
                            },
                            "required": ["preferences"],
                        },
                    },
                ],
                "custom_config": {
                    "greeting": format!("Hello! I'm your personal {team} assistant. How can I help you today?"),
                    "preferences": profile.preferences,
                    "specializations": [
                        format!("{team} game analysis"),
                        format!("{team} player statistics"),
                        format!("{team} schedule tracking"),
                        format!("{team} news aggregation"),
                    ],
                },
            },
        ],
        "capabilities": [
            "Real-time game analysis",
            "Player performance tracking",
            "Trade rumor analysis",
            "Schedule optimization",
            "Fan sentiment monitoring",
        ],
        "data_sources": [
            format!("{team} official statistics"),
            format!("{} league data", profile.sport),
            format!("{team} social media"),
            format!("{team} news sources"),
        ],
        "created_at": profile.created_at,
        "last_updated": profile.last_updated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            user_id: "fan-42".into(),
            favorite_team: "Red Sox".into(),
            sport: "mlb".into(),
            preferences: json!({"notifications": true}),
            created_at: Some("2024-01-01T00:00:00Z".into()),
            last_updated: None,
        }
    }

    #[test]
    fn agent_id_slugs_multiword_teams() {
        let manifest = build_runtime_manifest(&profile(), None);
        assert_eq!(
            manifest["agents"][0]["id"],
            "personalized-red-sox-agent"
        );
    }

    #[test]
    fn exposes_three_methods() {
        let manifest = build_runtime_manifest(&profile(), Some("https://app.example.com"));
        let methods = manifest["agents"][0]["methods"].as_array().unwrap();
        let names: Vec<_> = methods.iter().map(|m| m["name"].as_str().unwrap()).collect();
        assert_eq!(names, ["analyze_team", "get_insights", "update_preferences"]);
        for method in methods {
            assert_eq!(
                method["http"]["url"],
                "https://app.example.com/.netlify/functions/toolsPersonalizedAgent"
            );
        }
    }

    #[test]
    fn sport_is_uppercased() {
        let manifest = build_runtime_manifest(&profile(), None);
        assert_eq!(manifest["agents"][0]["sport"], "MLB");
    }
}
