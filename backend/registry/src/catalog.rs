//! Built-in agent catalog.
//!
//! One entry per public agent id. `operation` is the name the transport
//! layer uses (backend tool name or sibling function name); `function` is
//! the route name advertised in manifest callback URLs.

use boxscore_core::{AgentDescriptor, Transport};
use serde_json::{json, Value};

/// Schema for agents that accept arbitrary keyword parameters.
fn open_schema() -> Value {
    json!({ "type": "object", "additionalProperties": true })
}

fn backend(
    id: &str,
    name: &str,
    description: &str,
    operation: &str,
    function: &str,
    input_schema: Value,
) -> AgentDescriptor {
    AgentDescriptor {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        operation: operation.to_string(),
        function: function.to_string(),
        transport: Transport::Backend,
        input_schema,
    }
}

fn sibling(id: &str, name: &str, description: &str, operation: &str, input_schema: Value) -> AgentDescriptor {
    AgentDescriptor {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        operation: operation.to_string(),
        // Sibling functions are addressed by their own name.
        function: operation.to_string(),
        transport: Transport::Sibling,
        input_schema,
    }
}

/// The full built-in agent table.
pub fn builtin_agents() -> Vec<AgentDescriptor> {
    vec![
        backend(
            "news-brief",
            "NewsBriefAgent",
            "Fetch latest sports news and return a summarized brief.",
            "news",
            "toolsNews",
            json!({
                "type": "object",
                "additionalProperties": true,
                "properties": {
                    "team": { "type": "string" },
                    "league": { "type": "string" },
                    "limit": { "type": "number", "minimum": 1, "maximum": 10 },
                },
            }),
        ),
        backend(
            "sports-compare-stats",
            "SportsCompareStatsAgent",
            "Compare players/teams by key statistics.",
            "compare_stats",
            "toolsCompareStats",
            open_schema(),
        ),
        backend(
            "sports-check-schedule",
            "SportsCheckScheduleAgent",
            "Get upcoming schedules or past game results.",
            "check_schedule",
            "toolsCheckSchedule",
            open_schema(),
        ),
        backend(
            "team-intelligence",
            "TeamIntelligenceAgent",
            "Generate team insights by combining stats, trends, and news.",
            "team_intelligence",
            "toolsTeamIntelligence",
            open_schema(),
        ),
        backend(
            "youtube-scout",
            "YouTubeScoutAgent",
            "Find and summarize highlight videos for teams and players.",
            "youtube",
            "toolsYoutube",
            open_schema(),
        ),
        backend(
            "voice-tts",
            "VoiceTTSAgent",
            "Convert text briefs to speech audio.",
            "tts",
            "tts",
            open_schema(),
        ),
        backend(
            "aggregate",
            "AggregatorAgent",
            "Orchestrate multiple agents (schedule, compare, news, youtube) and summarize.",
            "aggregate",
            "toolsAggregate",
            open_schema(),
        ),
        sibling(
            "multi-sport",
            "MultiSportAgent",
            "Unified sports agent supporting MLB, NBA, Cricket, Football, and F1 with stats, news, schedule, and analysis.",
            "multi-sport",
            json!({
                "type": "object",
                "properties": {
                    "sport": { "type": "string", "enum": ["mlb", "nba", "cricket", "football", "f1"] },
                    "team": { "type": "string" },
                    "action": { "type": "string", "enum": ["stats", "news", "schedule", "compare"], "default": "stats" },
                    "context": { "type": "string" },
                },
                "required": ["sport", "team"],
            }),
        ),
        sibling(
            "wallet-manager",
            "WalletManagerAgent",
            "Manage crypto wallets, check balances, and handle payments for premium agent access.",
            "crossmint-wallet",
            json!({
                "type": "object",
                "properties": {
                    "action": { "type": "string", "enum": ["create_wallet", "get_balance", "send_payment"] },
                    "userId": { "type": "string" },
                    "amount": { "type": "string" },
                    "currency": { "type": "string", "default": "USDC" },
                },
                "required": ["action", "userId"],
            }),
        ),
        sibling(
            "payment-processor",
            "PaymentProcessorAgent",
            "Process payments for premium agent features using stablecoins and crypto payments.",
            "crossmint-payment",
            json!({
                "type": "object",
                "properties": {
                    "userId": { "type": "string" },
                    "agentId": { "type": "string" },
                    "amount": { "type": "string" },
                    "currency": { "type": "string", "default": "USDC" },
                    "description": { "type": "string" },
                },
                "required": ["userId", "agentId", "amount"],
            }),
        ),
        sibling(
            "mistral-reasoning",
            "MistralReasoningAgent",
            "Advanced reasoning agent using Mistral AI for comprehensive MLB analysis and insights.",
            "mistral-reasoning",
            json!({
                "type": "object",
                "properties": {
                    "team1": { "type": "string" },
                    "team2": { "type": "string" },
                    "context": { "type": "string" },
                    "question": { "type": "string" },
                },
                "required": ["team1", "team2"],
            }),
        ),
        sibling(
            "mistral-codestral",
            "MistralCodestralAgent",
            "Code generation agent using Mistral Codestral for sports analytics, NFT metadata, and betting calculators.",
            "mistral-codestral",
            json!({
                "type": "object",
                "properties": {
                    "type": { "type": "string", "enum": ["sports_analytics", "nft_metadata", "betting_calculator"] },
                    "language": { "type": "string", "default": "Python" },
                    "requirements": { "type": "string" },
                    "context": { "type": "string" },
                },
                "required": ["type", "requirements"],
            }),
        ),
        sibling(
            "mistral-multilingual",
            "MistralMultilingualAgent",
            "Multilingual translation agent using Mistral for real-time sports analysis in multiple languages.",
            "mistral-multilingual",
            json!({
                "type": "object",
                "properties": {
                    "text": { "type": "string" },
                    "target_language": { "type": "string", "default": "English" },
                    "context": { "type": "string" },
                    "voice_mode": { "type": "boolean", "default": false },
                },
                "required": ["text", "target_language"],
            }),
        ),
        sibling(
            "mistral-nft-metadata",
            "MistralNFTMetadataAgent",
            "NFT metadata generation agent using Mistral for sports achievement badges and collectibles.",
            "mistral-nft-metadata",
            json!({
                "type": "object",
                "properties": {
                    "player_name": { "type": "string" },
                    "team": { "type": "string" },
                    "achievement": { "type": "string" },
                    "rarity": { "type": "string", "default": "Common" },
                    "language": { "type": "string", "default": "English" },
                },
                "required": ["player_name", "team", "achievement"],
            }),
        ),
        backend(
            "nba-stats",
            "NbaStatsAgent",
            "NBA team statistics, standings, and performance metrics.",
            "nba",
            "toolsNba",
            open_schema(),
        ),
        backend(
            "nfl-stats",
            "NflStatsAgent",
            "NFL team statistics, standings, and performance metrics.",
            "nfl",
            "toolsNfl",
            open_schema(),
        ),
        backend(
            "pipeline",
            "PipelineAgent",
            "Run a multi-step analysis pipeline combining several tools.",
            "pipeline",
            "toolsPipeline",
            open_schema(),
        ),
        backend(
            "sentiment-agent",
            "SentimentAgent",
            "Analyze fan and media sentiment for a team or player.",
            "sentiment",
            "toolsSentiment",
            open_schema(),
        ),
        backend(
            "predict-agent",
            "PredictAgent",
            "Predict game outcomes from recent form and head-to-head data.",
            "predict",
            "toolsPredict",
            open_schema(),
        ),
        backend(
            "visual-analytics-agent",
            "VisualAnalyticsAgent",
            "Produce chart-ready visual analytics data for a team.",
            "visual-analytics",
            "toolsVisualAnalytics",
            open_schema(),
        ),
        backend(
            "personalized-agent",
            "PersonalizedAgent",
            "Create and query a personalized agent bound to a user's favorite team.",
            "personalized-agent",
            "toolsPersonalizedAgent",
            open_schema(),
        ),
        backend(
            "gamification-agent",
            "GamificationAgent",
            "Achievements, badges, and engagement scoring for fans.",
            "gamification-agent",
            "toolsGamification",
            open_schema(),
        ),
    ]
}
