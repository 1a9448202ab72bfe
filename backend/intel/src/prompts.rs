//! Prompt templates, one per task type.
//!
//! Kept in one place so prompt construction is testable without any
//! network call and call sites never concatenate strings ad hoc.

use crate::task::IntelTask;

pub fn system_prompt(task: &IntelTask) -> String {
    match task {
        IntelTask::SportsData { .. } => {
            "You are an expert sports data analyst. Generate realistic, current sports data in JSON format.".to_string()
        }
        IntelTask::Reasoning { .. } => {
            "You are an expert MLB analyst with advanced reasoning capabilities. Provide detailed, data-driven insights with clear explanations.".to_string()
        }
        IntelTask::CodeGeneration { .. } => {
            "You are Codestral, an expert code generation model. Generate clean, efficient, and well-documented code following best practices.".to_string()
        }
        IntelTask::Translation { .. } => {
            "You are a multilingual sports analyst with expertise in cultural adaptation and natural language processing. Provide accurate translations with appropriate cultural context.".to_string()
        }
        IntelTask::NftMetadata { .. } => {
            "You are an expert NFT metadata creator specializing in sports collectibles. Create engaging, accurate, and valuable metadata that enhances the collectible experience.".to_string()
        }
    }
}

pub fn user_prompt(task: &IntelTask) -> String {
    match task {
        IntelTask::SportsData { sport, team, context, .. } => {
            let sport = sport.to_uppercase();
            let context = context.as_deref().unwrap_or("current season");
            format!(
                "Generate real-time sports data for {sport} team {team}.\n\n\
                 Provide comprehensive data including:\n\
                 - Current season statistics (wins, losses, averages)\n\
                 - Recent news headlines (last 3 games)\n\
                 - Next game schedule with opponent and time\n\
                 - Team comparison vs league average\n\n\
                 Context: {context}\n\n\
                 Format as JSON with keys: stats, news, schedule, compare.\n\
                 Make it realistic and current."
            )
        }
        IntelTask::Reasoning { team1, team2, context, question } => {
            let context = context.as_deref().unwrap_or("General analysis requested");
            let question = question.as_deref().unwrap_or("Provide comprehensive analysis");
            format!(
                "You are an advanced MLB reasoning agent with access to comprehensive sports data. \
                 Analyze the following information and provide intelligent insights:\n\n\
                 TEAM 1: {team1}\n\
                 TEAM 2: {team2}\n\
                 CONTEXT: {context}\n\
                 QUESTION: {question}\n\n\
                 Please provide:\n\
                 1. **Strategic Analysis**: Key strengths and weaknesses\n\
                 2. **Statistical Insights**: Important metrics and trends\n\
                 3. **Betting Intelligence**: Risk assessment and recommendations\n\
                 4. **Reasoning Process**: Explain your analytical approach\n\
                 5. **Confidence Level**: Rate your analysis confidence (1-10)\n\n\
                 Format your response as structured analysis with clear sections."
            )
        }
        IntelTask::CodeGeneration { kind, language, requirements, context } => match kind.as_str() {
            "sports_analytics" => format!(
                "Generate {language} code for sports analytics with the following requirements:\n\
                 - {requirements}\n\
                 - Context: {}\n\
                 - Include data processing, visualization, and statistical analysis\n\
                 - Add proper error handling and documentation\n\
                 - Use modern best practices",
                context.as_deref().unwrap_or("MLB data analysis")
            ),
            "nft_metadata" => format!(
                "Generate {language} code for NFT metadata generation:\n\
                 - {requirements}\n\
                 - Context: {}\n\
                 - Include metadata structure, image generation, and blockchain integration\n\
                 - Add validation and error handling\n\
                 - Use JSON-LD format for metadata",
                context.as_deref().unwrap_or("Sports-themed NFT collection")
            ),
            "betting_calculator" => format!(
                "Generate {language} code for betting calculator:\n\
                 - {requirements}\n\
                 - Context: {}\n\
                 - Include probability calculations, risk assessment, and payout formulas\n\
                 - Add input validation and security measures\n\
                 - Include unit testing examples",
                context.as_deref().unwrap_or("MLB betting odds analysis")
            ),
            _ => format!(
                "Generate {language} code based on requirements:\n\
                 - {requirements}\n\
                 - Context: {}\n\
                 - Include proper structure, error handling, and documentation",
                context.as_deref().unwrap_or("General application")
            ),
        },
        IntelTask::Translation { text, target_language, context, voice_mode } => {
            let voice_note = if *voice_mode {
                "This will be spoken aloud, so use natural conversational tone. "
            } else {
                ""
            };
            let style = if *voice_mode {
                "Make it conversational and engaging for voice output"
            } else {
                "Keep it professional and informative"
            };
            format!(
                "You are a multilingual sports analyst assistant. {voice_note}\n\n\
                 CONTEXT: {}\n\
                 TARGET LANGUAGE: {target_language}\n\
                 ORIGINAL TEXT: {text}\n\n\
                 Please:\n\
                 1. Translate the text to {target_language}\n\
                 2. Adapt it for sports context if needed\n\
                 3. {style}\n\
                 4. Maintain accuracy of sports terminology\n\
                 5. Add cultural context if relevant\n\n\
                 Format: Provide the translation with brief explanation of any cultural adaptations.",
                context.as_deref().unwrap_or("MLB sports analysis")
            )
        }
        IntelTask::NftMetadata { player_name, team, achievement, rarity, language } => format!(
            "Generate comprehensive NFT metadata for a sports achievement badge:\n\n\
             PLAYER: {player_name}\n\
             TEAM: {team}\n\
             ACHIEVEMENT: {achievement}\n\
             RARITY: {rarity}\n\
             LANGUAGE: {language}\n\n\
             Create:\n\
             1. **Name**: Creative badge name\n\
             2. **Description**: Detailed achievement description (2-3 sentences)\n\
             3. **Attributes**: Array of traits (position, team, season, achievement type, rarity)\n\
             4. **Story**: Background story of the achievement\n\
             5. **Image Prompt**: Detailed prompt for AI image generation\n\
             6. **Tags**: Relevant keywords for discovery\n\n\
             Format as JSON-LD metadata following OpenSea standards. Make it engaging and collectible."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reasoning_prompt_carries_parameters() {
        let task = IntelTask::Reasoning {
            team1: "Yankees".into(),
            team2: "Red Sox".into(),
            context: Some("Game analysis".into()),
            question: Some("Who has the advantage?".into()),
        };
        let prompt = user_prompt(&task);
        assert!(prompt.contains("TEAM 1: Yankees"));
        assert!(prompt.contains("TEAM 2: Red Sox"));
        assert!(prompt.contains("QUESTION: Who has the advantage?"));
    }

    #[test]
    fn reasoning_prompt_defaults_optionals() {
        let task = IntelTask::Reasoning {
            team1: "Yankees".into(),
            team2: "Red Sox".into(),
            context: None,
            question: None,
        };
        let prompt = user_prompt(&task);
        assert!(prompt.contains("CONTEXT: General analysis requested"));
        assert!(prompt.contains("QUESTION: Provide comprehensive analysis"));
    }

    #[test]
    fn codegen_prompt_varies_by_kind() {
        let mk = |kind: &str| IntelTask::CodeGeneration {
            kind: kind.into(),
            language: "Python".into(),
            requirements: "Create a batting average calculator".into(),
            context: None,
        };
        assert!(user_prompt(&mk("sports_analytics")).contains("statistical analysis"));
        assert!(user_prompt(&mk("betting_calculator")).contains("payout formulas"));
        assert!(user_prompt(&mk("something_else")).contains("proper structure"));
    }

    #[test]
    fn translation_prompt_respects_voice_mode() {
        let task = IntelTask::Translation {
            text: "The Yankees are leading".into(),
            target_language: "Spanish".into(),
            context: None,
            voice_mode: true,
        };
        assert!(user_prompt(&task).contains("conversational and engaging"));
    }

    #[test]
    fn sports_prompt_asks_for_json_shape() {
        let task = IntelTask::SportsData {
            sport: "nba".into(),
            team: "Lakers".into(),
            team2: "Warriors".into(),
            action: "stats".into(),
            context: None,
        };
        let prompt = user_prompt(&task);
        assert!(prompt.contains("NBA team Lakers"));
        assert!(prompt.contains("stats, news, schedule, compare"));
    }
}
