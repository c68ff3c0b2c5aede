use crate::chatbot::{suggest_follow_up, Catalog, MatchingEngine};
use crate::configuration::get_configuration;
use std::sync::Arc;

/// One local answer, no pacing and no remote call.
pub struct AskCommand {
    message: String,
    explain: bool,
}

impl AskCommand {
    pub fn new(message: String, explain: bool) -> Self {
        Self { message, explain }
    }
}

impl crate::console::commands::CallableTrait for AskCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        let settings = get_configuration()?;
        let engine = MatchingEngine::new(
            Arc::new(Catalog::portfolio()?),
            settings.chatbot.max_bot_message_length,
        );

        let outcome = engine.select_match(&self.message);
        println!("{}", outcome.text);

        if self.explain {
            println!();
            println!(
                "rule #{} ({}) score {} matched {:?}",
                outcome.rule_index, outcome.category, outcome.score, outcome.matched_keywords
            );
            for prompt in suggest_follow_up(outcome.category) {
                println!("  -> {}", prompt);
            }
        }

        Ok(())
    }
}
