use crate::portfolio::{ContextBundle, PortfolioSummary};

/// Prints what the remote model is grounded on.
pub struct ContextCommand {
    summary: bool,
}

impl ContextCommand {
    pub fn new(summary: bool) -> Self {
        Self { summary }
    }
}

impl crate::console::commands::CallableTrait for ContextCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        let output = if self.summary {
            serde_json::to_string_pretty(&PortfolioSummary::build())?
        } else {
            serde_json::to_string_pretty(&ContextBundle::build())?
        };
        println!("{}", output);
        Ok(())
    }
}
