use crate::chatbot::{Catalog, Response};

pub struct RulesCommand {}

impl RulesCommand {
    pub fn new() -> Self {
        Self {}
    }
}

impl crate::console::commands::CallableTrait for RulesCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        let catalog = Catalog::portfolio()?;

        for (index, rule) in catalog.rules().iter().enumerate() {
            let kind = match rule.response {
                Response::Static(_) => "static",
                Response::Computed(_) => "computed",
            };
            let keywords = if rule.is_fallback() {
                "(fallback)".to_string()
            } else {
                rule.keywords.join(", ")
            };
            println!(
                "{:>2}  p{:<2} {:<10} {:<8} {}",
                index,
                rule.priority,
                rule.category.as_str(),
                kind,
                keywords
            );
        }
        println!("{} rules", catalog.len());

        Ok(())
    }
}
