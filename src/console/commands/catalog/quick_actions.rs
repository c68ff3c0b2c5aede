use crate::chatbot::QUICK_ACTIONS;

pub struct QuickActionsCommand {}

impl QuickActionsCommand {
    pub fn new() -> Self {
        Self {}
    }
}

impl crate::console::commands::CallableTrait for QuickActionsCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        for action in QUICK_ACTIONS {
            println!(
                "{} {:<16} {:<22} \"{}\"",
                action.icon, action.id, action.label, action.prompt
            );
        }
        Ok(())
    }
}
