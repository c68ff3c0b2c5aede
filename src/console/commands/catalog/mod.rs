mod context;
mod quick_actions;
mod rules;

pub use context::ContextCommand;
pub use quick_actions::QuickActionsCommand;
pub use rules::RulesCommand;
