pub mod chat;
pub mod chatbot;
pub mod health_checks;

pub use health_checks::*;
