//! Keyword-matching assistant and the per-session conversation flow.

pub mod catalog;
pub mod controller;
pub mod engine;
pub mod events;
pub mod quick_actions;
pub mod text;

pub use catalog::{describe_other_projects, Catalog, PatternRule, Response, FALLBACK_RESPONSE};
pub use controller::{ChatSession, SendOutcome, SendPhase};
pub use engine::{suggest_follow_up, MatchOutcome, MatchingEngine};
pub use events::ChatEvent;
pub use quick_actions::{find_quick_action, QUICK_ACTIONS};
pub use text::{normalize_text, truncate_message, validate_message};
