use crate::models::QuickAction;

/// Shown while the conversation is still empty
pub const QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction {
        id: "view-projects",
        label: "View Projects",
        icon: "💼",
        prompt: "Tell me about your projects",
    },
    QuickAction {
        id: "download-resume",
        label: "Download Resume",
        icon: "📄",
        prompt: "How can I get your resume?",
    },
    QuickAction {
        id: "contact-info",
        label: "Contact Me",
        icon: "📧",
        prompt: "How can I contact you?",
    },
    QuickAction {
        id: "ask-experience",
        label: "Ask About Experience",
        icon: "🚀",
        prompt: "Tell me about your work experience",
    },
];

pub fn find_quick_action(id: &str) -> Option<&'static QuickAction> {
    QUICK_ACTIONS.iter().find(|action| action.id == id)
}
