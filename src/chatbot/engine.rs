use super::catalog::{Catalog, PatternRule};
use super::text::{normalize_text, truncate_message};
use crate::models::Category;
use std::sync::Arc;

const EXACT_TOKEN_SCORE: u32 = 10;
const SUBSTRING_SCORE: u32 = 5;

/// Last resort if a catalog somehow yields no candidate
const NO_MATCH_RESPONSE: &str =
    "I'm having trouble understanding that. Can you try rephrasing your question?";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    pub text: String,
    pub category: Category,
    pub rule_index: usize,
    /// Raw score times priority
    pub score: u32,
    pub matched_keywords: Vec<String>,
}

/// Priority-weighted keyword scoring over a static catalog.
#[derive(Debug, Clone)]
pub struct MatchingEngine {
    catalog: Arc<Catalog>,
    max_response_length: usize,
}

impl MatchingEngine {
    pub fn new(catalog: Arc<Catalog>, max_response_length: usize) -> Self {
        Self {
            catalog,
            max_response_length,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn select_response(&self, utterance: &str) -> String {
        self.select_match(utterance).text
    }

    pub fn select_match(&self, utterance: &str) -> MatchOutcome {
        let normalized = normalize_text(utterance);
        let tokens: Vec<&str> = normalized.split(' ').collect();

        let mut best: Option<(usize, u32, Vec<String>)> = None;
        for (index, rule) in self.catalog.rules().iter().enumerate() {
            let (raw, matched) = score_rule(&normalized, &tokens, rule);
            let weighted = raw * rule.priority;

            if weighted == 0 && !rule.is_fallback() {
                continue;
            }
            // strictly greater: on ties the earlier rule stays
            if best.as_ref().map_or(true, |(_, score, _)| weighted > *score) {
                best = Some((index, weighted, matched));
            }
        }

        let Some((rule_index, score, matched_keywords)) = best else {
            tracing::error!("Pattern catalog produced no candidate");
            return MatchOutcome {
                text: NO_MATCH_RESPONSE.to_string(),
                category: Category::General,
                rule_index: usize::MAX,
                score: 0,
                matched_keywords: vec![],
            };
        };

        let rule = &self.catalog.rules()[rule_index];
        let mut text = rule.response.render(utterance);
        if text.trim().is_empty() {
            tracing::warn!(rule_index, "Rule rendered an empty response");
            text = NO_MATCH_RESPONSE.to_string();
        }

        tracing::debug!(
            rule_index,
            score,
            category = %rule.category,
            matched = ?matched_keywords,
            "Selected response rule"
        );

        MatchOutcome {
            text: truncate_message(&text, self.max_response_length),
            category: rule.category,
            rule_index,
            score,
            matched_keywords,
        }
    }
}

fn score_rule(normalized: &str, tokens: &[&str], rule: &PatternRule) -> (u32, Vec<String>) {
    let mut score = 0;
    let mut matched = Vec::new();

    for keyword in &rule.keywords {
        let keyword_norm = normalize_text(keyword);
        if keyword_norm.is_empty() {
            continue;
        }

        if tokens.contains(&keyword_norm.as_str()) {
            score += EXACT_TOKEN_SCORE;
            matched.push(keyword.clone());
        } else if normalized.contains(&keyword_norm) {
            score += SUBSTRING_SCORE;
            matched.push(keyword.clone());
        }
    }

    (score, matched)
}

/// Canned follow-up prompts for the category of the last answer
pub fn suggest_follow_up(category: Category) -> [&'static str; 3] {
    match category {
        Category::Projects => [
            "Tell me more about SIE Wellness",
            "What was your biggest technical challenge?",
            "How do you approach new projects?",
        ],
        Category::Experience => [
            "What did you learn at Adobe?",
            "Tell me about your DoD work",
            "What kind of roles are you looking for?",
        ],
        Category::Skills => [
            "What's your AI/ML experience?",
            "What databases have you worked with?",
            "What's your preferred tech stack?",
        ],
        Category::Contact => [
            "Can I get your resume?",
            "What's your email?",
            "Are you available for consulting?",
        ],
        Category::General => [
            "What projects have you built?",
            "Where have you worked?",
            "What are your technical skills?",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chatbot::catalog::FALLBACK_RESPONSE;

    fn portfolio_engine() -> MatchingEngine {
        MatchingEngine::new(Arc::new(Catalog::portfolio().unwrap()), 1000)
    }

    fn engine_with(rules: Vec<PatternRule>, max: usize) -> MatchingEngine {
        MatchingEngine::new(Arc::new(Catalog::new(rules).unwrap()), max)
    }

    #[test]
    fn projects_question_selects_projects_rule() {
        let outcome = portfolio_engine().select_match("Tell me about your projects");
        assert_eq!(outcome.category, Category::Projects);
        assert_eq!(outcome.rule_index, 0);
        assert!(outcome.text.contains("SIE Wellness"));
        assert_eq!(outcome.score, 150);
    }

    #[test]
    fn other_projects_question_lists_the_other_projects() {
        let engine = portfolio_engine();
        for utterance in ["Tell me about your other projects", "any side projects?"] {
            let outcome = engine.select_match(utterance);
            assert_ne!(outcome.rule_index, 0, "{:?}", utterance);
            assert_eq!(outcome.category, Category::Projects);
            assert!(
                outcome.text.starts_with("Beyond the featured work"),
                "{:?}",
                utterance
            );
        }
    }

    #[test]
    fn gibberish_falls_back() {
        let engine = portfolio_engine();
        assert_eq!(engine.select_response("asdkjasd"), FALLBACK_RESPONSE);
        assert_eq!(engine.select_match("asdkjasd").score, 0);
    }

    #[test]
    fn every_utterance_gets_non_empty_text() {
        let engine = portfolio_engine();
        for utterance in ["", "   ", "?!?", "👋", "zzzz qqqq", "hi", &"word ".repeat(200)] {
            assert!(!engine.select_response(utterance).trim().is_empty(), "{:?}", utterance);
        }
    }

    #[test]
    fn exact_token_outranks_lower_priority_rules() {
        let outcome = portfolio_engine().select_match("How can I contact you?");
        assert_eq!(outcome.category, Category::Contact);
        assert!(outcome.text.contains("pawelsloboda5@gmail.com"));
    }

    #[test]
    fn specific_company_question_selects_company_rule() {
        let outcome = portfolio_engine().select_match("What did you do at Adobe?");
        assert_eq!(outcome.category, Category::Experience);
        assert!(outcome.text.starts_with("At **Adobe**"));
    }

    #[test]
    fn computed_rule_renders_from_utterance() {
        let outcome = portfolio_engine().select_match("What is RustHax?");
        assert_eq!(outcome.category, Category::Projects);
        assert!(outcome.text.contains("YOLOv8"));
    }

    #[test]
    fn substring_hit_scores_half_of_exact_hit() {
        let engine = engine_with(
            vec![
                PatternRule::new(&["project"], 1, Category::Projects, "p"),
                PatternRule::new(&[], 1, Category::General, "f"),
            ],
            100,
        );
        assert_eq!(engine.select_match("project").score, 10);
        assert_eq!(engine.select_match("projects").score, 5);
        assert_eq!(engine.select_match("projects").matched_keywords, vec!["project"]);
    }

    #[test]
    fn ties_resolve_to_first_listed_rule() {
        let engine = engine_with(
            vec![
                PatternRule::new(&["alpha"], 2, Category::General, "first"),
                PatternRule::new(&["beta"], 2, Category::General, "second"),
                PatternRule::new(&[], 1, Category::General, "fallback"),
            ],
            100,
        );
        for _ in 0..20 {
            assert_eq!(engine.select_response("alpha beta"), "first");
            assert_eq!(engine.select_response("beta alpha"), "first");
        }
    }

    #[test]
    fn fallback_listed_first_still_loses_to_a_hit() {
        let engine = engine_with(
            vec![
                PatternRule::new(&[], 1, Category::General, "fallback"),
                PatternRule::new(&["alpha"], 1, Category::General, "alpha"),
            ],
            100,
        );
        assert_eq!(engine.select_response("alpha"), "alpha");
        assert_eq!(engine.select_response("gamma"), "fallback");
    }

    #[test]
    fn long_responses_are_truncated() {
        let engine = engine_with(
            vec![PatternRule::new(&[], 1, Category::General, &"z".repeat(50))],
            20,
        );
        let text = engine.select_response("anything");
        assert_eq!(text.chars().count(), 20);
        assert!(text.ends_with("..."));
    }

    #[test]
    fn empty_computed_response_is_replaced() {
        let engine = engine_with(
            vec![PatternRule::computed(&[], 1, Category::General, |_| String::new())],
            100,
        );
        assert_eq!(engine.select_response("x"), NO_MATCH_RESPONSE);
    }

    #[test]
    fn follow_ups_exist_for_every_category() {
        for category in [
            Category::Projects,
            Category::Experience,
            Category::Skills,
            Category::Contact,
            Category::General,
        ] {
            assert!(suggest_follow_up(category).iter().all(|s| !s.is_empty()));
        }
        assert_eq!(
            suggest_follow_up(Category::Projects)[0],
            "Tell me more about SIE Wellness"
        );
    }
}
