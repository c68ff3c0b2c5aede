use super::{EXPERIENCES, FEATURED_PROJECTS, OTHER_PROJECTS, OWNER_NAME, SOCIAL_LINKS};
use crate::models::{Experience, FeaturedProject, OtherProject};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ContextMeta {
    pub name: &'static str,
    pub purpose: &'static str,
    pub version: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactDetails {
    /// Bare address, no `mailto:`
    pub email: String,
    pub linkedin: String,
    pub github: String,
    pub resume: String,
}

impl ContactDetails {
    pub fn from_links() -> Self {
        Self {
            email: SOCIAL_LINKS.email.trim_start_matches("mailto:").to_string(),
            linkedin: SOCIAL_LINKS.linkedin.to_string(),
            github: SOCIAL_LINKS.github.to_string(),
            resume: SOCIAL_LINKS.resume.to_string(),
        }
    }
}

/// Grounding data handed to the remote model. Built on demand, never stored.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextBundle {
    pub meta: ContextMeta,
    pub contact: ContactDetails,
    pub experiences: &'static [Experience],
    pub featured_projects: &'static [FeaturedProject],
    pub other_projects: &'static [OtherProject],
}

impl ContextBundle {
    pub fn build() -> Self {
        Self {
            meta: ContextMeta {
                name: OWNER_NAME,
                purpose: "Portfolio AI assistant for answering questions about Pawel's work, projects, and skills.",
                version: 1,
            },
            contact: ContactDetails::from_links(),
            experiences: EXPERIENCES,
            featured_projects: FEATURED_PROJECTS,
            other_projects: OTHER_PROJECTS,
        }
    }

    pub fn to_value(&self) -> serde_json::Value {
        // only &'static str and plain structs inside, serialization cannot fail
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// Flattened summaries derived from the portfolio records
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub experience_summary: String,
    pub featured_projects_list: String,
    pub tech_stack: Vec<&'static str>,
    pub contact: ContactDetails,
}

impl PortfolioSummary {
    pub fn build() -> Self {
        let experience_summary = EXPERIENCES
            .iter()
            .map(|exp| format!("{} at {} ({})", exp.title, exp.company, exp.duration))
            .collect::<Vec<_>>()
            .join(", ");

        let featured_projects_list = FEATURED_PROJECTS
            .iter()
            .map(|proj| format!("{}: {}", proj.title, proj.tagline))
            .collect::<Vec<_>>()
            .join("; ");

        let mut tech_stack: Vec<&'static str> = Vec::new();
        let all_stacks = FEATURED_PROJECTS
            .iter()
            .flat_map(|p| p.tech_stack.iter())
            .chain(OTHER_PROJECTS.iter().flat_map(|p| p.tech_stack.iter()));
        for tech in all_stacks {
            if !tech_stack.contains(tech) {
                tech_stack.push(tech);
            }
        }

        Self {
            experience_summary,
            featured_projects_list,
            tech_stack,
            contact: ContactDetails::from_links(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_bundle_uses_camel_case_sections() {
        let value = ContextBundle::build().to_value();
        assert_eq!(value["meta"]["name"], "Pawel Sloboda");
        assert_eq!(value["meta"]["version"], 1);
        assert_eq!(value["contact"]["email"], "pawelsloboda5@gmail.com");
        assert_eq!(value["experiences"].as_array().unwrap().len(), 4);
        assert_eq!(value["featuredProjects"][0]["title"], "SIE Wellness");
        assert_eq!(value["featuredProjects"][0]["liveUrl"], "https://www.sie2.com");
        assert_eq!(value["otherProjects"].as_array().unwrap().len(), 6);
    }

    #[test]
    fn summary_lists_every_experience_and_featured_project() {
        let summary = PortfolioSummary::build();
        assert!(summary
            .experience_summary
            .starts_with("Full-Stack Software Engineer at Social Impact Enterprise (May 2025 - August 2025)"));
        assert_eq!(summary.experience_summary.matches(" at ").count(), 4);
        assert_eq!(
            summary.featured_projects_list,
            "SIE Wellness: AI Copilot for Health Access; Apicus.io: Automation ROI & AI Recommender System; SecuSpark: Gamified AI Security+ Exam Prep"
        );
    }

    #[test]
    fn tech_stack_is_deduplicated_in_first_seen_order() {
        let summary = PortfolioSummary::build();
        assert_eq!(summary.tech_stack[0], "Next.js 15");
        let python = summary.tech_stack.iter().filter(|t| **t == "Python").count();
        assert_eq!(python, 1);
        assert!(summary.tech_stack.contains(&"seaborn"));
    }
}
