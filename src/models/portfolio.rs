use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Experience {
    pub company: &'static str,
    pub title: &'static str,
    pub duration: &'static str,
    pub location: &'static str,
    pub description: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedProject {
    pub id: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub tech_stack: &'static [&'static str],
    pub live_url: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<&'static str>,
    pub outcomes: &'static [&'static str],
    pub features: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherProject {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tech_stack: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_url: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialLinks {
    pub github: &'static str,
    pub linkedin: &'static str,
    pub twitter: &'static str,
    /// Kept in `mailto:` form
    pub email: &'static str,
    pub resume: &'static str,
}
