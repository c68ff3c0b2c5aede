use super::text::normalize_text;
use crate::errors::ConfigurationError;
use crate::models::{Category, OtherProject};
use crate::portfolio::OTHER_PROJECTS;
use std::fmt;
use std::sync::Arc;

pub type ComputedResponse = Arc<dyn Fn(&str) -> String + Send + Sync>;

#[derive(Clone)]
pub enum Response {
    Static(String),
    /// Pure function of the raw utterance
    Computed(ComputedResponse),
}

impl Response {
    pub fn render(&self, utterance: &str) -> String {
        match self {
            Response::Static(text) => text.clone(),
            Response::Computed(compute) => compute(utterance),
        }
    }

    fn same_as(&self, other: &Response) -> bool {
        match (self, other) {
            (Response::Static(a), Response::Static(b)) => a == b,
            (Response::Computed(a), Response::Computed(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Static(text) => f.debug_tuple("Static").field(text).finish(),
            Response::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PatternRule {
    /// Lowercase trigger terms; empty marks the fallback rule
    pub keywords: Vec<String>,
    pub priority: u32,
    pub category: Category,
    pub response: Response,
}

impl PatternRule {
    pub fn new(keywords: &[&str], priority: u32, category: Category, response: &str) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            priority,
            category,
            response: Response::Static(response.to_string()),
        }
    }

    pub fn computed<F>(keywords: &[&str], priority: u32, category: Category, compute: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self {
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            priority,
            category,
            response: Response::Computed(Arc::new(compute)),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.keywords.is_empty()
    }

    fn same_as(&self, other: &PatternRule) -> bool {
        self.keywords == other.keywords
            && self.priority == other.priority
            && self.category == other.category
            && self.response.same_as(&other.response)
    }
}

/// Ordered, immutable rule list. Order is the tie-break.
#[derive(Debug, Clone)]
pub struct Catalog {
    rules: Vec<PatternRule>,
}

impl Catalog {
    pub fn new(rules: Vec<PatternRule>) -> Result<Self, ConfigurationError> {
        if let Some(index) = rules.iter().position(|rule| rule.priority == 0) {
            return Err(ConfigurationError::NonPositivePriority { index });
        }

        let fallbacks = rules.iter().filter(|rule| rule.is_fallback()).count();
        if fallbacks != 1 {
            return Err(ConfigurationError::FallbackCount { found: fallbacks });
        }

        for (first, rule) in rules.iter().enumerate() {
            if let Some(offset) = rules[first + 1..].iter().position(|other| rule.same_as(other)) {
                return Err(ConfigurationError::DuplicateRule {
                    first,
                    second: first + 1 + offset,
                });
            }
        }

        Ok(Self { rules })
    }

    /// The portfolio owner's catalog
    pub fn portfolio() -> Result<Self, ConfigurationError> {
        Self::new(portfolio_rules())
    }

    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

const OTHER_PROJECT_ALIASES: &[(&str, &[&str])] = &[
    ("healthcare-cost-navigator", &["navigator", "hospital pricing"]),
    ("digitizemd", &["digitizemd", "digitize"]),
    ("npi-lookup-mcp", &["npi", "mcp"]),
    ("rusthax", &["rusthax", "object detection", "yolo"]),
    ("ml-trading-strategy", &["trading"]),
    ("calworks-analysis", &["calworks"]),
];

fn find_other_project(utterance: &str) -> Option<&'static OtherProject> {
    let normalized = normalize_text(utterance);
    let tokens: Vec<&str> = normalized.split(' ').collect();

    OTHER_PROJECT_ALIASES
        .iter()
        .find(|(_, aliases)| {
            aliases.iter().any(|alias| {
                if alias.contains(' ') {
                    normalized.contains(alias)
                } else {
                    tokens.contains(alias)
                }
            })
        })
        .and_then(|(id, _)| OTHER_PROJECTS.iter().find(|p| p.id == *id))
}

/// Answers about the smaller projects: one project when named, else the list.
pub fn describe_other_projects(utterance: &str) -> String {
    if let Some(project) = find_other_project(utterance) {
        let mut reply = format!(
            "**{}**\n\n{}\n\n**Tech Stack:** {}",
            project.title,
            project.description,
            project.tech_stack.join(", ")
        );
        if let Some(url) = project.external_url {
            reply.push_str(&format!("\n\nVisit: {}", url));
        }
        return reply;
    }

    let lines = OTHER_PROJECTS
        .iter()
        .map(|project| {
            let headline = project
                .description
                .split(". ")
                .next()
                .unwrap_or(project.description)
                .trim_end_matches('.');
            format!("- **{}** - {}.", project.title, headline)
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Beyond the featured work, here are some other projects I've built:\n\n{}\n\nWant the details on any of them?",
        lines
    )
}

pub fn portfolio_rules() -> Vec<PatternRule> {
    vec![
        PatternRule::new(
            &["project", "projects", "work", "built", "portfolio", "build", "created", "made"],
            10,
            Category::Projects,
            r#"I've worked on some exciting projects! Here are my featured ones:

🏥 **SIE Wellness** - AI-powered health-access platform helping uninsured users find free/low-cost medical care. Built with Next.js, Azure OpenAI, and Cosmos DB. Adopted by 2 shelters and 30+ caseworkers.

🤖 **Apicus.io** - Automation ROI intelligence platform using RAG and vector search across 500K+ automation combinations. Increased retrieval accuracy by 50%.

🎮 **SecuSpark** - Gamified Security+ exam prep app with AI explanations. Scaled to 1,000+ monthly users with 54% engagement increase.

Want to know more about any specific project?"#,
        ),
        PatternRule::new(
            &["sie", "wellness", "sie2", "health", "healthcare", "medical"],
            9,
            Category::Projects,
            r#"**SIE Wellness** is an AI-driven health-access platform I built to help uninsured and low-income users find free or low-cost medical care across the DMV area.

**Key Features:**
- AI Copilot chat with retrieval-augmented generation
- Semantic search across 50K+ provider services
- Dynamic knowledge graph for filtering
- Programmatic SEO (3,500+ indexed pages)

**Impact:**
- Adopted by 2 shelters and 30+ caseworkers
- 100K+ Google impressions in 3 weeks
- Reduced query latency to <150ms

**Tech Stack:** Next.js 15, Azure OpenAI, Cosmos DB, Docker, Python

Check it out: https://www.sie2.com"#,
        ),
        PatternRule::new(
            &["apicus", "automation", "roi"],
            9,
            Category::Projects,
            r#"**Apicus.io** is an AI-powered automation ROI intelligence platform that helps companies calculate return on investment for workflow automations.

**Core Technology:**
- RAG system with vector database of 500,000+ automation combinations
- Matches use cases to cost-effective workflows
- Dynamic savings computation

**Results:**
- 50% increase in retrieval accuracy
- 70% reduction in deployment cycle
- Scaled to 50+ beta users across 3 agencies

**Tech Stack:** Next.js 15, FastAPI, Azure OpenAI, MongoDB Atlas, LangChain

Visit: https://apicus.io"#,
        ),
        PatternRule::new(
            &["secuspark", "security+", "comptia", "exam", "study", "gamified"],
            9,
            Category::Projects,
            r#"**SecuSpark** is a gamified, AI-powered learning platform for CompTIA Security+ certification prep.

**Features:**
- AI explanations & mnemonics for every question
- Adaptive difficulty engine based on performance
- RPG-style progression with levels and achievements
- Offline-first PWA (works without internet)

**Success Metrics:**
- 1,000+ monthly active users
- 54% increase in engagement rates
- Improved retention through AI-powered explanations

**Tech Stack:** React, TypeScript, IndexedDB, OpenAI Responses API, Vite

Try it: https://secuspark.com"#,
        ),
        PatternRule::computed(
            &[
                "navigator",
                "digitizemd",
                "npi",
                "mcp",
                "rusthax",
                "yolo",
                "trading",
                "calworks",
                "other",
                "side projects",
                "other projects",
                "project",
                "projects",
            ],
            9,
            Category::Projects,
            describe_other_projects,
        ),
        PatternRule::new(
            &["experience", "work", "worked", "job", "jobs", "career", "employment", "companies", "company"],
            10,
            Category::Experience,
            r#"I've had the opportunity to work at some great companies:

**🚀 Social Impact Enterprise** (July 2025 - Oct 2025)
Full-Stack Software Engineer - Built AI health-access platform mining 3k+ DMV providers, deployed Cosmos DB + Azure OpenAI for semantic search.

**🇺🇸 National Defense University (DoD)** (March 2025 - June 2025)
Software Engineer - Led Windows 7→11 migration for cyber warfare simulations, built local RAG bot with SharePoint integration.

**🎨 Adobe** (May 2024 - Aug 2024)
Machine Learning Engineer Intern - Developed ML pipeline with 1.5M+ data points, optimized XGBoost model processing 100M+ rows.

**💼 Adobe** (May 2023 - Aug 2023)
Business Development Representative Intern - Automated AI-driven email campaigns, qualified 300+ enterprise leads.

Want to hear more about any specific role?"#,
        ),
        PatternRule::new(
            &["adobe", "xgboost", "machine learning", "ml engineer"],
            9,
            Category::Experience,
            r#"At **Adobe**, I wore two hats across two different summers:

**Machine Learning Engineer Intern** (Summer 2024):
- Built ML pipeline integrating 1.5M+ data points from multiple analytics dashboards
- Optimized XGBoost model for 100M+ rows, achieving 40% faster processing
- Delivered reporting tool transforming analytics into leadership insights

**Business Development Representative Intern** (Summer 2023):
- Automated AI-driven email campaigns (+18% outreach)
- Qualified 300+ enterprise leads
- Boosted engagement +46% with targeted strategies

Both roles taught me the importance of combining technical skills with business impact."#,
        ),
        PatternRule::new(
            &["defense", "dod", "military", "ndu", "cybersecurity", "cyber"],
            9,
            Category::Experience,
            r#"At the **National Defense University (DoD)**, I worked as a Software Engineer on some critical infrastructure projects:

**Key Projects:**
- Led Windows 7→11 migration across 80 laptops for cyber warfare simulations
- Automated cybersecurity toolchain setup (Kali, Metasploit, Wireshark)
- Built local RAG bot with Python, LangChain, and Llama integrated with SharePoint
- Engineered Selenium bot with OpenAI to extract 10k+ structured alumni profiles

It was my first experience working with government security requirements and defense systems. Started with just 3 months left on the contract but delivered multiple high-impact projects."#,
        ),
        PatternRule::new(
            &["skills", "technologies", "tech", "stack", "tools", "languages", "frameworks"],
            8,
            Category::Skills,
            r#"Here are the technologies I've been working with recently:

**Languages:** TypeScript / JavaScript, Python, SQL

**Frontend:** React 19 / Next.js 15, Tailwind CSS, Astro

**Backend:** FastAPI, Node.js, Express

**AI/ML:** OpenAI / Azure OpenAI, Responses API, LangChain, Vector DBs / RAG

**Databases:** PostgreSQL / Prisma, Azure Cosmos DB / MongoDB, pgvector

**DevOps:** Docker, GitHub Actions, Azure Cloud

I specialize in full-stack development with a strong focus on AI integration and data engineering."#,
        ),
        PatternRule::new(
            &["ai", "artificial intelligence", "openai", "rag", "vector", "embeddings", "llm"],
            9,
            Category::Skills,
            r#"I have extensive experience with **AI/ML technologies**:

**Frameworks & APIs:**
- OpenAI API & Azure OpenAI
- Responses API for streaming
- LangChain for orchestration
- Custom RAG implementations

**Vector Search:**
- Semantic search with embeddings
- pgvector, MongoDB Atlas, Cosmos DB vCore
- Sub-second query performance at scale

**Real-World Projects:**
- Built AI copilot handling 50K+ services (SIE Wellness)
- RAG system with 500K+ document combinations (Apicus)
- AI explanations for educational content (SecuSpark)

I love building AI systems that solve real problems, not just demos."#,
        ),
        PatternRule::new(
            &["contact", "email", "reach", "get in touch", "hire", "available", "talk", "connect"],
            10,
            Category::Contact,
            r#"I'd love to hear from you! Here are the best ways to reach me:

📧 **Email:** pawelsloboda5@gmail.com
💼 **LinkedIn:** https://www.linkedin.com/in/pawel-sloboda-383181216/
💻 **GitHub:** https://github.com/pawelsloboda5

I'm currently looking for new opportunities and interesting projects. Whether you have a question, want to collaborate, or just want to say hi, feel free to reach out!

I typically respond within 24 hours."#,
        ),
        PatternRule::new(
            &["resume", "cv", "curriculum vitae", "download", "pdf"],
            10,
            Category::Contact,
            r#"You can download my resume here:

📄 **[Download Resume PDF](/FULL-STACK-AZURE-ENGINEER-PAWEL-SLOBODA.pdf)**

My resume includes:
- Detailed work experience
- Technical skills and certifications
- Project highlights and impact metrics
- Education and achievements

Feel free to share it with anyone who might be interested. If you have any questions about my background, just ask!"#,
        ),
        PatternRule::new(
            &["who", "about", "background", "story", "yourself", "you"],
            7,
            Category::General,
            r#"Hey! I'm **Pawel Sloboda**, a software engineer who's been building things for the web since I was 12.

**My Journey:**
Started with Adobe Flash games on Kongregate that reached 50,000+ gameplays. That early experience of building something people actually used sparked a passion that shaped my entire career.

**Recent Work:**
- Built AI health platforms at a social impact startup
- Developed ML pipelines at Adobe
- Engineered cybersecurity infrastructure for the Department of Defense

**What I Do:**
I specialize in full-stack development with a focus on AI integration, vector search, and data engineering.

Want to know more about anything specific?"#,
        ),
        PatternRule::new(
            &["hello", "hi", "hey", "greetings", "sup", "yo"],
            5,
            Category::General,
            r#"Hey there! 👋 I'm Pawel's AI assistant. I can help you learn more about his work, projects, and experience.

What would you like to know? Feel free to ask about:
- His projects and what he's built
- Work experience and companies he's worked with
- Technical skills and technologies he uses
- How to get in touch or download his resume

Go ahead, ask me anything!"#,
        ),
        PatternRule::new(
            &["thanks", "thank you", "appreciate", "helpful"],
            5,
            Category::General,
            r#"You're very welcome! 😊

Is there anything else you'd like to know about Pawel's work or experience? I'm here to help!"#,
        ),
        PatternRule::new(&[], 1, Category::General, FALLBACK_RESPONSE),
    ]
}

pub const FALLBACK_RESPONSE: &str = r#"I'm not sure I understand that question, but I'd love to help!

I can tell you about:
- **Projects**: SIE Wellness, Apicus.io, SecuSpark, and more
- **Experience**: Social Impact Enterprise, DoD, Adobe
- **Skills**: AI/ML, full-stack development, cloud infrastructure
- **Contact**: Email, LinkedIn, or resume download

What would you like to know?"#;
