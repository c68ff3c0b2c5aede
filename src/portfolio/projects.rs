use crate::models::{FeaturedProject, OtherProject};

pub const FEATURED_PROJECTS: &[FeaturedProject] = &[
    FeaturedProject {
        id: "sie-wellness",
        title: "SIE Wellness",
        tagline: "AI Copilot for Health Access",
        description: "An AI-driven health-access platform designed to help uninsured and low-income users find free or low-cost medical care across the DMV area. The system combines semantic search, vector embeddings, and an AI Copilot chat assistant to guide users to the best clinics, hospitals, or providers for their needs. Adopted by caseworkers across Washington D.C. With 100K+ Google impressions in 3 weeks.",
        tech_stack: &["Next.js 15", "React 19", "TypeScript", "Azure OpenAI", "Azure Cosmos DB", "Docker", "Python"],
        live_url: "https://www.sie2.com",
        github_url: None,
        outcomes: &[
            "Adopted by 2 shelters and 30+ caseworkers across Washington D.C.",
            "Indexed 3,500+ programmatic pages, achieving 100K+ Google impressions in 3 weeks",
            "Reduced query latency from 300ms to <150ms and Cosmos DB RU cost by 38%",
        ],
        features: &[
            "AI Copilot Chat with retrieval-augmented generation",
            "Semantic search across 50K+ provider services",
            "Dynamic knowledge graph for medical service filtering",
            "SEO automation for programmatic pages",
            "Nightly data refresh pipeline",
        ],
    },
    FeaturedProject {
        id: "apicus",
        title: "Apicus.io",
        tagline: "Automation ROI & AI Recommender System",
        description: "An AI-powered automation ROI intelligence platform that helps companies calculate return on investment for workflow automations. Uses an advanced Retrieval-Augmented Generation (RAG) system and a vector database of 500,000+ automation combinations to match use cases to the most cost-effective workflows. Increased retrieval accuracy by 50% and scaled to 50+ consultants evaluating platform.",
        tech_stack: &["Next.js 15", "FastAPI", "Python", "Azure OpenAI", "MongoDB Atlas", "LangChain", "Docker"],
        live_url: "https://apicus.io",
        github_url: None,
        outcomes: &[
            "Increased retrieval accuracy by 50% with vector search and hybrid filtering",
            "Reduced deployment cycle by 70% via containerized Azure pipeline",
            "Scaled platform to 50+ beta users across 3 agencies",
        ],
        features: &[
            "ROI Calculator with dynamic savings computation",
            "Automation Recommender using contextual embeddings",
            "RAG Retrieval System powered by OpenAI",
            "Dashboard Analytics for automation metrics",
            "Containerized CI/CD pipeline",
        ],
    },
    FeaturedProject {
        id: "secuspark",
        title: "SecuSpark",
        tagline: "Gamified AI Security+ Exam Prep",
        description: "A gamified, AI-powered learning platform for CompTIA Security+ certification prep. Built as an offline-first progressive web app (PWA), SecuSpark provides personalized question recommendations and AI explanations running directly in the browser. Scaled to 1,000+ monthly active users with 54% increase in engagement rates through adaptive difficulty and RPG-style progression.",
        tech_stack: &["React", "TypeScript", "Vite", "IndexedDB", "Responses API", "Tailwind CSS"],
        live_url: "https://secuspark.com",
        github_url: None,
        outcomes: &[
            "Scaled to 1,000+ monthly active users",
            "Boosted engagement rates with 54% increase in session duration",
            "Delivered AI-powered explanations improving retention in user testing",
        ],
        features: &[
            "AI Explanations & Mnemonics for every question",
            "Adaptive Difficulty Engine based on performance",
            "Progress Analytics across Security+ domains",
            "Gamified UX with RPG-style levels and achievements",
            "Offline Mode with automatic resync",
        ],
    },
];

pub const OTHER_PROJECTS: &[OtherProject] = &[
    OtherProject {
        id: "healthcare-cost-navigator",
        title: "Healthcare Cost Navigator",
        description: "AI-powered tool to query U.S. hospital pricing data in plain English. Converts Medicare dataset into a conversational API with geospatial search, quality ratings, and sub-300ms query performance.",
        tech_stack: &["Python", "FastAPI", "PostgreSQL", "PostGIS", "pgvector", "Docker", "OpenAI GPT-4"],
        github_url: None,
        external_url: None,
    },
    OtherProject {
        id: "digitizemd",
        title: "DigitizeMD",
        description: "Media digitization and logistics platform for converting VHS, tapes, and DVDs to MP4. Automates scheduling, payment processing, and shipping workflows with Stripe webhooks and admin dashboards.",
        tech_stack: &["Next.js 15", "React 19", "Prisma", "PostgreSQL", "Clerk", "Stripe", "Tailwind CSS"],
        github_url: None,
        external_url: Some("https://digitizemd.com"),
    },
    OtherProject {
        id: "npi-lookup-mcp",
        title: "NPI Lookup MCP Server",
        description: "Production-ready Model Context Protocol (MCP) server for real-time NPI registry queries. Features multi-tier caching, fuzzy matching with RapidFuzz, and sub-500ms live calls for AI agent integration.",
        tech_stack: &["Python", "Async IO", "Pydantic", "RapidFuzz", "Diskcache", "Redis", "CMS NPPES API"],
        github_url: None,
        external_url: None,
    },
    OtherProject {
        id: "rusthax",
        title: "RustHax – Real-Time Object Detection",
        description: "High-performance object detection system for live video streams targeting 60+ FPS. Custom-trained YOLOv8 achieving 95% precision with optimized pipeline and ONNX export for deployment flexibility.",
        tech_stack: &["Python", "PyTorch", "YOLOv8", "OpenCV", "ONNX Runtime"],
        github_url: None,
        external_url: None,
    },
    OtherProject {
        id: "ml-trading-strategy",
        title: "ML Trading Strategy",
        description: "ML-driven trading strategy using Random Forest on technical indicators. End-to-end pipeline with automated data ingest, feature engineering, hyperparameter tuning, and realistic backtrader simulations.",
        tech_stack: &["Python", "pandas", "scikit-learn", "yfinance", "backtrader", "Jupyter"],
        github_url: None,
        external_url: None,
    },
    OtherProject {
        id: "calworks-analysis",
        title: "CalWORKs Data Analysis (San Francisco)",
        description: "Analyzed CalWORKs eligibility and economic disparities across San Francisco using Census PUMS microdata. Config-driven pipeline with insightful visualizations identifying affordability gaps and assistance needs.",
        tech_stack: &["Python", "pandas", "numpy", "matplotlib", "seaborn"],
        github_url: None,
        external_url: None,
    },
];
