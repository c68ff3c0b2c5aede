use serde;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub app_port: u16,
    pub app_host: String,
    #[serde(default)]
    pub chatbot: ChatbotSettings,
    #[serde(default)]
    pub remote: RemoteSettings,
    #[serde(default)]
    pub openai: OpenAiSettings,
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub sessions: SessionSettings,
}

/// Conversation limits and pacing
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ChatbotSettings {
    /// Maximum characters allowed in user input
    pub max_user_message_length: usize,
    /// Maximum characters allowed in bot responses
    pub max_bot_message_length: usize,
    /// Pause before the reply is requested
    pub typing_delay_ms: u64,
    /// Pause before the reply is revealed
    pub response_delay_ms: u64,
    /// Number of recent turns handed to the remote model
    pub history_window: usize,
    pub welcome_message: String,
}

impl Default for ChatbotSettings {
    fn default() -> Self {
        Self {
            max_user_message_length: 500,
            max_bot_message_length: 1000,
            typing_delay_ms: 500,
            response_delay_ms: 800,
            history_window: 12,
            welcome_message: "Hey! 👋 I'm Pawel's AI assistant. I can answer questions about his projects, work experience, and skills.\n\nTry asking me something, or choose one of the quick actions below!".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoteMode {
    /// Local matching only
    Disabled,
    /// Call a deployed `/api/chatbot` endpoint
    Endpoint,
    /// Call the model provider directly from the controller
    Direct,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct RemoteSettings {
    pub mode: RemoteMode,
    pub endpoint_url: String,
    /// Upper bound for a remote reply before the local engine answers
    pub timeout_secs: u64,
}

impl Default for RemoteSettings {
    fn default() -> Self {
        Self {
            mode: RemoteMode::Disabled,
            endpoint_url: "http://127.0.0.1:8000/api/chatbot".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct OpenAiSettings {
    pub base_url: String,
    pub model: String,
    pub max_output_tokens: u32,
    pub timeout_secs: u64,
    pub retry_attempts: usize,
    /// Only ever read from OPENAI_API_KEY
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Default for OpenAiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4.1-mini".to_string(),
            max_output_tokens: 500,
            timeout_secs: 30,
            retry_attempts: 1,
            api_key: None,
        }
    }
}

impl OpenAiSettings {
    pub fn with_env_credential(mut self) -> Self {
        self.api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    Redis,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct StorageSettings {
    pub backend: StorageBackend,
    pub redis_url: String,
    pub key_prefix: String,
    /// Optional quota for the in-memory backend, in bytes per value
    #[serde(default)]
    pub max_bytes: Option<usize>,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Memory,
            redis_url: "redis://127.0.0.1/0".to_string(),
            key_prefix: "portfolio".to_string(),
            max_bytes: None,
        }
    }
}

/// Bounds for the live session registry. Evicted sessions restore from storage.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct SessionSettings {
    pub idle_timeout_secs: u64,
    pub max_sessions: usize,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            idle_timeout_secs: 1800,
            max_sessions: 1000,
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // configuration.yaml first, then APP__SECTION__KEY overrides
    let settings = config::Config::builder()
        .add_source(config::File::with_name("configuration").required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("__")
                .separator("__"),
        )
        .set_default("app_host", "127.0.0.1")?
        .set_default("app_port", 8000)?
        .build()?;

    let mut config: Settings = settings.try_deserialize()?;

    config.openai = config.openai.with_env_credential();

    Ok(config)
}
