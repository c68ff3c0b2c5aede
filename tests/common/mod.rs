use portfolio_chat::configuration::{
    ChatbotSettings, OpenAiSettings, RemoteSettings, SessionSettings, Settings, StorageSettings,
};
use std::net::TcpListener;

pub struct TestApp {
    pub address: String,
}

/// Memory storage, no pacing delays, local matching only.
pub fn test_settings() -> Settings {
    Settings {
        app_port: 0,
        app_host: "127.0.0.1".to_string(),
        chatbot: ChatbotSettings {
            typing_delay_ms: 0,
            response_delay_ms: 0,
            ..ChatbotSettings::default()
        },
        remote: RemoteSettings::default(),
        openai: OpenAiSettings::default(),
        storage: StorageSettings::default(),
        sessions: SessionSettings::default(),
    }
}

pub async fn spawn_app_with_configuration(configuration: Settings) -> TestApp {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let server = portfolio_chat::startup::run(listener, configuration)
        .await
        .expect("Failed to bind address.");
    let _ = tokio::spawn(server);

    TestApp { address }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_configuration(test_settings()).await
}
