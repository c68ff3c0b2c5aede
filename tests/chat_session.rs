mod common;

use portfolio_chat::configuration::RemoteMode;
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn send(app: &common::TestApp, session: &str, message: &str) -> (u16, Value) {
    let response = reqwest::Client::new()
        .post(&format!("{}/chat/{}/messages", &app.address, session))
        .json(&json!({ "message": message }))
        .send()
        .await
        .expect("Failed to execute request.");
    let status = response.status().as_u16();
    (status, response.json().await.unwrap())
}

async fn get(app: &common::TestApp, session: &str) -> Value {
    reqwest::Client::new()
        .get(&format!("{}/chat/{}", &app.address, session))
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn conversation_round_trip() {
    let app = common::spawn_app().await;

    let (status, body) = send(&app, "visitor", "Tell me about your projects").await;
    assert_eq!(status, 200);
    assert!(body["item"]["reply"]["content"]
        .as_str()
        .unwrap()
        .contains("SIE Wellness"));

    let (status, body) = send(&app, "visitor", "asdkjasd").await;
    assert_eq!(status, 200);
    assert_eq!(body["item"]["category"], "general");

    let state = get(&app, "visitor").await;
    assert_eq!(state["item"]["messages"].as_array().unwrap().len(), 4);
    assert_eq!(state["item"]["hasUnread"], true);

    // other sessions are untouched
    let other = get(&app, "someone-else").await;
    assert_eq!(other["item"]["messages"], json!([]));
}

#[tokio::test]
async fn invalid_messages_are_rejected() {
    let app = common::spawn_app().await;

    let (status, _) = send(&app, "visitor", "   ").await;
    assert_eq!(status, 400);
    let (status, _) = send(&app, "visitor", &"x".repeat(501)).await;
    assert_eq!(status, 400);

    let state = get(&app, "visitor").await;
    assert_eq!(state["item"]["messages"], json!([]));
}

#[tokio::test]
async fn reset_then_open_clears_unread() {
    let app = common::spawn_app().await;
    let client = reqwest::Client::new();
    send(&app, "visitor", "hello").await;

    let reset: Value = client
        .delete(&format!("{}/chat/visitor", &app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(reset["item"]["messages"].as_array().unwrap().len(), 1);

    let opened: Value = client
        .post(&format!("{}/chat/visitor/open", &app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(opened["item"]["isOpen"], true);
    assert_eq!(opened["item"]["hasUnread"], false);
}

#[tokio::test]
async fn quick_actions_are_served() {
    let app = common::spawn_app().await;

    let body: Value = reqwest::Client::new()
        .get(&format!("{}/chat/quick_actions", &app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["list"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn remote_endpoint_reply_is_used() {
    let endpoint = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chatbot"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "text": "Remote says hi." })))
        .expect(1)
        .mount(&endpoint)
        .await;

    let mut settings = common::test_settings();
    settings.remote.mode = RemoteMode::Endpoint;
    settings.remote.endpoint_url = format!("{}/api/chatbot", endpoint.uri());
    let app = common::spawn_app_with_configuration(settings).await;

    let (status, body) = send(&app, "visitor", "hello").await;
    assert_eq!(status, 200);
    assert_eq!(body["item"]["reply"]["content"], "Remote says hi.");
}

#[tokio::test]
async fn slow_remote_falls_back_to_local_answer() {
    let endpoint = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "text": "too late" }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&endpoint)
        .await;

    let mut settings = common::test_settings();
    settings.remote.mode = RemoteMode::Endpoint;
    settings.remote.endpoint_url = format!("{}/api/chatbot", endpoint.uri());
    settings.remote.timeout_secs = 1;
    let app = common::spawn_app_with_configuration(settings).await;

    let (status, body) = send(&app, "visitor", "How can I contact you?").await;
    assert_eq!(status, 200);
    assert_eq!(body["item"]["category"], "contact");
    assert_ne!(body["item"]["reply"]["content"], "too late");
    assert!(body["item"]["reply"]["content"]
        .as_str()
        .unwrap()
        .to_lowercase()
        .contains("linkedin"));
}

#[tokio::test]
async fn upstream_failure_falls_back_to_local_answer() {
    let endpoint = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_json(json!({ "error": "OpenAI API error" })))
        .mount(&endpoint)
        .await;

    let mut settings = common::test_settings();
    settings.remote.mode = RemoteMode::Endpoint;
    settings.remote.endpoint_url = format!("{}/api/chatbot", endpoint.uri());
    let app = common::spawn_app_with_configuration(settings).await;

    let (status, body) = send(&app, "visitor", "Tell me about your projects").await;
    assert_eq!(status, 200);
    assert!(body["item"]["reply"]["content"]
        .as_str()
        .unwrap()
        .contains("SIE Wellness"));
}
