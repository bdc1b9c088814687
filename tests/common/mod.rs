#![allow(dead_code)]

use persona_chat::config::Settings;
use persona_chat::{build_router, build_state};
use reqwest::Client;
use serde_json::json;

/// Spawn the API on an ephemeral port and return its base URL.
/// The API key is cleared so every test runs in demo mode and the suite
/// never touches the network.
pub async fn spawn_server() -> String {
    let mut settings = Settings::from_env();
    settings.groq_api_key = String::new();

    let state = build_state(settings);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server error");
    });

    format!("http://{addr}")
}

/// Build a reusable HTTP client.
pub fn http_client() -> Client {
    Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .expect("Failed to build HTTP client")
}

/// Create a test conversation for the given persona and return its ID.
pub async fn create_test_conversation(client: &Client, base: &str, persona: &str) -> String {
    let resp = client
        .post(format!("{base}/api/v1/chat/conversations"))
        .json(&json!({"persona": persona}))
        .send()
        .await
        .expect("Failed to create conversation");
    assert_eq!(resp.status(), 201);
    let data: serde_json::Value = resp.json().await.unwrap();
    data["id"].as_str().unwrap().to_string()
}

/// Send a chat turn and return the response body.
pub async fn send_message(
    client: &Client,
    base: &str,
    conversation_id: &str,
    content: &str,
) -> serde_json::Value {
    let resp = client
        .post(format!(
            "{base}/api/v1/chat/conversations/{conversation_id}/messages"
        ))
        .json(&json!({"content": content}))
        .send()
        .await
        .expect("Failed to send message");
    assert_eq!(resp.status(), 201);
    resp.json().await.unwrap()
}

pub const MATH_REFUSAL: &str = "I appreciate the question, but I'm specifically a Math Teacher and can only help with mathematics topics. Feel free to ask me any math questions!";
