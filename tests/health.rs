mod common;

use common::*;

#[tokio::test]
async fn test_root_info() {
    let base = spawn_server().await;
    let client = http_client();

    let resp = client.get(&base).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let data: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(data["status"].as_str().unwrap(), "running");
    assert!(data["service"].is_string());
    assert!(data["version"].is_string());
}

#[tokio::test]
async fn test_health() {
    let base = spawn_server().await;
    let client = http_client();

    let resp = client.get(format!("{base}/health")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let data: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(data["status"].as_str().unwrap(), "healthy");
    // No API key in tests, so the completion service reports demo mode.
    assert_eq!(data["services"]["completion_api"]["status"], "demo");
    assert_eq!(data["services"]["session_store"]["status"], "up");
}

#[tokio::test]
async fn test_status_statistics() {
    let base = spawn_server().await;
    let client = http_client();

    let conversation_id = create_test_conversation(&client, &base, "Chef").await;
    send_message(&client, &base, &conversation_id, "How do I bake bread?").await;

    let resp = client.get(format!("{base}/status")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let data: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(data["demo_mode"], true);
    assert_eq!(data["statistics"]["registered_personas"].as_i64().unwrap(), 5);
    assert!(data["statistics"]["active_conversations"].as_i64().unwrap() >= 1);
    // One user turn plus one assistant turn.
    assert!(data["statistics"]["total_messages"].as_i64().unwrap() >= 2);
    assert!(data["uptime_seconds"].is_number());
}
