mod common;

use common::*;

#[tokio::test]
async fn test_list_personas() {
    let base = spawn_server().await;
    let client = http_client();

    let resp = client
        .get(format!("{base}/api/v1/personas"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let data: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(data["total"].as_i64().unwrap(), 5);

    // Stable declared order, matching the UI selector.
    let names: Vec<&str> = data["personas"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["Math Teacher", "Doctor", "Travel Guide", "Chef", "Tech Support"]
    );

    for persona in data["personas"].as_array().unwrap() {
        assert!(!persona["description"].as_str().unwrap().is_empty());
        assert!(!persona["suggested_messages"].as_array().unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_get_persona_detail() {
    let base = spawn_server().await;
    let client = http_client();

    let resp = client
        .get(format!("{base}/api/v1/personas/Doctor"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let data: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(data["name"].as_str().unwrap(), "Doctor");

    let keywords: Vec<&str> = data["domain_keywords"]
        .as_array()
        .unwrap()
        .iter()
        .map(|k| k.as_str().unwrap())
        .collect();
    assert!(keywords.contains(&"health"));
    assert!(keywords.contains(&"symptom"));

    assert!(!data["common_phrases"].as_array().unwrap().is_empty());
    assert!(
        data["refusal_message"]
            .as_str()
            .unwrap()
            .contains("Doctor")
    );
}

#[tokio::test]
async fn test_get_unknown_persona() {
    let base = spawn_server().await;
    let client = http_client();

    let resp = client
        .get(format!("{base}/api/v1/personas/NotARealPersona"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let data: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(data["error"].as_str().unwrap(), "not_found");
}

#[tokio::test]
async fn test_get_system_prompt() {
    let base = spawn_server().await;
    let client = http_client();

    let resp = client
        .get(format!("{base}/api/v1/personas/Math%20Teacher/system-prompt"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let data: serde_json::Value = resp.json().await.unwrap();
    let prompt = data["system_prompt"].as_str().unwrap();
    assert!(prompt.contains("Math Teacher"));
    assert!(prompt.contains("STRICT BOUNDARY"));
}

#[tokio::test]
async fn test_list_models() {
    let base = spawn_server().await;
    let client = http_client();

    let resp = client
        .get(format!("{base}/api/v1/models"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let data: serde_json::Value = resp.json().await.unwrap();
    let ids: Vec<&str> = data["models"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        vec!["llama-3.1-8b-instant", "llama-3.3-70b-versatile", "qwen/qwen3-32b"]
    );
    assert_eq!(data["default_model"].as_str().unwrap(), "llama-3.1-8b-instant");
}
