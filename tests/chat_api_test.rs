// Integration tests for POST /api/chat

mod common;

use axum::http::StatusCode;
use mockito::Matcher;
use serde_json::json;

use common::{app_with, demo_app, expect_json, post_json};

#[tokio::test]
async fn test_demo_chat_answers_in_gujarati() {
    let resp = post_json(
        demo_app(),
        "/api/chat",
        json!({"message": "ગણિત વિશે કહો", "provider": "demo"}),
    )
    .await;

    let body = expect_json(resp, StatusCode::OK).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["provider"], "demo");
    assert!(body["response"].as_str().unwrap().contains("ગણિત"));
    assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_auto_without_keys_uses_demo() {
    let resp = post_json(demo_app(), "/api/chat", json!({"message": "hello"})).await;
    let body = expect_json(resp, StatusCode::OK).await;
    assert_eq!(body["provider"], "demo");
    assert!(body["response"].as_str().unwrap().starts_with("નમસ્તે"));
}

#[tokio::test]
async fn test_missing_message_is_400() {
    let resp = post_json(demo_app(), "/api/chat", json!({"mode": "story"})).await;
    let body = expect_json(resp, StatusCode::BAD_REQUEST).await;
    assert_eq!(body, json!({"success": false, "error": "Message is required"}));

    let resp = post_json(demo_app(), "/api/chat", json!({"message": ""})).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_json_is_400() {
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    let req = Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let resp = demo_app().oneshot(req).await.unwrap();
    let body = expect_json(resp, StatusCode::BAD_REQUEST).await;
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_openai_chat_sends_system_prompt_and_history() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", "Bearer sk-test")
        .match_body(Matcher::AllOf(vec![
            Matcher::PartialJson(json!({"model": "gpt-4o-mini", "max_tokens": 2000})),
            Matcher::Regex(r#""role":"system""#.to_string()),
            Matcher::Regex("પહેલો જવાબ".to_string()),
            Matcher::Regex("બીજો પ્રશ્ન".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "model": "gpt-4o-mini",
                "choices": [{"message": {"role": "assistant", "content": "આ રહ્યો જવાબ"}}]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let app = app_with(&[("OPENAI_API_KEY", "sk-test")], Some(&server.url()));
    let resp = post_json(
        app,
        "/api/chat",
        json!({
            "message": "બીજો પ્રશ્ન",
            "mode": "stepByStep",
            "classLevel": 8,
            "conversationHistory": [
                {"role": "user", "content": "પહેલો પ્રશ્ન"},
                {"role": "assistant", "content": "પહેલો જવાબ"}
            ]
        }),
    )
    .await;

    let body = expect_json(resp, StatusCode::OK).await;
    assert_eq!(body["provider"], "openai");
    assert_eq!(body["response"], "આ રહ્યો જવાબ");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_provider_failure_falls_back_to_demo() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(500)
        .with_body("upstream exploded")
        .create_async()
        .await;

    let app = app_with(&[("OPENAI_API_KEY", "sk-test")], Some(&server.url()));
    let resp = post_json(
        app,
        "/api/chat",
        json!({"message": "science please", "provider": "openai"}),
    )
    .await;

    let body = expect_json(resp, StatusCode::OK).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["provider"], "demo");
    assert!(body["response"].as_str().unwrap().contains("વિજ્ઞાન"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_explicit_unconfigured_provider_is_demo() {
    let app = app_with(&[("OPENAI_API_KEY", "sk-test")], Some("http://127.0.0.1:9"));
    let resp = post_json(app, "/api/chat", json!({"message": "hi", "provider": "gemini"})).await;
    let body = expect_json(resp, StatusCode::OK).await;
    assert_eq!(body["provider"], "demo");
}

#[tokio::test]
async fn test_gemini_receives_only_current_message() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/gemini-pro:generateContent")
        .match_query(Matcher::UrlEncoded("key".into(), "g-key".into()))
        .match_body(Matcher::Regex("User: now".to_string()))
        .with_status(200)
        .with_body(
            json!({"candidates": [{"content": {"parts": [{"text": "gemini says hi"}]}}]}).to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let app = app_with(&[("GOOGLE_GEMINI_API_KEY", "g-key")], Some(&server.url()));
    let resp = post_json(
        app,
        "/api/chat",
        json!({
            "message": "now",
            "provider": "gemini",
            "conversationHistory": [{"role": "user", "content": "earlier"}]
        }),
    )
    .await;

    let body = expect_json(resp, StatusCode::OK).await;
    assert_eq!(body["provider"], "gemini");
    assert_eq!(body["response"], "gemini says hi");
    mock.assert_async().await;
}
