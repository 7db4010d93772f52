// Integration tests for the multipart and binary routes: speech-to-text,
// text-to-speech and image analysis.

mod common;

use axum::http::{header, StatusCode};
use mockito::Matcher;
use serde_json::json;

use common::{app_with, body_json, demo_app, expect_json, post_json, post_multipart, Part};

fn audio_part(bytes: &[u8]) -> Part<'_> {
    Part::File {
        name: "audio",
        file_name: "clip.webm",
        content_type: "audio/webm",
        bytes,
    }
}

fn image_part(bytes: &[u8]) -> Part<'_> {
    Part::File {
        name: "image",
        file_name: "page.png",
        content_type: "image/png",
        bytes,
    }
}

// ---------------------------------------------------------------------------
// /api/tts
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_tts_without_openai_key_is_unavailable() {
    let body = expect_json(
        post_json(demo_app(), "/api/tts", json!({"text": "નમસ્તે"})).await,
        StatusCode::SERVICE_UNAVAILABLE,
    )
    .await;
    assert_eq!(body["error"], "TTS not configured");
    assert_eq!(
        body["message"],
        "OpenAI API key not set. Using browser TTS instead."
    );
}

#[tokio::test]
async fn test_tts_requires_text() {
    let app = app_with(&[("OPENAI_API_KEY", "sk")], None);
    let body = expect_json(post_json(app, "/api/tts", json!({"text": ""})).await, StatusCode::BAD_REQUEST).await;
    assert_eq!(body["error"], "Text is required");
}

#[tokio::test]
async fn test_tts_returns_mpeg_audio() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/audio/speech")
        .match_header("authorization", "Bearer sk")
        .match_body(Matcher::PartialJson(json!({"input": "hello", "voice": "nova"})))
        .with_status(200)
        .with_header("content-type", "audio/mpeg")
        .with_body(b"ID3-fake-mp3".as_slice())
        .create_async()
        .await;

    let app = app_with(&[("OPENAI_API_KEY", "sk")], Some(&server.url()));
    let resp = post_json(app, "/api/tts", json!({"text": "hello", "voice": "nova"})).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "audio/mpeg");
    assert_eq!(resp.headers()[header::CONTENT_LENGTH], "12");
    let bytes = axum::body::to_bytes(resp.into_body(), 1024).await.unwrap();
    assert_eq!(&bytes[..], b"ID3-fake-mp3");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_tts_upstream_failure() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/audio/speech")
        .with_status(500)
        .create_async()
        .await;

    let app = app_with(&[("OPENAI_API_KEY", "sk")], Some(&server.url()));
    let body = expect_json(
        post_json(app, "/api/tts", json!({"text": "hello"})).await,
        StatusCode::INTERNAL_SERVER_ERROR,
    )
    .await;
    assert_eq!(body["error"], "Failed to generate speech");
}

// ---------------------------------------------------------------------------
// /api/stt
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_stt_requires_audio() {
    let app = app_with(&[("OPENAI_API_KEY", "sk")], None);
    let body = expect_json(
        post_multipart(app, "/api/stt", &[Part::Text("language", "en")]).await,
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert_eq!(body["error"], "No audio file provided");
}

#[tokio::test]
async fn test_stt_without_openai_key() {
    let body = expect_json(
        post_multipart(demo_app(), "/api/stt", &[audio_part(&[1, 2, 3])]).await,
        StatusCode::INTERNAL_SERVER_ERROR,
    )
    .await;
    assert_eq!(body["error"], "OpenAI API key not configured");
}

#[tokio::test]
async fn test_stt_transcribes_upload() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/audio/transcriptions")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("clip.webm".to_string()),
            Matcher::Regex("Explain fractions".to_string()),
        ]))
        .with_status(200)
        .with_body(r#"{"text":"explain fractions","duration":2.0}"#)
        .create_async()
        .await;

    let app = app_with(&[("OPENAI_API_KEY", "sk")], Some(&server.url()));
    let body = expect_json(
        post_multipart(
            app,
            "/api/stt",
            &[
                audio_part(b"webm-bytes"),
                Part::Text("language", "en"),
                Part::Text("prompt", "Explain fractions"),
            ],
        )
        .await,
        StatusCode::OK,
    )
    .await;

    assert_eq!(body["text"], "explain fractions");
    // Whisper gave no language, so the requested code is echoed
    assert_eq!(body["language"], "en");
    assert_eq!(body["duration"], 2.0);
    assert!(body.get("segments").is_none());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_stt_passes_through_upstream_status() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/audio/transcriptions")
        .with_status(429)
        .with_body(r#"{"error":{"message":"Rate limit reached"}}"#)
        .create_async()
        .await;

    let app = app_with(&[("OPENAI_API_KEY", "sk")], Some(&server.url()));
    let body = expect_json(
        post_multipart(app, "/api/stt", &[audio_part(b"x")]).await,
        StatusCode::TOO_MANY_REQUESTS,
    )
    .await;
    assert_eq!(body["error"], "Transcription failed");
    assert_eq!(body["details"]["error"]["message"], "Rate limit reached");
}

// ---------------------------------------------------------------------------
// /api/vision
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_vision_requires_image() {
    let body = expect_json(
        post_multipart(demo_app(), "/api/vision", &[Part::Text("type", "ocr")]).await,
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert_eq!(body["error"], "No image file provided");
}

#[tokio::test]
async fn test_vision_without_key() {
    let resp = post_multipart(demo_app(), "/api/vision", &[image_part(b"png")]).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(resp).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("No vision API key configured"));
}

#[tokio::test]
async fn test_vision_openai_parses_fenced_json() {
    let mut server = mockito::Server::new_async().await;
    let reply = "```json\n{\"text\": \"2 + 2 = 4\", \"blocks\": [], \"language\": \"en\"}\n```";
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_body(Matcher::AllOf(vec![
            Matcher::PartialJson(json!({"model": "gpt-4o"})),
            Matcher::Regex("data:image/png;base64,cG5nLWJ5dGVz".to_string()),
            Matcher::Regex("Extract all text from this image".to_string()),
        ]))
        .with_status(200)
        .with_body(json!({"choices": [{"message": {"content": reply}}]}).to_string())
        .create_async()
        .await;

    let app = app_with(&[("OPENAI_API_KEY", "sk")], Some(&server.url()));
    let body = expect_json(
        post_multipart(
            app,
            "/api/vision",
            &[
                image_part(b"png-bytes"),
                Part::Text("type", "ocr"),
                Part::Text("language", "en"),
            ],
        )
        .await,
        StatusCode::OK,
    )
    .await;

    assert_eq!(body["type"], "ocr");
    assert_eq!(body["language"], "en");
    assert_eq!(body["result"]["text"], "2 + 2 = 4");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_vision_prefers_gemini_and_wraps_plain_text() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/models/gemini-1.5-flash:generateContent")
        .match_query(Matcher::UrlEncoded("key".to_string(), "g-key".to_string()))
        .match_body(Matcher::Regex("Subject: Science. ".to_string()))
        .with_status(200)
        .with_body(
            json!({"candidates": [{"content": {"parts": [{"text": "A labelled plant cell"}]}}]})
                .to_string(),
        )
        .create_async()
        .await;

    let app = app_with(
        &[("GOOGLE_GEMINI_API_KEY", "g-key"), ("OPENAI_API_KEY", "sk")],
        Some(&server.url()),
    );
    let body = expect_json(
        post_multipart(
            app,
            "/api/vision",
            &[
                image_part(b"png-bytes"),
                Part::Text("type", "x-ray"),
                Part::Text("subject", "Science"),
            ],
        )
        .await,
        StatusCode::OK,
    )
    .await;

    // Unknown types are echoed back and analysed with the general prompt
    assert_eq!(body["type"], "x-ray");
    assert_eq!(body["language"], "gu");
    assert_eq!(body["result"], json!({"text": "A labelled plant cell", "raw": true}));
    mock.assert_async().await;
}
