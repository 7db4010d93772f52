// POST /api/stt and /api/tts - OpenAI speech proxy

use axum::{
    extract::rejection::JsonRejection,
    extract::{multipart::MultipartRejection, Multipart, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use super::error::ApiError;
use super::form::FormData;
use super::AppState;
use crate::providers::speech::TranscriptSegment;
use crate::providers::{ProviderError, SpeechLanguage, TranscriptionRequest, DEFAULT_VOICE};

#[derive(Debug, Serialize)]
pub struct TranscriptionReply {
    text: String,
    language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    segments: Option<Vec<TranscriptSegment>>,
}

#[derive(Debug, Deserialize)]
pub struct SpeechBody {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    voice: Option<String>,
}

/// Upstream rejections keep their status and parsed error body.
fn transcription_error(err: ProviderError) -> ApiError {
    match err {
        ProviderError::Status { status, body, .. } => ApiError::Upstream {
            status: StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
            error: "Transcription failed".to_string(),
            details: Some(serde_json::from_str(&body).unwrap_or_else(|_| Value::Object(Default::default()))),
        },
        other => ApiError::internal_with("Failed to process speech-to-text", other),
    }
}

pub async fn speech_to_text(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<TranscriptionReply>, ApiError> {
    let mut form = FormData::read(multipart?).await?;
    let audio = form
        .take("audio")
        .ok_or_else(|| ApiError::bad_request("No audio file provided"))?;

    let client = state
        .pool
        .speech()
        .ok_or_else(|| ApiError::internal("OpenAI API key not configured"))?;

    let language = SpeechLanguage::from_code(form.text("language").unwrap_or("gu"));
    let request = TranscriptionRequest {
        audio: audio.bytes,
        file_name: audio.file_name.unwrap_or_else(|| "audio.webm".to_string()),
        mime_type: audio.content_type,
        language,
        prompt: form.text("prompt").map(str::to_string),
    };

    let transcription = client.transcribe(request).await.map_err(transcription_error)?;

    Ok(Json(TranscriptionReply {
        text: transcription.text,
        language: transcription
            .language
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| language.code().to_string()),
        duration: transcription.duration,
        segments: transcription.segments,
    }))
}

pub async fn text_to_speech(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SpeechBody>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = payload?;
    let text = body
        .text
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::bad_request("Text is required"))?;

    let client = state.pool.speech().ok_or_else(|| ApiError::ServiceUnavailable {
        error: "TTS not configured".to_string(),
        message: Some("OpenAI API key not set. Using browser TTS instead.".to_string()),
    })?;

    let voice = body.voice.filter(|v| !v.is_empty());
    let audio = client
        .synthesize(&text, voice.as_deref().unwrap_or(DEFAULT_VOICE))
        .await
        .map_err(|e| ApiError::internal_with("Failed to generate speech", e))?;

    Ok((
        [
            (header::CONTENT_TYPE, "audio/mpeg".to_string()),
            (header::CONTENT_LENGTH, audio.len().to_string()),
        ],
        audio,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_keeps_upstream_status() {
        let err = transcription_error(ProviderError::Status {
            provider: "openai",
            status: 413,
            body: r#"{"error":{"message":"too large"}}"#.to_string(),
        });
        match err {
            ApiError::Upstream { status, error, details } => {
                assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
                assert_eq!(error, "Transcription failed");
                assert_eq!(details.unwrap()["error"]["message"], "too large");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_non_json_error_body_becomes_empty_details() {
        let err = transcription_error(ProviderError::Status {
            provider: "openai",
            status: 502,
            body: "<html>bad gateway</html>".to_string(),
        });
        assert!(matches!(err, ApiError::Upstream { details: Some(ref d), .. } if d == &serde_json::json!({})));
    }

    #[test]
    fn test_other_errors_are_internal() {
        let err = transcription_error(ProviderError::malformed("openai", "missing text"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Failed to process speech-to-text");
    }
}
