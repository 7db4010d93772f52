// POST /api/vision - image analysis (OCR, homework, diagrams, ...)

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use super::error::ApiError;
use super::form::FormData;
use super::AppState;
use crate::prompt::{compose_vision_prompt, AnalysisType, PromptLanguage};
use crate::providers::ImageInput;

const NO_VISION_KEY: &str =
    "No vision API key configured. Set OLLAMA_API_KEY, OPENAI_API_KEY or GOOGLE_GEMINI_API_KEY";

#[derive(Debug, Serialize)]
pub struct VisionReply {
    /// Analysis type as sent by the client
    #[serde(rename = "type")]
    kind: String,
    result: Value,
    language: String,
}

pub async fn analyze_image(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<VisionReply>, ApiError> {
    let mut form = FormData::read(multipart?).await?;
    let image = form
        .take("image")
        .ok_or_else(|| ApiError::bad_request("No image file provided"))?;

    let kind = form.text("type").unwrap_or("general").to_string();
    let language = form.text("language").unwrap_or("gu").to_string();

    let backend = state.pool.vision().ok_or_else(|| ApiError::internal(NO_VISION_KEY))?;

    let prompt = compose_vision_prompt(
        AnalysisType::from_name(&kind),
        PromptLanguage::from_code(&language),
        form.text("prompt"),
        form.text("subject"),
    );
    let input = ImageInput::new(image.bytes, image.content_type.as_deref());

    let result = backend
        .analyze(&input, &prompt)
        .await
        .map_err(|e| ApiError::internal_with("Failed to analyze image", e))?;

    tracing::info!("Image analyzed: type={}, provider={}", kind, backend.kind());

    Ok(Json(VisionReply { kind, result, language }))
}
