// Google Gemini provider implementation
//
// Gemini takes no system role: the system prompt is folded into the first
// user part as "{system}\n\nUser: {text}". Chat and vision live on
// different API versions.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::error::ProviderError;
use super::http::{build_client, decode_json, ensure_success, require_text};
use super::types::{ImageInput, ProviderRequest, ProviderResponse};
use super::{LlmProvider, ProviderKind};
use crate::config::constants::VISION_TEMPERATURE;
use crate::config::ProviderSettings;

const PROVIDER: &str = "gemini";
const CHAT_API_VERSION: &str = "v1beta";
const VISION_API_VERSION: &str = "v1";

#[derive(Clone)]
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    base_url: String,
    default_model: String,
    vision_model: String,
    max_tokens: u32,
    temperature: f32,
}

impl GeminiProvider {
    pub fn new(api_key: String, settings: &ProviderSettings) -> Result<Self, ProviderError> {
        Ok(Self {
            client: build_client(PROVIDER, settings.request_timeout_secs)?,
            api_key,
            base_url: settings.gemini_base_url.trim_end_matches('/').to_string(),
            default_model: settings.gemini_chat_model.clone(),
            vision_model: settings.gemini_vision_model.clone(),
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
        })
    }

    /// Convert ProviderRequest to Gemini's contents format
    fn to_gemini_request(&self, request: &ProviderRequest) -> GeminiRequest {
        let mut contents: Vec<GeminiContent> = request
            .messages
            .iter()
            .map(|msg| GeminiContent {
                // Gemini uses "model" instead of "assistant"
                role: if msg.role == "assistant" { "model" } else { "user" }.to_string(),
                parts: vec![GeminiPart::Text {
                    text: msg.content.clone(),
                }],
            })
            .collect();

        if let Some(system) = &request.system {
            match contents.iter_mut().find(|c| c.role == "user") {
                Some(first_user) => {
                    if let Some(GeminiPart::Text { text }) = first_user.parts.first_mut() {
                        *text = format!("{system}\n\nUser: {text}");
                    }
                }
                None => contents.insert(
                    0,
                    GeminiContent {
                        role: "user".to_string(),
                        parts: vec![GeminiPart::Text {
                            text: system.clone(),
                        }],
                    },
                ),
            }
        }

        GeminiRequest {
            contents,
            generation_config: GeminiGenerationConfig {
                temperature: request.temperature.unwrap_or(self.temperature),
                max_output_tokens: request.max_tokens.unwrap_or(self.max_tokens),
            },
        }
    }

    fn to_vision_request(&self, image: &ImageInput, prompt: &str) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                role: "user".to_string(),
                parts: vec![
                    GeminiPart::Text {
                        text: prompt.to_string(),
                    },
                    GeminiPart::InlineData {
                        inline_data: GeminiInlineData {
                            mime_type: image.mime_type.clone(),
                            data: image.base64(),
                        },
                    },
                ],
            }],
            generation_config: GeminiGenerationConfig {
                temperature: VISION_TEMPERATURE,
                max_output_tokens: self.max_tokens,
            },
        }
    }

    fn extract_text(response: GeminiResponse) -> Result<String, ProviderError> {
        let text = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text);

        require_text(PROVIDER, text, "candidates[0].content.parts[0].text")
    }

    async fn generate(
        &self,
        version: &str,
        model: &str,
        body: &GeminiRequest,
    ) -> Result<GeminiResponse, ProviderError> {
        let url = format!("{}/{}/models/{}:generateContent", self.base_url, version, model);

        // Key travels as a query parameter; log the URL without it
        tracing::debug!("Sending request to Gemini API: url={}", url);

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(body)
            .send()
            .await
            .map_err(|e| ProviderError::transport(PROVIDER, e.without_url()))?;

        let response = ensure_success(PROVIDER, response).await?;
        decode_json(PROVIDER, response).await
    }

    /// Describe an image with the vision model; returns the raw reply text.
    pub async fn analyze_image(&self, image: &ImageInput, prompt: &str) -> Result<String, ProviderError> {
        let body = self.to_vision_request(image, prompt);
        let response = self
            .generate(VISION_API_VERSION, &self.vision_model, &body)
            .await?;
        Self::extract_text(response)
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    async fn send_message(&self, request: &ProviderRequest) -> Result<ProviderResponse, ProviderError> {
        let model = request.model_or(&self.default_model).to_string();
        let body = self.to_gemini_request(request);
        let response = self.generate(CHAT_API_VERSION, &model, &body).await?;

        Ok(ProviderResponse {
            text: Self::extract_text(response)?,
            model,
            provider: ProviderKind::Gemini,
        })
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Gemini
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }

    fn supports_history(&self) -> bool {
        false
    }
}

// Gemini API types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    role: String,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum GeminiPart {
    Text { text: String },
    InlineData { inline_data: GeminiInlineData },
}

#[derive(Debug, Serialize)]
struct GeminiInlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiResponseContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponseContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponsePart {
    text: Option<String>,
}
