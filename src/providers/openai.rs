// OpenAI chat-completions provider
//
// Also serves image analysis through the same endpoint using image_url
// content parts.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::error::ProviderError;
use super::http::{build_client, decode_json, ensure_success, require_text};
use super::types::{ImageInput, ProviderRequest, ProviderResponse};
use super::{LlmProvider, ProviderKind};
use crate::config::ProviderSettings;

const PROVIDER: &str = "openai";

#[derive(Clone)]
pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    base_url: String,
    default_model: String,
    vision_model: String,
    max_tokens: u32,
    temperature: f32,
}

impl OpenAIProvider {
    pub fn new(api_key: String, settings: &ProviderSettings) -> Result<Self, ProviderError> {
        Ok(Self {
            client: build_client(PROVIDER, settings.request_timeout_secs)?,
            api_key,
            base_url: settings.openai_base_url.trim_end_matches('/').to_string(),
            default_model: settings.openai_chat_model.clone(),
            vision_model: settings.openai_vision_model.clone(),
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
        })
    }

    /// Convert ProviderRequest to the chat-completions format
    fn to_openai_request(&self, request: &ProviderRequest) -> OpenAIRequest {
        let mut messages = Vec::with_capacity(request.messages.len() + 1);

        // System prompt goes first as a {"role":"system"} message
        if let Some(system) = &request.system {
            messages.push(OpenAIMessage {
                role: "system".to_string(),
                content: OpenAIContent::Text(system.clone()),
            });
        }

        messages.extend(request.messages.iter().map(|m| OpenAIMessage {
            role: m.role.clone(),
            content: OpenAIContent::Text(m.content.clone()),
        }));

        OpenAIRequest {
            model: request.model_or(&self.default_model).to_string(),
            messages,
            max_tokens: request.max_tokens.unwrap_or(self.max_tokens),
            temperature: Some(request.temperature.unwrap_or(self.temperature)),
        }
    }

    fn to_vision_request(&self, image: &ImageInput, prompt: &str) -> OpenAIRequest {
        OpenAIRequest {
            model: self.vision_model.clone(),
            messages: vec![OpenAIMessage {
                role: "user".to_string(),
                content: OpenAIContent::Parts(vec![
                    OpenAIPart::Text {
                        text: prompt.to_string(),
                    },
                    OpenAIPart::ImageUrl {
                        image_url: OpenAIImageUrl {
                            url: image.data_uri(),
                            detail: "high".to_string(),
                        },
                    },
                ]),
            }],
            max_tokens: self.max_tokens,
            temperature: None,
        }
    }

    fn extract_text(response: OpenAIResponse) -> Result<(String, Option<String>), ProviderError> {
        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::malformed(PROVIDER, "no choices in response"))?;

        let text = require_text(PROVIDER, choice.message.content, "choices[0].message.content")?;
        Ok((text, response.model))
    }

    async fn post_completion(&self, body: &OpenAIRequest) -> Result<OpenAIResponse, ProviderError> {
        let url = format!("{}/v1/chat/completions", self.base_url);

        tracing::debug!("Sending request to OpenAI API: url={}, model={}", url, body.model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| ProviderError::transport(PROVIDER, e))?;

        let response = ensure_success(PROVIDER, response).await?;
        decode_json(PROVIDER, response).await
    }

    /// Describe an image with the vision model; returns the raw reply text.
    pub async fn analyze_image(&self, image: &ImageInput, prompt: &str) -> Result<String, ProviderError> {
        let body = self.to_vision_request(image, prompt);
        let response = self.post_completion(&body).await?;
        Self::extract_text(response).map(|(text, _)| text)
    }
}

#[async_trait]
impl LlmProvider for OpenAIProvider {
    async fn send_message(&self, request: &ProviderRequest) -> Result<ProviderResponse, ProviderError> {
        let body = self.to_openai_request(request);
        let response = self.post_completion(&body).await?;
        let (text, model) = Self::extract_text(response)?;

        Ok(ProviderResponse {
            text,
            model: model.unwrap_or(body.model),
            provider: ProviderKind::OpenAi,
        })
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::OpenAi
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }
}

// OpenAI API types

#[derive(Debug, Serialize)]
struct OpenAIRequest {
    model: String,
    messages: Vec<OpenAIMessage>,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
struct OpenAIMessage {
    role: String,
    content: OpenAIContent,
}

/// Plain string for text turns, part list for multimodal turns
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum OpenAIContent {
    Text(String),
    Parts(Vec<OpenAIPart>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum OpenAIPart {
    Text { text: String },
    ImageUrl { image_url: OpenAIImageUrl },
}

#[derive(Debug, Serialize)]
struct OpenAIImageUrl {
    url: String,
    detail: String,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    model: Option<String>,
    #[serde(default)]
    choices: Vec<OpenAIChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    message: OpenAIResponseMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponseMessage {
    content: Option<String>,
}
