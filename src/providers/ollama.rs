// Ollama chat provider
//
// Talks to the native `/api/chat` endpoint with streaming disabled.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::error::ProviderError;
use super::http::{build_client, decode_json, ensure_success, require_text};
use super::types::{ChatMessage, ProviderRequest, ProviderResponse};
use super::{LlmProvider, ProviderKind};
use crate::config::ProviderSettings;

const PROVIDER: &str = "ollama";

#[derive(Clone)]
pub struct OllamaProvider {
    client: Client,
    api_key: String,
    base_url: String,
    default_model: String,
    temperature: f32,
}

impl OllamaProvider {
    pub fn new(api_key: String, settings: &ProviderSettings) -> Result<Self, ProviderError> {
        Ok(Self {
            client: build_client(PROVIDER, settings.request_timeout_secs)?,
            api_key,
            base_url: settings.ollama_base_url.trim_end_matches('/').to_string(),
            default_model: settings.ollama_model.clone(),
            temperature: settings.temperature,
        })
    }

    fn to_ollama_request(&self, request: &ProviderRequest) -> OllamaRequest {
        let mut messages = Vec::with_capacity(request.messages.len() + 1);
        if let Some(system) = &request.system {
            messages.push(ChatMessage::system(system.clone()));
        }
        messages.extend(request.messages.iter().cloned());

        OllamaRequest {
            model: request.model_or(&self.default_model).to_string(),
            messages,
            stream: false,
            options: OllamaOptions {
                temperature: request.temperature.unwrap_or(self.temperature),
                num_predict: request.max_tokens,
            },
        }
    }

    fn from_ollama_response(
        &self,
        response: OllamaResponse,
        model: String,
    ) -> Result<ProviderResponse, ProviderError> {
        // Chat replies carry `message.content`; generate-style replies carry `response`
        let text = response
            .message
            .and_then(|m| m.content)
            .filter(|t| !t.is_empty())
            .or(response.response);

        Ok(ProviderResponse {
            text: require_text(PROVIDER, text, "message.content")?,
            model: response.model.unwrap_or(model),
            provider: ProviderKind::Ollama,
        })
    }
}

#[async_trait]
impl LlmProvider for OllamaProvider {
    async fn send_message(&self, request: &ProviderRequest) -> Result<ProviderResponse, ProviderError> {
        let body = self.to_ollama_request(request);
        let url = format!("{}/api/chat", self.base_url);

        tracing::debug!("Sending request to Ollama: url={}, model={}", url, body.model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::transport(PROVIDER, e))?;

        let response = ensure_success(PROVIDER, response).await?;
        let parsed: OllamaResponse = decode_json(PROVIDER, response).await?;

        self.from_ollama_response(parsed, body.model)
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Ollama
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }
}

// Ollama API types

#[derive(Debug, Serialize)]
struct OllamaRequest {
    model: String,
    messages: Vec<ChatMessage>,
    stream: bool,
    options: OllamaOptions,
}

#[derive(Debug, Serialize)]
struct OllamaOptions {
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    num_predict: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct OllamaResponse {
    model: Option<String>,
    message: Option<OllamaResponseMessage>,
    response: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OllamaResponseMessage {
    content: Option<String>,
}
