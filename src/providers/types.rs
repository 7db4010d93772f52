// Provider-agnostic request and response types
//
// Handlers build a `ProviderRequest`; each client translates it into its own
// wire format and hands back a `ProviderResponse` with plain text.

use serde::{Deserialize, Serialize};

use super::ProviderKind;

/// One conversation turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }
}

/// Unified request format for all providers
#[derive(Debug, Clone, Default)]
pub struct ProviderRequest {
    /// Conversation turns, oldest first; the last one is the current question
    pub messages: Vec<ChatMessage>,

    /// Model name; empty means the provider's default
    pub model: String,

    /// System prompt (sent as a system message, or folded into the first
    /// user part for Gemini)
    pub system: Option<String>,

    /// Completion budget. `None` lets each provider apply its own default.
    pub max_tokens: Option<u32>,

    /// Sampling temperature. `None` lets each provider apply its own default.
    pub temperature: Option<f32>,
}

impl ProviderRequest {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            ..Default::default()
        }
    }

    /// Single user message request
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(vec![ChatMessage::user(text)])
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Content of the most recent user turn, if any.
    pub fn last_user_text(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == "user")
            .map(|m| m.content.as_str())
    }

    /// Model to send: the request's own, else `default`.
    pub(crate) fn model_or<'a>(&'a self, default: &'a str) -> &'a str {
        if self.model.is_empty() {
            default
        } else {
            &self.model
        }
    }
}

/// Text reply from a provider
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderResponse {
    pub text: String,
    pub model: String,
    pub provider: ProviderKind,
}

/// Uploaded image handed to a vision model
#[derive(Debug, Clone)]
pub struct ImageInput {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

impl ImageInput {
    pub const DEFAULT_MIME: &'static str = "image/jpeg";

    /// Empty or missing content types fall back to JPEG.
    pub fn new(bytes: Vec<u8>, mime_type: Option<&str>) -> Self {
        let mime_type = mime_type
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(Self::DEFAULT_MIME)
            .to_string();
        Self { bytes, mime_type }
    }

    pub fn base64(&self) -> String {
        use base64::Engine;
        base64::engine::general_purpose::STANDARD.encode(&self.bytes)
    }

    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.base64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let request = ProviderRequest::from_text("hello")
            .with_system("be brief")
            .with_max_tokens(256)
            .with_temperature(0.2);
        assert_eq!(request.system.as_deref(), Some("be brief"));
        assert_eq!(request.max_tokens, Some(256));
        assert_eq!(request.last_user_text(), Some("hello"));
        assert_eq!(request.model_or("llama2"), "llama2");
        assert_eq!(request.with_model("x").model_or("llama2"), "x");
    }

    #[test]
    fn test_last_user_text_skips_assistant_turns() {
        let request = ProviderRequest::new(vec![
            ChatMessage::user("first"),
            ChatMessage {
                role: "assistant".to_string(),
                content: "reply".to_string(),
            },
        ]);
        assert_eq!(request.last_user_text(), Some("first"));
    }

    #[test]
    fn test_image_data_uri() {
        let image = ImageInput::new(b"abc".to_vec(), Some(""));
        assert_eq!(image.mime_type, "image/jpeg");
        assert_eq!(image.data_uri(), "data:image/jpeg;base64,YWJj");

        let image = ImageInput::new(vec![0xff], Some("image/png"));
        assert_eq!(image.base64(), "/w==");
    }
}
