// Image analysis dispatch and reply parsing

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{json, Value};

use super::error::ProviderError;
use super::gemini::GeminiProvider;
use super::openai::OpenAIProvider;
use super::types::ImageInput;
use super::ProviderKind;

/// Greedy match from the first `{` to the last `}`.
static JSON_OBJECT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\{.*\}").expect("valid regex"));

/// Vision-capable provider chosen for a request.
#[derive(Clone, Copy)]
pub enum VisionBackend<'a> {
    Gemini(&'a GeminiProvider),
    OpenAi(&'a OpenAIProvider),
}

impl VisionBackend<'_> {
    pub fn kind(&self) -> ProviderKind {
        match self {
            Self::Gemini(_) => ProviderKind::Gemini,
            Self::OpenAi(_) => ProviderKind::OpenAi,
        }
    }

    /// Run the analysis and parse the reply into JSON.
    pub async fn analyze(&self, image: &ImageInput, prompt: &str) -> Result<Value, ProviderError> {
        tracing::debug!(
            "Analyzing image: provider={}, mime={}, bytes={}",
            self.kind(),
            image.mime_type,
            image.bytes.len()
        );

        let text = match self {
            Self::Gemini(provider) => provider.analyze_image(image, prompt).await?,
            Self::OpenAi(provider) => provider.analyze_image(image, prompt).await?,
        };
        Ok(parse_vision_response(&text))
    }
}

/// Extract the outermost `{...}` of a model reply as JSON.
///
/// Replies that hold no parseable object come back as `{"text": .., "raw": true}`.
pub fn parse_vision_response(content: &str) -> Value {
    JSON_OBJECT
        .find(content)
        .and_then(|m| serde_json::from_str::<Value>(m.as_str()).ok())
        .unwrap_or_else(|| json!({ "text": content, "raw": true }))
}
