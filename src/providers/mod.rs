// Multi-provider LLM support
//
// This module provides an abstraction layer over the upstream model
// services (Ollama, OpenAI, Gemini) plus an offline demo provider, so route
// handlers can pick one by name and talk to it through a single trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod error;
pub mod types;

mod http;

// Provider implementations
pub mod demo;
pub mod gemini;
pub mod ollama;
pub mod openai;

// Speech and vision
pub mod speech;
pub mod vision;

// Construction and selection
pub mod pool;
pub mod selector;

pub use demo::{demo_response, DemoProvider};
pub use error::ProviderError;
pub use gemini::GeminiProvider;
pub use ollama::OllamaProvider;
pub use openai::OpenAIProvider;
pub use pool::ProviderPool;
pub use selector::{ProviderSelector, AUTO_PRIORITY};
pub use speech::{SpeechClient, SpeechLanguage, Transcription, TranscriptionRequest, DEFAULT_VOICE};
pub use types::{ChatMessage, ImageInput, ProviderRequest, ProviderResponse};
pub use vision::{parse_vision_response, VisionBackend};

/// Trait for text-generation providers
///
/// Every provider (Ollama, OpenAI, Gemini, demo) implements this trait.
/// Calls are single-shot: no streaming, no retries.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send a request and wait for the complete reply
    async fn send_message(&self, request: &ProviderRequest) -> Result<ProviderResponse, ProviderError>;

    fn kind(&self) -> ProviderKind;

    /// Get the provider name (e.g., "ollama", "openai", "gemini")
    fn name(&self) -> &str {
        self.kind().as_str()
    }

    /// Get the default model for this provider
    fn default_model(&self) -> &str;

    /// Whether prior conversation turns should be sent along.
    fn supports_history(&self) -> bool {
        true
    }
}

/// The closed set of providers a request can end up on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Ollama,
    #[serde(rename = "openai")]
    OpenAi,
    Gemini,
    Demo,
}

impl ProviderKind {
    /// Auto-selection order, demo last.
    pub const ALL: [ProviderKind; 4] = [
        ProviderKind::Ollama,
        ProviderKind::OpenAi,
        ProviderKind::Gemini,
        ProviderKind::Demo,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ollama => "ollama",
            Self::OpenAi => "openai",
            Self::Gemini => "gemini",
            Self::Demo => "demo",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Provider requested by a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderChoice {
    #[default]
    Auto,
    Explicit(ProviderKind),
}

impl ProviderChoice {
    /// Parse a request value. Unrecognised names select the demo provider.
    pub fn parse(name: &str) -> Self {
        if name == "auto" {
            return Self::Auto;
        }
        Self::Explicit(ProviderKind::from_name(name).unwrap_or(ProviderKind::Demo))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_names() {
        for kind in ProviderKind::ALL {
            assert_eq!(ProviderKind::from_name(kind.as_str()), Some(kind));
            assert_eq!(serde_json::to_value(kind).unwrap(), kind.as_str());
        }
        assert_eq!(ProviderKind::OpenAi.to_string(), "openai");
    }

    #[test]
    fn test_choice_parsing() {
        assert_eq!(ProviderChoice::parse("auto"), ProviderChoice::Auto);
        assert_eq!(
            ProviderChoice::parse("gemini"),
            ProviderChoice::Explicit(ProviderKind::Gemini)
        );
        assert_eq!(
            ProviderChoice::parse("OpenAI"),
            ProviderChoice::Explicit(ProviderKind::Demo)
        );
        assert_eq!(ProviderChoice::default(), ProviderChoice::Auto);
    }
}
