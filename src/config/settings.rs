// Configuration structs

use serde::{Deserialize, Serialize};

use super::constants::*;
use super::credentials::Credentials;

/// HTTP listener settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Bind address (e.g., "127.0.0.1:3000")
    pub bind_address: String,
    /// Maximum request body size in bytes (multipart uploads included)
    pub body_limit_bytes: usize,
    /// Allow cross-origin requests from the browser dashboard
    pub cors_enabled: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_HTTP_ADDR.to_string(),
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
            cors_enabled: true,
        }
    }
}

/// Endpoints and model names for every upstream provider.
///
/// Base URLs are overridable so tests can point clients at a mock server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    pub ollama_base_url: String,
    pub ollama_model: String,

    pub openai_base_url: String,
    pub openai_chat_model: String,
    pub openai_vision_model: String,
    pub openai_tts_model: String,
    pub openai_stt_model: String,

    pub gemini_base_url: String,
    pub gemini_chat_model: String,
    pub gemini_vision_model: String,

    /// Completion budget for chat and vision calls
    pub max_tokens: u32,
    pub temperature: f32,
    pub request_timeout_secs: u64,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            ollama_base_url: DEFAULT_OLLAMA_BASE_URL.to_string(),
            ollama_model: DEFAULT_OLLAMA_MODEL.to_string(),
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            openai_chat_model: DEFAULT_OPENAI_CHAT_MODEL.to_string(),
            openai_vision_model: DEFAULT_OPENAI_VISION_MODEL.to_string(),
            openai_tts_model: DEFAULT_OPENAI_TTS_MODEL.to_string(),
            openai_stt_model: DEFAULT_OPENAI_STT_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            gemini_chat_model: DEFAULT_GEMINI_CHAT_MODEL.to_string(),
            gemini_vision_model: DEFAULT_GEMINI_VISION_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            request_timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ProviderSettings {
    /// Point every provider at the same base URL (mock servers in tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.ollama_base_url = base_url.clone();
        self.openai_base_url = base_url.clone();
        self.gemini_base_url = base_url;
        self
    }
}

/// Complete process configuration, built once at startup and shared
/// read-only with every handler.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub providers: ProviderSettings,
    pub credentials: Credentials,
}

impl AppConfig {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            ..Default::default()
        }
    }

    pub fn with_providers(mut self, providers: ProviderSettings) -> Self {
        self.providers = providers;
        self
    }

    pub fn ollama_key(&self) -> Option<&str> {
        self.credentials.get(OLLAMA_API_KEY)
    }

    pub fn openai_key(&self) -> Option<&str> {
        self.credentials.get(OPENAI_API_KEY)
    }

    /// Chat and vision use the Gemini-specific key only.
    pub fn gemini_key(&self) -> Option<&str> {
        self.credentials.get(GOOGLE_GEMINI_API_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.bind_address, "127.0.0.1:3000");
        assert_eq!(config.providers.ollama_model, "llama2");
        assert_eq!(config.providers.openai_chat_model, "gpt-4o-mini");
        assert_eq!(config.providers.max_tokens, 2000);
        assert!(config.openai_key().is_none());
    }

    #[test]
    fn test_gemini_key_ignores_generic_google_key() {
        let config = AppConfig::new(Credentials::from_pairs([(GOOGLE_API_KEY, "g")]));
        assert!(config.gemini_key().is_none());
    }

    #[test]
    fn test_with_base_url_rewrites_all_providers() {
        let settings = ProviderSettings::default().with_base_url("http://127.0.0.1:9");
        assert_eq!(settings.ollama_base_url, "http://127.0.0.1:9");
        assert_eq!(settings.openai_base_url, "http://127.0.0.1:9");
        assert_eq!(settings.gemini_base_url, "http://127.0.0.1:9");
    }
}
