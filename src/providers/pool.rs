// Provider pool
//
// Built once from `AppConfig`. Holds a client only for providers whose
// credential is configured, plus the always-available demo provider.

use super::demo::DemoProvider;
use super::error::ProviderError;
use super::gemini::GeminiProvider;
use super::ollama::OllamaProvider;
use super::openai::OpenAIProvider;
use super::speech::SpeechClient;
use super::vision::VisionBackend;
use super::{LlmProvider, ProviderKind};
use crate::config::AppConfig;

#[derive(Clone, Default)]
pub struct ProviderPool {
    ollama: Option<OllamaProvider>,
    openai: Option<OpenAIProvider>,
    gemini: Option<GeminiProvider>,
    speech: Option<SpeechClient>,
    demo: DemoProvider,
}

impl ProviderPool {
    pub fn from_config(config: &AppConfig) -> Result<Self, ProviderError> {
        let settings = &config.providers;

        let ollama = config
            .ollama_key()
            .map(|key| OllamaProvider::new(key.to_string(), settings))
            .transpose()?;
        let openai = config
            .openai_key()
            .map(|key| OpenAIProvider::new(key.to_string(), settings))
            .transpose()?;
        let gemini = config
            .gemini_key()
            .map(|key| GeminiProvider::new(key.to_string(), settings))
            .transpose()?;
        let speech = config
            .openai_key()
            .map(|key| SpeechClient::new(key.to_string(), settings))
            .transpose()?;

        let pool = Self {
            ollama,
            openai,
            gemini,
            speech,
            demo: DemoProvider,
        };

        tracing::info!("Provider pool ready: {:?}", pool.configured());
        Ok(pool)
    }

    /// Provider for `kind`, if it is usable. Demo is always usable.
    pub fn get(&self, kind: ProviderKind) -> Option<&dyn LlmProvider> {
        match kind {
            ProviderKind::Ollama => self.ollama.as_ref().map(|p| p as &dyn LlmProvider),
            ProviderKind::OpenAi => self.openai.as_ref().map(|p| p as &dyn LlmProvider),
            ProviderKind::Gemini => self.gemini.as_ref().map(|p| p as &dyn LlmProvider),
            ProviderKind::Demo => Some(&self.demo as &dyn LlmProvider),
        }
    }

    pub fn is_configured(&self, kind: ProviderKind) -> bool {
        self.get(kind).is_some()
    }

    /// Configured kinds in auto-selection order, demo last.
    pub fn configured(&self) -> Vec<ProviderKind> {
        ProviderKind::ALL
            .into_iter()
            .filter(|k| self.is_configured(*k))
            .collect()
    }

    pub fn demo(&self) -> &dyn LlmProvider {
        &self.demo
    }

    pub fn speech(&self) -> Option<&SpeechClient> {
        self.speech.as_ref()
    }

    /// Vision backend: Gemini when configured, else OpenAI.
    pub fn vision(&self) -> Option<VisionBackend<'_>> {
        self.gemini
            .as_ref()
            .map(VisionBackend::Gemini)
            .or_else(|| self.openai.as_ref().map(VisionBackend::OpenAi))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Credentials;

    fn pool_with(pairs: &[(&str, &str)]) -> ProviderPool {
        let config = AppConfig::new(Credentials::from_pairs(pairs.iter().copied()));
        ProviderPool::from_config(&config).unwrap()
    }

    #[test]
    fn test_empty_pool_has_only_demo() {
        let pool = pool_with(&[]);
        assert_eq!(pool.configured(), vec![ProviderKind::Demo]);
        assert!(pool.speech().is_none());
        assert!(pool.vision().is_none());
    }

    #[test]
    fn test_openai_key_enables_chat_speech_and_vision() {
        let pool = pool_with(&[("OPENAI_API_KEY", "sk")]);
        assert!(pool.is_configured(ProviderKind::OpenAi));
        assert!(pool.speech().is_some());
        assert_eq!(pool.vision().unwrap().kind(), ProviderKind::OpenAi);
    }

    #[test]
    fn test_gemini_preferred_for_vision() {
        let pool = pool_with(&[("OPENAI_API_KEY", "sk"), ("GOOGLE_GEMINI_API_KEY", "g")]);
        assert_eq!(pool.vision().unwrap().kind(), ProviderKind::Gemini);
    }

    #[test]
    fn test_ollama_key_alone_has_no_vision() {
        let pool = pool_with(&[("OLLAMA_API_KEY", "o")]);
        assert!(pool.vision().is_none());
        assert_eq!(pool.get(ProviderKind::Ollama).unwrap().name(), "ollama");
    }
}
