// Provider selection
//
// "auto" walks Ollama, OpenAI, Gemini and takes the first configured one.
// An explicit name whose provider is not configured resolves to demo.

use super::pool::ProviderPool;
use super::{LlmProvider, ProviderChoice, ProviderKind};

/// Order tried for `ProviderChoice::Auto`.
pub const AUTO_PRIORITY: [ProviderKind; 3] =
    [ProviderKind::Ollama, ProviderKind::OpenAi, ProviderKind::Gemini];

pub struct ProviderSelector<'a> {
    pool: &'a ProviderPool,
}

impl<'a> ProviderSelector<'a> {
    pub fn new(pool: &'a ProviderPool) -> Self {
        Self { pool }
    }

    /// Deterministically pick one provider kind for `choice`.
    pub fn resolve(&self, choice: ProviderChoice) -> ProviderKind {
        match choice {
            ProviderChoice::Auto => AUTO_PRIORITY
                .into_iter()
                .find(|k| self.pool.is_configured(*k))
                .unwrap_or(ProviderKind::Demo),
            ProviderChoice::Explicit(kind) if self.pool.is_configured(kind) => kind,
            ProviderChoice::Explicit(_) => ProviderKind::Demo,
        }
    }

    /// Resolve `choice` straight to a provider.
    pub fn select(&self, choice: ProviderChoice) -> &'a dyn LlmProvider {
        self.pool
            .get(self.resolve(choice))
            .unwrap_or_else(|| self.pool.demo())
    }
}
