// Provider failure classification

use thiserror::Error;

/// Why a provider call failed.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// No credential configured for the provider
    #[error("{provider} is not configured")]
    NotConfigured { provider: &'static str },

    /// Connection, timeout or body-read failure
    #[error("{provider} request failed: {source}")]
    Transport {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// Upstream answered with a non-success status
    #[error("{provider} API error: {status} - {body}")]
    Status {
        provider: &'static str,
        status: u16,
        body: String,
    },

    /// Body did not match the expected schema
    #[error("{provider} returned an unexpected response: {detail}")]
    MalformedResponse {
        provider: &'static str,
        detail: String,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ProviderError {
    pub fn transport(provider: &'static str, source: reqwest::Error) -> Self {
        Self::Transport { provider, source }
    }

    pub fn malformed(provider: &'static str, detail: impl Into<String>) -> Self {
        Self::MalformedResponse {
            provider,
            detail: detail.into(),
        }
    }

    /// Upstream HTTP status, when the failure carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        let err = ProviderError::Status {
            provider: "openai",
            status: 429,
            body: "rate limited".to_string(),
        };
        assert_eq!(err.to_string(), "openai API error: 429 - rate limited");
        assert_eq!(err.status(), Some(429));
        assert_eq!(ProviderError::malformed("gemini", "no candidates").status(), None);
    }
}
