// Shared HTTP plumbing for provider clients

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::error::ProviderError;

pub(crate) fn build_client(
    provider: &'static str,
    timeout_secs: u64,
) -> Result<Client, ProviderError> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| ProviderError::transport(provider, e))
}

/// Turn a non-success status into `ProviderError::Status`, keeping the body.
pub(crate) async fn ensure_success(
    provider: &'static str,
    response: Response,
) -> Result<Response, ProviderError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ProviderError::Status {
        provider,
        status: status.as_u16(),
        body,
    })
}

/// Read the body and decode it into the provider's response schema.
pub(crate) async fn decode_json<T: DeserializeOwned>(
    provider: &'static str,
    response: Response,
) -> Result<T, ProviderError> {
    let body = response
        .text()
        .await
        .map_err(|e| ProviderError::transport(provider, e))?;

    serde_json::from_str(&body).map_err(|e| ProviderError::malformed(provider, e.to_string()))
}

/// Non-empty text or a `MalformedResponse` naming the missing path.
pub(crate) fn require_text(
    provider: &'static str,
    text: Option<String>,
    path: &str,
) -> Result<String, ProviderError> {
    text.filter(|t| !t.is_empty())
        .ok_or_else(|| ProviderError::malformed(provider, format!("missing {path}")))
}
