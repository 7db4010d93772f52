// OpenAI speech endpoints: text-to-speech and Whisper transcription

use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::error::ProviderError;
use super::http::{build_client, decode_json, ensure_success};
use crate::config::ProviderSettings;

const PROVIDER: &str = "openai";

pub const DEFAULT_VOICE: &str = "alloy";

/// Language hint sent to Whisper. Anything other than Gujarati or Hindi
/// is treated as English.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechLanguage {
    Gujarati,
    Hindi,
    English,
}

impl SpeechLanguage {
    pub fn from_code(code: &str) -> Self {
        match code {
            "gu" => Self::Gujarati,
            "hi" => Self::Hindi,
            _ => Self::English,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Gujarati => "gu",
            Self::Hindi => "hi",
            Self::English => "en",
        }
    }

    /// Vocabulary hint used when the caller supplies no prompt.
    pub fn context_prompt(&self) -> &'static str {
        match self {
            Self::Gujarati => "ગુજરાતી શૈક્ષણિક વિષયવસ્તુ, ગણિત, વિજ્ઞાન, GSEB અભ્યાસક્રમ",
            Self::Hindi => "हिंदी शैक्षिक सामग्री, गणित, विज्ञान",
            Self::English => "Educational content, mathematics, science, GSEB curriculum",
        }
    }
}

/// Audio upload to transcribe.
#[derive(Debug, Clone)]
pub struct TranscriptionRequest {
    pub audio: Vec<u8>,
    pub file_name: String,
    pub mime_type: Option<String>,
    pub language: SpeechLanguage,
    /// Overrides the language's default context prompt
    pub prompt: Option<String>,
}

/// Whisper `verbose_json` reply, trimmed to what the gateway returns.
#[derive(Debug, Clone, Deserialize)]
pub struct Transcription {
    pub text: String,
    pub language: Option<String>,
    pub duration: Option<f64>,
    pub segments: Option<Vec<TranscriptSegment>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub text: String,
    pub start: f64,
    pub end: f64,
}

#[derive(Clone)]
pub struct SpeechClient {
    client: Client,
    api_key: String,
    base_url: String,
    tts_model: String,
    stt_model: String,
}

impl SpeechClient {
    pub fn new(api_key: String, settings: &ProviderSettings) -> Result<Self, ProviderError> {
        Ok(Self {
            client: build_client(PROVIDER, settings.request_timeout_secs)?,
            api_key,
            base_url: settings.openai_base_url.trim_end_matches('/').to_string(),
            tts_model: settings.openai_tts_model.clone(),
            stt_model: settings.openai_stt_model.clone(),
        })
    }

    /// Synthesize `text`; returns MPEG audio bytes.
    pub async fn synthesize(&self, text: &str, voice: &str) -> Result<Vec<u8>, ProviderError> {
        let url = format!("{}/v1/audio/speech", self.base_url);
        let body = SpeechRequest {
            model: &self.tts_model,
            input: text,
            voice,
        };

        tracing::debug!("Requesting speech: model={}, voice={}, chars={}", self.tts_model, voice, text.chars().count());

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::transport(PROVIDER, e))?;

        let response = ensure_success(PROVIDER, response).await?;
        let audio = response
            .bytes()
            .await
            .map_err(|e| ProviderError::transport(PROVIDER, e))?;

        Ok(audio.to_vec())
    }

    /// Transcribe an audio upload with Whisper.
    pub async fn transcribe(&self, request: TranscriptionRequest) -> Result<Transcription, ProviderError> {
        let url = format!("{}/v1/audio/transcriptions", self.base_url);

        let mut file = Part::bytes(request.audio).file_name(request.file_name);
        if let Some(mime) = request.mime_type.as_deref().filter(|m| !m.is_empty()) {
            file = file
                .mime_str(mime)
                .map_err(|e| ProviderError::InvalidInput(format!("bad audio content type: {e}")))?;
        }

        let prompt = request
            .prompt
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| request.language.context_prompt().to_string());

        let form = Form::new()
            .part("file", file)
            .text("model", self.stt_model.clone())
            .text("response_format", "verbose_json")
            .text("language", request.language.code())
            .text("prompt", prompt);

        tracing::debug!("Requesting transcription: model={}, language={}", self.stt_model, request.language.code());

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ProviderError::transport(PROVIDER, e))?;

        let response = ensure_success(PROVIDER, response).await?;
        decode_json(PROVIDER, response).await
    }
}

#[derive(Debug, Serialize)]
struct SpeechRequest<'a> {
    model: &'a str,
    input: &'a str,
    voice: &'a str,
}
