// Project-wide constants
//
// Centralised here so addresses, model names and other magic values have one
// source of truth. Import via `use crate::config::constants::*;`.

/// Default bind address for the HTTP gateway (localhost only).
pub const DEFAULT_HTTP_ADDR: &str = "127.0.0.1:3000";

/// Largest accepted request body. Whisper caps uploads at 25 MB, so audio
/// and image forms are allowed up to the same size.
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 25 * 1024 * 1024;

/// Outbound timeout applied to every provider HTTP client.
pub const REQUEST_TIMEOUT_SECS: u64 = 60;

pub const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434";
pub const DEFAULT_OLLAMA_MODEL: &str = "llama2";

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_OPENAI_CHAT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_OPENAI_VISION_MODEL: &str = "gpt-4o";
pub const DEFAULT_OPENAI_TTS_MODEL: &str = "tts-1";
pub const DEFAULT_OPENAI_STT_MODEL: &str = "whisper-1";

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_CHAT_MODEL: &str = "gemini-pro";
pub const DEFAULT_GEMINI_VISION_MODEL: &str = "gemini-1.5-flash";

/// Token budget for chat and vision completions.
pub const DEFAULT_MAX_TOKENS: u32 = 2000;

/// Sampling temperature used by every text endpoint.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Gemini vision runs cooler so structured JSON comes back more reliably.
pub const VISION_TEMPERATURE: f32 = 0.4;

// Environment variable names. Read once at startup into `Credentials`.
pub const OLLAMA_API_KEY: &str = "OLLAMA_API_KEY";
pub const OLLAMA_BASE_URL: &str = "OLLAMA_BASE_URL";
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const GOOGLE_GEMINI_API_KEY: &str = "GOOGLE_GEMINI_API_KEY";
pub const GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";
pub const PINECONE_API_KEY: &str = "PINECONE_API_KEY";
pub const PINECONE_ENV: &str = "PINECONE_ENV";
pub const PINECONE_INDEX: &str = "PINECONE_INDEX";

/// Every secret the gateway or the catalogued projects may depend on.
pub const KNOWN_CREDENTIALS: &[&str] = &[
    OLLAMA_API_KEY,
    OPENAI_API_KEY,
    GOOGLE_GEMINI_API_KEY,
    GOOGLE_API_KEY,
    PINECONE_API_KEY,
    PINECONE_ENV,
    PINECONE_INDEX,
];
