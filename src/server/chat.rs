// POST /api/chat - tutoring chat

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::error::ApiError;
use super::lenient;
use super::{timestamp, AppState};
use crate::prompt::{build_system_prompt, ExplanationMode};
use crate::providers::{
    demo_response, ChatMessage, LlmProvider, ProviderChoice, ProviderKind, ProviderRequest,
    ProviderSelector,
};

/// Prior turns forwarded to providers that accept history.
const HISTORY_WINDOW: usize = 10;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    mode: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_or_number")]
    class_level: Option<String>,
    #[serde(default)]
    subject: Option<String>,
    #[serde(default)]
    conversation_history: Vec<ChatMessage>,
    #[serde(default)]
    provider: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    success: bool,
    response: String,
    provider: ProviderKind,
    timestamp: String,
}

/// Messages sent upstream: the tail of the history plus the new question,
/// or only the question when the provider takes no history.
fn conversation(provider: &dyn LlmProvider, history: &[ChatMessage], message: &str) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(HISTORY_WINDOW + 1);
    if provider.supports_history() {
        let start = history.len().saturating_sub(HISTORY_WINDOW);
        messages.extend_from_slice(&history[start..]);
    }
    messages.push(ChatMessage::user(message));
    messages
}

pub async fn handle_chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatBody>, JsonRejection>,
) -> Result<Json<ChatReply>, ApiError> {
    let Json(body) = payload?;
    let message = body
        .message
        .filter(|m| !m.is_empty())
        .ok_or_else(|| ApiError::bad_request("Message is required"))?;

    let mode = ExplanationMode::from_name(body.mode.as_deref().unwrap_or_default());
    let system = build_system_prompt(mode, body.class_level.as_deref(), body.subject.as_deref());

    let choice = ProviderChoice::parse(body.provider.as_deref().unwrap_or("auto"));
    let provider = ProviderSelector::new(&state.pool).select(choice);

    let request = ProviderRequest::new(conversation(provider, &body.conversation_history, &message))
        .with_system(system);

    let (response, used) = match provider.send_message(&request).await {
        Ok(reply) => (reply.text, reply.provider),
        Err(e) => {
            tracing::warn!("Chat provider {} failed, answering from demo: {}", provider.name(), e);
            (demo_response(&message).to_string(), ProviderKind::Demo)
        }
    };

    tracing::info!("Chat answered by provider: {}", used);

    Ok(Json(ChatReply {
        success: true,
        response,
        provider: used,
        timestamp: timestamp(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::DemoProvider;

    fn history(n: usize) -> Vec<ChatMessage> {
        (0..n).map(|i| ChatMessage::user(format!("turn {i}"))).collect()
    }

    #[test]
    fn test_history_is_windowed() {
        let messages = conversation(&DemoProvider, &history(14), "now");
        assert_eq!(messages.len(), HISTORY_WINDOW + 1);
        assert_eq!(messages[0].content, "turn 4");
        assert_eq!(messages.last().unwrap().content, "now");
    }

    #[test]
    fn test_short_history_kept_whole() {
        let messages = conversation(&DemoProvider, &history(2), "now");
        assert_eq!(messages.len(), 3);
    }

    #[test]
    fn test_body_accepts_numeric_class_level() {
        let body: ChatBody = serde_json::from_value(serde_json::json!({
            "message": "hi",
            "classLevel": 9,
            "conversationHistory": [{"role": "assistant", "content": "hello"}]
        }))
        .unwrap();
        assert_eq!(body.class_level.as_deref(), Some("9"));
        assert_eq!(body.conversation_history.len(), 1);
        assert!(body.provider.is_none());
    }
}
