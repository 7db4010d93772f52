// POST /api/rag - curriculum retrieval with optional answer generation

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

use super::error::ApiError;
use super::lenient;
use super::AppState;
use crate::prompt::PromptLanguage;
use crate::providers::{LlmProvider, ProviderKind, ProviderRequest};
use crate::rag::{rag_system_prompt, score_documents, GsebDocument, GsebFilter, Scored};

const DEFAULT_TOP_K: u32 = 5;
const ANSWER_MAX_TOKENS: u32 = 1500;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RagBody {
    #[serde(default)]
    query: Option<String>,
    #[serde(default)]
    subject: Option<String>,
    #[serde(default, deserialize_with = "lenient::count")]
    class_level: Option<u32>,
    #[serde(default)]
    chapter: Option<String>,
    #[serde(default, deserialize_with = "lenient::count")]
    top_k: Option<u32>,
    #[serde(default, deserialize_with = "lenient::flag")]
    use_chat: bool,
    #[serde(default)]
    session_id: Option<Value>,
    #[serde(default)]
    language: Option<String>,
}

/// Passage cited in a generated answer.
#[derive(Debug, Serialize)]
struct Source {
    subject: &'static str,
    chapter: &'static str,
    topic: &'static str,
    content: &'static str,
    score: f64,
}

pub async fn handle_rag(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RagBody>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = payload?;
    let query = body
        .query
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::bad_request("Query is required"))?;

    let ollama = state.pool.get(ProviderKind::Ollama);
    let openai = state.pool.get(ProviderKind::OpenAi);
    if ollama.is_none() && openai.is_none() {
        return Err(ApiError::internal(
            "No AI API key configured. Set OLLAMA_API_KEY or OPENAI_API_KEY",
        ));
    }

    let filter = GsebFilter {
        subject: body.subject.as_deref().filter(|s| !s.is_empty()),
        class_level: body.class_level,
        chapter: body.chapter.as_deref().filter(|c| !c.is_empty()),
    };
    let top_k = body.top_k.unwrap_or(DEFAULT_TOP_K) as usize;
    let top_docs = score_documents(&query, filter.apply(), top_k);

    if !body.use_chat {
        return Ok(Json(json!({
            "documents": top_docs,
            "totalFound": top_docs.len(),
        })));
    }

    let language = PromptLanguage::from_code(body.language.as_deref().unwrap_or("gu"));
    let context = top_docs
        .iter()
        .map(|s| s.doc.localized(language))
        .collect::<Vec<_>>()
        .join("\n\n");
    let system = rag_system_prompt(&context, language);

    let response = generate_answer(ollama, openai, &query, &system).await?;

    Ok(Json(json!({
        "response": response.as_deref().unwrap_or("Failed to generate response"),
        "sources": sources(&top_docs, language),
        "sessionId": body.session_id,
    })))
}

/// Ollama first; OpenAI only if Ollama produced nothing. An OpenAI failure
/// fails the request.
async fn generate_answer(
    ollama: Option<&dyn LlmProvider>,
    openai: Option<&dyn LlmProvider>,
    query: &str,
    system: &str,
) -> Result<Option<String>, ApiError> {
    if let Some(provider) = ollama {
        let request = ProviderRequest::from_text(query).with_system(system);
        match provider.send_message(&request).await {
            Ok(reply) => return Ok(Some(reply.text)),
            Err(e) => tracing::warn!("RAG answer via ollama failed: {}", e),
        }
    }

    let Some(provider) = openai else {
        return Ok(None);
    };
    let request = ProviderRequest::from_text(query)
        .with_system(system)
        .with_max_tokens(ANSWER_MAX_TOKENS);
    let reply = provider
        .send_message(&request)
        .await
        .map_err(|e| ApiError::internal_with("Failed to process RAG query", e))?;
    Ok(Some(reply.text))
}

fn sources(docs: &[Scored<GsebDocument>], language: PromptLanguage) -> Vec<Source> {
    docs.iter()
        .map(|s| Source {
            subject: s.doc.subject,
            chapter: s.doc.chapter,
            topic: s.doc.topic,
            content: s.doc.localized(language),
            score: s.score,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rag::GSEB_KNOWLEDGE_BASE;

    #[test]
    fn test_sources_use_requested_language() {
        let docs = score_documents("photosynthesis", GSEB_KNOWLEDGE_BASE, 5);
        assert_eq!(docs.len(), 1);

        let gu = sources(&docs, PromptLanguage::Gujarati);
        assert!(gu[0].content.starts_with("પ્રકાશસંશ્લેષણ"));
        let en = sources(&docs, PromptLanguage::English);
        assert!(en[0].content.starts_with("Photosynthesis"));
        assert_eq!(en[0].score, 1.0);
    }

    #[test]
    fn test_body_defaults() {
        let body: RagBody = serde_json::from_value(json!({"query": "x", "classLevel": "10"})).unwrap();
        assert_eq!(body.class_level, Some(10));
        assert!(!body.use_chat);
        assert!(body.top_k.is_none());
        assert!(body.session_id.is_none());
    }
}
