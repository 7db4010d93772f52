// /api/llm - LLM project catalog and blog generation

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

use super::error::ApiError;
use super::lenient;
use super::AppState;
use crate::providers::{LlmProvider, ProviderKind, ProviderRequest};
use crate::registry::{
    get_project_in_category, get_projects_by_category, llm_config, Category, LLM_CONFIGS,
};

const BLOG_PROJECT: &str = "blog-generation-llama2";
const DEFAULT_STYLE: &str = "Common People";
const DEFAULT_WORD_COUNT: u32 = 500;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmQuery {
    project_id: Option<String>,
    list_models: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmActionBody {
    #[serde(default)]
    project_id: Option<String>,
    #[serde(default)]
    action: Option<String>,
    #[serde(default)]
    params: BlogParams,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BlogParams {
    #[serde(default)]
    topic: Option<String>,
    #[serde(default, deserialize_with = "lenient::count")]
    word_count: Option<u32>,
    #[serde(default)]
    style: Option<String>,
}

/// Generated blog plus a label for whichever backend wrote it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BlogResult {
    topic: String,
    style: String,
    word_count: u32,
    content: String,
    model: &'static str,
    note: &'static str,
}

pub async fn list_llm(
    query: Result<Query<LlmQuery>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let Query(query) = query?;

    if query.list_models.as_deref() == Some("true") {
        return Ok(Json(json!({
            "success": true,
            "data": {
                "availableModels": LLM_CONFIGS.ids(),
                "configurations": &LLM_CONFIGS,
            }
        })));
    }

    if let Some(project_id) = query.project_id.filter(|id| !id.is_empty()) {
        let project = get_project_in_category(&project_id, Category::Llm)
            .ok_or_else(|| ApiError::not_found("LLM project not found"))?;
        return Ok(Json(json!({
            "success": true,
            "data": { "project": project, "config": llm_config(&project_id) }
        })));
    }

    let projects = get_projects_by_category(Category::Llm);
    Ok(Json(json!({
        "success": true,
        "data": projects,
        "count": projects.len(),
    })))
}

pub async fn llm_action(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LlmActionBody>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = payload?;
    let (project_id, action) = match (body.project_id, body.action) {
        (Some(id), Some(action)) if !id.is_empty() && !action.is_empty() => (id, action),
        _ => return Err(ApiError::bad_request("projectId and action are required")),
    };

    get_project_in_category(&project_id, Category::Llm)
        .ok_or_else(|| ApiError::not_found("LLM project not found"))?;

    match action.as_str() {
        "generate_blog" => {
            let result = generate_blog(&state, &project_id, body.params).await?;
            Ok(Json(json!({
                "success": true,
                "data": { "projectId": project_id, "action": "generate_blog", "result": result }
            })))
        }
        "get_config" => Ok(Json(json!({
            "success": true,
            "data": { "projectId": project_id, "config": llm_config(&project_id) }
        }))),
        _ => Err(ApiError::unknown_action()),
    }
}

fn blog_prompt(style: &str, topic: &str, word_count: u32) -> String {
    format!("Write a blog for {style} job profile for a topic {topic} within {word_count} words.")
}

/// Ollama, then OpenAI, then a placeholder. Upstream failures only move
/// the chain along.
async fn generate_blog(
    state: &AppState,
    project_id: &str,
    params: BlogParams,
) -> Result<BlogResult, ApiError> {
    if project_id != BLOG_PROJECT {
        return Err(ApiError::bad_request(format!(
            "This action is only for {BLOG_PROJECT} project"
        )));
    }

    let topic = params
        .topic
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::bad_request("Topic is required for blog generation"))?;

    if let (Some(style), Some(config)) = (params.style.as_deref(), llm_config(BLOG_PROJECT)) {
        if !config.supports_style(style) {
            return Err(ApiError::bad_request(format!(
                "Style must be one of: {}",
                config.supported_styles.join(", ")
            )));
        }
    }

    let style = params.style.unwrap_or_else(|| DEFAULT_STYLE.to_string());
    let word_count = params.word_count.filter(|wc| *wc > 0).unwrap_or(DEFAULT_WORD_COUNT);
    let prompt = blog_prompt(&style, &topic, word_count);

    let attempts: [(ProviderKind, &str, &'static str, &'static str); 2] = [
        (
            ProviderKind::Ollama,
            "You are a professional blog writer. Write engaging and informative content.",
            "llama2 (Ollama Cloud)",
            "Using Ollama Cloud LLama2 model.",
        ),
        (
            ProviderKind::OpenAi,
            "You are a professional blog writer.",
            "gpt-4o-mini (fallback)",
            "Using OpenAI as fallback. LLama2 model requires local setup.",
        ),
    ];

    for (kind, system, model, note) in attempts {
        let Some(provider) = state.pool.get(kind) else {
            continue;
        };
        let request = ProviderRequest::from_text(prompt.as_str())
            .with_system(system)
            .with_max_tokens(word_count);
        match provider.send_message(&request).await {
            Ok(reply) => {
                return Ok(BlogResult {
                    topic,
                    style,
                    word_count,
                    content: reply.text,
                    model,
                    note,
                })
            }
            Err(e) => tracing::warn!("Blog generation via {} failed: {}", provider.name(), e),
        }
    }

    let content = format!(
        "[Demo Response] Blog about \"{topic}\" for {style}:\n\nThis is a placeholder response. To get actual content, please configure your OpenAI API key or set up the local LLama2 model."
    );
    Ok(BlogResult {
        topic,
        style,
        word_count,
        content,
        model: "demo",
        note: "LLama2 model requires local setup. Set OPENAI_API_KEY for fallback.",
    })
}
