// /api/rag-projects - RAG project catalog and the keyword-retrieval demo

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
use crate::config::Credentials;
use crate::providers::{LlmProvider, ProviderKind, ProviderRequest};
use crate::rag::demo::grounded_system_prompt;
use crate::rag::{score_documents, DEMO_KNOWLEDGE_BASE};
use crate::registry::{
    get_project_in_category, get_projects_by_category, rag_config, Category, RagConfig, RAG_CONFIGS,
};

const DEFAULT_TOP_K: u32 = 3;
const ANSWER_MAX_TOKENS: u32 = 500;
const NO_ANSWER: &str = "Configure OPENAI_API_KEY to generate responses";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RagProjectsQuery {
    project_id: Option<String>,
    list_configs: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RagActionBody {
    #[serde(default)]
    project_id: Option<String>,
    #[serde(default)]
    action: Option<String>,
    #[serde(default)]
    params: QueryParams,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QueryParams {
    #[serde(default)]
    query: Option<String>,
    #[serde(default, deserialize_with = "lenient::count")]
    top_k: Option<u32>,
}

#[derive(Debug, Serialize)]
struct EnvStatus<'a> {
    key: &'a str,
    configured: bool,
}

pub async fn list_rag_projects(
    query: Result<Query<RagProjectsQuery>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let Query(query) = query?;

    if query.list_configs.as_deref() == Some("true") {
        return Ok(Json(json!({
            "success": true,
            "data": {
                "availableProjects": RAG_CONFIGS.ids(),
                "configurations": &RAG_CONFIGS,
            }
        })));
    }

    if let Some(project_id) = query.project_id.filter(|id| !id.is_empty()) {
        let project = get_project_in_category(&project_id, Category::Rag)
            .ok_or_else(|| ApiError::not_found("RAG project not found"))?;
        return Ok(Json(json!({
            "success": true,
            "data": { "project": project, "config": rag_config(&project_id) }
        })));
    }

    let projects = get_projects_by_category(Category::Rag);
    Ok(Json(json!({
        "success": true,
        "data": projects,
        "count": projects.len(),
    })))
}

pub async fn rag_project_action(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RagActionBody>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = payload?;
    let (project_id, action) = match (body.project_id, body.action) {
        (Some(id), Some(action)) if !id.is_empty() && !action.is_empty() => (id, action),
        _ => return Err(ApiError::bad_request("projectId and action are required")),
    };

    get_project_in_category(&project_id, Category::Rag)
        .ok_or_else(|| ApiError::not_found("RAG project not found"))?;

    let data = match action.as_str() {
        "query" => run_query(&state, &project_id, body.params).await?,
        "get_config" => json!({ "projectId": project_id, "config": rag_config(&project_id) }),
        "check_environment" => match rag_config(&project_id) {
            Some(config) => check_environment(&project_id, config, &state.config.credentials),
            None => json!({
                "projectId": project_id,
                "configured": false,
                "message": "No configuration found for this project",
            }),
        },
        "list_features" => {
            let config = rag_config(&project_id);
            json!({
                "projectId": project_id,
                "features": config.map(|c| c.features).unwrap_or_default(),
                "vectorStore": config.map_or("Unknown", |c| c.vector_store),
                "embeddings": config.map_or("Unknown", |c| c.embeddings),
                "llm": config.map_or("Unknown", |c| c.llm),
            })
        }
        _ => return Err(ApiError::unknown_action()),
    };

    Ok(Json(json!({ "success": true, "data": data })))
}

async fn run_query(state: &AppState, project_id: &str, params: QueryParams) -> Result<Value, ApiError> {
    let query = params
        .query
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::bad_request("Query is required"))?;
    let top_k = params.top_k.unwrap_or(DEFAULT_TOP_K) as usize;

    let retrieved = score_documents(&query, DEMO_KNOWLEDGE_BASE, top_k);
    tracing::debug!("RAG demo query matched {} documents", retrieved.len());

    let mut generated = None;
    if let Some(provider) = state.pool.get(ProviderKind::OpenAi) {
        if !retrieved.is_empty() {
            let docs: Vec<_> = retrieved.iter().map(|s| &s.doc).collect();
            let request = ProviderRequest::from_text(query.as_str())
                .with_system(grounded_system_prompt(&docs))
                .with_max_tokens(ANSWER_MAX_TOKENS);
            match provider.send_message(&request).await {
                Ok(reply) => generated = Some(reply.text),
                Err(e) => tracing::warn!("RAG answer via {} failed: {}", provider.name(), e),
            }
        }
    }

    Ok(json!({
        "projectId": project_id,
        "action": "query",
        "query": query,
        "retrievedDocuments": retrieved,
        "generatedResponse": generated.as_deref().unwrap_or(NO_ANSWER),
        "note": format!("Demo RAG using {project_id}. For full functionality, run the actual project."),
    }))
}

fn check_environment(project_id: &str, config: &RagConfig, credentials: &Credentials) -> Value {
    let env_status: Vec<EnvStatus> = config
        .required_env
        .iter()
        .map(|key| EnvStatus {
            key,
            configured: credentials.is_set(key),
        })
        .collect();
    let all_configured = env_status.iter().all(|e| e.configured);

    json!({
        "projectId": project_id,
        "requiredEnv": config.required_env,
        "envStatus": env_status,
        "allConfigured": all_configured,
    })
}
