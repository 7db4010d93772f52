// /api/projects - catalog listing, search and per-project checks

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

use super::error::ApiError;
use super::AppState;
use crate::config::Credentials;
use crate::registry::{
    get_all_projects, get_project_by_id, get_project_stats, get_projects_by_category,
    search_projects, Category, ProjectInfo,
};

#[derive(Debug, Default, Deserialize)]
pub struct ProjectsQuery {
    category: Option<String>,
    id: Option<String>,
    search: Option<String>,
    stats: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectActionBody {
    #[serde(default)]
    action: Option<String>,
    #[serde(default)]
    project_id: Option<String>,
}

/// Launch details for one project.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectConfigView {
    id: &'static str,
    name: &'static str,
    path: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    main_file: Option<&'static str>,
    technologies: &'static [&'static str],
    requires_api_key: &'static [&'static str],
}

impl From<&ProjectInfo> for ProjectConfigView {
    fn from(project: &ProjectInfo) -> Self {
        Self {
            id: project.id,
            name: project.name,
            path: project.path,
            main_file: project.main_file,
            technologies: project.technologies,
            requires_api_key: project.requires_api_key,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// `stats`, then `id`, then `search`, then `category`, else everything.
pub async fn list_projects(
    query: Result<Query<ProjectsQuery>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let Query(query) = query?;

    if query.stats.as_deref() == Some("true") {
        return Ok(Json(json!({ "success": true, "data": get_project_stats() })));
    }

    if let Some(id) = non_empty(query.id) {
        let project = get_project_by_id(&id).ok_or_else(|| ApiError::not_found("Project not found"))?;
        return Ok(Json(json!({ "success": true, "data": project })));
    }

    if let Some(term) = non_empty(query.search) {
        let results = search_projects(&term);
        return Ok(Json(json!({ "success": true, "data": results, "count": results.len() })));
    }

    if let Some(name) = non_empty(query.category) {
        let category =
            Category::from_name(&name).ok_or_else(|| ApiError::bad_request("Invalid category"))?;
        let projects = get_projects_by_category(category);
        return Ok(Json(json!({ "success": true, "data": projects, "count": projects.len() })));
    }

    let projects = get_all_projects();
    Ok(Json(json!({ "success": true, "data": projects, "count": projects.len() })))
}

pub async fn project_action(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ProjectActionBody>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = payload?;
    let (action, project_id) = match (non_empty(body.action), non_empty(body.project_id)) {
        (Some(action), Some(id)) => (action, id),
        _ => return Err(ApiError::bad_request("Action and projectId are required")),
    };

    let project =
        get_project_by_id(&project_id).ok_or_else(|| ApiError::not_found("Project not found"))?;

    let data = match action.as_str() {
        "check_status" => json!({
            "project": project,
            "status": project.status,
            "hasApiEndpoint": project.api_endpoint.is_some(),
            "requiredApiKeys": project.requires_api_key,
        }),
        "get_config" => json!(ProjectConfigView::from(project)),
        "test_connection" => connection_status(project, &state.config.credentials),
        _ => return Err(ApiError::unknown_action()),
    };

    Ok(Json(json!({ "success": true, "data": data })))
}

fn connection_status(project: &ProjectInfo, credentials: &Credentials) -> Value {
    let missing = credentials.missing(project.requires_api_key);
    json!({
        "projectId": project.id,
        "connectionStatus": if missing.is_empty() { "ready" } else { "missing_keys" },
        "missingKeys": missing,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_status() {
        let project = get_project_by_id("chat-website-rag").unwrap();
        let value = connection_status(project, &Credentials::from_pairs([("OPENAI_API_KEY", "sk")]));
        assert_eq!(value["connectionStatus"], "missing_keys");
        assert_eq!(
            value["missingKeys"],
            json!(["PINECONE_API_KEY", "PINECONE_ENV"])
        );
    }

    #[test]
    fn test_project_without_keys_is_ready() {
        let project = get_all_projects()
            .iter()
            .find(|p| p.requires_api_key.is_empty())
            .unwrap();
        let value = connection_status(project, &Credentials::default());
        assert_eq!(value["connectionStatus"], "ready");
        assert_eq!(value["missingKeys"], json!([]));
    }

    #[test]
    fn test_config_view_skips_missing_main_file() {
        let project = get_all_projects()
            .iter()
            .find(|p| p.main_file.is_none())
            .unwrap();
        let value = serde_json::to_value(ProjectConfigView::from(project)).unwrap();
        assert!(value.get("mainFile").is_none());
        assert!(value["requiresApiKey"].is_array());
    }
}
