// /api/health - credential presence and project readiness report
//
// Nothing here touches the network: "healthy" means the key is configured.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::Arc;

use super::error::ApiError;
use super::{timestamp, AppState};
use crate::config::constants::{GOOGLE_API_KEY, GOOGLE_GEMINI_API_KEY, OPENAI_API_KEY, PINECONE_API_KEY};
use crate::config::Credentials;
use crate::registry::{
    get_all_projects, get_project_by_id, get_project_stats, Category, ProjectInfo, ProjectStatus,
};

/// Projects listed when `detailed` is off.
const SUMMARY_PROJECTS: usize = 5;

/// Routes reported by `checkApis`.
const API_ENDPOINTS: [&str; 5] = ["/api/projects", "/api/llm", "/api/rag-projects", "/api/chat", "/api/rag"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceHealth {
    pub service: &'static str,
    pub status: ServiceStatus,
    pub message: &'static str,
    pub last_checked: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Readiness {
    Ready,
    MissingDependencies,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectHealth {
    pub project_id: &'static str,
    pub name: &'static str,
    pub status: Readiness,
    pub missing_env_vars: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_endpoint: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointHealth {
    pub endpoint: &'static str,
    pub status: &'static str,
    pub response_time: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallHealth {
    pub status: ServiceStatus,
    pub health_score: u32,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatistics {
    pub total_projects: usize,
    pub by_category: BTreeMap<Category, usize>,
    pub by_status: BTreeMap<ProjectStatus, usize>,
    pub technologies: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub success: bool,
    pub timestamp: String,
    pub overall_health: OverallHealth,
    pub core_services: Vec<ServiceHealth>,
    pub projects_health: Vec<ProjectHealth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_health: Option<Vec<EndpointHealth>>,
    pub statistics: HealthStatistics,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthQuery {
    detailed: Option<String>,
    check_apis: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthActionBody {
    #[serde(default)]
    action: Option<String>,
    #[serde(default)]
    project_id: Option<String>,
}

fn key_service(service: &'static str, configured: bool, now: &str) -> ServiceHealth {
    ServiceHealth {
        service,
        status: if configured {
            ServiceStatus::Healthy
        } else {
            ServiceStatus::Unhealthy
        },
        message: if configured {
            "API key configured"
        } else {
            "API key not configured"
        },
        last_checked: now.to_string(),
    }
}

fn core_services(credentials: &Credentials, now: &str) -> Vec<ServiceHealth> {
    vec![
        ServiceHealth {
            service: "GyaanSetu Server",
            status: ServiceStatus::Healthy,
            message: "Server is running",
            last_checked: now.to_string(),
        },
        key_service("OpenAI API", credentials.is_set(OPENAI_API_KEY), now),
        key_service(
            "Google Gemini API",
            credentials.is_set(GOOGLE_GEMINI_API_KEY) || credentials.is_set(GOOGLE_API_KEY),
            now,
        ),
        key_service("Pinecone", credentials.is_set(PINECONE_API_KEY), now),
    ]
}

fn project_health(project: &'static ProjectInfo, credentials: &Credentials) -> ProjectHealth {
    let missing = credentials.missing(project.requires_api_key);
    ProjectHealth {
        project_id: project.id,
        name: project.name,
        status: if missing.is_empty() {
            Readiness::Ready
        } else {
            Readiness::MissingDependencies
        },
        missing_env_vars: missing,
        api_endpoint: project.api_endpoint,
    }
}

/// Healthy when at least half the services are; the score weighs services
/// and project readiness equally.
fn overall_health(services: &[ServiceHealth], projects: &[ProjectHealth]) -> OverallHealth {
    let healthy = services.iter().filter(|s| s.status == ServiceStatus::Healthy).count();
    let total = services.len();
    let ready = projects.iter().filter(|p| p.status == Readiness::Ready).count();
    let project_total = projects.len();

    let ratio = |n: usize, d: usize| if d == 0 { 0.0 } else { n as f64 / d as f64 };
    let score = (ratio(healthy, total) * 50.0 + ratio(ready, project_total) * 50.0).round();

    OverallHealth {
        status: if healthy * 2 >= total {
            ServiceStatus::Healthy
        } else {
            ServiceStatus::Degraded
        },
        health_score: score as u32,
        summary: format!("{healthy}/{total} services healthy, {ready}/{project_total} projects ready"),
    }
}

/// Full report. The overall score always covers every project, even when
/// only the first few are listed.
pub fn build_health_report(credentials: &Credentials, detailed: bool, check_apis: bool) -> HealthReport {
    let now = timestamp();
    let services = core_services(credentials, &now);
    let mut projects: Vec<ProjectHealth> = get_all_projects()
        .iter()
        .map(|p| project_health(p, credentials))
        .collect();
    let overall = overall_health(&services, &projects);

    if !detailed {
        projects.truncate(SUMMARY_PROJECTS);
    }

    let api_health = check_apis.then(|| {
        API_ENDPOINTS
            .into_iter()
            .map(|endpoint| EndpointHealth {
                endpoint,
                status: "available",
                response_time: 0,
            })
            .collect()
    });

    let stats = get_project_stats();
    HealthReport {
        success: true,
        timestamp: now,
        overall_health: overall,
        core_services: services,
        projects_health: projects,
        api_health,
        statistics: HealthStatistics {
            total_projects: stats.total,
            by_category: stats.by_category,
            by_status: stats.by_status,
            technologies: stats.technologies_count,
        },
    }
}

pub async fn health(
    State(state): State<Arc<AppState>>,
    query: Result<Query<HealthQuery>, QueryRejection>,
) -> Result<Json<HealthReport>, ApiError> {
    let Query(query) = query?;
    let report = build_health_report(
        &state.config.credentials,
        query.detailed.as_deref() == Some("true"),
        query.check_apis.as_deref() == Some("true"),
    );
    tracing::debug!("Health: {}", report.overall_health.summary);
    Ok(Json(report))
}

pub async fn health_action(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<HealthActionBody>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = payload?;

    match body.action.as_deref().unwrap_or_default() {
        "check_project" => {
            let project_id = body
                .project_id
                .filter(|id| !id.is_empty())
                .ok_or_else(|| ApiError::bad_request("projectId is required"))?;
            let project =
                get_project_by_id(&project_id).ok_or_else(|| ApiError::not_found("Project not found"))?;
            Ok(Json(json!({ "success": true, "data": check_project(project, &state.config.credentials) })))
        }
        "ping_all" => Ok(Json(json!({
            "success": true,
            "data": {
                "message": "All services pinged",
                "timestamp": timestamp(),
                "results": {
                    "projects_api": "ok",
                    "llm_api": "ok",
                    "rag_api": "ok",
                    "chat_api": "ok",
                }
            }
        }))),
        _ => Err(ApiError::unknown_action()),
    }
}

fn check_project(project: &ProjectInfo, credentials: &Credentials) -> Value {
    let missing = credentials.missing(project.requires_api_key);
    let all_configured = missing.is_empty();
    json!({
        "projectId": project.id,
        "name": project.name,
        "category": project.category,
        "status": project.status,
        "path": project.path,
        "mainFile": project.main_file,
        "technologies": project.technologies,
        "features": project.features,
        "apiEndpoint": project.api_endpoint,
        "environment": {
            "required": project.requires_api_key,
            "allConfigured": all_configured,
            "missing": missing,
        },
        "readyToUse": project.status == ProjectStatus::Active && all_configured,
    })
}
