// /api/dashboard-data - aggregated catalog views for the dashboard UI

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    extract::Query,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::error::ApiError;
use super::timestamp;
use crate::registry::{
    get_all_projects, get_project_stats, get_projects_by_category, get_projects_by_status,
    top_technologies, Category, ProjectInfo, ProjectStats, ProjectStatus, TechnologyCount,
};

/// Entries shown per project in list views.
const PREVIEW_LEN: usize = 3;
const READY_TO_USE_LEN: usize = 5;
const TOP_TECHNOLOGIES: usize = 10;
const CHART_TECHNOLOGIES: usize = 8;

const SECTIONS: [&str; 5] = ["overview", "categories", "technologies", "recentActivity", "quickAccess"];

#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    section: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DashboardActionBody {
    #[serde(default)]
    action: Option<String>,
    #[serde(default)]
    filters: Option<ProjectFilters>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ProjectFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    technology: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    search: Option<String>,
}

impl ProjectFilters {
    fn active(value: &Option<String>) -> Option<&str> {
        value.as_deref().filter(|v| !v.is_empty())
    }

    /// Category and status compare exactly; technology and search are
    /// case-insensitive substrings.
    fn matches(&self, project: &ProjectInfo) -> bool {
        if let Some(category) = Self::active(&self.category) {
            if project.category.as_str() != category {
                return false;
            }
        }
        if let Some(status) = Self::active(&self.status) {
            if project.status.as_str() != status {
                return false;
            }
        }
        if let Some(tech) = Self::active(&self.technology) {
            let tech = tech.to_lowercase();
            if !project.technologies.iter().any(|t| t.to_lowercase().contains(&tech)) {
                return false;
            }
        }
        if let Some(search) = Self::active(&self.search) {
            let search = search.to_lowercase();
            if !project.name.to_lowercase().contains(&search)
                && !project.description.to_lowercase().contains(&search)
            {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Overview {
    total_projects: usize,
    active_projects: usize,
    development_projects: usize,
    total_technologies: usize,
}

#[derive(Debug, Serialize)]
struct ProjectPreview {
    id: &'static str,
    name: &'static str,
    status: ProjectStatus,
    technologies: &'static [&'static str],
}

#[derive(Debug, Serialize)]
struct CategorySummary {
    count: usize,
    projects: Vec<ProjectPreview>,
}

/// Per-category blocks, in dashboard display order.
#[derive(Debug, Serialize)]
struct Categories {
    llm: CategorySummary,
    rag: CategorySummary,
    chatbot: CategorySummary,
    agent: CategorySummary,
    educational: CategorySummary,
    vision: CategorySummary,
    tool: CategorySummary,
}

#[derive(Debug, Serialize)]
struct Technologies {
    all: Vec<&'static str>,
    count: usize,
    top: Vec<TechnologyCount>,
}

#[derive(Debug, Serialize)]
struct ReadyProject {
    id: &'static str,
    name: &'static str,
    category: Category,
    features: &'static [&'static str],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RecentActivity {
    ready_to_use: Vec<ReadyProject>,
}

#[derive(Debug, Serialize)]
struct ApiEndpoint {
    name: &'static str,
    endpoint: &'static str,
    method: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QuickAccess {
    api_endpoints: &'static [ApiEndpoint],
}

const API_ENDPOINTS: &[ApiEndpoint] = &[
    ApiEndpoint { name: "All Projects", endpoint: "/api/projects", method: "GET" },
    ApiEndpoint { name: "Project Stats", endpoint: "/api/projects?stats=true", method: "GET" },
    ApiEndpoint { name: "LLM Projects", endpoint: "/api/llm", method: "GET" },
    ApiEndpoint { name: "RAG Projects", endpoint: "/api/rag-projects", method: "GET" },
    ApiEndpoint { name: "Health Check", endpoint: "/api/health", method: "GET" },
    ApiEndpoint { name: "Dashboard Data", endpoint: "/api/dashboard-data", method: "GET" },
    ApiEndpoint { name: "Chat API", endpoint: "/api/chat", method: "POST" },
    ApiEndpoint { name: "RAG API", endpoint: "/api/rag", method: "POST" },
];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DashboardData {
    overview: Overview,
    categories: Categories,
    technologies: Technologies,
    recent_activity: RecentActivity,
    quick_access: QuickAccess,
}

#[derive(Debug, Serialize)]
struct ChartPoint {
    name: &'static str,
    value: usize,
}

fn preview(slice: &'static [&'static str]) -> &'static [&'static str] {
    &slice[..slice.len().min(PREVIEW_LEN)]
}

fn category_summary(stats: &ProjectStats, category: Category) -> CategorySummary {
    CategorySummary {
        count: stats.by_category[&category],
        projects: get_projects_by_category(category)
            .into_iter()
            .map(|p| ProjectPreview {
                id: p.id,
                name: p.name,
                status: p.status,
                technologies: preview(p.technologies),
            })
            .collect(),
    }
}

fn build_dashboard() -> DashboardData {
    let stats = get_project_stats();
    let all: Vec<&ProjectInfo> = get_all_projects().iter().collect();

    let ready_to_use = get_projects_by_status(ProjectStatus::Active)
        .into_iter()
        .take(READY_TO_USE_LEN)
        .map(|p| ReadyProject {
            id: p.id,
            name: p.name,
            category: p.category,
            features: preview(p.features),
        })
        .collect();

    DashboardData {
        overview: Overview {
            total_projects: stats.total,
            active_projects: stats.by_status[&ProjectStatus::Active],
            development_projects: stats.by_status[&ProjectStatus::Development],
            total_technologies: stats.technologies_count,
        },
        categories: Categories {
            llm: category_summary(&stats, Category::Llm),
            rag: category_summary(&stats, Category::Rag),
            chatbot: category_summary(&stats, Category::Chatbot),
            agent: category_summary(&stats, Category::Agent),
            educational: category_summary(&stats, Category::Educational),
            vision: category_summary(&stats, Category::Vision),
            tool: category_summary(&stats, Category::Tool),
        },
        technologies: Technologies {
            top: top_technologies(&all, TOP_TECHNOLOGIES),
            count: stats.technologies_count,
            all: stats.technologies,
        },
        recent_activity: RecentActivity { ready_to_use },
        quick_access: QuickAccess {
            api_endpoints: API_ENDPOINTS,
        },
    }
}

fn section_value(data: DashboardData, section: &str) -> Result<Value, serde_json::Error> {
    match section {
        "overview" => serde_json::to_value(data.overview),
        "categories" => serde_json::to_value(data.categories),
        "technologies" => serde_json::to_value(data.technologies),
        "recentActivity" => serde_json::to_value(data.recent_activity),
        _ => serde_json::to_value(data.quick_access),
    }
}

/// Whole dashboard, or one section when `section` names a known one.
pub async fn dashboard_data(
    query: Result<Query<DashboardQuery>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let Query(query) = query?;
    let data = build_dashboard();
    let failed = |e: serde_json::Error| ApiError::internal_with("Failed to fetch dashboard data", e);

    match query.section.as_deref().filter(|s| SECTIONS.contains(s)) {
        Some(section) => Ok(Json(json!({
            "success": true,
            "section": section,
            "data": section_value(data, section).map_err(failed)?,
        }))),
        None => Ok(Json(json!({
            "success": true,
            "timestamp": timestamp(),
            "data": serde_json::to_value(data).map_err(failed)?,
        }))),
    }
}

pub async fn dashboard_action(
    payload: Result<Json<DashboardActionBody>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = payload?;

    match body.action.as_deref().unwrap_or_default() {
        "filter_projects" => {
            let filters = body.filters.unwrap_or_default();
            let projects: Vec<&ProjectInfo> =
                get_all_projects().iter().filter(|p| filters.matches(p)).collect();
            Ok(Json(json!({
                "success": true,
                "data": projects,
                "count": projects.len(),
                "filters": filters,
            })))
        }
        "get_charts_data" => {
            let stats = get_project_stats();
            let all: Vec<&ProjectInfo> = get_all_projects().iter().collect();
            let categories: Vec<ChartPoint> = stats
                .by_category
                .iter()
                .map(|(c, n)| ChartPoint { name: c.as_str(), value: *n })
                .collect();
            let statuses: Vec<ChartPoint> = stats
                .by_status
                .iter()
                .map(|(s, n)| ChartPoint { name: s.as_str(), value: *n })
                .collect();
            Ok(Json(json!({
                "success": true,
                "data": {
                    "categoriesChart": categories,
                    "statusChart": statuses,
                    "technologiesChart": top_technologies(&all, CHART_TECHNOLOGIES),
                }
            })))
        }
        "get_summary" => {
            let stats = get_project_stats();
            let count = |c: Category| stats.by_category[&c];
            Ok(Json(json!({
                "success": true,
                "data": {
                    "totalProjects": stats.total,
                    "categories": stats.by_category.len(),
                    "technologies": stats.technologies_count,
                    "activeProjects": stats.by_status[&ProjectStatus::Active],
                    "highlights": [
                        format!("{} RAG-based projects", count(Category::Rag)),
                        format!("{} LLM projects", count(Category::Llm)),
                        format!("{} Chatbot projects", count(Category::Chatbot)),
                        format!("{} Educational AI projects", count(Category::Educational)),
                    ],
                }
            })))
        }
        _ => Err(ApiError::unknown_action()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_matches_stats() {
        let data = build_dashboard();
        let stats = get_project_stats();
        assert_eq!(data.overview.total_projects, stats.total);
        assert_eq!(
            data.overview.active_projects + data.overview.development_projects,
            stats.total
        );
    }

    #[test]
    fn test_previews_are_capped() {
        let data = build_dashboard();
        assert!(data
            .categories
            .rag
            .projects
            .iter()
            .all(|p| p.technologies.len() <= PREVIEW_LEN));
        assert_eq!(data.categories.rag.count, data.categories.rag.projects.len());
        assert!(data.recent_activity.ready_to_use.len() <= READY_TO_USE_LEN);
        assert!(data.technologies.top.len() <= TOP_TECHNOLOGIES);
        assert_eq!(data.quick_access.api_endpoints.len(), 8);
    }

    #[test]
    fn test_every_section_serializes() {
        for section in SECTIONS {
            let value = section_value(build_dashboard(), section).unwrap();
            assert!(value.is_object(), "{section}");
        }
        let value = section_value(build_dashboard(), "recentActivity").unwrap();
        assert!(value["readyToUse"].is_array());
    }

    #[test]
    fn test_filters() {
        let filters = ProjectFilters {
            category: Some("rag".to_string()),
            technology: Some("PINECONE".to_string()),
            ..Default::default()
        };
        let hits: Vec<_> = get_all_projects().iter().filter(|p| filters.matches(p)).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "chat-website-rag");

        let everything = ProjectFilters {
            search: Some(String::new()),
            ..Default::default()
        };
        assert!(get_all_projects().iter().all(|p| everything.matches(p)));
    }
}
