// Project registry
//
// Static catalog of the AI demo projects bundled with the platform. The list
// is fixed at compile time; every function here is a pure read over it.

pub mod catalog;
pub mod configs;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use catalog::PROJECTS;
pub use configs::{llm_config, rag_config, LlmConfig, RagConfig, LLM_CONFIGS, RAG_CONFIGS};

/// Project category. Declaration order is the reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Llm,
    Rag,
    Chatbot,
    Vision,
    Agent,
    Educational,
    Tool,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Llm,
        Category::Rag,
        Category::Chatbot,
        Category::Vision,
        Category::Agent,
        Category::Educational,
        Category::Tool,
    ];

    /// Parse a wire name (exact, lowercase).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Llm => "llm",
            Self::Rag => "rag",
            Self::Chatbot => "chatbot",
            Self::Vision => "vision",
            Self::Agent => "agent",
            Self::Educational => "educational",
            Self::Tool => "tool",
        }
    }
}

/// Lifecycle status of a catalogued project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Development,
    Archived,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::Active,
        ProjectStatus::Development,
        ProjectStatus::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Development => "development",
            Self::Archived => "archived",
        }
    }
}

/// Catalog record for one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub path: &'static str,
    pub technologies: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_endpoint: Option<&'static str>,
    pub features: &'static [&'static str],
    pub status: ProjectStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_file: Option<&'static str>,
    /// Environment names this project needs; empty when it needs none
    pub requires_api_key: &'static [&'static str],
}

impl ProjectInfo {
    /// Case-insensitive substring match over name, description,
    /// technologies and features. `needle` must already be lowercase.
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.technologies.iter().any(|t| t.to_lowercase().contains(needle))
            || self.features.iter().any(|f| f.to_lowercase().contains(needle))
    }
}

/// Aggregate counts over the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStats {
    pub total: usize,
    /// Always contains every category, zero counts included
    pub by_category: BTreeMap<Category, usize>,
    /// Always contains every status, zero counts included
    pub by_status: BTreeMap<ProjectStatus, usize>,
    /// Distinct technologies in first-seen order
    pub technologies: Vec<&'static str>,
    pub technologies_count: usize,
}

/// Usage count for one technology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TechnologyCount {
    pub name: &'static str,
    pub count: usize,
}

pub fn get_all_projects() -> &'static [ProjectInfo] {
    PROJECTS
}

pub fn get_project_by_id(id: &str) -> Option<&'static ProjectInfo> {
    PROJECTS.iter().find(|p| p.id == id)
}

pub fn get_projects_by_category(category: Category) -> Vec<&'static ProjectInfo> {
    PROJECTS.iter().filter(|p| p.category == category).collect()
}

pub fn get_projects_by_status(status: ProjectStatus) -> Vec<&'static ProjectInfo> {
    PROJECTS.iter().filter(|p| p.status == status).collect()
}

/// Projects of `category` with the given id, if any.
pub fn get_project_in_category(id: &str, category: Category) -> Option<&'static ProjectInfo> {
    get_project_by_id(id).filter(|p| p.category == category)
}

/// Case-insensitive search. An empty term matches everything.
pub fn search_projects(term: &str) -> Vec<&'static ProjectInfo> {
    let needle = term.to_lowercase();
    PROJECTS.iter().filter(|p| p.matches(&needle)).collect()
}

pub fn get_project_stats() -> ProjectStats {
    let mut by_category: BTreeMap<Category, usize> =
        Category::ALL.iter().map(|c| (*c, 0)).collect();
    let mut by_status: BTreeMap<ProjectStatus, usize> =
        ProjectStatus::ALL.iter().map(|s| (*s, 0)).collect();
    let mut technologies: Vec<&'static str> = Vec::new();

    for project in PROJECTS {
        *by_category.entry(project.category).or_default() += 1;
        *by_status.entry(project.status).or_default() += 1;
        for tech in project.technologies {
            if !technologies.contains(tech) {
                technologies.push(tech);
            }
        }
    }

    ProjectStats {
        total: PROJECTS.len(),
        by_category,
        by_status,
        technologies_count: technologies.len(),
        technologies,
    }
}

/// Most-used technologies, highest count first. Ties keep first-seen order.
pub fn top_technologies(projects: &[&ProjectInfo], limit: usize) -> Vec<TechnologyCount> {
    let mut counts: Vec<TechnologyCount> = Vec::new();
    for project in projects {
        for tech in project.technologies {
            match counts.iter_mut().find(|c| c.name == *tech) {
                Some(entry) => entry.count += 1,
                None => counts.push(TechnologyCount { name: tech, count: 1 }),
            }
        }
    }

    // sort_by is stable, so equal counts stay in insertion order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}
