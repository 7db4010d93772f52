// Per-project model and retrieval settings for the LLM and RAG demos

use serde::ser::{Serialize, Serializer};

/// Local model settings for an LLM project.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmConfig {
    pub model_name: &'static str,
    pub model_path: &'static str,
    pub max_tokens: u32,
    pub temperature: f32,
    pub supported_styles: &'static [&'static str],
}

impl LlmConfig {
    pub fn supports_style(&self, style: &str) -> bool {
        self.supported_styles.contains(&style)
    }
}

/// Retrieval stack description for a RAG project.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RagConfig {
    pub vector_store: &'static str,
    pub embeddings: &'static str,
    pub llm: &'static str,
    pub features: &'static [&'static str],
    pub required_env: &'static [&'static str],
}

/// Ordered id → config table that serializes as a JSON object in
/// declaration order.
#[derive(Debug)]
pub struct ConfigTable<T: 'static>(&'static [(&'static str, T)]);

impl<T> ConfigTable<T> {
    pub fn get(&self, id: &str) -> Option<&'static T> {
        self.0.iter().find(|(key, _)| *key == id).map(|(_, cfg)| cfg)
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.0.iter().map(|(key, _)| *key).collect()
    }
}

impl<T: Serialize> Serialize for ConfigTable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(key, cfg)| (*key, cfg)))
    }
}

pub static LLM_CONFIGS: ConfigTable<LlmConfig> = ConfigTable(&[(
    "blog-generation-llama2",
    LlmConfig {
        model_name: "llama-2-7b-chat",
        model_path: "models/llama-2-7b-chat.ggmlv3.q8_0.bin",
        max_tokens: 256,
        temperature: 0.01,
        supported_styles: &["Researchers", "Data Scientist", "Common People"],
    },
)]);

pub static RAG_CONFIGS: ConfigTable<RagConfig> = ConfigTable(&[
    (
        "chat-website-rag",
        RagConfig {
            vector_store: "Pinecone",
            embeddings: "OpenAI",
            llm: "ChatOpenAI",
            features: &["website_scraping", "history_aware_retrieval", "conversational_chain"],
            required_env: &["OPENAI_API_KEY", "PINECONE_API_KEY", "PINECONE_ENV", "PINECONE_INDEX"],
        },
    ),
    (
        "ai-tutor-eduementor",
        RagConfig {
            vector_store: "OpenAI Assistants",
            embeddings: "OpenAI",
            llm: "OpenAI Assistants API",
            features: &["pdf_upload", "file_management", "chat_history", "rag_qa"],
            required_env: &["OPENAI_API_KEY"],
        },
    ),
    (
        "multi-pdf-chat",
        RagConfig {
            vector_store: "FAISS",
            embeddings: "Google Generative AI",
            llm: "Google Gemini Pro",
            features: &["multi_pdf_upload", "similarity_search", "qa_chain"],
            required_env: &["GOOGLE_API_KEY"],
        },
    ),
    (
        "rag-tools-tutorials",
        RagConfig {
            vector_store: "Various",
            embeddings: "Various",
            llm: "Various",
            features: &["tutorials", "examples", "educational"],
            required_env: &[],
        },
    ),
]);

pub fn llm_config(project_id: &str) -> Option<&'static LlmConfig> {
    LLM_CONFIGS.get(project_id)
}

pub fn rag_config(project_id: &str) -> Option<&'static RagConfig> {
    RAG_CONFIGS.get(project_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{get_project_by_id, Category};

    #[test]
    fn test_config_ids_point_at_matching_projects() {
        for id in LLM_CONFIGS.ids() {
            assert_eq!(get_project_by_id(id).unwrap().category, Category::Llm);
        }
        for id in RAG_CONFIGS.ids() {
            assert_eq!(get_project_by_id(id).unwrap().category, Category::Rag);
        }
    }

    #[test]
    fn test_table_serializes_in_declaration_order() {
        let json = serde_json::to_string(&RAG_CONFIGS).unwrap();
        let first = json.find("chat-website-rag").unwrap();
        let last = json.find("rag-tools-tutorials").unwrap();
        assert!(first < last);
        assert!(json.contains("\"requiredEnv\":[]"));
    }

    #[test]
    fn test_blog_styles() {
        let cfg = llm_config("blog-generation-llama2").unwrap();
        assert!(cfg.supports_style("Data Scientist"));
        assert!(!cfg.supports_style("data scientist"));
        assert!(llm_config("chat-website-rag").is_none());
    }
}
