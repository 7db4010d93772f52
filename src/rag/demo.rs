// Five-document knowledge base behind the RAG project demos

use serde::Serialize;

use super::Searchable;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoDocument {
    pub id: u32,
    pub topic: &'static str,
    pub content: &'static str,
    pub category: &'static str,
}

impl Searchable for DemoDocument {
    fn search_text(&self) -> String {
        format!("{} {} {}", self.topic, self.content, self.category).to_lowercase()
    }
}

pub static DEMO_KNOWLEDGE_BASE: &[DemoDocument] = &[
    DemoDocument {
        id: 1,
        topic: "Machine Learning",
        content: "Machine learning is a subset of artificial intelligence that enables systems to learn and improve from experience without being explicitly programmed.",
        category: "AI/ML",
    },
    DemoDocument {
        id: 2,
        topic: "RAG",
        content: "Retrieval-Augmented Generation (RAG) is an AI framework that combines information retrieval with text generation to provide more accurate and contextual responses.",
        category: "NLP",
    },
    DemoDocument {
        id: 3,
        topic: "Vector Databases",
        content: "Vector databases store data as high-dimensional vectors, enabling efficient similarity search and retrieval for AI applications like RAG systems.",
        category: "Database",
    },
    DemoDocument {
        id: 4,
        topic: "LangChain",
        content: "LangChain is a framework for developing applications powered by language models, providing tools for chains, agents, and retrieval systems.",
        category: "Framework",
    },
    DemoDocument {
        id: 5,
        topic: "Embeddings",
        content: "Embeddings are numerical representations of text that capture semantic meaning, allowing AI systems to understand and compare text similarity.",
        category: "NLP",
    },
];

/// System prompt that grounds an answer in the retrieved passages.
pub fn grounded_system_prompt(docs: &[&DemoDocument]) -> String {
    let context = docs
        .iter()
        .map(|d| d.content)
        .collect::<Vec<_>>()
        .join("\n\n");
    format!(
        "You are a helpful assistant. Answer questions based on the following context:\n\n{context}\n\nIf the context doesn't contain relevant information, say so."
    )
}
