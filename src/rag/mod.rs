// Keyword retrieval over small in-memory knowledge bases
//
// Scoring is plain term overlap: the query is lowercased and split on
// whitespace, and a document scores the fraction of terms that occur as
// substrings of its searchable text.

pub mod demo;
pub mod gseb;

use serde::Serialize;

pub use demo::{DemoDocument, DEMO_KNOWLEDGE_BASE};
pub use gseb::{rag_system_prompt, GsebDocument, GsebFilter, GSEB_KNOWLEDGE_BASE};

/// Anything the keyword scorer can rank.
pub trait Searchable {
    /// Lowercased text the query terms are matched against.
    fn search_text(&self) -> String;
}

/// A document paired with its relevance score.
#[derive(Debug, Clone, Serialize)]
pub struct Scored<T> {
    #[serde(flatten)]
    pub doc: T,
    pub score: f64,
}

/// Fraction of query terms found in `text` (already lowercase).
pub fn term_overlap(terms: &[String], text: &str) -> f64 {
    if terms.is_empty() {
        return 0.0;
    }
    let hits = terms.iter().filter(|t| text.contains(t.as_str())).count();
    hits as f64 / terms.len() as f64
}

pub fn query_terms(query: &str) -> Vec<String> {
    query.to_lowercase().split_whitespace().map(str::to_string).collect()
}

/// Rank `docs` against `query`.
///
/// Highest score first; ties keep input order. The first `top_k` are kept
/// and then zero-score documents are dropped, so fewer than `top_k` may come
/// back.
pub fn score_documents<'a, T, I>(query: &str, docs: I, top_k: usize) -> Vec<Scored<T>>
where
    T: Searchable + Clone + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let terms = query_terms(query);
    let mut scored: Vec<Scored<T>> = docs
        .into_iter()
        .map(|doc| Scored {
            score: term_overlap(&terms, &doc.search_text()),
            doc: doc.clone(),
        })
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(top_k);
    scored.retain(|s| s.score > 0.0);
    scored
}
