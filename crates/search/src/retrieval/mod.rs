//! Multi-strategy retrieval system
//!
//! Provides two retrieval strategies over an external vector store, plus
//! fusion:
//! - Semantic search (similarity ranking delegated to the store)
//! - Keyword search (case-insensitive substring match over a candidate pool)
//! - Hybrid search (semantic-precedence merge with content deduplication)

mod fusion;
mod hybrid;
mod keyword;
mod semantic;

pub use fusion::fuse;
pub use hybrid::HybridRetriever;
pub use keyword::KeywordRetriever;
pub use semantic::SemanticRetriever;

use queryforge_common::errors::Result;
use serde::{Deserialize, Serialize};

/// A document as returned by the vector store collaborator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    /// Document content
    pub content: String,
}

impl Document {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Which retrieval strategy produced a document
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RetrievalSource {
    /// Nearest neighbors by vector distance
    Semantic,
    /// Substring match over the candidate pool
    Keyword,
}

/// A retrieved document tagged with its provenance.
///
/// Identity for deduplication is exact content-string equality.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RetrievedDocument {
    /// Document content
    pub content: String,

    /// Strategy that retrieved this document
    pub source: RetrievalSource,
}

impl RetrievedDocument {
    pub fn new(content: impl Into<String>, source: RetrievalSource) -> Self {
        Self {
            content: content.into(),
            source,
        }
    }
}

/// Ordered retrieval output with no duplicate contents, length bounded by the
/// requested `k`.
///
/// An empty result is an explicit "no relevant context" state, distinct from
/// a retrieval error; callers must not feed it silently into the language
/// model without the no-context instruction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RetrievalResult {
    documents: Vec<RetrievedDocument>,
}

impl RetrievalResult {
    pub fn new(documents: Vec<RetrievedDocument>) -> Self {
        Self { documents }
    }

    /// The explicit no-relevant-context state
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn documents(&self) -> &[RetrievedDocument] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RetrievedDocument> {
        self.documents.iter()
    }
}

/// Search strategy selection.
///
/// A closed variant dispatched through a single `match`, so an invalid
/// strategy is a compile error rather than a runtime string branch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// Semantic similarity only
    Semantic,
    /// Keyword filtering only
    Keyword,
    /// Single-query fusion of both strategies
    Hybrid,
    /// Multi-query fan-out over the generated query set
    Advanced,
}

impl SearchStrategy {
    /// Label used for metrics and logging
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchStrategy::Semantic => "semantic",
            SearchStrategy::Keyword => "keyword",
            SearchStrategy::Hybrid => "hybrid",
            SearchStrategy::Advanced => "advanced",
        }
    }
}

/// Contract the pipeline requires from a vector store.
///
/// Results are assumed ordered by descending relevance; no further ranking is
/// done here. Store failures surface as `RetrievalUnavailable` and are not
/// retried by this pipeline.
#[async_trait::async_trait]
pub trait VectorStore: Send + Sync {
    /// Return up to `limit` documents most similar to `query`
    async fn similarity_search(&self, query: &str, limit: usize) -> Result<Vec<Document>>;
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// In-memory store: similarity order is insertion order, which keeps
    /// retrieval tests deterministic.
    pub struct StaticStore {
        documents: Vec<Document>,
    }

    impl StaticStore {
        pub fn new<I, S>(contents: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            Self {
                documents: contents.into_iter().map(Document::new).collect(),
            }
        }
    }

    #[async_trait::async_trait]
    impl VectorStore for StaticStore {
        async fn similarity_search(&self, _query: &str, limit: usize) -> Result<Vec<Document>> {
            Ok(self.documents.iter().take(limit).cloned().collect())
        }
    }

    /// Store whose every call fails, for unavailability paths
    pub struct FailingStore;

    #[async_trait::async_trait]
    impl VectorStore for FailingStore {
        async fn similarity_search(&self, _query: &str, _limit: usize) -> Result<Vec<Document>> {
            Err(queryforge_common::AppError::RetrievalUnavailable {
                message: "connection refused".into(),
            })
        }
    }
}
