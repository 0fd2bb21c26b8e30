//! Keyword retrieval via substring filtering
//!
//! The store has no lexical index, so this strategy fetches a bounded
//! candidate pool with a neutral probe query and filters it to documents
//! whose content contains the query as a case-insensitive substring.

use std::sync::Arc;

use queryforge_common::config::RetrievalConfig;
use queryforge_common::errors::Result;
use tracing::debug;

use super::{RetrievalSource, RetrievedDocument, VectorStore};

/// Keyword retriever filtering a candidate pool from the vector store
pub struct KeywordRetriever {
    store: Arc<dyn VectorStore>,

    /// Neutral probe string used to fetch the pool
    probe: String,

    /// Candidate pool size
    pool_size: usize,
}

impl KeywordRetriever {
    /// Create a new keyword retriever from retrieval config
    pub fn new(store: Arc<dyn VectorStore>, config: &RetrievalConfig) -> Self {
        Self {
            store,
            probe: config.keyword_probe.clone(),
            pool_size: config.keyword_pool_size,
        }
    }

    /// Retrieve up to `k` documents containing `query` as a substring
    pub async fn retrieve(&self, query: &str, k: usize) -> Result<Vec<RetrievedDocument>> {
        let pool = self
            .store
            .similarity_search(&self.probe, self.pool_size)
            .await?;

        let query_lower = query.to_lowercase();
        let matches: Vec<RetrievedDocument> = pool
            .into_iter()
            .filter(|d| d.content.to_lowercase().contains(&query_lower))
            .take(k)
            .map(|d| RetrievedDocument::new(d.content, RetrievalSource::Keyword))
            .collect();

        debug!(
            query,
            pool = self.pool_size,
            count = matches.len(),
            "keyword retrieval"
        );

        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::StaticStore;
    use super::*;

    fn retriever(contents: &[&str]) -> KeywordRetriever {
        KeywordRetriever::new(
            Arc::new(StaticStore::new(contents.iter().copied())),
            &RetrievalConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_case_insensitive_substring_match() {
        let retriever = retriever(&[
            "The RAG system answers questions.",
            "Embeddings power semantic search.",
            "A rag system needs a retriever.",
        ]);

        let docs = retriever.retrieve("RAG system", 5).await.unwrap();

        assert_eq!(docs.len(), 2);
        assert!(docs.iter().all(|d| d.source == RetrievalSource::Keyword));
    }

    #[tokio::test]
    async fn test_no_match_yields_empty() {
        let retriever = retriever(&["Nothing relevant in here."]);

        let docs = retriever.retrieve("transformers", 5).await.unwrap();
        assert!(docs.is_empty());
    }

    #[tokio::test]
    async fn test_truncates_to_k() {
        let retriever = retriever(&["match one", "match two", "match three"]);

        let docs = retriever.retrieve("match", 2).await.unwrap();
        assert_eq!(docs.len(), 2);
    }
}
