//! Hybrid retrieval combining the semantic and keyword strategies
//!
//! Runs both strategies concurrently and merges with semantic precedence.
//! Also provides the multi-query fan-out used by advanced search: one
//! semantic pass per generated query in set order, then one keyword pass for
//! the original query, all merged through the same deduplicating fuser.

use std::sync::Arc;

use queryforge_common::config::RetrievalConfig;
use queryforge_common::errors::Result;
use queryforge_common::query::SearchQuerySet;
use tracing::debug;

use super::fusion::Fuser;
use super::{fuse, KeywordRetriever, RetrievalResult, SemanticRetriever, VectorStore};

/// Hybrid retriever over both strategies
pub struct HybridRetriever {
    semantic: SemanticRetriever,
    keyword: KeywordRetriever,
}

impl HybridRetriever {
    /// Create a new hybrid retriever
    pub fn new(store: Arc<dyn VectorStore>, config: &RetrievalConfig) -> Self {
        Self {
            semantic: SemanticRetriever::new(store.clone()),
            keyword: KeywordRetriever::new(store, config),
        }
    }

    /// Single-strategy semantic retrieval, deduplicated and bounded by `k`
    pub async fn retrieve_semantic(&self, query: &str, k: usize) -> Result<RetrievalResult> {
        let docs = self.semantic.retrieve(query, k).await?;
        Ok(fuse(docs, Vec::new(), k))
    }

    /// Single-strategy keyword retrieval, deduplicated and bounded by `k`
    pub async fn retrieve_keyword(&self, query: &str, k: usize) -> Result<RetrievalResult> {
        let docs = self.keyword.retrieve(query, k).await?;
        Ok(fuse(Vec::new(), docs, k))
    }

    /// Fused single-query retrieval.
    ///
    /// The two strategy calls run concurrently; the merge applies
    /// semantic-then-keyword precedence regardless of which returns first.
    pub async fn retrieve(&self, query: &str, k: usize) -> Result<RetrievalResult> {
        let (semantic, keyword) = tokio::join!(
            self.semantic.retrieve(query, k),
            self.keyword.retrieve(query, k)
        );

        let result = fuse(semantic?, keyword?, k);
        debug!(query, count = result.len(), "hybrid retrieval fused");
        Ok(result)
    }

    /// Multi-query fused retrieval over a generated query set.
    ///
    /// Semantic passes run per query in set order so earlier (higher
    /// priority) queries claim documents first; the keyword pass for the
    /// original query comes last, preserving semantic precedence.
    pub async fn retrieve_set(&self, queries: &SearchQuerySet, k: usize) -> Result<RetrievalResult> {
        let mut fuser = Fuser::new();

        let semantic_batches = futures::future::try_join_all(
            queries.iter().map(|query| self.semantic.retrieve(query, k)),
        )
        .await?;

        for batch in semantic_batches {
            fuser.extend(batch);
        }

        if !queries.is_empty() {
            let keyword_docs = self.keyword.retrieve(queries.original(), k).await?;
            fuser.extend(keyword_docs);
        }

        let result = fuser.finish(k);
        debug!(
            queries = queries.len(),
            count = result.len(),
            "multi-query retrieval fused"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{FailingStore, StaticStore};
    use super::super::RetrievalSource;
    use super::*;
    use queryforge_common::AppError;

    fn hybrid(contents: &[&str]) -> HybridRetriever {
        HybridRetriever::new(
            Arc::new(StaticStore::new(contents.iter().copied())),
            &RetrievalConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_hybrid_merges_with_semantic_precedence() {
        // Store order: semantic returns the first k, keyword filters the pool
        let retriever = hybrid(&[
            "alpha facts",
            "beta notes",
            "keyword alpha appendix",
            "keyword beta appendix",
        ]);

        let result = retriever.retrieve("keyword", 3).await.unwrap();

        let contents: Vec<&str> = result.iter().map(|d| d.content.as_str()).collect();
        // Semantic: first 3 docs. Keyword matches both "keyword ..." docs but
        // "keyword alpha appendix" was already claimed semantically.
        assert_eq!(
            contents,
            vec!["alpha facts", "beta notes", "keyword alpha appendix"]
        );
        assert_eq!(result.documents()[2].source, RetrievalSource::Semantic);
    }

    #[tokio::test]
    async fn test_empty_store_yields_empty_state_not_error() {
        let retriever = hybrid(&[]);

        let result = retriever.retrieve("anything", 3).await.unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_is_terminal() {
        let retriever =
            HybridRetriever::new(Arc::new(FailingStore), &RetrievalConfig::default());

        let err = retriever.retrieve("anything", 3).await.unwrap_err();
        assert!(matches!(err, AppError::RetrievalUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_multi_query_set_deduplicates() {
        let retriever = hybrid(&["shared document", "second document"]);

        let mut queries = SearchQuerySet::new("shared");
        queries.push("explain shared");
        queries.push("details on shared");

        let result = retriever.retrieve_set(&queries, 5).await.unwrap();

        // Every semantic pass returns the same two documents; the fuser keeps
        // one copy of each, and the keyword pass finds no unseen content.
        let contents: Vec<&str> = result.iter().map(|d| d.content.as_str()).collect();
        assert_eq!(contents, vec!["shared document", "second document"]);
    }

    #[tokio::test]
    async fn test_multi_query_truncates_to_k() {
        let retriever = hybrid(&["one", "two", "three", "four"]);

        let mut queries = SearchQuerySet::new("one");
        queries.push("two");

        let result = retriever.retrieve_set(&queries, 3).await.unwrap();
        assert_eq!(result.len(), 3);
    }
}
