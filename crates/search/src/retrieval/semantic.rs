//! Semantic retrieval via vector similarity
//!
//! Thin strategy over the store's own ranking: nearest neighbors by vector
//! distance, in the order the store returns them.

use std::sync::Arc;

use queryforge_common::errors::Result;
use tracing::debug;

use super::{RetrievalSource, RetrievedDocument, VectorStore};

/// Semantic retriever delegating ranking to the vector store
pub struct SemanticRetriever {
    store: Arc<dyn VectorStore>,
}

impl SemanticRetriever {
    /// Create a new semantic retriever
    pub fn new(store: Arc<dyn VectorStore>) -> Self {
        Self { store }
    }

    /// Retrieve the top `k` documents for `query`
    pub async fn retrieve(&self, query: &str, k: usize) -> Result<Vec<RetrievedDocument>> {
        let documents = self.store.similarity_search(query, k).await?;

        debug!(query, count = documents.len(), "semantic retrieval");

        Ok(documents
            .into_iter()
            .map(|d| RetrievedDocument::new(d.content, RetrievalSource::Semantic))
            .collect())
    }
}
