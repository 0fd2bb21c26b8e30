//! QueryForge Search Library
//!
//! Retrieval strategies and fusion over an external vector store:
//! - Semantic search (nearest neighbors via the store's similarity ranking)
//! - Keyword search (substring filtering over a bounded candidate pool)
//! - Hybrid fusion with semantic precedence and content deduplication
//! - Multi-query fan-out over a generated search query set

pub mod retrieval;

pub use retrieval::{
    Document, HybridRetriever, KeywordRetriever, RetrievalResult, RetrievalSource,
    RetrievedDocument, SearchStrategy, SemanticRetriever, VectorStore,
};
