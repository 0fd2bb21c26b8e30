//! End-to-end question answering pipeline
//!
//! Facade wiring the stages together: analyze → generate query set → fused
//! retrieval → grounded synthesis. Front ends call `answer` (or
//! `answer_with` to pick a strategy) and `analyze_and_search` for the
//! debug/introspection view.

use std::sync::Arc;

use queryforge_common::config::AppConfig;
use queryforge_common::errors::Result;
use queryforge_common::metrics::{record_retrieval_results, AnswerMetrics};
use queryforge_common::query::{
    Lexicon, QueryAnalysis, QueryAnalyzer, SearchQueryGenerator, SearchQuerySet,
};
use queryforge_search::{HybridRetriever, RetrievalResult, SearchStrategy, VectorStore};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::llm::LanguageModel;
use crate::retry::RetryPolicy;
use crate::synthesizer::AnswerSynthesizer;

/// Debug/introspection view of query processing, used by front ends to
/// render processing traces
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryInsight {
    /// Full query analysis
    pub analysis: QueryAnalysis,

    /// Generated search queries in retrieval order
    pub search_queries: Vec<String>,
}

/// Question answering pipeline
pub struct QaPipeline {
    config: Arc<AppConfig>,
    analyzer: QueryAnalyzer,
    generator: SearchQueryGenerator,
    retriever: HybridRetriever,
    synthesizer: AnswerSynthesizer,
}

impl QaPipeline {
    /// Create a pipeline over the given collaborators
    pub fn new(
        config: Arc<AppConfig>,
        store: Arc<dyn VectorStore>,
        model: Arc<dyn LanguageModel>,
    ) -> Self {
        let lexicon = Arc::new(Lexicon::new());
        let retriever = HybridRetriever::new(store, &config.retrieval);
        let synthesizer = AnswerSynthesizer::new(model, RetryPolicy::from(&config.retry));

        Self {
            analyzer: QueryAnalyzer::new(lexicon),
            generator: SearchQueryGenerator::new(),
            retriever,
            synthesizer,
            config,
        }
    }

    /// Analyze a query and expose the generated search queries.
    ///
    /// Purely observational; never fails and performs no retrieval.
    pub fn analyze_and_search(&self, query: &str) -> QueryInsight {
        let analysis = self.analyzer.analyze(query);
        let search_queries = self.generator.generate(&analysis).into_vec();

        QueryInsight {
            analysis,
            search_queries,
        }
    }

    /// Answer a question with the full multi-query pipeline
    pub async fn answer(&self, query: &str) -> Result<String> {
        self.answer_with(query, SearchStrategy::Advanced).await
    }

    /// Answer a question using an explicit retrieval strategy
    pub async fn answer_with(&self, query: &str, strategy: SearchStrategy) -> Result<String> {
        let timer = AnswerMetrics::start(strategy.as_str());
        let k = self.config.retrieval.default_k;

        let context = match self.retrieve(query, strategy, k).await {
            Ok(context) => context,
            Err(err) => {
                timer.finish("retrieval_error");
                return Err(err);
            }
        };

        record_retrieval_results(strategy.as_str(), context.len());

        if context.is_empty() {
            info!(query, strategy = strategy.as_str(), "no relevant context retrieved");
        }

        match self.synthesizer.synthesize(query, &context).await {
            Ok(answer) => {
                info!(
                    query,
                    strategy = strategy.as_str(),
                    context_documents = context.len(),
                    "question answered"
                );
                timer.finish("ok");
                Ok(answer)
            }
            Err(err) => {
                timer.finish("synthesis_error");
                Err(err)
            }
        }
    }

    /// Dispatch retrieval on the strategy variant
    async fn retrieve(
        &self,
        query: &str,
        strategy: SearchStrategy,
        k: usize,
    ) -> Result<RetrievalResult> {
        match strategy {
            SearchStrategy::Semantic => self.retriever.retrieve_semantic(query, k).await,
            SearchStrategy::Keyword => self.retriever.retrieve_keyword(query, k).await,
            SearchStrategy::Hybrid => self.retriever.retrieve(query, k).await,
            SearchStrategy::Advanced => {
                let queries = self.generate_queries(query);
                self.retriever.retrieve_set(&queries, k).await
            }
        }
    }

    fn generate_queries(&self, query: &str) -> SearchQuerySet {
        let analysis = self.analyzer.analyze(query);
        self.generator.generate(&analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use queryforge_common::query::QueryIntent;
    use queryforge_common::{AppError, FALLBACK_PHRASE};
    use queryforge_search::Document;
    use std::sync::Mutex;

    /// In-memory store: similarity order is insertion order
    struct InMemoryStore {
        documents: Vec<Document>,
    }

    impl InMemoryStore {
        fn new(contents: &[&str]) -> Self {
            Self {
                documents: contents.iter().copied().map(Document::new).collect(),
            }
        }
    }

    #[async_trait::async_trait]
    impl VectorStore for InMemoryStore {
        async fn similarity_search(&self, _query: &str, limit: usize) -> Result<Vec<Document>> {
            Ok(self.documents.iter().take(limit).cloned().collect())
        }
    }

    /// Model that records prompts and answers with a fixed string
    struct RecordingModel {
        prompts: Mutex<Vec<String>>,
        response: String,
    }

    impl RecordingModel {
        fn new(response: &str) -> Self {
            Self {
                prompts: Mutex::new(Vec::new()),
                response: response.to_string(),
            }
        }
    }

    #[async_trait::async_trait]
    impl LanguageModel for RecordingModel {
        async fn invoke(&self, prompt: &str) -> Result<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok(self.response.clone())
        }
    }

    fn pipeline(store: InMemoryStore, model: Arc<RecordingModel>) -> QaPipeline {
        QaPipeline::new(Arc::new(AppConfig::default()), Arc::new(store), model)
    }

    #[tokio::test]
    async fn test_analyze_and_search_insight() {
        let model = Arc::new(RecordingModel::new("unused"));
        let pipeline = pipeline(InMemoryStore::new(&[]), model);

        let insight = pipeline.analyze_and_search("What is the use of transformers?");

        assert_eq!(insight.analysis.intent, QueryIntent::Factual);
        assert_eq!(insight.search_queries[0], "What is the use of transformers?");
        assert!(insight.search_queries.len() > 1);
    }

    #[tokio::test]
    async fn test_answer_grounds_prompt_in_retrieved_context() {
        let model = Arc::new(RecordingModel::new("Transformers process sequences."));
        let pipeline = pipeline(
            InMemoryStore::new(&[
                "Transformers use attention to process sequences.",
                "FAISS stores embeddings.",
            ]),
            model.clone(),
        );

        let answer = pipeline.answer("What is the use of transformers?").await.unwrap();

        assert_eq!(answer, "Transformers process sequences.");
        let prompts = model.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Transformers use attention to process sequences."));
        assert!(prompts[0].contains(FALLBACK_PHRASE));
    }

    #[tokio::test]
    async fn test_empty_store_still_invokes_model() {
        let model = Arc::new(RecordingModel::new(FALLBACK_PHRASE));
        let pipeline = pipeline(InMemoryStore::new(&[]), model.clone());

        let answer = pipeline.answer("Anything at all?").await.unwrap();

        assert_eq!(answer, FALLBACK_PHRASE);
        let prompts = model.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("No relevant context was retrieved"));
    }

    #[tokio::test]
    async fn test_strategy_dispatch_keyword_filters() {
        let model = Arc::new(RecordingModel::new("ok"));
        let pipeline = pipeline(
            InMemoryStore::new(&[
                "nothing relevant here",
                "the transformers paper changed NLP",
            ]),
            model.clone(),
        );

        pipeline
            .answer_with("transformers", SearchStrategy::Keyword)
            .await
            .unwrap();

        let prompts = model.prompts.lock().unwrap();
        assert!(prompts[0].contains("the transformers paper changed NLP"));
        assert!(!prompts[0].contains("nothing relevant here"));
    }

    #[tokio::test]
    async fn test_retrieval_failure_propagates() {
        struct DownStore;

        #[async_trait::async_trait]
        impl VectorStore for DownStore {
            async fn similarity_search(
                &self,
                _query: &str,
                _limit: usize,
            ) -> Result<Vec<Document>> {
                Err(AppError::RetrievalUnavailable {
                    message: "store offline".into(),
                })
            }
        }

        let model = Arc::new(RecordingModel::new("unused"));
        let pipeline =
            QaPipeline::new(Arc::new(AppConfig::default()), Arc::new(DownStore), model.clone());

        let err = pipeline.answer("query").await.unwrap_err();
        assert!(matches!(err, AppError::RetrievalUnavailable { .. }));
        assert!(model.prompts.lock().unwrap().is_empty());
    }
}
