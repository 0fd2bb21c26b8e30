//! Search Query Generator - merges analysis outputs into one query set
//!
//! Union of the original query, reformulations, expanded-term variants, and
//! entity-augmented variants, deduplicated on insert. The original query is
//! always the first element; dedup preserves first-seen order so traces stay
//! deterministic.

use tracing::debug;

use super::{QueryAnalysis, SearchQuerySet};

/// Generator producing the multi-query retrieval set
#[derive(Default)]
pub struct SearchQueryGenerator;

impl SearchQueryGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Build the deduplicated query set for an analysis
    pub fn generate(&self, analysis: &QueryAnalysis) -> SearchQuerySet {
        let original = &analysis.original_query;
        let mut set = SearchQuerySet::new(original.clone());

        for reformulation in &analysis.reformulated_queries {
            set.push(reformulation.clone());
        }

        for term in &analysis.expanded_terms {
            set.push(format!("{original} {term}"));
        }

        for entity in &analysis.entities {
            set.push(format!("{entity} {original}"));
        }

        debug!(original = %original, count = set.len(), "search query set generated");

        set
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Lexicon, QueryAnalyzer};
    use super::*;
    use std::sync::Arc;

    fn generate(query: &str) -> SearchQuerySet {
        let analyzer = QueryAnalyzer::new(Arc::new(Lexicon::new()));
        SearchQueryGenerator::new().generate(&analyzer.analyze(query))
    }

    #[test]
    fn test_original_query_is_first() {
        let set = generate("What is the use of transformers?");
        assert_eq!(set.original(), "What is the use of transformers?");
        assert_eq!(set.queries()[0], "What is the use of transformers?");
    }

    #[test]
    fn test_no_duplicates() {
        let set = generate("Compare BERT and GPT models");
        let queries = set.queries();

        for (i, q) in queries.iter().enumerate() {
            assert!(
                !queries[i + 1..].contains(q),
                "duplicate query in set: {q}"
            );
        }
    }

    #[test]
    fn test_insertion_order_groups() {
        let analysis = QueryAnalyzer::new(Arc::new(Lexicon::new()))
            .analyze("What is a transformer model?");
        let set = SearchQueryGenerator::new().generate(&analysis);
        let queries = set.queries();

        // Original first, then the factual reformulations
        assert_eq!(queries[0], "What is a transformer model?");
        assert_eq!(queries[1], "explain what is a transformer model?");
        assert_eq!(queries[2], "describe what is a transformer model?");

        // Expanded-term variants follow the reformulations
        let first_expansion = queries
            .iter()
            .position(|q| q.starts_with("What is a transformer model? "))
            .unwrap();
        let first_entity = queries
            .iter()
            .position(|q| q.ends_with(" What is a transformer model?"))
            .unwrap();
        assert!(first_expansion < first_entity);
    }

    #[test]
    fn test_entity_variants_present() {
        let set = generate("Compare BERT and GPT models");
        assert!(set
            .queries()
            .contains(&"BERT Compare BERT and GPT models".to_string()));
        assert!(set
            .queries()
            .contains(&"GPT Compare BERT and GPT models".to_string()));
    }
}
