//! Query understanding components
//!
//! Turns a raw natural-language question into a structured analysis and an
//! expanded set of alternative search queries:
//! - Intent classification and entity/keyword extraction
//! - Synonym expansion
//! - Intent-conditioned reformulation
//! - Deduplicated multi-query generation

mod analyzer;
mod expander;
mod generator;
mod lexicon;
mod reformulator;

pub use analyzer::QueryAnalyzer;
pub use expander::QueryExpander;
pub use generator::SearchQueryGenerator;
pub use lexicon::Lexicon;
pub use reformulator::QueryReformulator;

use serde::{Deserialize, Serialize};

/// Query intent classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QueryIntent {
    /// What is X? Who is Y?
    Factual,
    /// Compare X and Y
    Comparative,
    /// How to do X?
    Procedural,
    /// Why does X happen?
    Analytical,
    /// Define X
    Definitional,
    /// When did X happen?
    Temporal,
    /// What causes X?
    Causal,
    /// No pattern matched
    Unknown,
}

/// Structured analysis of a query, immutable once produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryAnalysis {
    /// Original query text, exactly as received
    pub original_query: String,

    /// Detected intent (first matching rule in table order wins)
    pub intent: QueryIntent,

    /// Extracted entities; deduplicated, sorted for determinism
    pub entities: Vec<String>,

    /// Keywords in original token order, duplicates possible
    pub keywords: Vec<String>,

    /// Expanded synonym terms; deduplicated, sorted for determinism
    pub expanded_terms: Vec<String>,

    /// Alternative phrasings in template order
    pub reformulated_queries: Vec<String>,

    /// Confidence score, always within [0.0, 1.0]
    pub confidence: f32,
}

/// An ordered, deduplicated set of search queries.
///
/// Deduplication keeps first-seen insertion order so debug traces and test
/// assertions stay deterministic; the original query is always first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuerySet {
    queries: Vec<String>,
}

impl SearchQuerySet {
    /// Create a query set seeded with the original query
    pub fn new(original: impl Into<String>) -> Self {
        Self {
            queries: vec![original.into()],
        }
    }

    /// Append a query unless an identical one was already inserted
    pub fn push(&mut self, query: impl Into<String>) {
        let query = query.into();
        if !self.queries.contains(&query) {
            self.queries.push(query);
        }
    }

    /// The original query this set was seeded with
    pub fn original(&self) -> &str {
        self.queries.first().map(String::as_str).unwrap_or_default()
    }

    /// All queries in insertion order
    pub fn queries(&self) -> &[String] {
        &self.queries
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.queries.iter()
    }

    /// Consume the set, yielding the queries in order
    pub fn into_vec(self) -> Vec<String> {
        self.queries
    }
}

/// Normalize a query for downstream processing: collapse whitespace, replace
/// characters outside word characters / whitespace / `?!.` with spaces, and
/// lowercase.
///
/// Lossy by design. Entity extraction must run on the pre-normalization text
/// because the capitalization heuristic cannot fire after lowercasing.
pub(crate) fn normalize(query: &str) -> String {
    let collapsed = query.split_whitespace().collect::<Vec<_>>().join(" ");

    collapsed
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c.is_whitespace() || matches!(c, '?' | '!' | '.')
            {
                c
            } else {
                ' '
            }
        })
        .collect::<String>()
        .to_lowercase()
}

/// Strip the sentence punctuation the normalizer keeps from a token's edges
pub(crate) fn trim_token(token: &str) -> &str {
    token.trim_matches(|c| matches!(c, '?' | '!' | '.'))
}
