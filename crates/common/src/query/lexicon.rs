//! Shared read-only lookup tables for query understanding
//!
//! The intent-pattern table, synonym dictionary, stop-word set, and known
//! technical terms are process-wide configuration: constructed once at
//! startup, shared by reference, never mutated at request time.

use regex_lite::Regex;
use std::collections::{HashMap, HashSet};
use tracing::warn;

use super::QueryIntent;

/// Immutable lexicon shared by the query-understanding components
pub struct Lexicon {
    /// Ordered intent table. Order matters: several intents' patterns overlap
    /// ("why" vs "how"), and the first matching intent wins.
    intent_patterns: Vec<(QueryIntent, Vec<Regex>)>,

    /// Synonym dictionary for expansion (lowercase keys)
    synonyms: HashMap<String, Vec<String>>,

    /// Stop words filtered out of keyword extraction
    stop_words: HashSet<String>,

    /// Known technical acronyms/terms, stored as (lowercase match, canonical form)
    technical_terms: Vec<(String, String)>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self {
            intent_patterns: Self::load_intent_patterns(),
            synonyms: Self::load_synonyms(),
            stop_words: Self::load_stop_words(),
            technical_terms: Self::load_technical_terms(),
        }
    }

    /// Ordered (intent, patterns) table for classification
    pub fn intent_patterns(&self) -> &[(QueryIntent, Vec<Regex>)] {
        &self.intent_patterns
    }

    /// Synonym terms for an exact lowercase token, if any
    pub fn synonyms_for(&self, token: &str) -> Option<&[String]> {
        self.synonyms.get(token).map(Vec::as_slice)
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    /// Known technical terms as (lowercase match, canonical form) pairs
    pub fn technical_terms(&self) -> &[(String, String)] {
        &self.technical_terms
    }

    fn load_intent_patterns() -> Vec<(QueryIntent, Vec<Regex>)> {
        let table: &[(QueryIntent, &[&str])] = &[
            (
                QueryIntent::Factual,
                &[
                    "what is", "what are", "who is", "who are", "which is", "which are",
                    "where is", "where are",
                ],
            ),
            (
                QueryIntent::Comparative,
                &[
                    "compare",
                    "difference",
                    "versus",
                    "vs",
                    "better than",
                    "worse than",
                    "advantage",
                    "disadvantage",
                ],
            ),
            (
                QueryIntent::Procedural,
                &[
                    "how to", "how do", "how can", "how does", "steps to", "process of",
                    "method to",
                ],
            ),
            (
                QueryIntent::Analytical,
                &["why", "explain", "analyze", "reason for", "cause of", "purpose of"],
            ),
            (
                QueryIntent::Definitional,
                &["define", "definition", "meaning of", "what does.*mean"],
            ),
            (
                QueryIntent::Temporal,
                &["when", "time", "date", "history", "timeline"],
            ),
            (
                QueryIntent::Causal,
                &["causes", "results in", "leads to", "because of"],
            ),
        ];

        table
            .iter()
            .map(|(intent, patterns)| {
                // The table is static, so a compile failure is a programming
                // error; it must never pass unnoticed.
                let compiled = patterns
                    .iter()
                    .filter_map(|p| match Regex::new(p) {
                        Ok(re) => Some(re),
                        Err(err) => {
                            warn!(pattern = *p, %err, "intent pattern failed to compile");
                            None
                        }
                    })
                    .collect();
                (*intent, compiled)
            })
            .collect()
    }

    fn load_synonyms() -> HashMap<String, Vec<String>> {
        let entries: &[(&str, &[&str])] = &[
            (
                "transformer",
                &["transformer model", "attention mechanism", "self-attention", "BERT", "GPT"],
            ),
            (
                "rag",
                &["retrieval augmented generation", "retrieval generation", "document retrieval"],
            ),
            (
                "machine learning",
                &["ML", "artificial intelligence", "AI", "deep learning"],
            ),
            (
                "neural network",
                &["neural net", "deep learning model", "AI model"],
            ),
            ("algorithm", &["method", "technique", "approach", "procedure"]),
            ("data", &["information", "dataset", "records", "facts"]),
            ("model", &["system", "framework", "architecture", "approach"]),
            ("training", &["learning", "optimization", "fitting", "education"]),
            (
                "performance",
                &["accuracy", "efficiency", "effectiveness", "quality"],
            ),
            (
                "optimization",
                &["improvement", "enhancement", "tuning", "refinement"],
            ),
        ];

        entries
            .iter()
            .map(|(key, values)| {
                (
                    (*key).to_string(),
                    values.iter().map(|v| (*v).to_string()).collect(),
                )
            })
            .collect()
    }

    fn load_stop_words() -> HashSet<String> {
        [
            "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with",
            "by", "is", "are", "was", "were", "be", "been", "have", "has", "had", "do", "does",
            "did", "will", "would", "could", "should", "may", "might", "can", "this", "that",
            "these", "those", "what",
        ]
        .into_iter()
        .map(str::to_string)
        .collect()
    }

    fn load_technical_terms() -> Vec<(String, String)> {
        [
            ("transformer", "transformer"),
            ("rag", "RAG"),
            ("bert", "BERT"),
            ("gpt", "GPT"),
            ("llm", "LLM"),
            ("nlp", "NLP"),
            ("ml", "ML"),
            ("ai", "AI"),
        ]
        .into_iter()
        .map(|(m, c)| (m.to_string(), c.to_string()))
        .collect()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_table_order_is_fixed() {
        let lexicon = Lexicon::new();
        let order: Vec<QueryIntent> = lexicon
            .intent_patterns()
            .iter()
            .map(|(intent, _)| *intent)
            .collect();

        assert_eq!(
            order,
            vec![
                QueryIntent::Factual,
                QueryIntent::Comparative,
                QueryIntent::Procedural,
                QueryIntent::Analytical,
                QueryIntent::Definitional,
                QueryIntent::Temporal,
                QueryIntent::Causal,
            ]
        );
    }

    #[test]
    fn test_every_intent_pattern_compiles() {
        let lexicon = Lexicon::new();
        let counts: Vec<usize> = lexicon
            .intent_patterns()
            .iter()
            .map(|(_, patterns)| patterns.len())
            .collect();

        // One count per intent, matching the static table exactly; a dropped
        // pattern would show up as a shorter list.
        assert_eq!(counts, vec![8, 8, 7, 6, 4, 5, 4]);
    }

    #[test]
    fn test_synonym_lookup_is_exact() {
        let lexicon = Lexicon::new();
        assert!(lexicon.synonyms_for("transformer").is_some());
        assert!(lexicon.synonyms_for("transformers").is_none());
    }

    #[test]
    fn test_stop_words() {
        let lexicon = Lexicon::new();
        assert!(lexicon.is_stop_word("the"));
        assert!(lexicon.is_stop_word("of"));
        assert!(lexicon.is_stop_word("what"));
        assert!(!lexicon.is_stop_word("use"));
    }
}
