//! Query Analyzer - intent, entities, keywords, and confidence
//!
//! Produces the full [`QueryAnalysis`] for a raw query, composing synonym
//! expansion and intent-conditioned reformulation. Never fails on string
//! input: the empty query yields `Unknown` intent, empty entity and keyword
//! lists, and 0.5 confidence.

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::debug;

use super::{
    normalize, trim_token, Lexicon, QueryAnalysis, QueryExpander, QueryIntent, QueryReformulator,
};

/// Analyzer for understanding user queries
pub struct QueryAnalyzer {
    lexicon: Arc<Lexicon>,
    expander: QueryExpander,
    reformulator: QueryReformulator,
}

impl QueryAnalyzer {
    /// Create a new analyzer sharing the given lexicon
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            expander: QueryExpander::new(lexicon.clone()),
            reformulator: QueryReformulator::new(),
            lexicon,
        }
    }

    /// Analyze a query into intent, entities, keywords, expansions, and
    /// reformulations
    pub fn analyze(&self, query: &str) -> QueryAnalysis {
        let normalized = normalize(query);

        let intent = self.classify_intent(&normalized);

        // Entity extraction must see the pre-normalization text: the
        // capitalization heuristic cannot fire once the query is lowercased.
        let entities = self.extract_entities(query, &normalized);
        let keywords = self.extract_keywords(&normalized);

        let expanded_terms = self.expander.expand(&normalized);
        let reformulated_queries = self.reformulator.reformulate(&normalized, intent);

        let confidence = Self::calculate_confidence(&normalized, intent, entities.len());

        debug!(
            query,
            intent = ?intent,
            entities = entities.len(),
            keywords = keywords.len(),
            confidence,
            "query analyzed"
        );

        QueryAnalysis {
            original_query: query.to_string(),
            intent,
            entities,
            keywords,
            expanded_terms,
            reformulated_queries,
            confidence,
        }
    }

    /// Classify intent by walking the fixed, ordered pattern table
    fn classify_intent(&self, normalized: &str) -> QueryIntent {
        for (intent, patterns) in self.lexicon.intent_patterns() {
            if patterns.iter().any(|p| p.is_match(normalized)) {
                return *intent;
            }
        }
        QueryIntent::Unknown
    }

    /// Extract entities via the capitalization heuristic on the original
    /// text, plus known technical terms found in the normalized text
    fn extract_entities(&self, original: &str, normalized: &str) -> Vec<String> {
        let mut entities = BTreeSet::new();

        for raw in original.split_whitespace() {
            let token = raw.trim_matches(|c: char| !c.is_alphanumeric());
            if token.is_empty() {
                continue;
            }
            if is_all_uppercase(token) || is_title_case(token) {
                entities.insert(token.to_string());
            }
        }

        // Whole-token matching: a substring check would fire "ai" inside
        // "explain" or "ml" inside "html".
        let tokens: BTreeSet<&str> = normalized.split_whitespace().map(trim_token).collect();
        for (matcher, canonical) in self.lexicon.technical_terms() {
            if tokens.contains(matcher.as_str()) {
                entities.insert(canonical.clone());
            }
        }

        entities.into_iter().collect()
    }

    /// Extract keywords: tokens longer than two characters that are not stop
    /// words, preserving order and duplicates
    fn extract_keywords(&self, normalized: &str) -> Vec<String> {
        normalized
            .split_whitespace()
            .map(trim_token)
            .filter(|t| t.len() > 2 && !self.lexicon.is_stop_word(t))
            .map(str::to_string)
            .collect()
    }

    fn calculate_confidence(normalized: &str, intent: QueryIntent, entity_count: usize) -> f32 {
        let mut confidence = 0.5;

        if intent != QueryIntent::Unknown {
            confidence += 0.2;
        }

        if entity_count > 0 {
            confidence += f32::min(0.2, entity_count as f32 * 0.1);
        }

        if normalized.split_whitespace().count() > 3 {
            confidence += 0.1;
        }

        f32::min(1.0, confidence)
    }
}

/// Equivalent of an "all caps" check: at least one alphabetic character and
/// no lowercase ones
fn is_all_uppercase(token: &str) -> bool {
    token.chars().any(|c| c.is_alphabetic()) && !token.chars().any(|c| c.is_lowercase())
}

/// First alphabetic character uppercase, the rest lowercase
fn is_title_case(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => chars.all(|c| !c.is_uppercase()),
        _ => false,
    }
}
