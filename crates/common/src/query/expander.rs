//! Query Expander - synonym and related-term lookup
//!
//! Broadens retrieval recall by unioning in the related terms of every query
//! token that exactly matches a synonym-table key. Matching is exact token
//! match, never substring: "transformers" does not hit the "transformer" key.

use std::collections::BTreeSet;
use std::sync::Arc;

use super::{trim_token, Lexicon};

/// Expander over the shared synonym table
pub struct QueryExpander {
    lexicon: Arc<Lexicon>,
}

impl QueryExpander {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Expand a normalized query into related terms.
    ///
    /// Returns a deduplicated, sorted list; empty when no token matches.
    pub fn expand(&self, normalized_query: &str) -> Vec<String> {
        let mut expanded = BTreeSet::new();

        for token in normalized_query.split_whitespace().map(trim_token) {
            if let Some(terms) = self.lexicon.synonyms_for(token) {
                expanded.extend(terms.iter().cloned());
            }
        }

        expanded.into_iter().collect()
    }
}
