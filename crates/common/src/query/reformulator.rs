//! Query Reformulator - intent-conditioned alternate phrasings
//!
//! Applies a fixed template order per intent, then two universal
//! reformulations last. Output is never empty.

use super::QueryIntent;

/// Reformulator producing alternate query phrasings
#[derive(Default)]
pub struct QueryReformulator;

impl QueryReformulator {
    pub fn new() -> Self {
        Self
    }

    /// Generate alternate phrasings for a normalized query
    pub fn reformulate(&self, normalized_query: &str, intent: QueryIntent) -> Vec<String> {
        let q = normalized_query;
        let mut reformulations = Vec::new();

        match intent {
            QueryIntent::Factual => {
                if !q.starts_with("explain") {
                    reformulations.push(format!("explain {q}"));
                }
                if !q.starts_with("describe") {
                    reformulations.push(format!("describe {q}"));
                }
            }
            QueryIntent::Procedural => {
                reformulations.push(format!("step by step {q}"));
                reformulations.push(format!("process of {q}"));
            }
            QueryIntent::Comparative => {
                reformulations.push(format!("analysis of {q}"));
                reformulations.push(format!("pros and cons of {q}"));
            }
            _ => {}
        }

        // Universal reformulations, always appended last
        reformulations.push(format!("information about {q}"));
        reformulations.push(format!("details on {q}"));

        reformulations
    }
}
