//! Result fusion with semantic precedence
//!
//! Merges the two strategies' results into one deduplicated list: semantic
//! results first in store order, then keyword results whose content was not
//! already seen, truncated to `k`. Deduplication is keyed by exact content
//! string.

use std::collections::HashSet;

use super::{RetrievalResult, RetrievedDocument};

/// Incremental merge keeping first-seen documents in insertion order
#[derive(Default)]
pub(crate) struct Fuser {
    seen: HashSet<String>,
    documents: Vec<RetrievedDocument>,
}

impl Fuser {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append documents whose content has not been seen yet
    pub(crate) fn extend(&mut self, documents: Vec<RetrievedDocument>) {
        for doc in documents {
            if self.seen.insert(doc.content.clone()) {
                self.documents.push(doc);
            }
        }
    }

    /// Truncate to `k` and produce the final result
    pub(crate) fn finish(mut self, k: usize) -> RetrievalResult {
        self.documents.truncate(k);
        RetrievalResult::new(self.documents)
    }
}

/// Fuse semantic and keyword results with semantic precedence
pub fn fuse(
    semantic: Vec<RetrievedDocument>,
    keyword: Vec<RetrievedDocument>,
    k: usize,
) -> RetrievalResult {
    let mut fuser = Fuser::new();
    fuser.extend(semantic);
    fuser.extend(keyword);
    fuser.finish(k)
}

#[cfg(test)]
mod tests {
    use super::super::RetrievalSource;
    use super::*;

    fn semantic(contents: &[&str]) -> Vec<RetrievedDocument> {
        contents
            .iter()
            .map(|c| RetrievedDocument::new(*c, RetrievalSource::Semantic))
            .collect()
    }

    fn keyword(contents: &[&str]) -> Vec<RetrievedDocument> {
        contents
            .iter()
            .map(|c| RetrievedDocument::new(*c, RetrievalSource::Keyword))
            .collect()
    }

    #[test]
    fn test_semantic_precedence_dedup_and_truncation() {
        let result = fuse(semantic(&["A", "B"]), keyword(&["B", "C"]), 3);

        let contents: Vec<&str> = result.iter().map(|d| d.content.as_str()).collect();
        assert_eq!(contents, vec!["A", "B", "C"]);

        // The overlapping document keeps its semantic provenance
        assert_eq!(result.documents()[1].source, RetrievalSource::Semantic);
        assert_eq!(result.documents()[2].source, RetrievalSource::Keyword);
    }

    #[test]
    fn test_truncates_to_k() {
        let result = fuse(semantic(&["A", "B", "C"]), keyword(&["D", "E"]), 2);

        let contents: Vec<&str> = result.iter().map(|d| d.content.as_str()).collect();
        assert_eq!(contents, vec!["A", "B"]);
    }

    #[test]
    fn test_no_duplicate_contents() {
        let result = fuse(
            semantic(&["A", "A", "B"]),
            keyword(&["B", "A", "C", "C"]),
            10,
        );

        let contents: Vec<&str> = result.iter().map(|d| d.content.as_str()).collect();
        assert_eq!(contents, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_empty_inputs_yield_explicit_empty_state() {
        let result = fuse(vec![], vec![], 3);
        assert!(result.is_empty());
    }
}
