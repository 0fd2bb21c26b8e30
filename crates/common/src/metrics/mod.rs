//! Metrics and observability utilities
//!
//! Provides pipeline metrics with standardized naming conventions. The host
//! process decides how metrics are exported; the pipeline only records them.

use metrics::{
    counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram, Unit,
};
use std::time::Instant;

/// Metrics prefix for all QueryForge metrics
pub const METRICS_PREFIX: &str = "queryforge";

/// Register all metric descriptions
pub fn register_metrics() {
    // Query understanding metrics
    describe_counter!(
        format!("{}_queries_analyzed_total", METRICS_PREFIX),
        Unit::Count,
        "Total queries analyzed"
    );

    describe_gauge!(
        format!("{}_search_queries_generated", METRICS_PREFIX),
        Unit::Count,
        "Search queries generated for the last analyzed query"
    );

    // Retrieval metrics
    describe_counter!(
        format!("{}_retrieval_requests_total", METRICS_PREFIX),
        Unit::Count,
        "Total retrieval requests by strategy"
    );

    describe_gauge!(
        format!("{}_retrieval_results_count", METRICS_PREFIX),
        Unit::Count,
        "Number of documents returned from fusion"
    );

    describe_counter!(
        format!("{}_retrieval_empty_total", METRICS_PREFIX),
        Unit::Count,
        "Retrievals that produced no relevant context"
    );

    // Language model metrics
    describe_counter!(
        format!("{}_llm_invocations_total", METRICS_PREFIX),
        Unit::Count,
        "Total language model invocation attempts"
    );

    describe_counter!(
        format!("{}_llm_retries_total", METRICS_PREFIX),
        Unit::Count,
        "Total language model retries after throttling"
    );

    // Answer metrics
    describe_counter!(
        format!("{}_answers_total", METRICS_PREFIX),
        Unit::Count,
        "Total answered questions by outcome"
    );

    describe_histogram!(
        format!("{}_answer_duration_seconds", METRICS_PREFIX),
        Unit::Seconds,
        "End-to-end answer latency in seconds"
    );

    tracing::info!("Metrics registered");
}

/// Helper to record end-to-end answer metrics
pub struct AnswerMetrics {
    start: Instant,
    strategy: String,
}

impl AnswerMetrics {
    /// Start tracking an answer request
    pub fn start(strategy: &str) -> Self {
        Self {
            start: Instant::now(),
            strategy: strategy.to_string(),
        }
    }

    /// Record answer completion
    pub fn finish(self, outcome: &str) {
        let duration = self.start.elapsed().as_secs_f64();

        counter!(
            format!("{}_answers_total", METRICS_PREFIX),
            "strategy" => self.strategy.clone(),
            "outcome" => outcome.to_string()
        )
        .increment(1);

        histogram!(
            format!("{}_answer_duration_seconds", METRICS_PREFIX),
            "strategy" => self.strategy
        )
        .record(duration);
    }
}

/// Record the number of documents a fused retrieval produced
pub fn record_retrieval_results(strategy: &str, count: usize) {
    counter!(
        format!("{}_retrieval_requests_total", METRICS_PREFIX),
        "strategy" => strategy.to_string()
    )
    .increment(1);

    gauge!(format!("{}_retrieval_results_count", METRICS_PREFIX)).set(count as f64);

    if count == 0 {
        counter!(format!("{}_retrieval_empty_total", METRICS_PREFIX)).increment(1);
    }
}
