//! Integration tests for scorecard.
//!
//! These tests drive the document store, orchestrator, and reporter
//! together over real document JSON, without an HTTP server in the way.

use scorecard::{
    Config, JsonDocumentStore, Orchestrator, RecordSource, Reporter, TerminalReporter,
};
use scorecard_core::ERROR_SCORE;

/// A document exercising all three record kinds: partial sums for an
/// error statistic, contingency counts for a skill statistic, and
/// pre-computed values, plus one cell with an empty side.
const DOCUMENT: &str = r#"{
    "id": "ops-vs-retro",
    "title": "ops vs. retro-v2, 2026-07",
    "cells": [
        {
            "label": "Eastern US, 24h",
            "statistic": "Bias (Model - Obs)",
            "control": {"kind": "partial-sums", "rows": [
                {"square_diff_sum": 0.0, "count_sum": 1.0, "obs_model_diff_sum": 0.0, "model_sum": 0.0, "obs_sum": 0.0, "abs_sum": 0.0, "timestamp": 1000},
                {"square_diff_sum": 0.0, "count_sum": 1.0, "obs_model_diff_sum": 0.0, "model_sum": 1.1, "obs_sum": 0.0, "abs_sum": 1.1, "timestamp": 2000},
                {"square_diff_sum": 0.0, "count_sum": 1.0, "obs_model_diff_sum": 0.0, "model_sum": 2.2, "obs_sum": 0.0, "abs_sum": 2.2, "timestamp": 3000},
                {"square_diff_sum": 0.0, "count_sum": 1.0, "obs_model_diff_sum": 0.0, "model_sum": 3.3, "obs_sum": 0.0, "abs_sum": 3.3, "timestamp": 4000},
                {"square_diff_sum": 0.0, "count_sum": 1.0, "obs_model_diff_sum": 0.0, "model_sum": 4.4, "obs_sum": 0.0, "abs_sum": 4.4, "timestamp": 5000},
                {"square_diff_sum": 0.0, "count_sum": 1.0, "obs_model_diff_sum": 0.0, "model_sum": 5.5, "obs_sum": 0.0, "abs_sum": 5.5, "timestamp": 6000},
                {"square_diff_sum": 0.0, "count_sum": 1.0, "obs_model_diff_sum": 0.0, "model_sum": 6.6, "obs_sum": 0.0, "abs_sum": 6.6, "timestamp": 7000},
                {"square_diff_sum": 0.0, "count_sum": 1.0, "obs_model_diff_sum": 0.0, "model_sum": 7.7, "obs_sum": 0.0, "abs_sum": 7.7, "timestamp": 8000},
                {"square_diff_sum": 0.0, "count_sum": 1.0, "obs_model_diff_sum": 0.0, "model_sum": 8.8, "obs_sum": 0.0, "abs_sum": 8.8, "timestamp": 9000},
                {"square_diff_sum": 0.0, "count_sum": 1.0, "obs_model_diff_sum": 0.0, "model_sum": 9.9, "obs_sum": 0.0, "abs_sum": 9.9, "timestamp": 10000}
            ]},
            "experimental": {"kind": "partial-sums", "rows": [
                {"square_diff_sum": 0.0, "count_sum": 1.0, "obs_model_diff_sum": 0.0, "model_sum": 0.0, "obs_sum": 0.0, "abs_sum": 0.0, "timestamp": 1000},
                {"square_diff_sum": 0.0, "count_sum": 1.0, "obs_model_diff_sum": 0.0, "model_sum": 1.02, "obs_sum": 0.0, "abs_sum": 1.02, "timestamp": 2000},
                {"square_diff_sum": 0.0, "count_sum": 1.0, "obs_model_diff_sum": 0.0, "model_sum": 2.04, "obs_sum": 0.0, "abs_sum": 2.04, "timestamp": 3000},
                {"square_diff_sum": 0.0, "count_sum": 1.0, "obs_model_diff_sum": 0.0, "model_sum": 3.06, "obs_sum": 0.0, "abs_sum": 3.06, "timestamp": 4000},
                {"square_diff_sum": 0.0, "count_sum": 1.0, "obs_model_diff_sum": 0.0, "model_sum": 4.08, "obs_sum": 0.0, "abs_sum": 4.08, "timestamp": 5000},
                {"square_diff_sum": 0.0, "count_sum": 1.0, "obs_model_diff_sum": 0.0, "model_sum": 5.1, "obs_sum": 0.0, "abs_sum": 5.1, "timestamp": 6000},
                {"square_diff_sum": 0.0, "count_sum": 1.0, "obs_model_diff_sum": 0.0, "model_sum": 6.12, "obs_sum": 0.0, "abs_sum": 6.12, "timestamp": 7000},
                {"square_diff_sum": 0.0, "count_sum": 1.0, "obs_model_diff_sum": 0.0, "model_sum": 7.14, "obs_sum": 0.0, "abs_sum": 7.14, "timestamp": 8000},
                {"square_diff_sum": 0.0, "count_sum": 1.0, "obs_model_diff_sum": 0.0, "model_sum": 8.16, "obs_sum": 0.0, "abs_sum": 8.16, "timestamp": 9000},
                {"square_diff_sum": 0.0, "count_sum": 1.0, "obs_model_diff_sum": 0.0, "model_sum": 9.18, "obs_sum": 0.0, "abs_sum": 9.18, "timestamp": 10000}
            ]}
        },
        {
            "label": "Eastern US, 48h",
            "statistic": "CSI (Critical Success Index)",
            "control": {"kind": "contingency", "rows": [
                {"hit": 30.0, "false_alarm": 10.0, "miss": 10.0, "correct_negative": 50.0, "timestamp": 1000},
                {"hit": 28.0, "false_alarm": 12.0, "miss": 11.0, "correct_negative": 49.0, "timestamp": 2000},
                {"hit": 31.0, "false_alarm": 9.0, "miss": 12.0, "correct_negative": 48.0, "timestamp": 3000}
            ]},
            "experimental": {"kind": "contingency", "rows": [
                {"hit": 30.0, "false_alarm": 10.0, "miss": 10.0, "correct_negative": 50.0, "timestamp": 1000},
                {"hit": 28.0, "false_alarm": 12.0, "miss": 11.0, "correct_negative": 49.0, "timestamp": 2000},
                {"hit": 31.0, "false_alarm": 9.0, "miss": 12.0, "correct_negative": 48.0, "timestamp": 3000}
            ]}
        },
        {
            "label": "Western US, 24h",
            "statistic": "RMSE",
            "control": {"kind": "precomputed", "rows": [
                {"timestamp": 1000, "value": 2.0},
                {"timestamp": 2000, "value": 2.1},
                {"timestamp": 3000, "value": 2.2}
            ]},
            "experimental": {"kind": "precomputed", "rows": []}
        }
    ]
}"#;

fn write_store() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("ops-vs-retro.json"), DOCUMENT).unwrap();
    dir
}

#[tokio::test]
async fn test_document_evaluates_end_to_end() {
    let dir = write_store();
    let store = JsonDocumentStore::new(dir.path());
    let document = store.fetch("ops-vs-retro").unwrap();
    assert_eq!(document.cells.len(), 3);

    let config = Config::default();
    let orchestrator = Orchestrator::new(
        config.orchestration.workers,
        config.significance.thresholds(),
    );

    let outcomes = orchestrator.run(document).await.unwrap();
    assert_eq!(outcomes.len(), 3);

    // Bias cell: experimental decreased significantly under Positive
    // polarity, a major loss.
    assert_eq!(outcomes[0].result.score, -2);
    assert!(outcomes[0].result.p_value <= 0.01);

    // Identical contingency sides: neutral, never an error.
    assert_eq!(outcomes[1].result.score, 0);
    assert_eq!(outcomes[1].result.p_value, 1.0);

    // Empty experimental side: error-scored cell, batch survives.
    assert_eq!(outcomes[2].result.score, ERROR_SCORE);
    assert!(outcomes[2].error.is_some());
}

#[tokio::test]
async fn test_outcomes_render_without_panicking() {
    let dir = write_store();
    let store = JsonDocumentStore::new(dir.path());
    let document = store.fetch("ops-vs-retro").unwrap();
    let title = document.title.clone();

    let orchestrator = Orchestrator::new(2, Config::default().significance.thresholds());
    let outcomes = orchestrator.run(document).await.unwrap();

    let reporter = TerminalReporter::without_colors();
    assert!(reporter.report(&title, &outcomes).is_ok());
}

mod store_tests {
    use super::*;
    use scorecard::SourceError;

    #[test]
    fn test_missing_document_is_not_found() {
        let dir = write_store();
        let store = JsonDocumentStore::new(dir.path());

        let result = store.fetch("absent");
        assert!(matches!(result, Err(SourceError::NotFound(_))));
    }
}

mod protocol_tests {
    use scorecard::protocol::{
        HealthResponse, JobState, JobSummary, ShutdownResponse, SubmitJobRequest,
        SubmitJobResponse,
    };

    #[test]
    fn test_health_response_roundtrip() {
        let original = HealthResponse::healthy();
        let json = serde_json::to_string(&original).unwrap();
        let deserialized: HealthResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.status, "healthy");
    }

    #[test]
    fn test_submit_roundtrip() {
        let request = SubmitJobRequest::new("ops-vs-retro");
        let json = serde_json::to_string(&request).unwrap();
        let deserialized: SubmitJobRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.document_id, "ops-vs-retro");

        let response = SubmitJobResponse::created("7d9d");
        assert_eq!(response.state, JobState::Created);
    }

    #[test]
    fn test_summary_roundtrip() {
        let summary = JobSummary {
            scored_cells: 2,
            error_cells: 1,
        };
        let json = serde_json::to_string(&summary).unwrap();
        let deserialized: JobSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, summary);
    }

    #[test]
    fn test_shutdown_response() {
        let response = ShutdownResponse::acknowledged();
        assert_eq!(response.status, "shutting_down");
    }
}
