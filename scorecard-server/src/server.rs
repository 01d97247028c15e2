//! HTTP server for scorecard job submission.
//!
//! This module exposes scorecard evaluation for external orchestration.
//! A client submits a document identifier and gets back a job handle;
//! the document is fetched and evaluated in the background while the
//! client polls the job's state. The server supports health checks and
//! graceful shutdown.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tokio::sync::{watch, Mutex};
use uuid::Uuid;

use scorecard::{Config, JsonDocumentStore, Orchestrator, RecordSource};
use scorecard_core::protocol::{
    HealthResponse, JobStatusResponse, JobSummary, ShutdownResponse, SubmitJobRequest,
    SubmitJobResponse,
};
use scorecard_core::Thresholds;

use crate::JobRegistry;

/// Shared state for the HTTP server.
struct AppState {
    /// Registry of submitted jobs.
    registry: Mutex<JobRegistry>,
    /// Document store jobs read from.
    store: JsonDocumentStore,
    /// Worker pool width for each job's cell evaluation.
    workers: usize,
    /// Document-wide significance levels.
    thresholds: Thresholds,
    /// Sender to signal shutdown.
    shutdown_tx: watch::Sender<bool>,
}

/// Health check endpoint.
///
/// GET /health
/// Returns: { "status": "healthy" }
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Submit a document for evaluation.
///
/// POST /jobs
/// Body: { "document_id": "..." }
/// Returns: { "job_id": "...", "state": "created" }
async fn submit_job(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SubmitJobRequest>,
) -> impl IntoResponse {
    let job_id = state.registry.lock().await.create(&request.document_id);
    eprintln!(
        "[server] Accepted job {} for document '{}'",
        job_id, request.document_id
    );

    let worker_state = Arc::clone(&state);
    let document_id = request.document_id.clone();
    tokio::spawn(async move {
        run_job(worker_state, job_id, document_id).await;
    });

    (
        StatusCode::ACCEPTED,
        Json(SubmitJobResponse::created(job_id.to_string())),
    )
}

/// Evaluate one job to completion, recording the outcome in the registry.
async fn run_job(state: Arc<AppState>, job_id: Uuid, document_id: String) {
    state.registry.lock().await.mark_processing(job_id);

    let document = match state.store.fetch(&document_id) {
        Ok(document) => document,
        Err(error) => {
            eprintln!("[server] Job {} failed: {}", job_id, error);
            state.registry.lock().await.fail(job_id, error.to_string());
            return;
        }
    };

    let orchestrator = Orchestrator::new(state.workers, state.thresholds);
    match orchestrator.run(document).await {
        Ok(outcomes) => {
            let error_cells = outcomes
                .iter()
                .filter(|outcome| outcome.result.is_error())
                .count();
            let summary = JobSummary {
                scored_cells: outcomes.len() - error_cells,
                error_cells,
            };
            eprintln!(
                "[server] Job {} completed: {} cell(s), {} error(s)",
                job_id,
                outcomes.len(),
                error_cells
            );
            state.registry.lock().await.complete(job_id, summary);
        }
        Err(error) => {
            eprintln!("[server] Job {} failed: {}", job_id, error);
            state.registry.lock().await.fail(job_id, error.to_string());
        }
    }
}

/// Poll a job's state.
///
/// GET /jobs/{id}
/// Returns: { "job_id": "...", "document_id": "...", "state": "...", ... }
async fn job_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let not_found = || {
        (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": format!("Job not found: {}", id) })),
        )
            .into_response()
    };

    let Ok(job_id) = Uuid::parse_str(&id) else {
        return not_found();
    };

    let registry = state.registry.lock().await;
    match registry.get(job_id) {
        Some(record) => {
            let status = JobStatusResponse {
                job_id: id.clone(),
                document_id: record.document_id.clone(),
                state: record.state,
                error: record.error.clone(),
                summary: record.summary,
            };
            (StatusCode::OK, Json(status)).into_response()
        }
        None => not_found(),
    }
}

/// Trigger graceful shutdown of the server.
///
/// POST /shutdown
/// Returns: { "status": "shutting_down" }
async fn shutdown(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    // Signal shutdown to the server
    let _ = state.shutdown_tx.send(true);
    (StatusCode::OK, Json(ShutdownResponse::acknowledged()))
}

/// Build the router with all endpoints.
fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/jobs", post(submit_job))
        .route("/jobs/{id}", get(job_status))
        .route("/shutdown", post(shutdown))
        .with_state(state)
}

/// Run the job server.
///
/// This function starts an HTTP server on the configured port and blocks
/// until shutdown is requested via the `/shutdown` endpoint.
///
/// # Errors
///
/// Returns an error if the server fails to bind or encounters a runtime error.
pub fn run_server(config: Config) -> anyhow::Result<()> {
    // Create a tokio runtime for the async server
    let runtime = tokio::runtime::Runtime::new()?;

    runtime.block_on(async { run_server_async(config).await })
}

/// Async implementation of the job server.
///
/// Use this when you're already in a tokio runtime (e.g., in async tests).
/// For standalone use, prefer `run_server` which creates its own runtime.
pub async fn run_server_async(config: Config) -> anyhow::Result<()> {
    // Create shutdown channel
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    // Create shared state
    let state = Arc::new(AppState {
        registry: Mutex::new(JobRegistry::new()),
        store: JsonDocumentStore::new(config.store.root.clone()),
        workers: config.orchestration.workers,
        thresholds: config.significance.thresholds(),
        shutdown_tx,
    });

    // Build the router
    let app = build_router(state);

    // Create the listener
    let addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    eprintln!("Scorecard server listening on {}", addr);

    // Run the server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            // Wait for shutdown signal
            while !*shutdown_rx.borrow() {
                if shutdown_rx.changed().await.is_err() {
                    break;
                }
            }
            eprintln!("Shutting down scorecard server");
        })
        .await?;

    Ok(())
}
