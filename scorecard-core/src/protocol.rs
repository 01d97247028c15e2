use serde::{Deserialize, Serialize};

/// Health check response from the scorecard server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    /// Create a healthy response.
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

/// Lifecycle state of a submitted evaluation job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobState {
    Created,
    Processing,
    Completed,
    Failed,
}

/// Request to evaluate one scorecard document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitJobRequest {
    pub document_id: String,
}

impl SubmitJobRequest {
    /// Create a new job submission request.
    pub fn new(document_id: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
        }
    }
}

/// Response to a job submission: the handle to poll for status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitJobResponse {
    pub job_id: String,
    pub state: JobState,
}

impl SubmitJobResponse {
    /// Create a response for a freshly created job.
    pub fn created(job_id: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
            state: JobState::Created,
        }
    }
}

/// Cell counts for a finished job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSummary {
    /// Cells that produced a score, including neutral ones.
    pub scored_cells: usize,
    /// Cells recorded with the error sentinel.
    pub error_cells: usize,
}

/// Status of a submitted job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobStatusResponse {
    pub job_id: String,
    pub document_id: String,
    pub state: JobState,
    /// Error message if the job failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Cell counts, present once the job completed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<JobSummary>,
}

/// Response to a shutdown request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShutdownResponse {
    pub status: String,
}

impl ShutdownResponse {
    /// Create a shutdown acknowledgment response.
    pub fn acknowledged() -> Self {
        Self {
            status: "shutting_down".to_string(),
        }
    }
}
