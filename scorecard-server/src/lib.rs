//! Job-submission surface for scorecard
//!
//! Exposes scorecard evaluation over HTTP: a client submits a document
//! identifier, receives a job handle, and polls it while a worker
//! evaluates the document's cells through the same orchestration path
//! the CLI uses.

mod server;

pub use server::{run_server, run_server_async};

use std::collections::HashMap;

use scorecard_core::protocol::{JobState, JobSummary};
use uuid::Uuid;

/// State of one submitted job.
#[derive(Debug, Clone)]
pub struct JobRecord {
    pub document_id: String,
    pub state: JobState,
    /// Error message once the job failed.
    pub error: Option<String>,
    /// Cell counts once the job completed.
    pub summary: Option<JobSummary>,
}

/// Registry of submitted evaluation jobs.
///
/// Jobs move created -> processing -> completed/failed and are kept
/// after they finish so clients can poll the outcome.
pub struct JobRegistry {
    jobs: HashMap<Uuid, JobRecord>,
}

impl JobRegistry {
    /// Create a new empty job registry.
    pub fn new() -> Self {
        Self {
            jobs: HashMap::new(),
        }
    }

    /// Register a new job for a document, in the created state.
    pub fn create(&mut self, document_id: impl Into<String>) -> Uuid {
        let job_id = Uuid::new_v4();
        self.jobs.insert(
            job_id,
            JobRecord {
                document_id: document_id.into(),
                state: JobState::Created,
                error: None,
                summary: None,
            },
        );
        job_id
    }

    /// Look up a job by id.
    pub fn get(&self, job_id: Uuid) -> Option<&JobRecord> {
        self.jobs.get(&job_id)
    }

    /// Mark a job as processing. Returns false if the job is unknown.
    pub fn mark_processing(&mut self, job_id: Uuid) -> bool {
        match self.jobs.get_mut(&job_id) {
            Some(record) => {
                record.state = JobState::Processing;
                true
            }
            None => false,
        }
    }

    /// Mark a job as completed with its cell counts. Returns false if
    /// the job is unknown.
    pub fn complete(&mut self, job_id: Uuid, summary: JobSummary) -> bool {
        match self.jobs.get_mut(&job_id) {
            Some(record) => {
                record.state = JobState::Completed;
                record.summary = Some(summary);
                true
            }
            None => false,
        }
    }

    /// Mark a job as failed with an error message. Returns false if the
    /// job is unknown.
    pub fn fail(&mut self, job_id: Uuid, error: impl Into<String>) -> bool {
        match self.jobs.get_mut(&job_id) {
            Some(record) => {
                record.state = JobState::Failed;
                record.error = Some(error.into());
                true
            }
            None => false,
        }
    }

    /// Get the number of registered jobs.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

impl Default for JobRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_new() {
        let registry = JobRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_job_lifecycle_completed() {
        let mut registry = JobRegistry::new();
        let job_id = registry.create("doc-1");

        let record = registry.get(job_id).unwrap();
        assert_eq!(record.document_id, "doc-1");
        assert_eq!(record.state, JobState::Created);

        assert!(registry.mark_processing(job_id));
        assert_eq!(registry.get(job_id).unwrap().state, JobState::Processing);

        assert!(registry.complete(
            job_id,
            JobSummary {
                scored_cells: 5,
                error_cells: 0,
            }
        ));
        let record = registry.get(job_id).unwrap();
        assert_eq!(record.state, JobState::Completed);
        assert_eq!(record.summary.unwrap().scored_cells, 5);
        assert!(record.error.is_none());
    }

    #[test]
    fn test_job_lifecycle_failed() {
        let mut registry = JobRegistry::new();
        let job_id = registry.create("doc-1");

        registry.mark_processing(job_id);
        assert!(registry.fail(job_id, "document not found"));

        let record = registry.get(job_id).unwrap();
        assert_eq!(record.state, JobState::Failed);
        assert_eq!(record.error.as_deref(), Some("document not found"));
        assert!(record.summary.is_none());
    }

    #[test]
    fn test_unknown_job() {
        let mut registry = JobRegistry::new();
        let stranger = Uuid::new_v4();

        assert!(registry.get(stranger).is_none());
        assert!(!registry.mark_processing(stranger));
        assert!(!registry.fail(stranger, "nope"));
    }

    #[test]
    fn test_registry_default() {
        let registry = JobRegistry::default();
        assert!(registry.is_empty());
    }
}
