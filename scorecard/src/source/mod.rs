use crate::document::ScorecardDocument;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Document not found: {0}")]
    NotFound(String),
    #[error("Failed to read document '{id}': {source}")]
    Read {
        id: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse document '{id}': {source}")]
    Parse {
        id: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Source of scorecard documents, keyed by document identifier.
pub trait RecordSource: Send + Sync {
    fn fetch(&self, document_id: &str) -> Result<ScorecardDocument, SourceError>;
}

mod document;
pub use document::JsonDocumentStore;
