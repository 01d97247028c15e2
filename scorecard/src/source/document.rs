//! A document store backed by a directory of JSON files.

use std::path::{Path, PathBuf};

use super::{RecordSource, SourceError};
use crate::document::ScorecardDocument;

/// Reads scorecard documents from `<root>/<document_id>.json`.
#[derive(Debug, Clone)]
pub struct JsonDocumentStore {
    root: PathBuf,
}

impl JsonDocumentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of a document within the store.
    fn path_for(&self, document_id: &str) -> PathBuf {
        self.root.join(format!("{}.json", document_id))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl RecordSource for JsonDocumentStore {
    fn fetch(&self, document_id: &str) -> Result<ScorecardDocument, SourceError> {
        let path = self.path_for(document_id);
        if !path.exists() {
            return Err(SourceError::NotFound(document_id.to_string()));
        }

        let content = std::fs::read_to_string(&path).map_err(|source| SourceError::Read {
            id: document_id.to_string(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| SourceError::Parse {
            id: document_id.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_document(dir: &Path, id: &str, content: &str) {
        std::fs::write(dir.join(format!("{}.json", id)), content).unwrap();
    }

    #[test]
    fn test_fetch_document() {
        let dir = tempfile::tempdir().unwrap();
        write_document(
            dir.path(),
            "doc-1",
            r#"{
                "id": "doc-1",
                "title": "ops vs. retro-v2",
                "cells": [{
                    "label": "Eastern US, 24h",
                    "statistic": "RMSE",
                    "control": {"kind": "precomputed", "rows": [{"timestamp": 100, "value": 1.0}]},
                    "experimental": {"kind": "precomputed", "rows": [{"timestamp": 100, "value": 1.5}]}
                }]
            }"#,
        );

        let store = JsonDocumentStore::new(dir.path());
        let document = store.fetch("doc-1").unwrap();

        assert_eq!(document.id, "doc-1");
        assert_eq!(document.title, "ops vs. retro-v2");
        assert_eq!(document.cells.len(), 1);
    }

    #[test]
    fn test_fetch_missing_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonDocumentStore::new(dir.path());

        let result = store.fetch("nope");
        assert!(matches!(result, Err(SourceError::NotFound(id)) if id == "nope"));
    }

    #[test]
    fn test_fetch_malformed_document() {
        let dir = tempfile::tempdir().unwrap();
        write_document(dir.path(), "broken", "{not json");

        let store = JsonDocumentStore::new(dir.path());
        let result = store.fetch("broken");
        assert!(matches!(result, Err(SourceError::Parse { .. })));
    }
}
