//! Dashboard notification client.
//!
//! After a batch of cells completes, the downstream visualization
//! application is poked with an out-of-band HTTP call so it can refresh
//! the scorecard it displays. Notification is best-effort: the caller
//! decides whether a failure matters.

use std::time::Duration;

use scorecard_core::CellOutcome;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from dashboard notification.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Failed to construct the HTTP client.
    #[error("Failed to create notification client: {0}")]
    Client(String),

    /// The notification request failed in transit.
    #[error("Dashboard notification failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The dashboard answered with a non-success status.
    #[error("Dashboard rejected notification: HTTP {0}")]
    Status(u16),
}

/// Payload posted to the dashboard after a batch completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchNotification {
    pub document_id: String,
    /// Cells that produced a score, including neutral ones.
    pub scored_cells: usize,
    /// Cells recorded with the error sentinel.
    pub error_cells: usize,
}

impl BatchNotification {
    /// Summarize a batch of outcomes for one document.
    pub fn from_outcomes(document_id: impl Into<String>, outcomes: &[CellOutcome]) -> Self {
        let error_cells = outcomes
            .iter()
            .filter(|outcome| outcome.result.is_error())
            .count();
        Self {
            document_id: document_id.into(),
            scored_cells: outcomes.len() - error_cells,
            error_cells,
        }
    }
}

/// HTTP client for notifying the dashboard application.
pub struct DashboardNotifier {
    url: String,
    client: reqwest::Client,
}

impl DashboardNotifier {
    /// Create a notifier for the given dashboard URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NotifyError::Client(e.to_string()))?;

        Ok(Self {
            url: url.into(),
            client,
        })
    }

    /// Post the batch summary to the dashboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the dashboard answers
    /// with a non-success status.
    pub async fn notify(&self, notification: &BatchNotification) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(&self.url)
            .json(notification)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(NotifyError::Status(response.status().as_u16()))
        }
    }
}
