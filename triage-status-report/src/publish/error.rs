//! Publishing error types.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while publishing the report.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The webhook request could not be sent.
    #[error("Failed to send the message to the webhook: {0}")]
    Request(#[source] reqwest::Error),

    /// The webhook answered with a non-success status.
    #[error("Webhook responded with {status}")]
    Status { status: StatusCode },

    /// Writing the dry-run output failed.
    #[error("Unable to write to stdout: {0}")]
    Stdout(#[from] std::io::Error),
}
