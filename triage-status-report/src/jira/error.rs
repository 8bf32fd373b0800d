//! Jira client error types.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while talking to Jira.
#[derive(Debug, Error)]
pub enum JiraError {
    /// The request could not be sent or the connection failed.
    #[error("Problem communicating with Jira while {activity}: {source}")]
    Request {
        activity: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// Jira answered with a non-success status.
    #[error("Jira responded with {status} while {activity}")]
    Status {
        activity: &'static str,
        status: StatusCode,
    },

    /// The response body was not what the API documents.
    #[error("Trouble decoding the response from Jira while {activity}: {source}")]
    Decode {
        activity: &'static str,
        #[source]
        source: reqwest::Error,
    },
}
