//! Runner error types.

use crate::issues::IssueFailure;

/// Errors that can occur while running the report.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Settings loading errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// Jira API errors.
    #[error(transparent)]
    Jira(#[from] crate::jira::JiraError),

    /// Header template errors.
    #[error(transparent)]
    Template(#[from] crate::report::TemplateError),

    /// Webhook or stdout errors.
    #[error(transparent)]
    Publish(#[from] crate::publish::PublishError),

    /// At least one issue could not be normalized; nothing was published.
    #[error("Failed parsing all jira issues. Had {} errors", .failures.len())]
    Normalization { failures: Vec<IssueFailure> },
}
