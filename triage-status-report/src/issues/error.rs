//! Normalization error types.

use thiserror::Error;

/// Errors raised while projecting a raw Jira issue onto [`IssueData`].
///
/// [`IssueData`]: super::IssueData
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// A field the report depends on is absent.
    #[error("missing field '{field}'")]
    MissingField { field: String },

    /// A field is present but has the wrong JSON type.
    #[error("field '{field}' is not {expected}")]
    InvalidField {
        field: String,
        expected: &'static str,
    },
}

impl NormalizeError {
    pub(crate) fn missing(field: &str) -> Self {
        Self::MissingField {
            field: field.to_string(),
        }
    }

    pub(crate) fn invalid(field: &str, expected: &'static str) -> Self {
        Self::InvalidField {
            field: field.to_string(),
            expected,
        }
    }
}
