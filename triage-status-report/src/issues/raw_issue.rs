//! Untyped issue records as returned by the search API.

use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// One issue object from a Jira search response, kept as raw JSON until it
/// is projected by [`IssueProjection::from_raw`].
///
/// [`IssueProjection::from_raw`]: super::IssueProjection::from_raw
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RawIssue(Value);

impl RawIssue {
    /// Wraps a JSON value.
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Returns the underlying JSON.
    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Returns the issue key if it is readable.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.0.get("key").and_then(Value::as_str)
    }
}

impl From<Value> for RawIssue {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl fmt::Display for RawIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key().unwrap_or("<unknown>"))
    }
}
