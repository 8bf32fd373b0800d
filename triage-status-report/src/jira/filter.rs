//! Saved filter resolution result.

use serde::Deserialize;

/// A saved Jira filter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Filter {
    /// JQL the filter runs.
    pub jql: String,

    /// Browsable URL listing the filter's issues.
    #[serde(rename = "viewUrl")]
    pub view_url: String,
}
