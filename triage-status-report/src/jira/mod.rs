//! Jira access.
//!
//! A saved filter is resolved to its JQL and browsable URL, then the JQL is
//! run once through the search API. The raw issues are handed on untouched;
//! [`crate::issues`] does the projection.

mod client;
mod error;
mod filter;

pub use client::JiraClient;
pub use error::JiraError;
pub use filter::Filter;

use crate::issues::RawIssue;

/// Filter shown in the triage channel unless `--filter-id` says otherwise.
pub const DEFAULT_FILTER_ID: u64 = 12380672;

/// Where issues come from.
///
/// [`JiraClient`] is the production implementation.
#[allow(async_fn_in_trait)]
pub trait IssueSource {
    /// Resolves a saved filter id to its query and view URL.
    async fn resolve_filter(&self, filter_id: u64) -> Result<Filter, JiraError>;

    /// Runs a JQL query and returns the raw issues.
    async fn search_issues(&self, jql: &str) -> Result<Vec<RawIssue>, JiraError>;
}
