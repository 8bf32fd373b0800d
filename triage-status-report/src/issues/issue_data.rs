//! Normalized issue record.

use serde::Serialize;

/// One triage ticket as it appears in the report.
///
/// Field order matters: the derived ordering compares `email_domain`, then
/// `user`, `key`, `url` and `features`, which groups the report by
/// organization and then by user.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct IssueData {
    /// Reporter's email domain, or [`MISSING_VALUE`](super::MISSING_VALUE).
    pub email_domain: String,

    /// Reporting user, or [`MISSING_VALUE`](super::MISSING_VALUE).
    pub user: String,

    /// Issue key.
    pub key: String,

    /// Permanent link to the issue.
    pub url: String,

    /// Feature labels with their prefix stripped. Never empty.
    pub features: Vec<String>,
}
