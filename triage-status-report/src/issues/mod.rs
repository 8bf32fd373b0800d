//! Issue normalization.
//!
//! Raw search results are projected onto [`IssueProjection`] and then mapped
//! to [`IssueData`]. A failure for one issue is collected and never stops the
//! rest of the batch.

mod error;
mod issue_data;
mod projection;
mod raw_issue;

pub use error::NormalizeError;
pub use issue_data::IssueData;
pub use projection::IssueProjection;
pub use raw_issue::RawIssue;

use crate::config::ReportSettings;
use tracing::debug;

/// Placeholder for any value the issue does not carry.
pub const MISSING_VALUE: &str = "<MISSING>";

/// Labels containing this marker describe a feature used by the cluster.
pub const FEATURE_MARKER: &str = "FEATURE";

/// Removed from feature labels before they are reported.
pub const FEATURE_PREFIX: &str = "FEATURE-";

/// Feature values that are present on nearly every ticket and carry no signal.
///
/// `Requsted-hostname` is a misspelling that older tickets still carry.
pub const IGNORED_FEATURES: &[&str] = &["Requested-hostname", "Requsted-hostname", "NetworkType"];

/// An issue that could not be normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueFailure {
    /// Issue key, or `<unknown>` if the key itself was unreadable.
    pub issue: String,

    /// Why normalization failed.
    pub error: NormalizeError,
}

/// Outcome of normalizing a whole batch.
#[derive(Debug, Clone, Default)]
pub struct NormalizedBatch {
    /// Successfully normalized issues, in fetch order.
    pub issues: Vec<IssueData>,

    /// Issues that failed, in fetch order.
    pub failures: Vec<IssueFailure>,
}

/// Extracts the reported features from an issue's labels.
#[must_use]
pub fn extract_features(labels: &[String]) -> Vec<String> {
    labels
        .iter()
        .filter(|label| label.contains(FEATURE_MARKER))
        .map(|label| label.replace(FEATURE_PREFIX, ""))
        .filter(|feature| !IGNORED_FEATURES.contains(&feature.as_str()))
        .collect()
}

/// Maps a projected issue to [`IssueData`], substituting [`MISSING_VALUE`]
/// for anything absent.
#[must_use]
pub fn normalize(projection: IssueProjection, settings: &ReportSettings) -> IssueData {
    let mut features = extract_features(&projection.labels);
    if features.is_empty() {
        features.push(MISSING_VALUE.to_string());
    }

    IssueData {
        email_domain: projection
            .email_domain
            .unwrap_or_else(|| MISSING_VALUE.to_string()),
        user: projection
            .reporter
            .unwrap_or_else(|| MISSING_VALUE.to_string()),
        url: settings.permalink(&projection.key),
        key: projection.key,
        features,
    }
}

/// Projects and normalizes one raw issue.
///
/// # Errors
///
/// Returns [`NormalizeError`] if the raw issue lacks a required field.
pub fn normalize_issue(
    raw: &RawIssue,
    settings: &ReportSettings,
) -> Result<IssueData, NormalizeError> {
    let projection = IssueProjection::from_raw(raw, settings)?;
    Ok(normalize(projection, settings))
}

/// Normalizes every raw issue, separating successes from failures.
#[must_use]
pub fn normalize_all(raw_issues: &[RawIssue], settings: &ReportSettings) -> NormalizedBatch {
    let mut batch = NormalizedBatch::default();

    for raw in raw_issues {
        match normalize_issue(raw, settings) {
            Ok(issue) => batch.issues.push(issue),
            Err(error) => {
                debug!(issue = %raw, error = %error, "Failed to normalize issue");
                batch.failures.push(IssueFailure {
                    issue: raw.to_string(),
                    error,
                });
            }
        }
    }

    batch
}
