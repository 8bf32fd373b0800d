//! Run summary types.

use crate::publish::PublishOutcome;

/// Summary of a complete run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of issues the filter returned.
    pub issues_fetched: usize,

    /// Number of issues in the report table.
    pub issues_reported: usize,

    /// Whether this was a dry run.
    pub dry_run: bool,

    /// Whether the webhook accepted the message.
    pub delivered: bool,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    /// Updates the summary with the publisher's outcome.
    pub fn record_outcome(&mut self, outcome: PublishOutcome) {
        self.delivered = outcome == PublishOutcome::Delivered;
    }
}
