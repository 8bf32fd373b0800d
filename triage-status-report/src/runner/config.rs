//! Runner configuration.

use crate::config::ReportSettings;
use crate::jira::DEFAULT_FILTER_ID;
use url::Url;

/// Configuration for a report run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Saved filter to report on.
    filter_id: u64,
    /// Jira personal access token.
    token: Option<String>,
    /// Webhook to post to; `None` means dry run.
    webhook: Option<Url>,
    /// Report settings.
    settings: ReportSettings,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FILTER_ID, ReportSettings::default())
    }
}

impl RunnerConfig {
    /// Creates a dry-run configuration without a token.
    pub fn new(filter_id: u64, settings: ReportSettings) -> Self {
        Self {
            filter_id,
            token: None,
            webhook: None,
            settings,
        }
    }

    /// Sets the Jira access token.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// Sets the webhook URL.
    pub fn with_webhook(mut self, webhook: Option<Url>) -> Self {
        self.webhook = webhook;
        self
    }

    /// Returns the filter id.
    pub fn filter_id(&self) -> u64 {
        self.filter_id
    }

    /// Returns the Jira access token.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns the webhook URL.
    pub fn webhook(&self) -> Option<&Url> {
        self.webhook.as_ref()
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.webhook.is_none()
    }

    /// Returns the report settings.
    pub fn settings(&self) -> &ReportSettings {
        &self.settings
    }
}
