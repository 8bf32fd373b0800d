//! Orchestrates a report run: fetch, normalize, render, publish.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::issues::normalize_all;
use crate::jira::{IssueSource, JiraClient};
use crate::publish::{MessageSink, Publisher};
use crate::report::{ReportContext, ReportRenderer};
use crate::summary::RunSummary;
use tracing::info;

/// Runs the triage report against an issue source and a sink.
pub struct Runner<S = JiraClient, P = Publisher> {
    config: RunnerConfig,
    source: S,
    sink: P,
    renderer: ReportRenderer,
}

impl Runner {
    /// Builds a runner that queries Jira and publishes to the configured
    /// webhook, or to stdout when there is none.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if a client cannot be built or the header
    /// template is invalid.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let source = JiraClient::new(config.settings(), config.token().map(str::to_string))?;
        let sink = Publisher::new(config.webhook().cloned())?;
        Self::with_parts(config, source, sink)
    }
}

impl<S: IssueSource, P: MessageSink> Runner<S, P> {
    /// Builds a runner from explicit parts.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Template`] if the header template is invalid.
    pub fn with_parts(config: RunnerConfig, source: S, sink: P) -> Result<Self, RunnerError> {
        let renderer = ReportRenderer::new(&config.settings().header_template)?;
        Ok(Self {
            config,
            source,
            sink,
            renderer,
        })
    }

    /// Returns the sink, consuming the runner.
    pub fn into_sink(self) -> P {
        self.sink
    }

    /// Executes the full flow.
    ///
    /// Nothing is published unless every fetched issue normalizes.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Normalization`] listing every failed issue, or
    /// the first Jira, template or publishing error.
    pub async fn run(&mut self) -> Result<RunSummary, RunnerError> {
        let mut summary = RunSummary::new(self.config.dry_run());
        let settings = self.config.settings();

        let filter = self.source.resolve_filter(self.config.filter_id()).await?;
        let raw_issues = self.source.search_issues(&filter.jql).await?;
        summary.issues_fetched = raw_issues.len();

        let batch = normalize_all(&raw_issues, settings);
        if !batch.failures.is_empty() {
            return Err(RunnerError::Normalization {
                failures: batch.failures,
            });
        }

        summary.issues_reported = batch.issues.len();
        let context = ReportContext {
            total_issues: raw_issues.len(),
            filter_url: filter.view_url,
            focus_url: settings.focus_link.clone(),
        };
        let text = self.renderer.build_report(batch.issues, &context)?;

        info!(
            issues = summary.issues_reported,
            dry_run = summary.dry_run,
            "Publishing report"
        );
        let outcome = self.sink.publish(&text).await?;
        summary.record_outcome(outcome);

        Ok(summary)
    }
}
