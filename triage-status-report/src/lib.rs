#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod issues;
pub mod jira;
pub mod publish;
pub mod report;
pub mod runner;
pub mod summary;

pub use config::{load_settings, ConfigError, ReportSettings};
pub use issues::{
    extract_features, normalize, normalize_all, normalize_issue, IssueData, IssueFailure,
    IssueProjection, NormalizeError, NormalizedBatch, RawIssue, MISSING_VALUE,
};
pub use jira::{Filter, IssueSource, JiraClient, JiraError, DEFAULT_FILTER_ID};
pub use publish::{
    MessageSink, PublishError, PublishOutcome, Publisher, StdoutSink, WebhookPayload, WebhookSink,
};
pub use report::{ReportContext, ReportRenderer, TemplateError};
pub use runner::{Runner, RunnerConfig, RunnerError};
pub use summary::RunSummary;
