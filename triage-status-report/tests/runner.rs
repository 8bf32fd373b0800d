mod common;

use common::fixture;
use serde_json::{json, Value};
use triage_status_report::{
    Filter, IssueSource, JiraError, MessageSink, PublishError, PublishOutcome, RawIssue,
    ReportSettings, Runner, RunnerConfig, RunnerError, StdoutSink, WebhookPayload,
};

struct FakeSource {
    filter: Filter,
    issues: Vec<RawIssue>,
}

impl FakeSource {
    fn from_fixtures() -> Self {
        let filter: Filter = serde_json::from_str(&fixture("filter.json")).unwrap();
        let response: Value = serde_json::from_str(&fixture("search_response.json")).unwrap();
        let issues = response["issues"]
            .as_array()
            .unwrap()
            .iter()
            .cloned()
            .map(RawIssue::new)
            .collect();
        Self { filter, issues }
    }

    fn with_issues(issues: Vec<Value>) -> Self {
        Self {
            issues: issues.into_iter().map(RawIssue::new).collect(),
            ..Self::from_fixtures()
        }
    }
}

impl IssueSource for FakeSource {
    async fn resolve_filter(&self, filter_id: u64) -> Result<Filter, JiraError> {
        assert_eq!(filter_id, 12380672);
        Ok(self.filter.clone())
    }

    async fn search_issues(&self, jql: &str) -> Result<Vec<RawIssue>, JiraError> {
        assert_eq!(jql, self.filter.jql);
        Ok(self.issues.clone())
    }
}

#[derive(Default)]
struct RecordingSink {
    messages: Vec<String>,
}

impl MessageSink for RecordingSink {
    async fn publish(&mut self, text: &str) -> Result<PublishOutcome, PublishError> {
        self.messages.push(text.to_string());
        Ok(PublishOutcome::Delivered)
    }
}

fn webhook_config() -> RunnerConfig {
    let webhook = url::Url::parse("https://hooks.example.com/x").unwrap();
    RunnerConfig::default().with_webhook(Some(webhook))
}

#[tokio::test]
async fn dry_run_prints_full_report() {
    let mut runner = Runner::with_parts(
        RunnerConfig::default(),
        FakeSource::from_fixtures(),
        StdoutSink::new(Vec::new()),
    )
    .unwrap();

    let summary = runner.run().await.unwrap();
    let printed = String::from_utf8(runner.into_sink().into_inner()).unwrap();

    assert!(summary.dry_run);
    assert!(!summary.delivered);
    assert_eq!(summary.issues_fetched, 3);
    assert_eq!(summary.issues_reported, 3);
    assert_eq!(printed, fixture("expected_report.txt"));
}

#[tokio::test]
async fn printed_text_matches_webhook_payload() {
    let mut printing = Runner::with_parts(
        RunnerConfig::default(),
        FakeSource::from_fixtures(),
        StdoutSink::new(Vec::new()),
    )
    .unwrap();
    printing.run().await.unwrap();
    let printed = String::from_utf8(printing.into_sink().into_inner()).unwrap();

    let mut posting = Runner::with_parts(
        webhook_config(),
        FakeSource::from_fixtures(),
        RecordingSink::default(),
    )
    .unwrap();
    let summary = posting.run().await.unwrap();
    let sent = posting.into_sink().messages;

    assert!(summary.delivered);
    assert_eq!(sent, vec![printed.clone()]);

    let body = serde_json::to_value(WebhookPayload::new(&sent[0])).unwrap();
    assert_eq!(body, json!({ "text": printed }));
}

#[tokio::test]
async fn normalization_failure_publishes_nothing() {
    let source = FakeSource::with_issues(vec![
        json!({"key": "AITRIAGE-1", "fields": {"labels": ["FEATURE-SNO"]}}),
        json!({"key": "AITRIAGE-2", "fields": {}}),
        json!({"key": "AITRIAGE-3", "fields": {"labels": []}}),
    ]);
    let mut runner =
        Runner::with_parts(webhook_config(), source, RecordingSink::default()).unwrap();

    let error = runner.run().await.unwrap_err();

    match &error {
        RunnerError::Normalization { failures } => {
            assert_eq!(failures.len(), 1);
            assert_eq!(failures[0].issue, "AITRIAGE-2");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(
        error.to_string(),
        "Failed parsing all jira issues. Had 1 errors"
    );
    assert!(runner.into_sink().messages.is_empty());
}

#[tokio::test]
async fn empty_filter_posts_header_only() {
    let mut runner = Runner::with_parts(
        webhook_config(),
        FakeSource::with_issues(Vec::new()),
        RecordingSink::default(),
    )
    .unwrap();

    let summary = runner.run().await.unwrap();
    let sent = runner.into_sink().messages;

    assert_eq!(summary.issues_fetched, 0);
    assert_eq!(sent.len(), 1);
    assert!(sent[0].starts_with(
        "There are <https://issues.redhat.com/issues/?filter=12380672|0 new triage tickets>"
    ));
    assert!(sent[0].ends_with("recently\n"));
    assert!(!sent[0].contains("```"));
}

#[tokio::test]
async fn settings_shape_links_and_header() {
    let settings = ReportSettings {
        jira_server: "https://jira.example.com/".to_string(),
        header_template: "{{total_issues}} via <{{filter_url}}|filter>\n".to_string(),
        ..ReportSettings::default()
    };
    let source = FakeSource::with_issues(vec![json!({
        "key": "AITRIAGE-9",
        "fields": {
            "customfield_12319044": "carol",
            "customfield_12319045": "example.org",
            "labels": ["FEATURE-SNO"]
        }
    })]);
    let mut runner = Runner::with_parts(
        RunnerConfig::new(12380672, settings),
        source,
        RecordingSink::default(),
    )
    .unwrap();

    runner.run().await.unwrap();
    let sent = runner.into_sink().messages;

    assert_eq!(
        sent[0],
        "1 via <https://issues.redhat.com/issues/?filter=12380672|filter>\n\
         ```<https://jira.example.com/browse/AITRIAGE-9|AITRIAGE-9>   carol           example.org     ['SNO']\n```"
    );
}

#[test]
fn invalid_header_template_is_rejected() {
    let settings = ReportSettings {
        header_template: "{{#each}}".to_string(),
        ..ReportSettings::default()
    };

    let result = Runner::with_parts(
        RunnerConfig::new(1, settings),
        FakeSource::with_issues(Vec::new()),
        RecordingSink::default(),
    );
    assert!(matches!(result, Err(RunnerError::Template(_))));
}
