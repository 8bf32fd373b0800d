//! CLI for the triage status report.
//!
//! Queries a saved Jira filter and posts a per-ticket summary to a chat
//! webhook, or prints it when no webhook is given.

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use triage_status_report::{
    load_settings, ConfigError, RunSummary, Runner, RunnerConfig, RunnerError, DEFAULT_FILTER_ID,
};
use url::Url;

/// Triage Status Report - Summarize new triage tickets and post them to a chat channel.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// PAT (personal access token) for accessing Jira.
    #[arg(long, env = "JIRA_ACCESS_TOKEN", hide_env_values = true)]
    jira_access_token: Option<String>,

    /// Slack channel URL to post information. Not specifying implies dry-run.
    #[arg(long, env = "WEBHOOK", hide_env_values = true)]
    webhook: Option<String>,

    /// Jira filter id.
    #[arg(long, default_value_t = DEFAULT_FILTER_ID)]
    filter_id: u64,

    /// Jira server URL, overriding the settings file.
    #[arg(long, env = "JIRA_SERVER")]
    jira_server: Option<String>,

    /// Path to a TOML settings file.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();

    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            let _ = write_failures(&e, &mut std::io::stderr());
            error!(error = %e, "Critical failure");
            ExitCode::from(1)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Logs go to stderr so stdout carries nothing but the report in dry-run
/// mode. The level comes from `RUST_LOG` and defaults to "info".
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Turns the parsed arguments into a runner configuration.
fn build_config(args: Args) -> Result<RunnerConfig, RunnerError> {
    let mut settings = load_settings(args.config.as_deref())?;
    if let Some(server) = args.jira_server.as_deref() {
        settings = settings.with_jira_server(server)?;
    }

    let webhook = args
        .webhook
        .filter(|webhook| !webhook.trim().is_empty())
        .map(|webhook| {
            Url::parse(&webhook).map_err(|source| ConfigError::InvalidUrl {
                name: "webhook",
                value: webhook.clone(),
                source,
            })
        })
        .transpose()?;

    Ok(RunnerConfig::new(args.filter_id, settings)
        .with_token(args.jira_access_token)
        .with_webhook(webhook))
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let config = build_config(args)?;
    info!(
        filter_id = config.filter_id(),
        dry_run = config.dry_run(),
        "Building triage report"
    );
    let mut runner = Runner::new(config)?;
    runner.run().await
}

/// Writes one line per issue that failed normalization.
fn write_failures(error: &RunnerError, out: &mut impl Write) -> io::Result<()> {
    if let RunnerError::Normalization { failures } = error {
        for failure in failures {
            writeln!(out, "Failed parsing {}, error: {}", failure.issue, failure.error)?;
        }
    }
    Ok(())
}

/// Reports how the run ended.
fn print_summary(summary: &RunSummary) {
    info!(
        fetched = summary.issues_fetched,
        reported = summary.issues_reported,
        dry_run = summary.dry_run,
        "Run complete"
    );

    if summary.delivered {
        println!("Message sent successfully!");
    }
}
