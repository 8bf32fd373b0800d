//! Report publishing.
//!
//! Without a webhook the report is printed (dry run); with one it is posted
//! once. A non-success status is an error and is never retried.

mod error;
mod stdout;
mod webhook;

pub use error::PublishError;
pub use stdout::StdoutSink;
pub use webhook::WebhookSink;

use serde::Serialize;
use url::Url;

/// JSON body accepted by chat incoming webhooks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookPayload<'a> {
    /// Message text.
    pub text: &'a str,
}

impl<'a> WebhookPayload<'a> {
    /// Wraps the report text.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

/// What happened to the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    /// Written to standard output.
    Printed,

    /// Accepted by the webhook.
    Delivered,
}

/// Destination of a rendered report.
#[allow(async_fn_in_trait)]
pub trait MessageSink {
    /// Publishes `text`.
    async fn publish(&mut self, text: &str) -> Result<PublishOutcome, PublishError>;
}

/// The sink chosen from the command line.
#[derive(Debug)]
pub enum Publisher {
    /// No webhook configured.
    DryRun(StdoutSink),

    /// Post to a webhook.
    Webhook(WebhookSink),
}

impl Publisher {
    /// Picks the webhook sink when a URL is given, the dry-run sink otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError`] if the webhook client cannot be built.
    pub fn new(webhook: Option<Url>) -> Result<Self, PublishError> {
        Ok(match webhook {
            Some(url) => Self::Webhook(WebhookSink::new(url)?),
            None => Self::DryRun(StdoutSink::stdout()),
        })
    }

    /// Returns true when nothing will be sent over the network.
    #[must_use]
    pub fn is_dry_run(&self) -> bool {
        matches!(self, Self::DryRun(_))
    }
}

impl MessageSink for Publisher {
    async fn publish(&mut self, text: &str) -> Result<PublishOutcome, PublishError> {
        match self {
            Self::DryRun(sink) => sink.publish(text).await,
            Self::Webhook(sink) => sink.publish(text).await,
        }
    }
}
