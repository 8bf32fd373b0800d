//! Chat webhook sink.

use super::{MessageSink, PublishError, PublishOutcome, WebhookPayload};
use reqwest::Client;
use tracing::{info, info_span, Instrument};
use url::Url;

/// Posts the report as `{"text": ...}` to an incoming webhook.
#[derive(Debug, Clone)]
pub struct WebhookSink {
    client: Client,
    url: Url,
}

impl WebhookSink {
    /// Creates a sink for `url`.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::Request`] if the HTTP client cannot be built.
    pub fn new(url: Url) -> Result<Self, PublishError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(PublishError::Request)?;
        Ok(Self { client, url })
    }

    /// Returns the webhook URL.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl MessageSink for WebhookSink {
    async fn publish(&mut self, text: &str) -> Result<PublishOutcome, PublishError> {
        let span = info_span!("post_webhook", host = self.url.host_str().unwrap_or_default());

        async {
            let response = self
                .client
                .post(self.url.clone())
                .json(&WebhookPayload::new(text))
                .send()
                .await
                .map_err(PublishError::Request)?;

            let status = response.status();
            if !status.is_success() {
                return Err(PublishError::Status { status });
            }

            info!("Message sent successfully");
            Ok(PublishOutcome::Delivered)
        }
        .instrument(span)
        .await
    }
}
