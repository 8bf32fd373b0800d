//! HTTP client for the Jira REST API.

use super::{Filter, IssueSource, JiraError};
use crate::config::ReportSettings;
use crate::issues::RawIssue;
use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info, info_span, warn, Instrument};

/// Body of `GET /rest/api/2/search`.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    issues: Vec<RawIssue>,
    #[serde(default)]
    total: Option<usize>,
}

/// Jira REST client authenticated with an optional personal access token.
#[derive(Debug, Clone)]
pub struct JiraClient {
    client: Client,
    base_url: String,
    token: Option<String>,
    fields: String,
    max_results: u32,
}

impl JiraClient {
    /// Creates a client for the server and custom fields in `settings`.
    ///
    /// # Errors
    ///
    /// Returns [`JiraError::Request`] if the HTTP client cannot be built.
    pub fn new(settings: &ReportSettings, token: Option<String>) -> Result<Self, JiraError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| JiraError::Request {
                activity: "building the HTTP client",
                source,
            })?;

        if token.is_none() {
            warn!("No Jira access token given, querying anonymously");
        }

        Ok(Self {
            client,
            base_url: settings.jira_base().to_string(),
            token,
            fields: search_fields(settings),
            max_results: settings.max_results,
        })
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get(&self, path: &str) -> RequestBuilder {
        let request = self
            .client
            .get(format!("{}/rest/api/2/{}", self.base_url, path))
            .header(ACCEPT, "application/json");

        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

/// Comma-separated field list requested from the search API.
fn search_fields(settings: &ReportSettings) -> String {
    format!(
        "labels,{},{}",
        settings.reporter_field, settings.email_domain_field
    )
}

async fn send_json<T: DeserializeOwned>(
    request: RequestBuilder,
    activity: &'static str,
) -> Result<T, JiraError> {
    let response: Response = request
        .send()
        .await
        .map_err(|source| JiraError::Request { activity, source })?;

    let status = response.status();
    if !status.is_success() {
        return Err(JiraError::Status { activity, status });
    }

    response
        .json::<T>()
        .await
        .map_err(|source| JiraError::Decode { activity, source })
}

impl IssueSource for JiraClient {
    async fn resolve_filter(&self, filter_id: u64) -> Result<Filter, JiraError> {
        let span = info_span!("resolve_filter", filter_id);

        async {
            info!("Resolving Jira filter");
            let filter: Filter =
                send_json(self.get(&format!("filter/{filter_id}")), "resolving the filter")
                    .await?;
            debug!(jql = %filter.jql, view_url = %filter.view_url, "Resolved filter");
            Ok(filter)
        }
        .instrument(span)
        .await
    }

    async fn search_issues(&self, jql: &str) -> Result<Vec<RawIssue>, JiraError> {
        let span = info_span!("search_issues", jql = %jql);

        async {
            let max_results = self.max_results.to_string();
            let request = self.get("search").query(&[
                ("jql", jql),
                ("maxResults", max_results.as_str()),
                ("fields", self.fields.as_str()),
            ]);

            let response: SearchResponse = send_json(request, "searching for issues").await?;

            if let Some(total) = response.total {
                if total > response.issues.len() {
                    warn!(
                        total,
                        fetched = response.issues.len(),
                        "Filter matches more issues than a single page holds"
                    );
                }
            }

            info!(count = response.issues.len(), "Fetched issues");
            Ok(response.issues)
        }
        .instrument(span)
        .await
    }
}
