//! Typed projection of a raw issue onto the fields the report reads.

use super::{NormalizeError, RawIssue};
use crate::config::ReportSettings;
use serde_json::{Map, Value};

/// The exact set of fields consumed from a Jira issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueProjection {
    /// Issue key, e.g. `AITRIAGE-1`.
    pub key: String,

    /// Value of the reporter custom field.
    pub reporter: Option<String>,

    /// Value of the email domain custom field.
    pub email_domain: Option<String>,

    /// All labels on the issue.
    pub labels: Vec<String>,
}

impl IssueProjection {
    /// Extracts the consumed fields from `raw`.
    ///
    /// Custom fields may be absent or `null`; `key`, `fields` and
    /// `fields.labels` must exist.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError`] when a required field is missing or any
    /// consumed field has an unexpected JSON type.
    pub fn from_raw(raw: &RawIssue, settings: &ReportSettings) -> Result<Self, NormalizeError> {
        let value = raw.as_value();

        let key = value
            .get("key")
            .ok_or_else(|| NormalizeError::missing("key"))?
            .as_str()
            .ok_or_else(|| NormalizeError::invalid("key", "a string"))?
            .to_string();

        let fields = value
            .get("fields")
            .ok_or_else(|| NormalizeError::missing("fields"))?
            .as_object()
            .ok_or_else(|| NormalizeError::invalid("fields", "an object"))?;

        Ok(Self {
            key,
            reporter: optional_string(fields, &settings.reporter_field)?,
            email_domain: optional_string(fields, &settings.email_domain_field)?,
            labels: string_list(fields, "labels")?,
        })
    }
}

fn optional_string(
    fields: &Map<String, Value>,
    name: &str,
) -> Result<Option<String>, NormalizeError> {
    match fields.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(NormalizeError::invalid(name, "a string")),
    }
}

fn string_list(fields: &Map<String, Value>, name: &str) -> Result<Vec<String>, NormalizeError> {
    fields
        .get(name)
        .ok_or_else(|| NormalizeError::missing(name))?
        .as_array()
        .ok_or_else(|| NormalizeError::invalid(name, "a list"))?
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| NormalizeError::invalid(name, "a list of strings"))
        })
        .collect()
}
