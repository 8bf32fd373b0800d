//! Report settings deserialization.

use crate::config::ConfigError;
use crate::report::DEFAULT_HEADER_TEMPLATE;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;
use url::Url;

/// Jira instance queried when nothing else is configured.
pub const DEFAULT_JIRA_SERVER: &str = "https://issues.redhat.com";

/// Custom field holding the user who reported the triage ticket.
pub const DEFAULT_REPORTER_FIELD: &str = "customfield_12319044";

/// Custom field holding the reporter's email domain.
pub const DEFAULT_EMAIL_DOMAIN_FIELD: &str = "customfield_12319045";

/// Secondary query linked from the report header: last week's OpenShift 4.12 tickets.
pub const DEFAULT_FOCUS_LINK: &str = "https://issues.redhat.com/issues/?jql=project%20%3D%20AI-Triage%20AND%20component%20%3D%20Cloud-Triage%20AND%20created%20%3E%3D%20-7d%20AND%20affectedVersion%20%3D%20%22OpenShift%204.12%22%20ORDER%20BY%20key%20DESC";

/// Number of issues requested from the search API in its single call.
pub const DEFAULT_MAX_RESULTS: u32 = 50;

/// Settings that shape the report, read from an optional TOML file.
///
/// Every key is optional; a missing file section falls back to the defaults
/// the triage channel has always used.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ReportSettings {
    /// Base URL of the Jira instance.
    #[serde(default = "default_jira_server")]
    pub jira_server: String,

    /// Custom field id of the reporting user.
    #[serde(default = "default_reporter_field")]
    pub reporter_field: String,

    /// Custom field id of the reporter's email domain.
    #[serde(default = "default_email_domain_field")]
    pub email_domain_field: String,

    /// URL of the secondary "focus" query in the header.
    #[serde(default = "default_focus_link")]
    pub focus_link: String,

    /// Page size of the single search request.
    #[serde(default = "default_max_results")]
    pub max_results: u32,

    /// Handlebars template for the header sentence.
    #[serde(default = "default_header_template")]
    pub header_template: String,
}

pub(crate) fn default_jira_server() -> String {
    DEFAULT_JIRA_SERVER.to_string()
}

pub(crate) fn default_reporter_field() -> String {
    DEFAULT_REPORTER_FIELD.to_string()
}

pub(crate) fn default_email_domain_field() -> String {
    DEFAULT_EMAIL_DOMAIN_FIELD.to_string()
}

pub(crate) fn default_focus_link() -> String {
    DEFAULT_FOCUS_LINK.to_string()
}

pub(crate) fn default_max_results() -> u32 {
    DEFAULT_MAX_RESULTS
}

pub(crate) fn default_header_template() -> String {
    DEFAULT_HEADER_TEMPLATE.to_string()
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            jira_server: default_jira_server(),
            reporter_field: default_reporter_field(),
            email_domain_field: default_email_domain_field(),
            focus_link: default_focus_link(),
            max_results: default_max_results(),
            header_template: default_header_template(),
        }
    }
}

impl ReportSettings {
    /// Loads and validates settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, is not valid TOML,
    /// or fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading report settings");

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        let settings: Self = toml::from_str(&content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })?;

        settings.validate(path)?;
        Ok(settings)
    }

    /// Validates the settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] naming the first offending key.
    pub fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::ValidationError {
            path: path.display().to_string(),
            message,
        };

        if let Err(e) = Url::parse(&self.jira_server) {
            return Err(invalid(format!("jira-server is not a valid URL: {e}")));
        }
        if let Err(e) = Url::parse(&self.focus_link) {
            return Err(invalid(format!("focus-link is not a valid URL: {e}")));
        }
        if self.reporter_field.trim().is_empty() {
            return Err(invalid("reporter-field cannot be empty".to_string()));
        }
        if self.email_domain_field.trim().is_empty() {
            return Err(invalid("email-domain-field cannot be empty".to_string()));
        }
        if self.max_results == 0 {
            return Err(invalid("max-results must be greater than 0".to_string()));
        }
        if self.header_template.trim().is_empty() {
            return Err(invalid("header-template cannot be empty".to_string()));
        }

        Ok(())
    }

    /// Overrides the Jira server, as the `--jira-server` flag does.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if `server` is not a URL.
    pub fn with_jira_server(mut self, server: &str) -> Result<Self, ConfigError> {
        Url::parse(server).map_err(|e| ConfigError::InvalidUrl {
            name: "Jira server",
            value: server.to_string(),
            source: e,
        })?;
        self.jira_server = server.to_string();
        Ok(self)
    }

    /// Jira base URL without a trailing slash.
    #[must_use]
    pub fn jira_base(&self) -> &str {
        self.jira_server.trim_end_matches('/')
    }

    /// Permanent link to a ticket, e.g. `https://issues.redhat.com/browse/AITRIAGE-1`.
    #[must_use]
    pub fn permalink(&self, key: &str) -> String {
        format!("{}/browse/{}", self.jira_base(), key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn empty_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");
        fs::write(&path, "").unwrap();

        let settings = ReportSettings::load(&path).unwrap();
        assert_eq!(settings, ReportSettings::default());
        assert_eq!(settings.reporter_field, "customfield_12319044");
        assert_eq!(settings.email_domain_field, "customfield_12319045");
        assert_eq!(settings.max_results, 50);
    }

    #[test]
    fn can_override_fields() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");
        fs::write(
            &path,
            r#"
jira-server = "https://jira.example.com/"
reporter-field = "customfield_1"
max-results = 10
"#,
        )
        .unwrap();

        let settings = ReportSettings::load(&path).unwrap();
        assert_eq!(settings.jira_server, "https://jira.example.com/");
        assert_eq!(settings.jira_base(), "https://jira.example.com");
        assert_eq!(settings.reporter_field, "customfield_1");
        assert_eq!(settings.email_domain_field, DEFAULT_EMAIL_DOMAIN_FIELD);
        assert_eq!(settings.max_results, 10);
    }

    #[test]
    fn rejects_invalid_server() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");
        fs::write(&path, "jira-server = \"not a url\"\n").unwrap();

        let result = ReportSettings::load(&path);
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn rejects_zero_max_results() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");
        fs::write(&path, "max-results = 0\n").unwrap();

        let result = ReportSettings::load(&path);
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn rejects_unknown_keys() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");
        fs::write(&path, "webhook = \"https://example.com\"\n").unwrap();

        let result = ReportSettings::load(&path);
        assert!(matches!(result, Err(ConfigError::TomlError { .. })));
    }

    #[test]
    fn missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();

        let result = ReportSettings::load(&temp.path().join("nope.toml"));
        assert!(matches!(result, Err(ConfigError::IoError { .. })));
    }

    #[test]
    fn builds_permalink() {
        let settings = ReportSettings::default();
        assert_eq!(
            settings.permalink("AITRIAGE-1"),
            "https://issues.redhat.com/browse/AITRIAGE-1"
        );
    }

    #[test]
    fn server_override_must_be_url() {
        let result = ReportSettings::default().with_jira_server("::nope");
        assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));

        let settings = ReportSettings::default()
            .with_jira_server("https://jira.example.com")
            .unwrap();
        assert_eq!(settings.jira_server, "https://jira.example.com");
    }
}
