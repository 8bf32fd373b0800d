//! Report settings loading.
//!
//! Settings live in an optional TOML file. Every key has a default, so the
//! tool runs with no file at all.
//!
//! ```toml
//! jira-server = "https://issues.redhat.com"
//! reporter-field = "customfield_12319044"
//! email-domain-field = "customfield_12319045"
//! max-results = 50
//! ```

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::{
    ReportSettings, DEFAULT_EMAIL_DOMAIN_FIELD, DEFAULT_FOCUS_LINK, DEFAULT_JIRA_SERVER,
    DEFAULT_MAX_RESULTS, DEFAULT_REPORTER_FIELD,
};

use std::path::Path;
use tracing::info;

/// Loads settings from `path`, or returns the defaults when no path is given.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file cannot be loaded or is invalid.
pub fn load_settings(path: Option<&Path>) -> Result<ReportSettings, ConfigError> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "Loading settings file");
            ReportSettings::load(path)
        }
        None => Ok(ReportSettings::default()),
    }
}
