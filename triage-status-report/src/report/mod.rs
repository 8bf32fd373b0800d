//! Report formatting.
//!
//! A report is a header sentence linking to the filter and to a focus query,
//! followed by one fixed-width line per issue inside a code fence.

mod error;
mod renderer;

pub use error::TemplateError;
pub use renderer::{create_handlebars_registry, ReportRenderer};

use crate::issues::IssueData;
use serde::Serialize;
use std::fmt::Write;

/// Minimum width of the user and email domain columns.
pub const COLUMN_WIDTH: usize = 15;

/// Chat markup delimiting preformatted text.
pub const CODE_FENCE: &str = "```";

/// Default header sentence.
pub const DEFAULT_HEADER_TEMPLATE: &str = "There are <{{filter_url}}|{{total_issues}} new triage tickets> but please focus on <{{focus_url}}|these> from the past week because we had a low success rate with 4.12 clusters recently\n";

/// Values available to the header template.
#[derive(Debug, Clone, Serialize)]
pub struct ReportContext {
    /// Number of issues returned by the filter, before normalization.
    pub total_issues: usize,

    /// Browsable URL of the filter.
    pub filter_url: String,

    /// URL of the secondary focus query.
    pub focus_url: String,
}

/// Formats a feature list as `['a', 'b']`, the form the channel has always
/// received.
#[must_use]
pub fn format_features(features: &[String]) -> String {
    let quoted: Vec<String> = features.iter().map(|f| quote(f)).collect();
    format!("[{}]", quoted.join(", "))
}

fn quote(value: &str) -> String {
    let delimiter = if value.contains('\'') && !value.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push(delimiter);
    for c in value.chars() {
        match c {
            '\t' => quoted.push_str("\\t"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\\' => quoted.push_str("\\\\"),
            c if c == delimiter => {
                quoted.push('\\');
                quoted.push(c);
            }
            // Cc covers C0, DEL and C1, all of which fit in one byte.
            c if c.is_control() => {
                let _ = write!(quoted, "\\x{:02x}", u32::from(c));
            }
            c => quoted.push(c),
        }
    }
    quoted.push(delimiter);
    quoted
}

/// Renders one table line, newline-terminated.
#[must_use]
pub fn render_row(issue: &IssueData) -> String {
    format!(
        "<{}|{}>   {:<width$} {:<width$} {}\n",
        issue.url,
        issue.key,
        issue.user,
        issue.email_domain,
        format_features(&issue.features),
        width = COLUMN_WIDTH,
    )
}

/// Renders all issues in the given order. Empty input gives an empty string.
#[must_use]
pub fn render_table(issues: &[IssueData]) -> String {
    issues.iter().map(render_row).collect()
}
