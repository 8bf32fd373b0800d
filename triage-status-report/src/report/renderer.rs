//! Report renderer.

use super::{render_table, ReportContext, TemplateError, CODE_FENCE};
use crate::issues::IssueData;
use handlebars::{no_escape, Handlebars};
use tracing::debug;

const HEADER: &str = "header";

/// Creates a Handlebars registry suited to chat markup.
///
/// The registry is configured with:
/// - No HTML escaping (Slack links use `<url|text>`)
/// - Strict mode (catches missing variables)
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();
    hbs.register_escape_fn(no_escape);
    hbs.set_strict_mode(true);
    hbs
}

/// Builds the report text posted to the channel.
pub struct ReportRenderer {
    handlebars: Handlebars<'static>,
}

impl ReportRenderer {
    /// Creates a renderer with the given header template.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::InvalidHeader`] if the template does not parse.
    pub fn new(header_template: &str) -> Result<Self, TemplateError> {
        let mut handlebars = create_handlebars_registry();
        handlebars.register_template_string(HEADER, header_template)?;
        Ok(Self { handlebars })
    }

    /// Renders only the header sentence.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Render`] if the template references an
    /// unknown variable.
    pub fn render_header(&self, context: &ReportContext) -> Result<String, TemplateError> {
        Ok(self.handlebars.render(HEADER, context)?)
    }

    /// Sorts `issues` and renders the complete report: header, then the
    /// table wrapped in a code fence. An empty batch yields the header alone.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] if the header cannot be rendered.
    pub fn build_report(
        &self,
        mut issues: Vec<IssueData>,
        context: &ReportContext,
    ) -> Result<String, TemplateError> {
        issues.sort();

        let mut text = self.render_header(context)?;
        let table = render_table(&issues);
        debug!(rows = issues.len(), "Rendered report table");

        if !table.is_empty() {
            text.push_str(CODE_FENCE);
            text.push_str(&table);
            text.push_str(CODE_FENCE);
        }

        Ok(text)
    }
}
