//! Header template error types.

/// The report header could not be produced from its Handlebars template.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// The header references a variable the report does not provide.
    #[error("Failed to render the report header: {0}")]
    Render(#[from] handlebars::RenderError),

    /// The `header-template` setting does not parse.
    #[error("Invalid header-template setting: {0}")]
    InvalidHeader(#[from] handlebars::TemplateError),
}
