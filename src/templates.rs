//! Header, footer, and title page template rendering.
//!
//! Templates are handlebars strings with the [`Metadata`] fields available as
//! variables: `{{title}}`, `{{filename}}`, `{{date}}`, `{{datetime}}`.
//! Strict mode is enabled, so referencing any other variable is an error.
//! Values are inserted as-is, without HTML escaping, since the templates are
//! themselves markup.
//!
//! Page numbers are only known once the renderer paginates, so two marker
//! elements are rewritten into xhtml2pdf's own directives before templating:
//! - `<span class="page-number"></span>` becomes `<pdf:pagenumber>`
//! - `<span class="page-count"></span>` becomes `<pdf:pagecount>`

use crate::metadata::Metadata;
use anyhow::Result;
use handlebars::Handlebars;

pub const PAGE_NUMBER_PLACEHOLDER: &str = r#"<span class="page-number"></span>"#;
pub const PAGE_COUNT_PLACEHOLDER: &str = r#"<span class="page-count"></span>"#;
pub const PAGE_NUMBER_DIRECTIVE: &str = "<pdf:pagenumber>";
pub const PAGE_COUNT_DIRECTIVE: &str = "<pdf:pagecount>";

pub struct TemplateRenderer {
    registry: Handlebars<'static>,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);
        Self { registry }
    }
}

impl TemplateRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `content` with `metadata`.
    ///
    /// Returns `None` for empty content so the region can be omitted.
    pub fn render(&self, content: &str, metadata: &Metadata) -> Result<Option<String>> {
        if content.is_empty() {
            return Ok(None);
        }

        let content = convert_page_placeholders(content);
        let rendered = self.registry.render_template(&content, metadata)?;
        Ok(Some(rendered))
    }
}

/// Rewrite the page number and page count markers into renderer directives.
pub fn convert_page_placeholders(content: &str) -> String {
    content
        .replace(PAGE_NUMBER_PLACEHOLDER, PAGE_NUMBER_DIRECTIVE)
        .replace(PAGE_COUNT_PLACEHOLDER, PAGE_COUNT_DIRECTIVE)
}
