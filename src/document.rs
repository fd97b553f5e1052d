//! Intermediate document assembly.
//!
//! Combines the rendered header/footer regions, the optional title page, the
//! generated stylesheet, and the transformed body into one HTML document for
//! the renderer. The header and footer containers are written before the body;
//! their on-page position is decided by the `@frame` rules, not by markup order.

use crate::config::Configuration;
use crate::metadata::Metadata;
use crate::styles::{self, FOOTER_CONTAINER_ID, HEADER_CONTAINER_ID, TITLE_PAGE_CLASS};
use crate::templates::TemplateRenderer;
use anyhow::{Context, Result};

/// Directive asking xhtml2pdf to start a new page.
const PAGE_BREAK_DIRECTIVE: &str = "<pdf:nextpage />";

/// Build the complete intermediate document.
pub fn build_document(body: &str, config: &Configuration, metadata: &Metadata) -> Result<String> {
    let templates = TemplateRenderer::new();

    let footer_html = templates
        .render(&config.footer.content, metadata)
        .with_context(|| "Failed to render footer template")?;
    let header_html = templates
        .render(&config.header.content, metadata)
        .with_context(|| "Failed to render header template")?;
    let title_page_html = if config.title_page.enabled {
        templates
            .render(&config.title_page.content, metadata)
            .with_context(|| "Failed to render title page template")?
    } else {
        None
    };

    let stylesheet = styles::generate_stylesheet(config);

    let header_div = container(HEADER_CONTAINER_ID, header_html);
    let footer_div = container(FOOTER_CONTAINER_ID, footer_html);
    let title_page = match title_page_html {
        Some(html) if !html.is_empty() => format!(
            r#"<div class="{TITLE_PAGE_CLASS}">{html}</div>{PAGE_BREAK_DIRECTIVE}"#
        ),
        _ => String::new(),
    };

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>
{stylesheet}
    </style>
</head>
<body>
    {header_div}
    {footer_div}
    {title_page}
    {body}
</body>
</html>"#,
        title = html_escape::encode_text(&metadata.title),
    ))
}

/// Wrap rendered region content in its frame source element. Regions with no
/// content produce no element at all.
fn container(id: &str, html: Option<String>) -> String {
    match html {
        Some(html) if !html.is_empty() => format!(r#"<div id="{id}">{html}</div>"#),
        _ => String::new(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn metadata() -> Metadata {
        Metadata {
            title: "Hello & Goodbye".to_string(),
            filename: "doc.md".to_string(),
            date: "2024-03-09".to_string(),
            datetime: "2024-03-09 14:05".to_string(),
        }
    }

    #[test]
    fn empty_regions_are_omitted() {
        let document = build_document("<p>Body</p>", &Configuration::default(), &metadata())
            .expect("can build document");
        assert!(!document.contains(r#"id="header_div""#));
        assert!(!document.contains(r#"id="footer_div""#));
        assert!(document.contains("<p>Body</p>"));
    }

    #[test]
    fn header_and_footer_precede_body() {
        let mut config = Configuration::default();
        config.header.content = "{{title}}".to_string();
        config.footer.content = "{{date}}".to_string();
        let document =
            build_document("<p>Body</p>", &config, &metadata()).expect("can build document");

        let header = document
            .find(r#"<div id="header_div">Hello & Goodbye</div>"#)
            .expect("has header container");
        let footer = document
            .find(r#"<div id="footer_div">2024-03-09</div>"#)
            .expect("has footer container");
        let body = document.find("<p>Body</p>").expect("has body");
        assert!(header < footer);
        assert!(footer < body);
    }

    #[test]
    fn head_carries_escaped_title_and_stylesheet() {
        let document = build_document("", &Configuration::default(), &metadata())
            .expect("can build document");
        assert!(document.contains("<title>Hello &amp; Goodbye</title>"));
        assert!(document.contains("@page {"));
        let style = document.find("<style>").expect("has style element");
        let body = document.find("<body>").expect("has body element");
        assert!(style < body);
    }

    #[test]
    fn footer_template_error_aborts() {
        let mut config = Configuration::default();
        config.footer.content = "{{page}}".to_string();
        let error = build_document("", &config, &metadata()).expect_err("unknown variable");
        assert!(format!("{error:#}").contains("footer"));
    }

    #[test]
    fn title_page_is_rendered_when_enabled() {
        let mut config = Configuration::default();
        config.title_page.enabled = true;
        let document = build_document("<p>Body</p>", &config, &metadata())
            .expect("can build document");
        let title_page = document
            .find(r#"<div class="title-page"><h1>Hello & Goodbye</h1>"#)
            .expect("has title page");
        let page_break = document.find("<pdf:nextpage />").expect("has page break");
        let body = document.find("<p>Body</p>").expect("has body");
        assert!(title_page < page_break);
        assert!(page_break < body);
    }

    #[test]
    fn title_page_is_absent_by_default() {
        let document = build_document("", &Configuration::default(), &metadata())
            .expect("can build document");
        assert!(!document.contains(r#"class="title-page""#));
        assert!(!document.contains("<pdf:nextpage />"));
    }

    #[test]
    fn identical_inputs_give_identical_documents() {
        let mut config = Configuration::default();
        config.footer.content = "{{filename}}".to_string();
        let first = build_document("<p>x</p>", &config, &metadata()).expect("can build document");
        let second = build_document("<p>x</p>", &config, &metadata()).expect("can build document");
        assert_eq!(first, second);
    }
}
