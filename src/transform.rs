//! Conversion of source markup into HTML body content.

use pulldown_cmark::{html, Options, Parser};

pub trait ContentTransformer {
    /// Convert raw source text into HTML markup.
    fn transform(&self, source: &str) -> String;
}

/// CommonMark with tables, footnotes, strikethrough, and task lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownTransformer;

impl ContentTransformer for MarkdownTransformer {
    fn transform(&self, source: &str) -> String {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);

        let parser = Parser::new_ext(source, options);
        let mut body = String::with_capacity(source.len() * 3 / 2);
        html::push_html(&mut body, parser);
        body
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn headings_and_paragraphs() {
        let html = MarkdownTransformer.transform("# Hello\nBody text.");
        assert!(html.contains("<h1>Hello</h1>"));
        assert!(html.contains("<p>Body text.</p>"));
    }

    #[test]
    fn tables_are_enabled() {
        let html = MarkdownTransformer.transform("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<table>"));
        assert!(html.contains("<th>a</th>"));
        assert!(html.contains("<td>2</td>"));
    }

    #[test]
    fn code_blocks_are_escaped() {
        let html = MarkdownTransformer.transform("```\n<b>not bold</b>\n```\n");
        assert!(html.contains("<pre><code>&lt;b&gt;not bold&lt;/b&gt;"));
    }
}
