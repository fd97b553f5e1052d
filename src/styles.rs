//! CSS generation for the intermediate document.
//!
//! The generated stylesheet contains:
//!
//! - `@font-face` rules for each configured custom font
//! - An `@page` rule carrying the page size and margins, with `@frame` regions
//!   for the header and footer
//! - Rules that move the header/footer containers off-page, since xhtml2pdf
//!   pulls their content into the frames and would otherwise also lay them out
//!   in the body
//! - Base typography for body text and common Markdown elements
//!
//! Only the font settings, margins, page size, and region heights come from the
//! configuration. Colours and spacing are fixed.

use crate::config::{Configuration, FontFace};
use std::fmt::Write;

/// Element id of the container pulled into the header frame.
pub const HEADER_CONTAINER_ID: &str = "header_div";
/// Element id of the container pulled into the footer frame.
pub const FOOTER_CONTAINER_ID: &str = "footer_div";
/// Class of the title page container.
pub const TITLE_PAGE_CLASS: &str = "title-page";
/// Distance between a frame and its page edge.
const FRAME_EDGE_OFFSET: &str = "0.5cm";

/// Generate the complete stylesheet for `config`.
pub fn generate_stylesheet(config: &Configuration) -> String {
    let mut css = String::with_capacity(4096);

    css.push_str(&generate_font_faces(&config.fonts));
    css.push_str(&generate_page_rules(config));
    css.push_str(&generate_container_rules());
    css.push_str(&generate_base_styles(config));

    css
}

fn generate_font_faces(fonts: &[FontFace]) -> String {
    let mut css = String::new();
    for face in fonts {
        let _ = write!(
            css,
            r#"@font-face {{
    font-family: "{family}";
    src: url("{src}");
    font-weight: {weight};
    font-style: {style};
}}

"#,
            family = face.family,
            src = face.src,
            weight = face.weight,
            style = face.style,
        );
    }
    css
}

/// The `@page` rule with its header and footer frames.
fn generate_page_rules(config: &Configuration) -> String {
    let margins = &config.margins;
    format!(
        r#"@page {{
    size: {size};
    margin: {top} {right} {bottom} {left};

    @frame header {{
        -pdf-frame-content: {header_id};
        top: {offset};
        margin-left: {left};
        margin-right: {right};
        height: {header_height};
    }}

    @frame footer {{
        -pdf-frame-content: {footer_id};
        bottom: {offset};
        margin-left: {left};
        margin-right: {right};
        height: {footer_height};
    }}
}}
"#,
        size = config.page_size,
        top = margins.top,
        right = margins.right,
        bottom = margins.bottom,
        left = margins.left,
        header_id = HEADER_CONTAINER_ID,
        footer_id = FOOTER_CONTAINER_ID,
        offset = FRAME_EDGE_OFFSET,
        header_height = config.header.height,
        footer_height = config.footer.height,
    )
}

fn generate_container_rules() -> String {
    format!(
        r#"
/* Frame sources, copied into the page frames */
#{HEADER_CONTAINER_ID} {{
    position: absolute;
    top: -1000pt;
}}

#{FOOTER_CONTAINER_ID} {{
    position: absolute;
    top: -1000pt;
}}

.{TITLE_PAGE_CLASS} {{
    text-align: center;
    padding-top: 6cm;
}}
"#
    )
}

fn generate_base_styles(config: &Configuration) -> String {
    format!(
        r#"
/* Base typography */
body {{
    font-family: {family};
    font-size: {size};
    line-height: {line_height};
    color: #1a1a1a;
}}

/* Headings */
h1, h2, h3, h4, h5, h6 {{
    margin-top: 1.2em;
    margin-bottom: 0.5em;
    line-height: 1.3;
}}

h1 {{ font-size: 1.8em; }}
h2 {{ font-size: 1.5em; }}
h3 {{ font-size: 1.3em; }}
h4 {{ font-size: 1.15em; }}
h5 {{ font-size: 1.05em; }}
h6 {{ font-size: 1em; color: #444; }}

h1:first-child, h2:first-child, h3:first-child {{
    margin-top: 0;
}}

p {{
    margin-top: 0;
    margin-bottom: 0.8em;
}}

/* Code */
pre {{
    background-color: #f5f5f5;
    padding: 0.8em;
    font-family: "Courier New", Courier, monospace;
    font-size: 0.85em;
    white-space: pre-wrap;
    word-wrap: break-word;
}}

code {{
    font-family: "Courier New", Courier, monospace;
    font-size: 0.9em;
    background-color: #f5f5f5;
    padding: 0.1em 0.3em;
}}

pre code {{
    background: none;
    padding: 0;
}}

blockquote {{
    margin: 1em 0;
    padding-left: 1em;
    border-left: 3px solid #ddd;
    color: #666;
}}

ul, ol {{
    margin: 0.8em 0;
    padding-left: 1.5em;
}}

li {{
    margin-bottom: 0.2em;
}}

a {{
    color: #0066cc;
    text-decoration: none;
}}

img {{
    max-width: 100%;
    height: auto;
}}

/* Tables */
table {{
    width: 100%;
    border-collapse: collapse;
    margin: 1em 0;
}}

th, td {{
    padding: 0.4em;
    text-align: left;
    border-bottom: 1px solid #ddd;
}}

th {{
    font-weight: bold;
    background-color: #f5f5f5;
}}

hr {{
    border: none;
    border-top: 1px solid #ddd;
    margin: 1.5em 0;
}}
"#,
        family = config.font.family,
        size = config.font.size,
        line_height = config.font.line_height,
    )
}
