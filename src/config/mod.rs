//! Document configuration.
//!
//! A [`Configuration`] is built once per conversion by merging a partial
//! [`RawConfiguration`] (as loaded from a user's `md2pdf.toml`) over the
//! compiled-in defaults. Groups such as `font` or `margins` are merged field by
//! field: a group present in the raw configuration only overrides the fields it
//! names. `fonts` and `page_size` are replaced wholesale when present.
//!
//! No values are validated here. Unit strings, font paths and page sizes are
//! passed through to the stylesheet untouched.

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod discovery;

/// Body text typography.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontConfig {
    /// Font fallback list, emitted verbatim as a CSS `font-family` value
    pub family: String,
    /// Body font size including its unit, e.g. `11pt`
    pub size: String,
    /// Unitless line height multiplier
    pub line_height: f64,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif".to_string(),
            size: "11pt".to_string(),
            line_height: 1.5,
        }
    }
}

/// A custom font registration, emitted as an `@font-face` rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontFace {
    pub family: String,
    /// Path or URL of the font file
    pub src: String,
    /// `normal`, `bold`, or a numeric weight from `100` to `900`
    pub weight: String,
    /// `normal` or `italic`
    pub style: String,
}

impl Default for FontFace {
    fn default() -> Self {
        Self {
            family: String::new(),
            src: String::new(),
            weight: "normal".to_string(),
            style: "normal".to_string(),
        }
    }
}

/// Page margins. Each value is a CSS length such as `2cm`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarginsConfig {
    pub top: String,
    pub bottom: String,
    pub left: String,
    pub right: String,
}

impl Default for MarginsConfig {
    fn default() -> Self {
        Self {
            top: "2.5cm".to_string(),
            bottom: "2.5cm".to_string(),
            left: "2cm".to_string(),
            right: "2cm".to_string(),
        }
    }
}

/// Page geometry: either a named format (`A4`, `letter landscape`) or an
/// explicit pair of lengths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageSize {
    Named(String),
    Dimensions { width: String, height: String },
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::Named("A4".to_string())
    }
}

/// Formats the page size as a CSS `size` value.
impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSize::Named(name) => write!(f, "{name}"),
            PageSize::Dimensions { width, height } => write!(f, "{width} {height}"),
        }
    }
}

/// A repeating page region (header or footer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderFooterConfig {
    /// Template content. Empty string disables the region.
    pub content: String,
    /// Height of the region's frame, e.g. `1.5cm`
    pub height: String,
}

impl Default for HeaderFooterConfig {
    fn default() -> Self {
        Self {
            content: String::new(),
            height: "1.5cm".to_string(),
        }
    }
}

/// Optional title page placed before the document body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitlePageConfig {
    pub enabled: bool,
    /// Template content, rendered with the same variables as headers and footers
    pub content: String,
}

impl Default for TitlePageConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            content: default_title_page_template(),
        }
    }
}

pub fn default_title_page_template() -> String {
    "<h1>{{title}}</h1>\n<p>{{date}}</p>".to_string()
}

/// Fully resolved settings for one conversion.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Configuration {
    pub page_size: PageSize,
    pub font: FontConfig,
    pub fonts: Vec<FontFace>,
    pub margins: MarginsConfig,
    pub header: HeaderFooterConfig,
    pub footer: HeaderFooterConfig,
    pub title_page: TitlePageConfig,
}

impl Configuration {
    /// Merge a raw configuration over the compiled-in defaults.
    pub fn from_raw(raw: &RawConfiguration) -> Configuration {
        merge(&Configuration::default(), raw)
    }
}

/// User configuration as written, with every group and field optional.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RawConfiguration {
    pub font: Option<RawFontConfig>,
    pub fonts: Option<Vec<RawFontFace>>,
    pub margins: Option<RawMarginsConfig>,
    pub page_size: Option<PageSize>,
    pub header: Option<RawHeaderFooterConfig>,
    pub footer: Option<RawHeaderFooterConfig>,
    pub title_page: Option<RawTitlePageConfig>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RawFontConfig {
    pub family: Option<String>,
    pub size: Option<String>,
    pub line_height: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct RawFontFace {
    pub family: Option<String>,
    pub src: Option<String>,
    pub weight: Option<String>,
    pub style: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct RawMarginsConfig {
    pub top: Option<String>,
    pub bottom: Option<String>,
    pub left: Option<String>,
    pub right: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct RawHeaderFooterConfig {
    pub content: Option<String>,
    pub height: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct RawTitlePageConfig {
    pub enabled: Option<bool>,
    pub content: Option<String>,
}

/// A partially specified group that can be laid over a complete one.
trait Overlay<T> {
    fn overlay(&self, base: &T) -> T;
}

impl Overlay<FontConfig> for RawFontConfig {
    fn overlay(&self, base: &FontConfig) -> FontConfig {
        FontConfig {
            family: self.family.clone().unwrap_or_else(|| base.family.clone()),
            size: self.size.clone().unwrap_or_else(|| base.size.clone()),
            line_height: self.line_height.unwrap_or(base.line_height),
        }
    }
}

impl Overlay<FontFace> for RawFontFace {
    fn overlay(&self, base: &FontFace) -> FontFace {
        FontFace {
            family: self.family.clone().unwrap_or_else(|| base.family.clone()),
            src: self.src.clone().unwrap_or_else(|| base.src.clone()),
            weight: self.weight.clone().unwrap_or_else(|| base.weight.clone()),
            style: self.style.clone().unwrap_or_else(|| base.style.clone()),
        }
    }
}

impl Overlay<MarginsConfig> for RawMarginsConfig {
    fn overlay(&self, base: &MarginsConfig) -> MarginsConfig {
        MarginsConfig {
            top: self.top.clone().unwrap_or_else(|| base.top.clone()),
            bottom: self.bottom.clone().unwrap_or_else(|| base.bottom.clone()),
            left: self.left.clone().unwrap_or_else(|| base.left.clone()),
            right: self.right.clone().unwrap_or_else(|| base.right.clone()),
        }
    }
}

impl Overlay<HeaderFooterConfig> for RawHeaderFooterConfig {
    fn overlay(&self, base: &HeaderFooterConfig) -> HeaderFooterConfig {
        HeaderFooterConfig {
            content: self.content.clone().unwrap_or_else(|| base.content.clone()),
            height: self.height.clone().unwrap_or_else(|| base.height.clone()),
        }
    }
}

impl Overlay<TitlePageConfig> for RawTitlePageConfig {
    fn overlay(&self, base: &TitlePageConfig) -> TitlePageConfig {
        TitlePageConfig {
            enabled: self.enabled.unwrap_or(base.enabled),
            content: self.content.clone().unwrap_or_else(|| base.content.clone()),
        }
    }
}

fn group<R: Overlay<T>, T: Clone>(raw: Option<&R>, base: &T) -> T {
    match raw {
        Some(raw) => raw.overlay(base),
        None => base.clone(),
    }
}

/// Merge `raw` over `defaults`, producing a new configuration.
///
/// Each font face in `raw.fonts` is resolved against [`FontFace::default`]
/// on its own, never against a neighbouring entry.
pub fn merge(defaults: &Configuration, raw: &RawConfiguration) -> Configuration {
    let fonts = match &raw.fonts {
        Some(faces) => {
            let base = FontFace::default();
            faces.iter().map(|face| face.overlay(&base)).collect()
        }
        None => defaults.fonts.clone(),
    };

    Configuration {
        page_size: raw
            .page_size
            .clone()
            .unwrap_or_else(|| defaults.page_size.clone()),
        font: group(raw.font.as_ref(), &defaults.font),
        fonts,
        margins: group(raw.margins.as_ref(), &defaults.margins),
        header: group(raw.header.as_ref(), &defaults.header),
        footer: group(raw.footer.as_ref(), &defaults.footer),
        title_page: group(raw.title_page.as_ref(), &defaults.title_page),
    }
}
