//! The conversion pipeline: configuration, metadata, body, document, render.

use crate::config::{Configuration, RawConfiguration};
use crate::document::build_document;
use crate::metadata::Metadata;
use crate::render::DocumentRenderer;
use crate::transform::ContentTransformer;
use anyhow::{bail, Context, Result};
use std::path::Path;

/// Convert the document at `input` into `output`.
///
/// The raw source text is read once and given to both the title scan and the
/// transformer. If the renderer fails or reports errors, whatever it wrote to
/// `output` is removed.
pub fn convert(
    input: &Path,
    output: &Path,
    raw: &RawConfiguration,
    transformer: &dyn ContentTransformer,
    renderer: &dyn DocumentRenderer,
) -> Result<()> {
    let config = Configuration::from_raw(raw);

    let source = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let metadata = Metadata::extract(input, &source);
    log::info!("Document title: {}", metadata.title);

    let body = transformer.transform(&source);
    let document = build_document(&body, &config, &metadata)
        .with_context(|| format!("Failed to assemble document for {}", input.display()))?;

    let report = match renderer.render(&document, output) {
        Ok(report) => report,
        Err(e) => {
            discard_output(output);
            return Err(e).with_context(|| format!("Failed to render {}", output.display()));
        }
    };

    if report.error_count > 0 {
        discard_output(output);
        bail!("PDF generation failed with {} errors", report.error_count);
    }

    Ok(())
}

fn discard_output(output: &Path) {
    if output.exists() {
        if let Err(e) = std::fs::remove_file(output) {
            log::warn!("Failed to remove partial output {}: {e}", output.display());
        }
    }
}
