//! Final rendering of the intermediate document.
//!
//! The PDF itself is produced by an external program (xhtml2pdf), which
//! understands the `@frame` rules and `<pdf:...>` directives emitted by the
//! document assembler. [`HtmlRenderer`] skips that step and writes the
//! intermediate document directly, which is handy for inspecting the output.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

/// Outcome of a render that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderReport {
    /// Number of errors the renderer reported; any nonzero count is a failure
    pub error_count: usize,
}

pub trait DocumentRenderer {
    /// Render `document` into the file at `output`.
    fn render(&self, document: &str, output: &Path) -> Result<RenderReport>;
}

/// Renders PDFs by running the `xhtml2pdf` command line tool.
#[derive(Debug, Clone)]
pub struct Xhtml2PdfRenderer {
    program: PathBuf,
}

impl Xhtml2PdfRenderer {
    pub const PROGRAM: &'static str = "xhtml2pdf";

    pub fn new<P: Into<PathBuf>>(program: P) -> Xhtml2PdfRenderer {
        Xhtml2PdfRenderer {
            program: program.into(),
        }
    }

    /// Find `xhtml2pdf` on the `PATH`.
    pub fn locate() -> Result<Xhtml2PdfRenderer> {
        let program = which::which(Self::PROGRAM)
            .with_context(|| format!("Could not find `{}` on the PATH", Self::PROGRAM))?;
        Ok(Xhtml2PdfRenderer::new(program))
    }
}

impl DocumentRenderer for Xhtml2PdfRenderer {
    fn render(&self, document: &str, output: &Path) -> Result<RenderReport> {
        let mut source = tempfile::Builder::new()
            .prefix("md2pdf-")
            .suffix(".html")
            .tempfile()
            .with_context(|| "Failed to create temporary HTML file")?;
        source
            .write_all(document.as_bytes())
            .and_then(|_| source.flush())
            .with_context(|| {
                format!(
                    "Failed to write temporary HTML file {}",
                    source.path().display()
                )
            })?;

        log::info!("Running {}", self.program.display());
        let result = Command::new(&self.program)
            .arg(source.path())
            .arg(output)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .with_context(|| format!("Failed to launch `{}`", self.program.display()))?;

        let stderr = String::from_utf8_lossy(&result.stderr);
        for line in stderr.lines().filter(|line| !line.trim().is_empty()) {
            log::warn!("{}: {line}", Self::PROGRAM);
        }

        let error_count = exit_error_count(result.status);
        log::debug!("{} finished with {error_count} errors", Self::PROGRAM);
        Ok(RenderReport { error_count })
    }
}

/// A failing exit counts as at least one error.
fn exit_error_count(status: ExitStatus) -> usize {
    if status.success() {
        0
    } else {
        status
            .code()
            .map_or(1, |code| code.unsigned_abs() as usize)
            .max(1)
    }
}

/// Writes the intermediate document itself to the output path.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl DocumentRenderer for HtmlRenderer {
    fn render(&self, document: &str, output: &Path) -> Result<RenderReport> {
        std::fs::write(output, document)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        Ok(RenderReport::default())
    }
}
