use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about)]
pub struct Cli {
    /// The Markdown file to convert
    pub input: PathBuf,

    /// Output file path. Defaults to the input path with a `.pdf` extension
    /// (`.html` with `--html`)
    #[clap(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file to use instead of searching for `md2pdf.toml`
    #[clap(short, long, conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Ignore all configuration files and use the defaults only
    #[clap(long)]
    pub no_config: bool,

    /// Write the intermediate HTML document instead of rendering a PDF
    #[clap(long)]
    pub html: bool,

    /// Renderer program to run instead of `xhtml2pdf` from the PATH
    #[clap(long, env = "MD2PDF_RENDERER")]
    pub renderer: Option<PathBuf>,

    /// Print the resolved configuration as TOML and exit
    #[clap(long)]
    pub print_config: bool,

    /// Log which configuration is used and what the renderer reports
    #[clap(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(output) => output.clone(),
            None => {
                let extension = if self.html { "html" } else { "pdf" };
                self.input.with_extension(extension)
            }
        }
    }
}
