use anyhow::{Context, Result};
use cli::Cli;
use config::{discovery, Configuration, RawConfiguration};
use render::{DocumentRenderer, HtmlRenderer, Xhtml2PdfRenderer};
use std::process::ExitCode;
use transform::MarkdownTransformer;

mod cli;
mod config;
mod convert;
mod document;
mod metadata;
mod render;
mod styles;
mod templates;
mod transform;

fn main() -> ExitCode {
    if let Err(e) = try_main() {
        eprintln!("{}: {e:#}", console::style("Error").red());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main() -> Result<()> {
    use clap::Parser;
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let raw = load_raw_config(&cli)?;

    if cli.print_config {
        let config = Configuration::from_raw(&raw);
        let toml = toml::to_string(&config).with_context(|| "Failed to serialize configuration")?;
        print!("{toml}");
        return Ok(());
    }

    let output = cli.output_path();
    let renderer: Box<dyn DocumentRenderer> = if cli.html {
        Box::new(HtmlRenderer)
    } else {
        match &cli.renderer {
            Some(program) => Box::new(Xhtml2PdfRenderer::new(program)),
            None => Box::new(Xhtml2PdfRenderer::locate()?),
        }
    };

    log::info!("Converting: {}", cli.input.display());
    convert::convert(
        &cli.input,
        &output,
        &raw,
        &MarkdownTransformer,
        renderer.as_ref(),
    )?;

    println!("Created: {}", output.display());
    Ok(())
}

fn load_raw_config(cli: &Cli) -> Result<RawConfiguration> {
    if cli.no_config {
        log::info!("Using default configuration (--no-config specified)");
        return Ok(RawConfiguration::default());
    }

    let path = match &cli.config {
        Some(path) => path.clone(),
        None => match discovery::find_config(&cli.input) {
            Some(path) => path,
            None => {
                log::info!("No config file found, using defaults");
                return Ok(RawConfiguration::default());
            }
        },
    };

    log::info!("Using config: {}", path.display());
    discovery::load_config(&path)
}
