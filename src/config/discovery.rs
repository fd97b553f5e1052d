//! Locating and loading configuration files.
//!
//! Search order, first existing file wins:
//! 1. `md2pdf.toml` next to the input file
//! 2. `md2pdf.toml` in the current working directory
//! 3. `~/.md2pdf.toml`
//!
//! Files ending in `.json` are parsed as JSON, everything else as TOML.

use super::RawConfiguration;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "md2pdf.toml";
pub const HOME_CONFIG_FILE_NAME: &str = ".md2pdf.toml";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> ConfigFormat {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Toml,
        }
    }
}

/// Find the configuration file that applies to `input`, if any.
pub fn find_config(input: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok();
    let home = dirs::home_dir();
    find_config_in(input, cwd.as_deref(), home.as_deref())
}

fn find_config_in(input: &Path, cwd: Option<&Path>, home: Option<&Path>) -> Option<PathBuf> {
    search_paths(input, cwd, home)
        .into_iter()
        .find(|path| path.is_file())
}

fn search_paths(input: &Path, cwd: Option<&Path>, home: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(3);
    let input_dir = input.parent().unwrap_or_else(|| Path::new(""));
    paths.push(input_dir.join(CONFIG_FILE_NAME));
    if let Some(cwd) = cwd {
        paths.push(cwd.join(CONFIG_FILE_NAME));
    }
    if let Some(home) = home {
        paths.push(home.join(HOME_CONFIG_FILE_NAME));
    }
    paths
}

/// Load and parse a configuration file.
pub fn load_config(path: &Path) -> Result<RawConfiguration> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to load {} contents", path.display()))?;
    parse_config(&contents, ConfigFormat::from_path(path))
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Parse configuration text. Blank input is an empty configuration.
pub fn parse_config(contents: &str, format: ConfigFormat) -> Result<RawConfiguration> {
    if contents.trim().is_empty() {
        return Ok(RawConfiguration::default());
    }

    let raw = match format {
        ConfigFormat::Toml => toml::from_str(contents).with_context(|| "Failed to parse TOML")?,
        ConfigFormat::Json => {
            serde_json::from_str(contents).with_context(|| "Failed to parse JSON")?
        }
    };
    Ok(raw)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs;

    #[test]
    fn input_directory_wins_over_cwd_and_home() {
        let input_dir = tempfile::tempdir().expect("can create temp dir");
        let cwd = tempfile::tempdir().expect("can create temp dir");
        let home = tempfile::tempdir().expect("can create temp dir");
        fs::write(input_dir.path().join(CONFIG_FILE_NAME), "").expect("can write config");
        fs::write(cwd.path().join(CONFIG_FILE_NAME), "").expect("can write config");
        fs::write(home.path().join(HOME_CONFIG_FILE_NAME), "").expect("can write config");

        let input = input_dir.path().join("doc.md");
        let found = find_config_in(&input, Some(cwd.path()), Some(home.path()));
        assert_eq!(found, Some(input_dir.path().join(CONFIG_FILE_NAME)));
    }

    #[test]
    fn falls_back_to_home_config() {
        let input_dir = tempfile::tempdir().expect("can create temp dir");
        let cwd = tempfile::tempdir().expect("can create temp dir");
        let home = tempfile::tempdir().expect("can create temp dir");
        fs::write(home.path().join(HOME_CONFIG_FILE_NAME), "").expect("can write config");

        let input = input_dir.path().join("doc.md");
        let found = find_config_in(&input, Some(cwd.path()), Some(home.path()));
        assert_eq!(found, Some(home.path().join(HOME_CONFIG_FILE_NAME)));
    }

    #[test]
    fn no_config_anywhere() {
        let input_dir = tempfile::tempdir().expect("can create temp dir");
        let input = input_dir.path().join("doc.md");
        assert_eq!(find_config_in(&input, None, None), None);
    }

    #[test]
    fn blank_file_is_empty_configuration() {
        let raw = parse_config("  \n", ConfigFormat::Json).expect("can parse blank config");
        assert_eq!(raw, RawConfiguration::default());
    }

    #[test]
    fn loads_json_by_extension() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"margins": {"left": "1cm"}, "page_size": "A5"}"#)
            .expect("can write config");

        let raw = load_config(&path).expect("can load JSON config");
        let margins = raw.margins.expect("margins are present");
        assert_eq!(margins.left.as_deref(), Some("1cm"));
        assert_eq!(margins.top, None);
        assert_eq!(raw.page_size, Some(crate::config::PageSize::Named("A5".to_string())));
    }

    #[test]
    fn wrong_value_type_is_an_error() {
        let result = parse_config("[font]\nline_height = \"tall\"\n", ConfigFormat::Toml);
        assert!(result.is_err());
    }
}
