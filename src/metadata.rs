//! Per-document facts exposed to header, footer, and title page templates.

use chrono::NaiveDateTime;
use serde::Serialize;
use std::path::Path;

/// Metadata captured once at the start of a conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    /// First level-1 heading, or the input file's stem
    pub title: String,
    /// Base name of the input file
    pub filename: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `YYYY-MM-DD HH:MM`
    pub datetime: String,
}

impl Metadata {
    /// Extract metadata from the input path and its raw source text, using
    /// the local clock.
    pub fn extract(input: &Path, content: &str) -> Metadata {
        Metadata::extract_at(input, content, chrono::Local::now().naive_local())
    }

    /// Extract metadata with both timestamps derived from `now`.
    pub fn extract_at(input: &Path, content: &str, now: NaiveDateTime) -> Metadata {
        let title = match extract_title(content) {
            Some(title) => title.to_string(),
            None => input
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default(),
        };
        let filename = input
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        Metadata {
            title,
            filename,
            date: now.format("%Y-%m-%d").to_string(),
            datetime: now.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Text of the first `# ` heading line, with the marker and surrounding
/// whitespace removed.
pub fn extract_title(content: &str) -> Option<&str> {
    content
        .lines()
        .find_map(|line| line.trim().strip_prefix("# "))
        .map(str::trim)
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;

    fn instant() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|d| d.and_hms_opt(23, 59, 30))
            .expect("valid date")
    }

    #[test]
    fn first_heading_wins() {
        let content = "intro\n# Real Title  \nmore\n# Second";
        assert_eq!(extract_title(content), Some("Real Title"));
    }

    #[test]
    fn deeper_headings_are_not_titles() {
        assert_eq!(extract_title("## Section\n### Sub\n#NoSpace"), None);
    }

    #[test]
    fn indented_heading_counts() {
        assert_eq!(extract_title("   #   Spaced Out\t\n"), Some("Spaced Out"));
    }

    #[test]
    fn falls_back_to_file_stem() {
        let metadata = Metadata::extract_at(Path::new("notes/report.v2.md"), "no headings", instant());
        assert_eq!(metadata.title, "report.v2");
        assert_eq!(metadata.filename, "report.v2.md");
    }

    #[test]
    fn timestamps_share_one_instant() {
        let metadata = Metadata::extract_at(Path::new("doc.md"), "# Hello", instant());
        assert_eq!(metadata.title, "Hello");
        assert_eq!(metadata.date, "2024-03-09");
        assert_eq!(metadata.datetime, "2024-03-09 23:59");
        assert!(metadata.datetime.starts_with(&metadata.date));
    }

    #[test]
    fn crlf_line_endings() {
        assert_eq!(extract_title("front\r\n# Windows\r\nbody"), Some("Windows"));
    }
}
