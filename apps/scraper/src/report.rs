//! Rendering of batch outcomes: the plain console report or a JSON array.

use std::fmt::Write as _;
use std::str::FromStr;

use serde_json::json;
use thiserror::Error;

use crate::batch::DocumentOutcome;
use crate::parser::identity::IdentityRecord;

const SEPARATOR_WIDTH: usize = 100;
const BODY_INDENT: &str = "    ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Error)]
#[error("unknown output format '{0}' (expected 'text' or 'json')")]
pub struct UnknownFormat(String);

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

pub fn render(format: OutputFormat, outcomes: &[DocumentOutcome]) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(outcomes)),
        OutputFormat::Json => render_json(outcomes),
    }
}

/// Identity block, separator, then every kept section followed by a separator.
/// Failed files get a single diagnostic line instead.
pub fn render_text(outcomes: &[DocumentOutcome]) -> String {
    let separator = format!("\n\n{}\n\n", "#".repeat(SEPARATOR_WIDTH));
    let mut out = String::new();

    for outcome in outcomes {
        let _ = write!(out, "==> {}", outcome.file_name());
        match outcome {
            DocumentOutcome::Parsed(parsed) => {
                out.push('\n');
                write_identity(&mut out, &parsed.identity);
                out.push_str(&separator);
                for (title, body) in &parsed.sections {
                    let _ = writeln!(out, "{title}");
                    for line in body.lines() {
                        let _ = writeln!(out, "{BODY_INDENT}{line}");
                    }
                    out.push_str(&separator);
                }
            }
            DocumentOutcome::Failed(failure) => {
                let _ = writeln!(out, ": {}", failure.error);
            }
        }
    }

    out
}

fn write_identity(out: &mut String, identity: &IdentityRecord) {
    let _ = writeln!(out, "Name: {}", identity.name.as_deref().unwrap_or("None"));
    let _ = writeln!(out, "Phone: {}", join_or_none(identity.phone.as_deref()));
    let _ = writeln!(out, "Email: {}", join_or_none(identity.email.as_deref()));
    let _ = write!(out, "LinkedIn: {}", identity.linkedin_url);
}

fn join_or_none(values: Option<&[String]>) -> String {
    match values {
        Some(v) => v
            .iter()
            .map(|s| s.trim())
            .collect::<Vec<_>>()
            .join(", "),
        None => "None".to_string(),
    }
}

/// One object per file: parsed records carry `identity` and `sections`,
/// failures carry `error` and `code`.
pub fn render_json(outcomes: &[DocumentOutcome]) -> serde_json::Result<String> {
    let entries = outcomes
        .iter()
        .map(|outcome| match outcome {
            DocumentOutcome::Parsed(parsed) => serde_json::to_value(parsed),
            DocumentOutcome::Failed(failure) => Ok(json!({
                "file": failure.file_name,
                "error": failure.error.to_string(),
                "code": failure.error.code(),
            })),
        })
        .collect::<serde_json::Result<Vec<_>>>()?;
    serde_json::to_string_pretty(&entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::FileFailure;
    use crate::errors::ScrapeError;
    use crate::parser::sections::SectionMap;
    use crate::parser::ParsedResume;

    fn outcomes() -> Vec<DocumentOutcome> {
        let mut sections = SectionMap::new();
        sections.insert(
            "EXPERIENCE".to_string(),
            "Acme 2015\nBuilt things".to_string(),
        );
        vec![
            DocumentOutcome::Parsed(ParsedResume {
                file_name: "jane.pdf".to_string(),
                identity: IdentityRecord {
                    name: Some("Jane Doe".to_string()),
                    phone: None,
                    email: Some(vec!["jane@x.com".to_string(), "jd@y.org".to_string()]),
                    linkedin_url: "N/A".to_string(),
                },
                sections,
            }),
            DocumentOutcome::Failed(FileFailure {
                file_name: "scan.txt".to_string(),
                error: ScrapeError::UnsupportedFormat {
                    extension: "txt".to_string(),
                },
            }),
        ]
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!(" JSON ".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_text_report_layout() {
        let text = render_text(&outcomes());
        let separator = "#".repeat(100);

        assert!(text.starts_with("==> jane.pdf\nName: Jane Doe\nPhone: None\n"));
        assert!(text.contains("Email: jane@x.com, jd@y.org\nLinkedIn: N/A"));
        assert!(text.contains("EXPERIENCE\n    Acme 2015\n    Built things\n"));
        assert_eq!(text.matches(&separator).count(), 2);
        assert!(text.ends_with("==> scan.txt: Unsupported file format: \"txt\" (expected .pdf or .docx)\n"));
    }

    #[test]
    fn test_json_report_has_every_file() {
        let rendered = render_json(&outcomes()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 2);

        assert_eq!(entries[0]["file"], "jane.pdf");
        assert_eq!(entries[0]["identity"]["name"], "Jane Doe");
        assert_eq!(entries[0]["identity"]["phone"], serde_json::Value::Null);
        assert_eq!(entries[0]["identity"]["linkedin_url"], "N/A");
        assert_eq!(entries[0]["sections"]["EXPERIENCE"], "Acme 2015\nBuilt things");

        assert_eq!(entries[1]["file"], "scan.txt");
        assert_eq!(entries[1]["code"], "UNSUPPORTED_FORMAT");
    }
}
