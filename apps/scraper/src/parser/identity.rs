use serde::{Deserialize, Serialize};

use crate::errors::ScrapeError;
use crate::parser::patterns::Patterns;

/// Placeholder stored when no profile URL is found.
pub const NOT_AVAILABLE: &str = "N/A";

/// Applicant identity pulled from the raw document text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityRecord {
    pub name: Option<String>,
    pub phone: Option<Vec<String>>,
    pub email: Option<Vec<String>>,
    pub linkedin_url: String,
}

/// Builds an `IdentityRecord` from `full_text`.
///
/// The name is mandatory: text with no name-shaped match fails with
/// `MissingField("name")`. Phone and email keep every match verbatim, in
/// first-occurrence order, and are `None` when nothing matches.
pub fn build_identity(patterns: &Patterns, full_text: &str) -> Result<IdentityRecord, ScrapeError> {
    let name = patterns
        .name
        .find(full_text)
        .map(|m| m.as_str().to_string())
        .ok_or(ScrapeError::MissingField("name"))?;

    let linkedin_url = patterns
        .linkedin
        .find(full_text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    Ok(IdentityRecord {
        name: Some(name),
        phone: find_all(&patterns.phone, full_text),
        email: find_all(&patterns.email, full_text),
        linkedin_url,
    })
}

fn find_all(re: &regex::Regex, text: &str) -> Option<Vec<String>> {
    let found: Vec<String> = re.find_iter(text).map(|m| m.as_str().to_string()).collect();
    if found.is_empty() {
        None
    } else {
        Some(found)
    }
}
