pub mod identity;
pub mod patterns;
pub mod sections;

use serde::Serialize;

use crate::errors::ScrapeError;
use crate::extract::RawDocument;
use identity::IdentityRecord;
use patterns::Patterns;
use sections::SectionMap;

/// Everything pulled out of one résumé.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedResume {
    #[serde(rename = "file")]
    pub file_name: String,
    pub identity: IdentityRecord,
    pub sections: SectionMap,
}

/// Owns the compiled pattern vocabulary; one instance serves the whole batch.
#[derive(Debug, Clone)]
pub struct ResumeParser {
    patterns: Patterns,
}

impl ResumeParser {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            patterns: Patterns::compile()?,
        })
    }

    /// Identity from the full text, sections from the line sequence.
    pub fn parse(&self, file_name: &str, doc: &RawDocument) -> Result<ParsedResume, ScrapeError> {
        let identity = identity::build_identity(&self.patterns, &doc.full_text)?;
        let sections = sections::segment(&self.patterns, &doc.lines);
        Ok(ParsedResume {
            file_name: file_name.to_string(),
            identity,
            sections,
        })
    }
}
