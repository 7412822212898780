use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::errors::ScrapeError;
use crate::extract::extract_file;
use crate::parser::{ParsedResume, ResumeParser};

/// A file that could not be turned into a `ParsedResume`.
#[derive(Debug)]
pub struct FileFailure {
    pub file_name: String,
    pub error: ScrapeError,
}

/// Per-file result of a batch run, in directory order.
#[derive(Debug)]
pub enum DocumentOutcome {
    Parsed(ParsedResume),
    Failed(FileFailure),
}

impl DocumentOutcome {
    pub fn file_name(&self) -> &str {
        match self {
            DocumentOutcome::Parsed(p) => &p.file_name,
            DocumentOutcome::Failed(f) => &f.file_name,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub parsed: usize,
    pub failed: usize,
}

/// Parses every regular file in `dir`, sorted by name.
///
/// Only a failure to list `dir` itself is fatal. Each file is processed on
/// its own: a bad file is logged, recorded as `DocumentOutcome::Failed`, and
/// the batch moves on to the next one.
pub fn run_batch(dir: &Path, parser: &ResumeParser) -> Result<Vec<DocumentOutcome>> {
    let files = list_files(dir)?;
    info!("Parsing {} files from '{}'", files.len(), dir.display());

    let outcomes = files
        .iter()
        .map(|path| {
            let file_name = display_name(path);
            match process_file(path, &file_name, parser) {
                Ok(parsed) => {
                    debug!(
                        file = %file_name,
                        sections = parsed.sections.len(),
                        "parsed"
                    );
                    DocumentOutcome::Parsed(parsed)
                }
                // Log a warning but continue; one bad file never stops the batch
                Err(error) => {
                    warn!("Skipping '{}': {}", file_name, error);
                    DocumentOutcome::Failed(FileFailure { file_name, error })
                }
            }
        })
        .collect();

    Ok(outcomes)
}

pub fn process_file(
    path: &Path,
    file_name: &str,
    parser: &ResumeParser,
) -> Result<ParsedResume, ScrapeError> {
    let doc = extract_file(path)?;
    parser.parse(file_name, &doc)
}

pub fn summarize(outcomes: &[DocumentOutcome]) -> BatchSummary {
    let parsed = outcomes
        .iter()
        .filter(|o| matches!(o, DocumentOutcome::Parsed(_)))
        .count();
    BatchSummary {
        total: outcomes.len(),
        parsed,
        failed: outcomes.len() - parsed,
    }
}

fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in
        fs::read_dir(dir).with_context(|| format!("Cannot read directory '{}'", dir.display()))?
    {
        let entry = entry.with_context(|| format!("Cannot list '{}'", dir.display()))?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        } else {
            debug!(path = %path.display(), "not a regular file, skipping");
        }
    }
    files.sort();
    Ok(files)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
