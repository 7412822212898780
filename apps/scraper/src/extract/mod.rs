//! Text extraction: turns a résumé file on disk into plain text plus lines.
//!
//! One `TextExtractor` per supported format, picked by file extension.
//! Decoding itself is delegated to `pdf-extract` and `docx-rs`.

pub mod docx;
pub mod pdf;

use std::path::Path;

use crate::errors::ScrapeError;

pub use docx::DocxExtractor;
pub use pdf::PdfExtractor;

/// Extracted text of one document. Both decoders emit real newlines
/// between lines, so `lines` is a plain line split of `full_text`.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDocument {
    pub full_text: String,
    pub lines: Vec<String>,
}

impl RawDocument {
    pub fn from_text(full_text: impl Into<String>) -> Self {
        let full_text = full_text.into();
        let lines = full_text.lines().map(str::to_string).collect();
        Self { full_text, lines }
    }
}

/// Any decoder that can read a document file into a `RawDocument`.
pub trait TextExtractor {
    /// Human-readable format label used in error messages and logs.
    fn format(&self) -> &'static str;

    fn extract(&self, path: &Path) -> Result<RawDocument, ScrapeError>;
}

/// Picks the extractor for `path` by its (case-insensitive) extension.
pub fn extractor_for(path: &Path) -> Result<&'static dyn TextExtractor, ScrapeError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "pdf" => Ok(&PdfExtractor),
        "docx" => Ok(&DocxExtractor),
        _ => Err(ScrapeError::UnsupportedFormat { extension }),
    }
}

/// Extracts `path` with whichever decoder its extension calls for.
pub fn extract_file(path: &Path) -> Result<RawDocument, ScrapeError> {
    let extractor = extractor_for(path)?;
    tracing::debug!(path = %path.display(), format = extractor.format(), "extracting text");
    extractor.extract(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_splits_real_newlines() {
        let doc = RawDocument::from_text("Jane Doe\r\nEXPERIENCE\nAcme 2019\n");
        assert_eq!(doc.lines, vec!["Jane Doe", "EXPERIENCE", "Acme 2019"]);
        assert_eq!(doc.full_text, "Jane Doe\r\nEXPERIENCE\nAcme 2019\n");
    }

    #[test]
    fn test_from_text_keeps_literal_backslash_n() {
        let doc = RawDocument::from_text(r"one\ntwo");
        assert_eq!(doc.lines.len(), 1);
    }

    #[test]
    fn test_extractor_dispatch_by_extension() {
        assert_eq!(extractor_for(Path::new("cv.pdf")).unwrap().format(), "PDF");
        assert_eq!(extractor_for(Path::new("CV.PDF")).unwrap().format(), "PDF");
        assert_eq!(extractor_for(Path::new("cv.docx")).unwrap().format(), "DOCX");
    }

    #[test]
    fn test_unsupported_extension() {
        let err = extractor_for(Path::new("cv.txt")).err().unwrap();
        match err {
            ScrapeError::UnsupportedFormat { extension } => assert_eq!(extension, "txt"),
            other => panic!("unexpected error: {other}"),
        }

        let err = extractor_for(Path::new("README")).err().unwrap();
        assert!(matches!(err, ScrapeError::UnsupportedFormat { ref extension } if extension.is_empty()));
    }

    #[test]
    fn test_unsupported_file_is_not_read() {
        // Path does not exist; dispatch fails before any I/O.
        let err = extract_file(Path::new("/nonexistent/notes.odt")).unwrap_err();
        assert_eq!(err.code(), "UNSUPPORTED_FORMAT");
    }
}
