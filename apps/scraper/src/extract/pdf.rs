//! PDF text extraction wrapper
//!
//! Wraps the pdf-extract crate with error handling for encrypted, scanned
//! and corrupted PDFs. The decoder can panic on malformed object streams,
//! so the call is unwound (with the panic hook silenced) and reported like
//! any other decode failure.

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use super::{RawDocument, TextExtractor};
use crate::errors::ScrapeError;

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn format(&self) -> &'static str {
        "PDF"
    }

    fn extract(&self, path: &Path) -> Result<RawDocument, ScrapeError> {
        let bytes = std::fs::read(path)?;
        let text = extract_text_from_pdf(&bytes)?;
        Ok(RawDocument::from_text(text))
    }
}

/// Extract full text from PDF bytes.
///
/// Returns an error for unreadable PDFs and for PDFs with no text layer.
pub fn extract_text_from_pdf(pdf_bytes: &[u8]) -> Result<String, ScrapeError> {
    let decoded = quiet_unwind(|| pdf_extract::extract_text_from_mem(pdf_bytes))?;
    let text = decoded.map_err(|e| extraction_error(e.to_string()))?;

    if text.trim().is_empty() {
        // Image-only scans decode fine but carry no text layer.
        return Err(extraction_error("no text layer (scanned or image-only PDF?)"));
    }

    Ok(text)
}

/// Runs the decoder with the default panic hook swapped for a debug log,
/// so a malformed file yields one `warn!` from the batch instead of a
/// "thread panicked" dump on stderr. The hook is process-wide, which is
/// fine while files are decoded one at a time.
fn quiet_unwind<T>(decode: impl FnOnce() -> T) -> Result<T, ScrapeError> {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(|info| {
        tracing::debug!("PDF decoder panicked: {info}");
    }));
    let result = panic::catch_unwind(AssertUnwindSafe(decode));
    panic::set_hook(previous);

    result.map_err(|_| extraction_error("decoder panicked on malformed input"))
}

fn extraction_error(reason: impl Into<String>) -> ScrapeError {
    ScrapeError::Extraction {
        format: "PDF",
        reason: reason.into(),
    }
}
