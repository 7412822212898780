use thiserror::Error;

/// Per-document error. Every variant is recoverable at the file boundary:
/// the batch driver records it against the file name and moves on.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Unsupported file format: {extension:?} (expected .pdf or .docx)")]
    UnsupportedFormat { extension: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not extract text from {format} document: {reason}")]
    Extraction { format: &'static str, reason: String },

    #[error("Missing mandatory field: {0}")]
    MissingField(&'static str),
}

impl ScrapeError {
    /// Short machine-readable code, mirrored in JSON reports.
    pub fn code(&self) -> &'static str {
        match self {
            ScrapeError::UnsupportedFormat { .. } => "UNSUPPORTED_FORMAT",
            ScrapeError::Io(_) => "IO_ERROR",
            ScrapeError::Extraction { .. } => "EXTRACTION_FAILURE",
            ScrapeError::MissingField(_) => "MISSING_MANDATORY_FIELD",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_message_names_extension() {
        let err = ScrapeError::UnsupportedFormat {
            extension: "txt".to_string(),
        };
        assert!(err.to_string().contains("\"txt\""));
        assert_eq!(err.code(), "UNSUPPORTED_FORMAT");
    }

    #[test]
    fn test_missing_field_message() {
        let err = ScrapeError::MissingField("name");
        assert_eq!(err.to_string(), "Missing mandatory field: name");
        assert_eq!(err.code(), "MISSING_MANDATORY_FIELD");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ScrapeError = io.into();
        assert_eq!(err.code(), "IO_ERROR");
    }
}
