//! Error types for flashcard-core.

use thiserror::Error;

/// Result type alias using ExportError.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors that can occur while writing an export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure reported by an injected collaborator (text extraction, generation).
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CollaboratorError {
    pub message: String,
}

impl CollaboratorError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors from running the full notes-to-flashcards pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("text extraction failed: {0}")]
    Extraction(#[source] CollaboratorError),

    #[error("flashcard generation failed: {0}")]
    Generation(#[source] CollaboratorError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_io() {
        let error = ExportError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
        assert_eq!(error.to_string(), "io error: disk full");
    }

    #[test]
    fn test_error_display_generation() {
        let error = PipelineError::Generation(CollaboratorError::new("rate limited"));
        assert_eq!(error.to_string(), "flashcard generation failed: rate limited");
    }

    #[test]
    fn test_export_error_is_transparent() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "x");
        let error = PipelineError::from(ExportError::from(io));
        assert_eq!(error.to_string(), "io error: x");
    }
}
