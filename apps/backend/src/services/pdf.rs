//! Plain-text extraction from typed (non-scanned) PDFs.

use flashcard_core::{CollaboratorError, TextExtractor};
use lopdf::Document;

/// Extracts the text layer of every page, in page order.
///
/// Scanned notes have no text layer; they come back as an error rather
/// than an empty string so the caller can tell the user.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, document: &[u8]) -> Result<String, CollaboratorError> {
        let doc = Document::load_mem(document)
            .map_err(|e| CollaboratorError::new(format!("could not read PDF: {e}")))?;

        if doc.is_encrypted() {
            return Err(CollaboratorError::new("PDF is encrypted"));
        }

        let pages: Vec<u32> = doc.get_pages().keys().copied().collect();
        if pages.is_empty() {
            return Err(CollaboratorError::new("PDF has no pages"));
        }

        let text = doc
            .extract_text(&pages)
            .map_err(|e| CollaboratorError::new(format!("could not extract text: {e}")))?;

        if text.trim().is_empty() {
            return Err(CollaboratorError::new(
                "PDF has no text layer (scanned notes are not supported)",
            ));
        }

        tracing::debug!(pages = pages.len(), chars = text.len(), "extracted PDF text");
        Ok(text)
    }
}
