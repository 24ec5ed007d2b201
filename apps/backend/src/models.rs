//! API request and response types

use serde::{Deserialize, Serialize};

// Re-export shared types from flashcard-core
pub use flashcard_core::types::{FlashcardRecord, ParseReport, RecordTable};

/// Body for endpoints that take already generated flashcard text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashcardTextRequest {
    pub text: String,
}

/// Body for the deck package export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckExportRequest {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deck_name: Option<String>,
}

/// Body for generating flashcards from notes text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotesRequest {
    pub notes: String,
}

/// Parsed flashcards returned for preview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashcardTableResponse {
    pub records: Vec<FlashcardRecord>,
    pub skipped_lines: usize,
    pub overwritten: usize,
}

impl From<ParseReport> for FlashcardTableResponse {
    fn from(report: ParseReport) -> Self {
        Self {
            records: report.table.into_records(),
            skipped_lines: report.skipped_lines,
            overwritten: report.overwritten,
        }
    }
}

/// Flashcards generated from notes, with the raw model output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedResponse {
    pub raw_text: String,
    #[serde(flatten)]
    pub table: FlashcardTableResponse,
}
