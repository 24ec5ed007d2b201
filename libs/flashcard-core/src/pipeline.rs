//! Notes-to-flashcards pipeline.
//!
//! Text extraction and flashcard generation are external services. They
//! are injected as [`TextExtractor`] and [`FlashcardGenerator`] so the
//! parsing and export steps can run against stubbed text.

use crate::error::{CollaboratorError, PipelineError};
use crate::export;
use crate::parser::parse_with_report;
use crate::types::{ExportedFile, ParseReport, RecordTable};

/// Deck name used when the caller does not pick one.
pub const DEFAULT_DECK_NAME: &str = "Studyly Flashcards";

/// System instructions given to the text-generation model.
pub const SYSTEM_PROMPT: &str = "You are a GPT that automatically generates flashcards given someone's uploaded notes. The question and answers are to be semi-colon separated in the order question, answer. Each question, answer pair is to be on a separate line";

/// Prefix of the user message; the notes text follows it.
pub const USER_PROMPT_PREFIX: &str = "Generate flashcards from the following notes: ";

/// Build the user message for a block of notes.
pub fn user_prompt(notes: &str) -> String {
    format!("{}{}", USER_PROMPT_PREFIX, notes)
}

/// Turns an uploaded document into plain notes text.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, document: &[u8]) -> Result<String, CollaboratorError>;
}

/// Turns notes text into `question;answer` lines.
pub trait FlashcardGenerator: Send + Sync {
    fn generate(&self, notes: &str) -> Result<String, CollaboratorError>;
}

impl<F> TextExtractor for F
where
    F: Fn(&[u8]) -> Result<String, CollaboratorError> + Send + Sync,
{
    fn extract(&self, document: &[u8]) -> Result<String, CollaboratorError> {
        self(document)
    }
}

impl<F> FlashcardGenerator for F
where
    F: Fn(&str) -> Result<String, CollaboratorError> + Send + Sync,
{
    fn generate(&self, notes: &str) -> Result<String, CollaboratorError> {
        self(notes)
    }
}

/// Both exports of one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportBundle {
    pub csv: ExportedFile,
    pub deck: ExportedFile,
}

/// Generated flashcards together with the raw model output they came from.
#[derive(Debug, Clone)]
pub struct Generated {
    pub raw_text: String,
    pub report: ParseReport,
}

pub struct Pipeline<E, G> {
    extractor: E,
    generator: G,
}

impl<E: TextExtractor, G: FlashcardGenerator> Pipeline<E, G> {
    pub fn new(extractor: E, generator: G) -> Self {
        Self {
            extractor,
            generator,
        }
    }

    /// Extract text from a document, generate flashcards and parse them.
    pub fn flashcards_from_document(&self, document: &[u8]) -> Result<Generated, PipelineError> {
        let notes = self
            .extractor
            .extract(document)
            .map_err(PipelineError::Extraction)?;
        tracing::debug!(chars = notes.len(), "extracted notes text");
        self.flashcards_from_notes(&notes)
    }

    /// Generate flashcards from notes text and parse them.
    ///
    /// Output with no usable lines yields an empty table, not an error.
    pub fn flashcards_from_notes(&self, notes: &str) -> Result<Generated, PipelineError> {
        let raw_text = self
            .generator
            .generate(notes)
            .map_err(PipelineError::Generation)?;
        let report = parse_with_report(&raw_text);
        if report.table.is_empty() {
            tracing::warn!("generator output contained no flashcards");
        }
        Ok(Generated { raw_text, report })
    }
}

/// Write both the CSV and the deck package for a table.
pub fn export_all(table: &RecordTable, deck_name: &str) -> Result<ExportBundle, PipelineError> {
    Ok(ExportBundle {
        csv: export::csv_file(table)?,
        deck: export::deck_file(table, deck_name)?,
    })
}
