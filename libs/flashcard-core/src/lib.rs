//! Core flashcard library shared by the backend and its tests.
//!
//! Provides:
//! - Parser for model-generated `question;answer` text
//! - CSV and Anki deck package (`.apkg`) exporters
//! - Pipeline wiring injected text extraction and generation steps
//! - Shared types (FlashcardRecord, RecordTable, ParseReport, etc.)

pub mod error;
pub mod export;
pub mod parser;
pub mod pipeline;
pub mod types;

pub use error::{CollaboratorError, ExportError, PipelineError, Result};
pub use export::{to_csv, to_deck_package, DeckPackage, DECK_ID, MODEL_ID};
pub use parser::{parse, parse_with_report, DELIMITER};
pub use pipeline::{
    export_all, ExportBundle, FlashcardGenerator, Generated, Pipeline, TextExtractor,
    DEFAULT_DECK_NAME,
};
pub use types::{ExportedFile, FlashcardRecord, ParseReport, RecordTable};
