//! Collaborators plugged into the flashcard pipeline.

pub mod generator;
pub mod pdf;

pub use generator::OpenAiGenerator;
pub use pdf::PdfTextExtractor;
