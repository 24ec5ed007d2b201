//! Core types for flashcard extraction and export.

use serde::{Deserialize, Serialize};

use crate::parser::DELIMITER;

/// One question/answer pair parsed from generated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashcardRecord {
    pub question: String,
    pub answer: String,
}

impl FlashcardRecord {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Field values in schema order.
    pub fn fields(&self) -> [&str; 2] {
        [&self.question, &self.answer]
    }
}

/// Ordered, de-duplicated collection of records.
///
/// Rows appear in the order their question was first seen. No two records
/// share a question; [`crate::parser::parse`] is the only way to build a
/// table from untrusted text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordTable {
    records: Vec<FlashcardRecord>,
}

impl RecordTable {
    pub(crate) fn from_records(records: Vec<FlashcardRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FlashcardRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[FlashcardRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<FlashcardRecord> {
        self.records
    }

    /// Look up the answer stored for a question.
    pub fn get(&self, question: &str) -> Option<&str> {
        self.records
            .iter()
            .find(|r| r.question == question)
            .map(|r| r.answer.as_str())
    }

    /// Render back to the `question;answer` line format accepted by the parser.
    pub fn to_delimited_text(&self) -> String {
        self.records
            .iter()
            .map(|r| format!("{}{}{}", r.question, DELIMITER, r.answer))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<'a> IntoIterator for &'a RecordTable {
    type Item = &'a FlashcardRecord;
    type IntoIter = std::slice::Iter<'a, FlashcardRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for RecordTable {
    type Item = FlashcardRecord;
    type IntoIter = std::vec::IntoIter<FlashcardRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

/// Result of a parse, with counts of what was dropped along the way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseReport {
    pub table: RecordTable,
    /// Lines without a delimiter, blank lines included.
    pub skipped_lines: usize,
    /// Lines whose question was already present and replaced its answer.
    pub overwritten: usize,
}

/// A fully written export ready to hand to a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub bytes: Vec<u8>,
    pub file_name: &'static str,
    pub mime_type: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table() -> RecordTable {
        RecordTable::from_records(vec![
            FlashcardRecord::new("What is Rust?", "A language"),
            FlashcardRecord::new("Borrowing", "a;b"),
        ])
    }

    #[test]
    fn get_finds_answer_by_question() {
        let t = table();
        assert_eq!(t.get("Borrowing"), Some("a;b"));
        assert_eq!(t.get("missing"), None);
    }

    #[test]
    fn delimited_text_keeps_row_order() {
        assert_eq!(
            table().to_delimited_text(),
            "What is Rust?;A language\nBorrowing;a;b"
        );
    }

    #[test]
    fn serializes_as_plain_array() {
        let json = serde_json::to_value(table()).unwrap();
        assert_eq!(json[0]["question"], "What is Rust?");
        assert_eq!(json[1]["answer"], "a;b");
    }

    #[test]
    fn fields_are_question_then_answer() {
        let record = FlashcardRecord::new("Q", "A");
        assert_eq!(record.fields(), ["Q", "A"]);
    }
}
