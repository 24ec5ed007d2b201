//! Parser for model-generated flashcard text.
//!
//! # Format
//! ```text
//! What is Rust?; A systems programming language.
//! Explain borrowing; References without ownership; checked at compile time.
//! ```
//!
//! One card per line, question and answer separated by the first `;`.
//! Anything after the first delimiter belongs to the answer.

use std::collections::HashMap;

use crate::types::{FlashcardRecord, ParseReport, RecordTable};

/// Separator between question and answer.
pub const DELIMITER: char = ';';

/// Parse generated text into a record table.
///
/// Rows are ordered by the first appearance of each question. When a
/// question repeats, the later answer replaces the earlier one but the row
/// keeps its original position. Lines without a delimiter are dropped.
/// This never fails.
pub fn parse(raw_text: &str) -> RecordTable {
    parse_with_report(raw_text).table
}

/// Like [`parse`], but also reports how many lines were skipped or overwritten.
pub fn parse_with_report(raw_text: &str) -> ParseReport {
    let mut builder = TableBuilder::default();
    let mut skipped_lines = 0;

    for (idx, line) in raw_text.lines().enumerate() {
        match split_line(line) {
            Some((question, answer)) => builder.insert(question, answer, idx + 1),
            None => skipped_lines += 1,
        }
    }

    let overwritten = builder.overwritten;
    let table = builder.finish();
    tracing::debug!(
        records = table.len(),
        skipped_lines,
        overwritten,
        "parsed flashcard text"
    );

    ParseReport {
        table,
        skipped_lines,
        overwritten,
    }
}

fn split_line(line: &str) -> Option<(&str, &str)> {
    let (question, answer) = line.split_once(DELIMITER)?;
    Some((question.trim(), answer.trim()))
}

/// Insertion-ordered map from question to answer.
#[derive(Default)]
struct TableBuilder {
    positions: HashMap<String, usize>,
    records: Vec<FlashcardRecord>,
    overwritten: usize,
}

impl TableBuilder {
    fn insert(&mut self, question: &str, answer: &str, line_num: usize) {
        if let Some(&pos) = self.positions.get(question) {
            tracing::debug!(line = line_num, question, "duplicate question, keeping later answer");
            self.records[pos].answer = answer.to_string();
            self.overwritten += 1;
            return;
        }

        self.positions.insert(question.to_string(), self.records.len());
        self.records.push(FlashcardRecord::new(question, answer));
    }

    fn finish(self) -> RecordTable {
        RecordTable::from_records(self.records)
    }
}
