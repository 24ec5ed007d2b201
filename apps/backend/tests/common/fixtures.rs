//! Test fixtures and factory functions for creating test data.

use std::io::{Cursor, Read};

use serde_json::{json, Value};

/// Generate model-style flashcard text with a specified number of cards.
pub fn sample_flashcard_text(num_cards: usize) -> String {
    (0..num_cards)
        .map(|i| format!("Question {};Answer {}", i + 1, i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Body for the parse and CSV endpoints.
pub fn text_request(text: &str) -> Value {
    json!({ "text": text })
}

/// Body for the deck package endpoint.
pub fn deck_request(text: &str, deck_name: Option<&str>) -> Value {
    match deck_name {
        Some(name) => json!({ "text": text, "deck_name": name }),
        None => json!({ "text": text }),
    }
}

/// Body for the notes generation endpoint.
pub fn notes_request(notes: &str) -> Value {
    json!({ "notes": notes })
}

/// Names of the entries in a zip archive.
pub fn zip_entry_names(bytes: &[u8]) -> Vec<String> {
    let archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut names: Vec<String> = archive.file_names().map(str::to_string).collect();
    names.sort();
    names
}

/// Read one entry of a zip archive as bytes.
pub fn zip_entry(bytes: &[u8], name: &str) -> Vec<u8> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut out = Vec::new();
    archive.by_name(name).unwrap().read_to_end(&mut out).unwrap();
    out
}
