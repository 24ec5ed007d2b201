//! Serializers for a parsed record table.
//!
//! - [`csv`]: `Question,Answer` table for spreadsheets
//! - [`apkg`]: Anki deck package

pub mod apkg;
pub mod csv;

pub use self::apkg::{deck_file, to_deck_package, DeckPackage, DECK_ID, MODEL_ID};
pub use self::csv::{csv_file, to_csv};
