//! Anki deck package (`.apkg`) export.
//!
//! A package is a zip archive with two entries:
//! - `collection.anki2`: SQLite collection holding the note model, the deck
//!   and one note + card per record
//! - `media`: JSON map of bundled media files, always `{}` here

pub mod guid;
pub mod model;
pub mod schema;

use std::borrow::Cow;
use std::io::{Cursor, Write};

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::Result;
use crate::types::{ExportedFile, RecordTable};

pub use model::{CardTemplate, Deck, ModelField, NoteModel};

pub const FILE_NAME: &str = "flashcards.apkg";
pub const MIME_TYPE: &str = "application/apkg";

/// Deck id written into every package.
///
/// Anki merges imports by id. Changing this makes re-imports create a new
/// deck next to the old one.
pub const DECK_ID: i64 = 2059400110;

/// Note model id written into every package. Same re-import rule as [`DECK_ID`].
pub const MODEL_ID: i64 = 1607392319;

/// Archive entry holding the SQLite collection.
pub const COLLECTION_ENTRY: &str = "collection.anki2";

/// Archive entry holding the media map.
pub const MEDIA_ENTRY: &str = "media";

/// A deck of question/answer notes ready to be written as an `.apkg`.
#[derive(Debug, Clone)]
pub struct DeckPackage<'a> {
    deck: Deck,
    model: NoteModel,
    table: &'a RecordTable,
}

impl<'a> DeckPackage<'a> {
    /// The deck name is stored as given, empty or not.
    pub fn new(table: &'a RecordTable, deck_name: &str) -> Self {
        Self {
            deck: Deck::new(DECK_ID, deck_name),
            model: NoteModel::question_answer(MODEL_ID),
            table,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn model(&self) -> &NoteModel {
        &self.model
    }

    /// Write the package using the current time for ids and timestamps.
    pub fn write(&self) -> Result<Vec<u8>> {
        self.write_at(Utc::now())
    }

    /// Write the package with ids and timestamps derived from `now`.
    ///
    /// The same table, deck name and `now` always produce the same bytes.
    pub fn write_at(&self, now: DateTime<Utc>) -> Result<Vec<u8>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(COLLECTION_ENTRY);

        let mut conn = Connection::open(&path)?;
        self.write_collection(&mut conn, now)?;
        conn.close().map_err(|(_, e)| e)?;

        let collection = std::fs::read(&path)?;
        let bytes = zip_package(&collection, now)?;

        tracing::debug!(
            deck = %self.deck.name,
            notes = self.table.len(),
            bytes = bytes.len(),
            "wrote deck package"
        );
        Ok(bytes)
    }

    fn write_collection(&self, conn: &mut Connection, now: DateTime<Utc>) -> Result<()> {
        let mod_secs = now.timestamp();
        let mod_millis = now.timestamp_millis();

        conn.execute_batch(schema::SCHEMA)?;

        let tx = conn.transaction()?;

        let mut models = serde_json::Map::new();
        models.insert(
            self.model.id.to_string(),
            serde_json::to_value(self.model.to_collection_json(self.deck.id, mod_secs))?,
        );

        tx.execute(
            schema::INSERT_COL,
            params![
                mod_secs,
                mod_millis,
                mod_millis,
                schema::SCHEMA_VERSION,
                model::collection_conf_json(self.model.id, self.deck.id).to_string(),
                serde_json::Value::Object(models).to_string(),
                model::decks_json(&self.deck, mod_secs).to_string(),
                model::deck_config_json(mod_secs).to_string(),
            ],
        )?;

        {
            let mut insert_note = tx.prepare(schema::INSERT_NOTE)?;
            let mut insert_card = tx.prepare(schema::INSERT_CARD)?;

            let mut next_card_id = mod_millis;

            for (idx, record) in self.table.iter().enumerate() {
                let position = idx as i64;
                let note_id = mod_millis + position;
                let fields = record.fields();
                let question = field_value(&record.question);
                let answer = field_value(&record.answer);
                let flds = [&*question, &*answer].join(schema::FIELD_SEPARATOR);

                insert_note.execute(params![
                    note_id,
                    guid::guid_for(&fields),
                    self.model.id,
                    mod_secs,
                    flds,
                    question,
                    guid::field_checksum(&question),
                ])?;

                for ord in 0..self.model.templates.len() {
                    insert_card.execute(params![
                        next_card_id,
                        note_id,
                        self.deck.id,
                        ord as i64,
                        mod_secs,
                        position,
                    ])?;
                    next_card_id += 1;
                }
            }
        }

        tx.commit()?;
        Ok(())
    }
}

/// A field value safe to join into `flds`.
///
/// The unit separator delimits fields, so one inside a value becomes a space.
fn field_value(value: &str) -> Cow<'_, str> {
    if value.contains(schema::FIELD_SEPARATOR) {
        Cow::Owned(value.replace(schema::FIELD_SEPARATOR, " "))
    } else {
        Cow::Borrowed(value)
    }
}

fn zip_package(collection: &[u8], now: DateTime<Utc>) -> Result<Vec<u8>> {
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(zip_timestamp(now));

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    zip.start_file(COLLECTION_ENTRY, options)?;
    zip.write_all(collection)?;
    zip.start_file(MEDIA_ENTRY, options)?;
    zip.write_all(b"{}")?;

    Ok(zip.finish()?.into_inner())
}

fn zip_timestamp(now: DateTime<Utc>) -> zip::DateTime {
    use chrono::{Datelike, Timelike};

    // Zip timestamps cannot represent dates before 1980.
    zip::DateTime::from_date_and_time(
        now.year().clamp(1980, 2107) as u16,
        now.month() as u8,
        now.day() as u8,
        now.hour() as u8,
        now.minute() as u8,
        now.second() as u8,
    )
    .unwrap_or_default()
}

/// Write the table as an `.apkg` deck named `deck_name`.
///
/// An empty table still produces a valid package with zero cards. A unit
/// separator (`\u{1f}`) inside a question or answer is written as a space.
pub fn to_deck_package(table: &RecordTable, deck_name: &str) -> Result<Vec<u8>> {
    DeckPackage::new(table, deck_name).write()
}

/// [`to_deck_package`] wrapped with its download metadata.
pub fn deck_file(table: &RecordTable, deck_name: &str) -> Result<ExportedFile> {
    Ok(ExportedFile {
        bytes: to_deck_package(table, deck_name)?,
        file_name: FILE_NAME,
        mime_type: MIME_TYPE,
    })
}
