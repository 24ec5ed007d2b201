//! CSV export of a record table.
//!
//! ```csv
//! Question,Answer
//! What is Rust?,A systems programming language.
//! "Editions, in order","2015, 2018, 2021"
//! ```

use serde::Serialize;

use crate::error::Result;
use crate::types::{ExportedFile, FlashcardRecord, RecordTable};

pub const FILE_NAME: &str = "flashcards.csv";
pub const MIME_TYPE: &str = "text/csv";

/// Header row written before the records.
pub const HEADER: [&str; 2] = ["Question", "Answer"];

/// One CSV row. Column names come from the header, not the field names.
#[derive(Serialize)]
struct CsvRow<'a> {
    question: &'a str,
    answer: &'a str,
}

impl<'a> From<&'a FlashcardRecord> for CsvRow<'a> {
    fn from(record: &'a FlashcardRecord) -> Self {
        Self {
            question: &record.question,
            answer: &record.answer,
        }
    }
}

/// Write the table as CSV with a `Question,Answer` header.
pub fn to_csv(table: &RecordTable) -> Result<Vec<u8>> {
    let mut buffer = Vec::<u8>::new();
    {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(&mut buffer);

        wtr.write_record(HEADER)?;
        for record in table {
            wtr.serialize(CsvRow::from(record))?;
        }
        wtr.flush()?;
    }

    tracing::debug!(rows = table.len(), bytes = buffer.len(), "wrote csv export");
    Ok(buffer)
}

/// [`to_csv`] wrapped with its download metadata.
pub fn csv_file(table: &RecordTable) -> Result<ExportedFile> {
    Ok(ExportedFile {
        bytes: to_csv(table)?,
        file_name: FILE_NAME,
        mime_type: MIME_TYPE,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use pretty_assertions::assert_eq;

    fn csv_string(input: &str) -> String {
        String::from_utf8(to_csv(&parse(input)).unwrap()).unwrap()
    }

    #[test]
    fn empty_table_is_header_only() {
        assert_eq!(csv_string(""), "Question,Answer\n");
    }

    #[test]
    fn rows_follow_table_order() {
        assert_eq!(csv_string("Q1;A1\nQ2;A2"), "Question,Answer\nQ1,A1\nQ2,A2\n");
    }

    #[test]
    fn quotes_embedded_commas_and_quotes() {
        let out = csv_string("Editions, in order;2015, \"2018\"");
        assert_eq!(out, "Question,Answer\n\"Editions, in order\",\"2015, \"\"2018\"\"\"\n");
    }

    #[test]
    fn reads_back_with_csv_reader() {
        let table = parse("a, b;c\nd;e \"f\"");
        let bytes = to_csv(&table).unwrap();

        let mut rdr = csv::Reader::from_reader(bytes.as_slice());
        let headers = rdr.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), HEADER.to_vec());

        let rows: Vec<(String, String)> = rdr.deserialize().map(|r| r.unwrap()).collect();
        assert_eq!(
            rows,
            vec![
                ("a, b".to_string(), "c".to_string()),
                ("d".to_string(), "e \"f\"".to_string()),
            ]
        );
    }

    #[test]
    fn csv_file_carries_download_metadata() {
        let file = csv_file(&parse("Q;A")).unwrap();
        assert_eq!(file.file_name, "flashcards.csv");
        assert_eq!(file.mime_type, "text/csv");
    }
}
