use std::fs;
use std::path::Path;

use csv::ReaderBuilder;
use thiserror::Error;

use crate::table::Table;

/// Errors that can occur while parsing CSV into a [`Table`].
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input bytes could not be tokenized as CSV.
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),
    /// Failed to read input file.
    #[error("failed to read CSV file: {0}")]
    Io(#[from] std::io::Error),
    /// Structural issue in the CSV document.
    #[error("malformed CSV: {0}")]
    Malformed(String),
}

/// Parse CSV bytes into a [`Table`].
///
/// The first record is the header row. Rows may be ragged; missing
/// trailing cells read back as empty strings through [`Table`] access.
pub fn parse(bytes: &[u8]) -> Result<Table, ParseError> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(bytes);

    let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if columns.is_empty() {
        return Err(ParseError::Malformed("no header row found".to_string()));
    }

    let mut table = Table::new(columns);
    for record in reader.records() {
        let record = record?;
        table.rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(table)
}

/// Parse a CSV file into a [`Table`].
pub fn parse_file(path: &Path) -> Result<Table, ParseError> {
    let bytes = fs::read(path)?;
    parse(&bytes)
}
