//! CSV adapter producing [`SourceRecord`] rows.
//!
//! The first CSV line is the header; every later line becomes one record
//! keyed by header name. Short rows are accepted and their missing trailing
//! fields read as empty.

use super::record::SourceRecord;
use super::{ImportError, ImportResult};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Reads all records from a CSV file.
///
/// # Errors
/// - `SourceUnavailable` when the file cannot be opened.
/// - `Csv` when the content cannot be decoded.
pub fn read_csv_file(path: impl AsRef<Path>) -> ImportResult<Vec<SourceRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ImportError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    read_csv(BufReader::new(file))
}

/// Reads all records from any CSV byte stream.
pub fn read_csv<R: Read>(reader: R) -> ImportResult<Vec<SourceRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let mut records = Vec::new();
    for result in rdr.records() {
        let row = result?;
        records.push(headers.iter().zip(row.iter()).collect::<SourceRecord>());
    }
    Ok(records)
}
