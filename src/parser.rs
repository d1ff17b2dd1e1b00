//! CSV parser for survey response exports.

use anyhow::{Context, Result};
use std::collections::HashMap;

/// A parsed survey export: ordered question-ID headers and ordered response
/// rows of raw string cells.
///
/// Row index 0 may be a header-echo artifact (the question text repeated as
/// a data row). The table does not repair it; each consumer handles it per
/// its own contract.
#[derive(Debug)]
pub struct ResponseTable {
    headers: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<Vec<String>>,
}

/// Decodes a CSV survey export from raw bytes.
///
/// The first record is the header row of question IDs. Short rows are padded
/// with empty cells so every row has one cell per header.
///
/// # Errors
///
/// Returns an error if the bytes are not parseable CSV.
pub fn parse_table(bytes: &[u8]) -> Result<ResponseTable> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(bytes);

    let headers: Vec<String> = reader
        .headers()
        .context("survey export has no header row")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let index = headers
        .iter()
        .enumerate()
        .map(|(i, h)| (h.clone(), i))
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.context("survey export has a malformed row")?;
        let mut row: Vec<String> = record.iter().map(|c| c.to_string()).collect();
        row.resize(headers.len(), String::new());
        rows.push(row);
    }

    Ok(ResponseTable {
        headers,
        index,
        rows,
    })
}

impl ResponseTable {
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn has_column(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Iterates a column's cells in row order. `None` if the column is not
    /// in the export.
    pub fn column(&self, id: &str) -> Option<impl Iterator<Item = &str>> {
        let col = *self.index.get(id)?;
        Some(self.rows.iter().map(move |row| row[col].as_str()))
    }

    /// True if every cell in the row is empty after trimming.
    pub fn is_row_empty(&self, row: usize) -> bool {
        self.rows[row].iter().all(|cell| cell.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_input_yields_empty_table() {
        // Headerless empty bytes still parse to an empty header row; the
        // table is just empty, not an error.
        let table = parse_table(b"").unwrap();
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_parse_headers_and_rows() {
        let csv = "QID1,QID2\nAgree,Satisfied\nNeutral,\n";
        let table = parse_table(csv.as_bytes()).unwrap();

        assert_eq!(table.headers(), &["QID1", "QID2"]);
        assert_eq!(table.row_count(), 2);
        assert!(table.has_column("QID1"));
        assert!(!table.has_column("QID99"));
    }

    #[test]
    fn test_column_preserves_row_order() {
        let csv = "QID1\nfirst\nsecond\nthird\n";
        let table = parse_table(csv.as_bytes()).unwrap();

        let cells: Vec<&str> = table.column("QID1").unwrap().collect();
        assert_eq!(cells, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_short_rows_are_padded() {
        let csv = "QID1,QID2,QID3\nAgree\n";
        let table = parse_table(csv.as_bytes()).unwrap();

        let cells: Vec<&str> = table.column("QID3").unwrap().collect();
        assert_eq!(cells, vec![""]);
    }

    #[test]
    fn test_missing_column_is_none() {
        let csv = "QID1\nAgree\n";
        let table = parse_table(csv.as_bytes()).unwrap();
        assert!(table.column("QID2").is_none());
    }

    #[test]
    fn test_is_row_empty() {
        let csv = "QID1,QID2\n , \nAgree,\n";
        let table = parse_table(csv.as_bytes()).unwrap();

        assert!(table.is_row_empty(0));
        assert!(!table.is_row_empty(1));
    }
}
