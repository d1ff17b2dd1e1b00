//! Output formatting and persistence for analysis results.
//!
//! Supports JSON logging, standalone JSON report files, and CSV append of
//! flattened summary rows.

use anyhow::Result;
use tracing::{debug, info};

use crate::analyzers::types::{AnalysisResult, SummaryRow};
use csv::WriterBuilder;
use std::fs::OpenOptions;
use std::path::Path;

/// Logs an analysis result as pretty-printed JSON.
pub fn print_json(result: &AnalysisResult) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

/// Writes an analysis result as a standalone JSON report file.
pub fn write_json(path: &str, result: &AnalysisResult) -> Result<()> {
    let body = serde_json::to_vec_pretty(result)?;
    std::fs::write(path, body)?;
    info!(path, "Report written");
    Ok(())
}

/// Appends a [`SummaryRow`] to a CSV run log.
///
/// Creates the file with headers if it does not already exist.
pub fn append_record(path: &str, row: &SummaryRow) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, "Appending CSV record");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // IMPORTANT when appending
        .from_writer(file);

    writer.serialize(row)?;
    writer.flush()?;

    Ok(())
}
