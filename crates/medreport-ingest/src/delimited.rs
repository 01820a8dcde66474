//! Delimited-text report reading.

use std::fs;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use medreport_model::RawValue;

use crate::error::{IngestError, Result};
use crate::record::RawRecord;
use crate::tabular::collect_record;

/// Candidate delimiters, most common first; comma wins ties.
const CANDIDATE_DELIMITERS: [u8; 4] = [b',', b';', b'\t', b'|'];

/// Read a delimited report and collect it into a raw record.
///
/// The delimiter is sniffed from the first nonempty line, so exports
/// that use regional separators load without configuration. The first
/// row is treated as the header; a file with no rows yields an empty
/// record.
pub fn read_delimited_record(path: &Path) -> Result<RawRecord> {
    let content = fs::read_to_string(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(detect_delimiter(&content))
        .from_reader(content.as_bytes());

    let mut rows: Vec<Vec<RawValue>> = Vec::new();
    for result in reader.records() {
        let row = result.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            message: source.to_string(),
        })?;
        rows.push(row.iter().map(RawValue::text).collect());
    }

    let Some((header_row, data_rows)) = rows.split_first() else {
        return Ok(RawRecord::new());
    };
    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| cell.to_text().unwrap_or_default())
        .collect();
    let record = collect_record(&headers, data_rows);
    debug!(
        rows = data_rows.len(),
        columns = headers.len(),
        fields = record.len(),
        "collected delimited report"
    );
    Ok(record)
}

fn detect_delimiter(content: &str) -> u8 {
    let Some(line) = content.lines().find(|line| !line.trim().is_empty()) else {
        return b',';
    };
    let mut best = b',';
    let mut best_count = 0;
    for candidate in CANDIDATE_DELIMITERS {
        let count = line.bytes().filter(|byte| *byte == candidate).count();
        if count > best_count {
            best = candidate;
            best_count = count;
        }
    }
    best
}
