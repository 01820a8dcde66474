//! Spreadsheet (XLS/XLSX) report reading.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use tracing::debug;

use medreport_model::RawValue;

use crate::error::{IngestError, Result};
use crate::record::RawRecord;
use crate::tabular::collect_record;

/// Read the first worksheet of a workbook into a raw record. The first
/// row is treated as the header; an empty worksheet yields an empty
/// record, a workbook without worksheets is an error.
pub fn read_spreadsheet_record(path: &Path) -> Result<RawRecord> {
    let mut workbook = open_workbook_auto(path).map_err(|source| IngestError::Spreadsheet {
        path: path.to_path_buf(),
        message: source.to_string(),
    })?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::EmptyWorkbook {
            path: path.to_path_buf(),
        })?
        .map_err(|source| IngestError::Spreadsheet {
            path: path.to_path_buf(),
            message: source.to_string(),
        })?;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Ok(RawRecord::new());
    };
    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| cell_to_raw(cell).to_text().unwrap_or_default())
        .collect();
    let data_rows: Vec<Vec<RawValue>> = rows
        .map(|row| row.iter().map(cell_to_raw).collect())
        .collect();
    let record = collect_record(&headers, &data_rows);
    debug!(
        rows = data_rows.len(),
        columns = headers.len(),
        fields = record.len(),
        "collected worksheet"
    );
    Ok(record)
}

/// Convert a worksheet cell to a raw value. Numeric cells stay numeric
/// so they render without a pandas-style trailing ".0"; booleans become
/// text that the yes/no token sets recognize.
fn cell_to_raw(cell: &Data) -> RawValue {
    match cell {
        Data::Empty | Data::Error(_) => RawValue::Missing,
        Data::String(text) => RawValue::text(text),
        Data::Float(value) => RawValue::Number(*value),
        Data::Int(value) => RawValue::Number(*value as f64),
        Data::Bool(value) => RawValue::Text(if *value { "true" } else { "false" }.to_string()),
        Data::DateTime(value) => RawValue::Number(value.as_f64()),
        Data::DateTimeIso(text) | Data::DurationIso(text) => RawValue::text(text),
    }
}
