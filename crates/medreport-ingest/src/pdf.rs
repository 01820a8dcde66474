//! PDF report reading.

use std::path::Path;

use tracing::debug;

use crate::error::{IngestError, Result};
use crate::record::RawRecord;
use crate::text::record_from_text;

/// Extract the text content of a PDF report and parse it into a raw
/// record. Scanned image-only documents extract to empty text and yield
/// an empty record rather than an error; OCR is out of scope.
pub fn read_pdf_record(path: &Path) -> Result<RawRecord> {
    let text = pdf_extract::extract_text(path).map_err(|source| IngestError::Pdf {
        path: path.to_path_buf(),
        message: source.to_string(),
    })?;
    let record = record_from_text(&text);
    debug!(fields = record.len(), "extracted PDF text fields");
    Ok(record)
}
